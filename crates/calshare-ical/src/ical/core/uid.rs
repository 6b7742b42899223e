//! Event UID generation.

use std::sync::atomic::{AtomicU64, Ordering};

use calshare_core::constants::UID_DOMAIN;
use uuid::Uuid;

/// Source of globally unique event identifiers.
pub trait UidGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers with a fixed `@domain` suffix.
#[derive(Debug, Clone)]
pub struct RandomUidGenerator {
    domain: String,
}

impl RandomUidGenerator {
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Default for RandomUidGenerator {
    fn default() -> Self {
        Self::new(UID_DOMAIN)
    }
}

impl UidGenerator for RandomUidGenerator {
    fn generate(&self) -> String {
        format!("{}@{}", Uuid::new_v4(), self.domain)
    }
}

/// Counter-based identifiers (`<prefix>-<n>@<domain>`) for reproducible output.
#[derive(Debug)]
pub struct SequentialUidGenerator {
    prefix: String,
    domain: String,
    next: AtomicU64,
}

impl SequentialUidGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            domain: domain.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl UidGenerator for SequentialUidGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}@{}", self.prefix, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn random_uids_are_unique() {
        let generator = RandomUidGenerator::default();
        let uids: HashSet<String> = (0..500).map(|_| generator.generate()).collect();
        assert_eq!(uids.len(), 500);
    }

    #[test]
    fn random_uid_shape() {
        let uid = RandomUidGenerator::new("example.org").generate();
        let (token, domain) = uid.split_once('@').unwrap();
        assert_eq!(domain, "example.org");
        assert!(Uuid::parse_str(token).is_ok());
    }

    #[test]
    fn sequential_uids_count_up() {
        let generator = SequentialUidGenerator::new("evt", "test.local");
        assert_eq!(generator.generate(), "evt-1@test.local");
        assert_eq!(generator.generate(), "evt-2@test.local");
    }
}
