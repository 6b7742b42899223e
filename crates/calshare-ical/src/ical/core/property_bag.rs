//! Allow-listed property storage shared by every component.

/// How many values a property may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// At most one value; a later write replaces the earlier one.
    Unary,
    /// Any number of values; later writes append.
    Multi,
}

/// Immutable allow-list of property names for one component type.
///
/// Declaration order is the order properties are emitted in.
#[derive(Debug, PartialEq, Eq)]
pub struct PropertySchema {
    component: &'static str,
    entries: &'static [(&'static str, Cardinality)],
}

impl PropertySchema {
    /// Creates a schema for the named component.
    #[must_use]
    pub const fn new(
        component: &'static str,
        entries: &'static [(&'static str, Cardinality)],
    ) -> Self {
        Self { component, entries }
    }

    /// Returns the component this schema belongs to.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        self.component
    }

    /// Returns the index of `name` in the allow-list (case-insensitive).
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(entry, _)| entry.eq_ignore_ascii_case(name))
    }

    /// Returns the cardinality of `name`, or `None` if it is not allowed.
    #[must_use]
    pub fn cardinality(&self, name: &str) -> Option<Cardinality> {
        self.position(name).map(|i| self.entries[i].1)
    }

    /// Returns whether `name` is on the allow-list.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterates the allowed names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Ordered name/value store restricted to a [`PropertySchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBag {
    schema: &'static PropertySchema,
    // One slot per schema entry; unary slots hold at most one value
    slots: Vec<Vec<String>>,
}

impl PropertyBag {
    /// Creates an empty bag for the given schema.
    #[must_use]
    pub fn new(schema: &'static PropertySchema) -> Self {
        Self {
            schema,
            slots: vec![Vec::new(); schema.entries.len()],
        }
    }

    /// Returns the schema backing this bag.
    #[must_use]
    pub const fn schema(&self) -> &'static PropertySchema {
        self.schema
    }

    /// Stores `value` under `name`.
    ///
    /// Returns `false` and leaves the bag untouched when `name` is not on the allow-list
    /// or `value` is empty. Unary names overwrite, multi-valued names append.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(index) = self.schema.position(name) else {
            tracing::trace!(
                component = self.schema.component,
                name,
                "Rejected property outside allow-list"
            );
            return false;
        };

        let value = value.into();
        if value.is_empty() {
            tracing::trace!(
                component = self.schema.component,
                name,
                "Rejected empty property value"
            );
            return false;
        }

        let slot = &mut self.slots[index];
        match self.schema.entries[index].1 {
            Cardinality::Unary => {
                slot.clear();
                slot.push(value);
            }
            Cardinality::Multi => slot.push(value),
        }
        true
    }

    /// Returns the first value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value stored under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        match self.schema.position(name) {
            Some(index) => self.slots[index].as_slice(),
            None => &[],
        }
    }

    /// Returns whether a value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Returns whether no value is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Iterates `(name, value)` pairs in schema declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.schema
            .entries
            .iter()
            .zip(&self.slots)
            .flat_map(|((name, _), values)| values.iter().map(move |v| (*name, v.as_str())))
    }
}
