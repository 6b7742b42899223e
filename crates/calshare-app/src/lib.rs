//! File-level plumbing around the invite codec: building invites from event data,
//! naming and writing invite files, and reading shared files back.

pub mod error;
pub mod invite;
pub mod report;
pub mod store;
