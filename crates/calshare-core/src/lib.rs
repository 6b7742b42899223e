//! Shared building blocks for the calshare workspace: constants, configuration,
//! and the core error type.

pub mod config;
pub mod constants;
pub mod error;
