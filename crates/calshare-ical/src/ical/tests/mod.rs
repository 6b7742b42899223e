//! Cross-module tests for the invite codec.
