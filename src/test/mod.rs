//! Shared fixtures for unit tests
//!
//! Sample enumerated types used across the unit tests of all modules. Integration tests in
//! `tests/` build their own types through the public API.
