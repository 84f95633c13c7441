//! Engine test support utilities
//!
//! This crate provides utilities for testing the game engine, currently
//! unified logging initialization for integration tests.

pub mod test_logging;
