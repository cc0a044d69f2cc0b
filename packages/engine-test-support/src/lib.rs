//! Engine test support utilities
//!
//! Shared helpers for the spider engine's unit and integration tests.
//! Currently this is the unified logging initialization.

pub mod logging;
