//! Port for the current time.
//!
//! Publication queries are evaluated against an explicit point-in-time
//! value rather than the wall clock directly, so tests can pin `now`
//! and exercise the window boundaries deterministically.

use chrono::{DateTime, Utc};

/// Port providing the current timezone-aware time.
///
/// Implementations live in the infrastructure layer: a system clock for
/// production and a fixed clock for deterministic runs and tests.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}
