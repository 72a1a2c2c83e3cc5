//! Result store port
//!
//! Defines the interface for persisting computed sums.

/// Persistence backend for calculation results
///
/// Implementations decide where and how a result is recorded (database,
/// file, network service). The calculator only invokes [`save`] and never
/// inspects or manages the backend's state.
///
/// Errors returned by [`save`] are not caught by the calculator; they
/// propagate unchanged to the caller of `add`. Implementations shared
/// between threads must be safe for concurrent invocation, the calculator
/// imposes no locking of its own.
///
/// [`save`]: ResultStore::save
pub trait ResultStore: Send + Sync {
    /// Record a computed sum
    fn save(&self, value: i64) -> anyhow::Result<()>;
}
