//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the calculator's logic and the
//! host application. The core depends only on these traits, never on a
//! concrete storage backend, which keeps the logic testable with
//! hand-written stubs.

mod result_store;

pub use result_store::ResultStore;
