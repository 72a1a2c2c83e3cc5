//! Core domain logic for tally
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `services/` - The calculator and its primality helper
//! - `ports/` - Trait definitions for external dependencies

pub mod ports;
pub mod services;
