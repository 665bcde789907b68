//! # Wristcast Common
//!
//! Shared types, utilities, and common functionality for Wristcast.
//!
//! This crate provides the foundational error type, logging bootstrap,
//! and test utilities used across all other crates in the Wristcast
//! workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;
