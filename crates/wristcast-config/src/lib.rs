//! # Wristcast Config
//!
//! Type-safe configuration management and preference persistence for Wristcast.
//!
//! This crate provides configuration loading, validation, and the
//! preference store that persists the selected unit system.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod preferences;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use preferences::*;
pub use schema::*;
pub use validator::*;
