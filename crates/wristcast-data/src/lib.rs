//! # Wristcast Data
//!
//! Weather domain model and forecast data provider for Wristcast.
//!
//! This crate defines the forecast record types with their pre-formatted
//! display strings, the provider trait consumed by the screen layer, and
//! the canned data source the companion ships with.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod conditions;
pub mod record;
pub mod source;
pub mod units;

pub use conditions::*;
pub use record::*;
pub use source::*;
pub use units::*;
