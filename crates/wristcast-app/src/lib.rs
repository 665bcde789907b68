//! # Wristcast App
//!
//! View-binding layer of the Wristcast weather companion.
//!
//! The forecast and detail screen view-models bind display strings from
//! the weather provider; the typed navigation context carries the
//! provider and selected record index across the screen boundary; and
//! [`app::WristcastApp`] owns the provider, preference store, and unit
//! toggle actions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod navigation;
pub mod screens;

pub use app::*;
pub use navigation::*;
pub use screens::*;
