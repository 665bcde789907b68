//! Screen view-models for the watch UI.

pub mod detail;
pub mod forecast;

pub use detail::*;
pub use forecast::*;
