//! # Wristcast Graphs
//!
//! Sparkline pipeline for Wristcast.
//!
//! The [`mapper::GraphCoordinateMapper`] normalizes an ordered
//! temperature series into canvas coordinates; the
//! [`renderer::SparklineRenderer`] strokes the mapped points into an
//! offscreen buffer and encodes PNG bytes for the screen layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod mapper;
pub mod renderer;
pub mod types;

pub use mapper::*;
pub use renderer::*;
pub use types::*;
