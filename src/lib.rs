//! chart-coords: coordinate-mapping engine for charts.
//!
//! A [`CoordinateSpace`] maps a rectangular data window onto a rectangular
//! pixel viewport and back, can keep the window's aspect ratio matched to the
//! viewport, enforces zoom limits, and reports every window change as a pan,
//! a zoom, or a rejection. Drawing backends and chart scaffolding sit outside
//! this crate and talk to it through plain value types.

pub mod core;
pub mod error;
pub mod space;
pub mod telemetry;

pub use crate::core::{Box2D, DataPoint, PixelPoint, Point, Rectangle};
pub use error::{ChartError, ChartResult};
pub use space::{CoordinateSpace, CoordinateSpaceConfig, ExtentViolation, WindowChange};
