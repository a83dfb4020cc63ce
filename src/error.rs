use thiserror::Error;

use crate::space::ExtentViolation;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "degenerate coordinate space: window={window_width}x{window_height}, \
         viewport={viewport_width}x{viewport_height}"
    )]
    DegenerateSpace {
        window_width: f64,
        window_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    },

    #[error("{operation} produced a non-finite result")]
    NonFiniteResult { operation: &'static str },

    #[error("window out of extent: {0}")]
    OutOfExtent(ExtentViolation),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
