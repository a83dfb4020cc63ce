use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::CoordinateSpaceConfig;
use super::mapping::pixel_rect;
use crate::core::{Box2D, Rectangle};
use crate::error::{ChartError, ChartResult};

/// Why a proposed window was refused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExtentViolation {
    /// The larger window extent exceeds `min_zoom` (zoomed out too far).
    TooWide { extent: f64, limit: f64 },
    /// The smaller window extent is below `max_zoom` (zoomed in too far).
    TooNarrow { extent: f64, limit: f64 },
}

impl fmt::Display for ExtentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooWide { extent, limit } => {
                write!(f, "largest extent {extent} exceeds zoom-out limit {limit}")
            }
            Self::TooNarrow { extent, limit } => {
                write!(f, "smallest extent {extent} is below zoom-in limit {limit}")
            }
        }
    }
}

/// Outcome of a window assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowChange {
    /// Pixel size unchanged: the window was panned.
    Translate,
    /// Pixel size changed: the window was zoomed.
    Scale,
    /// The window violated a zoom limit and the previous one was restored.
    Rejected(ExtentViolation),
}

impl WindowChange {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// Converts a rejection into [`ChartError::OutOfExtent`] for callers that
    /// prefer `?` propagation.
    pub fn into_result(self) -> ChartResult<Self> {
        match self {
            Self::Rejected(violation) => Err(ChartError::OutOfExtent(violation)),
            accepted => Ok(accepted),
        }
    }
}

/// Checks `window` against the configured zoom limits.
#[must_use]
pub fn check_extent(window: Box2D, config: &CoordinateSpaceConfig) -> Option<ExtentViolation> {
    let largest = window.width().max(window.height());
    let smallest = window.width().min(window.height());

    if let Some(limit) = config.min_zoom {
        if largest > limit {
            return Some(ExtentViolation::TooWide {
                extent: largest,
                limit,
            });
        }
    }
    if let Some(limit) = config.max_zoom {
        if smallest < limit {
            return Some(ExtentViolation::TooNarrow {
                extent: smallest,
                limit,
            });
        }
    }
    None
}

/// Classifies an accepted window change by its rounded pixel size.
///
/// When the sizes cannot be projected (degenerate or overflowing space) the
/// data-space sizes are compared instead.
#[must_use]
pub fn classify_change(viewport: Rectangle, previous: Box2D, next: Box2D) -> WindowChange {
    let before = pixel_rect(viewport, previous, previous);
    let after = pixel_rect(viewport, previous, next);

    let same_size = match (before, after) {
        (Ok(before), Ok(after)) => {
            before.width().round() == after.width().round()
                && before.height().round() == after.height().round()
        }
        _ => previous.width() == next.width() && previous.height() == next.height(),
    };

    if same_size {
        WindowChange::Translate
    } else {
        WindowChange::Scale
    }
}
