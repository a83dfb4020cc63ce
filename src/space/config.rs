use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ensure_positive;
use crate::error::{ChartError, ChartResult};

/// Coordinate space behavior.
///
/// Zoom limits are expressed as data-space extents:
/// - `min_zoom` is the largest extent a window may have on either axis
///   (the zoomed-out bound);
/// - `max_zoom` is the smallest extent a window may have on either axis
///   (the zoomed-in bound).
///
/// This type is serializable so hosts can persist it next to their own chart
/// setup.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateSpaceConfig {
    #[serde(default)]
    pub maintain_aspect_ratio: bool,
    #[serde(default)]
    pub min_zoom: Option<f64>,
    #[serde(default)]
    pub max_zoom: Option<f64>,
}

impl CoordinateSpaceConfig {
    /// Keeps the window's aspect ratio equal to the viewport's.
    #[must_use]
    pub fn with_maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = maintain;
        self
    }

    /// Sets the largest allowed window extent.
    #[must_use]
    pub fn with_min_zoom(mut self, limit: Option<f64>) -> Self {
        self.min_zoom = limit;
        self
    }

    /// Sets the smallest allowed window extent.
    #[must_use]
    pub fn with_max_zoom(mut self, limit: Option<f64>) -> Self {
        self.max_zoom = limit;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Some(limit) = self.min_zoom {
            ensure_positive(limit, "min_zoom")?;
        }
        if let Some(limit) = self.max_zoom {
            ensure_positive(limit, "max_zoom")?;
        }
        if let (Some(min_zoom), Some(max_zoom)) = (self.min_zoom, self.max_zoom) {
            if max_zoom > min_zoom {
                return Err(ChartError::InvalidArgument(format!(
                    "max_zoom ({max_zoom}) must not exceed min_zoom ({min_zoom})"
                )));
            }
        }
        Ok(self)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse coordinate space config: {e}"))
        })?;
        let config = config.validate()?;
        debug!(
            maintain_aspect_ratio = config.maintain_aspect_ratio,
            min_zoom = ?config.min_zoom,
            max_zoom = ?config.max_zoom,
            "loaded coordinate space config"
        );
        Ok(config)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize coordinate space config: {e}"))
        })
    }
}
