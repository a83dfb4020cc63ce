//! Coordinate space: a pixel viewport, a data window, and the mapping
//! between them.

mod aspect;
mod config;
mod extent;
pub mod mapping;
mod navigation;
mod projection;
mod snapshot;

pub use aspect::fit_window_to_viewport;
pub use config::CoordinateSpaceConfig;
pub use extent::{ExtentViolation, WindowChange, check_extent, classify_change};
pub use snapshot::{
    COORDINATE_SPACE_SNAPSHOT_JSON_SCHEMA_V1, CoordinateSpaceSnapshot,
    CoordinateSpaceSnapshotJsonContractV1,
};

use tracing::debug;

use crate::core::{Box2D, DataPoint, PixelPoint, Rectangle};
use crate::error::ChartResult;

/// Maps a data window onto a pixel viewport and back.
///
/// The space owns its viewport and windows outright: getters return copies
/// and setters take their argument by value, so nothing outside can alias
/// the internal state.
///
/// Every window assignment goes through [`CoordinateSpace::set_window`],
/// which applies the aspect fit, enforces zoom limits, and reports whether
/// the change was a pan or a zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSpace {
    viewport: Rectangle,
    window: Box2D,
    previous_window: Box2D,
    config: CoordinateSpaceConfig,
}

impl Default for CoordinateSpace {
    fn default() -> Self {
        Self {
            viewport: Rectangle::default(),
            window: Box2D::default(),
            previous_window: Box2D::default(),
            config: CoordinateSpaceConfig::default(),
        }
    }
}

impl CoordinateSpace {
    /// Creates a space with an empty viewport and the default window.
    pub fn new(config: CoordinateSpaceConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> CoordinateSpaceConfig {
        self.config
    }

    /// Replaces the config and re-fits the window when aspect ratio is kept.
    ///
    /// Zoom limits apply from the next window assignment on; the current
    /// window is not re-checked.
    pub fn set_config(&mut self, config: CoordinateSpaceConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        if self.config.maintain_aspect_ratio {
            self.window = fit_window_to_viewport(self.window, self.viewport);
        }
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Rectangle {
        self.viewport
    }

    /// Installs a new viewport, typically after a drawing-surface resize.
    ///
    /// Rectangles that skipped the constructors (for example deserialized
    /// ones) are validated first; an invalid one leaves the space unchanged.
    pub fn set_viewport(&mut self, viewport: Rectangle) -> ChartResult<()> {
        let viewport = viewport.validate()?;
        debug!(
            x = viewport.x(),
            y = viewport.y(),
            width = viewport.width(),
            height = viewport.height(),
            "set viewport"
        );
        self.viewport = viewport;
        if self.config.maintain_aspect_ratio {
            self.window = fit_window_to_viewport(self.window, self.viewport);
        }
        Ok(())
    }

    #[must_use]
    pub fn window(&self) -> Box2D {
        self.window
    }

    /// Window that was current before the last [`set_window`](Self::set_window).
    #[must_use]
    pub fn previous_window(&self) -> Box2D {
        self.previous_window
    }

    /// Proposes a new window.
    ///
    /// The window is aspect-fitted (when enabled) and checked against the
    /// zoom limits. A violating window is dropped, the previous window is
    /// restored, and [`WindowChange::Rejected`] is returned. Otherwise the
    /// window is committed and classified as [`WindowChange::Translate`] when
    /// its rounded pixel size is unchanged, or [`WindowChange::Scale`].
    pub fn set_window(&mut self, window: Box2D) -> WindowChange {
        let previous = self.window;
        self.previous_window = previous;

        let proposed = self.apply_aspect(window);
        if let Some(violation) = check_extent(proposed, &self.config) {
            self.window = self.apply_aspect(previous);
            debug!(%violation, "window rejected, previous window restored");
            return WindowChange::Rejected(violation);
        }

        self.window = proposed;
        let change = classify_change(self.viewport, previous, proposed);
        debug!(
            x_min = proposed.x_min(),
            y_min = proposed.y_min(),
            x_max = proposed.x_max(),
            y_max = proposed.y_max(),
            ?change,
            "window committed"
        );
        change
    }

    /// Applies the aspect fit to the current window regardless of config.
    pub fn fit_window_to_viewport(&mut self) {
        self.window = fit_window_to_viewport(self.window, self.viewport);
    }

    fn apply_aspect(&self, window: Box2D) -> Box2D {
        if self.config.maintain_aspect_ratio {
            fit_window_to_viewport(window, self.viewport)
        } else {
            window
        }
    }

    pub fn pixel_x(&self, data_x: f64) -> ChartResult<f64> {
        mapping::pixel_x(self.viewport, self.window, data_x)
    }

    pub fn pixel_y(&self, data_y: f64) -> ChartResult<f64> {
        mapping::pixel_y(self.viewport, self.window, data_y)
    }

    pub fn pixel_width(&self, data_width: f64) -> ChartResult<f64> {
        mapping::pixel_width(self.viewport, self.window, data_width)
    }

    pub fn pixel_height(&self, data_height: f64) -> ChartResult<f64> {
        mapping::pixel_height(self.viewport, self.window, data_height)
    }

    pub fn pixel_point(&self, point: DataPoint) -> ChartResult<PixelPoint> {
        mapping::pixel_point(self.viewport, self.window, point)
    }

    pub fn pixel_rect(&self, data: Box2D) -> ChartResult<Rectangle> {
        mapping::pixel_rect(self.viewport, self.window, data)
    }

    pub fn data_x(&self, pixel_x: f64) -> ChartResult<f64> {
        mapping::data_x(self.viewport, self.window, pixel_x)
    }

    pub fn data_y(&self, pixel_y: f64) -> ChartResult<f64> {
        mapping::data_y(self.viewport, self.window, pixel_y)
    }

    pub fn data_width(&self, pixel_width: f64) -> ChartResult<f64> {
        mapping::data_width(self.viewport, self.window, pixel_width)
    }

    pub fn data_height(&self, pixel_height: f64) -> ChartResult<f64> {
        mapping::data_height(self.viewport, self.window, pixel_height)
    }

    pub fn data_point(&self, point: PixelPoint) -> ChartResult<DataPoint> {
        mapping::data_point(self.viewport, self.window, point)
    }

    pub fn data_box(&self, rect: Rectangle) -> ChartResult<Box2D> {
        mapping::data_box(self.viewport, self.window, rect)
    }
}
