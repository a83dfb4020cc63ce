use tracing::trace;

use super::{CoordinateSpace, WindowChange};
use crate::core::{Box2D, DataPoint, PixelPoint, ensure_positive};
use crate::error::ChartResult;

/// Span given to a flat axis when fitting to data.
const FLAT_AXIS_SPAN: f64 = 1.0;

impl CoordinateSpace {
    /// Pans the window by a pointer drag expressed in pixels.
    ///
    /// Dragging right moves the window left in data space and dragging down
    /// moves it up, so the content follows the pointer.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) -> ChartResult<WindowChange> {
        let data_dx = self.signed_data_width(dx)?;
        let data_dy = self.signed_data_height(dy)?;
        trace!(dx, dy, data_dx, data_dy, "pan by pixels");
        let next = self.window.translated(-data_dx, data_dy)?;
        Ok(self.set_window(next))
    }

    /// Zooms the window around a pixel anchor.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. The data point
    /// under the anchor stays under it.
    pub fn zoom_around_pixel(
        &mut self,
        factor: f64,
        anchor_x: f64,
        anchor_y: f64,
    ) -> ChartResult<WindowChange> {
        let factor = ensure_positive(factor, "zoom factor")?;
        let anchor = self.data_point(PixelPoint::try_new(anchor_x, anchor_y)?)?;
        trace!(factor, anchor_x, anchor_y, "zoom around pixel");
        let next = self.window.scaled_about(1.0 / factor, anchor)?;
        Ok(self.set_window(next))
    }

    /// Installs the bounding box of `points` as the window.
    ///
    /// A flat axis (all points share a coordinate) is widened to a unit span
    /// around that coordinate so the resulting space stays mappable.
    pub fn fit_to_points(&mut self, points: &[DataPoint]) -> ChartResult<WindowChange> {
        let mut bounds = Box2D::from_points(points)?;
        if bounds.width() == 0.0 {
            bounds.set_x_min(bounds.x_min() - FLAT_AXIS_SPAN / 2.0)?;
            bounds.set_width(FLAT_AXIS_SPAN)?;
        }
        if bounds.height() == 0.0 {
            bounds.set_y_min(bounds.y_min() - FLAT_AXIS_SPAN / 2.0)?;
            bounds.set_height(FLAT_AXIS_SPAN)?;
        }
        Ok(self.set_window(bounds))
    }

    fn signed_data_width(&self, pixels: f64) -> ChartResult<f64> {
        Ok(self.data_width(pixels.abs())?.copysign(pixels))
    }

    fn signed_data_height(&self, pixels: f64) -> ChartResult<f64> {
        Ok(self.data_height(pixels.abs())?.copysign(pixels))
    }
}
