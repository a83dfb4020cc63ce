//! Data ↔ pixel mapping between a window and a viewport.
//!
//! These functions are pure: they read a viewport [`Rectangle`] and a window
//! [`Box2D`] and never mutate either. [`CoordinateSpace`](super::CoordinateSpace)
//! delegates to them with its current state.
//!
//! Sizes short-circuit: a zero width or height maps to zero regardless of
//! the space, so drawing code can pass empty extents through unchecked. Any
//! other mapping on an axis whose window or viewport extent is zero fails
//! with [`ChartError::DegenerateSpace`]. A result that overflows `f64` fails
//! with [`ChartError::NonFiniteResult`].

use crate::core::{
    Box2D, DataPoint, PixelPoint, Rectangle, ensure_finite, ensure_finite_result,
    ensure_non_negative,
};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

fn ensure_axis(viewport: Rectangle, window: Box2D, axis: Axis) -> ChartResult<()> {
    let (window_extent, viewport_extent) = match axis {
        Axis::X => (window.width(), viewport.width()),
        Axis::Y => (window.height(), viewport.height()),
    };
    if window_extent == 0.0 || viewport_extent == 0.0 {
        return Err(degenerate(viewport, window));
    }
    Ok(())
}

fn degenerate(viewport: Rectangle, window: Box2D) -> ChartError {
    ChartError::DegenerateSpace {
        window_width: window.width(),
        window_height: window.height(),
        viewport_width: viewport.width(),
        viewport_height: viewport.height(),
    }
}

pub fn pixel_x(viewport: Rectangle, window: Box2D, data_x: f64) -> ChartResult<f64> {
    let data_x = ensure_finite(data_x, "data x")?;
    ensure_axis(viewport, window, Axis::X)?;
    ensure_finite_result(
        viewport.x() + ((data_x - window.x_min()) / window.width()) * viewport.width(),
        "pixel x",
    )
}

/// Maps a data y to pixel y, flipping the axis so `window.y_min` lands on the
/// viewport's bottom edge.
pub fn pixel_y(viewport: Rectangle, window: Box2D, data_y: f64) -> ChartResult<f64> {
    let data_y = ensure_finite(data_y, "data y")?;
    ensure_axis(viewport, window, Axis::Y)?;
    ensure_finite_result(
        viewport.y() + viewport.height()
            - ((data_y - window.y_min()) / window.height()) * viewport.height(),
        "pixel y",
    )
}

pub fn pixel_width(viewport: Rectangle, window: Box2D, data_width: f64) -> ChartResult<f64> {
    let data_width = ensure_non_negative(data_width, "data width")?;
    if data_width == 0.0 {
        return Ok(0.0);
    }
    ensure_axis(viewport, window, Axis::X)?;
    ensure_finite_result((data_width / window.width()) * viewport.width(), "pixel width")
}

pub fn pixel_height(viewport: Rectangle, window: Box2D, data_height: f64) -> ChartResult<f64> {
    let data_height = ensure_non_negative(data_height, "data height")?;
    if data_height == 0.0 {
        return Ok(0.0);
    }
    ensure_axis(viewport, window, Axis::Y)?;
    ensure_finite_result(
        (data_height / window.height()) * viewport.height(),
        "pixel height",
    )
}

pub fn pixel_point(viewport: Rectangle, window: Box2D, point: DataPoint) -> ChartResult<PixelPoint> {
    Ok(PixelPoint::new(
        pixel_x(viewport, window, point.x())?,
        pixel_y(viewport, window, point.y())?,
    ))
}

/// Maps a data box to the pixel rectangle it covers.
///
/// The rectangle's top edge comes from `data.y_max` because the y axis flips.
pub fn pixel_rect(viewport: Rectangle, window: Box2D, data: Box2D) -> ChartResult<Rectangle> {
    Rectangle::new(
        pixel_x(viewport, window, data.x_min())?,
        pixel_y(viewport, window, data.y_max())?,
        pixel_width(viewport, window, data.width())?,
        pixel_height(viewport, window, data.height())?,
    )
}

pub fn data_x(viewport: Rectangle, window: Box2D, pixel_x: f64) -> ChartResult<f64> {
    let pixel_x = ensure_finite(pixel_x, "pixel x")?;
    ensure_axis(viewport, window, Axis::X)?;
    ensure_finite_result(
        window.x_min() + ((pixel_x - viewport.x()) / viewport.width()) * window.width(),
        "data x",
    )
}

pub fn data_y(viewport: Rectangle, window: Box2D, pixel_y: f64) -> ChartResult<f64> {
    let pixel_y = ensure_finite(pixel_y, "pixel y")?;
    ensure_axis(viewport, window, Axis::Y)?;
    ensure_finite_result(
        window.y_min()
            + ((viewport.y() + viewport.height() - pixel_y) / viewport.height()) * window.height(),
        "data y",
    )
}

pub fn data_width(viewport: Rectangle, window: Box2D, pixel_width: f64) -> ChartResult<f64> {
    let pixel_width = ensure_non_negative(pixel_width, "pixel width")?;
    if pixel_width == 0.0 {
        return Ok(0.0);
    }
    ensure_axis(viewport, window, Axis::X)?;
    ensure_finite_result((pixel_width / viewport.width()) * window.width(), "data width")
}

pub fn data_height(viewport: Rectangle, window: Box2D, pixel_height: f64) -> ChartResult<f64> {
    let pixel_height = ensure_non_negative(pixel_height, "pixel height")?;
    if pixel_height == 0.0 {
        return Ok(0.0);
    }
    ensure_axis(viewport, window, Axis::Y)?;
    ensure_finite_result(
        (pixel_height / viewport.height()) * window.height(),
        "data height",
    )
}

pub fn data_point(viewport: Rectangle, window: Box2D, point: PixelPoint) -> ChartResult<DataPoint> {
    Ok(DataPoint::new(
        data_x(viewport, window, point.x())?,
        data_y(viewport, window, point.y())?,
    ))
}

/// Maps a pixel rectangle back to the data box it covers.
pub fn data_box(viewport: Rectangle, window: Box2D, rect: Rectangle) -> ChartResult<Box2D> {
    let x_min = data_x(viewport, window, rect.x())?;
    let y_max = data_y(viewport, window, rect.y())?;
    let width = data_width(viewport, window, rect.width())?;
    let height = data_height(viewport, window, rect.height())?;
    Box2D::new(x_min, y_max - height, x_min + width, y_max)
}
