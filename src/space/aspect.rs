use tracing::trace;

use crate::core::{Box2D, Rectangle};

/// Grows one axis of `window` so its aspect ratio matches `viewport`.
///
/// With `sx = window.width / viewport.width` and
/// `sy = window.height / viewport.height`, the axis with the smaller ratio is
/// widened around its center until both ratios are equal; the other axis is
/// untouched. The larger of the two data extents is therefore always kept.
///
/// A degenerate viewport or window is returned unchanged, and so is any
/// window whose fitted extent would overflow `f64`.
#[must_use]
pub fn fit_window_to_viewport(window: Box2D, viewport: Rectangle) -> Box2D {
    if viewport.is_degenerate() || window.is_degenerate() {
        trace!(
            viewport_width = viewport.width(),
            viewport_height = viewport.height(),
            window_width = window.width(),
            window_height = window.height(),
            "skip aspect fit on degenerate space"
        );
        return window;
    }

    let sx = window.width() / viewport.width();
    let sy = window.height() / viewport.height();

    let mut fitted = window;
    if sy > sx {
        let new_width = (viewport.width() / viewport.height()) * window.height();
        fitted.x_min = window.x_min() - (new_width - window.width()) / 2.0;
        fitted.x_max = fitted.x_min + new_width;
    } else if sx > sy {
        let new_height = (viewport.height() / viewport.width()) * window.width();
        fitted.y_min = window.y_min() - (new_height - window.height()) / 2.0;
        fitted.y_max = fitted.y_min + new_height;
    }

    if !fitted.is_finite() {
        trace!(
            viewport_width = viewport.width(),
            viewport_height = viewport.height(),
            window_width = window.width(),
            window_height = window.height(),
            "skip aspect fit with overflowing extent"
        );
        return window;
    }
    fitted
}
