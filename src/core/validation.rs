use super::bounds::Bounds;
use super::units::Unit;
use crate::error::{ChartError, ChartResult};

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(value: f64, field: &str) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidArgument(format!(
            "{field} must be finite, got {value}"
        )));
    }
    Ok(value)
}

/// Rejects non-finite and negative values.
pub(crate) fn ensure_non_negative(value: f64, field: &str) -> ChartResult<f64> {
    let value = ensure_finite(value, field)?;
    if value < 0.0 {
        return Err(ChartError::InvalidArgument(format!(
            "{field} must be >= 0, got {value}"
        )));
    }
    Ok(value)
}

/// Rejects non-finite, zero and negative values.
pub(crate) fn ensure_positive(value: f64, field: &str) -> ChartResult<f64> {
    let value = ensure_finite(value, field)?;
    if value <= 0.0 {
        return Err(ChartError::InvalidArgument(format!(
            "{field} must be > 0, got {value}"
        )));
    }
    Ok(value)
}

/// Rejects a computed value that overflowed or went NaN.
pub(crate) fn ensure_finite_result(value: f64, operation: &'static str) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::NonFiniteResult { operation });
    }
    Ok(value)
}

/// Rejects bounds that are non-finite or whose width or height overflows.
pub(crate) fn ensure_finite_bounds<U: Unit>(bounds: Bounds<U>) -> ChartResult<Bounds<U>> {
    if !bounds.is_finite() {
        return Err(ChartError::InvalidArgument(format!(
            "{} bounds must be finite with a finite extent, got x=[{}, {}] y=[{}, {}]",
            U::NAME,
            bounds.x_min,
            bounds.x_max,
            bounds.y_min,
            bounds.y_max
        )));
    }
    Ok(bounds)
}
