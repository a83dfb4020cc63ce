use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::point::DataPoint;
use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidArgument(format!("{field_name} cannot be represented as f64"))
    })
}

/// Unix seconds with millisecond precision, used as the x coordinate of
/// time-based series.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

impl DataPoint {
    /// Builds a data point from a timestamp (x) and a decimal value (y).
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Self::try_new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(value, "value")?,
        )
    }

    /// Builds a data point from two decimal coordinates.
    pub fn from_decimals(x: Decimal, y: Decimal) -> ChartResult<Self> {
        Self::try_new(decimal_to_f64(x, "x")?, decimal_to_f64(y, "y")?)
    }
}
