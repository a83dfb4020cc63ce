use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::units::{DataSpace, PixelSpace, Unit};
use super::validation::ensure_finite;
use crate::error::ChartResult;

/// 2D coordinate pair tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point<U> {
    x: f64,
    y: f64,
    #[serde(skip)]
    unit: PhantomData<U>,
}

/// Point in data space.
pub type DataPoint = Point<DataSpace>;

/// Point in pixel space.
pub type PixelPoint = Point<PixelSpace>;

impl<U: Unit> Point<U> {
    /// Creates a point without validation.
    ///
    /// Intended for literals; use [`Point::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            unit: PhantomData,
        }
    }

    pub fn try_new(x: f64, y: f64) -> ChartResult<Self> {
        Ok(Self::new(ensure_finite(x, "point x")?, ensure_finite(y, "point y")?))
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) -> ChartResult<()> {
        self.x = ensure_finite(x, "point x")?;
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> ChartResult<()> {
        self.y = ensure_finite(y, "point y")?;
        Ok(())
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        ensure_finite(self.x, "point x")?;
        ensure_finite(self.y, "point y")?;
        Ok(self)
    }
}
