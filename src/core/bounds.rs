use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::units::Unit;
use super::validation::ensure_finite_bounds;
use crate::error::ChartResult;

/// Axis-aligned box tagged with its unit.
///
/// Both axes are stored as independent `(min, max)` pairs; size and center
/// are always derived on read so they can never fall out of sync with the
/// bounds. Unit-specific constructors and setters live in
/// [`box2d`](super::box2d) (data space) and [`rectangle`](super::rectangle)
/// (pixel space).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<U> {
    pub(crate) x_min: f64,
    pub(crate) x_max: f64,
    pub(crate) y_min: f64,
    pub(crate) y_max: f64,
    #[serde(skip)]
    unit: PhantomData<U>,
}

impl<U: Unit> Bounds<U> {
    pub(crate) const fn from_raw(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            unit: PhantomData,
        }
    }

    #[must_use]
    pub fn x_min(self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(self) -> f64 {
        self.y_max
    }

    /// `|x_max - x_min|`.
    #[must_use]
    pub fn width(self) -> f64 {
        (self.x_max - self.x_min).abs()
    }

    /// `|y_max - y_min|`.
    #[must_use]
    pub fn height(self) -> f64 {
        (self.y_max - self.y_min).abs()
    }

    #[must_use]
    pub fn x_center(self) -> f64 {
        self.x_min + self.width() / 2.0
    }

    #[must_use]
    pub fn y_center(self) -> f64 {
        self.y_min + self.height() / 2.0
    }

    /// Returns `true` when either extent is zero.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Returns `false` only when the boxes are disjoint on either axis.
    ///
    /// Boxes that share an edge intersect.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        !(other.x_min > self.x_max
            || other.x_max < self.x_min
            || other.y_min > self.y_max
            || other.y_max < self.y_min)
    }

    /// Returns `true` when `other` lies within `self`, inclusive on all bounds.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.x_min >= self.x_min
            && other.x_max <= self.x_max
            && other.y_min >= self.y_min
            && other.y_max <= self.y_max
    }

    /// Smallest box covering both `self` and `other`.
    ///
    /// Fails when the covering extent overflows `f64`.
    pub fn union(self, other: Self) -> ChartResult<Self> {
        ensure_finite_bounds(Self::from_raw(
            self.x_min.min(other.x_min),
            self.x_max.max(other.x_max),
            self.y_min.min(other.y_min),
            self.y_max.max(other.y_max),
        ))
    }

    /// All four bounds and both extents are finite. Centers then are too.
    pub(crate) fn is_finite(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.width().is_finite()
            && self.height().is_finite()
    }

    /// Replaces `self` with `next` only when `next` passes the finiteness check.
    pub(crate) fn commit(&mut self, next: Self) -> ChartResult<()> {
        *self = ensure_finite_bounds(next)?;
        Ok(())
    }
}
