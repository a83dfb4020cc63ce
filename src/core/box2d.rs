use super::bounds::Bounds;
use super::point::DataPoint;
use super::units::DataSpace;
use super::validation::{ensure_finite, ensure_finite_bounds, ensure_non_negative, ensure_positive};
use crate::error::{ChartError, ChartResult};

/// Axis-aligned box in data space (y increasing upward).
///
/// Each axis can be driven either through its bounds (`min`/`max`) or through
/// its center and size. Setting a bound keeps the opposite bound; setting the
/// size keeps `min`; setting the center keeps the size. Constructors and
/// setters reject any result whose width or height overflows `f64`, leaving
/// the box unchanged.
pub type Box2D = Bounds<DataSpace>;

impl Default for Box2D {
    fn default() -> Self {
        Self::from_raw(0.0, 100.0, 0.0, 100.0)
    }
}

impl Box2D {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> ChartResult<Self> {
        ensure_finite_bounds(Self::from_raw(
            ensure_finite(x_min, "x_min")?,
            ensure_finite(x_max, "x_max")?,
            ensure_finite(y_min, "y_min")?,
            ensure_finite(y_max, "y_max")?,
        ))
    }

    /// Creates a box from its center and non-negative size.
    pub fn from_center(
        x_center: f64,
        y_center: f64,
        width: f64,
        height: f64,
    ) -> ChartResult<Self> {
        let x_center = ensure_finite(x_center, "x_center")?;
        let y_center = ensure_finite(y_center, "y_center")?;
        let width = ensure_non_negative(width, "width")?;
        let height = ensure_non_negative(height, "height")?;
        ensure_finite_bounds(Self::from_raw(
            x_center - width / 2.0,
            x_center + width / 2.0,
            y_center - height / 2.0,
            y_center + height / 2.0,
        ))
    }

    /// Bounding box of a set of data points.
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        let Some((first, rest)) = points.split_first() else {
            return Err(ChartError::InvalidArgument(
                "bounding box cannot be built from empty data".to_owned(),
            ));
        };

        let first = first.validate()?;
        let mut out = Self::from_raw(first.x(), first.x(), first.y(), first.y());
        for point in rest {
            let point = point.validate()?;
            out.x_min = out.x_min.min(point.x());
            out.x_max = out.x_max.max(point.x());
            out.y_min = out.y_min.min(point.y());
            out.y_max = out.y_max.max(point.y());
        }
        ensure_finite_bounds(out)
    }

    pub fn set_x_min(&mut self, x_min: f64) -> ChartResult<()> {
        let mut next = *self;
        next.x_min = ensure_finite(x_min, "x_min")?;
        self.commit(next)
    }

    pub fn set_x_max(&mut self, x_max: f64) -> ChartResult<()> {
        let mut next = *self;
        next.x_max = ensure_finite(x_max, "x_max")?;
        self.commit(next)
    }

    /// Moves the x center, holding the width.
    pub fn set_x_center(&mut self, x_center: f64) -> ChartResult<()> {
        let x_center = ensure_finite(x_center, "x_center")?;
        let half = self.width() / 2.0;
        let mut next = *self;
        next.x_min = x_center - half;
        next.x_max = x_center + half;
        self.commit(next)
    }

    /// Resizes the x axis from `x_min`.
    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        let width = ensure_non_negative(width, "width")?;
        let mut next = *self;
        next.x_max = self.x_min + width;
        self.commit(next)
    }

    pub fn set_y_min(&mut self, y_min: f64) -> ChartResult<()> {
        let mut next = *self;
        next.y_min = ensure_finite(y_min, "y_min")?;
        self.commit(next)
    }

    pub fn set_y_max(&mut self, y_max: f64) -> ChartResult<()> {
        let mut next = *self;
        next.y_max = ensure_finite(y_max, "y_max")?;
        self.commit(next)
    }

    /// Moves the y center, holding the height.
    pub fn set_y_center(&mut self, y_center: f64) -> ChartResult<()> {
        let y_center = ensure_finite(y_center, "y_center")?;
        let half = self.height() / 2.0;
        let mut next = *self;
        next.y_min = y_center - half;
        next.y_max = y_center + half;
        self.commit(next)
    }

    /// Resizes the y axis from `y_min`.
    pub fn set_height(&mut self, height: f64) -> ChartResult<()> {
        let height = ensure_non_negative(height, "height")?;
        let mut next = *self;
        next.y_max = self.y_min + height;
        self.commit(next)
    }

    #[must_use]
    pub fn center(self) -> DataPoint {
        DataPoint::new(self.x_center(), self.y_center())
    }

    /// Returns a copy shifted by a data-space delta.
    pub fn translated(self, dx: f64, dy: f64) -> ChartResult<Self> {
        let dx = ensure_finite(dx, "translate dx")?;
        let dy = ensure_finite(dy, "translate dy")?;
        Self::new(
            self.x_min + dx,
            self.y_min + dy,
            self.x_max + dx,
            self.y_max + dy,
        )
    }

    /// Returns a copy whose extents are multiplied by `factor`, keeping
    /// `anchor` at the same relative position inside the box.
    pub fn scaled_about(self, factor: f64, anchor: DataPoint) -> ChartResult<Self> {
        let factor = ensure_positive(factor, "scale factor")?;
        let anchor = anchor.validate()?;
        Self::new(
            anchor.x() + (self.x_min - anchor.x()) * factor,
            anchor.y() + (self.y_min - anchor.y()) * factor,
            anchor.x() + (self.x_max - anchor.x()) * factor,
            anchor.y() + (self.y_max - anchor.y()) * factor,
        )
    }

    /// Checks bounds deserialized from untrusted input.
    pub fn validate(self) -> ChartResult<Self> {
        ensure_finite_bounds(self)
    }
}
