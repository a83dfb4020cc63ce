use super::bounds::Bounds;
use super::point::PixelPoint;
use super::units::PixelSpace;
use super::validation::{ensure_finite, ensure_finite_bounds, ensure_non_negative};
use crate::error::{ChartError, ChartResult};

/// Axis-aligned box in pixel space: origin top-left, y increasing downward.
pub type Rectangle = Bounds<PixelSpace>;

impl Default for Rectangle {
    fn default() -> Self {
        Self::from_raw(0.0, 0.0, 0.0, 0.0)
    }
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> ChartResult<Self> {
        let x = ensure_finite(x, "x")?;
        let y = ensure_finite(y, "y")?;
        let width = ensure_non_negative(width, "width")?;
        let height = ensure_non_negative(height, "height")?;
        ensure_finite_bounds(Self::from_raw(x, x + width, y, y + height))
    }

    /// Rectangle anchored at the origin, as produced by a surface resize.
    pub fn from_size(width: f64, height: f64) -> ChartResult<Self> {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn origin(self) -> PixelPoint {
        PixelPoint::new(self.x_min, self.y_min)
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(self.x_center(), self.y_center())
    }

    /// Moves the left edge, holding the width.
    pub fn set_x(&mut self, x: f64) -> ChartResult<()> {
        let x = ensure_finite(x, "x")?;
        let mut next = *self;
        next.x_min = x;
        next.x_max = x + self.width();
        self.commit(next)
    }

    /// Moves the top edge, holding the height.
    pub fn set_y(&mut self, y: f64) -> ChartResult<()> {
        let y = ensure_finite(y, "y")?;
        let mut next = *self;
        next.y_min = y;
        next.y_max = y + self.height();
        self.commit(next)
    }

    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        let width = ensure_non_negative(width, "width")?;
        let mut next = *self;
        next.x_max = self.x_min + width;
        self.commit(next)
    }

    pub fn set_height(&mut self, height: f64) -> ChartResult<()> {
        let height = ensure_non_negative(height, "height")?;
        let mut next = *self;
        next.y_max = self.y_min + height;
        self.commit(next)
    }

    /// Checks bounds deserialized from untrusted input.
    pub fn validate(self) -> ChartResult<Self> {
        let rect = ensure_finite_bounds(self)?;
        if rect.x_max < rect.x_min || rect.y_max < rect.y_min {
            return Err(ChartError::InvalidArgument(
                "rectangle width and height must be >= 0".to_owned(),
            ));
        }
        Ok(rect)
    }
}
