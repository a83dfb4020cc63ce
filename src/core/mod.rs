pub mod bounds;
pub mod box2d;
pub mod point;
pub mod primitives;
pub mod rectangle;
pub mod units;
mod validation;

pub use bounds::Bounds;
pub use box2d::Box2D;
pub use point::{DataPoint, PixelPoint, Point};
pub use primitives::{datetime_to_unix_seconds, decimal_to_f64};
pub use rectangle::Rectangle;
pub use units::{DataSpace, PixelSpace, Unit};

pub(crate) use validation::{
    ensure_finite, ensure_finite_result, ensure_non_negative, ensure_positive,
};
