use serde::{Deserialize, Serialize};

/// Marker for a coordinate unit.
///
/// Units are zero-sized tags carried by [`Point`](super::Point) and
/// [`Bounds`](super::Bounds) so data-space and pixel-space values cannot be
/// mixed by accident.
pub trait Unit: Copy + Default + PartialEq + std::fmt::Debug + private::Sealed {
    /// Short name used in bounds validation errors.
    const NAME: &'static str;
}

/// Logical coordinates of plotted values, y increasing upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DataSpace;

/// Drawing-surface coordinates, origin top-left, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelSpace;

impl Unit for DataSpace {
    const NAME: &'static str = "data";
}

impl Unit for PixelSpace {
    const NAME: &'static str = "pixel";
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::DataSpace {}
    impl Sealed for super::PixelSpace {}
}
