#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use super::CoordinateSpace;
use super::mapping;
use crate::core::{DataPoint, PixelPoint};
use crate::error::ChartResult;

impl CoordinateSpace {
    /// Projects a batch of data points into pixel space.
    ///
    /// Fails on the first point that cannot be mapped; output order matches
    /// input order.
    pub fn project_points(&self, points: &[DataPoint]) -> ChartResult<Vec<PixelPoint>> {
        let viewport = self.viewport;
        let window = self.window;

        #[cfg(feature = "parallel-projection")]
        {
            points
                .par_iter()
                .map(|point| mapping::pixel_point(viewport, window, *point))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            let mut out = Vec::with_capacity(points.len());
            for point in points {
                out.push(mapping::pixel_point(viewport, window, *point)?);
            }
            Ok(out)
        }
    }
}
