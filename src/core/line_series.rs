use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PixelRange};
use crate::error::ChartResult;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Pixel-space plot area shared by the X and Y scales of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotProjection {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_range: PixelRange,
    pub y_range: PixelRange,
}

impl PlotProjection {
    pub fn project(self, point: DataPoint) -> ChartResult<(f64, f64)> {
        let x = self.x_scale.domain_to_pixel(point.x, self.x_range)?;
        let y = self.y_scale.domain_to_pixel(point.y, self.y_range)?;
        Ok((x, y))
    }
}

/// Projects series points into adjacent line segments.
///
/// Non-finite samples (a saturated queue length, for example) break the line:
/// no segment is emitted towards or away from them.
pub fn project_line_segments(
    points: &[DataPoint],
    projection: PlotProjection,
) -> ChartResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        if !pair[0].is_finite() || !pair[1].is_finite() {
            continue;
        }
        let (x1, y1) = projection.project(pair[0])?;
        let (x2, y2) = projection.project(pair[1])?;
        segments.push(LineSegment { x1, y1, x2, y2 });
    }

    Ok(segments)
}
