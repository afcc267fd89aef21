// File: crates/spark-core/src/project.rs
// Summary: Projects a numeric series onto a padded pixel box.

use crate::types::{DisplayBox, PAD};

/// One sample placed in box coordinates. `value` is the original sample,
/// kept alongside so annotation layers need not re-index the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub value: f64,
}

/// Map `values` into `bx`: x runs linearly from the left padding edge to the
/// right one by sample index, y runs inverted (largest value at the top).
///
/// A flat series (zero range) projects every point at the vertical midpoint,
/// so the path is a horizontal mid-height line rather than a NaN artifact.
/// Fewer than 2 samples yield an empty projection; there is nothing to draw.
pub fn project(values: &[f64], bx: DisplayBox) -> Vec<ProjectedPoint> {
    if values.len() < 2 {
        return Vec::new();
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;
    let step = bx.inner_width() / (values.len() - 1) as f32;
    let inner_h = bx.inner_height();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let t = if range > 0.0 { ((v - min) / range) as f32 } else { 0.5 };
            ProjectedPoint {
                x: PAD + step * i as f32,
                y: PAD + (1.0 - t) * inner_h,
                value: v,
            }
        })
        .collect()
}
