// File: crates/spark-core/src/path.rs
// Summary: Builds line and area paths from projected points.

use std::fmt::Write as _;

use crate::project::ProjectedPoint;
use crate::types::{DisplayBox, PAD};

/// A single drawable path command. Straight segments only; the design goal
/// is maximum data-ink, so there is no smoothing or curve fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
}

/// Trend stroke: move to the first point, then a segment per sample.
/// Empty input yields an empty path.
pub fn line_path(points: &[ProjectedPoint]) -> Vec<PathCmd> {
    let mut cmds = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            cmds.push(PathCmd::MoveTo { x: p.x, y: p.y });
        } else {
            cmds.push(PathCmd::LineTo { x: p.x, y: p.y });
        }
    }
    cmds
}

/// Fill region for the area variant: the line path closed down to the
/// bottom-right and bottom-left corners of the padded box. The fill rule
/// closes the final edge back to the start, so no explicit close is added.
pub fn area_path(points: &[ProjectedPoint], bx: DisplayBox) -> Vec<PathCmd> {
    let mut cmds = line_path(points);
    if cmds.is_empty() {
        return cmds;
    }
    let bottom = bx.height - PAD;
    cmds.push(PathCmd::LineTo { x: bx.width - PAD, y: bottom });
    cmds.push(PathCmd::LineTo { x: PAD, y: bottom });
    cmds
}

/// Render commands as SVG path data ("M x y L x y ...").
pub fn svg_data(cmds: &[PathCmd]) -> String {
    let mut d = String::with_capacity(cmds.len() * 12);
    for (i, cmd) in cmds.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        match *cmd {
            PathCmd::MoveTo { x, y } => {
                let _ = write!(d, "M{:.1} {:.1}", x, y);
            }
            PathCmd::LineTo { x, y } => {
                let _ = write!(d, "L{:.1} {:.1}", x, y);
            }
        }
    }
    d
}
