// File: crates/spark-core/src/table.rs
// Summary: Tabular variant: windowed sparkline above aligned time/value cells.

use std::fmt::Write as _;

use anyhow::Result;

use crate::format::{round_to, truncate_label};
use crate::project::project;
use crate::render::{draw_chart, draw_dot, draw_text, svg_open, write_svg_file, RenderVariant, SparkOptions};
use crate::types::DisplayBox;
use crate::window::center_window;

/// One hourly sample: a time label, a numeric value, and an optional
/// direction label (e.g. wind direction "NW").
#[derive(Clone, Debug, PartialEq)]
pub struct HourlyPoint {
    pub label: String,
    pub value: f64,
    pub direction: Option<String>,
}

impl HourlyPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, direction: None }
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }
}

/// Render configuration for the table. Defaults favor the 8-column hourly
/// forecast strip.
#[derive(Clone, Debug)]
pub struct TableOptions {
    /// Pixel box for the sparkline strip above the cells. The table columns
    /// share its width. Default: 120x28.
    pub display: DisplayBox,
    /// Stroke/fill color for the sparkline. Default: "#268bd2".
    pub color: String,
    /// Line or Area sparkline. Default: Line.
    pub variant: RenderVariant,
    /// Display column budget; longer series are windowed around the now
    /// sample. Default: 8.
    pub max_columns: usize,
    /// Decimal places for value cells. Default: 1.
    pub decimals: usize,
    /// Character budget for time labels. Default: 4.
    pub label_chars: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            display: DisplayBox::annotated(),
            color: "#268bd2".to_string(),
            variant: RenderVariant::Line,
            max_columns: 8,
            decimals: 1,
            label_chars: 4,
        }
    }
}

/// An ordered hourly sequence with a unit string and an optional now index.
/// Rendering shows a contiguous window of at most `max_columns` samples
/// centered on now, with the now cell visually distinguished.
#[derive(Clone, Debug)]
pub struct HourlyTable {
    pub points: Vec<HourlyPoint>,
    pub unit: String,
    pub now_index: Option<usize>,
}

impl HourlyTable {
    pub fn new(points: Vec<HourlyPoint>, unit: impl Into<String>) -> Self {
        Self { points, unit: unit.into(), now_index: None }
    }

    pub fn with_now_index(mut self, now_index: usize) -> Self {
        self.now_index = Some(now_index);
        self
    }

    /// Render the windowed sparkline plus the label and value rows.
    /// Returns `None` when fewer than 2 samples land in the window.
    pub fn to_svg_string(&self, opts: &TableOptions) -> Option<String> {
        const ROW_H: f32 = 12.0;

        let win = center_window(self.points.len(), opts.max_columns, self.now_index);
        let cells = win.slice(&self.points);
        if cells.len() < 2 {
            return None;
        }
        let values: Vec<f64> = cells.iter().map(|p| p.value).collect();
        let bx = opts.display;
        let pts = project(&values, bx);
        let col_w = bx.width / cells.len() as f32;
        let total_h = bx.height + 2.0 * ROW_H;

        let mut svg = String::new();
        svg_open(&mut svg, bx.width, total_h);

        // Highlighted cell background under the now column, spanning both rows.
        if let Some(e) = win.now {
            let _ = writeln!(
                svg,
                "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" fill-opacity=\"0.15\"/>",
                e as f32 * col_w,
                bx.height,
                col_w,
                2.0 * ROW_H,
                opts.color
            );
        }

        let chart_opts = SparkOptions {
            display: bx,
            color: opts.color.clone(),
            variant: opts.variant,
            now_index: None, // dot drawn below from the windowed index
            ..SparkOptions::default()
        };
        draw_chart(&mut svg, &pts, bx, &chart_opts);
        if let Some(p) = win.now.and_then(|e| pts.get(e)) {
            draw_dot(&mut svg, p.x, p.y, 1.8, &opts.color);
        }

        for (i, cell) in cells.iter().enumerate() {
            let cx = i as f32 * col_w + col_w / 2.0;
            let is_now = win.now == Some(i);

            let mut label = truncate_label(&cell.label, opts.label_chars);
            if let Some(dir) = &cell.direction {
                label.push(' ');
                label.push_str(dir);
            }
            let label_fill = if is_now { opts.color.as_str() } else { "#555555" };
            draw_text(&mut svg, &label, cx, bx.height + ROW_H - 3.0, "middle", label_fill, is_now);

            let mut value = round_to(cell.value, opts.decimals);
            if i == cells.len() - 1 && !self.unit.is_empty() {
                value.push_str(&self.unit);
            }
            let value_fill = if is_now { opts.color.as_str() } else { "#333333" };
            draw_text(&mut svg, &value, cx, bx.height + 2.0 * ROW_H - 3.0, "middle", value_fill, is_now);
        }

        svg.push_str("</svg>\n");
        Some(svg)
    }

    /// Write the table to an `.svg` file. Returns `Ok(false)` (and writes
    /// nothing) when there is too little data to render.
    pub fn render_to_svg(
        &self,
        opts: &TableOptions,
        output_path: impl AsRef<std::path::Path>,
    ) -> Result<bool> {
        match self.to_svg_string(opts) {
            Some(svg) => {
                write_svg_file(&svg, output_path.as_ref())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
