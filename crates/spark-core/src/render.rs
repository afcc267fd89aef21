// File: crates/spark-core/src/render.rs
// Summary: Sparkline struct and SVG rendering pipeline composing projection,
// paths, extremum dots, and annotation text.

use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use crate::extremum::{peak_index, trough_index};
use crate::format::round_to;
use crate::path::{area_path, line_path, svg_data};
use crate::project::{project, ProjectedPoint};
use crate::types::{DisplayBox, PAD};

/// Line draws only the trend stroke; Area additionally fills down to the
/// baseline (tide-style visualizations).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderVariant {
    Line,
    Area,
}

#[derive(Debug, Error)]
#[error("unknown render variant '{0}' (expected 'line' or 'area')")]
pub struct ParseVariantError(String);

impl FromStr for RenderVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "area" => Ok(Self::Area),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}

/// Render configuration. All fields have usable defaults; callers set only
/// what a given screen needs.
#[derive(Clone, Debug)]
pub struct SparkOptions {
    /// Pixel box for the chart itself. Default: tiny 50x14.
    pub display: DisplayBox,
    /// Stroke/fill color, opaque to the core. Default: "#268bd2".
    pub color: String,
    /// Line or Area. Default: Line.
    pub variant: RenderVariant,
    /// Which sample is "the current moment". Out-of-range values simply
    /// suppress the marker. Default: None.
    pub now_index: Option<usize>,
    /// Vertical tick through the now sample. Default: false.
    pub show_now_marker: bool,
    /// Dot on the now sample. Default: true.
    pub show_now_dot: bool,
    /// Dot on the peak sample. Default: false.
    pub highlight_peak: bool,
    /// Dots (basic) or value labels (annotated) at min and max. Default: false.
    pub show_min_max: bool,
    /// Free-text trend line under the annotated chart. Default: None.
    pub trend_text: Option<String>,
    /// Free-text peak-time line under the annotated chart. Default: None.
    pub peak_time: Option<String>,
    /// Decimal places for the annotated peak label. Default: 0.
    pub decimals: usize,
}

impl Default for SparkOptions {
    fn default() -> Self {
        Self {
            display: DisplayBox::tiny(),
            color: "#268bd2".to_string(),
            variant: RenderVariant::Line,
            now_index: None,
            show_now_marker: false,
            show_now_dot: true,
            highlight_peak: false,
            show_min_max: false,
            trend_text: None,
            peak_time: None,
            decimals: 0,
        }
    }
}

/// A short numeric series, semantically "value over equally-spaced time
/// steps". Holds no state beyond the samples; every render recomputes from
/// scratch.
#[derive(Clone, Debug)]
pub struct Sparkline {
    pub values: Vec<f64>,
}

impl Sparkline {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Basic/tiny mode: the plain chart with optional now/peak/min-max dots.
    /// Returns `None` for fewer than 2 samples; nothing to draw.
    pub fn to_svg_string(&self, opts: &SparkOptions) -> Option<String> {
        let pts = project(&self.values, opts.display);
        if pts.is_empty() {
            return None;
        }
        let bx = opts.display;
        let mut svg = String::new();
        svg_open(&mut svg, bx.width, bx.height);
        draw_chart(&mut svg, &pts, bx, opts);
        svg.push_str("</svg>\n");
        Some(svg)
    }

    /// Annotated mode: larger box plus a numeric label above the peak and
    /// optional trend/peak-time text lines beneath the chart.
    pub fn to_annotated_svg(&self, opts: &SparkOptions) -> Option<String> {
        const LABEL_H: f32 = 10.0;
        const LINE_H: f32 = 12.0;

        let bx = opts.display;
        let pts = project(&self.values, bx);
        if pts.is_empty() {
            return None;
        }
        let notes: Vec<&str> = [opts.trend_text.as_deref(), opts.peak_time.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let total_h = LABEL_H + bx.height + notes.len() as f32 * LINE_H;

        let mut svg = String::new();
        svg_open(&mut svg, bx.width, total_h);
        let _ = writeln!(svg, "  <g transform=\"translate(0 {LABEL_H})\">");
        draw_chart(&mut svg, &pts, bx, opts);
        let _ = writeln!(svg, "  </g>");

        if let Some(pi) = peak_index(&self.values) {
            let p = pts[pi];
            // keep the label inside the viewport near either edge
            let lx = p.x.clamp(8.0, bx.width - 8.0);
            draw_text(
                &mut svg,
                &round_to(p.value, opts.decimals),
                lx,
                LABEL_H - 2.0,
                "middle",
                &opts.color,
                true,
            );
            if opts.show_min_max {
                if let Some(ti) = trough_index(&self.values) {
                    let t = pts[ti];
                    let tx = t.x.clamp(8.0, bx.width - 8.0);
                    draw_text(
                        &mut svg,
                        &round_to(t.value, opts.decimals),
                        tx,
                        LABEL_H + t.y - 2.0,
                        "middle",
                        "#888888",
                        false,
                    );
                }
            }
        }
        for (i, note) in notes.iter().enumerate() {
            let y = LABEL_H + bx.height + LINE_H * (i + 1) as f32 - 3.0;
            draw_text(&mut svg, note, PAD, y, "start", "#555555", false);
        }
        svg.push_str("</svg>\n");
        Some(svg)
    }

    /// Write the basic mode to an `.svg` file. Returns `Ok(false)` (and
    /// writes nothing) when the series is too short to chart.
    pub fn render_to_svg(
        &self,
        opts: &SparkOptions,
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

    /// Write the annotated mode to an `.svg` file. Returns `Ok(false)` when
    /// the series is too short to chart.
    pub fn render_annotated_to_svg(
        &self,
        opts: &SparkOptions,
        output_path: impl AsRef<std::path::Path>,
    ) -> Result<bool> {
        match self.to_annotated_svg(opts) {
            Some(svg) => {
                write_svg_file(&svg, output_path.as_ref())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn svg_open(svg: &mut String, width: f32, height: f32) {
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">",
        width, height, width, height
    );
}

pub(crate) fn write_svg_file(svg: &str, path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    Ok(())
}

/// Shared chart body: fill (area variant), stroke, now marker/dot, peak and
/// min/max dots. `pts` must be non-empty.
pub(crate) fn draw_chart(svg: &mut String, pts: &[ProjectedPoint], bx: DisplayBox, opts: &SparkOptions) {
    if opts.variant == RenderVariant::Area {
        let _ = writeln!(
            svg,
            "  <path d=\"{}\" fill=\"{}\" fill-opacity=\"0.25\" stroke=\"none\"/>",
            svg_data(&area_path(pts, bx)),
            opts.color
        );
    }
    let _ = writeln!(
        svg,
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
        svg_data(&line_path(pts)),
        opts.color
    );

    // An out-of-range now index suppresses the marker; everything else
    // renders as usual.
    if let Some(p) = opts.now_index.and_then(|n| pts.get(n)) {
        if opts.show_now_marker {
            let _ = writeln!(
                svg,
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-opacity=\"0.35\" stroke-width=\"1\"/>",
                p.x,
                PAD,
                p.x,
                bx.height - PAD,
                opts.color
            );
        }
        if opts.show_now_dot {
            draw_dot(svg, p.x, p.y, 1.8, &opts.color);
        }
    }
    if opts.highlight_peak {
        let values: Vec<f64> = pts.iter().map(|p| p.value).collect();
        if let Some(pi) = peak_index(&values) {
            draw_dot(svg, pts[pi].x, pts[pi].y, 1.8, &opts.color);
        }
    }
    if opts.show_min_max {
        let values: Vec<f64> = pts.iter().map(|p| p.value).collect();
        if let Some(pi) = peak_index(&values) {
            draw_dot(svg, pts[pi].x, pts[pi].y, 1.5, &opts.color);
        }
        if let Some(ti) = trough_index(&values) {
            draw_dot(svg, pts[ti].x, pts[ti].y, 1.5, &opts.color);
        }
    }
}

pub(crate) fn draw_dot(svg: &mut String, cx: f32, cy: f32, r: f32, color: &str) {
    let _ = writeln!(
        svg,
        "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\"/>",
        cx, cy, r, color
    );
}

pub(crate) fn draw_text(
    svg: &mut String,
    text: &str,
    x: f32,
    y: f32,
    anchor: &str,
    fill: &str,
    bold: bool,
) {
    let weight = if bold { " font-weight=\"600\"" } else { "" };
    let _ = writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\" font-family=\"sans-serif\" font-size=\"8\" fill=\"{}\"{}>{}</text>",
        x,
        y,
        anchor,
        fill,
        weight,
        xml_escape(text)
    );
}

/// Escape text content for SVG markup. Annotation strings are caller-supplied
/// free text.
pub(crate) fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
