// File: crates/spark-core/src/lib.rs
// Summary: Core library entry point; exports the sparkline geometry and rendering API.

pub mod types;
pub mod project;
pub mod path;
pub mod extremum;
pub mod window;
pub mod format;
pub mod render;
pub mod table;

pub use types::{DisplayBox, PAD};
pub use project::{project, ProjectedPoint};
pub use path::{area_path, line_path, svg_data, PathCmd};
pub use extremum::{peak_index, trough_index};
pub use window::{center_window, Window};
pub use format::{hour_label, round_to, truncate_label};
pub use render::{ParseVariantError, RenderVariant, SparkOptions, Sparkline};
pub use table::{HourlyPoint, HourlyTable, TableOptions};
