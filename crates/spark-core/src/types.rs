// File: crates/spark-core/src/types.rs
// Summary: Shared types and constants (display boxes, padding).

/// Inner padding between the box edge and the plotted geometry, in pixels.
pub const PAD: f32 = 1.5;

/// Target pixel box for a sparkline.
/// Contract: width and height are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayBox {
    pub width: f32,
    pub height: f32,
}

impl DisplayBox {
    /// Create a box; non-positive dimensions are clamped up to 1px.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width: width.max(1.0), height: height.max(1.0) }
    }
    /// Word-sized inline box, fits on one line of text.
    pub const fn tiny() -> Self {
        Self { width: 50.0, height: 14.0 }
    }
    /// Larger box used by the annotated mode.
    pub const fn annotated() -> Self {
        Self { width: 120.0, height: 28.0 }
    }
    /// Horizontal span available to the geometry after padding.
    pub fn inner_width(&self) -> f32 {
        (self.width - 2.0 * PAD).max(0.0)
    }
    /// Vertical span available to the geometry after padding.
    pub fn inner_height(&self) -> f32 {
        (self.height - 2.0 * PAD).max(0.0)
    }
}

impl Default for DisplayBox {
    fn default() -> Self {
        Self::tiny()
    }
}
