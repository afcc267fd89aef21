// File: crates/spark-core/src/window.rs
// Summary: Contiguous display windows centered on the "now" sample.

/// Resolved window over a series. `now` is the effective index *inside* the
/// window when the caller's now index landed in it, `None` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub len: usize,
    pub now: Option<usize>,
}

impl Window {
    /// One past the last series index covered by the window.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
    /// Borrow the windowed slice out of the full series.
    pub fn slice<'a, T>(&self, full: &'a [T]) -> &'a [T] {
        &full[self.start..self.end()]
    }
}

/// Select a window of at most `max_columns` contiguous samples out of a
/// series of `len`, keeping `now` as close to centered as possible:
/// `start = max(0, now - max_columns/2)`, then shifted left so the window
/// never overruns the end.
///
/// An out-of-range `now` still anchors window placement (clamped into the
/// series) but is reported as `now: None` so callers suppress the marker.
/// Pure and deterministic; identical inputs yield identical boundaries.
pub fn center_window(len: usize, max_columns: usize, now: Option<usize>) -> Window {
    if max_columns == 0 || len == 0 {
        return Window { start: 0, len: 0, now: None };
    }
    let valid_now = now.filter(|&n| n < len);
    if len <= max_columns {
        return Window { start: 0, len, now: valid_now };
    }
    let anchor = now.unwrap_or(0).min(len - 1);
    let mut start = anchor.saturating_sub(max_columns / 2);
    if start + max_columns > len {
        start = len - max_columns;
    }
    // A valid now always falls inside the placed window, so the subtraction
    // cannot underflow; the filter guards the clamped-anchor case anyway.
    let effective = valid_now
        .and_then(|n| n.checked_sub(start))
        .filter(|&e| e < max_columns);
    Window { start, len: max_columns, now: effective }
}
