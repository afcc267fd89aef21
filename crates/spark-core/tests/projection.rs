// File: crates/spark-core/tests/projection.rs
// Purpose: Validate projection bounds, ordering, and degenerate-input policy.

use spark_core::{project, DisplayBox, PAD};

#[test]
fn points_stay_inside_padded_box() {
    let values = vec![5.0, 6.0, 7.0, 6.0, 5.0, 4.0, 5.0, 6.0];
    let bx = DisplayBox::tiny();
    let pts = project(&values, bx);
    assert_eq!(pts.len(), values.len());
    for p in &pts {
        assert!(p.y >= PAD - 1e-4 && p.y <= bx.height - PAD + 1e-4, "y out of bounds: {}", p.y);
        assert!(p.x >= PAD - 1e-4 && p.x <= bx.width - PAD + 1e-4, "x out of bounds: {}", p.x);
    }
}

#[test]
fn x_is_strictly_increasing_and_spans_the_box() {
    let values = vec![3.0, 1.0, 4.0, 1.0, 5.0];
    let bx = DisplayBox::new(50.0, 14.0);
    let pts = project(&values, bx);
    for w in pts.windows(2) {
        assert!(w[1].x > w[0].x, "x must increase by sample index");
    }
    assert!((pts[0].x - PAD).abs() < 1e-4);
    assert!((pts.last().unwrap().x - (bx.width - PAD)).abs() < 1e-4);
}

#[test]
fn extremes_touch_the_padding_edges() {
    let values = vec![0.0, 10.0, 5.0];
    let bx = DisplayBox::tiny();
    let pts = project(&values, bx);
    // min value maps to the bottom padded edge, max to the top one
    assert!((pts[0].y - (bx.height - PAD)).abs() < 1e-4);
    assert!((pts[1].y - PAD).abs() < 1e-4);
}

#[test]
fn flat_series_projects_at_mid_height() {
    // A flat series draws a horizontal segment, never NaN coordinates.
    let values = vec![10.0, 10.0, 10.0];
    let bx = DisplayBox::new(50.0, 14.0);
    let pts = project(&values, bx);
    let expected = PAD + 0.5 * (bx.height - 2.0 * PAD);
    for p in &pts {
        assert!(p.y.is_finite());
        assert!((p.y - expected).abs() < 1e-4, "flat series should sit at mid-height");
    }
}

#[test]
fn fewer_than_two_samples_yield_empty_projection() {
    let bx = DisplayBox::tiny();
    assert!(project(&[], bx).is_empty());
    assert!(project(&[3.0], bx).is_empty());
    // idempotent: same input, same empty result
    assert_eq!(project(&[3.0], bx), project(&[3.0], bx));
}
