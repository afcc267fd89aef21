// File: crates/spark-core/src/extremum.rs
// Summary: Peak/trough locators over a numeric series.

/// Index of the first occurrence of the maximum value, `None` for an empty
/// series. Ties break to the earliest index.
pub fn peak_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) if v > values[b] => best = Some(i),
            _ => {}
        }
    }
    best
}

/// Index of the first occurrence of the minimum value, `None` for an empty
/// series. Ties break to the earliest index.
pub fn trough_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) if v < values[b] => best = Some(i),
            _ => {}
        }
    }
    best
}
