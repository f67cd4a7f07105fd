use argminmax::ArgMinMax;

/// Smallest and largest value of a slice, `None` when empty.
#[inline]
pub(crate) fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (min_index, max_index) = values.argminmax();
    Some((values[min_index], values[max_index]))
}
