//! Descriptive statistics over plain `f64` slices

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// `None` when fewer than two observations are available.
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let mean = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Some((ss / (data.len() - 1) as f64).sqrt())
}
