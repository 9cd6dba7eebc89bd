/// Evenly spaced tick values across a scale domain, endpoints included.
#[must_use]
pub fn tick_values(domain: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![domain.0];
    }

    let span = domain.1 - domain.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            domain.0 + span * ratio
        })
        .collect()
}

/// Compact numeric label: integers print without a fraction, everything else
/// keeps one decimal.
#[must_use]
pub fn numeric_label(value: f64) -> String {
    if (value - value.round()).abs() <= 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
