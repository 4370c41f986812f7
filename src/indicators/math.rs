//! Shared moving-average arithmetic for the indicator set.

/// Simple average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// One EMA step from the previous EMA value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let multiplier = 2.0 / (period as f64 + 1.0);
    (value - previous) * multiplier + previous
}

/// Full EMA series, seeded with the SMA of the first `period` values.
/// Element `i` corresponds to input index `period - 1 + i`.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);
    let mut current = seed;
    for value in &values[period..] {
        current = ema_from_previous(*value, current, period);
        series.push(current);
    }
    Some(series)
}

/// Latest EMA value.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).and_then(|series| series.last().copied())
}

/// Population standard deviation.
pub fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
