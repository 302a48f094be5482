//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Most decimal places an `f64` can meaningfully carry.
pub const MAX_DECIMALS: u32 = 15;

/// Round a floating point value to `decimals` decimal places.
///
/// `decimals` is clamped to [`MAX_DECIMALS`].
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Divide, returning `None` for a zero denominator or a non-finite quotient.
#[must_use]
pub fn checked_ratio(numer: f64, denom: f64) -> Option<f64> {
    if denom == 0.0 {
        return None;
    }
    let out = numer / denom;
    out.is_finite().then_some(out)
}

/// Arithmetic mean of integer samples; `None` when there are none.
#[must_use]
pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|v| *v as f64).sum();
    Some(sum / values.len() as f64)
}

/// Return the Gini coefficient for an ascending-sorted integer slice.
#[must_use]
pub fn gini_coefficient(sorted: &[usize]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().map(|v| *v as f64).sum();
    if sum == 0.0 {
        return 0.0;
    }
    let mut accum = 0.0;
    for (i, value) in sorted.iter().enumerate() {
        let i = i as f64 + 1.0;
        accum += (2.0 * i - n - 1.0) * (*value as f64);
    }
    accum / (n * sum)
}

/// Solve for the point where the segment `lower`–`upper` meets the line `y = x`.
///
/// Points are `(x, y)`. With `lower = (r1, f1)` and `upper = (r2, f2)` the
/// root is `(f1·r2 − f2·r1) / (r2 − r1 + f1 − f2)`. Returns `None` when the
/// segment is parallel to the diagonal.
#[must_use]
pub fn linear_crossing(lower: (f64, f64), upper: (f64, f64)) -> Option<f64> {
    let (r1, f1) = lower;
    let (r2, f2) = upper;
    checked_ratio(f1 * r2 - f2 * r1, r2 - r1 + f1 - f2)
}

/// Length of the polyline through `(1, values[0]), (2, values[1]), ...`.
///
/// Consecutive points are one unit apart on the x axis, so each segment is
/// `sqrt(1 + dy^2)`. Fewer than two points give 0.
#[must_use]
pub fn unit_step_arc_length(values: &[usize]) -> f64 {
    values
        .windows(2)
        .map(|w| {
            let dy = w[0] as f64 - w[1] as f64;
            (1.0 + dy * dy).sqrt()
        })
        .sum()
}

/// Shannon entropy in bits of the distribution given by `counts`.
///
/// Zero counts contribute nothing. `None` when the total is zero.
#[must_use]
pub fn shannon_entropy_bits(counts: &[usize]) -> Option<f64> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let total = total as f64;
    let mut entropy = 0.0;
    for &count in counts.iter().filter(|c| **c > 0) {
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }
    // -0.0 for a single-type distribution
    Some(entropy.max(0.0))
}
