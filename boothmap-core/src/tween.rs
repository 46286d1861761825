//! Display-only interpolation for the running total.

/// Linear interpolation from `from` to `to`, rounded to the nearest unit.
///
/// Returns `to` once `elapsed_ms >= duration_ms` (or for a zero duration).
#[must_use]
pub fn interpolate_total(from: u64, to: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if !elapsed_ms.is_finite() {
        return to;
    }
    let t = progress(elapsed_ms, duration_ms);
    if t >= 1.0 {
        return to;
    }
    let (from_f, to_f) = (u64_to_f64(from), u64_to_f64(to));
    let value = (to_f - from_f).mul_add(t, from_f).round();
    f64_to_u64(value)
}

/// Fraction of the tween completed, in `[0, 1]`. A tween is over at `1.0`.
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[allow(clippy::cast_precision_loss)]
const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f64_to_u64(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as u64
    }
}
