#![forbid(unsafe_code)]

//! Value ↔ position arithmetic.

/// `value` as a percentage of the `[min, max]` span, clamped to `[0, 100]`.
///
/// A zero-width span places everything at `0`, as does any input that
/// leaves the ratio undefined (NaN or infinite bounds).
#[must_use]
pub fn relative_position(min: f64, max: f64, value: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        return 0.0;
    }
    let percent = (value - min) / span * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Number of decimals in the shortest display form of `step`.
fn decimals(step: f64) -> usize {
    let repr = format!("{step}");
    repr.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Round `value` to the nearest multiple of `step`.
///
/// Multiples are counted from zero. Exact halves round up, towards positive
/// infinity (`2.5 → 3`, `-2.5 → -2` with a step of 1). The result is rounded
/// to the step's own precision so `0.1 * 3` comes back as `0.3`, unless that
/// precision is beyond what `f64` can scale to.
/// Non-positive or non-finite steps leave the value unchanged.
#[must_use]
pub fn snap_to_step(step: f64, value: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) {
        return value;
    }
    let snapped = (value / step + 0.5).floor() * step;
    if !snapped.is_finite() {
        return value;
    }
    let scale = 10f64.powi(i32::try_from(decimals(step)).unwrap_or(i32::MAX));
    let cleaned = (snapped * scale).round() / scale;
    if cleaned.is_finite() { cleaned } else { snapped }
}

/// Keep `value` within `[min, max]` without panicking on inverted bounds.
///
/// Inverted bounds resolve to `max`; the integrity check reports them.
#[must_use]
pub fn bound(min: f64, max: f64, value: f64) -> f64 {
    value.max(min).min(max)
}

/// Snap to the step grid, then clamp to the bounds.
#[must_use]
pub fn snap_and_bound(min: f64, max: f64, step: f64, value: f64) -> f64 {
    bound(min, max, snap_to_step(step, value))
}
