//! Easing maths for blink timing.
//!
//! The deceleration curve maps sequence progress to the spacing between
//! pulses. The quad eases shape a single tile's fade-in and fade-out.

/// Linearly interpolates between `from` and `to`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Raises progress to `power` after clamping it into `[0, 1]`.
///
/// With `power > 1` the result stays near zero for most of the range and
/// rises sharply at the end.
pub fn ease_in_power(progress: f32, power: f32) -> f32 {
    progress.clamp(0.0, 1.0).powf(power)
}

/// Pulse interval for a given sequence progress.
///
/// `progress` is clamped, so `interval_at(0) == start` and
/// `interval_at(1) == end`. Non-decreasing in `progress` whenever
/// `start <= end` and `power >= 1`.
pub fn deceleration_interval(progress: f32, start: f32, end: f32, power: f32) -> f32 {
    lerp(start, end, ease_in_power(progress, power))
}

/// Quadratic ease-out: fast at the start, gentle at the end.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in: gentle at the start, fast at the end.
pub fn ease_in_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}
