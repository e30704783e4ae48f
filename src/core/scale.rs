//! Progress mapping helpers.
//!
//! A single global progress value in [0, 1] drives a whole gesture. These
//! helpers slice it into staggered per-segment ramps and pulses.

use std::f32::consts::PI;

/// Progress left over once segment `i` of `n` has been reached; zero before.
#[inline]
pub fn clamped_delta(value: f32, i: usize, n: usize) -> f32 {
    (value - i as f32 / n as f32).max(0.0)
}

/// Normalized [0, 1] progress of segment `i` out of `n`.
///
/// Segment `i` starts moving once `value` passes `i / n` and saturates at 1
/// after a further `1 / n`.
#[inline]
pub fn segment_progress(value: f32, i: usize, n: usize) -> f32 {
    let n_f = n as f32;
    clamped_delta(value, i, n).min(1.0 / n_f) * n_f
}

/// Turns a 0→1 ramp into a 0→1→0 pulse.
#[inline]
pub fn sinify(value: f32) -> f32 {
    (value * PI).sin()
}
