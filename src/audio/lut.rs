//! Sine wave lookup table for beep synthesis
//!
//! 360-entry table covering one full cycle, one entry per whole degree.
//! Values are f32 so the synthesizer can scale them by the fade envelope
//! before quantizing to i16.

/// Number of entries in the sine table (one per degree)
pub const DEGREES_PER_CYCLE: usize = 360;

/// Pre-computed sine wave lookup table
///
/// 360 samples covering 0° to 360°, amplitude 1.0.
/// Index 0 = 0.0, 90 = 1.0, 180 = 0.0, 270 = -1.0.
///
/// Only the first quadrant comes from the series; the rest is filled by
/// mirroring, so the quarter-wave identities hold exactly:
/// `table[d] == table[180 - d]` and `table[d + 180] == -table[d]`.
pub static SINE_DEGREES: [f32; DEGREES_PER_CYCLE] = {
    let mut table = [0.0f32; DEGREES_PER_CYCLE];
    let mut d = 0;
    while d <= 90 {
        table[d] = const_sin_deg(d) as f32;
        d += 1;
    }
    while d < 180 {
        table[d] = table[180 - d];
        d += 1;
    }
    while d < 360 {
        table[d] = -table[d - 180];
        d += 1;
    }
    table
};

/// Sine of an angle in degrees, resolved through the lookup table.
///
/// The angle is truncated to a whole degree (fractions are discarded, not
/// rounded) and then reduced into 0..360 with a Euclidean remainder, so
/// negative angles land on the correct table entry: `sin_deg(-90.0)`
/// is exactly `-1.0`.
#[inline]
pub fn sin_deg(degrees: f32) -> f32 {
    let index = (degrees as i64).rem_euclid(DEGREES_PER_CYCLE as i64) as usize;
    SINE_DEGREES[index]
}

/// Const-compatible sine for angles in whole degrees, first quadrant only
const fn const_sin_deg(deg: usize) -> f64 {
    let x = (deg as f64) * core::f64::consts::PI / 180.0;

    // Taylor series: sin(x) = x - x³/3! + x⁵/5! - x⁷/7! + ...
    // Terms through x¹³ keep the error below 1e-9 on [0, π/2], which is
    // well under one f32 ulp after the cast.
    let x2 = x * x;
    let x3 = x2 * x;
    let x5 = x3 * x2;
    let x7 = x5 * x2;
    let x9 = x7 * x2;
    let x11 = x9 * x2;
    let x13 = x11 * x2;

    x - x3 / 6.0 + x5 / 120.0 - x7 / 5040.0 + x9 / 362880.0 - x11 / 39916800.0
        + x13 / 6227020800.0
}
