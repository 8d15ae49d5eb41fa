//! Rounding and zero-detection policy shared by both elimination methods.
//!
//! Two different views of a number exist during a solve:
//!
//! * The working buffer keeps full precision.  The only thing ever done to it
//!   is [`snap_zero`], which forces sub-epsilon results of an arithmetic
//!   row operation to exactly zero so that noise does not leak into later columns.
//! * Everything a caller sees (step snapshots, operation labels, the solution)
//!   goes through [`round_display`], [`format_number`] or [`cleanup`].

use itertools::Itertools;

/// Magnitudes below this are treated as exactly zero, both for display and
/// for pivot/singularity tests.
pub const EPSILON: f64 = 1e-10;

/// Number of decimal digits kept for display.
pub const PRECISION: usize = 6;

#[inline]
pub fn is_zero(x: f64) -> bool { x.abs() < EPSILON }

/// Working-buffer policy: sub-epsilon values become exactly zero, everything
/// else is left untouched.
#[inline]
pub fn snap_zero(x: f64) -> f64 {
    match is_zero(x) {
        true => 0.0,
        false => x,
    }
}

/// Past this magnitude an f64 has no digits left at `PRECISION` decimals.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to `PRECISION` decimals, as shown in a snapshot.
///
/// Sub-epsilon values (and anything that rounds to zero) come back as `+0.0`.
/// Values too large to carry any decimals come back unchanged.
pub fn round_display(x: f64) -> f64 {
    if is_zero(x) {
        return 0.0;
    }
    // also keeps `x * scale` below overflow
    if !(x.abs() < ROUNDING_LIMIT) {
        return x;
    }
    let scale = 10f64.powi(PRECISION as i32);
    positive_zero((x * scale).round() / scale)
}

/// Snap to the nearest integer when within epsilon of it; otherwise
/// behave like [`round_display`].
///
/// Removes floating noise like `1.9999999999 -> 2` without touching
/// answers that are genuinely fractional.
pub fn cleanup(x: f64) -> f64 {
    let nearest = x.round();
    match (x - nearest).abs() < EPSILON {
        true => positive_zero(nearest),
        false => round_display(x),
    }
}

/// Fixed `PRECISION`-decimal text.  Sub-epsilon values print as `0.000000`.
pub fn format_number(x: f64) -> String {
    format!("{:.*}", PRECISION, round_display(x))
}

/// Formats a whole solution as `[a, b, c]`.
pub fn format_vector(xs: &[f64]) -> String {
    format!("[{}]", xs.iter().map(|&x| format_number(x)).join(", "))
}

// -0.0 == 0.0, so this maps both zeros to +0.0 and leaves everything else alone.
#[inline]
fn positive_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold() {
        assert!(is_zero(0.0));
        assert!(is_zero(-9.9e-11));
        assert!(!is_zero(1e-10));
        assert!(!is_zero(-1e-9));
    }

    #[test]
    fn snap_zero_keeps_precision() {
        assert_eq!(snap_zero(3e-11), 0.0);
        assert_eq!(snap_zero(-3e-11), 0.0);
        // no rounding whatsoever above epsilon
        assert_eq!(snap_zero(1.0 / 3.0), 1.0 / 3.0);
        assert_eq!(snap_zero(2e-10), 2e-10);
    }

    #[test]
    fn display_rounding() {
        assert_close!(abs=1e-15, round_display(1.0 / 3.0), 0.333333);
        assert_close!(abs=1e-15, round_display(-2.6666666666), -2.666667);
        assert_eq!(round_display(1e-11), 0.0);
        assert_eq!(round_display(-4e-7).to_bits(), 0f64.to_bits());
        assert_eq!(round_display(-1e-12).to_bits(), 0f64.to_bits());
    }

    #[test]
    fn display_rounding_of_huge_values() {
        assert_eq!(round_display(1e303), 1e303);
        assert_eq!(round_display(-1.5e308), -1.5e308);
        assert_eq!(round_display(::std::f64::MAX), ::std::f64::MAX);
        assert_eq!(round_display(1e15 + 0.5), 1e15 + 0.5);
        assert_close!(abs=1e-6, round_display(123456789.1234567), 123456789.123457);
        assert_eq!(round_display(::std::f64::INFINITY), ::std::f64::INFINITY);
        assert!(round_display(::std::f64::NAN).is_nan());
    }

    #[test]
    fn cleanup_snaps_near_integers() {
        assert_eq!(cleanup(1.99999999999), 2.0);
        assert_eq!(cleanup(-3.00000000001), -3.0);
        assert_eq!(cleanup(-1e-13).to_bits(), 0f64.to_bits());
        // genuinely fractional answers only lose digits past PRECISION
        assert_close!(abs=1e-15, cleanup(0.1234567), 0.123457);
        assert_close!(abs=1e-15, cleanup(2.5), 2.5);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_number(1.5), "1.500000");
        assert_eq!(format_number(-1.5), "-1.500000");
        assert_eq!(format_number(5e-11), "0.000000");
        assert_eq!(format_number(-5e-11), "0.000000");
        assert_eq!(format_number(-4e-7), "0.000000");
        assert_eq!(format_vector(&[2.0, 3.0, -1.0]), "[2.000000, 3.000000, -1.000000]");
        assert_eq!(format_vector(&[]), "[]");
    }
}
