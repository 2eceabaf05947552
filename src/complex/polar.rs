// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

//! Conversions between the cartesian and polar forms.

use crate::misc;

/// The relative tolerance used by [`numbers_compatible`].
pub const COMPATIBILITY_THRESHOLD: f64 = 1e-8;

/// Computes the norm and angle of the number with the given real and
/// imaginary parts.
///
/// The angle is derived from the arc cosine of `real / norm`, and is
/// positive only when `imaginary` is strictly positive. This means a
/// number on the negative real axis gets an angle of −π, not π. The
/// zero number has a norm and angle of 0.
///
/// An angle closer to zero than 10<sup>−15</sup> is returned as 0.
///
/// # Examples
///
/// ```rust
/// use complex_repr::complex::polar;
/// use std::f64::consts::PI;
/// assert_eq!(polar::polar_from_cartesian(3.0, 4.0), (5.0, 0.9272952180016123));
/// assert_eq!(polar::polar_from_cartesian(-2.0, 0.0), (2.0, -PI));
/// assert_eq!(polar::polar_from_cartesian(0.0, 0.0), (0.0, 0.0));
/// ```
pub fn polar_from_cartesian(real: f64, imaginary: f64) -> (f64, f64) {
    let squared = real * real + imaginary * imaginary;
    // the squares overflow or lose precision far from the unit scale
    let norm = if squared.is_infinite() || squared < f64::MIN_POSITIVE {
        real.hypot(imaginary)
    } else {
        squared.sqrt()
    };
    if norm == 0.0 {
        return (0.0, 0.0);
    }
    // rounding can push the ratio just outside the domain of acos
    let cos = (real / norm).clamp(-1.0, 1.0);
    let angle = if imaginary > 0.0 { cos.acos() } else { -cos.acos() };
    (norm, misc::snap_zero(angle))
}

/// Computes the real and imaginary parts of the number with the given
/// norm and angle.
///
/// Either part closer to zero than 10<sup>−15</sup> is returned as 0.
///
/// # Examples
///
/// ```rust
/// use complex_repr::complex::polar;
/// use std::f64::consts::FRAC_PI_2;
/// assert_eq!(polar::cartesian_from_polar(4.0, FRAC_PI_2), (0.0, 4.0));
/// ```
pub fn cartesian_from_polar(norm: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (misc::snap_zero(norm * cos), misc::snap_zero(norm * sin))
}

/// Checks whether two numbers are equal or relatively close, using
/// [`COMPATIBILITY_THRESHOLD`].
///
/// See [`numbers_compatible_within`].
#[inline]
pub fn numbers_compatible(n1: f64, n2: f64) -> bool {
    numbers_compatible_within(n1, n2, COMPATIBILITY_THRESHOLD)
}

/// Checks whether two numbers are equal, or whether their difference
/// relative to `n1` is below `threshold`.
///
/// The difference is always divided by `n1`, so the test is not
/// symmetric. When `n1` is zero and `n2` is not, the numbers are
/// never compatible.
///
/// # Examples
///
/// ```rust
/// use complex_repr::complex::polar;
/// assert!(polar::numbers_compatible_within(100.0, 100.5, 1e-2));
/// assert!(!polar::numbers_compatible_within(100.0, 102.0, 1e-2));
/// assert!(!polar::numbers_compatible_within(0.0, 1e-30, 1e-2));
/// ```
pub fn numbers_compatible_within(n1: f64, n2: f64, threshold: f64) -> bool {
    if n1 == n2 {
        return true;
    }
    // n1 == 0 gives an infinite or NaN ratio, which fails the test
    ((n1 - n2) / n1).abs() < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn check_polar_from_cartesian() {
        assert_eq!(polar_from_cartesian(3.0, 4.0), (5.0, 0.9272952180016123));
        assert_eq!(polar_from_cartesian(0.0, 4.0), (4.0, FRAC_PI_2));
        assert_eq!(polar_from_cartesian(0.0, -4.0), (4.0, -FRAC_PI_2));
        assert_eq!(polar_from_cartesian(3.0, 0.0), (3.0, 0.0));
        assert!(polar_from_cartesian(3.0, 0.0).1.is_sign_positive());
        assert_eq!(polar_from_cartesian(-3.0, 0.0), (3.0, -PI));
        assert_eq!(polar_from_cartesian(-3.0, -0.0), (3.0, -PI));
        assert_eq!(polar_from_cartesian(0.0, 0.0), (0.0, 0.0));
        assert_eq!(polar_from_cartesian(-0.0, -0.0), (0.0, 0.0));
    }

    #[test]
    fn check_cartesian_from_polar() {
        let (re, im) = cartesian_from_polar(5.0, 0.9272952180016123);
        assert!(close(re, 3.0) && close(im, 4.0));
        assert_eq!(cartesian_from_polar(4.0, FRAC_PI_2), (0.0, 4.0));
        let (re, im) = cartesian_from_polar(2.0, PI);
        assert_eq!((re, im), (-2.0, 0.0));
        assert!(im.is_sign_positive());
        assert_eq!(cartesian_from_polar(0.0, 1.0), (0.0, 0.0));
    }

    #[test]
    fn check_cartesian_round_trip() {
        for a in -5..=5 {
            for b in -5..=5 {
                if a == 0 && b == 0 {
                    continue;
                }
                let (a, b) = (f64::from(a) * 0.75, f64::from(b) * 1.25);
                let (norm, angle) = polar_from_cartesian(a, b);
                let (re, im) = cartesian_from_polar(norm, angle);
                assert!(close(re, a), "real {} became {}", a, re);
                assert!(close(im, b), "imaginary {} became {}", b, im);
            }
        }
    }

    #[test]
    fn check_extreme_magnitudes() {
        let rel_close = |a: f64, b: f64| ((a - b) / b).abs() < 1e-12;
        for &scale in &[1e200, 1e300, 1e-200, 1e-310] {
            for &(a, b) in &[(1.0, 1.0), (-3.0, 4.0), (0.5, -2.0)] {
                let (a, b) = (a * scale, b * scale);
                let (norm, angle) = polar_from_cartesian(a, b);
                assert!(norm.is_finite() && norm > 0.0, "norm of {} {} is {}", a, b, norm);
                assert!(close(angle, b.atan2(a)), "angle of {} {} is {}", a, b, angle);
                // tiny parts are snapped to zero on the way back
                if scale > 1.0 {
                    let (re, im) = cartesian_from_polar(norm, angle);
                    assert!(rel_close(re, a), "real {} became {}", a, re);
                    assert!(rel_close(im, b), "imaginary {} became {}", b, im);
                }
            }
        }
        let (norm, angle) = polar_from_cartesian(1e200, 1e200);
        assert!(close(norm / 1e200, 2f64.sqrt()));
        assert!(close(angle, PI / 4.0));
    }

    #[test]
    fn check_polar_round_trip() {
        for &norm in &[0.5, 1.0, 7.25] {
            for step in -29..=29 {
                let angle = f64::from(step) * 0.1;
                let (re, im) = cartesian_from_polar(norm, angle);
                let (n, a) = polar_from_cartesian(re, im);
                assert!(close(n, norm), "norm {} became {}", norm, n);
                assert!(close(a, angle), "angle {} became {}", angle, a);
            }
        }
    }

    #[test]
    fn check_compatible() {
        assert!(numbers_compatible(5.0, 5.0));
        assert!(numbers_compatible(0.0, 0.0));
        assert!(numbers_compatible(5.0, 5.0 + 1e-9));
        assert!(!numbers_compatible(5.0, 5.001));
        assert!(!numbers_compatible(0.9272952180016123, 0.9));
        assert!(!numbers_compatible(0.0, 1e-300));
        assert!(!numbers_compatible(f64::NAN, f64::NAN));
    }
}
