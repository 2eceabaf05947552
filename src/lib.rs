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

//! # Complex numbers in two forms
//!
//! The `complex-repr` crate provides the [`Complex`] type, a complex
//! number that keeps both its cartesian form (real and imaginary
//! parts) and its polar form (norm and angle). Every constructor,
//! setter and operation leaves the two forms in agreement, and the
//! number remembers which of the two it was created from.
//!
//! This crate is free software: you can redistribute it and/or modify
//! it under the terms of the GNU Lesser General Public License as
//! published by the Free Software Foundation, either version 3 of the
//! License, or (at your option) any later version.
//!
//! # Basic use
//!
//! Numbers can be created from either form, from a string, or by
//! combining other numbers with the usual operators.
//!
//! ```rust
//! use complex_repr::{Complex, I};
//!
//! let a = Complex::new(3.0, 4.0);
//! assert_eq!(a.norm(), 5.0);
//!
//! let b = Complex::from_polar(2.0, std::f64::consts::FRAC_PI_2).unwrap();
//! assert_eq!(b.cartesian(), (0.0, 2.0));
//!
//! let c: Complex = "1 + 2i".parse().unwrap();
//! assert_eq!(c, 1i32 + 2i32 * I);
//! assert_eq!((a + c).to_string(), "4.0 + 6.0i");
//! ```
//!
//! Strings may also use trigonometric or exponential notation.
//!
//! ```rust
//! use complex_repr::Complex;
//!
//! let t = Complex::parse("2(cos(0.5) + i sin(0.5))").unwrap();
//! let e = Complex::parse("2e^(0.5i)").unwrap();
//! assert_eq!(t.polar(), (2.0, 0.5));
//! assert_eq!(e.polar(), (2.0, 0.5));
//! ```
//!
//! # Optional features
//!
//! The crate has two optional features:
//!
//!  1. `serde`, which implements [`Serialize`] and [`Deserialize`]
//!     for [`Complex`].
//!  2. `num-traits`, which implements the identity, power, inverse
//!     and fused multiply-add traits of the [num-traits crate].
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [num-traits crate]: https://crates.io/crates/num-traits

#![warn(missing_docs)]

pub mod complex;
mod misc;
pub mod ops;

pub use crate::complex::big::Complex;

use crate::ops::{Exp, Ln, Log};

/// The imaginary unit *i*.
pub const I: Complex = Complex::I;

/// Computes the exponential of a number.
///
/// Works for [`Complex`] numbers as well as for [`f64`].
///
/// # Examples
///
/// ```rust
/// use complex_repr::{exp, Complex, I};
/// assert_eq!(3i32 * exp(2i32 * I), Complex::from_polar(3.0, 2.0).unwrap());
/// assert_eq!(exp(0.0f64), 1.0);
/// ```
#[inline]
pub fn exp<T: Exp>(x: T) -> T::Output {
    x.exp()
}

/// Computes the natural logarithm of a number.
///
/// # Examples
///
/// ```rust
/// use complex_repr::{ln, Complex};
/// let z = Complex::from_polar(3.0, 2.0).unwrap();
/// assert_eq!(ln(z), Complex::new(3f64.ln(), 2.0));
/// ```
#[inline]
pub fn ln<T: Ln>(x: T) -> T::Output {
    x.ln()
}

/// Computes the logarithm of a number to the given base.
///
/// # Examples
///
/// ```rust
/// use complex_repr::{log, Complex};
/// let z = log(Complex::new(100.0, 0.0), 10.0);
/// assert!((z.real() - 2.0).abs() < 1e-12);
/// assert_eq!(z.imaginary(), 0.0);
/// ```
#[inline]
pub fn log<T: Log>(x: T, base: f64) -> T::Output {
    x.log(base)
}

#[cfg(test)]
mod tests {
    use crate::{exp, ln, log, Complex, I};

    #[test]
    fn check_unit() {
        assert_eq!(3i32 + 2i32 * I, Complex::new(3.0, 2.0));
        assert_eq!(I * I, Complex::new(-1.0, 0.0));
        assert_eq!(I.polar(), (1.0, std::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn check_free_functions() {
        let z = 3i32 * exp(2i32 * I);
        assert_eq!(z, Complex::from_polar(3.0, 2.0).unwrap());
        assert!(!z.is_cartesian());

        let w = ln(Complex::from_polar(3.0, 2.0).unwrap());
        assert_eq!(w, Complex::new(3f64.ln(), 2.0));

        let z = Complex::new(8.0, 0.0);
        let l = log(&z, 2.0);
        assert!((l.real() - 3.0).abs() < 1e-12);
        assert_eq!(ln(1.0f64), 0.0);
        assert!((log(8.0f64, 2.0) - 3.0).abs() < 1e-12);
    }
}
