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

//! Operations on numbers.
//!
//! The traits here let the same call work on a plain `f64` and on a
//! [`Complex`](../struct.Complex.html) number.

/// The power operation.
///
/// # Examples
///
/// ```rust
/// use complex_repr::ops::Pow;
/// struct U(u32);
/// impl Pow<u16> for U {
///     type Output = u32;
///     fn pow(self, rhs: u16) -> u32 {
///         self.0.pow(rhs as u32)
///     }
/// }
/// let u = U(5);
/// assert_eq!(u.pow(2_u16), 25);
/// ```
pub trait Pow<Rhs> {
    /// The resulting type after the power operation.
    type Output;
    /// Performs the power operation.
    fn pow(self, rhs: Rhs) -> Self::Output;
}

/// The exponential function.
///
/// # Examples
///
/// ```rust
/// use complex_repr::ops::Exp;
/// assert_eq!(Exp::exp(0.0_f64), 1.0);
/// ```
pub trait Exp {
    /// The resulting type.
    type Output;
    /// Computes *e* raised to `self`.
    fn exp(self) -> Self::Output;
}

/// The natural logarithm.
///
/// # Examples
///
/// ```rust
/// use complex_repr::ops::Ln;
/// assert_eq!(Ln::ln(1.0_f64), 0.0);
/// ```
pub trait Ln {
    /// The resulting type.
    type Output;
    /// Computes the natural logarithm of `self`.
    fn ln(self) -> Self::Output;
}

/// The logarithm with an explicit base.
///
/// # Examples
///
/// ```rust
/// use complex_repr::ops::Log;
/// assert_eq!(Log::log(8.0_f64, 2.0), 3.0);
/// ```
pub trait Log<Base = f64> {
    /// The resulting type.
    type Output;
    /// Computes the logarithm of `self` in `base`.
    fn log(self, base: Base) -> Self::Output;
}

impl Pow<f64> for f64 {
    type Output = f64;
    #[inline]
    fn pow(self, rhs: f64) -> f64 {
        self.powf(rhs)
    }
}

impl Pow<i32> for f64 {
    type Output = f64;
    #[inline]
    fn pow(self, rhs: i32) -> f64 {
        self.powi(rhs)
    }
}

impl Exp for f64 {
    type Output = f64;
    #[inline]
    fn exp(self) -> f64 {
        f64::exp(self)
    }
}

impl Ln for f64 {
    type Output = f64;
    #[inline]
    fn ln(self) -> f64 {
        f64::ln(self)
    }
}

impl Log for f64 {
    type Output = f64;
    #[inline]
    fn log(self, base: f64) -> f64 {
        f64::log(self, base)
    }
}
