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

use crate::complex::{Error, ErrorKind};
use crate::Complex;
use az::Az;
use std::cmp::Ordering;

// Either form matching exactly is enough.
impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Complex) -> bool {
        (self.real() == other.real() && self.imaginary() == other.imaginary())
            || (self.norm() == other.norm() && self.angle() == other.angle())
    }
}

// A bare number is compared with the real part only.
macro_rules! eq_re {
    ($($Re: ty)*) => { $(
        impl PartialEq<$Re> for Complex {
            #[inline]
            fn eq(&self, other: &$Re) -> bool {
                self.real() == (*other).az::<f64>()
            }
        }

        impl PartialEq<Complex> for $Re {
            #[inline]
            fn eq(&self, other: &Complex) -> bool {
                other.real() == (*self).az::<f64>()
            }
        }
    )* };
}

eq_re! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64 }

impl Complex {
    /// Compares two complex numbers.
    ///
    /// Complex numbers are not ordered, so this always fails. It stands
    /// in for the `<`, `>`, `<=` and `>=` operators, which `Complex`
    /// does not implement.
    ///
    /// # Errors
    ///
    /// Always fails with [`ErrorKind::Unordered`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::complex::ErrorKind;
    /// use complex_repr::Complex;
    /// let (a, b) = (Complex::new(1.0, 0.0), Complex::new(2.0, 0.0));
    /// let err = a.try_cmp(&b).unwrap_err();
    /// assert_eq!(*err.kind(), ErrorKind::Unordered);
    /// ```
    ///
    /// [`ErrorKind::Unordered`]: complex/enum.ErrorKind.html#variant.Unordered
    #[inline]
    pub fn try_cmp(&self, _other: &Complex) -> Result<Ordering, Error> {
        Err(Error::new(ErrorKind::Unordered))
    }

    /// Checks whether `self` < `other`; always fails, see [`try_cmp`].
    ///
    /// [`try_cmp`]: #method.try_cmp
    #[inline]
    pub fn try_lt(&self, other: &Complex) -> Result<bool, Error> {
        self.try_cmp(other).map(|o| o == Ordering::Less)
    }

    /// Checks whether `self` > `other`; always fails, see [`try_cmp`].
    ///
    /// [`try_cmp`]: #method.try_cmp
    #[inline]
    pub fn try_gt(&self, other: &Complex) -> Result<bool, Error> {
        self.try_cmp(other).map(|o| o == Ordering::Greater)
    }

    /// Checks whether `self` <= `other`; always fails, see [`try_cmp`].
    ///
    /// [`try_cmp`]: #method.try_cmp
    #[inline]
    pub fn try_le(&self, other: &Complex) -> Result<bool, Error> {
        self.try_cmp(other).map(|o| o != Ordering::Greater)
    }

    /// Checks whether `self` >= `other`; always fails, see [`try_cmp`].
    ///
    /// [`try_cmp`]: #method.try_cmp
    #[inline]
    pub fn try_ge(&self, other: &Complex) -> Result<bool, Error> {
        self.try_cmp(other).map(|o| o != Ordering::Less)
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::{Components, ErrorKind};
    use crate::Complex;

    #[test]
    fn check_eq() {
        let c = Complex::new(3.0, 4.0);
        let p = Complex::from_polar(5.0, 0.9272952180016123).unwrap();
        assert_eq!(c, p);
        assert!(!(c != p));
        assert_ne!(c, Complex::new(3.0, -4.0));

        // both forms supplied: cartesian parts match one number, the
        // polar pair another
        let both = Components::new().real(3.0).imaginary(4.0).norm(5.0);
        let both = both.angle(0.92729521800161).resolve().unwrap();
        assert_eq!(both, c);
        assert_eq!(both, Complex::from_polar(5.0, 0.92729521800161).unwrap());

        let z = Complex::new(-0.0, 0.0);
        assert_eq!(z, Complex::new(0.0, -0.0));
    }

    #[test]
    fn check_eq_real() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c, 3.0f64);
        assert_eq!(c, 3i32);
        assert_eq!(3u8, c);
        assert_eq!(3.0f32, c);
        assert!(c != 4.0f64);
        assert_eq!(Complex::new(2.0, 0.0), 2i64);
    }

    #[test]
    fn check_unordered() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        for result in [a.try_lt(&b), a.try_gt(&b), a.try_le(&b), a.try_ge(&b)] {
            assert_eq!(*result.unwrap_err().kind(), ErrorKind::Unordered);
        }
        assert_eq!(*a.try_cmp(&a).unwrap_err().kind(), ErrorKind::Unordered);
    }
}
