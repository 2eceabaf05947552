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

use crate::ops::Pow;
use crate::Complex;
use num_traits::{
    identities::{One, Zero},
    ops::inv::Inv,
    ops::mul_add::{MulAdd, MulAddAssign},
    pow::Pow as NumPow,
};

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.real() == 0.0 && self.imaginary() == 0.0
    }

    #[inline]
    fn set_zero(&mut self) {
        self.set_cartesian(0.0, 0.0);
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }

    #[inline]
    fn set_one(&mut self) {
        self.set_cartesian(1.0, 0.0);
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.real() == 1.0 && self.imaginary() == 0.0
    }
}

impl<Rhs> NumPow<Rhs> for Complex
where
    Complex: Pow<Rhs, Output = Complex>,
{
    type Output = Complex;

    #[inline]
    fn pow(self, rhs: Rhs) -> Self::Output {
        Pow::pow(self, rhs)
    }
}

impl Inv for Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        self.recip()
    }
}

impl<'a> Inv for &'a Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        self.recip()
    }
}

impl MulAdd for Complex {
    type Output = Complex;

    #[inline]
    fn mul_add(self, a: Complex, b: Complex) -> Complex {
        self * a + b
    }
}

impl MulAddAssign for Complex {
    #[inline]
    fn mul_add_assign(&mut self, a: Complex, b: Complex) {
        *self = *self * a + b;
    }
}

#[cfg(test)]
mod tests {
    use crate::Complex;
    use num_traits::{Inv, MulAdd, MulAddAssign, One, Zero};

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12
    }

    #[test]
    fn check_identities() {
        let zero = Complex::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.polar(), (0.0, 0.0));
        let one = Complex::one();
        assert!(one.is_one());
        assert_eq!(one.polar(), (1.0, 0.0));

        let mut c = Complex::new(3.0, 4.0);
        assert!(!c.is_zero());
        c.set_zero();
        assert!(c.is_zero());
        c.set_one();
        assert!(c.is_one());
        assert_eq!(c.norm(), 1.0);
    }

    #[test]
    fn check_pow_inv() {
        let c = Complex::from_polar(2.0, 0.5).unwrap();
        let sq = num_traits::Pow::pow(c, 2i32);
        assert!(close(sq.polar(), (4.0, 1.0)));
        let root = num_traits::Pow::pow(c, 0.5f64);
        assert!(close(root.polar(), (2f64.sqrt(), 0.25)));

        let inv = Complex::new(0.0, 2.0).inv();
        assert!(close(inv.cartesian(), (0.0, -0.5)));
        assert!(close((&c).inv().polar(), (0.5, -0.5)));
    }

    #[test]
    fn check_mul_add() {
        let a = Complex::new(1.0, 1.0);
        let b = Complex::new(0.0, 1.0);
        let c = Complex::new(2.0, 0.0);
        assert!(close(a.mul_add(b, c).cartesian(), (1.0, 1.0)));
        let mut d = a;
        d.mul_add_assign(b, c);
        assert!(close(d.cartesian(), (1.0, 1.0)));
    }
}
