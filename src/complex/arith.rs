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
use crate::ops::Pow;
use crate::Complex;
use az::Az;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Sums work on the cartesian parts and products on the polar pair. The
// result keeps the form flag of the left operand.

fn add_complex(lhs: &Complex, rhs: &Complex) -> Complex {
    let mut new = *lhs;
    new.assign_cartesian(lhs.real() + rhs.real(), lhs.imaginary() + rhs.imaginary());
    new
}

fn sub_complex(lhs: &Complex, rhs: &Complex) -> Complex {
    let mut new = *lhs;
    new.assign_cartesian(lhs.real() - rhs.real(), lhs.imaginary() - rhs.imaginary());
    new
}

fn mul_complex(lhs: &Complex, rhs: &Complex) -> Complex {
    let mut new = *lhs;
    new.assign_polar(lhs.norm() * rhs.norm(), lhs.angle() + rhs.angle());
    new
}

fn div_complex(lhs: &Complex, rhs: &Complex) -> Complex {
    let mut new = *lhs;
    new.assign_polar(lhs.norm() / rhs.norm(), lhs.angle() - rhs.angle());
    new
}

fn pow_real(base: &Complex, exponent: f64) -> Complex {
    let mut new = *base;
    new.assign_polar(base.norm().powf(exponent), base.angle() * exponent);
    new
}

fn complex_exponent() -> Error {
    Error::new(ErrorKind::UnsupportedOperation("raising to a complex power"))
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.real(), -self.imaginary())
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

macro_rules! arith_binary_self {
    ($func:ident; $Imp:ident $method:ident; $ImpAssign:ident $method_assign:ident) => {
        impl $Imp<Complex> for Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                $func(&self, &rhs)
            }
        }

        impl<'a> $Imp<&'a Complex> for Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: &'a Complex) -> Complex {
                $func(&self, rhs)
            }
        }

        impl<'a> $Imp<Complex> for &'a Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                $func(self, &rhs)
            }
        }

        impl<'a, 'b> $Imp<&'a Complex> for &'b Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: &'a Complex) -> Complex {
                $func(self, rhs)
            }
        }

        impl $ImpAssign<Complex> for Complex {
            #[inline]
            fn $method_assign(&mut self, rhs: Complex) {
                *self = $func(self, &rhs);
            }
        }

        impl<'a> $ImpAssign<&'a Complex> for Complex {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a Complex) {
                *self = $func(self, rhs);
            }
        }
    };
}

// A primitive operand is taken as the complex number (value, 0).
macro_rules! arith_prim {
    ($func:ident; $Imp:ident $method:ident; $ImpAssign:ident $method_assign:ident; $($T:ty)*) => { $(
        impl $Imp<$T> for Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: $T) -> Complex {
                $func(&self, &Complex::from(rhs))
            }
        }

        impl<'a> $Imp<$T> for &'a Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: $T) -> Complex {
                $func(self, &Complex::from(rhs))
            }
        }

        impl $ImpAssign<$T> for Complex {
            #[inline]
            fn $method_assign(&mut self, rhs: $T) {
                *self = $func(self, &Complex::from(rhs));
            }
        }
    )* };
}

// The complex operand stays on the left so that its form flag is kept.
macro_rules! arith_prim_commut {
    ($func:ident; $Imp:ident $method:ident; $($T:ty)*) => { $(
        impl $Imp<Complex> for $T {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                $func(&rhs, &Complex::from(self))
            }
        }

        impl<'a> $Imp<&'a Complex> for $T {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: &'a Complex) -> Complex {
                $func(rhs, &Complex::from(self))
            }
        }
    )* };
}

macro_rules! arith_prim_noncommut {
    ($func:ident; $Imp:ident $method:ident; $($T:ty)*) => { $(
        impl $Imp<Complex> for $T {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                $func(&Complex::from(self), &rhs)
            }
        }

        impl<'a> $Imp<&'a Complex> for $T {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: &'a Complex) -> Complex {
                $func(&Complex::from(self), rhs)
            }
        }
    )* };
}

macro_rules! pow_prim {
    ($($T:ty)*) => { $(
        impl Pow<$T> for Complex {
            type Output = Complex;
            #[inline]
            fn pow(self, rhs: $T) -> Complex {
                pow_real(&self, rhs.az::<f64>())
            }
        }

        impl<'a> Pow<$T> for &'a Complex {
            type Output = Complex;
            #[inline]
            fn pow(self, rhs: $T) -> Complex {
                pow_real(self, rhs.az::<f64>())
            }
        }

        impl Pow<Complex> for $T {
            type Output = Result<Complex, Error>;
            #[inline]
            fn pow(self, _rhs: Complex) -> Result<Complex, Error> {
                Err(complex_exponent())
            }
        }
    )* };
}

macro_rules! arith_prims {
    ($($T:ty)*) => {
        arith_prim! { add_complex; Add add; AddAssign add_assign; $($T)* }
        arith_prim! { sub_complex; Sub sub; SubAssign sub_assign; $($T)* }
        arith_prim! { mul_complex; Mul mul; MulAssign mul_assign; $($T)* }
        arith_prim! { div_complex; Div div; DivAssign div_assign; $($T)* }
        arith_prim_commut! { add_complex; Add add; $($T)* }
        arith_prim_noncommut! { sub_complex; Sub sub; $($T)* }
        arith_prim_commut! { mul_complex; Mul mul; $($T)* }
        arith_prim_noncommut! { div_complex; Div div; $($T)* }
        pow_prim! { $($T)* }
    };
}

arith_binary_self! { add_complex; Add add; AddAssign add_assign }
arith_binary_self! { sub_complex; Sub sub; SubAssign sub_assign }
arith_binary_self! { mul_complex; Mul mul; MulAssign mul_assign }
arith_binary_self! { div_complex; Div div; DivAssign div_assign }
arith_prims! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64 }

impl Pow<Complex> for Complex {
    type Output = Result<Complex, Error>;
    /// Raising to a complex power is not supported and always fails with
    /// [`ErrorKind::UnsupportedOperation`].
    ///
    /// [`ErrorKind::UnsupportedOperation`]: complex/enum.ErrorKind.html#variant.UnsupportedOperation
    #[inline]
    fn pow(self, _rhs: Complex) -> Result<Complex, Error> {
        Err(complex_exponent())
    }
}

impl<'a> Pow<&'a Complex> for Complex {
    type Output = Result<Complex, Error>;
    #[inline]
    fn pow(self, _rhs: &'a Complex) -> Result<Complex, Error> {
        Err(complex_exponent())
    }
}

impl<'a> Pow<Complex> for &'a Complex {
    type Output = Result<Complex, Error>;
    #[inline]
    fn pow(self, _rhs: Complex) -> Result<Complex, Error> {
        Err(complex_exponent())
    }
}
