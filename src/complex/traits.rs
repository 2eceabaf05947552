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

use crate::complex::{Error, Style};
use crate::ops::{Exp, Ln, Log};
use crate::Complex;
use az::Az;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

impl Default for Complex {
    #[inline]
    fn default() -> Complex {
        Complex::new(0.0, 0.0)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_string_style(Style::Cartesian))
    }
}

impl FromStr for Complex {
    type Err = Error;
    #[inline]
    fn from_str(src: &str) -> Result<Complex, Error> {
        Complex::parse(src)
    }
}

macro_rules! from_re {
    ($($Re: ty)*) => { $(
        impl From<$Re> for Complex {
            #[inline]
            fn from(re: $Re) -> Complex {
                Complex::new(re.az::<f64>(), 0.0)
            }
        }
    )* };
}

from_re! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64 }

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Complex {
        Complex::new(re, im)
    }
}

impl<'a> From<&'a Complex> for (f64, f64) {
    #[inline]
    fn from(c: &'a Complex) -> (f64, f64) {
        c.cartesian()
    }
}

impl Exp for Complex {
    type Output = Complex;
    #[inline]
    fn exp(self) -> Complex {
        Complex::exp(&self)
    }
}

impl<'a> Exp for &'a Complex {
    type Output = Complex;
    #[inline]
    fn exp(self) -> Complex {
        Complex::exp(self)
    }
}

impl Ln for Complex {
    type Output = Complex;
    #[inline]
    fn ln(self) -> Complex {
        Complex::ln(&self)
    }
}

impl<'a> Ln for &'a Complex {
    type Output = Complex;
    #[inline]
    fn ln(self) -> Complex {
        Complex::ln(self)
    }
}

impl Log for Complex {
    type Output = Complex;
    #[inline]
    fn log(self, base: f64) -> Complex {
        Complex::log(&self, base)
    }
}

impl<'a> Log for &'a Complex {
    type Output = Complex;
    #[inline]
    fn log(self, base: f64) -> Complex {
        Complex::log(self, base)
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::{Exp, Ln};
    use crate::Complex;

    #[test]
    fn check_display() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3.0 + 4.0i");
        assert_eq!(Complex::new(3.0, -4.5).to_string(), "3.0 - 4.5i");
        assert_eq!(Complex::default().to_string(), "0.0 - 0.0i");
        assert_eq!(format!("{}", Complex::I), "0.0 + 1.0i");
    }

    #[test]
    fn check_from() {
        assert_eq!(Complex::from(2u8).cartesian(), (2.0, 0.0));
        assert_eq!(Complex::from(-2i64).polar(), (2.0, -std::f64::consts::PI));
        assert_eq!(Complex::from(1.5f32).cartesian(), (1.5, 0.0));
        let c = Complex::from((3.0, 4.0));
        assert_eq!(<(f64, f64)>::from(&c), (3.0, 4.0));
        let parsed: Complex = "3+4i".parse().unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn check_trait_dispatch() {
        let c = Complex::new(0.0, 2.0);
        assert_eq!(Exp::exp(c), c.exp());
        assert_eq!(Exp::exp(&c).polar(), (1.0, 2.0));
        assert_eq!(Ln::ln(Complex::from_polar(3.0, 2.0).unwrap()), Complex::new(3f64.ln(), 2.0));
    }
}
