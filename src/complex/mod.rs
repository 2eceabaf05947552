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

//! Complex numbers kept in both cartesian and polar form.
//!
//! This module provides support for complex numbers of type
//! [`Complex`](../struct.Complex.html), along with the conversions
//! between the two forms and the pieces used to build a number.

mod arith;
pub(crate) mod big;
mod cmp;
mod error;
#[cfg(feature = "num-traits")]
mod impl_num_traits;
mod parse;
pub mod polar;
#[cfg(feature = "serde")]
mod serde;
mod traits;

pub use crate::complex::big::Components;
pub use crate::complex::error::{Error, ErrorKind};

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// One of the four stored values of a
/// [`Complex`](../struct.Complex.html) number.
///
/// A field can be parsed from its name; `theta` is accepted for the
/// angle.
///
/// # Examples
///
/// ```rust
/// use complex_repr::complex::{ErrorKind, Field};
/// assert_eq!("imaginary".parse::<Field>().unwrap(), Field::Imaginary);
/// assert_eq!("theta".parse::<Field>().unwrap(), Field::Angle);
/// let err = "foo".parse::<Field>().unwrap_err();
/// assert_eq!(*err.kind(), ErrorKind::InvalidField("foo".to_string()));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// The real part.
    Real,
    /// The imaginary part.
    Imaginary,
    /// The norm.
    Norm,
    /// The angle in radians.
    Angle,
}

impl Field {
    /// Returns the name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Real => "real",
            Field::Imaginary => "imaginary",
            Field::Norm => "norm",
            Field::Angle => "angle",
        }
    }
}

impl FromStr for Field {
    type Err = Error;
    fn from_str(s: &str) -> Result<Field, Error> {
        match s {
            "real" => Ok(Field::Real),
            "imaginary" => Ok(Field::Imaginary),
            "norm" => Ok(Field::Norm),
            "angle" | "theta" => Ok(Field::Angle),
            _ => Err(Error::new(ErrorKind::InvalidField(s.to_string()))),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// The notation used to format a [`Complex`](../struct.Complex.html)
/// number.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Style {
    /// `a + bi`
    #[default]
    Cartesian,
    /// `r * (cos(θ) + isin(θ))`
    Trigonometric,
    /// `re^θi`
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, Field, Style};
    use crate::Complex;

    #[test]
    fn check_field_names() {
        for &field in [Field::Real, Field::Imaginary, Field::Norm, Field::Angle].iter() {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
        for &bad in ["", "Real", "q", "_Complex__norm", "cartesian"].iter() {
            let err = bad.parse::<Field>().unwrap_err();
            assert_eq!(*err.kind(), ErrorKind::InvalidField(bad.to_string()));
        }
    }

    #[test]
    fn check_default_style() {
        let c = Complex::new(1.5, -2.0);
        assert_eq!(c.to_string_style(Style::default()), c.to_string());
        assert_eq!(c.to_string(), "1.5 - 2.0i");
    }
}
