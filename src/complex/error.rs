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

use crate::misc::Literal;
use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::num::ParseFloatError;

/**
An error which can be returned when constructing, parsing, updating
or operating on a [`Complex`] number.

The cause is available through [`Error::kind`].

# Examples

```rust
use complex_repr::complex::ErrorKind;
use complex_repr::Complex;
let error = match Complex::from_polar(-1.0, 0.5) {
    Ok(_) => unreachable!(),
    Err(error) => error,
};
assert_eq!(*error.kind(), ErrorKind::NegativeNorm(-1.0));
println!("Construction error: {}", error);
```

[`Complex`]: ../struct.Complex.html
*/
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The cause of an [`Error`].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A negative norm was supplied.
    NegativeNorm(f64),
    /// Both forms were supplied but they describe different numbers.
    ConflictingRepresentation {
        /// The real and imaginary parts supplied.
        cartesian: (f64, f64),
        /// The norm and angle supplied.
        polar: (f64, f64),
    },
    /// Neither a complete cartesian pair nor a complete polar pair was
    /// supplied.
    InsufficientData,
    /// A piece of a string is not a number.
    NumberFormat {
        /// The offending substring.
        src: String,
        /// The underlying float parse error.
        error: ParseFloatError,
    },
    /// A field name other than `real`, `imaginary`, `norm` or `angle`.
    InvalidField(String),
    /// Complex numbers have no order relation.
    Unordered,
    /// The named operation is not supported for complex operands.
    UnsupportedOperation(&'static str),
}

impl Error {
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    pub(crate) fn number_format(src: &str, error: ParseFloatError) -> Error {
        Error::new(ErrorKind::NumberFormat {
            src: src.to_string(),
            error,
        })
    }

    /// Returns the cause of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        use self::ErrorKind::*;
        match self.kind {
            NegativeNorm(norm) => write!(
                f,
                "norm {} is negative, a complex number's norm cannot be negative",
                Literal(norm)
            ),
            ConflictingRepresentation { cartesian, polar } => write!(
                f,
                "cartesian form ({}, {}) and polar form ({}, {}) were both \
                 specified but are not compatible",
                Literal(cartesian.0),
                Literal(cartesian.1),
                Literal(polar.0),
                Literal(polar.1)
            ),
            InsufficientData => f.write_str(
                "not enough information to create a complex number, need \
                 real and imaginary parts or norm and angle",
            ),
            NumberFormat { ref src, .. } => {
                write!(f, "could not parse \"{}\" as a number", src)
            }
            InvalidField(ref name) => write!(
                f,
                "unknown field \"{}\", complex numbers only have real, \
                 imaginary, norm and angle",
                name
            ),
            Unordered => {
                f.write_str("no order relation is defined between complex numbers")
            }
            UnsupportedOperation(op) => {
                write!(f, "{} is not supported for complex operands", op)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.kind {
            ErrorKind::NumberFormat { ref error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_display() {
        let e = Error::new(ErrorKind::NegativeNorm(-1.0));
        assert_eq!(
            e.to_string(),
            "norm -1.0 is negative, a complex number's norm cannot be negative"
        );
        let e = Error::new(ErrorKind::ConflictingRepresentation {
            cartesian: (3.0, 4.0),
            polar: (5.0, 0.9),
        });
        assert_eq!(
            e.to_string(),
            "cartesian form (3.0, 4.0) and polar form (5.0, 0.9) were both \
             specified but are not compatible"
        );
        let e = Error::new(ErrorKind::UnsupportedOperation("raising to a complex power"));
        assert_eq!(
            e.to_string(),
            "raising to a complex power is not supported for complex operands"
        );
    }

    #[test]
    fn check_source() {
        let float_err = "4y".parse::<f64>().unwrap_err();
        let e = Error::number_format("4y", float_err.clone());
        assert_eq!(e.to_string(), "could not parse \"4y\" as a number");
        let source = e.source().expect("number format errors have a source");
        assert_eq!(source.to_string(), float_err.to_string());
        assert!(Error::new(ErrorKind::Unordered).source().is_none());
    }
}
