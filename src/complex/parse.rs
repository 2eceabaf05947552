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

use crate::complex::error::{Error, ErrorKind};
use crate::Complex;

const IMAGINARY_MARKER: char = 'i';

pub(crate) fn parse(src: &str) -> Result<Complex, Error> {
    let normalized = normalize(src);
    let s = normalized.as_str();
    if s.contains("e^") {
        parse_exponential(s)
    } else if s.contains("cos") || s.contains("sin") {
        parse_trigonometric(s)
    } else {
        parse_cartesian(s)
    }
}

// `exp` is rewritten before the `x` multiplication signs are dropped,
// so that it survives.
fn normalize(src: &str) -> String {
    src.replace("exp", "e^")
        .chars()
        .filter(|&c| !matches!(c, '(' | ')' | '*' | 'x') && !c.is_whitespace())
        .collect()
}

fn parse_exponential(s: &str) -> Result<Complex, Error> {
    let s = s.replace(IMAGINARY_MARKER, "");
    let (norm, angle) = match s.split_once("e^") {
        Some(parts) => parts,
        None => return Err(Error::new(ErrorKind::InsufficientData)),
    };
    Complex::from_polar(parse_float(norm)?, parse_float(angle)?)
}

// Only the cosine term is read; a sine term after the first `+` only
// repeats the same norm and angle.
fn parse_trigonometric(s: &str) -> Result<Complex, Error> {
    let first_term = s.split_once('+').map_or(s, |(first, _)| first);
    // with the marker gone, "isin" has become "sn"
    let first_term = first_term.replace(IMAGINARY_MARKER, "");
    let (norm, angle) = match first_term
        .split_once("cos")
        .or_else(|| first_term.split_once("sn"))
    {
        Some(parts) => parts,
        None => return Err(Error::new(ErrorKind::InsufficientData)),
    };
    Complex::from_polar(parse_float(norm)?, parse_float(angle)?)
}

fn parse_cartesian(s: &str) -> Result<Complex, Error> {
    if let Some(sep) = find_separator(s.as_bytes()) {
        let real = parse_float(&s[..sep])?;
        // a `+` only separates, a `-` is also the sign of the imaginary part
        let imaginary = match s.as_bytes()[sep] {
            b'+' => parse_imaginary(&s[sep + 1..])?,
            _ => parse_imaginary(&s[sep..])?,
        };
        return Ok(Complex::new(real, imaginary));
    }
    if s.contains(IMAGINARY_MARKER) {
        Ok(Complex::new(0.0, parse_imaginary(s)?))
    } else {
        Ok(Complex::new(parse_float(s)?, 0.0))
    }
}

// The first `+`, or failing that the first `-`, that is neither a
// leading sign nor the sign of an exponent.
fn find_separator(bytes: &[u8]) -> Option<usize> {
    let is_sign_at = |sign: u8| {
        (1..bytes.len()).find(|&i| bytes[i] == sign && !matches!(bytes[i - 1], b'e' | b'E'))
    };
    is_sign_at(b'+').or_else(|| is_sign_at(b'-'))
}

fn parse_imaginary(s: &str) -> Result<f64, Error> {
    let coefficient = s.replace(IMAGINARY_MARKER, "");
    match coefficient.as_str() {
        // a bare marker
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        c => parse_float(c),
    }
}

fn parse_float(s: &str) -> Result<f64, Error> {
    s.parse::<f64>().map_err(|e| Error::number_format(s, e))
}

#[cfg(test)]
mod tests {
    use crate::complex::ErrorKind;
    use crate::Complex;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn check_cartesian() {
        let c = Complex::parse("3+4i").unwrap();
        assert_eq!(c.cartesian(), (3.0, 4.0));
        assert_eq!(c.polar(), (5.0, 0.9272952180016123));
        assert!(c.is_cartesian());

        let good_strings = [
            ("3 + 4 * i", 3.0, 4.0),
            ("(3) + (4i)", 3.0, 4.0),
            ("4i", 0.0, 4.0),
            ("-4i", 0.0, -4.0),
            ("3", 3.0, 0.0),
            ("-2.5", -2.5, 0.0),
            ("3 - 4i", 3.0, -4.0),
            ("-3-4i", -3.0, -4.0),
            ("1e-3 + 2e+2i", 0.001, 200.0),
            ("1 + 2.5 x i", 1.0, 2.5),
            ("i", 0.0, 1.0),
            ("3 - i", 3.0, -1.0),
            ("3 + -4i", 3.0, -4.0),
            ("3+-i", 3.0, -1.0),
            ("3 + i", 3.0, 1.0),
        ];
        for &(s, re, im) in good_strings.iter() {
            match Complex::parse(s) {
                Ok(c) => {
                    assert_eq!(c.real(), re, "real mismatch for {}", s);
                    assert_eq!(c.imaginary(), im, "imaginary mismatch for {}", s);
                    assert!(c.is_cartesian(), "{} not cartesian", s);
                }
                Err(e) => panic!("could not parse {} because {}", s, e),
            }
        }
    }

    #[test]
    fn check_trigonometric() {
        let c = Complex::parse("3cos(4) + 4isin(1)").unwrap();
        assert_eq!(c.polar(), (3.0, 4.0));
        assert!(close(c.real(), -1.960930862590836));
        assert!(close(c.imaginary(), -2.2704074859237844));
        assert!(!c.is_cartesian());

        let c = Complex::parse("3cos(0)").unwrap();
        assert_eq!(c.cartesian(), (3.0, 0.0));
        assert_eq!(c.polar(), (3.0, 0.0));

        let c = Complex::parse("4isin(1.5707963267948966)").unwrap();
        assert_eq!(c.cartesian(), (0.0, 4.0));
        assert_eq!(c.polar(), (4.0, FRAC_PI_2));

        let s = "5*(cos(0.9272952180016123i) + isin(0.9272952180016123i)";
        let c = Complex::parse(s).unwrap();
        assert_eq!(c.polar(), (5.0, 0.9272952180016123));
        assert_eq!(c, Complex::new(3.0, 4.0));
    }

    #[test]
    fn check_exponential() {
        let c = Complex::parse("5e^0.9272952180016123i").unwrap();
        assert_eq!(c.polar(), (5.0, 0.9272952180016123));
        assert!(close(c.real(), 3.0));
        assert!(close(c.imaginary(), 4.0));
        assert!(!c.is_cartesian());
        assert_eq!(c, Complex::new(3.0, 4.0));

        let c = Complex::parse("2 * exp(1.5 * i)").unwrap();
        assert_eq!(c.polar(), (2.0, 1.5));
        let c = Complex::parse("5e^6i").unwrap();
        assert_eq!(c.polar(), (5.0, 6.0));
    }

    #[test]
    fn check_errors() {
        let bad_strings = ["4y", "3+4j", "", "cos(1)", "3e^", "1+2+3i", "3i+4"];
        for &s in bad_strings.iter() {
            match Complex::parse(s) {
                Ok(c) => panic!("{} parsed as {}", s, c),
                Err(e) => assert!(
                    matches!(e.kind(), ErrorKind::NumberFormat { .. }),
                    "{} failed with {}",
                    s,
                    e
                ),
            }
        }

        let err = Complex::parse("4y").unwrap_err();
        match err.kind() {
            ErrorKind::NumberFormat { src, .. } => assert_eq!(src, "4y"),
            other => panic!("unexpected {:?}", other),
        }

        let err = Complex::parse("3 + 4cos(1)").unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::InsufficientData);
        let err = Complex::parse("-2e^1i").unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::NegativeNorm(-2.0));
    }
}
