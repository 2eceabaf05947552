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

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Magnitude below which a computed component is taken to be zero.
pub const ZERO_SNAP: f64 = 1e-15;

/// Collapses values closer to zero than [`ZERO_SNAP`] onto `+0.0`.
#[inline]
pub fn snap_zero(f: f64) -> f64 {
    if f.abs() < ZERO_SNAP {
        0.0
    } else {
        f
    }
}

// -0.0 == 0.0, so this only ever replaces a negative zero.
#[inline]
pub fn unsign_zero(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

/// Rounds to `digits` decimal places, ties to even. A negative count
/// rounds to tens, hundreds and so on.
pub fn round_digits(f: f64, digits: i32) -> f64 {
    if !f.is_finite() {
        return f;
    }
    if digits >= 0 {
        let scale = 10f64.powi(digits);
        let scaled = f * scale;
        // already finer than the requested precision
        if !scaled.is_finite() {
            return f;
        }
        scaled.round_ties_even() / scale
    } else {
        let scale = 10f64.powi(digits.saturating_neg());
        if scale.is_infinite() {
            return 0.0;
        }
        (f / scale).round_ties_even() * scale
    }
}

/// Renders a float with a mandatory fractional part, `3.0` rather
/// than `3`, and a signed exponent of at least two digits, `1e+16` and
/// `1.5e-07`.
#[derive(Clone, Copy, Debug)]
pub struct Literal(pub f64);

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.0.is_nan() {
            return f.write_str("nan");
        }
        // Debug picks the shortest round-trip digits and switches to
        // exponent notation below 1e-4 and from 1e16
        let s = format!("{:?}", self.0);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&s),
        }
    }
}
