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
use crate::complex::polar::{self, numbers_compatible};
use crate::complex::{parse, Field, Style};
use crate::misc::{self, Literal};
use std::f64::consts::FRAC_PI_2;

/**
A complex number kept in both cartesian and polar form.

The real and imaginary parts, the norm and the angle (in radians) are
all stored, and they are kept consistent with each other: updating any
one of them recomputes the pair it does not belong to before the
update returns.

The number also remembers whether it was created from the cartesian
form or from the polar form. [`is_cartesian`] reports this, and
operations that need to pick one form, such as [`conjugate`] or
[`round`], use it.

# Examples

```rust
use complex_repr::Complex;
let mut c = Complex::new(3.0, 4.0);
assert_eq!(c.norm(), 5.0);
assert_eq!(c.angle(), 0.9272952180016123);
c.set_real(4.0);
assert_eq!(c.norm(), 5.656854249492381);

let p = Complex::from_polar(5.0, 0.9272952180016123).unwrap();
assert!(!p.is_cartesian());
assert_eq!(c - 1.0f64, p);
```

Numbers can also be parsed from mathematical expressions in
cartesian, trigonometric or exponential notation.

```rust
use complex_repr::Complex;
let a: Complex = "3 + 4 * i".parse().unwrap();
let b = Complex::parse("5e^0.9272952180016123i").unwrap();
let c = Complex::parse("5 * (cos(0.9272952180016123) + isin(0.9272952180016123))").unwrap();
assert_eq!(a, b);
assert_eq!(b, c);
```

[`is_cartesian`]: #method.is_cartesian
[`conjugate`]: #method.conjugate
[`round`]: #method.round
*/
#[derive(Clone, Copy, Debug)]
pub struct Complex {
    real: f64,
    imaginary: f64,
    norm: f64,
    angle: f64,
    cartesian: bool,
}

/**
The pieces from which a [`Complex`] number can be resolved.

Exactly one way of building the number is used, chosen in this order:

 1. `from_complex`: the other number is copied, form flag included,
    and every other piece is ignored.
 2. `expression`: the string is parsed with [`Complex::parse`].
 3. `real` and `imaginary`: the cartesian form. If `norm` and `angle`
    are given too, they must agree with the polar form computed from
    the cartesian parts, and are then stored as given.
 4. `norm` and `angle`: the polar form.

A negative `norm` is rejected before any of the last three ways is
tried, and a set of pieces that contains no complete pair is rejected
with [`ErrorKind::InsufficientData`].

# Examples

```rust
use complex_repr::complex::{Components, ErrorKind};
let c = Components::new().real(3.0).imaginary(4.0).resolve().unwrap();
assert_eq!(c.norm(), 5.0);

let both = Components::new().real(3.0).imaginary(4.0).norm(5.0);
let err = both.angle(0.9).resolve().unwrap_err();
assert!(matches!(err.kind(), ErrorKind::ConflictingRepresentation { .. }));
assert!(both.angle(0.9272952180016123).resolve().is_ok());

let err = Components::new().real(3.0).norm(5.0).resolve().unwrap_err();
assert_eq!(*err.kind(), ErrorKind::InsufficientData);
```

[`Complex`]: ../struct.Complex.html
[`Complex::parse`]: ../struct.Complex.html#method.parse
[`ErrorKind::InsufficientData`]: enum.ErrorKind.html#variant.InsufficientData
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct Components<'a> {
    /// The real part.
    pub real: Option<f64>,
    /// The imaginary part.
    pub imaginary: Option<f64>,
    /// The norm.
    pub norm: Option<f64>,
    /// The angle in radians.
    pub angle: Option<f64>,
    /// An expression to parse.
    pub expression: Option<&'a str>,
    /// A number to copy.
    pub from_complex: Option<&'a Complex>,
}

impl<'a> Components<'a> {
    /// Creates an empty set of pieces.
    #[inline]
    pub fn new() -> Components<'a> {
        Components::default()
    }

    /// Sets the real part.
    #[inline]
    pub fn real(mut self, real: f64) -> Components<'a> {
        self.real = Some(real);
        self
    }

    /// Sets the imaginary part.
    #[inline]
    pub fn imaginary(mut self, imaginary: f64) -> Components<'a> {
        self.imaginary = Some(imaginary);
        self
    }

    /// Sets the norm.
    #[inline]
    pub fn norm(mut self, norm: f64) -> Components<'a> {
        self.norm = Some(norm);
        self
    }

    /// Sets the angle.
    #[inline]
    pub fn angle(mut self, angle: f64) -> Components<'a> {
        self.angle = Some(angle);
        self
    }

    /// Sets an expression to parse.
    #[inline]
    pub fn expression(mut self, src: &'a str) -> Components<'a> {
        self.expression = Some(src);
        self
    }

    /// Sets a number to copy.
    #[inline]
    pub fn from_complex(mut self, other: &'a Complex) -> Components<'a> {
        self.from_complex = Some(other);
        self
    }

    /// Builds the number, see the type documentation for the rules.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NegativeNorm`],
    /// [`ErrorKind::ConflictingRepresentation`],
    /// [`ErrorKind::InsufficientData`], or with any error of
    /// [`Complex::parse`](../struct.Complex.html#method.parse).
    ///
    /// [`ErrorKind::NegativeNorm`]: enum.ErrorKind.html#variant.NegativeNorm
    /// [`ErrorKind::ConflictingRepresentation`]: enum.ErrorKind.html#variant.ConflictingRepresentation
    /// [`ErrorKind::InsufficientData`]: enum.ErrorKind.html#variant.InsufficientData
    pub fn resolve(self) -> Result<Complex, Error> {
        if let Some(other) = self.from_complex {
            return Ok(*other);
        }
        if let Some(norm) = self.norm {
            check_norm(norm)?;
        }
        if let Some(src) = self.expression {
            return Complex::parse(src);
        }
        match (self.real, self.imaginary, self.norm, self.angle) {
            (Some(real), Some(imaginary), Some(norm), Some(angle)) => {
                let (derived_norm, derived_angle) = polar::polar_from_cartesian(real, imaginary);
                if !numbers_compatible(derived_norm, norm)
                    || !numbers_compatible(derived_angle, angle)
                {
                    return Err(Error::new(ErrorKind::ConflictingRepresentation {
                        cartesian: (real, imaginary),
                        polar: (norm, angle),
                    }));
                }
                Ok(Complex {
                    real,
                    imaginary,
                    norm,
                    angle,
                    cartesian: true,
                })
            }
            (Some(real), Some(imaginary), _, _) => Ok(Complex::new(real, imaginary)),
            (_, _, Some(norm), Some(angle)) => Ok(Complex::from_polar_unchecked(norm, angle)),
            _ => Err(Error::new(ErrorKind::InsufficientData)),
        }
    }
}

#[inline]
fn check_norm(norm: f64) -> Result<(), Error> {
    if norm < 0.0 {
        Err(Error::new(ErrorKind::NegativeNorm(norm)))
    } else {
        Ok(())
    }
}

impl Complex {
    /// The pure imaginary unit, 0 + 1*i*.
    pub const I: Complex = Complex {
        real: 0.0,
        imaginary: 1.0,
        norm: 1.0,
        angle: FRAC_PI_2,
        cartesian: true,
    };

    /// Creates a complex number from its real and imaginary parts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::new(3.0, 4.0);
    /// assert_eq!(c.real(), 3.0);
    /// assert_eq!(c.imaginary(), 4.0);
    /// assert_eq!(c.norm(), 5.0);
    /// assert_eq!(c.angle(), 0.9272952180016123);
    /// assert!(c.is_cartesian());
    /// ```
    pub fn new(real: f64, imaginary: f64) -> Complex {
        let (norm, angle) = polar::polar_from_cartesian(real, imaginary);
        Complex {
            real,
            imaginary,
            norm,
            angle,
            cartesian: true,
        }
    }

    /// Creates a complex number from its norm and angle.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NegativeNorm`] if `norm` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::from_polar(5.0, 0.9272952180016123).unwrap();
    /// assert!((c.real() - 3.0).abs() < 1e-12);
    /// assert!((c.imaginary() - 4.0).abs() < 1e-12);
    /// assert!(!c.is_cartesian());
    /// assert!(Complex::from_polar(-1.0, 0.0).is_err());
    /// ```
    ///
    /// [`ErrorKind::NegativeNorm`]: complex/enum.ErrorKind.html#variant.NegativeNorm
    pub fn from_polar(norm: f64, angle: f64) -> Result<Complex, Error> {
        check_norm(norm)?;
        Ok(Complex::from_polar_unchecked(norm, angle))
    }

    pub(crate) fn from_polar_unchecked(norm: f64, angle: f64) -> Complex {
        let (real, imaginary) = polar::cartesian_from_polar(norm, angle);
        Complex {
            real,
            imaginary,
            norm,
            angle,
            cartesian: false,
        }
    }

    /// Parses a complex number from a mathematical expression.
    ///
    /// Parentheses, `*`, `x` and whitespace are ignored. The expression
    /// is then read in the first notation that matches:
    ///
    ///  1. Exponential, when it contains `e^` or `exp`: the norm comes
    ///     before the marker and the angle after it, as in `5e^0.93i`.
    ///  2. Trigonometric, when it contains `cos` or `sin`: only the
    ///     term before the first `+` is used, and its coefficient and
    ///     argument are taken as norm and angle, as in
    ///     `5(cos(0.93) + isin(0.93))`.
    ///  3. Cartesian: `a + bi`, `a - bi`, `bi` or `a`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NumberFormat`] when a piece is not a
    /// number, [`ErrorKind::InsufficientData`] when a trigonometric
    /// term has no argument, and [`ErrorKind::NegativeNorm`] when a
    /// polar expression has a negative norm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::parse("3cos(4) + 4isin(1)").unwrap();
    /// assert_eq!(c.norm(), 3.0);
    /// assert_eq!(c.angle(), 4.0);
    /// assert_eq!(Complex::parse("4i").unwrap(), Complex::new(0.0, 4.0));
    /// assert!(Complex::parse("4y").is_err());
    /// ```
    ///
    /// [`ErrorKind::NumberFormat`]: complex/enum.ErrorKind.html#variant.NumberFormat
    /// [`ErrorKind::InsufficientData`]: complex/enum.ErrorKind.html#variant.InsufficientData
    /// [`ErrorKind::NegativeNorm`]: complex/enum.ErrorKind.html#variant.NegativeNorm
    #[inline]
    pub fn parse(src: &str) -> Result<Complex, Error> {
        parse::parse(src)
    }

    /// Returns the real part.
    #[inline]
    pub fn real(&self) -> f64 {
        misc::unsign_zero(self.real)
    }

    /// Returns the imaginary part.
    #[inline]
    pub fn imaginary(&self) -> f64 {
        misc::unsign_zero(self.imaginary)
    }

    /// Returns the norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        misc::unsign_zero(self.norm)
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        misc::unsign_zero(self.angle)
    }

    /// Returns `true` if the number was created from its cartesian form.
    #[inline]
    pub fn is_cartesian(&self) -> bool {
        self.cartesian
    }

    /// Returns the real and imaginary parts.
    #[inline]
    pub fn cartesian(&self) -> (f64, f64) {
        (self.real(), self.imaginary())
    }

    /// Returns the norm and the angle.
    #[inline]
    pub fn polar(&self) -> (f64, f64) {
        (self.norm(), self.angle())
    }

    /// Returns the coordinates of the number on the complex plane, for
    /// plotting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// assert_eq!(Complex::new(-1.5, 2.0).point(), (-1.5, 2.0));
    /// ```
    #[inline]
    pub fn point(&self) -> (f64, f64) {
        self.cartesian()
    }

    /// Returns the norm, the absolute value of the number.
    #[inline]
    pub fn abs(&self) -> f64 {
        self.norm()
    }

    /// Returns the value of a field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::complex::Field;
    /// use complex_repr::Complex;
    /// let c = Complex::new(3.0, 4.0);
    /// let field: Field = "norm".parse().unwrap();
    /// assert_eq!(c.get(field), 5.0);
    /// ```
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Real => self.real(),
            Field::Imaginary => self.imaginary(),
            Field::Norm => self.norm(),
            Field::Angle => self.angle(),
        }
    }

    /// Sets the real part and recomputes the norm and angle.
    #[inline]
    pub fn set_real(&mut self, real: f64) {
        self.assign_cartesian(real, self.imaginary);
    }

    /// Sets the imaginary part and recomputes the norm and angle.
    #[inline]
    pub fn set_imaginary(&mut self, imaginary: f64) {
        self.assign_cartesian(self.real, imaginary);
    }

    /// Sets the norm and recomputes the real and imaginary parts.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NegativeNorm`] if `norm` is negative,
    /// leaving the number unchanged.
    ///
    /// [`ErrorKind::NegativeNorm`]: complex/enum.ErrorKind.html#variant.NegativeNorm
    #[inline]
    pub fn set_norm(&mut self, norm: f64) -> Result<(), Error> {
        check_norm(norm)?;
        self.assign_polar(norm, self.angle);
        Ok(())
    }

    /// Sets the angle and recomputes the real and imaginary parts.
    #[inline]
    pub fn set_angle(&mut self, angle: f64) {
        self.assign_polar(self.norm, angle);
    }

    /// Sets the value of a field and recomputes the other form.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NegativeNorm`] when setting a negative
    /// norm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let mut c = Complex::new(3.0, 4.0);
    /// c.set("real".parse().unwrap(), 4.0).unwrap();
    /// assert_eq!(c.norm(), 5.656854249492381);
    /// assert!("q".parse::<complex_repr::complex::Field>().is_err());
    /// ```
    ///
    /// [`ErrorKind::NegativeNorm`]: complex/enum.ErrorKind.html#variant.NegativeNorm
    pub fn set(&mut self, field: Field, value: f64) -> Result<(), Error> {
        match field {
            Field::Real => self.set_real(value),
            Field::Imaginary => self.set_imaginary(value),
            Field::Norm => self.set_norm(value)?,
            Field::Angle => self.set_angle(value),
        }
        Ok(())
    }

    /// Sets both cartesian parts at once and recomputes the norm and
    /// angle.
    #[inline]
    pub fn set_cartesian(&mut self, real: f64, imaginary: f64) {
        self.assign_cartesian(real, imaginary);
    }

    /// Sets both the norm and the angle at once and recomputes the real
    /// and imaginary parts.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NegativeNorm`] if `norm` is negative,
    /// leaving the number unchanged.
    ///
    /// [`ErrorKind::NegativeNorm`]: complex/enum.ErrorKind.html#variant.NegativeNorm
    #[inline]
    pub fn set_polar(&mut self, norm: f64, angle: f64) -> Result<(), Error> {
        check_norm(norm)?;
        self.assign_polar(norm, angle);
        Ok(())
    }

    // The form flag is left alone: it records how the number was made.
    pub(crate) fn assign_cartesian(&mut self, real: f64, imaginary: f64) {
        let (norm, angle) = polar::polar_from_cartesian(real, imaginary);
        self.real = real;
        self.imaginary = imaginary;
        self.norm = norm;
        self.angle = angle;
    }

    pub(crate) fn assign_polar(&mut self, norm: f64, angle: f64) {
        let (real, imaginary) = polar::cartesian_from_polar(norm, angle);
        self.real = real;
        self.imaginary = imaginary;
        self.norm = norm;
        self.angle = angle;
    }

    /// Returns the complex conjugate.
    ///
    /// The imaginary part is negated for a number created from its
    /// cartesian form, the angle otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).conjugate(), Complex::new(3.0, -4.0));
    /// let p = Complex::from_polar(2.0, 1.0).unwrap().conjugate();
    /// assert_eq!(p.polar(), (2.0, -1.0));
    /// ```
    pub fn conjugate(&self) -> Complex {
        if self.cartesian {
            Complex::new(self.real(), -self.imaginary())
        } else {
            Complex::from_polar_unchecked(self.norm(), -self.angle())
        }
    }

    /// Returns the reciprocal, 1 / `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let r = Complex::from_polar(4.0, 0.5).unwrap().recip();
    /// assert_eq!(r.polar(), (0.25, -0.5));
    /// ```
    pub fn recip(&self) -> Complex {
        let mut new = *self;
        new.assign_polar(self.norm().recip(), -self.angle());
        new
    }

    /// Rounds the driving form to `digits` decimal places, ties to even.
    ///
    /// The cartesian parts are rounded for a number created from its
    /// cartesian form, the norm and angle otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::new(3.123456, 4.789101112);
    /// assert_eq!(c.round(2).to_string(), "3.12 + 4.79i");
    /// ```
    pub fn round(&self, digits: i32) -> Complex {
        self.map_driving(|f| misc::round_digits(f, digits))
    }

    /// Rounds the driving form up to integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// assert_eq!(Complex::new(3.123456, 4.789101112).ceil(), Complex::new(4.0, 5.0));
    /// ```
    pub fn ceil(&self) -> Complex {
        self.map_driving(f64::ceil)
    }

    /// Rounds the driving form down to integers.
    pub fn floor(&self) -> Complex {
        self.map_driving(f64::floor)
    }

    /// Rounds the driving form towards zero to integers.
    pub fn trunc(&self) -> Complex {
        self.map_driving(f64::trunc)
    }

    // Rounding never takes a non-negative norm below zero.
    fn map_driving<F>(&self, f: F) -> Complex
    where
        F: Fn(f64) -> f64,
    {
        if self.cartesian {
            Complex::new(f(self.real()), f(self.imaginary()))
        } else {
            Complex::from_polar_unchecked(f(self.norm()), f(self.angle()))
        }
    }

    /// Computes *e* raised to `self`.
    ///
    /// The result has a norm of *e*<sup>real</sup> and an angle equal to
    /// the imaginary part, and is in polar form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::new(0.0, 2.0).exp();
    /// assert_eq!(c.polar(), (1.0, 2.0));
    /// assert!(!c.is_cartesian());
    /// ```
    pub fn exp(&self) -> Complex {
        Complex::from_polar_unchecked(self.real().exp(), self.imaginary())
    }

    /// Computes the natural logarithm, ln(norm) + angle*i*.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::from_polar(3.0, 2.0).unwrap().ln();
    /// assert_eq!(c, Complex::new(3f64.ln(), 2.0));
    /// ```
    pub fn ln(&self) -> Complex {
        Complex::new(self.norm().ln(), self.angle())
    }

    /// Computes the logarithm in `base`,
    /// log<sub>base</sub>(norm) + angle / ln(base) *i*.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::Complex;
    /// let c = Complex::from_polar(8.0, 2f64.ln()).unwrap().log(2.0);
    /// assert!((c.real() - 3.0).abs() < 1e-12);
    /// assert!((c.imaginary() - 1.0).abs() < 1e-12);
    /// ```
    pub fn log(&self, base: f64) -> Complex {
        Complex::new(self.norm().log(base), self.angle() / base.ln())
    }

    /// Formats the number in the given style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::complex::Style;
    /// use complex_repr::Complex;
    /// let c = Complex::new(3.0, 3.0);
    /// assert_eq!(c.to_string_style(Style::Cartesian), "3.0 + 3.0i");
    /// assert_eq!(
    ///     c.to_string_style(Style::Trigonometric),
    ///     "4.242640687119285 * (cos(0.7853981633974483) + isin(0.7853981633974483))"
    /// );
    /// assert_eq!(
    ///     c.to_string_style(Style::Exponential),
    ///     "4.242640687119285e^0.7853981633974483i"
    /// );
    /// ```
    pub fn to_string_style(&self, style: Style) -> String {
        let mut s = String::new();
        append_to_string(&mut s, self, style, Notation::Text);
        s
    }

    /// Formats the number as a code literal with explicit operators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::complex::Style;
    /// use complex_repr::Complex;
    /// let c = Complex::new(3.0, -3.0);
    /// assert_eq!(c.to_code(Style::Cartesian), "3.0 - 3.0 * i");
    /// assert_eq!(
    ///     c.to_code(Style::Exponential),
    ///     "4.242640687119285 * e ** (-0.7853981633974483 * i)"
    /// );
    /// ```
    pub fn to_code(&self, style: Style) -> String {
        let mut s = String::new();
        append_to_string(&mut s, self, style, Notation::Code);
        s
    }

    /// Formats the number as a LaTeX expression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use complex_repr::complex::Style;
    /// use complex_repr::Complex;
    /// let c = Complex::new(3.0, 3.0);
    /// assert_eq!(c.to_latex(Style::Cartesian), "$3.0 + 3.0i$");
    /// assert_eq!(
    ///     c.to_latex(Style::Exponential),
    ///     "$4.242640687119285 \\text{e}^{0.7853981633974483 i}$"
    /// );
    /// ```
    pub fn to_latex(&self, style: Style) -> String {
        let mut s = String::new();
        append_to_string(&mut s, self, style, Notation::Latex);
        s
    }
}

#[derive(Clone, Copy)]
enum Notation {
    Text,
    Code,
    Latex,
}

fn append_to_string(s: &mut String, c: &Complex, style: Style, notation: Notation) {
    let (re, im) = (Literal(c.real()), c.imaginary());
    let (norm, angle) = (Literal(c.norm()), Literal(c.angle()));
    let sign = if im > 0.0 { '+' } else { '-' };
    let abs_im = Literal(im.abs());
    let text = match (notation, style) {
        (Notation::Text, Style::Cartesian) => format!("{} {} {}i", re, sign, abs_im),
        (Notation::Text, Style::Trigonometric) => {
            format!("{} * (cos({}) + isin({}))", norm, angle, angle)
        }
        (Notation::Text, Style::Exponential) => format!("{}e^{}i", norm, angle),
        (Notation::Code, Style::Cartesian) => format!("{} {} {} * i", re, sign, abs_im),
        (Notation::Code, Style::Trigonometric) => {
            format!("{} * (cos({}) + i * sin({}))", norm, angle, angle)
        }
        (Notation::Code, Style::Exponential) => format!("{} * e ** ({} * i)", norm, angle),
        (Notation::Latex, Style::Cartesian) => format!("${} + {}i$", re, Literal(im)),
        (Notation::Latex, Style::Trigonometric) => format!(
            "${} \\times (\\cos({}) + i \\sin({}))$",
            norm, angle, angle
        ),
        (Notation::Latex, Style::Exponential) => {
            format!("${} \\text{{e}}^{{{} i}}$", norm, angle)
        }
    };
    s.push_str(&text);
}
