//! Text forms of the numbers.
//!
//! [Display](fmt::Display) gives the plain form like `1-2i+3/4j+0.5k` and
//! [Debug](fmt::Debug) the inspect form like `(1-2i+(3/4)*j+0.5k)`,
//! which keeps rationals apart from divisions. The plain form reads back with the parser.

use core::fmt;

use num_bigint::BigInt;

use crate::complex::Complex;
use crate::number::Number;
use crate::quaternion::Quaternion;
use crate::rational::Ratio;
use crate::real::Real;

/// Shortest text that reads back to the same float.
///
/// Positional notation for decimal exponents in `-4 < e <= 16`, otherwise
/// scientific notation with a signed two digit exponent like `1.0e+20`.
pub(crate) fn float_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x == 0.0 {
        return format!("{sign}0.0");
    }
    // `{:e}` already gives the shortest round trip digits
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let decpt = exp.parse::<i32>().unwrap_or(0) + 1;
    if 0 < decpt && decpt <= 16 {
        let decpt = decpt as usize;
        if digits.len() <= decpt {
            format!("{sign}{digits}{}.0", "0".repeat(decpt - digits.len()))
        } else {
            format!("{sign}{}.{}", &digits[..decpt], &digits[decpt..])
        }
    } else if -4 < decpt && decpt <= 0 {
        format!("{sign}0.{}{digits}", "0".repeat((-decpt) as usize))
    } else {
        let frac = if digits.len() > 1 { &digits[1..] } else { "0" };
        format!("{sign}{}.{frac}e{:+03}", &digits[..1], decpt - 1)
    }
}

/// A real component that can be written as a term of a complex number or quaternion.
pub trait Term {
    /// The text of the value on its own, `inspect` selects the form of [Debug](fmt::Debug).
    fn text(&self, inspect: bool) -> String;
    /// Text of `-self`, only called on negative exact values.
    fn neg_text(&self, inspect: bool) -> String;
    /// Numerically `< 0`.
    fn is_negative_term(&self) -> bool;
    /// Floats carry their sign in the text, including `-0.0`.
    fn is_float_term(&self) -> bool {
        false
    }
}

/// `±|x|` followed by the unit, with a `*` in between if the text doesn't end in a digit.
fn term<T: Term>(x: &T, unit: char, inspect: bool) -> String {
    let mut s = if x.is_float_term() {
        let s = x.text(inspect);
        if s.starts_with('-') { s } else { format!("+{s}") }
    } else if x.is_negative_term() {
        format!("-{}", x.neg_text(inspect))
    } else {
        format!("+{}", x.text(inspect))
    };
    if !s.ends_with(|c: char| c.is_ascii_digit()) {
        s.push('*');
    }
    s.push(unit);
    s
}

macro_rules! term_int_impl {
    ($($t:ty),+) => {
        $(impl Term for $t {
            fn text(&self, _inspect: bool) -> String {
                self.to_string()
            }
            fn neg_text(&self, _inspect: bool) -> String {
                (-self).to_string()
            }
            fn is_negative_term(&self) -> bool {
                *self < <$t>::from(0i8)
            }
        })+
    };
}
term_int_impl!(i32, i64, BigInt);

impl Term for f64 {
    fn text(&self, _inspect: bool) -> String {
        float_to_string(*self)
    }
    fn neg_text(&self, _inspect: bool) -> String {
        float_to_string(-*self)
    }
    fn is_negative_term(&self) -> bool {
        *self < 0.0
    }
    fn is_float_term(&self) -> bool {
        true
    }
}

/// Always written as a fraction, also for a denominator of one.
impl Term for Ratio<BigInt> {
    fn text(&self, inspect: bool) -> String {
        if inspect {
            format!("({}/{})", self.numer, self.denom)
        } else {
            format!("{}/{}", self.numer, self.denom)
        }
    }
    fn neg_text(&self, inspect: bool) -> String {
        (-self).text(inspect)
    }
    fn is_negative_term(&self) -> bool {
        self.numer.is_negative_term()
    }
}

impl Term for Real {
    fn text(&self, inspect: bool) -> String {
        match self {
            Real::Integer(x) => x.text(inspect),
            Real::Rational(x) => x.text(inspect),
            Real::Float(x) => x.text(inspect),
        }
    }
    fn neg_text(&self, inspect: bool) -> String {
        (-self).text(inspect)
    }
    fn is_negative_term(&self) -> bool {
        self.is_negative()
    }
    fn is_float_term(&self) -> bool {
        self.is_float()
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text(false))
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text(true))
    }
}

impl<T: Term> Complex<T> {
    fn text(&self, inspect: bool) -> String {
        format!("{}{}", self.re.text(inspect), term(&self.im, 'i', inspect))
    }
}

impl<T: Term> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text(false))
    }
}

impl<T: Term> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("({})", self.text(true)))
    }
}

impl<T: Term> Quaternion<T> {
    fn text(&self, inspect: bool) -> String {
        format!(
            "{}{}{}{}",
            self.a.re.text(inspect),
            term(&self.a.im, 'i', inspect),
            term(&self.b.re, 'j', inspect),
            term(&self.b.im, 'k', inspect)
        )
    }
}

impl<T: Term> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text(false))
    }
}

impl<T: Term> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("({})", self.text(true)))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(x) => fmt::Display::fmt(x, f),
            Number::Complex(x) => fmt::Display::fmt(x, f),
            Number::Quaternion(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(x) => fmt::Debug::fmt(x, f),
            Number::Complex(x) => fmt::Debug::fmt(x, f),
            Number::Quaternion(x) => fmt::Debug::fmt(x, f),
        }
    }
}
