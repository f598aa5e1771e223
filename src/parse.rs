//! Parser for the notation `w+xi+yj+zk`.
//!
//! Each of the four terms is optional, but their order is fixed. A term is a signed numeral,
//! which is an integer, a decimal, a decimal with exponent or a fraction `p/q` of those over an
//! integer. The imaginary terms end in their unit, where a missing numeral means `1`, e.g. `-i`.
//! The real term must not be directly followed by a unit. Only the first term may leave out its sign.
//!
//! Underscores separate digits. [Mode::Strict] allows only single underscores between digits and
//! fails unless the whole input is consumed. [Mode::Lenient] accepts runs of underscores and stops
//! silently at the first unmatched character.

use core::str::FromStr;

use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::num::*;
use crate::number::Number;
use crate::quaternion::Quaternion;
use crate::rational::Ratio;
use crate::real::Real;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Strict,
    Lenient,
}

fn numeral_regex(digits: &str) -> Regex {
    let pattern = format!(
        r"^(?i)(?:{d}(?:\.{d})?|\.{d})(?:e[+-]?{d})?(?:/{d})?",
        d = digits
    );
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid numeral pattern: {e}"))
}

lazy_static! {
    static ref STRICT_NUMERAL: Regex = numeral_regex("[0-9]+(?:_[0-9]+)*");
    static ref LENIENT_NUMERAL: Regex = numeral_regex("[0-9]+(?:_+[0-9]+)*");
}

const UNITS: [char; 3] = ['i', 'j', 'k'];

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    mode: Mode,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self, at: usize) -> Option<char> {
        self.input[at..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
    }

    // sign at `at`, returns the position after it
    fn sign(&self, at: usize, required: bool) -> Option<usize> {
        match self.peek(at) {
            Some('+' | '-') => Some(at + 1),
            _ if required => None,
            _ => Some(at),
        }
    }

    // end of the numeral starting at `at`
    fn numeral(&self, at: usize) -> Option<usize> {
        let regex: &Regex = match self.mode {
            Mode::Strict => &STRICT_NUMERAL,
            Mode::Lenient => &LENIENT_NUMERAL,
        };
        regex.find(&self.input[at..]).map(|m| at + m.end())
    }

    /// `[+-]?numeral`, not followed by a unit.
    fn real_term(&self) -> Option<(&'a str, usize)> {
        let start = self.sign(self.pos, false)?;
        let end = self.numeral(start)?;
        match self.peek(end) {
            Some(c) if UNITS.contains(&c.to_ascii_lowercase()) => None,
            _ => Some((&self.input[self.pos..end], end)),
        }
    }

    /// `sign numeral? unit`. The sign is optional only at the start of the input or after whitespace.
    fn imag_term(&self, unit: char) -> Option<(&'a str, usize)> {
        let head = self.input[..self.pos]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_ascii_whitespace());
        let start = self.sign(self.pos, !head)?;
        let end = self.numeral(start).unwrap_or(start);
        match self.peek(end) {
            Some(c) if c.to_ascii_lowercase() == unit => Some((&self.input[self.pos..end], end + 1)),
            _ => None,
        }
    }

    /// Scan the four terms. A term with a zero denominator fails in strict mode
    /// and ends the scan in lenient mode.
    fn terms(&mut self) -> Result<Vec<Option<Real>>> {
        self.skip_whitespace();
        let mut terms = Vec::with_capacity(4);
        for unit in [None, Some('i'), Some('j'), Some('k')] {
            let term = match unit {
                None => self.real_term(),
                Some(unit) => self.imag_term(unit),
            };
            let Some((text, end)) = term else {
                terms.push(None);
                continue;
            };
            log::trace!("parse: term {text:?} for unit {unit:?}");
            match convert(text) {
                Ok(x) => {
                    terms.push(Some(x));
                    self.pos = end;
                }
                Err(e) if self.mode == Mode::Strict => return Err(e),
                Err(_) => break,
            }
        }
        self.skip_whitespace();
        while terms.last().is_some_and(Option::is_none) {
            terms.pop();
        }
        Ok(terms)
    }
}

/// Convert the text of a term without its unit into a real.
fn convert(text: &str) -> Result<Real> {
    let text: String = text.chars().filter(|c| *c != '_').collect();
    match text.as_str() {
        "" | "+" => return Ok(Real::one()),
        "-" => return Ok(-Real::one()),
        _ => {}
    }
    if let Some((numer, denom)) = text.split_once('/') {
        let denom = parse_integer(denom)?;
        if denom.is_zero() {
            return Err(Error::ZeroDivision);
        }
        let numer = decimal_to_ratio(numer)?;
        return Ok(Real::Rational(numer / Ratio::from(denom)));
    }
    if text.contains(['.', 'e', 'E']) {
        return text
            .parse::<f64>()
            .map(Real::Float)
            .map_err(|_| Error::InvalidFormat { input: text.clone() });
    }
    parse_integer(&text).map(Real::Integer)
}

fn parse_integer(text: &str) -> Result<BigInt> {
    text.parse::<BigInt>().map_err(|_| Error::InvalidFormat {
        input: text.to_string(),
    })
}

/// Largest decimal exponent of an exact numeral, `10^x` beyond it is rejected.
const MAX_EXPONENT: u32 = 100_000;

/// The exact value of a decimal like `-1.25e-3`.
fn decimal_to_ratio(text: &str) -> Result<Ratio<BigInt>> {
    let invalid = || Error::InvalidFormat {
        input: text.to_string(),
    };
    let (mantissa, exp) = match text.find(['e', 'E']) {
        Some(i) => (&text[..i], text[i + 1..].parse::<i64>().map_err(|_| invalid())?),
        None => (text, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = parse_integer(&format!("{int}{frac}"))?;
    let exp = i64::try_from(frac.len())
        .ok()
        .and_then(|n| exp.checked_sub(n))
        .ok_or_else(invalid)?;
    let scale = u32::try_from(exp.unsigned_abs())
        .ok()
        .filter(|e| *e <= MAX_EXPONENT)
        .ok_or_else(invalid)?;
    let scale = BigInt::from(10).pow(scale);
    Ok(if exp >= 0 {
        Ratio::from(digits * scale)
    } else {
        Ratio::new(digits, scale)
    })
}

impl Number {
    /// Parse into the simplest kind: no term gives the integer `0`, only the real term a real,
    /// up to the `i` term a complex number and everything else a quaternion.
    ///
    /// ```
    /// use hnum::*;
    /// let q = Number::parse("1-2i-3/4j+0.56k", Mode::Strict).unwrap();
    /// assert_eq!(format!("{q:?}"), "(1-2i-(3/4)*j+0.56k)");
    /// assert_eq!(Number::parse("2 +i", Mode::Lenient).unwrap(), Number::from(2));
    /// assert!(Number::parse("2 +i", Mode::Strict).is_err());
    /// ```
    pub fn parse(input: &str, mode: Mode) -> Result<Number> {
        let mut scanner = Scanner { input, pos: 0, mode };
        let terms = scanner.terms()?;
        if mode == Mode::Strict && (!scanner.rest().is_empty() || terms.is_empty()) {
            log::debug!("parse: rejected {input:?} at byte {}", scanner.pos);
            return Err(Error::InvalidFormat {
                input: input.to_string(),
            });
        }
        let len = terms.len();
        let mut terms = terms.into_iter().map(|x| x.unwrap_or_else(Real::zero));
        let mut next = || terms.next().unwrap_or_else(Real::zero);
        Ok(match len {
            0 => Number::zero(),
            1 => Number::Real(next()),
            2 => Number::Complex(Complex::new(next(), next())),
            _ => Number::Quaternion(Quaternion::from_parts(next(), next(), next(), next())),
        })
    }
}

/// Lenient parse into a quaternion, the counterpart of formatting with [Display](core::fmt::Display).
/// Unparsable input gives zero.
pub fn to_quaternion(input: &str) -> Quaternion {
    Number::parse(input, Mode::Lenient)
        .map(|n| n.to_quaternion())
        .unwrap_or_else(|_| Quaternion::zero())
}

/// Strict parse into the simplest kind.
impl FromStr for Number {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Number::parse(s, Mode::Strict)
    }
}

/// Strict parse, promoted to a quaternion.
impl FromStr for Quaternion {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(Number::parse(s, Mode::Strict)?.to_quaternion())
    }
}
