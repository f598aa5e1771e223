//! The generic constructor, which accepts the various representations of a quaternion.
//!
//! - `(number)`: promoted to a quaternion
//! - `(number, number)`: `a + b j`
//! - `(number, [x, y, z])`: scalar and vector part
//! - `(w, x, y[, z])`: `w + x i + y j + z k`
//!
//! Strings can be given in place of numbers. They are parsed strictly.

use num_bigint::BigInt;

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::num::*;
use crate::number::Number;
use crate::parse::Mode;
use crate::polar::Vector3;
use crate::quaternion::Quaternion;
use crate::rational::Ratio;
use crate::real::Real;

/// An argument of [Quaternion::from_args].
#[derive(Clone, Debug)]
pub enum Arg {
    Number(Number),
    Str(String),
    Vector(Vec<Number>),
}

impl Arg {
    // strings are parsed here, vectors are left to the caller
    fn resolve(&self) -> Result<Resolved> {
        Ok(match self {
            Arg::Number(n) => Resolved::Number(n.clone()),
            Arg::Str(s) => Resolved::Number(Number::parse(s, Mode::Strict)?),
            Arg::Vector(v) => Resolved::Vector(v.clone()),
        })
    }
}

enum Resolved {
    Number(Number),
    Vector(Vec<Number>),
}

impl Resolved {
    fn number(self) -> Result<Number> {
        match self {
            Resolved::Number(n) => Ok(n),
            Resolved::Vector(v) => Err(Error::Conversion {
                value: format!("{v:?}"),
                target: "Quaternion",
            }),
        }
    }
}

impl Quaternion<Real> {
    /// Build a quaternion from one to four arguments, see the [module](crate::factory) documentation.
    ///
    /// ```
    /// use hnum::*;
    /// let q = Quaternion::from_args(&[Arg::from(1), Arg::from([2, 3, 4])]).unwrap();
    /// assert_eq!(q, Quaternion::hrect(1, 2, 3, 4));
    /// // sum of the units (1 + i i) + (j + k i) j
    /// let q = Quaternion::from_args(&["1".into(), "i".into(), "j".into(), "k".into()]).unwrap();
    /// assert_eq!(q, Quaternion::hrect(-2, 0, 0, 0));
    /// ```
    pub fn from_args(args: &[Arg]) -> Result<Self> {
        if args.is_empty() || args.len() > 4 {
            return Err(Error::ArgumentCount { given: args.len() });
        }
        let mut args = args.iter().map(Arg::resolve).collect::<Result<Vec<_>>>()?;

        if args.len() == 1 {
            return Ok(args.remove(0).number()?.to_quaternion());
        }
        if args.len() == 2 {
            let b = args.remove(1);
            let a = args.remove(0).number()?;
            match b {
                Resolved::Vector(v) => {
                    if v.len() != 3 {
                        return Err(Error::NotVector3);
                    }
                    let mut parts = vec![a];
                    parts.extend(v);
                    return Self::from_parts_generic(parts);
                }
                Resolved::Number(b) => {
                    if let (Ok(a), Ok(b)) = (a.complex_kind(), b.complex_kind()) {
                        return Ok(Quaternion::new(a, b));
                    }
                    return Ok((&a + &(&b * &Number::from(Quaternion::<Real>::j()))).to_quaternion());
                }
            }
        }
        let parts = args
            .into_iter()
            .map(Resolved::number)
            .collect::<Result<Vec<_>>>()?;
        Self::from_parts_generic(parts)
    }

    // w + x i + y j + z k for three or four numbers of any kind
    fn from_parts_generic(mut parts: Vec<Number>) -> Result<Self> {
        if parts.len() == 3 {
            parts.push(Number::zero());
        }
        if parts.iter().all(Number::is_real) {
            return Quaternion::try_hrect(&parts);
        }
        let i = Number::from(Complex::<Real>::i());
        let a = &parts[0] + &(&parts[1] * &i);
        let b = &parts[2] + &(&parts[3] * &i);
        if let (Ok(a), Ok(b)) = (a.complex_kind(), b.complex_kind()) {
            return Ok(Quaternion::new(a, b));
        }
        Ok((&a + &(&b * &Number::from(Quaternion::<Real>::j()))).to_quaternion())
    }
}

impl From<Number> for Arg {
    fn from(value: Number) -> Self {
        Arg::Number(value)
    }
}
impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}
impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}
impl From<Vec<Number>> for Arg {
    fn from(value: Vec<Number>) -> Self {
        Arg::Vector(value)
    }
}
impl From<Vector3> for Arg {
    fn from(value: Vector3) -> Self {
        Arg::Vector(value.0.into_iter().map(Number::Real).collect())
    }
}
impl<T: Into<Number>> From<[T; 3]> for Arg {
    fn from(value: [T; 3]) -> Self {
        Arg::Vector(value.into_iter().map(Into::into).collect())
    }
}

macro_rules! from_number_impl {
    ($($t:ty),+) => {
        $(impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Number(Number::from(value))
            }
        })+
    };
}
from_number_impl!(i32, i64, u32, u64, f64, BigInt, Ratio<BigInt>, Real, Complex<Real>, Quaternion);
