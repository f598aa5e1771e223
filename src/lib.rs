//! Quaternions `a + b j` built from two complex numbers, on top of a numeric tower of
//! arbitrary precision integers, rationals, floats and complex numbers.
//!
//! The tower keeps track of exactness. Integers and rationals are exact, floats are not, and a
//! complex number or quaternion is exact if all of its components are. Arithmetic stays exact
//! as long as the operands are, e.g. `(1+i+j+k)^6` is the integer `64`. The distinction matters
//! for division: an exact zero divisor is an error ([Error::ZeroDivision]), while a float zero
//! gives infinities or `NaN` as usual.
//!
//! ```
//! use hnum::*;
//! let (i, j, k): (Quaternion, Quaternion, Quaternion) = (Quaternion::i(), Quaternion::j(), Quaternion::k());
//! assert_eq!(&i * &j, k);
//! assert_eq!(&j * &i, -k);
//!
//! let q: Quaternion = "1-2i-3/4j+0.56k".parse().unwrap();
//! assert_eq!(q.to_string(), "1-2i-3/4j+0.56k");
//! assert!(q.quo(&Number::from(0)).is_err());
//! ```
//!
//! The types are:
//! - [Real]: `Integer`, `Rational` or `Float`, promoting to the larger kind in binary operations.
//! - [Complex]: generic over the component type, the complex kind is `Complex<Real>`.
//! - [Quaternion]: generic over the component type as well, the default is `Quaternion<Real>`.
//! - [Number]: any of the above, with generic arithmetic that promotes the lower operand.
//!
//! Quaternions can be built with [Quaternion::hrect], [Quaternion::rect], [Quaternion::polar],
//! the generic [Quaternion::from_args] (also as the [quaternion!] macro) or by parsing.
//!
//! The quaternion multiplication is not commutative, so there is no operator for division.
//! The exact quotient is [Quaternion::quo], the float quotient [Quaternion::fdiv].
//!
//! # Logging
//! The crate logs through the [log] facade. Parser decisions and the branches of [Quaternion::pow]
//! are logged at `trace` level, type promotions and rejected strict parses at `debug` level.
//!
//! # Features
//! - `serde`: `Serialize` and `Deserialize` for all number types.

mod num;
pub mod complex;
pub mod error;
pub mod factory;
pub mod float;
pub mod fmt;
pub mod number;
pub mod parse;
pub mod polar;
mod power;
pub mod quaternion;
pub mod rational;
pub mod real;

pub use complex::Complex;
pub use error::{Error, ErrorKind, Result};
pub use factory::Arg;
pub use num::*;
pub use number::{Kind, Number};
pub use parse::{Mode, to_quaternion};
pub use polar::Vector3;
pub use power::*;
pub use quaternion::Quaternion;
pub use rational::Ratio;
pub use real::Real;

#[cfg(test)]
mod tests;
