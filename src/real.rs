//! The real kinds of the tower: arbitrary precision integers, rationals and floats.
//!
//! Binary operations promote both operands to the larger kind (`Integer < Rational < Float`)
//! and compute there. Exact division is the only fallible operation, see [Real::quo].

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::*;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};

use crate::error::{Error, Result};
use crate::float::ratio_to_f64;
use crate::num::*;
use crate::rational::Ratio;

/// A real number of one of the three real kinds.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Real {
    Integer(BigInt),
    Rational(Ratio<BigInt>),
    Float(f64),
}

/// Both operands of a binary operation, promoted to their common kind.
pub(crate) enum RealPair<'a> {
    Integers(&'a BigInt, &'a BigInt),
    Ratios(Ratio<BigInt>, Ratio<BigInt>),
    Floats(f64, f64),
}

impl<'a> RealPair<'a> {
    pub(crate) fn promote(left: &'a Real, right: &'a Real) -> Self {
        use Real::*;
        match (left, right) {
            (Integer(l), Integer(r)) => RealPair::Integers(l, r),
            (Float(_), _) | (_, Float(_)) => RealPair::Floats(left.to_f64(), right.to_f64()),
            _ => RealPair::Ratios(left.to_ratio_exact(), right.to_ratio_exact()),
        }
    }
}

impl Real {
    /// Name of the kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Real::Integer(_) => "Integer",
            Real::Rational(_) => "Rational",
            Real::Float(_) => "Float",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Real::Float(_))
    }

    /// `-0.0`, the only value whose sign is invisible to comparisons.
    pub fn is_negative_zero(&self) -> bool {
        matches!(self, Real::Float(x) if *x == 0.0 && x.is_sign_negative())
    }

    /// Numerically `< 0`. `NaN` is not negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Real::Integer(x) => x.is_negative(),
            Real::Rational(x) => x.numer.is_negative(),
            Real::Float(x) => *x < 0.0,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Real::Float(x) if x.is_nan())
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Real::Float(x) => x.is_finite(),
            _ => true,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Real::Float(x) if x.is_infinite())
    }

    /// Closest `f64`. Integers and rationals beyond the float range become infinite.
    pub fn to_f64(&self) -> f64 {
        match self {
            Real::Integer(x) => x.to_f64().unwrap_or(if x.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Real::Rational(x) => ratio_to_f64(x),
            Real::Float(x) => *x,
        }
    }

    // only called for the exact kinds
    fn to_ratio_exact(&self) -> Ratio<BigInt> {
        match self {
            Real::Integer(x) => Ratio::from(x.clone()),
            Real::Rational(x) => x.clone(),
            Real::Float(x) => Ratio::try_from(*x).unwrap_or_default(),
        }
    }

    /// The exact rational value. Floats are decomposed exactly, `NaN` and infinities fail.
    pub fn to_rational(&self) -> Result<Ratio<BigInt>> {
        match self {
            Real::Float(x) => Ratio::try_from(*x),
            _ => Ok(self.to_ratio_exact()),
        }
    }

    /// Truncate towards zero.
    pub fn to_integer(&self) -> Result<BigInt> {
        match self {
            Real::Integer(x) => Ok(x.clone()),
            Real::Rational(x) => Ok(x.trunc()),
            Real::Float(x) => BigInt::from_f64(x.trunc()).ok_or_else(|| Error::Conversion {
                value: crate::fmt::float_to_string(*x),
                target: "Integer",
            }),
        }
    }

    /// Same value in the simplest exact kind: a rational with denominator 1 becomes an integer.
    pub fn demote(self) -> Real {
        match self {
            Real::Rational(r) if r.is_integral() => Real::Integer(r.numer),
            x => x,
        }
    }

    pub fn numerator(&self) -> Result<BigInt> {
        Ok(match self {
            Real::Integer(x) => x.clone(),
            Real::Rational(x) => x.numer.clone(),
            Real::Float(_) => self.to_rational()?.numer,
        })
    }

    pub fn denominator(&self) -> Result<BigInt> {
        Ok(match self {
            Real::Integer(_) => BigInt::one(),
            Real::Rational(x) => x.denom.clone(),
            Real::Float(_) => self.to_rational()?.denom,
        })
    }

    /// Absolute value in the same kind.
    pub fn abs(&self) -> Real {
        match self {
            Real::Integer(x) => Real::Integer(x.abs()),
            Real::Rational(x) => Real::Rational(Ratio::new_raw(x.numer.abs(), x.denom.clone())),
            Real::Float(x) => Real::Float(x.abs()),
        }
    }

    /// Exact quotient. Fails only if both operands are exact and the divisor is zero,
    /// a float on either side gives IEEE division.
    pub fn quo(&self, rhs: &Real) -> Result<Real> {
        Ok(match RealPair::promote(self, rhs) {
            RealPair::Integers(l, r) => {
                if r.is_zero() {
                    return Err(Error::ZeroDivision);
                }
                Real::Rational(Ratio::new(l.clone(), r.clone()))
            }
            RealPair::Ratios(l, r) => {
                if r.is_zero() {
                    return Err(Error::ZeroDivision);
                }
                Real::Rational(l / r)
            }
            RealPair::Floats(l, r) => Real::Float(l / r),
        })
    }

    /// Float quotient, never fails.
    pub fn fdiv(&self, rhs: &Real) -> Real {
        Real::Float(self.to_f64() / rhs.to_f64())
    }

    pub fn powf(&self, exp: &Real) -> Real {
        Real::Float(self.to_f64().powf(exp.to_f64()))
    }

    pub fn cos(&self) -> Real {
        Real::Float(self.to_f64().cos())
    }

    pub fn sin(&self) -> Real {
        Real::Float(self.to_f64().sin())
    }

    pub fn exp(&self) -> Real {
        Real::Float(self.to_f64().exp())
    }

    pub fn ln(&self) -> Real {
        Real::Float(self.to_f64().ln())
    }

    pub fn sqrt(&self) -> Real {
        Real::Float(self.to_f64().sqrt())
    }

    /// `atan2(self, x)` with `self` as the `y` coordinate.
    pub fn atan2(&self, x: &Real) -> Real {
        Real::Float(self.to_f64().atan2(x.to_f64()))
    }

    /// `sqrt(self² + other²)` without intermediate overflow.
    pub fn hypot(&self, other: &Real) -> Real {
        Real::Float(self.to_f64().hypot(other.to_f64()))
    }
}

impl From<BigInt> for Real {
    fn from(value: BigInt) -> Self {
        Real::Integer(value)
    }
}
impl From<Ratio<BigInt>> for Real {
    fn from(value: Ratio<BigInt>) -> Self {
        Real::Rational(value)
    }
}
impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real::Float(value)
    }
}
macro_rules! from_int_impl {
    ($($t:ty),+) => {
        $(impl From<$t> for Real {
            fn from(value: $t) -> Self {
                Real::Integer(BigInt::from(value))
            }
        })+
    };
}
from_int_impl!(i32, i64, u32, u64);

impl Zero for Real {
    fn zero() -> Self {
        Real::Integer(BigInt::ZERO)
    }
    fn is_zero(&self) -> bool {
        match self {
            Real::Integer(x) => x.is_zero(),
            Real::Rational(x) => x.is_zero(),
            Real::Float(x) => *x == 0.0,
        }
    }
}

impl One for Real {
    fn one() -> Self {
        Real::Integer(BigInt::one())
    }
    fn is_one(&self) -> bool {
        match self {
            Real::Integer(x) => x.is_one(),
            Real::Rational(x) => x.is_one(),
            Real::Float(x) => *x == 1.0,
        }
    }
}

impl Exact for Real {
    fn is_exact(&self) -> bool {
        !self.is_float()
    }
    fn is_exact_zero(&self) -> bool {
        self.is_exact() && self.is_zero()
    }
}

impl Conjugate for Real {
    #[inline(always)]
    fn conj(&self) -> Self {
        self.clone()
    }
}

impl Num for Real {
    type Real = Real;
    fn re(&self) -> Self::Real {
        self.clone()
    }
    fn abs_sqr(&self) -> Self::Real {
        self * self
    }
    fn is_unit(&self) -> bool {
        !self.is_zero()
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        match RealPair::promote(self, other) {
            RealPair::Integers(l, r) => l == r,
            RealPair::Ratios(l, r) => l == r,
            RealPair::Floats(l, r) => l == r,
        }
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match RealPair::promote(self, other) {
            RealPair::Integers(l, r) => Some(l.cmp(r)),
            RealPair::Ratios(l, r) => l.partial_cmp(&r),
            RealPair::Floats(l, r) => l.partial_cmp(&r),
        }
    }
}

impl StrictEq for Real {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Real::Integer(l), Real::Integer(r)) => l == r,
            (Real::Rational(l), Real::Rational(r)) => l == r,
            (Real::Float(l), Real::Float(r)) => l == r,
            _ => false,
        }
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Real::Integer(x) => x.hash(state),
            Real::Rational(x) => x.hash(state),
            // -0.0 == 0.0 has to hash the same
            Real::Float(x) => (if *x == 0.0 { 0.0f64 } else { *x }).to_bits().hash(state),
        }
    }
}

impl Neg for Real {
    type Output = Real;
    fn neg(self) -> Self::Output {
        match self {
            Real::Integer(x) => Real::Integer(-x),
            Real::Rational(x) => Real::Rational(-x),
            Real::Float(x) => Real::Float(-x),
        }
    }
}
impl<'a> Neg for &'a Real {
    type Output = Real;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_ring_op {
    ($Add:ident, $add:ident) => {
        impl<'a> $Add for &'a Real {
            type Output = Real;
            fn $add(self, rhs: Self) -> Self::Output {
                match RealPair::promote(self, rhs) {
                    RealPair::Integers(l, r) => Real::Integer(l.$add(r)),
                    RealPair::Ratios(l, r) => Real::Rational(l.$add(r)),
                    RealPair::Floats(l, r) => Real::Float(l.$add(r)),
                }
            }
        }
        impl $Add for Real {
            type Output = Real;
            fn $add(self, rhs: Self) -> Self::Output {
                (&self).$add(&rhs)
            }
        }
    };
}
impl_ring_op!(Add, add);
impl_ring_op!(Sub, sub);
impl_ring_op!(Mul, mul);

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, $add_assign:ident, $add:ident),+) => {
        $(impl $AddAssign for Real {
            fn $add_assign(&mut self, rhs: Real) {
                take_mut::take(self, |x| (&x).$add(&rhs));
            }
        })+
    };
}
forward_assign_impl!(AddAssign, add_assign, add, SubAssign, sub_assign, sub, MulAssign, mul_assign, mul);
