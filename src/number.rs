//! The closed numeric tower `Real < Complex < Quaternion` with generic arithmetic.
//!
//! A binary operation on two [Number]s uses the direct formula if the left operand is of the
//! higher (or same) kind, e.g. `q c = (a c, b c*)` for a quaternion `q` and a complex `c`.
//! Otherwise the left operand is promoted to the kind of the right one first, see [Number::coerce].
//! A lower kind promotes with exact zeros, so `2.0 + 0i` becomes `2.0 + 0i + 0j + 0k`.

use core::cmp::Ordering;
use core::ops::*;

use num_bigint::BigInt;

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::num::*;
use crate::quaternion::Quaternion;
use crate::rational::Ratio;
use crate::real::Real;

/// A number of any kind of the tower.
#[derive(Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Real(Real),
    Complex(Complex<Real>),
    Quaternion(Quaternion),
}

/// Level in the tower, ordered from the lowest to the highest kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Real,
    Complex,
    Quaternion,
}

impl Number {
    pub fn kind(&self) -> Kind {
        match self {
            Number::Real(_) => Kind::Real,
            Number::Complex(_) => Kind::Complex,
            Number::Quaternion(_) => Kind::Quaternion,
        }
    }

    /// Name of the kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Number::Real(x) => x.kind_name(),
            Number::Complex(_) => "Complex",
            Number::Quaternion(_) => "Quaternion",
        }
    }

    pub fn is_real(&self) -> bool {
        self.kind() == Kind::Real
    }

    /// `true` for complex numbers and everything below, i.e. all non quaternions.
    pub fn is_complex(&self) -> bool {
        self.kind() <= Kind::Complex
    }

    pub fn is_quaternion(&self) -> bool {
        self.kind() == Kind::Quaternion
    }

    /// The value if it is of a real kind. This checks the kind, not the value,
    /// so `1+0i` is not a real.
    pub fn real_kind(&self) -> Result<Real> {
        match self {
            Number::Real(x) => Ok(x.clone()),
            _ => Err(Error::NotReal),
        }
    }

    /// The value as a complex number if it is complex or real.
    pub fn complex_kind(&self) -> Result<Complex<Real>> {
        match self {
            Number::Real(x) => Ok(Complex::from(x.clone())),
            Number::Complex(x) => Ok(x.clone()),
            Number::Quaternion(_) => Err(Error::NotComplex),
        }
    }

    /// Promote into the quaternions. Never fails.
    pub fn to_quaternion(&self) -> Quaternion {
        match self {
            Number::Real(x) => Quaternion::from(x.clone()),
            Number::Complex(x) => Quaternion::from(x.clone()),
            Number::Quaternion(x) => x.clone(),
        }
    }

    // infallible raise to a higher (or the same) kind
    fn promote(&self, kind: Kind) -> Number {
        if self.kind() >= kind {
            return self.clone();
        }
        log::debug!("promote {} to {kind:?}", self.kind_name());
        match kind {
            Kind::Real => self.clone(),
            Kind::Complex => match self {
                Number::Real(x) => Number::Complex(Complex::from(x.clone())),
                _ => self.clone(),
            },
            Kind::Quaternion => Number::Quaternion(self.to_quaternion()),
        }
    }

    /// Returns `(other, self)` with `other` promoted to the kind of `self`.
    ///
    /// Fails if `other` is of a higher kind, there is no demotion in the tower.
    pub fn coerce(&self, other: &Number) -> Result<(Number, Number)> {
        if other.kind() > self.kind() {
            return Err(Error::Coercion {
                from: other.kind_name(),
                into: self.kind_name(),
            });
        }
        Ok((other.promote(self.kind()), self.clone()))
    }

    /// The complex value, if the quaternion part is an exact zero.
    pub fn to_complex(&self) -> Result<Complex<Real>> {
        match self {
            Number::Real(x) => Ok(Complex::from(x.clone())),
            Number::Complex(x) => Ok(x.clone()),
            Number::Quaternion(x) => x.to_complex(),
        }
    }

    /// The real value, if all imaginary parts are exact zeros.
    pub fn to_real(&self) -> Result<Real> {
        match self {
            Number::Real(x) => Ok(x.clone()),
            Number::Complex(x) => x.to_real(),
            Number::Quaternion(x) => x.to_real(),
        }
    }

    pub fn to_f64(&self) -> Result<f64> {
        Ok(self.to_real()?.to_f64())
    }

    /// `self i`. Only defined for reals.
    pub fn i(&self) -> Result<Number> {
        Ok(Number::Complex(Complex::imag(self.real_kind()?)))
    }

    /// `self j`, the quaternion `(0, self)`. Defined for complex numbers and reals.
    pub fn j(&self) -> Result<Number> {
        Ok(Number::Quaternion(Quaternion::new(
            Complex::zero(),
            self.complex_kind()?,
        )))
    }

    /// `self k`, the quaternion `(0, self i)`. Only defined for reals,
    /// as `k` can't be applied to a complex number without ambiguity of the order.
    pub fn k(&self) -> Result<Number> {
        Ok(Number::Quaternion(Quaternion::new(
            Complex::zero(),
            Complex::imag(self.real_kind()?),
        )))
    }

    /// Exact quotient. Fails for a divisor that is an exact zero,
    /// with the exception of a lower kind divisor of a quaternion, see [Quaternion::quo].
    pub fn quo(&self, rhs: &Number) -> Result<Number> {
        use Number::*;
        Ok(match (self, rhs) {
            (Real(l), Real(r)) => Real(l.quo(r)?),
            (Complex(l), Complex(r)) => Complex(l.quo(r)?),
            (Complex(l), Real(r)) => Complex(l.quo_real(r)?),
            (Quaternion(l), r) => Quaternion(l.quo(r)?),
            (l, r) => {
                let (l, r) = r.coerce(l)?;
                return l.quo(&r);
            }
        })
    }

    /// Float quotient, never fails.
    pub fn fdiv(&self, rhs: &Number) -> Number {
        use Number::*;
        match (self, rhs) {
            (Real(l), Real(r)) => Real(l.fdiv(r)),
            (Complex(l), Complex(r)) => Complex(l.fdiv(r)),
            (Complex(l), Real(r)) => Complex(l.fdiv_real(r)),
            (Quaternion(l), r) => Quaternion(l.fdiv(r)),
            (l, r) => l.promote(r.kind()).fdiv(r),
        }
    }
}

impl Quaternion<Real> {
    /// Exact quotient by any number.
    ///
    /// A lower kind divisor `c` is applied as `(a / c, b / c*)` without promotion,
    /// so a float quaternion divided by an exact zero gives infinities instead of an error.
    pub fn quo(&self, rhs: &Number) -> Result<Quaternion> {
        match rhs {
            Number::Real(r) => self.quo_real(r),
            Number::Complex(c) => self.quo_complex(c),
            Number::Quaternion(q) => self.quo_quaternion(q),
        }
    }

    /// Float quotient by any number, never fails.
    pub fn fdiv(&self, rhs: &Number) -> Quaternion {
        match rhs {
            Number::Real(r) => self.fdiv_real(r),
            Number::Complex(c) => self.fdiv_complex(c),
            Number::Quaternion(q) => self.fdiv_quaternion(q),
        }
    }

    /// Returns `(other, self)` with `other` promoted to a quaternion.
    pub fn coerce(&self, other: &Number) -> (Quaternion, Quaternion) {
        (other.to_quaternion(), self.clone())
    }
}

macro_rules! impl_quaternion_number_op {
    ($($Add:ident, $add:ident),+) => {
        $(impl<'a> $Add<&'a Number> for &'a Quaternion {
            type Output = Quaternion;
            fn $add(self, rhs: &'a Number) -> Quaternion {
                match rhs {
                    Number::Real(r) => self.$add(r),
                    Number::Complex(c) => self.$add(c),
                    Number::Quaternion(q) => self.$add(q),
                }
            }
        })+
    };
}
impl_quaternion_number_op!(Add, add, Sub, sub, Mul, mul);

macro_rules! impl_number_op {
    ($($Add:ident, $add:ident),+) => {
        $(impl<'a> $Add for &'a Number {
            type Output = Number;
            fn $add(self, rhs: Self) -> Number {
                use Number::*;
                match (self, rhs) {
                    (Real(l), Real(r)) => Real(l.$add(r)),
                    (Complex(l), Complex(r)) => Complex(l.$add(r)),
                    (Complex(l), Real(r)) => Complex(l.$add(r)),
                    (Quaternion(l), r) => Quaternion(l.$add(r)),
                    (l, r) => (&l.promote(r.kind())).$add(r),
                }
            }
        }
        impl $Add for Number {
            type Output = Number;
            fn $add(self, rhs: Self) -> Number {
                (&self).$add(&rhs)
            }
        })+
    };
}
impl_number_op!(Add, add, Sub, sub, Mul, mul);

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        -&self
    }
}
impl<'a> Neg for &'a Number {
    type Output = Number;
    fn neg(self) -> Number {
        match self {
            Number::Real(x) => Number::Real(-x),
            Number::Complex(x) => Number::Complex(-x),
            Number::Quaternion(x) => Number::Quaternion(-x),
        }
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Real(Real::zero())
    }
    fn is_zero(&self) -> bool {
        match self {
            Number::Real(x) => x.is_zero(),
            Number::Complex(x) => x.is_zero(),
            Number::Quaternion(x) => x.is_zero(),
        }
    }
}

impl One for Number {
    fn one() -> Self {
        Number::Real(Real::one())
    }
    fn is_one(&self) -> bool {
        match self {
            Number::Real(x) => x.is_one(),
            Number::Complex(x) => x.is_one(),
            Number::Quaternion(x) => x.is_one(),
        }
    }
}

impl Exact for Number {
    fn is_exact(&self) -> bool {
        match self {
            Number::Real(x) => x.is_exact(),
            Number::Complex(x) => x.is_exact(),
            Number::Quaternion(x) => x.is_exact(),
        }
    }
    fn is_exact_zero(&self) -> bool {
        match self {
            Number::Real(x) => x.is_exact_zero(),
            Number::Complex(x) => x.is_exact_zero(),
            Number::Quaternion(x) => x.is_exact_zero(),
        }
    }
}

/// Numeric equality across kinds, `1 == 1.0 + 0i`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Real(l), Number::Real(r)) => l == r,
            (Number::Complex(l), Number::Complex(r)) => l == r,
            _ => self.to_quaternion() == other.to_quaternion(),
        }
    }
}

/// Only numbers on the real axis are ordered.
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_quaternion().partial_cmp(&other.to_quaternion())
    }
}

impl StrictEq for Number {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Real(l), Number::Real(r)) => l.strict_eq(r),
            (Number::Complex(l), Number::Complex(r)) => l.strict_eq(r),
            (Number::Quaternion(l), Number::Quaternion(r)) => l.strict_eq(r),
            _ => false,
        }
    }
}

impl PartialEq<Number> for Quaternion {
    fn eq(&self, other: &Number) -> bool {
        *self == other.to_quaternion()
    }
}

impl PartialEq<Complex<Real>> for Quaternion {
    fn eq(&self, other: &Complex<Real>) -> bool {
        self.b.is_zero() && self.a == *other
    }
}

impl PartialEq<Real> for Quaternion {
    fn eq(&self, other: &Real) -> bool {
        self.b.is_zero() && self.a.im.is_zero() && self.a.re == *other
    }
}

impl From<Real> for Number {
    fn from(value: Real) -> Self {
        Number::Real(value)
    }
}
impl From<Complex<Real>> for Number {
    fn from(value: Complex<Real>) -> Self {
        Number::Complex(value)
    }
}
impl From<Quaternion> for Number {
    fn from(value: Quaternion) -> Self {
        Number::Quaternion(value)
    }
}
impl From<Number> for Quaternion {
    fn from(value: Number) -> Self {
        value.to_quaternion()
    }
}

macro_rules! from_real_impl {
    ($($t:ty),+) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::Real(Real::from(value))
            }
        }
        impl From<$t> for Quaternion {
            fn from(value: $t) -> Self {
                Quaternion::from(Real::from(value))
            }
        })+
    };
}
from_real_impl!(i32, i64, u32, u64, f64, BigInt, Ratio<BigInt>);
