//! implements a `Quaternion<T>` type as a pair of complex numbers `a + b j`.
//!
//! The product is the Cayley-Dickson construction
//! `(a, b) (c, d) = (a c - d* b, d a + b c*)`, which is not commutative.
//! The operand order in the formulas below is significant.

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::num::*;
use crate::real::Real;
use core::cmp::Ordering;
use core::ops::*;
use num_bigint::BigInt;
use take_mut::take;

/// A quaternion `a + b j` with complex `a` and `b`.
/// Over four real axes this is `w + x i + y j + z k` with
/// `a = w + x i`, `b = y + z i` and the rules `i^2=j^2=k^2=-1, ij=k`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quaternion<T = Real> {
    pub a: Complex<T>,
    pub b: Complex<T>,
}

impl<T> Quaternion<T> {
    pub const fn new(a: Complex<T>, b: Complex<T>) -> Self {
        Self { a, b }
    }
}

impl<T: Zero> Quaternion<T> {
    /// Build from the four real components `w + x i + y j + z k`.
    pub fn from_parts(w: T, x: T, y: T, z: T) -> Self {
        Self {
            a: Complex::new(w, x),
            b: Complex::new(y, z),
        }
    }
}

impl<T: Zero + One> Quaternion<T> {
    pub fn i() -> Self {
        Self::new(Complex::i(), Complex::zero())
    }
    pub fn j() -> Self {
        Self::new(Complex::zero(), Complex::one())
    }
    pub fn k() -> Self {
        Self::new(Complex::zero(), Complex::i())
    }
}

impl<T: Clone> Quaternion<T> {
    /// The four real components `[w, x, y, z]`.
    pub fn to_hrect(&self) -> [T; 4] {
        [
            self.a.re.clone(),
            self.a.im.clone(),
            self.b.re.clone(),
            self.b.im.clone(),
        ]
    }
}

impl<T: Zero> Zero for Quaternion<T> {
    fn zero() -> Self {
        Self {
            a: Complex::zero(),
            b: Complex::zero(),
        }
    }
    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }
}

impl<T: Zero + One> One for Quaternion<T> {
    fn one() -> Self {
        Self {
            a: Complex::one(),
            b: Complex::zero(),
        }
    }
    fn is_one(&self) -> bool {
        self.a.is_one() && self.b.is_zero()
    }
}

impl<T: Clone + Neg<Output = T>> Conjugate for Quaternion<T> {
    #[inline(always)]
    fn conj(&self) -> Self {
        Self {
            a: self.a.conj(),
            b: -self.b.clone(),
        }
    }
}

impl<T: Exact> Exact for Quaternion<T> {
    fn is_exact(&self) -> bool {
        self.a.is_exact() && self.b.is_exact()
    }
    fn is_exact_zero(&self) -> bool {
        self.a.is_exact_zero() && self.b.is_exact_zero()
    }
}

impl<T: StrictEq> StrictEq for Quaternion<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        self.a.strict_eq(&other.a) && self.b.strict_eq(&other.b)
    }
}

/// Quaternions are only ordered on the real axis.
impl<T: PartialOrd + Zero> PartialOrd for Quaternion<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.b.is_zero() && other.b.is_zero() {
            self.a.partial_cmp(&other.a)
        } else {
            None
        }
    }
}

impl<T: Neg<Output = T>> Neg for Quaternion<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            a: -self.a,
            b: -self.b,
        }
    }
}
impl<'a, T> Neg for &'a Quaternion<T>
where
    &'a T: Neg<Output = T>,
{
    type Output = Quaternion<T>;
    fn neg(self) -> Self::Output {
        Quaternion {
            a: -&self.a,
            b: -&self.b,
        }
    }
}

impl<T: Zero> From<T> for Quaternion<T> {
    fn from(value: T) -> Self {
        Self {
            a: Complex::from(value),
            b: Complex::zero(),
        }
    }
}
impl<T: Zero> From<Complex<T>> for Quaternion<T> {
    fn from(value: Complex<T>) -> Self {
        Self {
            a: value,
            b: Complex::zero(),
        }
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident) => {
        impl<T> $Add for Quaternion<T>
        where
            for<'a> &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Quaternion<T>;
            fn $add(self, rhs: Self) -> Self::Output {
                (&self).$add(&rhs)
            }
        }
        impl<'a, T> $Add for &'a Quaternion<T>
        where
            &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Quaternion<T>;
            fn $add(self, rhs: Self) -> Self::Output {
                Quaternion {
                    a: (&self.a).$add(&rhs.a),
                    b: (&self.b).$add(&rhs.b),
                }
            }
        }
        /// Only the complex part `a` is affected.
        impl<'a, T: Clone> $Add<&'a Complex<T>> for &'a Quaternion<T>
        where
            &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Quaternion<T>;
            fn $add(self, rhs: &'a Complex<T>) -> Self::Output {
                Quaternion {
                    a: (&self.a).$add(rhs),
                    b: self.b.clone(),
                }
            }
        }
        impl<'a, T: Clone> $Add<&'a T> for &'a Quaternion<T>
        where
            &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Quaternion<T>;
            fn $add(self, rhs: &'a T) -> Self::Output {
                Quaternion {
                    a: (&self.a).$add(rhs),
                    b: self.b.clone(),
                }
            }
        }
    };
}
impl_add!(Add, add);
impl_add!(Sub, sub);

impl<T: Clone + Neg<Output = T>> Mul for Quaternion<T>
where
    for<'a> &'a T: AddMulSub<Output = T>,
{
    type Output = Quaternion<T>;
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
impl<'a, T: Clone + Neg<Output = T>> Mul for &'a Quaternion<T>
where
    for<'b> &'b T: AddMulSub<Output = T>,
{
    type Output = Quaternion<T>;
    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (&self.a, &self.b);
        let (c, d) = (&rhs.a, &rhs.b);
        Quaternion {
            a: &(a * c) - &(&d.conj() * b),
            b: &(d * a) + &(b * &c.conj()),
        }
    }
}

/// `(a, b) c = (a c, b c*)`, as `j c = c* j`.
impl<'a, T: Clone + Neg<Output = T>> Mul<&'a Complex<T>> for &'a Quaternion<T>
where
    for<'b> &'b T: AddMulSub<Output = T>,
{
    type Output = Quaternion<T>;
    fn mul(self, rhs: &'a Complex<T>) -> Self::Output {
        Quaternion {
            a: &self.a * rhs,
            b: &self.b * &rhs.conj(),
        }
    }
}
impl<'a, T> Mul<&'a T> for &'a Quaternion<T>
where
    &'a T: Mul<&'a T, Output = T>,
{
    type Output = Quaternion<T>;
    fn mul(self, rhs: &'a T) -> Self::Output {
        Quaternion {
            a: &self.a * rhs,
            b: &self.b * rhs,
        }
    }
}

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, $add_assign:ident, $add:ident),+) => {
        $(impl<T: Clone + Neg<Output = T>> $AddAssign for Quaternion<T>
            where for<'a> &'a T: AddMulSub<Output = T> {
            fn $add_assign(&mut self, rhs: Quaternion<T>) {
                take(self, |x| (&x).$add(&rhs));
            }
        })+
    };
}
forward_assign_impl!(AddAssign, add_assign, add, SubAssign, sub_assign, sub, MulAssign, mul_assign, mul);

impl<T: Num<Real = T> + Zero + Neg<Output = T>> Num for Quaternion<T>
where
    for<'a> &'a T: AddMul<Output = T>,
    Complex<T>: Num<Real = T>,
    Quaternion<T>: core::fmt::Debug,
{
    type Real = T;
    /// `|a|^2 + |b|^2`
    fn abs_sqr(&self) -> Self::Real {
        &self.a.abs_sqr() + &self.b.abs_sqr()
    }
    fn re(&self) -> Self::Real {
        self.a.re.clone()
    }
    fn is_unit(&self) -> bool {
        self.abs_sqr().is_unit()
    }
}

impl Quaternion<Real> {
    /// Build from anything convertible into the real kinds.
    pub fn hrect(w: impl Into<Real>, x: impl Into<Real>, y: impl Into<Real>, z: impl Into<Real>) -> Self {
        Self::from_parts(w.into(), x.into(), y.into(), z.into())
    }

    /// `|a|^2 + |b|^2`, exact for exact components.
    pub fn abs2(&self) -> Real {
        self.abs_sqr()
    }

    /// Magnitude. Stays exact if one of the two complex parts has an exact zero magnitude.
    pub fn abs(&self) -> Real {
        let a_abs = self.a.abs();
        let b_abs = self.b.abs();
        if a_abs.is_exact_zero() {
            b_abs
        } else if b_abs.is_exact_zero() {
            a_abs
        } else {
            a_abs.hypot(&b_abs)
        }
    }

    /// `(a* / |q|^2, b / -|q|^2)`. Fails for an exact zero.
    pub fn reciprocal(&self) -> Result<Self> {
        let d2 = self.abs2();
        Ok(Quaternion::new(
            self.a.conj().quo_real(&d2)?,
            self.b.quo_real(&-&d2)?,
        ))
    }

    /// Exact quotient `self / rhs = self * rhs* / |rhs|^2`.
    pub fn quo_quaternion(&self, rhs: &Quaternion) -> Result<Self> {
        Ok(self * &rhs.conj().quo_real(&rhs.abs2())?)
    }

    /// `(a / c, b / c*)`. This does not promote `c`, so a float quaternion
    /// divided by an exact zero gives infinities.
    pub fn quo_complex(&self, rhs: &Complex<Real>) -> Result<Self> {
        Ok(Quaternion::new(self.a.quo(rhs)?, self.b.quo(&rhs.conj())?))
    }

    pub fn quo_real(&self, rhs: &Real) -> Result<Self> {
        Ok(Quaternion::new(self.a.quo_real(rhs)?, self.b.quo_real(rhs)?))
    }

    pub fn fdiv_quaternion(&self, rhs: &Quaternion) -> Self {
        self * &rhs.conj().fdiv_real(&rhs.abs2())
    }

    pub fn fdiv_complex(&self, rhs: &Complex<Real>) -> Self {
        Quaternion::new(self.a.fdiv(rhs), self.b.fdiv(&rhs.conj()))
    }

    pub fn fdiv_real(&self, rhs: &Real) -> Self {
        Quaternion::new(self.a.fdiv_real(rhs), self.b.fdiv_real(rhs))
    }

    /// `true` if the magnitude is finite.
    pub fn is_finite(&self) -> bool {
        self.abs().is_finite()
    }

    /// `true` if the magnitude is infinite. `NaN` is neither finite nor infinite.
    pub fn is_infinite(&self) -> bool {
        self.abs().is_infinite()
    }

    /// The complex part `a`, if `b` is an exact zero.
    pub fn to_complex(&self) -> Result<Complex<Real>> {
        if self.b.is_exact_zero() {
            Ok(self.a.clone())
        } else {
            Err(Error::Conversion {
                value: format!("{self}"),
                target: "Complex",
            })
        }
    }

    /// The real part, if all imaginary parts are exact zeros.
    pub fn to_real(&self) -> Result<Real> {
        self.to_complex()
            .and_then(|c| c.to_real())
            .map_err(|_| Error::Conversion {
                value: format!("{self}"),
                target: "Real",
            })
    }

    pub fn to_f64(&self) -> Result<f64> {
        Ok(self.to_real()?.to_f64())
    }

    pub fn to_rational(&self) -> Result<crate::Ratio<BigInt>> {
        self.to_real()?.to_rational()
    }

    /// Truncated towards zero.
    pub fn to_integer(&self) -> Result<BigInt> {
        self.to_real()?.to_integer()
    }

    /// Least common multiple of all component denominators.
    pub fn denominator(&self) -> Result<BigInt> {
        Ok(lcm(self.a.denominator()?, self.b.denominator()?))
    }

    /// The quaternion with integer components `self * self.denominator()`.
    ///
    /// ```text
    ///   1   1    1    3     4-6i-12j+9k <- numerator
    ///   - - -i - -j + -k -> -----------
    ///   3   2    1    4         12      <- denominator
    /// ```
    pub fn numerator(&self) -> Result<Self> {
        let ad = self.a.denominator()?;
        let bd = self.b.denominator()?;
        let abd = lcm(ad.clone(), bd.clone());
        let an = self.a.numerator()?;
        let bn = self.b.numerator()?;
        Ok(Quaternion::new(
            &an * &Real::Integer(&abd / &ad),
            &bn * &Real::Integer(&abd / &bd),
        ))
    }
}

/// Write a quaternion in the notation `real + i x + j y + k z`. Any term can be left out, however the order needs to be kept.
/// The terms are converted with [Into], so the components can be of any real kind.
///
/// With comma separated arguments, this calls [Quaternion::from_args] instead and returns its [Result].
#[macro_export]
macro_rules! quaternion {
    ($re:literal $(+ i $i:literal)? $(+ i ($ie:expr))? $(+ j $j:literal)? $(+ j ($je:expr))? $(+ k $k:literal)? $(+ k ($ke:expr))?) => {
        {
            #[allow(unused_mut)]
            let mut q = <$crate::Quaternion>::from_parts(
                $re.into(),
                $crate::Zero::zero(),
                $crate::Zero::zero(),
                $crate::Zero::zero(),
            );
            $(q.a.im = $i.into();)?
            $(q.a.im = ($ie).into();)?
            $(q.b.re = $j.into();)?
            $(q.b.re = ($je).into();)?
            $(q.b.im = $k.into();)?
            $(q.b.im = ($ke).into();)?
            q
        }
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Quaternion::from_args(&[$($crate::Arg::from($arg)),+])
    };
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Quaternion<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.a, &self.b).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Quaternion<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (a, b) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(a, b))
    }
}
