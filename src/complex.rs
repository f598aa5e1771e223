//! implements a `Complex<T>` type, generic over the component type.
//!
//! With `T = Real` this is the complex kind of the tower, which gets the exactness aware
//! division, absolute value and rational decomposition from the second impl block.

use crate::error::Result;
use crate::num::*;
use crate::real::Real;
use core::cmp::Ordering;
use core::ops::*;
use num_bigint::BigInt;
use take_mut::take;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Complex<T = Real> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Zero> Complex<T> {
    pub fn real(re: T) -> Self {
        Self {
            re,
            im: Zero::zero(),
        }
    }
    pub fn imag(im: T) -> Self {
        Self {
            re: Zero::zero(),
            im,
        }
    }
}

impl<T: Zero> Zero for Complex<T> {
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
    fn zero() -> Self {
        Self {
            re: Zero::zero(),
            im: Zero::zero(),
        }
    }
}

impl<T: Zero + One> One for Complex<T> {
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
    fn one() -> Self {
        Self {
            re: One::one(),
            im: Zero::zero(),
        }
    }
}

impl<T: Zero + One> Complex<T> {
    pub fn i() -> Self {
        Self {
            re: Zero::zero(),
            im: One::one(),
        }
    }
}

impl<T: Zero> From<T> for Complex<T> {
    fn from(value: T) -> Self {
        Self {
            re: value,
            im: Zero::zero(),
        }
    }
}

impl<T: Exact> Exact for Complex<T> {
    fn is_exact(&self) -> bool {
        self.re.is_exact() && self.im.is_exact()
    }
    fn is_exact_zero(&self) -> bool {
        self.re.is_exact_zero() && self.im.is_exact_zero()
    }
}

impl<T: StrictEq> StrictEq for Complex<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        self.re.strict_eq(&other.re) && self.im.strict_eq(&other.im)
    }
}

/// Complex numbers are only ordered on the real axis.
impl<T: PartialOrd + Zero> PartialOrd for Complex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.im.is_zero() && other.im.is_zero() {
            self.re.partial_cmp(&other.re)
        } else {
            None
        }
    }
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}
impl<'a, T> Neg for &'a Complex<T>
where
    &'a T: Neg<Output = T>,
{
    type Output = Complex<T>;
    fn neg(self) -> Self::Output {
        Complex {
            re: -&self.re,
            im: -&self.im,
        }
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident) => {
        impl<T> $Add<Complex<T>> for Complex<T>
        where
            for<'a> &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Complex<T>;
            fn $add(self, rhs: Complex<T>) -> Self::Output {
                (&self).$add(&rhs)
            }
        }
        impl<'a, T> $Add<&'a Complex<T>> for &'a Complex<T>
        where
            &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Complex<T>;
            fn $add(self, rhs: &'a Complex<T>) -> Self::Output {
                Complex {
                    re: (&self.re).$add(&rhs.re),
                    im: (&self.im).$add(&rhs.im),
                }
            }
        }
    };
}
impl_add!(Add, add);
impl_add!(Sub, sub);

impl<T> Mul<Complex<T>> for Complex<T>
where
    for<'a> &'a T: AddMulSub<Output = T>,
{
    type Output = Complex<T>;
    fn mul(self, rhs: Complex<T>) -> Self::Output {
        &self * &rhs
    }
}
impl<'a, T> Mul<&'a Complex<T>> for &'a Complex<T>
where
    for<'b> &'b T: AddMulSub<Output = T>,
{
    type Output = Complex<T>;
    fn mul(self, rhs: &'a Complex<T>) -> Self::Output {
        Complex {
            re: &(&self.re * &rhs.re) - &(&self.im * &rhs.im),
            im: &(&self.im * &rhs.re) + &(&self.re * &rhs.im),
        }
    }
}

macro_rules! impl_add_real {
    ($Add: ident, $add: ident) => {
        impl<T: Clone> $Add<T> for Complex<T>
        where
            for<'a> &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Complex<T>;
            fn $add(self, rhs: T) -> Self::Output {
                Self {
                    re: (&self.re).$add(&rhs),
                    im: self.im,
                }
            }
        }
        impl<'a, T: Clone> $Add<&'a T> for &'a Complex<T>
        where
            &'a T: $Add<&'a T, Output = T>,
        {
            type Output = Complex<T>;
            fn $add(self, rhs: &'a T) -> Self::Output {
                Complex {
                    re: (&self.re).$add(rhs),
                    im: self.im.clone(),
                }
            }
        }
        // can't implement the reverse, because Rust doesn't allow it.
    };
}
impl_add_real!(Add, add);
impl_add_real!(Sub, sub);

impl<T> Mul<T> for Complex<T>
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    type Output = Complex<T>;
    fn mul(self, rhs: T) -> Self::Output {
        &self * &rhs
    }
}
impl<'a, T> Mul<&'a T> for &'a Complex<T>
where
    &'a T: Mul<&'a T, Output = T>,
{
    type Output = Complex<T>;
    fn mul(self, rhs: &'a T) -> Self::Output {
        Complex {
            re: &self.re * rhs,
            im: &self.im * rhs,
        }
    }
}

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, ($($Add:ident),*), $add_assign:ident, $add:ident),+) => {
        $(impl<T: Clone> $AddAssign for Complex<T>
            where for<'a> &'a T: Add<Output = T> $(+ $Add<Output = T>)+ {
            fn $add_assign(&mut self, rhs: Complex<T>) {
                take(self, |x| x.$add(rhs));
            }
        }
        impl<T: Clone> $AddAssign<T> for Complex<T>
            where for<'a> &'a T: Add<Output = T> $(+ $Add<Output = T>)+ {
            fn $add_assign(&mut self, rhs: T) {
                take(self, |x| x.$add(rhs));
            }
        })+
    };
}
forward_assign_impl!(
    AddAssign,
    (Add),
    add_assign,
    add,
    SubAssign,
    (Sub),
    sub_assign,
    sub,
    MulAssign,
    (Add, Mul, Sub),
    mul_assign,
    mul
);

impl<T: Clone + Neg<Output = T>> Conjugate for Complex<T> {
    #[inline(always)]
    fn conj(&self) -> Self {
        // treat T as real valued and don't cascade complex conjugation
        Complex {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }
}
impl<T: Num<Real = T> + Zero + Neg<Output = T>> Num for Complex<T>
where
    for<'a> &'a T: AddMul<Output = T>,
    Complex<T>: core::fmt::Debug,
{
    type Real = T;
    #[inline(always)]
    fn abs_sqr(&self) -> Self::Real {
        &(&self.re * &self.re) + &(&self.im * &self.im)
    }
    #[inline(always)]
    fn re(&self) -> Self::Real {
        self.re.clone()
    }
    #[inline(always)]
    fn is_unit(&self) -> bool {
        self.abs_sqr().is_unit()
    }
}

impl Complex<Real> {
    /// Build from anything convertible into the real kinds.
    pub fn rect(re: impl Into<Real>, im: impl Into<Real>) -> Self {
        Complex::new(re.into(), im.into())
    }

    /// `|re|² + |im|²`, exact for exact components.
    pub fn abs2(&self) -> Real {
        self.abs_sqr()
    }

    /// Magnitude. If one part is zero this is the absolute value of the other one,
    /// turned into a float if the zero part was a float. Otherwise a float `hypot`.
    pub fn abs(&self) -> Real {
        if self.re.is_zero() {
            let a = self.im.abs();
            return if self.re.is_float() && !self.im.is_float() {
                Real::Float(a.to_f64())
            } else {
                a
            };
        }
        if self.im.is_zero() {
            let a = self.re.abs();
            return if !self.re.is_float() && self.im.is_float() {
                Real::Float(a.to_f64())
            } else {
                a
            };
        }
        self.re.hypot(&self.im)
    }

    // Smith's algorithm, to avoid overflowing `abs2`. `div` is the scalar division.
    fn divide(&self, rhs: &Self, div: impl Fn(&Real, &Real) -> Result<Real>) -> Result<Self> {
        let float = !self.is_exact() || !rhs.is_exact();
        let one = Real::one();
        let (x, y) = if rhs.re.abs() > rhs.im.abs() {
            let r = div(&rhs.im, &rhs.re)?;
            let n = &rhs.re * &(&one + &(&r * &r));
            (
                div(&(&self.re + &(&self.im * &r)), &n)?,
                div(&(&self.im - &(&self.re * &r)), &n)?,
            )
        } else {
            let r = div(&rhs.re, &rhs.im)?;
            let n = &rhs.im * &(&one + &(&r * &r));
            (
                div(&(&(&self.re * &r) + &self.im), &n)?,
                div(&(&(&self.im * &r) - &self.re), &n)?,
            )
        };
        Ok(if float {
            Complex::new(x, y)
        } else {
            Complex::new(x.demote(), y.demote())
        })
    }

    /// Exact quotient. Fails if the divisor is an exact zero.
    pub fn quo(&self, rhs: &Self) -> Result<Self> {
        self.divide(rhs, Real::quo)
    }

    /// Exact quotient by a real, component wise.
    pub fn quo_real(&self, rhs: &Real) -> Result<Self> {
        Ok(Complex::new(
            self.re.quo(rhs)?.demote(),
            self.im.quo(rhs)?.demote(),
        ))
    }

    /// Float quotient, never fails.
    pub fn fdiv(&self, rhs: &Self) -> Self {
        match self.divide(rhs, |a, b| Ok(a.fdiv(b))) {
            Ok(c) => c,
            // float division is infallible
            Err(_) => Complex::new(Real::Float(f64::NAN), Real::Float(f64::NAN)),
        }
    }

    pub fn fdiv_real(&self, rhs: &Real) -> Self {
        Complex::new(self.re.fdiv(rhs), self.im.fdiv(rhs))
    }

    /// The real part, if the imaginary part is an exact zero.
    pub fn to_real(&self) -> Result<Real> {
        if self.im.is_exact_zero() {
            Ok(self.re.clone())
        } else {
            Err(crate::Error::Conversion {
                value: format!("{self}"),
                target: "Real",
            })
        }
    }

    /// Least common multiple of the component denominators.
    pub fn denominator(&self) -> Result<BigInt> {
        Ok(lcm(self.re.denominator()?, self.im.denominator()?))
    }

    /// `self * self.denominator()` with integer components.
    pub fn numerator(&self) -> Result<Self> {
        let cd = self.denominator()?;
        let scale = |x: &Real| -> Result<Real> {
            Ok(Real::Integer(x.numerator()? * (&cd / &x.denominator()?)))
        };
        Ok(Complex::new(scale(&self.re)?, scale(&self.im)?))
    }
}

#[macro_export]
macro_rules! complex {
    ($x:literal + $y:literal i) => {
        $crate::Complex::new($x.into(), $y.into())
    };
    ($x:literal - $y:literal i) => {
        $crate::Complex::new($x.into(), (-$y).into())
    };
    (($x:expr) + ($y:expr) i) => {
        $crate::Complex::new($x.into(), $y.into())
    };
    ($x:literal i) => {
        $crate::Complex::new($crate::Zero::zero(), $x.into())
    };
    ($x:expr) => {
        $crate::Complex::real($x.into())
    };
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Complex<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.re, &self.im).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Complex<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (re, im) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(re, im))
    }
}
