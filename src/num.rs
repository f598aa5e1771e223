use core::{fmt::Debug, ops::*};

use num_bigint::BigInt;

/// Defines an additive identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a + 0 = a       ∀ a ∈ Self
/// 0 + a = a       ∀ a ∈ Self
/// ```
pub trait Zero: Sized {
    /// Returns the additive identity element of `Self`, `0`.
    fn zero() -> Self;

    /// Sets `self` to the additive identity element of `Self`, `0`.
    #[inline]
    fn set_zero(&mut self) {
        *self = Zero::zero();
    }

    /// Returns `true` if `self` is numerically equal to the additive identity.
    /// For exactness aware types this includes inexact zeros, see [Exact::is_exact_zero].
    fn is_zero(&self) -> bool;
}

/// Defines a multiplicative identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a * 1 = a       ∀ a ∈ Self
/// 1 * a = a       ∀ a ∈ Self
/// ```
pub trait One: Sized {
    /// Returns the multiplicative identity element of `Self`, `1`.
    fn one() -> Self;

    /// Returns `true` if `self` is equal to the multiplicative identity.
    fn is_one(&self) -> bool;
}

macro_rules! zero_one_impl {
    ($($t:ty),+; $z:expr, $o:expr) => {
        $(impl Zero for $t {
            #[inline(always)]
            fn zero() -> $t {
                $z
            }
            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == $z
            }
        }
        impl One for $t {
            #[inline(always)]
            fn one() -> $t {
                $o
            }
            #[inline(always)]
            fn is_one(&self) -> bool {
                *self == $o
            }
        })+
    };
}
zero_one_impl!(i32, i64; 0, 1);
zero_one_impl!(f64; 0.0, 1.0);
zero_one_impl!(BigInt; BigInt::ZERO, BigInt::from(1i8));

/// Exactness of a number, i.e. whether it is free of rounding.
///
/// Integers and rationals are exact, floats are not. A composite value
/// (complex, quaternion) is exact if all of its components are.
pub trait Exact {
    /// `true` if no component carries rounding error.
    fn is_exact(&self) -> bool;
    /// `true` if every component is an exact zero.
    /// Dividing by such a value is an error instead of an infinity.
    fn is_exact_zero(&self) -> bool;
}

macro_rules! exact_impl {
    ($($t:ty),+; $exact:expr) => {
        $(impl Exact for $t {
            #[inline(always)]
            fn is_exact(&self) -> bool {
                $exact
            }
            #[inline(always)]
            fn is_exact_zero(&self) -> bool {
                $exact && Zero::is_zero(self)
            }
        })+
    };
}
exact_impl!(i32, i64, BigInt; true);
exact_impl!(f64; false);

pub trait AddMul:
    Sized + Add<Output = <Self as AddMul>::Output> + Mul<Output = <Self as AddMul>::Output>
{
    type Output;
}
impl<'a, T: Sized> AddMul for &'a T
where
    &'a T: Add<Output = T> + Mul<Output = T>,
{
    type Output = T;
}

pub trait AddMulSub:
    AddMul<Output = <Self as AddMulSub>::Output> + Sub<Output = <Self as AddMulSub>::Output>
{
    type Output;
}
impl<'a, T: Sized> AddMulSub for &'a T
where
    &'a T: AddMul<Output = T> + Sub<Output = T>,
{
    type Output = T;
}

pub trait AddMulSubDiv:
    AddMulSub<Output = <Self as AddMulSubDiv>::Output> + Div<Output = <Self as AddMulSubDiv>::Output>
{
    type Output;
}
impl<'a, T: Sized> AddMulSubDiv for &'a T
where
    &'a T: AddMulSub<Output = T> + Div<Output = T>,
{
    type Output = T;
}

/// General complex conjugate trait. To implement this for real types, use the macro `impl_conjugate_real!(<type>)`.
pub trait Conjugate {
    /// complex conjugate of the value
    #[must_use]
    fn conj(&self) -> Self;
}
#[macro_export]
macro_rules! impl_conjugate_real {
    ($($type:ty),+) => {
        $(impl $crate::Conjugate for $type {
            #[inline(always)]
            fn conj(&self) -> Self {
                self.clone()
            }
        })+
    };
}
impl_conjugate_real!(i32, i64, f64, BigInt);

/// Represents a number, which can be real, complex or a quaternion.
/// To differentiate between real and non real, use `T: Num<Real = T>`.
pub trait Num: Clone + Debug + From<Self::Real> + PartialEq + Conjugate {
    type Real: Num<Real = Self::Real>;
    /// real part of the number
    #[must_use]
    fn re(&self) -> Self::Real;
    /// absolute value squared
    #[must_use]
    fn abs_sqr(&self) -> Self::Real;
    /// check if the element has a multiplicative inverse
    #[must_use]
    fn is_unit(&self) -> bool;
}

macro_rules! num_real_type {
    ($($type:ty),+; $unit:expr) => {
        $(impl Num for $type {
            type Real = Self;
            #[inline(always)]
            fn abs_sqr(&self) -> Self::Real {
                self * self
            }
            #[inline(always)]
            fn re(&self) -> Self::Real {
                self.clone()
            }
            #[inline(always)]
            fn is_unit(&self) -> bool {
                let unit: fn(&Self) -> bool = $unit;
                unit(self)
            }
        })+
    };
}
num_real_type!(i32, i64, BigInt; |x| x.is_one() || (-x).is_one());
num_real_type!(f64; |x| *x != 0.0);

/// like [Rem<T, Output = T>] but with euclidean division, so the remainder `r` is bounded by the denominator `d` e.g. with `|r| <= |d|`.
pub trait RemEuclid: Sized {
    /// Compute the euclidean division and remainder.
    fn div_rem_euclid(&self, div: &Self) -> (Self, Self);
    /// Return, whether the number could be the result of a euclidean remainder.
    /// Note, that zero is always "valid euclid".
    /// For all x: x or -x need to be "valid euclid".
    fn is_valid_euclid(&self) -> bool;
}

macro_rules! impl_rem_euclid {
    ($($T:ty),+) => {
        $(impl RemEuclid for $T {
            fn div_rem_euclid(&self, div: &Self) -> (Self, Self) {
                (self.div_euclid(*div), self.rem_euclid(*div))
            }
            fn is_valid_euclid(&self) -> bool {
                self >= &0
            }
        })+
    };
}
impl_rem_euclid!(i32, i64);

impl RemEuclid for BigInt {
    fn div_rem_euclid(&self, div: &Self) -> (Self, Self) {
        // the inherent methods of `num_traits` would shadow ours if the trait was imported.
        (
            num_traits::Euclid::div_euclid(self, div),
            num_traits::Euclid::rem_euclid(self, div),
        )
    }
    fn is_valid_euclid(&self) -> bool {
        self.sign() != num_bigint::Sign::Minus
    }
}

/// Calculates the Greatest Common Divisor (GCD) of the number and
/// `other`. The result is always positive (> 0), or 1 if both are 0.
#[must_use]
pub fn gcd<T: Zero + One + Sub<Output = T> + RemEuclid>(mut a: T, mut b: T) -> T {
    if a.is_zero() {
        return if b.is_zero() {
            T::one()
        } else if b.is_valid_euclid() {
            b
        } else {
            T::zero() - b
        };
    }
    while !b.is_zero() {
        (b, a) = (a.div_rem_euclid(&b).1, b);
    }
    if a.is_valid_euclid() {
        a
    } else {
        T::zero() - a
    }
}

pub trait Cancel: Sized + Clone + Zero + One + Sub<Output = Self> + PartialEq + RemEuclid {
    /// Divide both numbers by their [gcd].
    #[must_use]
    fn cancel(self, b: Self) -> (Self, Self);
}
impl<T: Clone + Zero + PartialEq + One + Sub<Output = T> + RemEuclid> Cancel for T
where
    for<'a> &'a T: AddMulSubDiv<Output = T>,
{
    fn cancel(self, b: Self) -> (Self, Self) {
        if self == b {
            if self.is_zero() {
                return (T::zero(), T::zero());
            } else {
                return (T::one(), T::one());
            }
        }
        let gcd = gcd(self.clone(), b.clone());
        (&self / &gcd, &b / &gcd)
    }
}

/// Calculates the Least Common Multiple (LCM) of the number and
/// `other`. The result is always `result.is_valid_euclid() == true` (usually that means >= 0).
#[must_use]
pub fn lcm<T: Clone + Zero + One + Sub<Output = T> + Mul<Output = T> + Div<T, Output = T> + RemEuclid>(
    mut a: T,
    mut b: T,
) -> T {
    if !a.is_valid_euclid() {
        a = T::zero() - a;
    }
    if !b.is_valid_euclid() {
        b = T::zero() - b;
    }
    a.clone() * (b.clone() / gcd(a, b))
}

/// Equality of kind and value, as opposed to the numeric [PartialEq].
///
/// `0` and `0.0` are numerically equal, but not strictly equal. Same for `1` and `1/1`.
/// [Hash] implementations in this crate agree with this relation.
pub trait StrictEq {
    #[must_use]
    fn strict_eq(&self, other: &Self) -> bool;
}

/// Wrapper to use numbers as keys in hash maps and sets, compared by [StrictEq].
#[derive(Clone, Debug)]
pub struct Strict<T>(pub T);

impl<T: StrictEq> PartialEq for Strict<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.strict_eq(&other.0)
    }
}
// NaN is not strictly equal to itself, which only affects its reflexivity as a key.
impl<T: StrictEq> Eq for Strict<T> {}

impl<T: core::hash::Hash> core::hash::Hash for Strict<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
