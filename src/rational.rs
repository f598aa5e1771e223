//! Rational numbers `p/q` over any integer type with [Cancel].
//!
//! A [Ratio] built through [Ratio::new] is always in lowest terms with a positive denominator.
//! Zero denominators are not represented, the callers (see [crate::Real]) reject them before dividing.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::*,
};
use take_mut::take;

use crate::num::*;

/// A fraction, or rational number `p/q`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Ratio<T> {
    pub numer: T,
    pub denom: T,
}

impl<T> Ratio<T> {
    /// Create a fraction without canceling or normalizing the sign.
    pub const fn new_raw(numer: T, denom: T) -> Self {
        Ratio { numer, denom }
    }
}

impl<T: Cancel> Ratio<T> {
    /// Create a reduced fraction with a positive denominator.
    pub fn new(numer: T, denom: T) -> Self {
        let (mut numer, mut denom) = numer.cancel(denom);
        if !denom.is_valid_euclid() {
            numer = T::zero() - numer;
            denom = T::zero() - denom;
        }
        Ratio { numer, denom }
    }

    /// `true` if the denominator is one, i.e. the value is an integer.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.denom.is_one()
    }

    /// Multiplicative inverse. The numerator must not be zero.
    pub fn recip(self) -> Self {
        Self::new(self.denom, self.numer)
    }
}

impl<T: Cancel> Ratio<T>
where
    for<'a> &'a T: Div<&'a T, Output = T>,
{
    /// rounds to the next integer towards zero.
    #[inline]
    pub fn trunc(&self) -> T {
        &self.numer / &self.denom
    }
}

impl<T: Zero + One> Default for Ratio<T> {
    fn default() -> Self {
        Self {
            numer: Zero::zero(),
            denom: One::one(),
        }
    }
}

impl<T: Cancel> Zero for Ratio<T> {
    fn zero() -> Self {
        Self {
            numer: T::zero(),
            denom: T::one(),
        }
    }
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: Cancel> One for Ratio<T> {
    fn one() -> Self {
        Self {
            numer: T::one(),
            denom: T::one(),
        }
    }
    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

impl<T: One> From<T> for Ratio<T> {
    fn from(value: T) -> Self {
        Ratio {
            numer: value,
            denom: T::one(),
        }
    }
}

impl<T: Clone> Conjugate for Ratio<T> {
    fn conj(&self) -> Self {
        self.clone()
    }
}

impl<T: Cancel> PartialEq for Ratio<T> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}
impl<T: Cancel + Eq> Eq for Ratio<T> {}

impl<T: Cancel> Ratio<T> {
    // flips the signs, such that the denominator is a valid euclid remainder.
    fn positive_denom(self) -> Self {
        if self.denom.is_valid_euclid() {
            self
        } else {
            Ratio::new_raw(T::zero() - self.numer, T::zero() - self.denom)
        }
    }
}

impl<T: Cancel> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut s = self.clone().positive_denom();
        let mut o = other.clone().positive_denom();
        // Compare by comparing the continued fraction expansion.
        loop {
            if s.denom == o.denom {
                // With equal denominators, the numerators can be compared
                return Some(compare_integers(&s.numer, &o.numer));
            }
            let (a_int, a_rem) = s.numer.div_rem_euclid(&s.denom);
            let (b_int, b_rem) = o.numer.div_rem_euclid(&o.denom);
            if a_int != b_int {
                return Some(compare_integers(&a_int, &b_int));
            }
            match (a_rem.is_zero(), b_rem.is_zero()) {
                (true, true) => return Some(Ordering::Equal),
                (true, false) => return Some(Ordering::Less),
                (false, true) => return Some(Ordering::Greater),
                (false, false) => {
                    // Compare the reciprocals of the remaining fractions in reverse.
                    // The denominators shrink, so this terminates.
                    (s, o) = (
                        Ratio::new_raw(o.denom, b_rem),
                        Ratio::new_raw(s.denom, a_rem),
                    );
                }
            }
        }
    }
}

// total order on the integers, using only the euclidean remainder.
fn compare_integers<T: Cancel>(a: &T, b: &T) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let diff = a.clone() - b.clone();
    if diff.is_valid_euclid() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

// NB: We can't just `#[derive(Hash)]`, because it needs to agree
// with `Eq` even for non-reduced ratios.
impl<T: Cancel + Hash> Hash for Ratio<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut r = self.clone().positive_denom();
        loop {
            if !r.denom.is_zero() {
                let (int, rem) = r.numer.div_rem_euclid(&r.denom);
                (r.denom, r.numer) = (rem, r.denom);
                int.hash(state);
            } else {
                return r.numer.is_zero().hash(state);
            }
        }
    }
}

impl<T: Cancel> Neg for Ratio<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Self {
            numer: T::zero() - self.numer,
            denom: self.denom,
        }
    }
}
impl<'a, T: Cancel> Neg for &'a Ratio<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident) => {
        impl<'a, T: Cancel> $Add for &'a Ratio<T>
        where
            for<'b> &'b T: AddMulSubDiv<Output = T>,
        {
            type Output = Ratio<T>;
            fn $add(self, rhs: Self) -> Self::Output {
                // avoid large intermediates by only scaling with the cofactors of the gcd.
                let g = gcd(self.denom.clone(), rhs.denom.clone());
                let sd = &self.denom / &g;
                let rd = &rhs.denom / &g;
                Ratio::new(
                    (&(&self.numer * &rd)).$add(&(&rhs.numer * &sd)),
                    &self.denom * &rd,
                )
            }
        }
        impl<T: Cancel> $Add for Ratio<T>
        where
            for<'b> &'b T: AddMulSubDiv<Output = T>,
        {
            type Output = Ratio<T>;
            fn $add(self, rhs: Self) -> Self::Output {
                (&self).$add(&rhs)
            }
        }
    };
}
impl_add!(Add, add);
impl_add!(Sub, sub);

impl<'a, T: Cancel> Mul for &'a Ratio<T>
where
    for<'b> &'b T: AddMulSubDiv<Output = T>,
{
    type Output = Ratio<T>;
    fn mul(self, rhs: Self) -> Self::Output {
        // avoid overflows by computing the gcd early (in each operation)
        let (sd, rn) = self.denom.clone().cancel(rhs.numer.clone());
        let (sn, rd) = self.numer.clone().cancel(rhs.denom.clone());
        Ratio::new(&sn * &rn, &sd * &rd)
    }
}
impl<T: Cancel> Mul for Ratio<T>
where
    for<'b> &'b T: AddMulSubDiv<Output = T>,
{
    type Output = Ratio<T>;
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// Division by a zero fraction produces a zero denominator.
/// Use [crate::Real::quo] for checked division.
impl<'a, T: Cancel> Div for &'a Ratio<T>
where
    for<'b> &'b T: AddMulSubDiv<Output = T>,
{
    type Output = Ratio<T>;
    fn div(self, rhs: Self) -> Self::Output {
        self * &rhs.clone().recip()
    }
}
impl<T: Cancel> Div for Ratio<T>
where
    for<'b> &'b T: AddMulSubDiv<Output = T>,
{
    type Output = Ratio<T>;
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, $add_assign:ident, $add:ident),+) => {
        $(impl<T: Cancel> $AddAssign for Ratio<T>
        where
            for<'b> &'b T: AddMulSubDiv<Output = T>,
        {
            fn $add_assign(&mut self, rhs: Ratio<T>) {
                take(self, |x| (&x).$add(&rhs));
            }
        })+
    };
}
forward_assign_impl!(
    AddAssign, add_assign, add, SubAssign, sub_assign, sub, MulAssign, mul_assign, mul
);

impl<T: fmt::Display + Cancel> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            return self.numer.fmt(f);
        }
        f.pad(&format!("{}/{}", self.numer, self.denom))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Ratio<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.numer, &self.denom).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Cancel> serde::Deserialize<'de> for Ratio<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (numer, denom): (T, T) = serde::Deserialize::deserialize(deserializer)?;
        if denom.is_zero() {
            return Err(serde::de::Error::custom("zero denominator"));
        }
        Ok(Self::new(numer, denom))
    }
}
