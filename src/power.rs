use crate::error::Result;
use crate::num::*;
use crate::number::Number;
use crate::quaternion::Quaternion;
use crate::real::Real;
use core::ops::Mul;
use num_bigint::BigInt;
use num_traits::Signed;

pub trait PowerU: Sized {
    /// Compute the power with a non negative integer exponent.
    ///
    /// Runtime complexity: O(log n) calls of `mul`.
    fn powu(&self, n: &BigInt) -> Self;
}

impl<T: Clone + One> PowerU for T
where
    for<'a> &'a Self: Mul<&'a Self, Output = Self>,
{
    fn powu(&self, n: &BigInt) -> Self {
        // consume the exponent from the lowest bit, the base is squared for each bit.
        let mut n = n.abs();
        let mut x = self.clone();
        let mut z = Self::one();
        loop {
            let bit = n.bit(0);
            n >>= 1;
            if bit {
                z = &z * &x;
            }
            if n.is_zero() {
                return z;
            }
            x = &x * &x;
        }
    }
}

impl Quaternion<Real> {
    /// Integer power. Negative exponents use the [reciprocal](Quaternion::reciprocal),
    /// which fails for an exact zero.
    pub fn powi(&self, n: impl Into<BigInt>) -> Result<Self> {
        let n = n.into();
        let x = if n.is_negative() {
            self.reciprocal()?
        } else {
            self.clone()
        };
        Ok(x.powu(&n))
    }

    /// `self^index` for an index of any kind.
    ///
    /// - an exact zero index gives the exact `1`, also for `0^0`.
    /// - an index with exact zero imaginary parts is treated as a real,
    ///   a rational with denominator 1 as an integer.
    /// - integer powers are exact, see [Quaternion::powi].
    /// - real powers scale the polar form: `r^x (cos xθ + sin xθ v)`.
    /// - complex and quaternion powers are `exp(log(self) index)`, with the logarithm on the left.
    ///
    /// ```
    /// use hnum::*;
    /// let q = Quaternion::hrect(1, 1, 1, 1);
    /// assert_eq!(q.pow(&Number::from(6)).unwrap(), Quaternion::hrect(64, 0, 0, 0));
    /// ```
    pub fn pow(&self, index: &Number) -> Result<Self> {
        if index.is_exact_zero() {
            log::trace!("pow: exact zero index");
            return Ok(Quaternion::one());
        }
        let index = match index.to_real() {
            Ok(r) => Number::Real(r.demote()),
            Err(_) => index.clone(),
        };
        match index {
            Number::Real(Real::Integer(n)) => {
                log::trace!("pow: integer index {n}");
                self.powi(n)
            }
            Number::Real(x) => {
                log::trace!("pow: real index {x}");
                let (r, theta, axis) = self.to_polar();
                Ok(Quaternion::from_polar(&r.powf(&x), &(&theta * &x), &axis))
            }
            index => {
                log::trace!("pow: {} index", index.kind_name());
                let (r, theta, axis) = self.to_polar();
                let [x, y, z] = axis.scale(&theta).0;
                let log = Quaternion::from_parts(r.ln(), x, y, z);
                let q = &log * &index;
                Ok(Quaternion::from_polar(&q.real().exp(), &Real::one(), &q.imag()))
            }
        }
    }
}
