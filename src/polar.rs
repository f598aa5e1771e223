//! Rectangular and polar views of a quaternion.
//!
//! The polar form is `r (cos θ + sin θ v)` with the magnitude `r`, the angle `θ ∈ [0, π]`
//! and the unit axis `v`, which replaces the imaginary unit of the complex polar form.

use core::ops::Index;

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::num::*;
use crate::number::Number;
use crate::quaternion::Quaternion;
use crate::real::Real;

/// An ordered triple of reals, used for the imaginary part and the axis of a quaternion.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector3(pub [Real; 3]);

impl Vector3 {
    pub fn new(x: impl Into<Real>, y: impl Into<Real>, z: impl Into<Real>) -> Self {
        Vector3([x.into(), y.into(), z.into()])
    }

    /// `(1, 0, 0)`, the axis of the complex numbers inside the quaternions.
    pub fn unit_i() -> Self {
        Vector3::new(1, 0, 0)
    }

    /// Build from numbers, which all have to be real.
    pub fn try_from_numbers(v: &[Number]) -> Result<Self> {
        let [x, y, z] = v else {
            return Err(Error::NotVector3);
        };
        Ok(Vector3([x.real_kind()?, y.real_kind()?, z.real_kind()?]))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Real> {
        self.0.iter()
    }

    /// Euclidean norm, always a float.
    pub fn norm(&self) -> Real {
        self.iter().map(|x| x * x).fold(Real::zero(), |acc, x| acc + x).sqrt()
    }

    /// `s v`
    pub fn scale(&self, s: &Real) -> Self {
        Vector3(self.0.clone().map(|x| &x * s))
    }

    /// `v / s` with float division.
    pub fn fdiv(&self, s: &Real) -> Self {
        Vector3(self.0.clone().map(|x| x.fdiv(s)))
    }
}

impl Index<usize> for Vector3 {
    type Output = Real;
    fn index(&self, index: usize) -> &Real {
        &self.0[index]
    }
}

impl Quaternion<Real> {
    /// `a + b j` from two numbers, which have to be complex or real.
    pub fn rect(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Ok(Quaternion::new(a.into().complex_kind()?, b.into().complex_kind()?))
    }

    /// `w + x i + y j + z k` from up to four real numbers. Missing ones are zero.
    pub fn try_hrect(parts: &[Number]) -> Result<Self> {
        if parts.is_empty() || parts.len() > 4 {
            return Err(Error::ArgumentCount { given: parts.len() });
        }
        let mut reals = [Real::zero(), Real::zero(), Real::zero(), Real::zero()];
        for (r, n) in reals.iter_mut().zip(parts) {
            *r = n.real_kind()?;
        }
        let [w, x, y, z] = reals;
        Ok(Quaternion::from_parts(w, x, y, z))
    }

    /// Polar constructor with validated arguments, see [Quaternion::from_polar].
    pub fn polar(r: impl Into<Number>, theta: impl Into<Number>, axis: &[Number]) -> Result<Self> {
        if axis.len() != 3 {
            return Err(Error::NotVector3);
        }
        let r = r.into().real_kind()?;
        let theta = theta.into().real_kind()?;
        let axis = Vector3::try_from_numbers(axis)?;
        Ok(Quaternion::from_polar(&r, &theta, &axis))
    }

    /// `r (cos θ' + sin θ' axis/|axis|)` with the scaled angle `θ' = θ |axis|`.
    ///
    /// A non unit axis scales the angle, so `from_polar(r, 1, θ v)` is `r exp(θ v)` for a unit `v`.
    /// With a zero axis the angle vanishes and the result is the real `r`.
    pub fn from_polar(r: &Real, theta: &Real, axis: &Vector3) -> Self {
        let norm = axis.norm();
        let theta = theta * &norm;
        let r_cos = r * &theta.cos();
        let mut r_sin = r * &theta.sin();
        if norm > Real::zero() {
            r_sin = r_sin.fdiv(&norm);
        }
        let [x, y, z] = axis.scale(&r_sin).0;
        Quaternion::from_parts(r_cos, x, y, z)
    }

    /// The pair `(a, b)` of complex numbers.
    pub fn to_rect(&self) -> (Complex<Real>, Complex<Real>) {
        (self.a.clone(), self.b.clone())
    }

    /// Scalar part `w`.
    pub fn real(&self) -> Real {
        self.a.re.clone()
    }

    /// Vector part `(x, y, z)`.
    pub fn imag(&self) -> Vector3 {
        Vector3([self.a.im.clone(), self.b.re.clone(), self.b.im.clone()])
    }

    /// Angle in `[0, π]` between the quaternion and the positive real axis.
    pub fn arg(&self) -> Real {
        self.imag().norm().atan2(&self.real())
    }

    /// Unit vector of the imaginary part.
    ///
    /// A zero imaginary part has no direction, then this is `(±1, 0, 0)`,
    /// negative only if the `i` component is a negative float zero.
    /// That way signed zeros survive a round trip through [Quaternion::to_polar].
    pub fn axis(&self) -> Vector3 {
        let v = self.imag();
        let norm = v.norm();
        if norm.is_zero() {
            let sign = if v[0].is_negative_zero() { -1 } else { 1 };
            Vector3::new(sign, 0, 0)
        } else {
            v.fdiv(&norm)
        }
    }

    /// `(abs, arg, axis)`
    pub fn to_polar(&self) -> (Real, Real, Vector3) {
        (self.abs(), self.arg(), self.axis())
    }
}
