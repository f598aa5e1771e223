//! Exact conversions between `f64` and `Ratio<BigInt>`.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::Error;
use crate::num::*;
use crate::rational::Ratio;

// adapted from num_traits
// returns f = mantissa * 2^exponent
fn integer_decode_f64(f: f64) -> (i64, i16, bool) {
    let bits: u64 = f.to_bits();
    let mut exponent: i16 = ((bits >> 52) & 0x7ff) as i16;
    let finite = exponent != 0x7ff;
    let mut mantissa = bits & 0xfffffffffffff;
    if exponent == 0 {
        mantissa <<= 1;
    } else {
        mantissa |= 0x10000000000000;
    }
    // Exponent bias + mantissa shift
    exponent -= 1023 + 52;
    let mut mantissa = if bits >> 63 == 0 {
        mantissa as i64
    } else {
        -(mantissa as i64)
    };
    if mantissa == 0 {
        return (0, 0, finite);
    }
    // cancel the mantissa
    let c = mantissa.trailing_zeros();
    mantissa >>= c;
    exponent += c as i16;
    (mantissa, exponent, finite)
}

/// The exact value of a finite float. `NaN` and infinities can't be represented.
impl TryFrom<f64> for Ratio<BigInt> {
    type Error = Error;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let (mantissa, exponent, finite) = integer_decode_f64(value);
        if !finite {
            return Err(Error::Conversion {
                value: crate::fmt::float_to_string(value),
                target: "Rational",
            });
        }
        let numer = BigInt::from(mantissa);
        let one = BigInt::one();
        Ok(if exponent <= 0 {
            // already canceled, as the mantissa is odd (or zero)
            Ratio::new(numer, one << (-exponent) as u32)
        } else {
            Ratio::from(numer << exponent as u32)
        })
    }
}

/// Closest float to a rational, also for numerators and denominators beyond the float range.
pub fn ratio_to_f64(r: &Ratio<BigInt>) -> f64 {
    if let (Some(n), Some(d)) = (exact_f64(&r.numer), exact_f64(&r.denom)) {
        // both exact, so the division rounds correctly
        return n / d;
    }
    // keep 65 significant bits in the integer quotient, then scale back.
    let shift = r.denom.bits() as i64 - r.numer.bits() as i64 + 65;
    let q = if shift >= 0 {
        (&r.numer << shift as u64) / &r.denom
    } else {
        &r.numer / (&r.denom << (-shift) as u64)
    };
    let q = q.to_f64().unwrap_or(f64::NAN);
    scale_pow2(q, -shift)
}

/// `x * 2^exp` without overflowing in the intermediate power.
fn scale_pow2(mut x: f64, mut exp: i64) -> f64 {
    while exp > 1000 {
        x *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        x *= 2f64.powi(-1000);
        exp += 1000;
    }
    x * 2f64.powi(exp as i32)
}

fn exact_f64(x: &BigInt) -> Option<f64> {
    if x.bits() <= 53 { x.to_f64() } else { None }
}
