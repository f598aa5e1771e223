use super::*;
use approx::assert_abs_diff_eq;
use core::f64::consts::{E, PI};
use num_bigint::BigInt;

fn r(numer: i64, denom: i64) -> Real {
    Real::Rational(Ratio::new(BigInt::from(numer), BigInt::from(denom)))
}

fn i() -> Quaternion {
    Quaternion::i()
}
fn j() -> Quaternion {
    Quaternion::j()
}
fn k() -> Quaternion {
    Quaternion::k()
}

fn hash<T: core::hash::Hash>(x: &T) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

fn assert_close(q: &Quaternion, expected: [f64; 4]) {
    for (x, e) in q.to_hrect().iter().zip(expected) {
        assert_abs_diff_eq!(x.to_f64(), e, epsilon = 1e-12);
    }
}

#[test]
pub fn test_macros() {
    // this is only a syntax test
    let _: Complex<Real> = complex![1 + 2 i];
    let _: Complex<Real> = complex![1 - 2 i];
    let _: Complex<Real> = complex![(1 + 2) + (2 + 3) i];
    let _: Complex<Real> = complex![2 i];
    let _: Complex<Real> = complex![2];
    let _ = quaternion!(1);
    let _ = quaternion!(1 + i 2);
    let _ = quaternion!(1 + j 2 + k 3);
    let _ = quaternion!(1.5 + i (1 + 1) + k (r(1, 2)));
    assert_eq!(quaternion!(1 + i 2 + j 3 + k 4), Quaternion::hrect(1, 2, 3, 4));
    assert_eq!(crate::quaternion!(1, 2).unwrap(), Quaternion::hrect(1, 0, 2, 0));
}

#[test]
pub fn test_units() {
    let one: Quaternion = Quaternion::one();
    assert_eq!(&i() * &i(), -one.clone());
    assert_eq!(&j() * &j(), -one.clone());
    assert_eq!(&k() * &k(), -one.clone());
    assert_eq!(&(&i() * &j()) * &k(), -one);

    assert_eq!(&i() * &j(), k());
    assert_eq!(&j() * &k(), i());
    assert_eq!(&k() * &i(), j());
    assert_eq!(&j() * &i(), -k());
    assert_eq!(&k() * &j(), -i());
    assert_eq!(&i() * &k(), -j());
}

#[test]
pub fn test_error_kind() {
    assert_eq!(Error::ZeroDivision.kind(), ErrorKind::ZeroDivision);
    assert_eq!(Error::NotReal.kind(), ErrorKind::Type);
    assert_eq!(Error::ArgumentCount { given: 5 }.kind(), ErrorKind::Type);
    assert_eq!(Error::InvalidFormat { input: "x".into() }.kind(), ErrorKind::Format);
    assert_eq!(Error::ZeroDivision.to_string(), "divided by 0");
    assert_eq!(Error::NotVector3.to_string(), "not a 3-D vector");
    assert_eq!(
        Error::ArgumentCount { given: 0 }.to_string(),
        "wrong number of arguments (given 0, expected 1..4)"
    );
}

mod real {
    use super::*;

    #[test]
    fn test_promotion() {
        assert!((Real::from(1) + Real::from(2)).strict_eq(&Real::from(3)));
        assert!((Real::from(1) + r(1, 2)).strict_eq(&r(3, 2)));
        assert!((r(1, 2) + Real::from(0.5)).strict_eq(&Real::from(1.0)));
        assert!((Real::from(2) * Real::from(1.5)).strict_eq(&Real::from(3.0)));
        assert_eq!(Real::from(1), Real::from(1.0));
        assert!(!Real::from(1).strict_eq(&Real::from(1.0)));
        assert_eq!(r(4, 2), Real::from(2));
        assert!(r(4, 2).demote().strict_eq(&Real::from(2)));
    }

    #[test]
    fn test_quo() {
        assert_eq!(Real::from(1).quo(&Real::from(2)), Ok(r(1, 2)));
        assert_eq!(Real::from(1).quo(&Real::from(0)), Err(Error::ZeroDivision));
        assert_eq!(r(1, 2).quo(&r(0, 1)), Err(Error::ZeroDivision));
        assert_eq!(Real::from(1).quo(&Real::from(0.0)), Ok(Real::from(f64::INFINITY)));
        assert_eq!(Real::from(-1.0).quo(&Real::from(0)), Ok(Real::from(f64::NEG_INFINITY)));
        assert!(Real::from(0.0).quo(&Real::from(0)).unwrap().is_nan());
        assert!(Real::from(1).fdiv(&Real::from(4)).strict_eq(&Real::from(0.25)));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Real::from(0.75).to_rational(), Ok(Ratio::new(BigInt::from(3), BigInt::from(4))));
        assert!(Real::from(f64::NAN).to_rational().is_err());
        assert_eq!(r(-7, 2).to_integer(), Ok(BigInt::from(-3)));
        assert_eq!(Real::from(-2.9).to_integer(), Ok(BigInt::from(-2)));
        assert!(Real::from(f64::INFINITY).to_integer().is_err());
        assert_eq!(r(1, 3).to_f64(), 1.0 / 3.0);
        let huge = Real::from(BigInt::from(1) << 2000);
        assert_eq!(huge.to_f64(), f64::INFINITY);
        assert_eq!((-huge).to_f64(), f64::NEG_INFINITY);
        assert_eq!(Real::from(0.5).denominator(), Ok(BigInt::from(2)));
        assert_eq!(r(-3, 6).numerator(), Ok(BigInt::from(-1)));
    }

    #[test]
    fn test_cmp() {
        assert!(Real::from(1) < r(3, 2));
        assert!(r(3, 2) < Real::from(1.6));
        assert!(Real::from(-0.0) == Real::from(0));
        assert!(Real::from(f64::NAN).partial_cmp(&Real::from(0)).is_none());
        assert!(Real::from(-0.0).is_negative_zero());
        assert!(!Real::from(-0.0).is_negative());
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash(&Real::from(0.0)), hash(&Real::from(-0.0)));
        assert_eq!(hash(&r(2, 4)), hash(&r(1, 2)));
        assert!(hash(&Real::from(1)) != hash(&Real::from(1.0)));
    }
}

mod rational {
    use super::hash;
    use crate::*;
    type Rational64 = Ratio<i64>;

    pub const _0: Rational64 = Ratio::new_raw(0, 1);
    pub const _1: Rational64 = Ratio::new_raw(1, 1);
    pub const _2: Rational64 = Ratio::new_raw(2, 1);
    pub const _1_2: Rational64 = Ratio::new_raw(1, 2);
    pub const _3_2: Rational64 = Ratio::new_raw(3, 2);
    pub const _NEG1_2: Rational64 = Ratio::new_raw(-1, 2);
    pub const _1_3: Rational64 = Ratio::new_raw(1, 3);
    pub const _2_3: Rational64 = Ratio::new_raw(2, 3);

    #[test]
    fn test_new_reduce() {
        assert_eq!(Ratio::new(2, 2), One::one());
        assert_eq!(Ratio::new(0, -i32::MAX), Zero::zero());
        assert_eq!(Rational64::new(3, -6), _NEG1_2);
        let x = Rational64::new(3, -6);
        assert_eq!((x.numer, x.denom), (-1, 2));
        assert!(Rational64::new(4, 2).is_integral());
    }

    #[test]
    fn test_cmp() {
        assert!(_0 < _1_3);
        assert!(_1_3 < _1_2);
        assert!(_1_2 < _2_3);
        assert!(_NEG1_2 < _0);
        assert!(_3_2 > _1);
        assert_eq!(Ratio::new_raw(4, 2), _2);
        assert_eq!(Ratio::new_raw(-1, -2), _1_2);
    }

    #[test]
    fn test_hash() {
        assert!(hash(&_0) != hash(&_1));
        assert!(hash(&_0) != hash(&_3_2));

        // a == b -> hash(a) == hash(b)
        let a = Rational64::new_raw(4, 2);
        let b = Rational64::new_raw(6, 3);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        let a = Rational64::new_raw(123456789, 1000);
        let b = Rational64::new_raw(123456789 * 5, 5000);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    mod arith {
        use super::{_0, _1, _1_2, _1_3, _2, _2_3, _3_2, _NEG1_2};
        use super::{Ratio, Rational64};

        #[test]
        fn test_add() {
            fn test(a: Rational64, b: Rational64, c: Rational64) {
                assert_eq!(a + b, c);
                let mut x = a;
                x += b;
                assert_eq!(x, c);
            }
            test(_1, _1_2, _3_2);
            test(_1, _1, _2);
            test(_1_2, _3_2, _2);
            test(_1_2, _NEG1_2, _0);
            test(_1_3, _1_3, _2_3);
        }

        #[test]
        fn test_sub() {
            fn test(a: Rational64, b: Rational64, c: Rational64) {
                assert_eq!(a - b, c);
                let mut x = a;
                x -= b;
                assert_eq!(x, c);
            }
            test(_1, _1_2, _1_2);
            test(_3_2, _1_2, _1);
            test(_1, _NEG1_2, _3_2);
        }

        #[test]
        fn test_mul() {
            fn test(a: Rational64, b: Rational64, c: Rational64) {
                assert_eq!(a * b, c);
                let mut x = a;
                x *= b;
                assert_eq!(x, c);
            }
            test(_1, _1_2, _1_2);
            test(_1_2, _3_2, Ratio::new(3, 4));
            test(_1_2, _NEG1_2, Ratio::new(-1, 4));
        }

        #[test]
        fn test_div() {
            assert_eq!(_1 / _1_2, _2);
            assert_eq!(_3_2 / _1_2, Ratio::new(3, 1));
            assert_eq!(_1 / _NEG1_2, Ratio::new(-2, 1));
            assert_eq!(_2_3.recip(), _3_2);
        }
    }
}

mod complex {
    use super::*;

    #[test]
    fn test_quo() {
        let c = Complex::rect(1, 2).quo(&Complex::rect(3, 4)).unwrap();
        assert_eq!(c, Complex::new(r(11, 25), r(2, 25)));
        // exact results are canonicalized
        let c = Complex::rect(4, 2).quo(&Complex::rect(2, 1)).unwrap();
        assert!(c.strict_eq(&Complex::rect(2, 0)));
        assert!(Complex::rect(4, 2).quo_real(&Real::from(2)).unwrap().strict_eq(&Complex::rect(2, 1)));
        assert_eq!(Complex::rect(1, 1).quo(&Complex::zero()), Err(Error::ZeroDivision));
        assert_eq!(Complex::rect(1, 1).quo_real(&Real::from(0)), Err(Error::ZeroDivision));

        let c = Complex::rect(1.0, 0).quo(&Complex::rect(0.0, 0.0)).unwrap();
        assert!(c.re.is_infinite() || c.re.is_nan());
        let c = Complex::rect(1, 2).fdiv(&Complex::rect(3, 4));
        assert_abs_diff_eq!(c.re.to_f64(), 0.44, epsilon = 1e-15);
        assert_abs_diff_eq!(c.im.to_f64(), 0.08, epsilon = 1e-15);
    }

    #[test]
    fn test_abs() {
        assert!(Complex::rect(0, -3).abs().strict_eq(&Real::from(3)));
        assert!(Complex::rect(r(-1, 2), 0).abs().strict_eq(&r(1, 2)));
        assert!(Complex::rect(0.0, -3).abs().strict_eq(&Real::from(3.0)));
        assert!(Complex::rect(3, 4).abs().strict_eq(&Real::from(5.0)));
        assert!(Complex::rect(3, 4).abs2().strict_eq(&Real::from(25)));
    }

    #[test]
    fn test_to_real() {
        assert_eq!(Complex::rect(2, 0).to_real(), Ok(Real::from(2)));
        assert!(Complex::rect(2, 0.0).to_real().is_err());
        assert!(Complex::rect(2, 1).to_real().is_err());
    }

    #[test]
    fn test_fraction_parts() {
        let c = Complex::new(r(1, 2), r(-2, 3));
        assert_eq!(c.denominator(), Ok(BigInt::from(6)));
        assert!(c.numerator().unwrap().strict_eq(&Complex::rect(3, -4)));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub() {
        let p = Quaternion::hrect(1, 2, 3, 4);
        let q = Quaternion::hrect(5, 6, 7, 8);
        assert_eq!(&p + &q, Quaternion::hrect(6, 8, 10, 12));
        assert_eq!(&p - &q, Quaternion::hrect(-4, -4, -4, -4));
        assert_eq!(&p + &Real::from(1), Quaternion::hrect(2, 2, 3, 4));
        assert_eq!(&p - &Complex::rect(1, 2), Quaternion::hrect(0, 0, 3, 4));
        let mut x = p.clone();
        x += q.clone();
        x -= q;
        assert_eq!(x, p);
    }

    #[test]
    fn test_mul() {
        let p = Quaternion::hrect(1, 2, 3, 4);
        let q = Quaternion::hrect(5, 6, 7, 8);
        assert_eq!(&p * &q, Quaternion::hrect(-60, 12, 30, 24));
        assert_eq!(&q * &p, Quaternion::hrect(-60, 20, 14, 32));
        // (a c, b c*) for a complex factor on the right
        assert_eq!(&p * &Complex::<Real>::i(), Quaternion::hrect(-2, 1, 4, -3));
        assert_eq!(&p * &i(), Quaternion::hrect(-2, 1, 4, -3));
        assert_eq!(&p * &Real::from(2), Quaternion::hrect(2, 4, 6, 8));
        assert!((&p * &Real::from(0.5)).a.re.is_float());
    }

    #[test]
    fn test_conj_abs() {
        let q = Quaternion::hrect(1, 2, 3, 4);
        assert_eq!(q.conj(), Quaternion::hrect(1, -2, -3, -4));
        assert_eq!(&q * &q.conj(), Quaternion::hrect(30, 0, 0, 0));
        assert!(q.abs2().strict_eq(&Real::from(30)));
        assert_abs_diff_eq!(q.abs().to_f64(), 30f64.sqrt(), epsilon = 1e-14);

        assert!(Quaternion::hrect(0, 0, 0, -7).abs().strict_eq(&Real::from(7)));
        assert!(Quaternion::hrect(-3, 0, 0, 0).abs().strict_eq(&Real::from(3)));
        assert!(Quaternion::hrect(r(-1, 2), 0, 0, 0).abs().strict_eq(&r(1, 2)));
        assert!(Quaternion::hrect(3, 4, 0, 0).abs().strict_eq(&Real::from(5.0)));
        assert_abs_diff_eq!(Quaternion::hrect(1, 1, 1, 1).abs().to_f64(), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_reciprocal() {
        let q = Quaternion::hrect(1, 1, 1, 1);
        let inv = q.reciprocal().unwrap();
        assert_eq!(inv, Quaternion::hrect(r(1, 4), r(-1, 4), r(-1, 4), r(-1, 4)));
        assert_eq!(&q * &inv, Quaternion::one());
        assert_eq!(&inv * &q, Quaternion::one());
        assert_eq!(Quaternion::<Real>::zero().reciprocal(), Err(Error::ZeroDivision));
        assert!(Quaternion::hrect(0.0, 0, 0, 0).reciprocal().is_ok());
    }

    #[test]
    fn test_quo() {
        let p = Quaternion::hrect(1, 2, 3, 4);
        let q = Quaternion::hrect(5, 6, 7, 8);
        let x = p.quo(&Number::from(q.clone())).unwrap();
        assert_eq!(x, Quaternion::hrect(r(35, 87), r(4, 87), 0, r(8, 87)));
        assert_eq!(&x * &q, p);
        assert_eq!(p.quo(&Number::from(2)).unwrap(), Quaternion::hrect(r(1, 2), 1, r(3, 2), 2));
        // (a / c, b / c*)
        let x = p.quo(&Number::from(Complex::<Real>::i())).unwrap();
        assert_eq!(&x * &Complex::<Real>::i(), p);
        assert_eq!(x, Quaternion::hrect(2, -1, -4, 3));
    }

    #[test]
    fn test_quo_zero() {
        let p = Quaternion::hrect(1, 2, 3, 4);
        assert_eq!(p.quo(&Number::from(0)), Err(Error::ZeroDivision));
        assert_eq!(p.quo(&Number::from(Complex::<Real>::zero())), Err(Error::ZeroDivision));
        assert_eq!(p.quo(&Number::from(Quaternion::<Real>::zero())), Err(Error::ZeroDivision));
        assert_eq!(p.quo(&Number::from(r(0, 1))), Err(Error::ZeroDivision));

        // float zero divisors give infinities
        assert!(p.quo(&Number::from(0.0)).unwrap().is_infinite());
        assert!(p.fdiv(&Number::from(0)).is_infinite());
        // a float quaternion divided by an exact zero is not promoted
        let f = Quaternion::hrect(1.0, 2.0, 3.0, 4.0);
        let x = f.quo(&Number::from(0)).unwrap();
        assert_eq!(x.to_hrect().map(|x| x.to_f64()), [f64::INFINITY; 4]);
    }

    #[test]
    fn test_fdiv() {
        let p = Quaternion::hrect(1, 2, 3, 4);
        let x = p.fdiv(&Number::from(Quaternion::hrect(5, 6, 7, 8)));
        assert_close(&x, [35.0 / 87.0, 4.0 / 87.0, 0.0, 8.0 / 87.0]);
        assert!(x.a.re.is_float());
        assert_close(&p.fdiv(&Number::from(4)), [0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_finite() {
        assert!(Quaternion::hrect(1, 2, 3, 4).is_finite());
        assert!(!Quaternion::hrect(1, 2, 3, 4).is_infinite());
        assert!(Quaternion::hrect(0, 0, f64::NEG_INFINITY, 0).is_infinite());
        assert!(!Quaternion::hrect(0, 0, f64::NEG_INFINITY, 0).is_finite());
        let nan = Quaternion::hrect(f64::NAN, 0, 0, 0);
        assert!(!nan.is_finite());
        assert!(!nan.is_infinite());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Quaternion::hrect(1, 2, 0, 0).to_complex(), Ok(Complex::rect(1, 2)));
        assert!(Quaternion::hrect(1, 2, 0.0, 0).to_complex().is_err());
        assert_eq!(Quaternion::hrect(1.5, 0, 0, 0).to_f64(), Ok(1.5));
        let e = Quaternion::hrect(1, 0, 0, 1).to_f64().unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Type);
        assert_eq!(Quaternion::hrect(r(7, 2), 0, 0, 0).to_integer(), Ok(BigInt::from(3)));
        assert_eq!(
            Quaternion::hrect(0.5, 0, 0, 0).to_rational(),
            Ok(Ratio::new(BigInt::from(1), BigInt::from(2)))
        );
        assert!(Quaternion::hrect(1, 0, 0, 0).to_real().unwrap().strict_eq(&Real::from(1)));
    }

    #[test]
    fn test_numerator_denominator() {
        let q: Quaternion = "1/3-1/2i-j+3/4k".parse().unwrap();
        assert_eq!(q.denominator(), Ok(BigInt::from(12)));
        let n = q.numerator().unwrap();
        assert!(n.strict_eq(&Quaternion::hrect(4, -6, -12, 9)));
        assert_eq!(n.quo(&Number::from(12)).unwrap(), q);
        assert_eq!(Quaternion::hrect(0.5, 0, 0, 0).denominator(), Ok(BigInt::from(2)));
        assert!(Quaternion::hrect(f64::NAN, 0, 0, 0).denominator().is_err());
    }

    #[test]
    fn test_cmp() {
        use core::cmp::Ordering;
        let one = Quaternion::hrect(1, 0, 0, 0);
        let two = Quaternion::hrect(2.0, 0, 0, 0);
        assert_eq!(one.partial_cmp(&two), Some(Ordering::Less));
        assert_eq!(two.partial_cmp(&one), Some(Ordering::Greater));
        assert_eq!(Quaternion::hrect(1, 1, 0, 0).partial_cmp(&two), None);
        assert_eq!(Quaternion::hrect(1, 0, 0, 1).partial_cmp(&two), None);
        assert_eq!(Quaternion::hrect(1, 0, 0, 0), Real::from(1.0));
        assert_eq!(Quaternion::hrect(1, 2, 0.0, 0), Complex::rect(1.0, 2));
        assert!(Quaternion::hrect(1, 2, 0, 1) != Complex::rect(1, 2));
        assert!(Quaternion::hrect(1, 0, 0, 0) != Real::from(2));
    }

    #[test]
    fn test_strict() {
        use std::collections::HashSet;
        let a = Quaternion::hrect(1, 0, 0, 0);
        let b = Quaternion::hrect(1.0, 0, 0, 0);
        assert_eq!(a, b);
        assert!(!a.strict_eq(&b));
        let mut set = HashSet::new();
        set.insert(Strict(a.clone()));
        set.insert(Strict(b.clone()));
        set.insert(Strict(a));
        set.insert(Strict(Quaternion::hrect(r(2, 2), 0, 0, 0)));
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Strict(b)));
    }
}

mod number {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Number::from(1).kind(), Kind::Real);
        assert_eq!(Number::from(Complex::rect(1, 0)).kind(), Kind::Complex);
        assert_eq!(Number::from(j()).kind(), Kind::Quaternion);
        assert!(Kind::Real < Kind::Complex && Kind::Complex < Kind::Quaternion);
        assert!(Number::from(1).is_complex());
        assert!(!Number::from(j()).is_complex());
        assert_eq!(Number::from(r(1, 2)).kind_name(), "Rational");
        assert_eq!(Number::from(Complex::rect(1, 0)).real_kind(), Err(Error::NotReal));
        assert_eq!(Number::from(j()).complex_kind(), Err(Error::NotComplex));
    }

    #[test]
    fn test_coerce() {
        let (l, r) = Number::from(j()).coerce(&Number::from(1)).unwrap();
        assert_eq!(l.kind(), Kind::Quaternion);
        assert_eq!(l, Number::from(1));
        assert_eq!(r, Number::from(j()));
        let (l, _) = Number::from(Complex::rect(0, 1)).coerce(&Number::from(2.5)).unwrap();
        assert!(l.strict_eq(&Number::from(Complex::rect(2.5, 0))));
        assert_eq!(
            Number::from(1).coerce(&Number::from(j())),
            Err(Error::Coercion { from: "Quaternion", into: "Integer" })
        );
        let (l, r) = j().coerce(&Number::from(Complex::rect(1, 2)));
        assert_eq!((l, r), (Quaternion::hrect(1, 2, 0, 0), j()));
    }

    #[test]
    fn test_mixed_ops() {
        let two = Number::from(2);
        let q = Number::from(Quaternion::hrect(1, 2, 3, 4));
        assert_eq!(&two * &q, Number::from(Quaternion::hrect(2, 4, 6, 8)));
        assert_eq!(&q * &two, &two * &q);
        assert!((&two + &Number::from(0.5)).strict_eq(&Number::from(2.5)));
        let c = Number::from(Complex::rect(1, 1));
        // (1 + i) j = j + k
        assert_eq!(&c * &Number::from(j()), Number::from(Quaternion::hrect(0, 0, 1, 1)));
        assert_eq!(&Number::from(j()) * &c, Number::from(Quaternion::hrect(0, 0, 1, -1)));
        assert_eq!((&c + &two).kind(), Kind::Complex);
        assert_eq!(c.clone() - c, Number::zero());
        assert_eq!(-Number::from(j()), Number::from(-j()));
        assert_eq!(Number::from(1), Number::from(Quaternion::hrect(1.0, 0, 0, 0)));
        assert!(Number::from(1) < Number::from(1.5));
    }

    #[test]
    fn test_quo() {
        assert!(Number::from(1).quo(&Number::from(2)).unwrap().strict_eq(&Number::from(r(1, 2))));
        assert_eq!(Number::from(1).quo(&Number::from(0)), Err(Error::ZeroDivision));
        assert_eq!(
            Number::from(1).quo(&Number::from(j())).unwrap(),
            Number::from(-j())
        );
        assert_eq!(
            Number::from(Complex::rect(0, 2)).quo(&Number::from(2)).unwrap(),
            Number::from(Complex::rect(0, 1))
        );
        assert!(Number::from(1).fdiv(&Number::from(0)).to_f64().unwrap().is_infinite());
    }

    #[test]
    fn test_units() {
        assert_eq!(Number::from(2).i(), Ok(Number::from(Complex::rect(0, 2))));
        assert_eq!(Number::from(2).j(), Ok(Number::from(Quaternion::hrect(0, 0, 2, 0))));
        assert_eq!(Number::from(2).k(), Ok(Number::from(Quaternion::hrect(0, 0, 0, 2))));
        assert_eq!(
            Number::from(Complex::rect(1, 2)).j(),
            Ok(Number::from(Quaternion::hrect(0, 0, 1, 2)))
        );
        assert_eq!(Number::from(Complex::rect(1, 2)).i(), Err(Error::NotReal));
        assert_eq!(Number::from(Complex::rect(1, 2)).k(), Err(Error::NotReal));
        assert_eq!(Number::from(j()).j(), Err(Error::NotComplex));
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Strict(Number::from(1)));
        set.insert(Strict(Number::from(1.0)));
        set.insert(Strict(Number::from(Complex::rect(1, 0))));
        set.insert(Strict(Number::from(1)));
        assert_eq!(set.len(), 3);
        assert_eq!(hash(&Number::from(r(1, 2))), hash(&Number::from(r(2, 4))));
    }
}

mod polar {
    use super::*;

    fn axis(x: i32, y: i32, z: i32) -> [Number; 3] {
        [x.into(), y.into(), z.into()]
    }

    #[test]
    fn test_rect() {
        assert_eq!(Quaternion::rect(1, Complex::<Real>::i()), Ok(Quaternion::hrect(1, 0, 0, 1)));
        assert_eq!(
            Quaternion::rect(Complex::rect(1, 2), Complex::rect(3, 4)),
            Ok(Quaternion::hrect(1, 2, 3, 4))
        );
        assert_eq!(Quaternion::rect(j(), 1), Err(Error::NotComplex));
        assert_eq!(
            Quaternion::try_hrect(&[1.into(), 2.into()]),
            Ok(Quaternion::hrect(1, 2, 0, 0))
        );
        assert_eq!(Quaternion::try_hrect(&[]), Err(Error::ArgumentCount { given: 0 }));
        assert_eq!(
            Quaternion::try_hrect(&[1.into(), Complex::rect(0, 1).into()]),
            Err(Error::NotReal)
        );
        let q = Quaternion::hrect(1, 2, 3, 4);
        assert_eq!(q.to_rect(), (Complex::rect(1, 2), Complex::rect(3, 4)));
        assert_eq!(q.real(), Real::from(1));
        assert_eq!(q.imag(), Vector3::new(2, 3, 4));
    }

    #[test]
    fn test_to_polar() {
        let (r, theta, v) = Quaternion::hrect(1, 1, 1, 1).to_polar();
        assert_abs_diff_eq!(r.to_f64(), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(theta.to_f64(), PI / 3.0, epsilon = 1e-14);
        let s = 1.0 / 3f64.sqrt();
        for x in v.iter() {
            assert_abs_diff_eq!(x.to_f64(), s, epsilon = 1e-14);
        }
        assert_eq!(Quaternion::hrect(-2, 0, 0, 0).arg(), Real::from(PI));
        assert_eq!(Quaternion::hrect(2, 0, 0, 0).axis(), Vector3::unit_i());
    }

    #[test]
    fn test_round_trip() {
        for q in [
            Quaternion::hrect(1, 1, 1, 1),
            Quaternion::hrect(1, 2, 3, 4),
            Quaternion::hrect(-0.5, 0, 0, 2),
            Quaternion::hrect(0, -3, 0, 0),
        ] {
            let (r, theta, v) = q.to_polar();
            let p = Quaternion::from_polar(&r, &theta, &v);
            assert_close(&p, q.to_hrect().map(|x| x.to_f64()));
        }
    }

    #[test]
    fn test_signed_zero_axis() {
        let q = Quaternion::hrect(1, -0.0, 0, 0);
        assert_eq!(q.axis(), Vector3::new(-1, 0, 0));
        let (r, theta, v) = q.to_polar();
        let p = Quaternion::from_polar(&r, &theta, &v);
        assert_eq!(p, q);
        assert!(p.a.im.is_negative_zero());
        assert_eq!(Quaternion::hrect(1, 0.0, 0, 0).axis(), Vector3::new(1, 0, 0));
    }

    #[test]
    fn test_polar() {
        let q = Quaternion::polar(2, PI / 2.0, &axis(0, 1, 0)).unwrap();
        assert_close(&q, [0.0, 0.0, 2.0, 0.0]);
        // the angle is scaled by the length of the axis
        let q = Quaternion::from_polar(&Real::from(1), &Real::from(PI / 4.0), &Vector3::new(0, 0, 2));
        assert_close(&q, [0.0, 0.0, 0.0, 1.0]);
        // no axis, no rotation
        let q = Quaternion::from_polar(&Real::from(3), &Real::from(1.0), &Vector3::new(0, 0, 0));
        assert_close(&q, [3.0, 0.0, 0.0, 0.0]);

        assert_eq!(Quaternion::polar(1, 0, &[1.into(), 2.into()]), Err(Error::NotVector3));
        assert_eq!(Quaternion::polar(Complex::rect(1, 1), 0, &axis(1, 0, 0)), Err(Error::NotReal));
        assert_eq!(
            Quaternion::polar(1, 0, &[1.into(), j().into(), 0.into()]),
            Err(Error::NotReal)
        );
    }
}

mod power {
    use super::*;

    #[test]
    fn test_powu() {
        assert_eq!(3i64.powu(&BigInt::from(4)), 81);
        assert_eq!(Real::from(2).powu(&BigInt::from(100)), Real::from(BigInt::from(1) << 100));
        assert_eq!(i().powu(&BigInt::from(0)), Quaternion::one());
        assert_eq!(i().powu(&BigInt::from(3)), -i());
    }

    #[test]
    fn test_zero_index() {
        let one: Quaternion = Quaternion::one();
        assert!(Quaternion::hrect(1, 2, 3, 4).pow(&Number::zero()).unwrap().strict_eq(&one));
        assert!(Quaternion::<Real>::zero().pow(&Number::zero()).unwrap().strict_eq(&one));
        assert!(Quaternion::hrect(0.5, 0, 0, 0).pow(&Number::from(Complex::rect(0, 0))).unwrap().strict_eq(&one));
        // a float zero is not an exact zero
        let x = Quaternion::hrect(2, 0, 0, 0).pow(&Number::from(0.0)).unwrap();
        assert!(x.a.re.is_float());
        assert_eq!(x, one);
    }

    #[test]
    fn test_integer_index() {
        let q = Quaternion::hrect(1, 1, 1, 1);
        assert!(q.pow(&Number::from(6)).unwrap().strict_eq(&Quaternion::hrect(64, 0, 0, 0)));
        assert_eq!(q.pow(&Number::from(2)).unwrap(), Quaternion::hrect(-2, 2, 2, 2));
        assert_eq!(q.pow(&Number::from(-1)).unwrap(), q.reciprocal().unwrap());
        let x = q.powi(-2).unwrap();
        assert_eq!(&x * &q.powi(2).unwrap(), Quaternion::one());
        // integral indices of higher kinds are integer powers
        assert!(q.pow(&Number::from(r(12, 2))).unwrap().strict_eq(&Quaternion::hrect(64, 0, 0, 0)));
        assert!(q.pow(&Number::from(Quaternion::hrect(6, 0, 0, 0))).unwrap().strict_eq(&Quaternion::hrect(64, 0, 0, 0)));

        assert_eq!(Quaternion::<Real>::zero().pow(&Number::from(-1)), Err(Error::ZeroDivision));
        assert_eq!(Quaternion::<Real>::zero().pow(&Number::from(3)).unwrap(), Quaternion::zero());
    }

    #[test]
    fn test_real_index() {
        let x = Quaternion::hrect(-4, 0, 0, 0).pow(&Number::from(0.5)).unwrap();
        assert_close(&x, [0.0, 2.0, 0.0, 0.0]);
        let x = Quaternion::hrect(0, 0, 9, 0).pow(&Number::from(r(1, 2))).unwrap();
        let s = 4.5f64.sqrt();
        assert_close(&x, [s, 0.0, s, 0.0]);
        let q = Quaternion::hrect(1, 2, 3, 4);
        let x = q.pow(&Number::from(2.0)).unwrap();
        assert_close(&x, [-28.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_quaternion_index() {
        let x = j().pow(&Number::from(j())).unwrap();
        assert_close(&x, [(-PI / 2.0).exp(), 0.0, 0.0, 0.0]);
        let y = i().pow(&Number::from(i())).unwrap();
        assert_close(&y, [(-PI / 2.0).exp(), 0.0, 0.0, 0.0]);
        // exp(log(self) index), the logarithm is on the left
        assert_close(&i().pow(&Number::from(j())).unwrap(), [0.0, 0.0, 0.0, 1.0]);
        assert_close(&j().pow(&Number::from(i())).unwrap(), [0.0, 0.0, 0.0, -1.0]);
        assert_close(&j().pow(&Number::from(k())).unwrap(), [0.0, 1.0, 0.0, 0.0]);
        let x = Quaternion::hrect(E, 0, 0, 0).pow(&Number::from(Complex::rect(0, PI))).unwrap();
        assert_close(&x, [-1.0, 0.0, 0.0, 0.0]);
        let x = Quaternion::hrect(E, 0, 0, 0).pow(&Number::from(Quaternion::hrect(1, 0, PI / 2.0, 0))).unwrap();
        assert_close(&x, [0.0, 0.0, E, 0.0]);
    }
}

mod format {
    use super::*;
    use crate::fmt::float_to_string;

    #[test]
    fn test_float_to_string() {
        assert_eq!(float_to_string(1.0), "1.0");
        assert_eq!(float_to_string(-1.5), "-1.5");
        assert_eq!(float_to_string(0.0), "0.0");
        assert_eq!(float_to_string(-0.0), "-0.0");
        assert_eq!(float_to_string(123.456), "123.456");
        assert_eq!(float_to_string(0.1), "0.1");
        assert_eq!(float_to_string(0.0001), "0.0001");
        assert_eq!(float_to_string(0.00001), "1.0e-05");
        assert_eq!(float_to_string(2.5e-7), "2.5e-07");
        assert_eq!(float_to_string(1e15), "1000000000000000.0");
        assert_eq!(float_to_string(1e16), "1.0e+16");
        assert_eq!(float_to_string(1.25e20), "1.25e+20");
        assert_eq!(float_to_string(f64::INFINITY), "Infinity");
        assert_eq!(float_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(float_to_string(f64::NAN), "NaN");
    }

    #[test]
    fn test_real() {
        assert_eq!(Real::from(-3).to_string(), "-3");
        assert_eq!(r(-1, 5).to_string(), "-1/5");
        assert_eq!(format!("{:?}", r(-1, 5)), "(-1/5)");
        assert_eq!(format!("{:?}", r(2, 1)), "(2/1)");
        assert_eq!(Real::from(0.5).to_string(), "0.5");
        assert_eq!(format!("{:>5}", Real::from(7)), "    7");
    }

    #[test]
    fn test_complex() {
        assert_eq!(Complex::rect(1, -2).to_string(), "1-2i");
        assert_eq!(format!("{:?}", Complex::rect(1, -2)), "(1-2i)");
        assert_eq!(Complex::rect(0.0, -0.0).to_string(), "0.0-0.0i");
        assert_eq!(Complex::new(r(1, 2), r(3, 4)).to_string(), "1/2+3/4i");
        assert_eq!(format!("{:?}", Complex::new(r(1, 2), r(-3, 4))), "((1/2)-(3/4)*i)");
        assert_eq!(Complex::rect(1, f64::NAN).to_string(), "1+NaN*i");
        assert_eq!(Complex::new(1i64, -2).to_string(), "1-2i");
    }

    #[test]
    fn test_quaternion() {
        let q = Quaternion::hrect(r(-1, 5), r(2, 5), r(-3, 5), 0.8);
        assert_eq!(format!("{q:?}"), "((-1/5)+(2/5)*i-(3/5)*j+0.8k)");
        assert_eq!(q.to_string(), "-1/5+2/5i-3/5j+0.8k");
        assert_eq!(Quaternion::hrect(1, -2, 0, 4).to_string(), "1-2i+0j+4k");
        assert_eq!(
            Quaternion::hrect(1.0, -0.0, f64::INFINITY, f64::NAN).to_string(),
            "1.0-0.0i+Infinity*j+NaN*k"
        );
        assert_eq!(Quaternion::hrect(0, 0, 0, f64::NEG_INFINITY).to_string(), "0+0i+0j-Infinity*k");
        assert_eq!(Number::from(j()).to_string(), "0+0i+1j+0k");
        assert_eq!(format!("{:?}", Number::from(r(1, 2))), "(1/2)");
    }
}

mod parse {
    use super::*;

    fn strict(s: &str) -> Result<Number> {
        Number::parse(s, Mode::Strict)
    }
    fn lenient(s: &str) -> Number {
        Number::parse(s, Mode::Lenient).unwrap()
    }

    #[test]
    fn test_kinds() {
        assert!(strict("3").unwrap().strict_eq(&Number::from(3)));
        assert!(strict("3+4i").unwrap().strict_eq(&Number::from(Complex::rect(3, 4))));
        assert!(strict("1+2j").unwrap().strict_eq(&Number::from(Quaternion::hrect(1, 0, 2, 0))));
        assert!(strict("i").unwrap().strict_eq(&Number::from(Complex::rect(0, 1))));
        assert!(strict("2i").unwrap().strict_eq(&Number::from(Complex::rect(0, 2))));
        assert!(strict("-k").unwrap().strict_eq(&Number::from(Quaternion::hrect(0, 0, 0, -1))));
        assert!(strict("1+2I").unwrap().strict_eq(&Number::from(Complex::rect(1, 2))));
    }

    #[test]
    fn test_numerals() {
        let q = strict("1-2i-3/4j+0.56k").unwrap();
        assert!(q.strict_eq(&Number::from(Quaternion::hrect(1, -2, r(-3, 4), 0.56))));
        assert!(strict("1e3").unwrap().strict_eq(&Number::from(1000.0)));
        assert!(strict(".5").unwrap().strict_eq(&Number::from(0.5)));
        assert!(strict("1.5e-2/3").unwrap().strict_eq(&Number::from(r(1, 200))));
        assert!(strict("4/2").unwrap().strict_eq(&Number::from(r(2, 1))));
        assert!(strict("  1+2i  ").unwrap().strict_eq(&Number::from(Complex::rect(1, 2))));
    }

    #[test]
    fn test_underscores() {
        assert!(strict("1_000+2_0i").unwrap().strict_eq(&Number::from(Complex::rect(1000, 20))));
        assert_eq!(strict("1__000").unwrap_err().kind(), ErrorKind::Format);
        assert!(lenient("1__000").strict_eq(&Number::from(1000)));
        assert_eq!(strict("_1").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_failures() {
        for s in ["", "x", "1+", "1 2", "1i2", "2 +i", "1+2i+3", "1e"] {
            assert_eq!(strict(s).unwrap_err().kind(), ErrorKind::Format, "{s:?}");
        }
        assert_eq!(strict("1/0"), Err(Error::ZeroDivision));
        assert_eq!(lenient(""), Number::zero());
        assert_eq!(lenient("x"), Number::zero());
        assert_eq!(lenient("2 +i"), Number::from(2));
        assert_eq!(lenient("1/0"), Number::zero());
        assert_eq!(lenient("2+1/0i"), Number::from(2));

        // exponents of exact numerals
        assert!(strict("1e-3/1").unwrap().strict_eq(&Number::from(r(1, 1000))));
        for s in ["1.5e-9223372036854775808/1", "1e4294967296/1", "1e100001/1", "1e99999999999999999999/1"] {
            assert_eq!(strict(s).unwrap_err().kind(), ErrorKind::Format, "{s:?}");
            assert_eq!(lenient(s), Number::zero(), "{s:?}");
        }
        assert_eq!(lenient("2+1e4294967296/1i"), Number::from(2));

        // only ascii whitespace
        assert_eq!(strict("\u{a0}1").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(strict("1\u{3000}").unwrap_err().kind(), ErrorKind::Format);
        assert!(strict("\t1+2i\n").unwrap().strict_eq(&Number::from(Complex::rect(1, 2))));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1+2i".parse::<Quaternion>(), Ok(Quaternion::hrect(1, 2, 0, 0)));
        assert_eq!("x".parse::<Number>().unwrap_err().kind(), ErrorKind::Format);
        // a bare unit at the start of the input is a term
        assert_eq!(to_quaternion("junk"), Quaternion::hrect(0, 0, 1, 0));
        assert_eq!(to_quaternion("xyz"), Quaternion::zero());
        assert_eq!(to_quaternion(""), Quaternion::zero());
        assert_eq!(to_quaternion("3j garbage"), Quaternion::hrect(0, 0, 3, 0));
    }

    #[test]
    fn test_round_trip() {
        for q in [
            Quaternion::hrect(1, -2.5, r(3, 4), 0),
            Quaternion::hrect(r(-1, 5), r(2, 5), r(-3, 5), 0.8),
            Quaternion::hrect(-0.0, 1e20, -1e-7, 7),
        ] {
            let p: Quaternion = q.to_string().parse().unwrap();
            assert!(p.strict_eq(&q), "{q}");
        }
    }
}

mod factory {
    use super::*;

    #[test]
    fn test_one_two() {
        assert_eq!(Quaternion::from_args(&[1.5.into()]), Ok(Quaternion::hrect(1.5, 0, 0, 0)));
        assert_eq!(
            Quaternion::from_args(&[Complex::rect(1, 2).into(), Complex::rect(3, 4).into()]),
            Ok(Quaternion::hrect(1, 2, 3, 4))
        );
        assert_eq!(
            Quaternion::from_args(&["1+2i".into(), "3+4i".into()]),
            Ok(Quaternion::hrect(1, 2, 3, 4))
        );
        // a + b j for non complex arguments
        assert_eq!(Quaternion::from_args(&[j().into(), 1.into()]), Ok(Quaternion::hrect(0, 0, 2, 0)));
        assert_eq!(Quaternion::from_args(&[1.into(), [2, 3, 4].into()]), Ok(Quaternion::hrect(1, 2, 3, 4)));
        assert_eq!(
            Quaternion::from_args(&[1.into(), Vector3::new(2, 3, 4).into()]),
            Ok(Quaternion::hrect(1, 2, 3, 4))
        );
    }

    #[test]
    fn test_three_four() {
        assert_eq!(
            Quaternion::from_args(&[1.into(), 2.into(), 3.into()]),
            Ok(Quaternion::hrect(1, 2, 3, 0))
        );
        assert_eq!(
            Quaternion::from_args(&[1.into(), Complex::<Real>::i().into(), 2.into(), 3.into()]),
            Ok(Quaternion::hrect(0, 0, 2, 3))
        );
        let q = Quaternion::from_args(&["1".into(), "i".into(), "j".into(), "k".into()]).unwrap();
        assert_eq!(q, Quaternion::hrect(-2, 0, 0, 0));
    }

    #[test]
    fn test_errors() {
        assert_eq!(Quaternion::from_args(&[]), Err(Error::ArgumentCount { given: 0 }));
        let five: Vec<Arg> = (0..5).map(Arg::from).collect();
        assert_eq!(Quaternion::from_args(&five), Err(Error::ArgumentCount { given: 5 }));
        assert_eq!(
            Quaternion::from_args(&[1.into(), vec![Number::from(2), Number::from(3)].into()]),
            Err(Error::NotVector3)
        );
        assert_eq!(Quaternion::from_args(&["x".into()]).unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(Quaternion::from_args(&[[1, 2, 3].into()]).unwrap_err().kind(), ErrorKind::Type);
    }
}
