//! Arbitrary-precision constant values.
//!
//! Untyped literals carry an exact value until the checker binds them to a
//! concrete type. Integers use `i64` when possible and `BigInt` otherwise;
//! floats use an exact `BigRational` while the components stay reasonably
//! sized, falling back to `f64`. Complex values are a pair of exact reals.
//!
//! Promotions are one-directional (Int -> Float -> Complex); narrowing to a
//! fixed-width kind reports explicit failure instead of wrapping.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::types::BasicKind;

/// Rationals whose numerator or denominator exceeds this bit length are
/// demoted to `f64` to keep fractions from growing without bound.
const MAX_EXP: u64 = 4 << 10;

/// The kind of a constant value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Unknown,
    Bool,
    String,
    Int,
    Float,
    Complex,
}

/// A complex constant: a pair of exact real parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Complex {
    /// The real part (an Int or Float kinded value).
    pub re: Value,
    /// The imaginary part (an Int or Float kinded value).
    pub im: Value,
}

/// An exact constant value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Unknown value (the result of an earlier error).
    #[default]
    Unknown,
    /// Boolean constant.
    Bool(bool),
    /// String constant.
    Str(String),
    /// Integer constant that fits in an `i64`.
    Int64(i64),
    /// Integer constant that does not fit in an `i64`.
    IntBig(BigInt),
    /// Exact rational constant.
    Rat(BigRational),
    /// Approximate float constant (components too large for a rational).
    Float(f64),
    /// Complex constant.
    Complex(Box<Complex>),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int64(x)
    }
}

impl From<u64> for Value {
    fn from(x: u64) -> Self {
        if let Ok(i) = i64::try_from(x) {
            Value::Int64(i)
        } else {
            Value::IntBig(BigInt::from(x))
        }
    }
}

impl From<BigInt> for Value {
    fn from(x: BigInt) -> Self {
        match x.to_i64() {
            Some(i) => Value::Int64(i),
            None => Value::IntBig(x),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    /// An infinite or NaN input yields [`Value::Unknown`]; -0.0 normalizes
    /// to 0.0. Finite values are stored exactly: integral ones as
    /// integers, the rest as rationals.
    fn from(x: f64) -> Self {
        if x.is_infinite() || x.is_nan() {
            return Value::Unknown;
        }
        let x = if x == 0.0 { 0.0 } else { x };
        match BigRational::from_float(x) {
            Some(r) => make_rat(r),
            None => Value::Unknown,
        }
    }
}

/// Normalize a rational: keep it exact while its components are small,
/// demote to `f64` otherwise.
fn make_rat(r: BigRational) -> Value {
    if r.is_integer() {
        return Value::from(r.numer().clone());
    }
    if r.numer().bits() < MAX_EXP && r.denom().bits() < MAX_EXP {
        Value::Rat(r)
    } else {
        Value::Float(r.to_f64().unwrap_or(f64::INFINITY))
    }
}

impl Value {
    /// Create a complex constant from two real parts.
    pub fn complex(re: Value, im: Value) -> Self {
        Value::Complex(Box::new(Complex { re, im }))
    }

    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Unknown => Kind::Unknown,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::String,
            Value::Int64(_) | Value::IntBig(_) => Kind::Int,
            Value::Rat(_) | Value::Float(_) => Kind::Float,
            Value::Complex(_) => Kind::Complex,
        }
    }

    /// Whether this is the unknown value.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Returns -1, 0, or 1 for negative, zero, or positive values. A
    /// complex value has sign 0 only if both parts are zero. Unknown and
    /// non-numeric values report 1 so that a missing value never looks
    /// like a zero divisor.
    pub fn sign(&self) -> i32 {
        match self {
            Value::Int64(i) => {
                if *i < 0 {
                    -1
                } else if *i > 0 {
                    1
                } else {
                    0
                }
            }
            Value::IntBig(i) => match i.sign() {
                num_bigint::Sign::Minus => -1,
                num_bigint::Sign::NoSign => 0,
                num_bigint::Sign::Plus => 1,
            },
            Value::Rat(r) => {
                if r.is_negative() {
                    -1
                } else if r.is_zero() {
                    0
                } else {
                    1
                }
            }
            Value::Float(f) => {
                if *f < 0.0 {
                    -1
                } else if *f == 0.0 {
                    0
                } else {
                    1
                }
            }
            Value::Complex(c) => {
                if c.re.sign() == 0 && c.im.sign() == 0 {
                    0
                } else {
                    1
                }
            }
            Value::Unknown | Value::Bool(_) | Value::Str(_) => 1,
        }
    }

    /// The number of bits needed for the absolute value of an integer
    /// constant. Zero for non-integer values.
    pub fn bit_len(&self) -> u64 {
        match self {
            Value::Int64(i) => {
                let u = i.unsigned_abs();
                64 - u64::from(u.leading_zeros())
            }
            Value::IntBig(i) => i.bits(),
            _ => 0,
        }
    }

    /// The value as a `BigInt`, if this is an integer constant.
    pub fn as_big(&self) -> Option<BigInt> {
        match self {
            Value::Int64(i) => Some(BigInt::from(*i)),
            Value::IntBig(i) => Some(i.clone()),
            _ => None,
        }
    }

    /// The nearest `f64`. Values out of range round to infinity, which is
    /// what the representability rules look for.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Int64(i) => *i as f64,
            Value::IntBig(i) => i.to_f64().unwrap_or_else(|| {
                if i.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }),
            Value::Rat(r) => r.to_f64().unwrap_or_else(|| {
                if r.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }),
            Value::Float(f) => *f,
            _ => 0.0,
        }
    }

    /// Promote to an integer constant, if the value is exactly integral.
    /// Returns [`Value::Unknown`] otherwise.
    pub fn to_int(&self) -> Value {
        match self {
            Value::Int64(_) | Value::IntBig(_) => self.clone(),
            Value::Rat(r) => {
                if r.is_integer() {
                    Value::from(r.numer().clone())
                } else {
                    Value::Unknown
                }
            }
            Value::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    if let Some(r) = BigRational::from_float(*f) {
                        if r.is_integer() {
                            return Value::from(r.numer().clone());
                        }
                    }
                }
                Value::Unknown
            }
            Value::Complex(c) => {
                if c.im.sign() == 0 {
                    c.re.to_int()
                } else {
                    Value::Unknown
                }
            }
            _ => Value::Unknown,
        }
    }

    /// Promote to a float constant. Integers convert losslessly; a complex
    /// value converts only when its imaginary part is zero.
    pub fn to_float(&self) -> Value {
        match self {
            Value::Int64(i) => Value::Rat(BigRational::from_integer(BigInt::from(*i))),
            Value::IntBig(i) => {
                if i.bits() < MAX_EXP {
                    Value::Rat(BigRational::from_integer(i.clone()))
                } else {
                    Value::Float(self.to_f64())
                }
            }
            Value::Rat(_) | Value::Float(_) => self.clone(),
            Value::Complex(c) => {
                if c.im.sign() == 0 {
                    c.re.to_float()
                } else {
                    Value::Unknown
                }
            }
            _ => Value::Unknown,
        }
    }

    /// Promote to a complex constant. A real value gains a zero imaginary
    /// part.
    pub fn to_complex(&self) -> Value {
        match self {
            Value::Complex(_) => self.clone(),
            Value::Int64(_) | Value::IntBig(_) | Value::Rat(_) | Value::Float(_) => {
                Value::complex(self.to_float(), Value::Rat(BigRational::zero()))
            }
            _ => Value::Unknown,
        }
    }

    /// Whether an integer constant fits an N-bit signed target, i.e. lies
    /// in [-2^(N-1), 2^(N-1)-1]. False for non-integer values.
    pub fn fits_signed(&self, bits: u32) -> bool {
        let Some(v) = self.as_big() else {
            return false;
        };
        let bound = BigInt::one() << (bits - 1);
        -&bound <= v && v < bound
    }

    /// Whether an integer constant fits an N-bit unsigned target, i.e.
    /// lies in [0, 2^N-1]. False for non-integer values.
    pub fn fits_unsigned(&self, bits: u32) -> bool {
        let Some(v) = self.as_big() else {
            return false;
        };
        !v.is_negative() && v.bits() <= u64::from(bits)
    }

    /// Narrow this constant to the given concrete kind, returning `None`
    /// when the value cannot carry that kind. Float targets round through
    /// the target precision; integer targets keep the exact value (the
    /// caller is expected to have established representability first).
    pub fn narrow_to(&self, kind: BasicKind) -> Option<Value> {
        match kind {
            BasicKind::Bool => match self {
                Value::Bool(b) => Some(Value::Bool(*b)),
                _ => None,
            },
            BasicKind::String => match self {
                Value::Str(s) => Some(Value::Str(s.clone())),
                _ => None,
            },
            k if k.is_integer() => {
                let x = self.to_int();
                let v = x.as_big()?;
                Some(Value::from(v))
            }
            BasicKind::Float32 => {
                let x = self.to_float();
                if x.kind() != Kind::Float {
                    return None;
                }
                let f = x.to_f64() as f32;
                if f.is_infinite() {
                    return None;
                }
                Some(Value::from(f64::from(f)))
            }
            BasicKind::Float64 => {
                let x = self.to_float();
                if x.kind() != Kind::Float {
                    return None;
                }
                let f = x.to_f64();
                if f.is_infinite() {
                    return None;
                }
                Some(Value::from(f))
            }
            BasicKind::Complex64 | BasicKind::Complex128 => {
                let x = self.to_complex();
                let Value::Complex(c) = x else {
                    return None;
                };
                let part_kind = if kind == BasicKind::Complex64 {
                    BasicKind::Float32
                } else {
                    BasicKind::Float64
                };
                let re = c.re.narrow_to(part_kind)?;
                let im = c.im.narrow_to(part_kind)?;
                Some(Value::complex(re, im))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown => write!(f, "unknown"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Int64(i) => write!(f, "{i}"),
            Value::IntBig(i) => write!(f, "{i}"),
            Value::Rat(r) => {
                if r.is_integer() {
                    write!(f, "{}", r.numer())
                } else {
                    write!(f, "{r}")
                }
            }
            Value::Float(v) => write!(f, "{v}"),
            Value::Complex(c) => write!(f, "({} + {}i)", c.re, c.im),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from("hi").kind(), Kind::String);
        assert_eq!(Value::from(42i64).kind(), Kind::Int);
        assert_eq!(Value::from(2.5).kind(), Kind::Float);
        assert_eq!(
            Value::complex(Value::from(1i64), Value::from(2i64)).kind(),
            Kind::Complex
        );
        assert_eq!(Value::Unknown.kind(), Kind::Unknown);
    }

    #[test]
    fn big_u64_does_not_wrap() {
        let v = Value::from(u64::MAX);
        assert_eq!(v.kind(), Kind::Int);
        assert_eq!(v.sign(), 1);
        assert_eq!(v.bit_len(), 64);
        assert!(matches!(v, Value::IntBig(_)));
    }

    #[test]
    fn float_is_stored_exactly() {
        let v = Value::from(3.5);
        match &v {
            Value::Rat(r) => {
                assert_eq!(r.numer(), &BigInt::from(7));
                assert_eq!(r.denom(), &BigInt::from(2));
            }
            other => panic!("expected exact rational, got {other:?}"),
        }
        assert_eq!(v.to_string(), "7/2");
    }

    #[test]
    fn non_finite_floats_are_unknown() {
        assert!(Value::from(f64::INFINITY).is_unknown());
        assert!(Value::from(f64::NAN).is_unknown());
    }

    #[test]
    fn to_int_requires_integral_value() {
        assert_eq!(Value::from(2.0).to_int(), Value::Int64(2));
        assert!(Value::from(2.5).to_int().is_unknown());
        assert_eq!(Value::from(7i64).to_int(), Value::Int64(7));
        assert!(Value::from("x").to_int().is_unknown());
    }

    #[test]
    fn promotion_is_one_directional() {
        let i = Value::from(3i64);
        let as_float = i.to_float();
        assert_eq!(as_float.kind(), Kind::Float);
        let as_complex = as_float.to_complex();
        assert_eq!(as_complex.kind(), Kind::Complex);
        // A complex with nonzero imaginary part does not demote.
        let c = Value::complex(Value::from(1i64), Value::from(1i64));
        assert!(c.to_float().is_unknown());
        assert!(c.to_int().is_unknown());
    }

    #[test]
    fn signed_range_boundaries() {
        assert!(Value::from(127i64).fits_signed(8));
        assert!(!Value::from(128i64).fits_signed(8));
        assert!(Value::from(-128i64).fits_signed(8));
        assert!(!Value::from(-129i64).fits_signed(8));
        assert!(Value::from(i64::MAX).fits_signed(64));
        assert!(Value::from(i64::MIN).fits_signed(64));
    }

    #[test]
    fn unsigned_range_boundaries() {
        assert!(Value::from(255i64).fits_unsigned(8));
        assert!(!Value::from(256i64).fits_unsigned(8));
        assert!(Value::from(0i64).fits_unsigned(8));
        assert!(!Value::from(-1i64).fits_unsigned(8));
        assert!(Value::from(u64::MAX).fits_unsigned(64));
    }

    #[test]
    fn sign_of_values() {
        assert_eq!(Value::from(-3i64).sign(), -1);
        assert_eq!(Value::from(0i64).sign(), 0);
        assert_eq!(Value::from(0.0).sign(), 0);
        assert_eq!(Value::from(1.5).sign(), 1);
        let zero_c = Value::complex(Value::from(0i64), Value::from(0i64));
        assert_eq!(zero_c.sign(), 0);
        let c = Value::complex(Value::from(0i64), Value::from(2i64));
        assert_eq!(c.sign(), 1);
    }

    #[test]
    fn narrow_rounds_float32_through_target_precision() {
        // 1/3 is not exactly representable; narrowing must store the
        // f32-rounded value, not the exact rational.
        let third = Value::Rat(BigRational::new(BigInt::from(1), BigInt::from(3)));
        let narrowed = third.narrow_to(BasicKind::Float32).unwrap();
        let expected = f64::from(1.0f32 / 3.0f32);
        assert_eq!(narrowed.to_f64(), expected);
    }

    #[test]
    fn narrow_rejects_kind_mismatch() {
        assert!(Value::from(1i64).narrow_to(BasicKind::Bool).is_none());
        assert!(Value::from(true).narrow_to(BasicKind::String).is_none());
        assert!(Value::from(2.5).narrow_to(BasicKind::Int).is_none());
    }

    #[test]
    fn narrow_complex_parts_independently() {
        let c = Value::complex(Value::from(1.5), Value::from(2i64));
        let narrowed = c.narrow_to(BasicKind::Complex128).unwrap();
        let Value::Complex(parts) = narrowed else {
            panic!("expected complex");
        };
        assert_eq!(parts.re.to_f64(), 1.5);
        assert_eq!(parts.im.to_f64(), 2.0);
    }

    #[test]
    fn exact_display() {
        assert_eq!(Value::from(200i64).to_string(), "200");
        assert_eq!(Value::from("a\"b").to_string(), "\"a\\\"b\"");
        assert_eq!(
            Value::complex(Value::from(3i64), Value::from(4i64)).to_string(),
            "(3 + 4i)"
        );
    }
}
