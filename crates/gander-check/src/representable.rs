//! Representability: whether a constant fits a concrete kind losslessly.

use gander_core::{BasicKind, CheckError, Kind, Value};

use crate::arena::NodeId;
use crate::{Checker, Result};

/// Whether the constant `v` can be represented in `kind` without loss.
///
/// Integer targets require an exactly integral value within the kind's
/// signed or unsigned range. Float targets require that rounding to the
/// target precision stays finite; complex targets apply the float rule to
/// each part independently. String and boolean targets require an exact
/// kind match.
pub fn representable_const(v: &Value, kind: BasicKind) -> bool {
    if kind.is_integer() {
        let x = v.to_int();
        if x.kind() != Kind::Int {
            return false;
        }
        let Some(bits) = kind.bit_size() else {
            return false;
        };
        if kind.is_unsigned() {
            x.fits_unsigned(bits)
        } else {
            x.fits_signed(bits)
        }
    } else if kind.is_float() {
        let x = v.to_float();
        if x.kind() != Kind::Float {
            return false;
        }
        float_fits(x.to_f64(), kind)
    } else if kind.is_complex() {
        let x = v.to_complex();
        let Value::Complex(parts) = x else {
            return false;
        };
        let part_kind = if kind == BasicKind::Complex64 {
            BasicKind::Float32
        } else {
            BasicKind::Float64
        };
        float_fits(parts.re.to_f64(), part_kind) && float_fits(parts.im.to_f64(), part_kind)
    } else if kind == BasicKind::String {
        v.kind() == Kind::String
    } else {
        v.kind() == Kind::Bool
    }
}

fn float_fits(f: f64, kind: BasicKind) -> bool {
    match kind {
        BasicKind::Float32 => !(f as f32).is_infinite(),
        _ => !f.is_infinite(),
    }
}

/// Check that a node's constant payload is representable in `kind`, and
/// classify the failure: narrowing a non-integral numeric value into an
/// integer target is a truncation, any other numeric mismatch is an
/// overflow, everything else a plain conversion failure.
///
/// A node without a constant payload passes: non-constant expressions can
/// legitimately carry an untyped type (an untyped bool produced by a
/// runtime comparison) and are converted without a payload to narrow.
pub(crate) fn check_representable(c: &mut Checker, n: NodeId, kind: BasicKind) -> Result<()> {
    let node = &c.arena[n];
    let Some(v) = node.cval.as_ref() else {
        return Ok(());
    };
    if representable_const(v, kind) {
        return Ok(());
    }

    let span = node.span;
    let value = v.to_string();
    let target = kind.name().to_string();
    if let Some(ty) = &node.ty {
        if ty.is_numeric() && kind.is_numeric() {
            if !ty.is_integer() && kind.is_integer() {
                return Err(CheckError::Truncated {
                    value,
                    kind: target,
                    span,
                });
            }
            return Err(CheckError::Overflows {
                value,
                kind: target,
                span,
            });
        }
    }
    Err(CheckError::CannotConvertValue {
        value,
        kind: target,
        span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_boundaries() {
        assert!(representable_const(&Value::from(127i64), BasicKind::Int8));
        assert!(!representable_const(&Value::from(128i64), BasicKind::Int8));
        assert!(representable_const(&Value::from(-128i64), BasicKind::Int8));
        assert!(!representable_const(&Value::from(-129i64), BasicKind::Int8));
        assert!(representable_const(&Value::from(32767i64), BasicKind::Int16));
        assert!(!representable_const(&Value::from(32768i64), BasicKind::Int16));
    }

    #[test]
    fn unsigned_boundaries() {
        assert!(representable_const(&Value::from(255i64), BasicKind::Uint8));
        assert!(!representable_const(&Value::from(256i64), BasicKind::Uint8));
        assert!(representable_const(&Value::from(0i64), BasicKind::Uint8));
        assert!(!representable_const(&Value::from(-1i64), BasicKind::Uint8));
        assert!(representable_const(&Value::from(u64::MAX), BasicKind::Uint64));
        assert!(representable_const(&Value::from(u64::MAX), BasicKind::Uintptr));
    }

    #[test]
    fn platform_int_is_64_bit() {
        assert!(representable_const(&Value::from(i64::MAX), BasicKind::Int));
        let too_big = Value::from(i64::MAX as u64 + 1);
        assert!(!representable_const(&too_big, BasicKind::Int));
    }

    #[test]
    fn integral_floats_fit_integer_targets() {
        assert!(representable_const(&Value::from(2.0), BasicKind::Int));
        assert!(!representable_const(&Value::from(2.5), BasicKind::Int));
    }

    #[test]
    fn float32_overflow_detected() {
        // Larger than f32::MAX but well within f64.
        let v = Value::from(1e39);
        assert!(!representable_const(&v, BasicKind::Float32));
        assert!(representable_const(&v, BasicKind::Float64));
    }

    #[test]
    fn integers_are_representable_as_floats() {
        assert!(representable_const(&Value::from(3i64), BasicKind::Float64));
        assert!(representable_const(&Value::from(3i64), BasicKind::Complex128));
    }

    #[test]
    fn complex_parts_checked_at_component_precision() {
        let c = Value::complex(Value::from(1e39), Value::from(0i64));
        assert!(!representable_const(&c, BasicKind::Complex64));
        assert!(representable_const(&c, BasicKind::Complex128));
    }

    #[test]
    fn exact_kind_match_for_string_and_bool() {
        assert!(representable_const(&Value::from("s"), BasicKind::String));
        assert!(!representable_const(&Value::from(1i64), BasicKind::String));
        assert!(representable_const(&Value::from(true), BasicKind::Bool));
        assert!(!representable_const(&Value::from("t"), BasicKind::Bool));
    }
}
