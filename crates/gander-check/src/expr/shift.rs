//! Shift expression checking.

use gander_core::{BasicKind, CheckError, Kind, Type};

use crate::arena::NodeId;
use crate::convert::convert_untyped;
use crate::{Checker, Result};

/// Check a shift expression.
///
/// An untyped left operand must hold a constant that converts to an
/// integer (the conversion is recorded in the node's value slot);
/// otherwise the operand's concrete type must be an integer. An untyped
/// shift count is coerced toward `uint`; a concrete count must already be
/// an integer.
pub(crate) fn check_shift(c: &mut Checker, n: NodeId) -> Result<()> {
    let lhs = c.child(n, 0)?;
    let count = c.child(n, 1)?;
    let span = c.arena[n].span;

    let lhs_ty = c.ty(lhs)?.clone();
    let lhs_ok = if lhs_ty.untyped {
        match c.arena[lhs].cval.as_ref().map(|v| v.to_int()) {
            Some(v) if v.kind() == Kind::Int => {
                c.arena[lhs].cval = Some(v);
                true
            }
            _ => false,
        }
    } else {
        lhs_ty.is_integer()
    };
    if !lhs_ok {
        return Err(CheckError::ShiftOfType {
            ty: lhs_ty.to_string(),
            span,
        });
    }

    let count_ty = c.ty(count)?.clone();
    if count_ty.untyped {
        let uint = Type::basic(BasicKind::Uint);
        if convert_untyped(c, count, Some(&uint)).is_err() {
            return Err(CheckError::ShiftCountType {
                ty: count_ty.to_string(),
                span,
            });
        }
    } else if !count_ty.is_integer() {
        return Err(CheckError::ShiftCountType {
            ty: count_ty.to_string(),
            span,
        });
    }
    Ok(())
}
