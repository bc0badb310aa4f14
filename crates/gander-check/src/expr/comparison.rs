//! Comparison expression checking.

use gander_core::CheckError;

use crate::arena::NodeId;
use crate::operators::Op;
use crate::{Checker, Result};

/// Check a comparison expression.
///
/// Unless one side is the nil value, the operand types must be assignable
/// in at least one direction. Equality needs both sides comparable, or
/// nil against a nil-admitting operand; ordering needs both sides
/// ordered. The failure diagnostic names the non-nil operand's type.
pub(crate) fn check_comparison(c: &mut Checker, n: NodeId) -> Result<()> {
    let left = c.child(n, 0)?;
    let right = c.child(n, 1)?;
    let span = c.arena[n].span;

    let lty = c.ty(left)?.clone();
    let rty = c.ty(right)?.clone();

    let nil_involved = lty.is_nil() || rty.is_nil();
    if !nil_involved && !lty.assignable_to(&rty) && !rty.assignable_to(&lty) {
        return Err(CheckError::MismatchedTypes {
            left: lty.to_string(),
            right: rty.to_string(),
            span,
        });
    }

    let Some(op) = c.arena[n].op else {
        return Err(CheckError::Internal {
            message: "comparison node without an operator".to_string(),
        });
    };

    let ok = match op {
        Op::Equal | Op::NotEqual => {
            lty.comparable() && rty.comparable()
                || lty.is_nil() && rty.has_nil()
                || rty.is_nil() && lty.has_nil()
        }
        Op::Lower | Op::LowerEqual | Op::Greater | Op::GreaterEqual => {
            lty.is_ordered() && rty.is_ordered()
        }
        _ => false,
    };
    if !ok {
        let ty = if lty.is_nil() { &rty } else { &lty };
        return Err(CheckError::OpNotDefined {
            op: op.to_string(),
            ty: ty.to_string(),
            span,
        });
    }
    Ok(())
}
