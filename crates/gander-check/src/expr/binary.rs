//! Binary expression checking.

use gander_core::CheckError;

use crate::arena::NodeId;
use crate::convert::convert_untyped;
use crate::operators::{self, Op};
use crate::{Checker, Result};

/// Check a binary expression.
///
/// A compound-assignment operator is checked as its base operator. Shifts
/// and comparisons have their own rules; everything else coerces each
/// untyped operand toward the other's type (best effort; a genuine
/// mismatch is still reported below), requires both operand types to be
/// identical, and dispatches through the binary predicate table.
///
/// A division or remainder whose divisor holds a constant zero is
/// rejected here when the dividend is untyped or an integer; the error is
/// reported at check time rather than deferred to execution.
pub(crate) fn check_binary(c: &mut Checker, n: NodeId) -> Result<()> {
    let span = c.arena[n].span;
    let Some(raw_op) = c.arena[n].op else {
        return Err(CheckError::Internal {
            message: "binary node without an operator".to_string(),
        });
    };
    let op = raw_op.assign_base().unwrap_or(raw_op);

    if op.is_shift() {
        return super::shift::check_shift(c, n);
    }

    let left = c.child(n, 0)?;
    let right = c.child(n, 1)?;

    let rty = c.arena[right].ty.clone();
    let _ = convert_untyped(c, left, rty.as_ref());
    let lty = c.arena[left].ty.clone();
    let _ = convert_untyped(c, right, lty.as_ref());

    if op.is_comparison() {
        return super::comparison::check_comparison(c, n);
    }

    let lty = c.ty(left)?.clone();
    let rty = c.ty(right)?.clone();
    if lty != rty {
        return Err(CheckError::MismatchedTypes {
            left: lty.to_string(),
            right: rty.to_string(),
            span,
        });
    }

    operators::require_binary(op, &lty, span)?;

    if matches!(op, Op::Quo | Op::Rem) {
        // A narrowed divisor keeps its constant payload, so a zero that
        // started out untyped is caught even after coercion.
        let divisor_zero = c.arena[right]
            .cval
            .as_ref()
            .is_some_and(|v| v.sign() == 0);
        if divisor_zero && (lty.untyped || lty.is_integer()) {
            return Err(CheckError::DivisionByZero { span });
        }
    }
    Ok(())
}
