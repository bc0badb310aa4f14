//! Unary expression checking.

use gander_core::CheckError;

use crate::arena::NodeId;
use crate::operators::{self, Op};
use crate::{Checker, Result};

/// Check a unary expression.
///
/// Channel receive is special-cased: the operand must be a channel and
/// must not be send-only. Every other unary operator goes through the
/// predicate table.
pub(crate) fn check_unary(c: &mut Checker, n: NodeId) -> Result<()> {
    let operand = c.child(n, 0)?;
    let Some(op) = c.arena[n].op else {
        return Err(CheckError::Internal {
            message: "unary node without an operator".to_string(),
        });
    };
    let span = c.arena[n].span;

    if op == Op::Recv {
        let ty = c.ty(operand)?;
        if !ty.is_chan() {
            return Err(CheckError::ReceiveFromNonChan {
                ty: ty.to_string(),
                span,
            });
        }
        if ty.is_send_chan() {
            return Err(CheckError::ReceiveFromSendChan {
                ty: ty.to_string(),
                span,
            });
        }
        return Ok(());
    }

    let ty = c.ty(operand)?;
    operators::require_unary(op, ty, span)
}
