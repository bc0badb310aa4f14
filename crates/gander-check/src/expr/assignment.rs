//! Assignment checking.

use gander_core::CheckError;

use crate::arena::{Form, NodeId};
use crate::convert::convert_untyped;
use crate::operators::Op;
use crate::{Checker, Result};

/// Check one destination/source pair of an assignment.
///
/// Plain assignment outside a constant declaration first materializes the
/// destination's default type (an untyped `var` declaration becomes
/// concrete here). An untyped source is coerced toward the destination;
/// when the destination is the nil type or an interface, the source is
/// coerced to its own default type instead, so interfaces store the
/// concrete default rather than the interface shape. Compound assignments
/// must be single-valued on both sides and are checked as their base
/// binary operation.
pub(crate) fn check_assign(c: &mut Checker, n: NodeId, dest: NodeId, src: NodeId) -> Result<()> {
    if c.arena[n].op == Some(Op::Assign) {
        let in_const_decl = c.arena[n]
            .parent
            .is_some_and(|p| c.arena[p].form == Form::ConstDecl);
        if !in_const_decl {
            // var declarations must end up typed
            let defaulted = c.ty(dest)?.default_type();
            c.arena[dest].ty = Some(defaulted);
        }

        if c.ty(src)?.untyped {
            let mut target = c.ty(dest)?.clone();
            if target.is_nil() || target.is_interface() {
                target = c.ty(src)?.default_type();
            }
            convert_untyped(c, src, Some(&target))?;
        }

        let src_ty = c.ty(src)?;
        let dest_ty = c.ty(dest)?;
        if !src_ty.assignable_to(dest_ty) {
            return Err(CheckError::AssignMismatch {
                src: src_ty.to_string(),
                dst: dest_ty.to_string(),
                span: c.arena[src].span,
            });
        }
        return Ok(());
    }

    // Compound assignment.
    if c.arena[n].nleft > 1 || c.arena[n].nright > 1 {
        let op = c.arena[n].op.map(|op| op.to_string()).unwrap_or_default();
        return Err(CheckError::MultiValueAssign {
            op,
            span: c.arena[n].span,
        });
    }

    super::binary::check_binary(c, n)
}
