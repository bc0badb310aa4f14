//! Address-of checking.

use gander_core::CheckError;

use crate::arena::{Form, NodeId};
use crate::{Checker, Result};

/// Check a unary address expression.
///
/// The operand is walked through parenthesization and selectors; an index
/// expression is walked through only when the indexed base is an array or
/// a map. The walk must end on a composite literal or an identifier;
/// anything else is not addressable.
pub(crate) fn check_address(c: &mut Checker, n: NodeId) -> Result<()> {
    let mut cur = c.child(n, 0)?;
    loop {
        match c.arena[cur].form {
            Form::Paren => {
                cur = c.child(cur, 0)?;
            }
            Form::Selector => {
                cur = c.child(cur, 1)?;
            }
            Form::Index => {
                let base = c.child(cur, 0)?;
                let base_ty = c.ty(base)?;
                if base_ty.is_array() || base_ty.is_map() {
                    cur = base;
                    continue;
                }
                return Err(not_addressable(c, cur, n));
            }
            Form::CompositeLit | Form::Ident => return Ok(()),
            _ => return Err(not_addressable(c, cur, n)),
        }
    }
}

fn not_addressable(c: &Checker, offending: NodeId, n: NodeId) -> CheckError {
    let ty = c.arena[offending]
        .ty
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();
    CheckError::NotAddressable {
        ty,
        span: c.arena[n].span,
    }
}
