//! Coercion of untyped constants toward a target type.
//!
//! This is the central routine of the checker: every context that gives an
//! untyped operand a type (assignment destinations, the other operand of a
//! binary expression, a shift count) funnels through [`convert_untyped`].

use gander_core::{BasicKind, CheckError, Type, Value};

use crate::arena::NodeId;
use crate::representable::check_representable;
use crate::{Checker, Result};

/// Coerce the untyped node `n` toward `target`.
///
/// A no-op when the node carries no type, its type is already concrete,
/// or no target is given. Otherwise:
///
/// 1. an untyped target widens the node's kind (numeric kinds adopt the
///    wider of the two, other kinds must match exactly);
/// 2. a nil node unifies with a nil target;
/// 3. a numeric, string, or boolean target requires representability,
///    narrows the constant payload in place, and makes the node concrete;
/// 4. an interface target takes the node at its own default type (nil
///    converts unconditionally; a value with methods is rejected);
/// 5. array, map, channel, function, and pointer targets accept only nil.
pub(crate) fn convert_untyped(c: &mut Checker, n: NodeId, target: Option<&Type>) -> Result<()> {
    let Some(target) = target else {
        return Ok(());
    };
    let Some(nty) = c.arena[n].ty.clone() else {
        return Ok(());
    };
    if !nty.untyped {
        return Ok(());
    }

    let span = c.arena[n].span;
    let conv_err = || CheckError::CannotConvert {
        from: nty.to_string(),
        to: target.to_string(),
        span,
    };

    if target.untyped {
        if nty.is_numeric() && target.is_numeric() {
            let from = nty.basic_kind().and_then(BasicKind::promotion_rank);
            let to = target.basic_kind().and_then(BasicKind::promotion_rank);
            if let (Some(from), Some(to)) = (from, to) {
                if from < to {
                    c.arena[n].ty = Some(target.clone());
                }
            }
            return Ok(());
        }
        if nty.kind == target.kind {
            return Ok(());
        }
        return Err(conv_err());
    }

    let (new_ty, narrow_kind) = if target.is_nil() && nty.is_nil() {
        c.arena[n].ty = Some(target.clone());
        return Ok(());
    } else if let Some(kind) = target.basic_kind() {
        // nil carries no constant payload, so without this guard it would
        // sail through representability and come out concrete.
        if nty.is_nil() {
            return Err(conv_err());
        }
        (target.clone(), kind)
    } else if target.is_interface() {
        if nty.is_nil() {
            return Ok(());
        }
        if !nty.methods.is_empty() {
            // Untyped constants never carry methods; this fires only on
            // malformed input.
            return Err(CheckError::IfaceMethodSet {
                from: nty.to_string(),
                to: target.to_string(),
                span,
            });
        }
        let default = nty.default_type();
        let Some(kind) = default.basic_kind() else {
            return Err(conv_err());
        };
        (default, kind)
    } else if target.is_array() || target.is_map() || target.is_chan() || target.is_func()
        || target.is_ptr()
    {
        if nty.is_nil() {
            return Ok(());
        }
        return Err(conv_err());
    } else {
        return Err(conv_err());
    };

    check_representable(c, n, narrow_kind)?;
    if let Some(v) = c.arena[n].cval.clone() {
        // The narrowing helper reports failure as a plain None; it is
        // translated here and never surfaced to the driver.
        match v.narrow_to(narrow_kind) {
            Some(narrowed) => c.arena[n].cval = Some(narrowed),
            None => return Err(conv_err()),
        }
    }
    c.arena[n].ty = Some(new_ty);
    Ok(())
}

/// Narrow a free-standing constant to a concrete kind. Exposed for
/// drivers that fold constants outside a tree; the checker itself narrows
/// through [`convert_untyped`].
pub fn convert_const(v: &Value, kind: BasicKind) -> Option<Value> {
    v.narrow_to(kind)
}
