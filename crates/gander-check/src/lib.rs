//! Static type checking and constant coercion for the gander front end.
//!
//! The driver walks its tree post-order (children typed before parents)
//! and calls the matching [`Checker`] entry point on each node. Checkers
//! validate operator applications against the operand types, coerce
//! untyped constants toward their context, and narrow constant payloads
//! in place. They mutate nothing but the `ty` and `cval` slots of the
//! subtree they are given.
//!
//! ## Modules
//!
//! - [`arena`]: index-linked node storage
//! - [`operators`]: the operator enumeration and its predicate tables
//! - [`convert`]: the untyped-constant coercion engine
//! - [`representable`]: constant-fits-type checking
//! - `expr`: the per-expression checkers

pub mod arena;
pub mod convert;
mod expr;
pub mod operators;
pub mod representable;

pub use arena::{Arena, Form, Node, NodeId};
pub use operators::Op;

// Re-export the error type from core for convenience.
pub use gander_core::CheckError;

use gander_core::Type;

/// Result alias used throughout the checker.
pub type Result<T> = std::result::Result<T, CheckError>;

/// The type checker.
///
/// A `Checker` borrows one tree at a time; the driver guarantees each node
/// is visited once and that children are fully checked before their
/// parent. Each entry point either succeeds (with the node's type and
/// constant slots updated) or reports a single [`CheckError`] for the
/// node that triggered it, leaving already-checked descendants untouched.
pub struct Checker<'a> {
    pub(crate) arena: &'a mut Arena,
}

impl<'a> Checker<'a> {
    /// Create a checker over a tree.
    pub fn new(arena: &'a mut Arena) -> Self {
        Self { arena }
    }

    /// Check one destination/source pair of an assignment node, or a
    /// compound assignment.
    pub fn assign_expr(&mut self, n: NodeId, dest: NodeId, src: NodeId) -> Result<()> {
        expr::assignment::check_assign(self, n, dest, src)
    }

    /// Check an address-of expression.
    pub fn address_expr(&mut self, n: NodeId) -> Result<()> {
        expr::address::check_address(self, n)
    }

    /// Check a unary expression (including channel receive).
    pub fn unary_expr(&mut self, n: NodeId) -> Result<()> {
        expr::unary::check_unary(self, n)
    }

    /// Check a shift expression.
    pub fn shift_expr(&mut self, n: NodeId) -> Result<()> {
        expr::shift::check_shift(self, n)
    }

    /// Check a comparison expression.
    pub fn comparison_expr(&mut self, n: NodeId) -> Result<()> {
        expr::comparison::check_comparison(self, n)
    }

    /// Check a binary expression (the entry point for compound
    /// assignments as well; shifts and comparisons are delegated).
    pub fn binary_expr(&mut self, n: NodeId) -> Result<()> {
        expr::binary::check_binary(self, n)
    }

    /// Coerce an untyped node toward a target type. A no-op when the node
    /// has no type yet, is already concrete, or no target is given.
    pub fn convert_untyped(&mut self, n: NodeId, target: Option<&Type>) -> Result<()> {
        convert::convert_untyped(self, n, target)
    }

    /// The resolved type of a node; a driver-contract violation if absent.
    pub(crate) fn ty(&self, n: NodeId) -> Result<&Type> {
        self.arena[n].ty.as_ref().ok_or_else(|| CheckError::Internal {
            message: "node has no resolved type".to_string(),
        })
    }

    /// The `i`-th child of a node; a driver-contract violation if absent.
    pub(crate) fn child(&self, n: NodeId, i: usize) -> Result<NodeId> {
        self.arena.child(n, i).ok_or_else(|| CheckError::Internal {
            message: format!("node is missing child {i}"),
        })
    }
}
