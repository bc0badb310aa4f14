//! The operator enumeration and its predicate tables.
//!
//! Dispatch is an exhaustive match over the closed [`Op`] enumeration, so
//! an operator without a predicate row is a compile-time hole rather than
//! a missing hashmap entry. Compound assignment carries an explicit base
//! operator mapping instead of relying on enum ordering.

use std::fmt;

use gander_core::{CheckError, Span, Type};

use crate::Result;

/// Operator kinds consumed by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    // Arithmetic
    /// `+` (also string concatenation)
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,

    // Bitwise
    /// `&`
    And,
    /// `|`
    Or,
    /// `^` (binary)
    Xor,
    /// `&^`
    AndNot,
    /// `<<`
    Shl,
    /// `>>`
    Shr,

    // Logical
    /// `&&`
    Land,
    /// `||`
    Lor,

    // Comparison
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Lower,
    /// `<=`
    LowerEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Unary
    /// `+` (unary)
    Pos,
    /// `-` (unary)
    Neg,
    /// `^` (bitwise complement)
    BitNot,
    /// `!`
    Not,
    /// `&` (address-of)
    Addr,
    /// `<-` (channel receive)
    Recv,

    // Assignment
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    QuoAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `&^=`
    AndNotAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
}

impl Op {
    /// The base binary operator of a compound-assignment operator, or
    /// `None` for every other operator.
    pub fn assign_base(self) -> Option<Op> {
        match self {
            Op::AddAssign => Some(Op::Add),
            Op::SubAssign => Some(Op::Sub),
            Op::MulAssign => Some(Op::Mul),
            Op::QuoAssign => Some(Op::Quo),
            Op::RemAssign => Some(Op::Rem),
            Op::AndAssign => Some(Op::And),
            Op::OrAssign => Some(Op::Or),
            Op::XorAssign => Some(Op::Xor),
            Op::AndNotAssign => Some(Op::AndNot),
            Op::ShlAssign => Some(Op::Shl),
            Op::ShrAssign => Some(Op::Shr),
            _ => None,
        }
    }

    /// Whether this is a shift operator (including shift-assignment).
    pub fn is_shift(self) -> bool {
        matches!(self, Op::Shl | Op::Shr | Op::ShlAssign | Op::ShrAssign)
    }

    /// Whether this is a comparison operator.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Op::Equal | Op::NotEqual | Op::Lower | Op::LowerEqual | Op::Greater | Op::GreaterEqual
        )
    }

    /// Source rendering of this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Quo => "/",
            Op::Rem => "%",
            Op::And => "&",
            Op::Or => "|",
            Op::Xor => "^",
            Op::AndNot => "&^",
            Op::Shl => "<<",
            Op::Shr => ">>",
            Op::Land => "&&",
            Op::Lor => "||",
            Op::Equal => "==",
            Op::NotEqual => "!=",
            Op::Lower => "<",
            Op::LowerEqual => "<=",
            Op::Greater => ">",
            Op::GreaterEqual => ">=",
            Op::Pos => "+",
            Op::Neg => "-",
            Op::BitNot => "^",
            Op::Not => "!",
            Op::Addr => "&",
            Op::Recv => "<-",
            Op::Assign => "=",
            Op::AddAssign => "+=",
            Op::SubAssign => "-=",
            Op::MulAssign => "*=",
            Op::QuoAssign => "/=",
            Op::RemAssign => "%=",
            Op::AndAssign => "&=",
            Op::OrAssign => "|=",
            Op::XorAssign => "^=",
            Op::AndNotAssign => "&^=",
            Op::ShlAssign => "<<=",
            Op::ShrAssign => ">>=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Require that a unary operator is defined on the operand's backing type.
///
/// Unary `+` and `-` need a numeric operand, `^` an integer, `!` a
/// boolean. Operators with no unary predicate row report an internal
/// unknown-operator defect.
pub(crate) fn require_unary(op: Op, ty: &Type, span: Span) -> Result<()> {
    let defined = match op {
        Op::Pos | Op::Neg => ty.is_numeric(),
        Op::BitNot => ty.is_integer(),
        Op::Not => ty.is_boolean(),
        _ => {
            return Err(CheckError::UnknownOp {
                op: op.to_string(),
                span,
            });
        }
    };
    if defined {
        Ok(())
    } else {
        Err(CheckError::OpNotDefined {
            op: op.to_string(),
            ty: ty.to_string(),
            span,
        })
    }
}

/// Require that a binary operator is defined on the operands' backing
/// type (both operands have the same type by the time this runs).
///
/// `+` accepts numeric or string operands, `-`/`*`/`/` numeric, `%` and
/// the bitwise family integers, `&&`/`||` booleans.
pub(crate) fn require_binary(op: Op, ty: &Type, span: Span) -> Result<()> {
    let defined = match op {
        Op::Add => ty.is_numeric() || ty.is_string(),
        Op::Sub | Op::Mul | Op::Quo => ty.is_numeric(),
        Op::Rem | Op::And | Op::Or | Op::Xor | Op::AndNot => ty.is_integer(),
        Op::Land | Op::Lor => ty.is_boolean(),
        _ => {
            return Err(CheckError::UnknownOp {
                op: op.to_string(),
                span,
            });
        }
    };
    if defined {
        Ok(())
    } else {
        Err(CheckError::OpNotDefined {
            op: op.to_string(),
            ty: ty.to_string(),
            span,
        })
    }
}
