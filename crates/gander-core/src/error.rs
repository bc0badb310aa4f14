//! Errors produced by the type checker.
//!
//! Every failure is an ordinary value: checker entry points return
//! `Result<(), CheckError>` and never abort. Each variant is bound to the
//! span of the node that triggered it; the message wording follows the
//! interpreter's established diagnostics so drivers see familiar text.

use thiserror::Error;

use crate::Span;

/// Errors reported by expression checking and untyped-constant coercion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// The operator exists but is not defined on the operand's type.
    #[error("at {span}: invalid operation: operator {op} not defined on {ty}")]
    OpNotDefined {
        /// The operator, rendered as source text.
        op: String,
        /// The offending operand type.
        ty: String,
        /// Where the operation occurred.
        span: Span,
    },

    /// An operator reached a dispatch table that has no row for it.
    ///
    /// This signals a defect in the caller (or in the tree), not in the
    /// checked program; it is unreachable for well-formed input.
    #[error("at {span}: invalid operation: unknown operator {op}")]
    UnknownOp {
        /// The operator, rendered as source text.
        op: String,
        /// Where the operation occurred.
        span: Span,
    },

    /// Binary or comparison operands have incompatible types.
    #[error("at {span}: invalid operation: mismatched types {left} and {right}")]
    MismatchedTypes {
        /// The left operand type.
        left: String,
        /// The right operand type.
        right: String,
        /// Where the operation occurred.
        span: Span,
    },

    /// The source of an assignment is not assignable to the destination.
    #[error("at {span}: cannot use type {src} as type {dst} in assignment")]
    AssignMismatch {
        /// The source type.
        src: String,
        /// The destination type.
        dst: String,
        /// Where the source expression occurred.
        span: Span,
    },

    /// A compound assignment was applied to multi-valued expressions.
    #[error("at {span}: assignment operation {op} requires single-valued expressions")]
    MultiValueAssign {
        /// The compound-assignment operator.
        op: String,
        /// Where the assignment occurred.
        span: Span,
    },

    /// The operand of `&` is not addressable.
    #[error("at {span}: invalid operation: cannot take address of {ty}")]
    NotAddressable {
        /// The type of the non-addressable expression.
        ty: String,
        /// Where the address operation occurred.
        span: Span,
    },

    /// A receive was applied to a non-channel operand.
    #[error("at {span}: invalid operation: cannot receive from non-channel {ty}")]
    ReceiveFromNonChan {
        /// The operand type.
        ty: String,
        /// Where the receive occurred.
        span: Span,
    },

    /// A receive was applied to a send-only channel.
    #[error("at {span}: invalid operation: cannot receive from send-only channel {ty}")]
    ReceiveFromSendChan {
        /// The channel type.
        ty: String,
        /// Where the receive occurred.
        span: Span,
    },

    /// The shifted operand is not an integer (or an untyped integer constant).
    #[error("at {span}: invalid operation: shift of type {ty}")]
    ShiftOfType {
        /// The operand type.
        ty: String,
        /// Where the shift occurred.
        span: Span,
    },

    /// The shift count is not an integer.
    #[error("at {span}: invalid operation: shift count type {ty}, must be integer")]
    ShiftCountType {
        /// The count operand type.
        ty: String,
        /// Where the shift occurred.
        span: Span,
    },

    /// A division or remainder by a constant zero divisor.
    #[error("at {span}: invalid operation: division by zero")]
    DivisionByZero {
        /// Where the division occurred.
        span: Span,
    },

    /// An untyped operand cannot be converted to the target type.
    #[error("at {span}: cannot convert {from} to {to}")]
    CannotConvert {
        /// The source type.
        from: String,
        /// The target type.
        to: String,
        /// Where the operand occurred.
        span: Span,
    },

    /// An untyped value carrying methods was assigned to an interface.
    #[error("at {span}: cannot convert {from} to {to}: untyped value has a method set")]
    IfaceMethodSet {
        /// The source type.
        from: String,
        /// The interface type.
        to: String,
        /// Where the operand occurred.
        span: Span,
    },

    /// A constant does not fit the target type's range.
    #[error("at {span}: {value} overflows {kind}")]
    Overflows {
        /// Exact rendering of the constant.
        value: String,
        /// The target kind.
        kind: String,
        /// Where the constant occurred.
        span: Span,
    },

    /// A non-integral constant was narrowed into an integer target.
    #[error("at {span}: {value} truncated to {kind}")]
    Truncated {
        /// Exact rendering of the constant.
        value: String,
        /// The target kind.
        kind: String,
        /// Where the constant occurred.
        span: Span,
    },

    /// A constant cannot be represented in the target kind at all.
    #[error("at {span}: cannot convert {value} to {kind}")]
    CannotConvertValue {
        /// Exact rendering of the constant.
        value: String,
        /// The target kind.
        kind: String,
        /// Where the constant occurred.
        span: Span,
    },

    /// Internal checker error (a node violated the driver's contract).
    #[error("internal error: {message}")]
    Internal {
        /// The error message.
        message: String,
    },
}

impl CheckError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CheckError::OpNotDefined { span, .. } => *span,
            CheckError::UnknownOp { span, .. } => *span,
            CheckError::MismatchedTypes { span, .. } => *span,
            CheckError::AssignMismatch { span, .. } => *span,
            CheckError::MultiValueAssign { span, .. } => *span,
            CheckError::NotAddressable { span, .. } => *span,
            CheckError::ReceiveFromNonChan { span, .. } => *span,
            CheckError::ReceiveFromSendChan { span, .. } => *span,
            CheckError::ShiftOfType { span, .. } => *span,
            CheckError::ShiftCountType { span, .. } => *span,
            CheckError::DivisionByZero { span } => *span,
            CheckError::CannotConvert { span, .. } => *span,
            CheckError::IfaceMethodSet { span, .. } => *span,
            CheckError::Overflows { span, .. } => *span,
            CheckError::Truncated { span, .. } => *span,
            CheckError::CannotConvertValue { span, .. } => *span,
            CheckError::Internal { .. } => Span::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_not_defined_display() {
        let err = CheckError::OpNotDefined {
            op: "%".to_string(),
            ty: "float64".to_string(),
            span: Span::new(3, 7, 1),
        };
        assert_eq!(
            format!("{err}"),
            "at 3:7: invalid operation: operator % not defined on float64"
        );
    }

    #[test]
    fn overflow_display() {
        let err = CheckError::Overflows {
            value: "200".to_string(),
            kind: "int8".to_string(),
            span: Span::new(1, 9, 3),
        };
        assert_eq!(format!("{err}"), "at 1:9: 200 overflows int8");
    }

    #[test]
    fn error_span_accessor() {
        let span = Span::new(5, 10, 2);
        let err = CheckError::DivisionByZero { span };
        assert_eq!(err.span(), span);

        let internal = CheckError::Internal {
            message: "missing type".to_string(),
        };
        assert_eq!(internal.span(), Span::default());
    }
}
