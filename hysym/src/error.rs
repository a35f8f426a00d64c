use thiserror::Error;

use crate::expr::{Expr, variant::ExprKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Cannot process a {kind} node during {pass}")]
    UnsupportedNode { kind: ExprKind, pass: &'static str },

    #[error("Symbol '{0}' is not bound to a value")]
    UnboundSymbol(String),
}

impl ExprError {
    /// Report that `pass` has no rule for the kind of `expr`.
    ///
    /// Meant for visitors passed to [`postorder_apply`](crate::walker::postorder_apply) that only
    /// handle part of the language.
    pub fn unsupported(expr: &Expr, pass: &'static str) -> Self {
        ExprError::UnsupportedNode {
            kind: expr.kind(),
            pass,
        }
    }
}

pub type ExprResult<T> = Result<T, ExprError>;
