//! Dispatch enum for expression nodes.
//!
//! Every node exposes its variant and payload through [`ExprView`]; operator variants hold
//! their two operands as shared [`Expr`] handles.
use strum::EnumIs;

use crate::expr::{Expr, variant::ExprKind};
use crate::scalar::Scalar;

#[derive(Debug, Clone, EnumIs)]
pub enum ExprView {
    // Terminals
    Number(Scalar),
    Symbol(String),

    // Binary operators, operands are `[lhs, rhs]`
    Add([Expr; 2]),
    Sub([Expr; 2]),
    Mul([Expr; 2]),
    Div([Expr; 2]),
    Pow([Expr; 2]),
}

impl ExprView {
    pub fn kind(&self) -> ExprKind {
        match self {
            ExprView::Number(_) => ExprKind::Number,
            ExprView::Symbol(_) => ExprKind::Symbol,
            ExprView::Add(_) => ExprKind::Add,
            ExprView::Sub(_) => ExprKind::Sub,
            ExprView::Mul(_) => ExprKind::Mul,
            ExprView::Div(_) => ExprKind::Div,
            ExprView::Pow(_) => ExprKind::Pow,
        }
    }

    /// Ordered operands: empty for terminals, `[lhs, rhs]` for operators.
    #[inline]
    pub fn operands(&self) -> &[Expr] {
        match self {
            ExprView::Number(_) | ExprView::Symbol(_) => &[],
            ExprView::Add(operands)
            | ExprView::Sub(operands)
            | ExprView::Mul(operands)
            | ExprView::Div(operands)
            | ExprView::Pow(operands) => operands,
        }
    }

    /// Move the operands out, leaving `placeholder` clones behind. Used to tear down deep
    /// graphs without recursing.
    pub(crate) fn take_operands(&mut self, placeholder: &Expr) -> Option<[Expr; 2]> {
        match self {
            ExprView::Number(_) | ExprView::Symbol(_) => None,
            ExprView::Add(operands)
            | ExprView::Sub(operands)
            | ExprView::Mul(operands)
            | ExprView::Div(operands)
            | ExprView::Pow(operands) => Some(std::mem::replace(
                operands,
                [placeholder.clone(), placeholder.clone()],
            )),
        }
    }
}
