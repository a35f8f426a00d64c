//! Symbolic differentiation with respect to a single named variable.
//!
//! [`differentiate`] is a postorder fold: each node receives the derivatives already computed
//! for its operands and combines them with the usual rules.
//!
//! | Node        | Derivative                                  |
//! |-------------|---------------------------------------------|
//! | `Number`    | `0.0`                                       |
//! | `Symbol`    | `1.0` for the variable, `0.0` otherwise     |
//! | `a + b`     | `a' + b'`                                   |
//! | `a - b`     | `a' - b'`                                   |
//! | `a * b`     | `a' * b + b' * a`                           |
//! | `a / b`     | `(a' * b - a * b') / b ^ 2`                 |
//! | `a ^ b`     | `b * a ^ (b - 1) * 1.0` (constant exponent) |
//!
//! Derivatives of terminals are plain constants. Sums and differences of two constants are
//! computed directly; as soon as a constant meets an expression it becomes a `Number` node.
//! No other simplification happens, so results keep factors such as `1.0 * x`.
//!
//! The power rule does not apply the chain rule: the trailing factor is always `1.0`, whatever
//! the base. It is exact when the base is the variable itself.
//!
//! ```
//! use hysym::expr::Expr;
//! use hysym::diff::differentiate;
//!
//! let x = Expr::symbol("x").unwrap();
//! let d = differentiate(&(&x * &x + 3), "x").unwrap();
//! assert_eq!(d.to_string(), "1.0 * x + 1.0 * x + 0.0");
//! ```
use std::ops;

use log::debug;

use crate::error::{ExprError, ExprResult};
use crate::expr::{Expr, view::ExprView};
use crate::walker::postorder_apply;

/// Derivative of one node while the fold is in progress.
#[derive(Clone)]
enum Partial {
    Constant(f64),
    Expr(Expr),
}

impl Partial {
    fn into_expr(self) -> Expr {
        match self {
            Partial::Constant(value) => Expr::number(value),
            Partial::Expr(expr) => expr,
        }
    }
}

impl ops::Add for Partial {
    type Output = Partial;

    fn add(self, rhs: Partial) -> Partial {
        match (self, rhs) {
            (Partial::Constant(a), Partial::Constant(b)) => Partial::Constant(a + b),
            (lhs, rhs) => Partial::Expr(lhs.into_expr() + rhs.into_expr()),
        }
    }
}

impl ops::Sub for Partial {
    type Output = Partial;

    fn sub(self, rhs: Partial) -> Partial {
        match (self, rhs) {
            (Partial::Constant(a), Partial::Constant(b)) => Partial::Constant(a - b),
            (lhs, rhs) => Partial::Expr(lhs.into_expr() - rhs.into_expr()),
        }
    }
}

fn derivative_of(expr: &Expr, operands: &[&Partial], var: &str) -> Partial {
    let operand = |i: usize| operands[i].clone();

    match expr.view() {
        ExprView::Number(_) => Partial::Constant(0.0),
        ExprView::Symbol(name) => Partial::Constant(if name == var { 1.0 } else { 0.0 }),
        ExprView::Add(_) => operand(0) + operand(1),
        ExprView::Sub(_) => operand(0) - operand(1),
        ExprView::Mul([a, b]) => {
            // Product rule
            Partial::Expr(operand(0).into_expr() * b + operand(1).into_expr() * a)
        }
        ExprView::Div([a, b]) => {
            // Quotient rule
            let numerator = operand(0).into_expr() * b - a * operand(1).into_expr();
            Partial::Expr(numerator / b.pow(2))
        }
        ExprView::Pow([a, b]) => {
            // Power rule, constant exponent
            Partial::Expr(b * a.pow(b - 1) * Expr::number(1.0))
        }
    }
}

/// Differentiate `expr` with respect to the symbol named `var`.
///
/// Returns a new expression; `expr` is left untouched. A `var` naming no symbol of `expr`
/// (the empty name never does) is not an error: every symbol derives to `0.0`.
pub fn differentiate(expr: &Expr, var: &str) -> ExprResult<Expr> {
    debug!("differentiating {:?} with respect to '{var}'", expr.id());
    let derivative = postorder_apply(expr, var, |node, operands, var| {
        Ok::<_, ExprError>(derivative_of(node, operands, var))
    })?;
    Ok(derivative.into_expr())
}

impl Expr {
    /// Same as [`differentiate`].
    #[inline]
    pub fn differentiate(&self, var: &str) -> ExprResult<Expr> {
        differentiate(self, var)
    }
}
