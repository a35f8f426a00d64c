//! Free-function builders, handy when the left operand is a literal or when operator sugar
//! reads poorly.
//!
//! ```
//! use hysym::expr::func::*;
//!
//! let x = symbol("x").unwrap();
//! let e = pow(2, add(&x, 1));
//! assert_eq!(e.to_string(), "2 ^ (x + 1)");
//! ```
use crate::error::ExprResult;
use crate::expr::{Expr, variant::BinaryOp};
use crate::scalar::Scalar;

pub fn number(value: impl Into<Scalar>) -> Expr {
    Expr::number(value)
}

pub fn symbol(name: impl Into<String>) -> ExprResult<Expr> {
    Expr::symbol(name)
}

pub fn combine(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::combine(op, lhs, rhs)
}

pub fn add(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::combine(BinaryOp::Add, lhs, rhs)
}

pub fn sub(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::combine(BinaryOp::Sub, lhs, rhs)
}

pub fn mul(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::combine(BinaryOp::Mul, lhs, rhs)
}

pub fn div(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::combine(BinaryOp::Div, lhs, rhs)
}

pub fn pow(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Expr {
    Expr::combine(BinaryOp::Pow, base, exponent)
}
