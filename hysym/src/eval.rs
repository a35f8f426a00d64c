//! Numeric evaluation of expressions under a set of symbol bindings.
//!
//! ```
//! use hysym::expr::Expr;
//! use hysym::eval::evaluate;
//!
//! let x = Expr::symbol("x").unwrap();
//! let e = (&x + 1) * &x;
//! assert_eq!(evaluate(&e, [("x", 3.0)]), Ok(12.0));
//! ```
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use log::debug;

use crate::error::{ExprError, ExprResult};
use crate::expr::{Expr, view::ExprView};
use crate::walker::postorder_apply;

/// Source of values for the symbols of an expression.
pub trait SymbolTable {
    fn lookup(&self, name: &str) -> Option<f64>;
}

impl<T: SymbolTable + ?Sized> SymbolTable for &T {
    #[inline]
    fn lookup(&self, name: &str) -> Option<f64> {
        (**self).lookup(name)
    }
}

impl<K, S> SymbolTable for HashMap<K, f64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl SymbolTable for [(&str, f64)] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|&(_, value)| value)
    }
}

impl<const N: usize> SymbolTable for [(&str, f64); N] {
    #[inline]
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

fn value_of<B: SymbolTable>(expr: &Expr, operands: &[&f64], bindings: &B) -> ExprResult<f64> {
    let operand = |i: usize| *operands[i];

    Ok(match expr.view() {
        ExprView::Number(value) => value.to_f64(),
        ExprView::Symbol(name) => bindings
            .lookup(name)
            .ok_or_else(|| ExprError::UnboundSymbol(name.clone()))?,
        ExprView::Add(_) => operand(0) + operand(1),
        ExprView::Sub(_) => operand(0) - operand(1),
        ExprView::Mul(_) => operand(0) * operand(1),
        ExprView::Div(_) => operand(0) / operand(1),
        ExprView::Pow(_) => operand(0).powf(operand(1)),
    })
}

/// Evaluate `expr` to a floating point value, looking symbols up in `bindings`.
///
/// Arithmetic follows IEEE-754: dividing by zero yields an infinity or NaN rather than an
/// error. Fails with [`ExprError::UnboundSymbol`] on the first symbol `bindings` does not know.
pub fn evaluate(expr: &Expr, bindings: impl SymbolTable) -> ExprResult<f64> {
    debug!("evaluating {:?}", expr.id());
    postorder_apply(expr, bindings, |node, operands, bindings| {
        value_of(node, operands, bindings)
    })
}

impl Expr {
    /// Same as [`evaluate`].
    #[inline]
    pub fn evaluate(&self, bindings: impl SymbolTable) -> ExprResult<f64> {
        evaluate(self, bindings)
    }
}
