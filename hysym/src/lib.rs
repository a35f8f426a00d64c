//! Hysym: arithmetic expression graphs with rendering and symbolic differentiation.
//!
//! Expressions are immutable nodes shared through reference counting. Building `x * x` from one
//! `x` stores `x` once, so an expression is a DAG, and every tree-wide pass walks it with the
//! memoizing postorder engine in [`walker`], visiting each distinct node once.
//!
//! Passes
//!  - Rendering (`Display`, [`render`](expr::pretty::render)): infix text with parentheses only
//!    where operator precedence requires them.
//!  - Differentiation ([`differentiate`](diff::differentiate)) with respect to a named variable.
//!  - Numeric evaluation ([`evaluate`](eval::evaluate)) under symbol bindings.
//!
//! Example
//! ```
//! use hysym::prelude::*;
//!
//! let x = symbol("x").unwrap();
//! let e = (&x + 1) * &x;
//! assert_eq!(e.to_string(), "(x + 1) * x");
//!
//! let d = e.differentiate("x").unwrap();
//! assert_eq!(d.evaluate([("x", 2.0)]), Ok(5.0));
//! ```

/// Output options for colored terminal rendering.
pub mod config;
/// Symbolic differentiation.
pub mod diff;
/// Error type shared by every fallible operation.
pub mod error;
/// Numeric evaluation under symbol bindings.
pub mod eval;
/// Expression nodes: model, builders, operator sugar and rendering.
pub mod expr;
/// Numeric literals.
pub mod scalar;
/// Memoizing postorder traversal.
pub mod walker;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Expr` with its views and kinds
    //! - Free-function builders from `func::*`
    //! - Pretty-printing via `PrettyExpr`
    //! - The differentiation, evaluation and traversal entry points
    pub use crate::expr::{
        Expr, NodeId,
        func::*,
        pretty::{PrettyExpr, render},
        variant::{BinaryOp, ExprKind},
        view::ExprView,
    };
    pub use crate::scalar::Scalar;

    pub use crate::config::RenderConfig;
    pub use crate::diff::differentiate;
    pub use crate::error::{ExprError, ExprResult};
    pub use crate::eval::{SymbolTable, evaluate};

    // Walker ergonomics
    pub use crate::walker::{postorder_apply, postorder_apply_no_input};
}
