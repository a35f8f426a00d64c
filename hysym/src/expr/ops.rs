//! Operator sugar for expressions.
//!
//! `+`, `-`, `*` and `/` are implemented for `Expr` and `&Expr` with any right-hand side that
//! converts into an [`Expr`], and for the common numeric literal types on the left, so
//! `x * 2` and `2 * x` both coerce the literal to a `Number` node. Exponentiation goes through
//! [`Expr::pow`]: Rust's `^` is exclusive-or and binds looser than `+`, so overloading it would
//! silently change the meaning of `x ^ 2 + 1`.
use crate::expr::{Expr, variant::BinaryOp};
use crate::scalar::Scalar;

macro_rules! define_ops_expr {
    ($( $trait:ident :: $method:ident => $op:ident ),* $(,)?) => {
        $(
            impl<R: Into<Expr>> std::ops::$trait<R> for Expr {
                type Output = Expr;

                #[inline]
                fn $method(self, rhs: R) -> Expr {
                    Expr::combine(BinaryOp::$op, self, rhs)
                }
            }

            impl<R: Into<Expr>> std::ops::$trait<R> for &Expr {
                type Output = Expr;

                #[inline]
                fn $method(self, rhs: R) -> Expr {
                    Expr::combine(BinaryOp::$op, self, rhs)
                }
            }
        )*
    };
}

// Literal on the left-hand side.
macro_rules! define_reflected_ops {
    (@impl $lit:ty, $trait:ident :: $method:ident => $op:ident) => {
        impl std::ops::$trait<Expr> for $lit {
            type Output = Expr;

            #[inline]
            fn $method(self, rhs: Expr) -> Expr {
                Expr::combine(BinaryOp::$op, self, rhs)
            }
        }

        impl std::ops::$trait<&Expr> for $lit {
            type Output = Expr;

            #[inline]
            fn $method(self, rhs: &Expr) -> Expr {
                Expr::combine(BinaryOp::$op, self, rhs)
            }
        }
    };
    ($( $lit:ty ),* $(,)?) => {
        $(
            define_reflected_ops!(@impl $lit, Add::add => Add);
            define_reflected_ops!(@impl $lit, Sub::sub => Sub);
            define_reflected_ops!(@impl $lit, Mul::mul => Mul);
            define_reflected_ops!(@impl $lit, Div::div => Div);
        )*
    };
}

define_ops_expr! {
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
}

define_reflected_ops!(i8, i16, i32, i64, u8, u16, u32, f32, f64, Scalar);

impl Expr {
    /// Raise this expression to `exponent`: `self ^ exponent`.
    #[inline]
    pub fn pow(&self, exponent: impl Into<Expr>) -> Expr {
        Expr::combine(BinaryOp::Pow, self, exponent)
    }
}
