//! Numeric literals carried by `Number` nodes.
//!
//! Every numeric value entering an expression goes through [`Scalar`]: primitive integers and
//! floats convert infallibly via `From`, text converts through [`FromStr`] and fails with
//! [`ExprError::InvalidOperand`] when it does not spell a number.
use std::{fmt, str::FromStr};

use strum::EnumIs;

use crate::error::ExprError;

/// A numeric literal, either an integer or a real number.
///
/// Display
/// - Integers use the usual decimal form (`3`, `-12`).
/// - Reals use the shortest round-trip form and always carry a fractional part or an
///   exponent (`1.0`, `0.5`, `1e20`), so `Real(1.0)` and `Integer(1)` never render alike.
#[derive(Debug, Clone, Copy, PartialEq, EnumIs)]
pub enum Scalar {
    Integer(i64),
    Real(f64),
}

impl Scalar {
    /// Value as a 64-bit float. Large integers may lose precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Integer(v) => v as f64,
            Scalar::Real(v) => v,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(v) => write!(f, "{v}"),
            Scalar::Real(v) => write!(f, "{v:?}"),
        }
    }
}

impl FromStr for Scalar {
    type Err = ExprError;

    /// Read a numeric literal. Integral text yields [`Scalar::Integer`], anything else that
    /// parses as a float yields [`Scalar::Real`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(v) = text.parse::<i64>() {
            return Ok(Scalar::Integer(v));
        }
        text.parse::<f64>()
            .map(Scalar::Real)
            .map_err(|_| ExprError::InvalidOperand(format!("'{s}' is not a numeric literal")))
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident: $($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(value: $t) -> Self {
                    Scalar::$variant(value.into())
                }
            }
        )*
    };
}

impl_scalar_from!(Integer: i8, i16, i32, i64, u8, u16, u32);
impl_scalar_from!(Real: f32, f64);
