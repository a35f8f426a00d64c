use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Discriminant of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr, Display, IntoStaticStr)]
#[repr(u8)]
pub enum ExprKind {
    // Terminals
    Number,
    Symbol,

    // Binary operators
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl ExprKind {
    /// Terminals have no operands and never need parentheses.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ExprKind::Number | ExprKind::Symbol)
    }

    /// Operator behind this kind, `None` for terminals.
    #[inline]
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            ExprKind::Number | ExprKind::Symbol => None,
            ExprKind::Add => Some(BinaryOp::Add),
            ExprKind::Sub => Some(BinaryOp::Sub),
            ExprKind::Mul => Some(BinaryOp::Mul),
            ExprKind::Div => Some(BinaryOp::Div),
            ExprKind::Pow => Some(BinaryOp::Pow),
        }
    }

    #[inline]
    pub fn precedence(self) -> Option<u8> {
        self.binary_op().map(BinaryOp::precedence)
    }
}

/// Binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Binding strength, higher binds tighter.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 3,
        }
    }

    /// Infix symbol used when rendering.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    #[inline]
    pub const fn kind(self) -> ExprKind {
        match self {
            BinaryOp::Add => ExprKind::Add,
            BinaryOp::Sub => ExprKind::Sub,
            BinaryOp::Mul => ExprKind::Mul,
            BinaryOp::Div => ExprKind::Div,
            BinaryOp::Pow => ExprKind::Pow,
        }
    }
}

impl From<BinaryOp> for ExprKind {
    fn from(op: BinaryOp) -> Self {
        op.kind()
    }
}
