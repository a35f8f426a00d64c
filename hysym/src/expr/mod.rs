//! Expression graphs: node model and construction.
//!
//! Role
//! - [`Expr`] is a cheap, clonable handle to an immutable node. Parents share their children, so
//!   a sub-expression used twice is stored once and the whole value is a DAG rather than a tree.
//! - Builders: [`Expr::number`], [`Expr::symbol`], [`Expr::combine`], the operator overloads in
//!   [`ops`] and the free functions in [`func`].
//! - Every node gets a process-unique [`NodeId`] when it is built. Traversals memoize on that id,
//!   never on the structure of the node.
//!
//! Parenthesization
//! - When an operator node is built, each operand edge is flagged if the operand is an operator
//!   binding strictly looser than the new one. The flag lives on the parent, so a child shared by
//!   parents of different precedence renders correctly under each of them.
//!
//! Example
//! ```
//! use hysym::expr::{Expr, variant::ExprKind};
//!
//! let x = Expr::symbol("x").unwrap();
//! let e = (&x + 1) * 3;
//! assert_eq!(e.kind(), ExprKind::Mul);
//! assert!(e.needs_parentheses(0));
//! assert_eq!(e.to_string(), "(x + 1) * 3");
//! ```
pub mod func;
pub mod ops;
pub mod pretty;
pub mod variant;
pub mod view;

use std::sync::{
    Arc, LazyLock,
    atomic::{AtomicU64, Ordering},
};

use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::error::{ExprError, ExprResult};
use crate::expr::variant::{BinaryOp, ExprKind};
use crate::expr::view::ExprView;
use crate::scalar::Scalar;
use crate::walker::postorder_apply_no_input;

static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stand-in operand swapped into nodes while they are torn down.
static PLACEHOLDER: LazyLock<Expr> = LazyLock::new(|| Expr::number(0));

/// Stable identity of an expression node.
///
/// Ids are unique for the lifetime of the process, two nodes built separately never share one,
/// even when they are structurally equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        NodeId(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id.
    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

struct ExprNode {
    id: NodeId,
    view: ExprView,
    /// One flag per operand edge, `false` for terminals.
    parens: [bool; 2],
}

impl Drop for ExprNode {
    /// Tear down uniquely owned descendants with an explicit work list, so dropping a very deep
    /// expression does not recurse once per level.
    fn drop(&mut self) {
        let placeholder = &*PLACEHOLDER;
        if self
            .view
            .operands()
            .first()
            .is_none_or(|first| first.same_node(placeholder))
        {
            return;
        }

        let mut pending: SmallVec<[Expr; 8]> = SmallVec::new();
        pending.extend(self.view.take_operands(placeholder).into_iter().flatten());

        while let Some(child) = pending.pop() {
            // Shared children are still alive elsewhere and only lose one reference.
            if let Some(mut node) = Arc::into_inner(child.0) {
                pending.extend(node.view.take_operands(placeholder).into_iter().flatten());
            }
        }
    }
}

/// Shared handle to an immutable expression node.
///
/// Equality semantics
/// - `==` compares structure: same kinds, same literal values and names, pairwise-equal operands.
///   Two nodes holding the same value but built separately are equal.
/// - [`Expr::same_node`] compares identity, which is what traversals use.
#[derive(Clone)]
pub struct Expr(Arc<ExprNode>);

impl Expr {
    fn from_parts(view: ExprView, parens: [bool; 2]) -> Self {
        Expr(Arc::new(ExprNode {
            id: NodeId::next(),
            view,
            parens,
        }))
    }

    /// Build a `Number` terminal from any numeric literal.
    pub fn number(value: impl Into<Scalar>) -> Self {
        Self::from_parts(ExprView::Number(value.into()), [false; 2])
    }

    /// Build a `Symbol` terminal.
    ///
    /// The name must be non-empty and must not contain whitespace, parentheses or operator
    /// characters, since those would make the rendered form ambiguous.
    pub fn symbol(name: impl Into<String>) -> ExprResult<Self> {
        let name = name.into();
        validate_symbol_name(&name)?;
        Ok(Self::from_parts(ExprView::Symbol(name), [false; 2]))
    }

    /// Combine two operands under a binary operator.
    ///
    /// Numeric literals on either side are coerced to `Number` nodes. Each operand edge is
    /// flagged for parentheses when that operand is an operator of strictly lower precedence
    /// than `op`.
    pub fn combine(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        let operands = [lhs.into(), rhs.into()];
        let parens = [
            operands[0].binds_looser_than(op),
            operands[1].binds_looser_than(op),
        ];
        let view = match op {
            BinaryOp::Add => ExprView::Add(operands),
            BinaryOp::Sub => ExprView::Sub(operands),
            BinaryOp::Mul => ExprView::Mul(operands),
            BinaryOp::Div => ExprView::Div(operands),
            BinaryOp::Pow => ExprView::Pow(operands),
        };
        let expr = Self::from_parts(view, parens);
        trace!("built {op} node {:?} (parens: {parens:?})", expr.id());
        expr
    }

    #[inline]
    fn binds_looser_than(&self, op: BinaryOp) -> bool {
        self.precedence()
            .is_some_and(|precedence| precedence < op.precedence())
    }

    /// Identity of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.0.id
    }

    /// Variant and payload of this node.
    #[inline]
    pub fn view(&self) -> &ExprView {
        &self.0.view
    }

    #[inline]
    pub fn kind(&self) -> ExprKind {
        self.0.view.kind()
    }

    /// Ordered operands: empty for terminals, `[lhs, rhs]` for operators.
    #[inline]
    pub fn operands(&self) -> &[Expr] {
        self.0.view.operands()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }

    /// Precedence of the operator, `None` for terminals.
    #[inline]
    pub fn precedence(&self) -> Option<u8> {
        self.kind().precedence()
    }

    /// Infix symbol of the operator, `None` for terminals.
    #[inline]
    pub fn operator_symbol(&self) -> Option<&'static str> {
        self.kind().binary_op().map(BinaryOp::symbol)
    }

    /// Whether operand `index` is wrapped in parentheses when this node is rendered.
    /// Always `false` for terminals and out-of-range indices.
    #[inline]
    pub fn needs_parentheses(&self, index: usize) -> bool {
        self.0.parens.get(index).copied().unwrap_or(false)
    }

    /// Literal value of a `Number` node.
    #[inline]
    pub fn as_number(&self) -> Option<Scalar> {
        match self.view() {
            ExprView::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Name of a `Symbol` node.
    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self.view() {
            ExprView::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Identity comparison: `true` only if both handles point at the very same node.
    #[inline]
    pub fn same_node(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of distinct nodes reachable from this one. Shared sub-expressions count once.
    pub fn node_count(&self) -> usize {
        let mut count = 0usize;
        let Ok(()) = postorder_apply_no_input(self, |_, _: &[&()]| {
            count += 1;
            Ok::<_, std::convert::Infallible>(())
        });
        count
    }
}

fn validate_symbol_name(name: &str) -> ExprResult<()> {
    if name.is_empty() {
        return Err(ExprError::InvalidOperand(
            "symbol name must not be empty".to_string(),
        ));
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || "()+-*/^".contains(*c))
    {
        return Err(ExprError::InvalidOperand(format!(
            "symbol name '{name}' contains reserved character {c:?}"
        )));
    }
    Ok(())
}

impl PartialEq for Expr {
    /// Structural comparison. Expect O(n) in the number of nodes in the worst case.
    fn eq(&self, other: &Self) -> bool {
        let mut stack: SmallVec<[(&Expr, &Expr); 12]> = smallvec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            // Quick path: the very same node
            if a.same_node(b) {
                continue;
            }

            match (a.view(), b.view()) {
                (ExprView::Number(x), ExprView::Number(y)) if x == y => {}
                (ExprView::Symbol(x), ExprView::Symbol(y)) if x == y => {}
                _ if a.kind() == b.kind() && !a.is_terminal() => {
                    stack.extend(a.operands().iter().zip(b.operands()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl From<&Expr> for Expr {
    #[inline]
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl From<Scalar> for Expr {
    #[inline]
    fn from(value: Scalar) -> Self {
        Expr::number(value)
    }
}

macro_rules! impl_expr_from_literal {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Expr {
                #[inline]
                fn from(value: $t) -> Self {
                    Expr::number(value)
                }
            }
        )*
    };
}

impl_expr_from_literal!(i8, i16, i32, i64, u8, u16, u32, f32, f64);
