//! Iterative postorder folds over expression graphs.
//!
//! [`postorder_apply`] evaluates a caller-supplied function bottom-up over every node reachable
//! from a root. The function receives the node, the results already computed for its operands
//! and an extra input threaded through the whole traversal.
//!
//! Guarantees
//! - Each distinct node is visited exactly once. Results are memoized by [`NodeId`], so a
//!   sub-expression shared by several parents (or used twice by the same parent) is computed
//!   once and its result handed to every parent.
//! - A node is visited only after all its operands; left operands are resolved before right ones.
//! - No recursion: an explicit stack drives the traversal, so depth is bounded by memory, not by
//!   the call stack.
//! - The first error returned by the visitor aborts the traversal and is returned unchanged;
//!   partial results are dropped.
//!
//! Performance
//! - Time: O(n) visits over the distinct nodes, each doing O(1) memo lookups per operand.
//! - Memory: one memo entry per distinct node, plus the pending stack.
//!
//! Example: count how often the visitor runs on a shared sub-expression
//! ```
//! use hysym::expr::Expr;
//! use hysym::walker::postorder_apply_no_input;
//!
//! let s = Expr::number(2) + 3;
//! let root = &s * &s;
//!
//! let mut visits = 0usize;
//! let nodes: Result<usize, ()> = postorder_apply_no_input(&root, |_, operands: &[&usize]| {
//!     visits += 1;
//!     Ok(1 + operands.iter().copied().sum::<usize>())
//! });
//! // Root, s, 2 and 3 are each visited once; the unfolded tree would have 7 nodes.
//! assert_eq!(visits, 4);
//! assert_eq!(nodes, Ok(7));
//! ```
mod internal;

use log::trace;

use crate::expr::{Expr, NodeId};
use crate::walker::internal::PostorderState;

/// Fold `root` bottom-up with `visitor`, passing `input` to every call.
///
/// The visitor is called once per distinct node with the node itself and references to the
/// results of its operands (empty for terminals, `[lhs, rhs]` for operators). The result
/// computed for `root` is returned.
///
/// Errors raised by the visitor stop the traversal immediately and are propagated as-is.
pub fn postorder_apply<R, E, I, F>(root: &Expr, input: I, mut visitor: F) -> Result<R, E>
where
    F: FnMut(&Expr, &[&R], &I) -> Result<R, E>,
{
    let mut state = PostorderState::new(root);

    while let Some(node) = state.next_ready() {
        let result = {
            let operands = state.operand_results(node);
            visitor(node, operands.as_slice(), &input)?
        };
        state.resolve(node, result);
    }

    trace!(
        "postorder traversal from {:?} resolved {} distinct nodes",
        root.id(),
        state.resolved_count()
    );
    Ok(state
        .take(root)
        .expect("the root is resolved once the pending stack drains"))
}

/// Convenience when no input needs to be threaded.
#[inline]
pub fn postorder_apply_no_input<R, E, F>(root: &Expr, mut visitor: F) -> Result<R, E>
where
    F: FnMut(&Expr, &[&R]) -> Result<R, E>,
{
    postorder_apply(root, (), |node, operands, _| visitor(node, operands))
}

/// Identity of every distinct node reachable from `root`, in the order they are visited.
pub fn postorder_ids(root: &Expr) -> Vec<NodeId> {
    let mut order = Vec::new();
    let Ok(()) = postorder_apply_no_input(root, |node, _: &[&()]| {
        order.push(node.id());
        Ok::<_, std::convert::Infallible>(())
    });
    order
}
