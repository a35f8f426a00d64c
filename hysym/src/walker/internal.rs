//! Scheduling state behind [`postorder_apply`](super::postorder_apply).
//!
//! Kept apart from the public module so the stack discipline and the memo table do not leak
//! into the API.
use std::collections::HashMap;

use smallvec::{SmallVec, smallvec};

use crate::expr::{Expr, NodeId};

/// Pending-node stack plus the results computed so far, keyed by node identity.
pub(super) struct PostorderState<'e, R> {
    stack: SmallVec<[&'e Expr; 16]>,
    memo: HashMap<NodeId, R>,
}

impl<'e, R> PostorderState<'e, R> {
    pub(super) fn new(root: &'e Expr) -> Self {
        Self {
            stack: smallvec![root],
            memo: HashMap::new(),
        }
    }

    /// Pop nodes until one has all of its operands resolved and return it.
    ///
    /// A node with unresolved operands goes back on the stack underneath them. Nodes that were
    /// scheduled more than once (shared children) are skipped after their first resolution.
    pub(super) fn next_ready(&mut self) -> Option<&'e Expr> {
        while let Some(node) = self.stack.pop() {
            if self.memo.contains_key(&node.id()) {
                continue;
            }

            let operands = node.operands();
            if operands.iter().all(|o| self.memo.contains_key(&o.id())) {
                return Some(node);
            }

            self.stack.push(node);
            // Reversed so the left operand is popped, hence resolved, first
            for operand in operands.iter().rev() {
                if !self.memo.contains_key(&operand.id()) {
                    self.stack.push(operand);
                }
            }
        }
        None
    }

    /// Results of `node`'s operands, in operand order.
    ///
    /// Only valid for a node returned by [`next_ready`](Self::next_ready).
    pub(super) fn operand_results(&self, node: &Expr) -> SmallVec<[&R; 2]> {
        node.operands().iter().map(|o| &self.memo[&o.id()]).collect()
    }

    pub(super) fn resolve(&mut self, node: &Expr, result: R) {
        self.memo.insert(node.id(), result);
    }

    pub(super) fn take(&mut self, node: &Expr) -> Option<R> {
        self.memo.remove(&node.id())
    }

    #[inline]
    pub(super) fn resolved_count(&self) -> usize {
        self.memo.len()
    }
}
