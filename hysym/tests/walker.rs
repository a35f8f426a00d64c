use std::collections::HashMap;
use std::convert::Infallible;

use hysym::error::{ExprError, ExprResult};
use hysym::expr::Expr;
use hysym::expr::func::*;
use hysym::expr::variant::ExprKind;
use hysym::expr::view::ExprView;
use hysym::walker::{postorder_apply, postorder_apply_no_input, postorder_ids};

fn sym(name: &str) -> Expr {
    Expr::symbol(name).unwrap()
}

// Integer folding that only knows about addition and multiplication.
fn fold_ring(expr: &Expr, operands: &[&i64]) -> ExprResult<i64> {
    match expr.view() {
        ExprView::Number(value) => Ok(value.to_f64() as i64),
        ExprView::Add(_) => Ok(operands[0] + operands[1]),
        ExprView::Mul(_) => Ok(operands[0] * operands[1]),
        _ => Err(ExprError::unsupported(expr, "integer folding")),
    }
}

#[test]
fn shared_subexpression_is_visited_once() {
    let s = number(2) + 3;
    let root = &s * &s;

    let mut visits: HashMap<_, usize> = HashMap::new();
    let value = postorder_apply_no_input(&root, |node, operands: &[&i64]| {
        *visits.entry(node.id()).or_default() += 1;
        fold_ring(node, operands)
    });

    assert_eq!(value, Ok(25));
    assert_eq!(visits.len(), 4);
    assert!(visits.values().all(|&n| n == 1));
    assert_eq!(visits[&s.id()], 1);
}

#[test]
fn shared_results_are_handed_to_every_parent() {
    let x = sym("x");
    let a = &x + 1;
    let b = &x * 2;
    let root = &a * &b;

    // Count leaves of the unfolded tree
    let leaves: Result<usize, Infallible> = postorder_apply_no_input(&root, |node, ops: &[&usize]| {
        Ok(if node.is_terminal() {
            1
        } else {
            ops.iter().copied().sum::<usize>()
        })
    });
    assert_eq!(leaves, Ok(4));
    assert_eq!(root.node_count(), 6);
}

#[test]
fn operands_are_resolved_left_to_right_before_parent() {
    let (a, b, c) = (sym("a"), sym("b"), sym("c"));
    let sum = &a + &b;
    let root = &sum * &c;

    let order = postorder_ids(&root);
    assert_eq!(
        order,
        vec![a.id(), b.id(), sum.id(), c.id(), root.id()]
    );
}

#[test]
fn visitor_sees_operand_results_in_order() {
    let e = sub(10, div(8, 2));
    let Ok(value) = postorder_apply_no_input(&e, |node, ops: &[&f64]| {
        Ok::<_, Infallible>(match node.view() {
            ExprView::Number(v) => v.to_f64(),
            ExprView::Sub(_) => ops[0] - ops[1],
            ExprView::Div(_) => ops[0] / ops[1],
            _ => unreachable!(),
        })
    });
    assert_eq!(value, 6.0);
}

#[test]
fn input_is_threaded_to_every_visit() {
    let e = sym("x") * sym("y") + sym("x");
    let names = postorder_apply(&e, "x", |node, ops: &[&usize], target| {
        Ok::<_, Infallible>(match node.as_symbol() {
            Some(name) if name == *target => 1,
            Some(_) => 0,
            None => ops.iter().copied().sum(),
        })
    });
    assert_eq!(names, Ok(2));
}

#[test]
fn visitor_errors_abort_the_traversal() {
    let e = (number(1) + number(2).pow(3)) * 4;

    let mut visits = 0usize;
    let result = postorder_apply_no_input(&e, |node, ops: &[&i64]| {
        visits += 1;
        fold_ring(node, ops)
    });

    assert_eq!(
        result,
        Err(ExprError::UnsupportedNode {
            kind: ExprKind::Pow,
            pass: "integer folding",
        })
    );
    // 1, 2 and 3 come before the failing Pow; nothing runs after it
    assert_eq!(visits, 4);
    assert_eq!(
        result.unwrap_err().to_string(),
        "Cannot process a Pow node during integer folding"
    );
}

#[test]
fn terminal_root() {
    let n = number(9);
    assert_eq!(postorder_ids(&n), vec![n.id()]);
    assert_eq!(n.node_count(), 1);
}

#[test]
fn very_deep_chain_is_traversed_iteratively() {
    const DEPTH: usize = 100_000;

    let mut e = sym("x");
    for _ in 0..DEPTH {
        e = e + 1;
    }

    assert_eq!(e.node_count(), 2 * DEPTH + 1);
    let ids = postorder_ids(&e);
    assert_eq!(ids.last(), Some(&e.id()));

    let copy = {
        let mut c = sym("x");
        for _ in 0..DEPTH {
            c = c + 1;
        }
        c
    };
    assert_eq!(e, copy);
    drop(copy);
    drop(e);
}
