use std::collections::HashMap;

use hysym::diff::differentiate;
use hysym::error::ExprError;
use hysym::eval::evaluate;
use hysym::expr::Expr;
use hysym::expr::func::*;

fn x() -> Expr {
    Expr::symbol("x").unwrap()
}

fn at(e: &Expr, value: f64) -> f64 {
    evaluate(e, [("x", value)]).unwrap()
}

#[test]
fn terminals() {
    assert_eq!(differentiate(&x(), "x").unwrap().to_string(), "1.0");
    assert_eq!(differentiate(&x(), "y").unwrap().to_string(), "0.0");
    assert_eq!(differentiate(&number(5), "x").unwrap().to_string(), "0.0");
    assert_eq!(differentiate(&number(2.5), "x").unwrap().to_string(), "0.0");
}

#[test]
fn constants_are_folded_in_sums_and_differences() {
    // Every leaf derivative is a constant, so the whole result is one number
    let e = &x() + 3 - Expr::symbol("y").unwrap();
    let d = differentiate(&e, "x").unwrap();
    assert_eq!(d.to_string(), "1.0");
    assert!(d.is_terminal());
}

#[test]
fn product_rule() {
    let e = x() * x() + 3;
    let d = differentiate(&e, "x").unwrap();
    assert_eq!(d.to_string(), "1.0 * x + 1.0 * x + 0.0");
    assert_eq!(at(&d, 5.0), 10.0);
    assert_eq!(at(&d, -1.5), -3.0);
}

#[test]
fn quotient_rule() {
    let d = differentiate(&(x() / 2), "x").unwrap();
    assert_eq!(d.to_string(), "(1.0 * 2 - x * 0.0) / 2 ^ 2");
    for value in [-3.0, 0.0, 1.0, 42.0] {
        assert_eq!(at(&d, value), 0.5);
    }

    // d/dx 1/x = -1/x^2
    let d = differentiate(&div(1, x()), "x").unwrap();
    assert_eq!(at(&d, 2.0), -0.25);
}

#[test]
fn power_rule() {
    let d = differentiate(&x().pow(3), "x").unwrap();
    assert_eq!(d.to_string(), "3 * x ^ (3 - 1) * 1.0");
    assert_eq!(at(&d, 2.0), 12.0);

    // The trailing factor stays 1.0 whatever the base
    let d = differentiate(&(2i32 * x() + 1).pow(2), "x").unwrap();
    assert_eq!(d.to_string(), "2 * (2 * x + 1) ^ (2 - 1) * 1.0");
    assert_eq!(at(&d, 1.0), 6.0);

    let y = Expr::symbol("y").unwrap();
    let d = differentiate(&y.pow(3), "x").unwrap();
    assert_eq!(d.to_string(), "3 * y ^ (3 - 1) * 1.0");
}

#[test]
fn other_variables_are_constants() {
    let y = Expr::symbol("y").unwrap();
    let e = &y * x() * x();
    let d = differentiate(&e, "x").unwrap();

    let bindings = HashMap::from([("x", 3.0), ("y", 2.0)]);
    assert_eq!(evaluate(&d, &bindings), Ok(12.0));

    let dy = differentiate(&e, "y").unwrap();
    assert_eq!(evaluate(&dy, &bindings), Ok(9.0));
}

#[test]
fn input_is_left_untouched() {
    let e = (x() + 1) * x().pow(2);
    let before = e.to_string();
    let count = e.node_count();

    let d1 = differentiate(&e, "x").unwrap();
    let d2 = e.differentiate("x").unwrap();

    assert_eq!(e.to_string(), before);
    assert_eq!(e.node_count(), count);
    assert_eq!(d1, d2);
    assert!(!d1.same_node(&d2));
}

#[test]
fn derivative_shares_the_original_operands() {
    let a = x() + 1;
    let e = &a * &a;
    let d = differentiate(&e, "x").unwrap();
    // 1.0 * a + 1.0 * a
    let lhs = &d.operands()[0];
    assert!(lhs.operands()[1].same_node(&a));
    assert_eq!(at(&d, 2.0), 6.0);
}

#[test]
fn unknown_variable_derives_to_zero() {
    assert_eq!(differentiate(&x(), "").unwrap().to_string(), "0.0");

    let d = differentiate(&(x() * x() + 3), "").unwrap();
    assert_eq!(at(&d, 5.0), 0.0);
    let d = differentiate(&(x() / 2), "z").unwrap();
    assert_eq!(at(&d, 5.0), 0.0);
}

#[test]
fn evaluation_errors() {
    let e = x() + Expr::symbol("z").unwrap();
    assert_eq!(
        evaluate(&e, [("x", 1.0)]),
        Err(ExprError::UnboundSymbol("z".to_string()))
    );

    let owned: HashMap<String, f64> = HashMap::from([("x".to_string(), 1.0)]);
    assert_eq!(evaluate(&(x() / 0), &owned), Ok(f64::INFINITY));
    assert_eq!(e.evaluate([("x", 1.0), ("z", 2.0)]), Ok(3.0));
}

#[test]
fn very_deep_expression_is_differentiated_and_evaluated() {
    const DEPTH: usize = 100_000;

    // x * x * ... * x, that is x^(DEPTH + 1)
    let x = x();
    let mut e = x.clone();
    for _ in 0..DEPTH {
        e = e * &x;
    }

    let d = differentiate(&e, "x").unwrap();
    assert_eq!(at(&e, 1.0), 1.0);
    assert_eq!(at(&d, 1.0), (DEPTH + 1) as f64);

    drop(e);
    drop(d);
}
