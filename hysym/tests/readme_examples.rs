use hysym::prelude::*;

#[test]
fn lib_rs_doc_example_compiles_and_behaves() {
    let x = symbol("x").unwrap();
    let e = (&x + 1) * &x;
    assert_eq!(e.to_string(), "(x + 1) * x");

    let d = e.differentiate("x").unwrap();
    assert_eq!(d.evaluate([("x", 2.0)]), Ok(5.0));
}

#[test]
fn readme_quick_start() {
    let x = symbol("x").unwrap();
    let e = (&x + 1) * x.pow(2);
    assert_eq!(e.to_string(), "(x + 1) * x ^ 2");

    // x^3 + x^2, so 3x^2 + 2x
    let d = e.differentiate("x").unwrap();
    assert_eq!(d.evaluate([("x", 2.0)]), Ok(16.0));
}

#[test]
fn readme_power_rule() {
    let x = symbol("x").unwrap();
    let d = differentiate(&x.pow(3), "x").unwrap();
    assert_eq!(d.to_string(), "3 * x ^ (3 - 1) * 1.0");
}

#[test]
fn prelude_exposes_the_entry_points() {
    let x = symbol("x").unwrap();
    let e = combine(BinaryOp::Div, 1, &x);
    assert_eq!(e.kind(), ExprKind::Div);
    assert!(matches!(e.view(), ExprView::Div(_)));
    assert_eq!(render(&e), e.pretty_string());

    let count: Result<usize, ExprError> = postorder_apply_no_input(&e, |_, ops: &[&usize]| {
        Ok(1 + ops.iter().copied().sum::<usize>())
    });
    assert_eq!(count, Ok(3));

    let r: ExprResult<f64> = evaluate(&e, [("x", 4.0)]);
    assert_eq!(r, Ok(0.25));
    assert_eq!(Scalar::from(2), Scalar::Integer(2));
    let _ = RenderConfig::plain(80);
}
