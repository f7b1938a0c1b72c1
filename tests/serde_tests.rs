//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use rowstep::{Matrix, Poly, PolyFraction, Rational, Step, StepInfo};

#[test]
fn rational_roundtrip() {
    let a = Rational::new(-3, 4).unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[-3,4]");
    let b: Rational = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rational_deserialize_simplifies() {
    let r: Rational = serde_json::from_str("[4,-8]").unwrap();
    assert_eq!(r, Rational::new(-1, 2).unwrap());
}

#[test]
fn rational_zero_denominator_fails() {
    let result: Result<Rational, _> = serde_json::from_str("[1,0]");
    assert!(result.is_err());
}

#[test]
fn poly_roundtrip() {
    // 3 + 2x + x^2
    let p = Poly::new(vec![3, 2, 1]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[3,2,1]");
    let q: Poly = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_empty_is_zero() {
    let p: Poly = serde_json::from_str("[]").unwrap();
    assert_eq!(p, Poly::zero());
}

#[test]
fn poly_fraction_roundtrip() {
    let f = PolyFraction::new(Poly::new(vec![1, 1]), Poly::new(vec![0, 2])).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"numerator":[1,1],"denominator":[0,2]}"#);
    let g: PolyFraction = serde_json::from_str(&json).unwrap();
    assert_eq!(f, g);
}

#[test]
fn poly_fraction_deserialize_simplifies() {
    let f: PolyFraction = serde_json::from_str(r#"{"numerator":[0,4],"denominator":[0,0,6]}"#).unwrap();
    assert_eq!(f.numerator(), &Poly::constant(2));
    assert_eq!(f.denominator(), &Poly::new(vec![0, 3]));
}

#[test]
fn poly_fraction_zero_denominator_fails() {
    let result: Result<PolyFraction, _> = serde_json::from_str(r#"{"numerator":[1],"denominator":[0,0]}"#);
    assert!(result.is_err());
}

#[test]
fn matrix_roundtrip() {
    let m = Matrix::from_rows(vec![
        vec![Rational::from(1), Rational::new(1, 2).unwrap()],
        vec![Rational::from(0), Rational::from(-3)],
    ])
    .unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"rows":2,"cols":2,"entries":[[[1,1],[1,2]],[[0,1],[-3,1]]]}"#);
    let n: Matrix<Rational> = serde_json::from_str(&json).unwrap();
    assert_eq!(m, n);
}

#[test]
fn matrix_wrong_shape_fails() {
    let json = r#"{"rows":2,"cols":2,"entries":[[[1,1],[1,2]]]}"#;
    let result: Result<Matrix<Rational>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn step_roundtrip() {
    let m = Matrix::from_rows(vec![vec![Rational::from(2)]]).unwrap();
    let step: Step<Rational> = m.generate_rref_steps().next().unwrap();
    assert_eq!(
        step.info,
        StepInfo::Scale {
            row: 0,
            factor: Rational::new(1, 2).unwrap()
        }
    );

    let json = serde_json::to_string(&step).unwrap();
    let back: Step<Rational> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, step);
}

#[test]
fn step_info_swap_format() {
    let info: StepInfo<Rational> = StepInfo::Swap { row1: 0, row2: 1 };
    let json = serde_json::to_string(&info).unwrap();
    assert_eq!(json, r#"{"Swap":{"row1":0,"row2":1}}"#);
}
