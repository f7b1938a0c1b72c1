use proptest::prelude::*;

use rowstep::{gcd, Field, Matrix, Poly, PolyFraction, Rational, Ring, StepInfo};

fn arb_rational() -> impl Strategy<Value = Rational> {
    (-50i64..=50, 1i64..=50).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn arb_rational_nonzero() -> impl Strategy<Value = Rational> {
    arb_rational().prop_filter("non-zero", |r| !r.is_zero())
}

fn arb_poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec(-9i64..=9, 1..5).prop_map(Poly::new)
}

fn arb_poly_nonzero() -> impl Strategy<Value = Poly> {
    arb_poly().prop_filter("non-zero", |p| !p.is_zero())
}

fn arb_poly_fraction() -> impl Strategy<Value = PolyFraction> {
    (arb_poly(), arb_poly_nonzero()).prop_map(|(n, d)| PolyFraction::new(n, d).unwrap())
}

fn arb_matrix() -> impl Strategy<Value = Matrix<Rational>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(-5i64..=5, cols), rows).prop_map(move |grid| {
            let entries = grid
                .into_iter()
                .map(|row| row.into_iter().map(Rational::from).collect())
                .collect();
            Matrix::new(rows, cols, entries).unwrap()
        })
    })
}

// ===== Integer gcd =====

fn arb_wide_i64() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1000i64..1000,
        any::<i64>(),
        Just(i64::MIN),
        Just(i64::MAX),
        Just(i64::MIN / 2),
    ]
}

proptest! {
    #[test]
    fn gcd_divides_both(a in -1000i64..1000, b in -1000i64..1000) {
        let g = gcd(a, b);
        prop_assert!(g >= 0);
        if g != 0 {
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        } else {
            prop_assert_eq!((a, b), (0, 0));
        }
    }
}

proptest! {
    #[test]
    fn gcd_with_extremes_divides_both(a in arb_wide_i64(), b in arb_wide_i64()) {
        prop_assume!(!matches!((a, b), (0 | i64::MIN, 0 | i64::MIN)));
        let g = gcd(a, b);
        prop_assert!(g > 0);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }
}

// ===== Rational =====

proptest! {
    #[test]
    fn rational_is_in_lowest_terms(n in arb_wide_i64(), d in arb_wide_i64()) {
        prop_assume!(d != 0);
        // Sign normalization would need +2^63.
        prop_assume!(d != i64::MIN && !(n == i64::MIN && d < 0));
        let r = Rational::new(n, d).unwrap();
        prop_assert!(r.denominator() > 0);
        prop_assert_eq!(gcd(r.numerator(), r.denominator()), 1);
    }
}

proptest! {
    #[test]
    fn rational_double_inverse(r in arb_rational_nonzero()) {
        prop_assert_eq!(r.inverse().unwrap().inverse().unwrap(), r);
    }
}

proptest! {
    #[test]
    fn rational_additive_inverse(r in arb_rational()) {
        prop_assert!((r + (-r)).is_zero());
        prop_assert_eq!(r - r, Rational::zero());
    }
}

proptest! {
    #[test]
    fn rational_multiplicative_inverse(r in arb_rational_nonzero()) {
        prop_assert!((r * r.inverse().unwrap()).is_one());
    }
}

proptest! {
    #[test]
    fn rational_addition_commutative(a in arb_rational(), b in arb_rational()) {
        prop_assert_eq!(a + b, b + a);
    }
}

proptest! {
    #[test]
    fn rational_distributive(a in arb_rational(), b in arb_rational(), c in arb_rational()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }
}

proptest! {
    #[test]
    fn rational_division_roundtrip(a in arb_rational(), b in arb_rational_nonzero()) {
        prop_assert_eq!(a.try_div(&b).unwrap() * b, a);
    }
}

// ===== Poly =====

proptest! {
    #[test]
    fn poly_multiplication_commutative(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(p.clone() * q.clone(), q * p);
    }
}

proptest! {
    #[test]
    fn poly_addition_commutative(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(p.clone() + q.clone(), q + p);
    }
}

proptest! {
    #[test]
    fn poly_mul_length(p in arb_poly(), q in arb_poly()) {
        let len = p.coefficients().len() + q.coefficients().len() - 1;
        prop_assert_eq!((p * q).coefficients().len(), len);
    }
}

proptest! {
    #[test]
    fn poly_eval_is_a_homomorphism(p in arb_poly(), q in arb_poly(), x in -4i64..=4) {
        prop_assert_eq!((p.clone() * q.clone()).eval(x), p.eval(x) * q.eval(x));
        prop_assert_eq!((p.clone() + q.clone()).eval(x), p.eval(x) + q.eval(x));
    }
}

proptest! {
    #[test]
    fn poly_common_factor_divides(p in arb_poly_nonzero()) {
        let (scalar, power) = p.common_factor();
        let scalar = scalar as i64;
        let reduced = p.div_power(power).div_scalar(scalar);
        prop_assert_eq!(reduced.common_factor(), (1, 0));
        prop_assert_eq!(reduced * Poly::monomial(scalar, power), p);
    }
}

// ===== PolyFraction =====

proptest! {
    #[test]
    fn poly_fraction_simplify_idempotent(f in arb_poly_fraction()) {
        prop_assert_eq!(f.clone().simplify(), f);
    }
}

proptest! {
    #[test]
    fn poly_fraction_additive_inverse(f in arb_poly_fraction()) {
        prop_assert!((f.clone() + (-f)).is_zero());
    }
}

proptest! {
    #[test]
    fn poly_fraction_multiplicative_inverse(f in arb_poly_fraction()) {
        prop_assume!(!f.is_zero());
        prop_assert!((f.clone() * f.inverse().unwrap()).is_one());
    }
}

// ===== RREF =====

proptest! {
    #[test]
    fn rref_is_idempotent(m in arb_matrix()) {
        let once = m.compute_rref();
        prop_assert!(once.is_rref());
        prop_assert_eq!(once.compute_rref(), once);
    }
}

proptest! {
    #[test]
    fn rref_steps_replay(m in arb_matrix()) {
        let mut replay = m.clone();
        let mut last = m.clone();
        for step in m.generate_rref_steps() {
            step.info.apply(&mut replay).unwrap();
            prop_assert_eq!(&replay, &step.result);
            last = step.result;
        }
        prop_assert_eq!(last, m.compute_rref());
    }
}

proptest! {
    #[test]
    fn rref_scale_factors_are_never_one(m in arb_matrix()) {
        for step in m.generate_rref_steps() {
            if let StepInfo::Scale { factor, .. } = step.info {
                prop_assert!(!factor.is_one());
            }
        }
    }
}

proptest! {
    #[test]
    fn rref_does_not_touch_input(m in arb_matrix()) {
        let before = m.clone();
        let _ = m.generate_rref_steps().count();
        prop_assert_eq!(m, before);
    }
}

proptest! {
    #[test]
    fn zero_matrix_has_no_steps(rows in 1usize..=4, cols in 1usize..=4) {
        let m = Matrix::new(rows, cols, vec![vec![Rational::zero(); cols]; rows]).unwrap();
        prop_assert_eq!(m.generate_rref_steps().count(), 0);
    }
}

proptest! {
    #[test]
    fn out_of_bounds_access_fails(rows in 1usize..=4, cols in 1usize..=4) {
        let m = Matrix::new(rows, cols, vec![vec![Rational::one(); cols]; rows]).unwrap();
        prop_assert!(m.get(rows - 1, cols - 1).is_ok());
        prop_assert!(m.get(rows, 0).is_err());
        prop_assert!(m.get(0, cols).is_err());
    }
}
