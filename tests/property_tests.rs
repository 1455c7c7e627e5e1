//! Property-based tests using proptest.
//!
//! These tests verify the algebraic invariants of the fixed-size containers.

use lineal::prelude::*;
use proptest::prelude::*;

// Strategy for generating f32 vectors of a compile-time length
fn vector_strategy<const N: usize>() -> impl Strategy<Value = Vector<f32, N>> {
    proptest::collection::vec(-100.0f32..100.0, N)
        .prop_map(|data| Vector::from_slice(&data).expect("Test data should be valid"))
}

// Strategy for generating f64 vectors (tight accumulation-error bounds)
fn vector_f64_strategy<const N: usize>() -> impl Strategy<Value = Vector<f64, N>> {
    proptest::collection::vec(-100.0f64..100.0, N)
        .prop_map(|data| Vector::from_slice(&data).expect("Test data should be valid"))
}

// Strategy for generating f32 matrices of a compile-time shape
fn matrix_strategy<const N: usize, const M: usize>() -> impl Strategy<Value = Matrix<f32, N, M>> {
    proptest::collection::vec(-100.0f32..100.0, N * M)
        .prop_map(|data| Matrix::from_slice(&data).expect("Test data should be valid"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Vector properties
    #[test]
    fn vector_addition_is_commutative(a in vector_strategy::<10>(), b in vector_strategy::<10>()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn vector_addition_identity(v in vector_strategy::<10>()) {
        prop_assert_eq!(v + Vector::zeros(), v);
    }

    #[test]
    fn vector_dot_is_commutative(a in vector_strategy::<10>(), b in vector_strategy::<10>()) {
        let dot_ab = a.dot(&b);
        let dot_ba = b.dot(&a);
        prop_assert!((dot_ab - dot_ba).abs() < 1e-4);
    }

    #[test]
    fn vector_dot_scales_linearly(a in vector_f64_strategy::<10>(), b in vector_f64_strategy::<10>(), k in -10.0f64..10.0) {
        let scaled = a.dot(&(b * k));
        let expected = k * a.dot(&b);
        prop_assert!((scaled - expected).abs() < 1e-6);
    }

    #[test]
    fn vector_dot_with_ones_is_the_element_sum(v in vector_f64_strategy::<10>()) {
        prop_assert!((v.dot(&Vector::ones()) - v.sum()).abs() < 1e-9);
    }

    #[test]
    fn vector_norm_is_non_negative(v in vector_strategy::<10>()) {
        prop_assert!(v.norm() >= 0.0);
    }

    #[test]
    fn vector_negation_is_an_involution(v in vector_strategy::<10>()) {
        prop_assert_eq!(-(-v), v);
    }

    #[test]
    fn broadcast_fill_reaches_every_element(c in -1.0e6f64..1.0e6) {
        let v = Vector::<f64, 17>::full(c);
        prop_assert!(v.iter().all(|&x| x == c));
        let m = Matrix::<f64, 5, 3>::full(c);
        prop_assert!(m.iter().all(|&x| x == c));
    }

    // Tolerance-based equality
    #[test]
    fn equality_accepts_perturbations_within_tolerance(
        v in vector_f64_strategy::<10>(),
        delta in -9.0e-4f64..9.0e-4,
    ) {
        let w = Vector::from_fn(|i| v[i] + delta);
        prop_assert_eq!(v, w);
    }

    #[test]
    fn equality_rejects_perturbations_beyond_tolerance(
        v in vector_f64_strategy::<10>(),
        delta in 2.0e-3f64..1.0,
        index in 0usize..10,
    ) {
        let mut w = v;
        w[index] += delta;
        prop_assert_ne!(v, w);
    }

    // Matrix properties
    #[test]
    fn matrix_addition_is_commutative(a in matrix_strategy::<4, 3>(), b in matrix_strategy::<4, 3>()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn matrix_addition_identity(m in matrix_strategy::<4, 3>()) {
        prop_assert_eq!(m + Matrix::zeros(), m);
    }

    #[test]
    fn matrix_shape_preserved_by_add(a in matrix_strategy::<4, 3>(), b in matrix_strategy::<4, 3>()) {
        let c = a + b;
        prop_assert_eq!(c.shape(), (3, 4));
    }

    #[test]
    fn matrix_transpose_is_an_involution(m in matrix_strategy::<5, 3>()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn pair_index_matches_flat_offset(m in matrix_strategy::<6, 4>()) {
        for j in 0..4 {
            for i in 0..6 {
                prop_assert_eq!(m[(i, j)], m[i + 6 * j]);
            }
        }
    }

    #[test]
    fn matrix_vector_product_is_one_dot_per_row(m in matrix_strategy::<5, 4>(), v in vector_strategy::<5>()) {
        let p = m * v;
        for j in 0..4 {
            prop_assert!((p[j] - m.row(j).dot(&v)).abs() < 1e-4);
        }
    }

    #[test]
    fn vector_matrix_product_is_one_dot_per_column(m in matrix_strategy::<5, 4>(), v in vector_strategy::<4>()) {
        let p = v * m;
        for i in 0..5 {
            prop_assert!((p[i] - m.column(i).dot(&v)).abs() < 1e-4);
        }
    }

    #[test]
    fn product_orientations_agree_through_transpose(
        m in matrix_strategy::<4, 3>(),
        v in vector_strategy::<3>(),
    ) {
        // Same accumulation order on both sides, so this holds exactly.
        prop_assert_eq!(v * m, m.transpose() * v);
    }
}
