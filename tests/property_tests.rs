//! Property-based tests using proptest.
//!
//! These tests verify algebraic invariants of the matrix operations.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating matrices of a fixed shape
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols)
        .prop_map(move |data| Matrix::from_slice(&data, rows, cols).expect("valid test data"))
}

// Strategy for generating matrices of arbitrary small shape
fn any_matrix_strategy() -> impl Strategy<Value = Matrix> {
    (1..=12usize, 1..=10usize).prop_flat_map(|(rows, cols)| matrix_strategy(rows, cols))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_is_commutative(a in matrix_strategy(4, 3), b in matrix_strategy(4, 3)) {
        let ab = a.add(&b).expect("same shape");
        let ba = b.add(&a).expect("same shape");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn add_preserves_shape(a in any_matrix_strategy()) {
        let sum = a.add(&a).expect("same shape");
        prop_assert_eq!(sum.shape(), a.shape());
    }

    #[test]
    fn add_of_zeros_is_identity(a in any_matrix_strategy()) {
        let (rows, cols) = a.shape();
        let z = Matrix::zeros(rows, cols).expect("positive dimensions");
        let sum = a.add(&z).expect("same shape");
        prop_assert_eq!(sum, a);
    }

    #[test]
    fn transpose_is_involution(a in any_matrix_strategy()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn transpose_swaps_shape(a in any_matrix_strategy()) {
        let (rows, cols) = a.shape();
        prop_assert_eq!(a.transpose().shape(), (cols, rows));
    }

    #[test]
    fn matmul_shape_law(
        a in matrix_strategy(3, 4),
        b in matrix_strategy(4, 5),
    ) {
        let c = a.matmul(&b).expect("inner dimensions agree");
        prop_assert_eq!(c.shape(), (3, 5));
    }

    #[test]
    fn matmul_matches_definition(
        a in matrix_strategy(3, 4),
        b in matrix_strategy(4, 2),
    ) {
        let c = a.matmul(&b).expect("inner dimensions agree");
        for i in 0..3 {
            for j in 0..2 {
                // Same accumulation order as the implementation contract:
                // single accumulator over increasing k.
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a.get(i, k) * b.get(k, j);
                }
                prop_assert_eq!(c.get(i, j), sum);
            }
        }
    }

    #[test]
    fn zeros_is_all_zero(rows in 1..=16usize, cols in 1..=16usize) {
        let m = Matrix::zeros(rows, cols).expect("positive dimensions");
        prop_assert_eq!(m.shape(), (rows, cols));
        prop_assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn from_slice_round_trips_layout(a in any_matrix_strategy()) {
        let (rows, cols) = a.shape();
        let rebuilt = Matrix::from_slice(a.as_slice(), rows, cols).expect("exact length");
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn render_never_mutates(a in any_matrix_strategy()) {
        let before = a.clone();
        let text = a.render();
        prop_assert!(!text.is_empty());
        prop_assert_eq!(a, before);
    }

    #[test]
    fn render_truncation_marks_large_matrices(
        rows in 11..=20usize,
        cols in 9..=14usize,
    ) {
        let m = Matrix::zeros(rows, cols).expect("positive dimensions");
        let text = m.render();
        prop_assert!(text.contains("..."));
        let header = format!("Matrix {rows}×{cols} (showing first 10×8)");
        prop_assert!(text.contains(&header));
    }
}
