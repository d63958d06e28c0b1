use ndarray::{Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use vecmat::{
    generate_vector_with, generate_with, multiply, Matrix, StridedPartition, VecmatError,
};

fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (j, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < tol,
            "column {} differs: {} != {}",
            j,
            a,
            e
        );
    }
}

#[test]
fn test_two_by_two_scenario() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    for workers in 1..=3 {
        let result = multiply(&m, &[1.0, 1.0], workers).unwrap();
        assert_eq!(result, vec![4.0, 6.0], "workers = {}", workers);
    }
}

#[test]
fn test_all_ones_six_by_six() {
    let m = Matrix::new(Array2::<f64>::ones((6, 6)));
    let v = vec![1.0; 6];
    for workers in 1..=6 {
        let result = m.multiply_by_vector_left(&v, workers).unwrap();
        assert_eq!(result, vec![6.0; 6], "workers = {}", workers);
    }
}

#[test]
fn test_matches_ndarray_dot() {
    let mut rng = StdRng::seed_from_u64(42);
    let (rows, cols) = (37, 53);
    let data = Array2::from_shape_fn((rows, cols), |_| rng.random_range(-1.0..1.0));
    let v: Vec<f64> = (0..rows).map(|_| rng.random_range(-1.0..1.0)).collect();

    let expected = Array1::from(v.clone()).dot(&data).to_vec();
    let m = Matrix::new(data);

    for workers in [1, 2, 3, 4, 8, cols, cols + 5] {
        let result = m.multiply_by_vector_left(&v, workers).unwrap();
        assert_all_close(&result, &expected, 1e-10);
    }
}

#[test]
fn test_worker_count_invariance() {
    let mut rng = StdRng::seed_from_u64(7);
    let m: Matrix<f64> = generate_with(&mut rng, 20, 31);
    let v: Vec<f64> = generate_vector_with(&mut rng, 20);

    let baseline = m.multiply_by_vector_left(&v, 1).unwrap();
    let four = m.multiply_by_vector_left(&v, 4).unwrap();
    let per_column = m.multiply_by_vector_left(&v, m.cols()).unwrap();

    assert_all_close(&four, &baseline, 1e-9);
    assert_all_close(&per_column, &baseline, 1e-9);
}

#[test]
fn test_repeated_calls_on_same_inputs() {
    let mut rng = StdRng::seed_from_u64(3);
    let m: Matrix<f64> = generate_with(&mut rng, 12, 12);
    let v: Vec<f64> = generate_vector_with(&mut rng, 12);

    let first = m.multiply_by_vector_left(&v, 3).unwrap();
    for _ in 0..5 {
        assert_eq!(m.multiply_by_vector_left(&v, 3).unwrap(), first);
    }
}

#[test]
fn test_dimension_mismatch_is_invalid_argument() {
    let m = Matrix::new(Array2::<f64>::zeros((3, 4)));
    for bad_len in [0, 2, 4] {
        let v = vec![1.0; bad_len];
        match multiply(&m, &v, 2) {
            Err(VecmatError::InvalidArgument { message }) => {
                assert!(message.contains("vector length must equal matrix row count"));
            }
            other => panic!("expected InvalidArgument for length {}, got {:?}", bad_len, other),
        }
    }
}

#[test]
fn test_zero_workers_is_invalid_argument() {
    let m = Matrix::new(Array2::<f64>::zeros((2, 2)));
    assert!(matches!(
        multiply(&m, &[1.0, 1.0], 0),
        Err(VecmatError::InvalidArgument { .. })
    ));
}

#[test]
fn test_zero_columns_yields_empty_result() {
    let m = Matrix::new(Array2::<f64>::zeros((4, 0)));
    let result = multiply(&m, &[1.0, 2.0, 3.0, 4.0], 3).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_zero_rows_yields_zeros() {
    let m = Matrix::new(Array2::<f64>::zeros((0, 5)));
    let result = multiply(&m, &[], 2).unwrap();
    assert_eq!(result, vec![0.0; 5]);
}

#[test]
fn test_single_row_is_elementwise_product() {
    let m = Matrix::from_rows(vec![vec![1.5, -2.0, 3.0, 0.0, 7.0]]).unwrap();
    let result = multiply(&m, &[2.0], 4).unwrap();
    assert_eq!(result, vec![3.0, -4.0, 6.0, 0.0, 14.0]);
}

#[test]
fn test_partition_covers_every_column_once() {
    for cols in [0, 1, 5, 6, 17, 64] {
        for workers in 1..=cols + 2 {
            let p = StridedPartition::new(cols, workers).unwrap();
            let mut all: Vec<usize> = (0..workers).flat_map(|w| p.columns(w)).collect();
            all.sort_unstable();
            assert_eq!(all, (0..cols).collect::<Vec<_>>(), "cols={cols} workers={workers}");
        }
    }
}

#[test]
fn test_worker_count_far_above_column_count() {
    let m = Matrix::new(Array2::<f64>::ones((2, 3)));
    for workers in [100, 10_000, usize::MAX] {
        let result = multiply(&m, &[1.0, 1.0], workers).unwrap();
        assert_eq!(result, vec![2.0; 3], "workers = {}", workers);
    }
}
