#[cfg(test)]
mod tests {
    use crate::error::LossError;
    use crate::ops::comparison::{equal_scalar, logical_and, logical_or, where_scalar};
    use crate::ops::elementwise::{ln, neg, one_minus, powf, scale, square, sub, zip_map};
    use crate::ops::{broadcast_pair, broadcast_shapes};
    use approx::assert_abs_diff_eq;
    use ndarray::{ArrayD, IxDyn, arr1, arr2};

    fn array(shape: &[usize], data: Vec<f64>) -> ArrayD<f64> {
        ArrayD::from_shape_vec(IxDyn(shape), data).unwrap()
    }

    fn check_broadcast(lhs: &[usize], rhs: &[usize], expected: &[usize]) {
        assert_eq!(broadcast_shapes(lhs, rhs).unwrap(), expected, "{:?} vs {:?}", lhs, rhs);
        assert_eq!(broadcast_shapes(rhs, lhs).unwrap(), expected, "{:?} vs {:?}", rhs, lhs);
    }

    #[test]
    fn test_broadcast_shapes() {
        check_broadcast(&[3], &[3], &[3]);
        check_broadcast(&[2, 1], &[3], &[2, 3]);
        check_broadcast(&[1], &[4, 5], &[4, 5]);
        check_broadcast(&[], &[2, 2], &[2, 2]);
        check_broadcast(&[5, 1, 3], &[4, 1], &[5, 4, 3]);
        check_broadcast(&[0], &[1], &[0]);
    }

    #[test]
    fn test_broadcast_shapes_incompatible() {
        let err = broadcast_shapes(&[2], &[3]).unwrap_err();
        assert_eq!(
            err,
            LossError::Broadcast {
                lhs: vec![2],
                rhs: vec![3],
            }
        );
        assert!(broadcast_shapes(&[2, 3], &[3, 3]).is_err());
    }

    #[test]
    fn test_broadcast_pair_views() {
        let a = arr2(&[[1.0], [2.0]]).into_dyn();
        let b = arr1(&[10.0, 20.0, 30.0]).into_dyn();

        let (a_view, b_view) = broadcast_pair(&a, &b).unwrap();
        assert_eq!(a_view.shape(), &[2, 3]);
        assert_eq!(b_view.shape(), &[2, 3]);
        assert_eq!(a_view.iter().copied().collect::<Vec<_>>(), vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_zip_map_broadcasts() {
        let a = arr2(&[[1.0], [2.0]]).into_dyn();
        let b = arr1(&[10.0, 20.0, 30.0]).into_dyn();

        let sum = zip_map(&a, &b, |x: f64, y: f64| x + y).unwrap();
        assert_eq!(sum, array(&[2, 3], vec![11.0, 21.0, 31.0, 12.0, 22.0, 32.0]));

        let diff = sub(&b, &a).unwrap();
        assert_eq!(diff, array(&[2, 3], vec![9.0, 19.0, 29.0, 8.0, 18.0, 28.0]));
    }

    #[test]
    fn test_unary_ops() {
        let a = array(&[3], vec![0.5, 1.0, 2.0]);

        assert_eq!(square(&a), array(&[3], vec![0.25, 1.0, 4.0]));
        assert_eq!(scale(&a, 0.5), array(&[3], vec![0.25, 0.5, 1.0]));
        assert_eq!(one_minus(&a), array(&[3], vec![0.5, 0.0, -1.0]));
        assert_eq!(neg(&a), array(&[3], vec![-0.5, -1.0, -2.0]));

        let logs = ln(&a);
        assert_abs_diff_eq!(logs[[0]], -std::f64::consts::LN_2, epsilon = 1e-12);
        assert_eq!(logs[[1]], 0.0);
        assert_abs_diff_eq!(logs[[2]], std::f64::consts::LN_2, epsilon = 1e-12);
    }

    #[test]
    fn test_ln_domain_edges() {
        let a = array(&[2], vec![0.0, -1.0]);
        let logs = ln(&a);
        assert_eq!(logs[[0]], f64::NEG_INFINITY);
        assert!(logs[[1]].is_nan());
    }

    #[test]
    fn test_powf_per_element_exponent() {
        let base = array(&[3], vec![2.0, 9.0, 0.0]);
        let exponent = array(&[3], vec![3.0, 0.5, 0.0]);

        let result = powf(&base, &exponent).unwrap();
        assert_abs_diff_eq!(result[[0]], 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result[[1]], 3.0, epsilon = 1e-12);
        assert_eq!(result[[2]], 1.0);
    }

    #[test]
    fn test_masks_and_selection() {
        let a = array(&[4], vec![0.0, 1.0, 1.0, 0.5]);
        let b = array(&[4], vec![0.0, 1.0, 0.0, 0.5]);

        let a_one = equal_scalar(&a, 1.0);
        let b_one = equal_scalar(&b, 1.0);
        assert_eq!(a_one.iter().copied().collect::<Vec<_>>(), vec![false, true, true, false]);

        let both = logical_and(&a_one, &b_one).unwrap();
        assert_eq!(both.iter().copied().collect::<Vec<_>>(), vec![false, true, false, false]);

        let either = logical_or(&a_one, &b_one).unwrap();
        assert_eq!(either.iter().copied().collect::<Vec<_>>(), vec![false, true, true, false]);

        let selected = where_scalar(&both, -7.0, &a).unwrap();
        assert_eq!(selected, array(&[4], vec![0.0, -7.0, 1.0, 0.5]));
    }

    #[test]
    fn test_where_scalar_overrides_nan() {
        let values = array(&[3], vec![f64::NAN, 0.25, f64::NAN]);
        let mask = ArrayD::from_shape_vec(IxDyn(&[3]), vec![true, false, false]).unwrap();

        let selected = where_scalar(&mask, 1.0, &values).unwrap();
        assert_eq!(selected[[0]], 1.0);
        assert_eq!(selected[[1]], 0.25);
        assert!(selected[[2]].is_nan());
    }
}
