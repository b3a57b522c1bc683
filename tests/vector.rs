use bayes_regression::vector::{Vectorizable, WithBias};

use ndarray::array;

#[test]
fn test_vectorizable_implementations_agree() {
    let expected = array![1.0, 2.0, 3.0];

    let owned = array![1.0, 2.0, 3.0];
    let view = owned.view();
    let vec = vec![1.0, 2.0, 3.0];
    let fixed = [1.0, 2.0, 3.0];
    let slice: &[f64] = &vec;

    assert_eq!(owned.to_vector(), expected);
    assert_eq!(view.to_vector(), expected);
    assert_eq!(vec.to_vector(), expected);
    assert_eq!(fixed.to_vector(), expected);
    assert_eq!(slice.to_vector(), expected);

    assert_eq!(owned.dimensionality(), 3);
    assert_eq!(fixed.dimensionality(), 3);
    assert_eq!(slice.dimensionality(), 3);
}

#[test]
fn test_with_bias_appends_constant() {
    let input = WithBias([2.0, -1.0]);

    assert_eq!(input.to_vector(), array![2.0, -1.0, 1.0]);
    assert_eq!(input.dimensionality(), 3);
}

#[test]
fn test_with_bias_on_empty_input() {
    let input = WithBias(Vec::<f64>::new());

    assert_eq!(input.to_vector(), array![1.0]);
    assert_eq!(input.dimensionality(), 1);
}

#[test]
fn test_trait_object_input() {
    let input: &dyn Vectorizable = &[4.0, 5.0];

    assert_eq!(input.to_vector(), array![4.0, 5.0]);
    assert_eq!(WithBias(input).to_vector(), array![4.0, 5.0, 1.0]);
}
