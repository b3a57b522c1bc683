use std::f64::consts::PI;

use bayes_regression::distribution::{
    ClosedFormDistribution, Distribution, MultivariateGaussian, UnivariateGaussian,
};
use bayes_regression::error::RegressionError;

use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_univariate_gaussian_new() {
    let gaussian = UnivariateGaussian::new(1.5, 4.0).unwrap();

    assert_eq!(gaussian.mean(), 1.5);
    assert_eq!(gaussian.variance(), 4.0);
    assert_eq!(gaussian.std_dev(), 2.0);
    assert_eq!(gaussian.parameters(), array![1.5, 4.0]);
}

#[test]
fn test_univariate_gaussian_invalid_parameters() {
    assert!(matches!(
        UnivariateGaussian::new(0.0, 0.0),
        Err(RegressionError::InvalidParameter { name: "variance", .. })
    ));
    assert!(matches!(
        UnivariateGaussian::new(0.0, -1.0),
        Err(RegressionError::InvalidParameter { name: "variance", .. })
    ));
    assert!(matches!(
        UnivariateGaussian::new(0.0, f64::INFINITY),
        Err(RegressionError::InvalidParameter { name: "variance", .. })
    ));
    assert!(matches!(
        UnivariateGaussian::new(f64::NAN, 1.0),
        Err(RegressionError::InvalidParameter { name: "mean", .. })
    ));
}

#[test]
fn test_univariate_gaussian_density() {
    let standard = UnivariateGaussian::standard();
    let expected = -0.5 * (2.0 * PI).ln();
    assert!((standard.log_pdf(0.0) - expected).abs() < 1e-12);
    assert!((standard.pdf(0.0) - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12);

    // N(1, 4) at x = 3: -0.5 * (ln(8π) + 4 / 4)
    let gaussian = UnivariateGaussian::new(1.0, 4.0).unwrap();
    let expected = -0.5 * ((8.0 * PI).ln() + 1.0);
    assert!((gaussian.log_pdf(3.0) - expected).abs() < 1e-12);

    // Symmetric around the mean
    assert!((gaussian.log_pdf(-1.0) - gaussian.log_pdf(3.0)).abs() < 1e-12);
}

#[test]
fn test_univariate_gaussian_sampling() {
    let gaussian = UnivariateGaussian::new(3.0, 0.25).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let samples = gaussian.sample_n(&mut rng, 20_000);
    assert_eq!(samples.len(), 20_000);

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

    assert!((mean - 3.0).abs() < 0.02);
    assert!((variance - 0.25).abs() < 0.02);
}

#[test]
fn test_univariate_gaussian_sampling_is_reproducible() {
    let gaussian = UnivariateGaussian::new(-2.0, 1.0).unwrap();

    let first = gaussian.sample_n(&mut StdRng::seed_from_u64(7), 5);
    let second = gaussian.sample_n(&mut StdRng::seed_from_u64(7), 5);
    assert_eq!(first, second);
}

#[test]
fn test_multivariate_gaussian_new() {
    let mean = array![1.0, -1.0];
    let covariance = array![[2.0, 0.5], [0.5, 1.0]];
    let gaussian = MultivariateGaussian::new(mean.clone(), covariance.clone()).unwrap();

    assert_eq!(gaussian.dimensionality(), 2);
    assert_eq!(gaussian.mean(), mean);
    assert_eq!(gaussian.covariance(), &covariance);
    assert_eq!(gaussian.parameters(), array![1.0, -1.0, 2.0, 0.5, 0.5, 1.0]);
}

#[test]
fn test_multivariate_gaussian_dimension_mismatch() {
    let result = MultivariateGaussian::new(array![0.0, 0.0, 0.0], Array2::eye(2));

    assert_eq!(
        result,
        Err(RegressionError::DimensionMismatch {
            expected: 3,
            actual: 2,
            context: "covariance rows",
        })
    );
}

#[test]
fn test_multivariate_gaussian_rejects_invalid_covariance() {
    // Not symmetric
    let asymmetric = MultivariateGaussian::new(array![0.0, 0.0], array![[1.0, 0.5], [0.0, 1.0]]);
    assert!(matches!(
        asymmetric,
        Err(RegressionError::NotPositiveDefinite { .. })
    ));

    // Symmetric but indefinite
    let indefinite = MultivariateGaussian::new(array![0.0, 0.0], array![[1.0, 2.0], [2.0, 1.0]]);
    assert!(matches!(
        indefinite,
        Err(RegressionError::NotPositiveDefinite { .. })
    ));

    // Non-positive isotropic variance
    assert!(matches!(
        MultivariateGaussian::isotropic(array![0.0], 0.0),
        Err(RegressionError::InvalidParameter { name: "variance", .. })
    ));
}

#[test]
fn test_multivariate_gaussian_log_pdf() {
    // Diagonal covariance: log-density is the sum of univariate log-densities
    let gaussian =
        MultivariateGaussian::new(array![1.0, -2.0], array![[4.0, 0.0], [0.0, 0.5]]).unwrap();
    let first = UnivariateGaussian::new(1.0, 4.0).unwrap();
    let second = UnivariateGaussian::new(-2.0, 0.5).unwrap();

    let x = array![0.3, -1.1];
    let expected = first.log_pdf(0.3) + second.log_pdf(-1.1);
    assert!((gaussian.log_pdf(x.view()).unwrap() - expected).abs() < 1e-12);

    // Correlated covariance at the mean: -0.5 * (k ln 2π + ln|Σ|)
    let correlated =
        MultivariateGaussian::new(array![0.0, 0.0], array![[2.0, 1.0], [1.0, 2.0]]).unwrap();
    let expected = -0.5 * (2.0 * (2.0 * PI).ln() + 3.0_f64.ln());
    assert!((correlated.log_pdf(array![0.0, 0.0].view()).unwrap() - expected).abs() < 1e-12);

    assert!(matches!(
        gaussian.log_pdf(array![1.0].view()),
        Err(RegressionError::DimensionMismatch { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn test_multivariate_gaussian_sampling() {
    let gaussian =
        MultivariateGaussian::new(array![1.0, -1.0], array![[1.0, 0.8], [0.8, 1.0]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);

    let samples: Vec<Array1<f64>> = gaussian.sample_n(&mut rng, 20_000);
    let n = samples.len() as f64;

    let mean = samples.iter().fold(Array1::<f64>::zeros(2), |acc, s| acc + s) / n;
    assert!((mean[0] - 1.0).abs() < 0.03);
    assert!((mean[1] + 1.0).abs() < 0.03);

    let covariance = samples
        .iter()
        .map(|s| (s[0] - mean[0]) * (s[1] - mean[1]))
        .sum::<f64>()
        / (n - 1.0);
    assert!((covariance - 0.8).abs() < 0.05);
}
