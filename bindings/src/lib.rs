#![allow(non_snake_case)]

extern crate bayes_regression;

use bayes_regression::{
    BayesianLinearRegression, BayesianRegression, ClosedFormDistribution, Evaluator,
    IdentityDistanceMetric, LinearPredictiveDistribution, LinearRegressionSettings, Metric,
    MultivariateGaussian, RegressionError,
};
use numpy::{PyArray1, PyArrayMethods, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(err: RegressionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python object compared with `==`. A comparison that raises counts as
/// not equal.
struct PyValue<'py>(Bound<'py, PyAny>);

impl PartialEq for PyValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        PyAnyMethods::eq(&self.0, &other.0).unwrap_or(false)
    }
}

/// Returns 0.0 if the two objects are equal and 1.0 otherwise.
#[pyfunction]
fn identity_distance(first: Bound<'_, PyAny>, second: Bound<'_, PyAny>) -> f64 {
    IdentityDistanceMetric.evaluate(&PyValue(first), &PyValue(second))
}

/// Bayesian linear regression with known output variance.
#[pyclass]
struct LinearRegression {
    model: BayesianLinearRegression,
}

impl LinearRegression {
    fn predictive_distribution(
        &self,
        posterior_mean: PyReadonlyArray1<f64>,
        posterior_covariance: PyReadonlyArray2<f64>,
    ) -> PyResult<LinearPredictiveDistribution> {
        let posterior = MultivariateGaussian::new(
            posterior_mean.to_owned_array(),
            posterior_covariance.to_owned_array(),
        )
        .map_err(to_py_err)?;

        self.model
            .create_predictive_distribution(&posterior)
            .map_err(to_py_err)
    }
}

#[pymethods]
impl LinearRegression {
    #[new]
    #[pyo3(signature = (dimensionality, output_variance, bias = false))]
    fn new(dimensionality: usize, output_variance: f64, bias: bool) -> PyResult<Self> {
        let settings = LinearRegressionSettings::new(dimensionality, output_variance)
            .map_err(to_py_err)?
            .with_bias(bias);

        Ok(Self {
            model: BayesianLinearRegression::new(settings),
        })
    }

    /// Mean and variance of the outputs given input `x` and `weights`.
    fn conditional(
        &self,
        x: PyReadonlyArray1<f64>,
        weights: PyReadonlyArray1<f64>,
    ) -> PyResult<(f64, f64)> {
        let input = x.as_array();
        let weights = weights.to_owned_array();
        let conditional = self
            .model
            .create_conditional_distribution(&input, &weights)
            .map_err(to_py_err)?;

        Ok((conditional.mean(), conditional.variance()))
    }

    /// Mean and variance of the predictive distribution at input `x`.
    fn predictive(
        &self,
        posterior_mean: PyReadonlyArray1<f64>,
        posterior_covariance: PyReadonlyArray2<f64>,
        x: PyReadonlyArray1<f64>,
    ) -> PyResult<(f64, f64)> {
        let predictive = self.predictive_distribution(posterior_mean, posterior_covariance)?;
        let prediction = predictive.evaluate(&x.as_array()).map_err(to_py_err)?;

        Ok((prediction.mean(), prediction.variance()))
    }

    /// Predictive means and variances for every row of `X`.
    fn predict<'py>(
        &self,
        py: Python<'py>,
        posterior_mean: PyReadonlyArray1<f64>,
        posterior_covariance: PyReadonlyArray2<f64>,
        X: PyReadonlyArray2<f64>,
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
        let predictive = self.predictive_distribution(posterior_mean, posterior_covariance)?;

        let X = X.as_array();
        let mut means = Vec::with_capacity(X.nrows());
        let mut variances = Vec::with_capacity(X.nrows());
        for row in X.rows() {
            let prediction = predictive.evaluate(&row).map_err(to_py_err)?;
            means.push(prediction.mean());
            variances.push(prediction.variance());
        }

        Ok((
            PyArray1::from_vec_bound(py, means),
            PyArray1::from_vec_bound(py, variances),
        ))
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn bayes_regression_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(identity_distance, m)?)?;
    m.add_class::<LinearRegression>()?;
    Ok(())
}
