//   Copyright 2024 The PyMC Developers
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.

//! Bayesian linear regression with known output variance.
//!
//! Outputs are generated as `y = φ(x)·w + ε` with `ε ~ N(0, σ²)`, where `φ(x)`
//! is the input's feature vector, optionally extended with a constant bias
//! feature. The weight posterior is a `MultivariateGaussian` `N(μ, Σ)`, so the
//! predictive distribution is available in closed form:
//!
//! ```text
//! y | x, w      ~ N(φ(x)·w, σ²)
//! y | x, μ, Σ   ~ N(φ(x)·μ, σ² + φ(x)ᵀ Σ φ(x))
//! ```

use ndarray::Array1;

use crate::distribution::{MultivariateGaussian, UnivariateGaussian};
use crate::error::{RegressionError, Result};
use crate::evaluator::Evaluator;
use crate::math::{dot, quadratic_form};
use crate::regression::BayesianRegression;
use crate::vector::{Vectorizable, WithBias};

/// Parameters used to initialize a new `BayesianLinearRegression`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegressionSettings {
    /// Number of input features, excluding the bias feature.
    pub dimensionality: usize,
    /// Variance `σ²` of the output noise.
    pub output_variance: f64,
    /// Whether a constant `1.0` feature is appended to every input.
    pub bias: bool,
}

impl LinearRegressionSettings {
    /// Creates new settings without a bias feature.
    pub fn new(dimensionality: usize, output_variance: f64) -> Result<Self> {
        if dimensionality == 0 {
            return Err(RegressionError::InvalidParameter {
                name: "dimensionality",
                value: 0.0,
                constraint: "must be >= 1",
            });
        }
        if !output_variance.is_finite() || output_variance <= 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "output_variance",
                value: output_variance,
                constraint: "must be finite and > 0",
            });
        }

        Ok(Self {
            dimensionality,
            output_variance,
            bias: false,
        })
    }

    /// Enables or disables the bias feature.
    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    /// Length of the weight vector, including the bias weight.
    pub fn weight_dimensionality(&self) -> usize {
        self.dimensionality + usize::from(self.bias)
    }
}

impl Default for LinearRegressionSettings {
    fn default() -> Self {
        Self {
            dimensionality: 1,
            output_variance: 1.0,
            bias: false,
        }
    }
}

/// Feature vector of `input`, with the bias feature appended when enabled.
fn features<V: Vectorizable + ?Sized>(input: &V, bias: bool) -> Array1<f64> {
    if bias {
        WithBias(input).to_vector()
    } else {
        input.to_vector()
    }
}

/// Bayesian linear regression whose weight posterior is a
/// `MultivariateGaussian`.
#[derive(Debug, Clone, PartialEq)]
pub struct BayesianLinearRegression {
    settings: LinearRegressionSettings,
}

impl BayesianLinearRegression {
    /// Creates a `BayesianLinearRegression` with the given settings.
    pub fn new(settings: LinearRegressionSettings) -> Self {
        Self { settings }
    }

    /// Settings of _this_ model.
    pub fn settings(&self) -> &LinearRegressionSettings {
        &self.settings
    }

    /// Length of the weight vectors accepted by _this_ model.
    pub fn weight_dimensionality(&self) -> usize {
        self.settings.weight_dimensionality()
    }
}

impl Default for BayesianLinearRegression {
    fn default() -> Self {
        Self::new(LinearRegressionSettings::default())
    }
}

impl BayesianRegression for BayesianLinearRegression {
    type Output = f64;
    type Posterior = MultivariateGaussian;
    type Conditional = UnivariateGaussian;
    type PredictiveOutput = UnivariateGaussian;
    type Predictive = LinearPredictiveDistribution;

    fn create_conditional_distribution<V: Vectorizable + ?Sized>(
        &self,
        input: &V,
        weights: &Array1<f64>,
    ) -> Result<UnivariateGaussian> {
        let phi = features(input, self.settings.bias);
        RegressionError::check_dimension(phi.len(), weights.len(), "conditional weights")?;
        RegressionError::check_dimension(
            self.weight_dimensionality(),
            phi.len(),
            "conditional input features",
        )?;

        let mean = dot(phi.view(), weights.view(), "conditional mean")?;
        UnivariateGaussian::new(mean, self.settings.output_variance)
    }

    fn create_predictive_distribution(
        &self,
        posterior: &MultivariateGaussian,
    ) -> Result<LinearPredictiveDistribution> {
        RegressionError::check_dimension(
            self.weight_dimensionality(),
            posterior.dimensionality(),
            "posterior dimensionality",
        )?;

        tracing::debug!(
            weight_dimensionality = posterior.dimensionality(),
            output_variance = self.settings.output_variance,
            bias = self.settings.bias,
            "created linear predictive distribution"
        );

        Ok(LinearPredictiveDistribution {
            posterior: posterior.clone(),
            output_variance: self.settings.output_variance,
            bias: self.settings.bias,
        })
    }
}

/// Evaluator producing the predictive distribution of a
/// `BayesianLinearRegression` for new inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictiveDistribution {
    posterior: MultivariateGaussian,
    output_variance: f64,
    bias: bool,
}

impl LinearPredictiveDistribution {
    /// Weight posterior the predictions integrate over.
    pub fn posterior(&self) -> &MultivariateGaussian {
        &self.posterior
    }
}

impl<V: Vectorizable + ?Sized> Evaluator<V> for LinearPredictiveDistribution {
    type Output = Result<UnivariateGaussian>;

    fn evaluate(&self, input: &V) -> Result<UnivariateGaussian> {
        let phi = features(input, self.bias);
        RegressionError::check_dimension(
            self.posterior.dimensionality(),
            phi.len(),
            "predictive input features",
        )?;

        let mean = dot(phi.view(), self.posterior.mean_view(), "predictive mean")?;
        let weight_variance = quadratic_form(
            phi.view(),
            self.posterior.covariance().view(),
            "predictive variance",
        )?;
        let variance = self.output_variance + weight_variance;

        tracing::trace!(mean, variance, "evaluated linear predictive distribution");

        UnivariateGaussian::new(mean, variance)
    }
}
