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

//! The Bayesian regression interface.
//!
//! A Bayesian regression maps inputs into a vector space whose weights are
//! described by a posterior distribution, estimated elsewhere from observed
//! input/output pairs. Given such a posterior, the model can produce the
//! predictive distribution of future outputs for any input.
//!
//! References:
//! - Christopher M. Bishop. Pattern Recognition and Machine Learning, 2006,
//!   pp. 152-159.
//! - Hanna M. Wallach. Introduction to Gaussian Process Regression, 2005,
//!   `link <http://www.cs.umass.edu/~wallach/talks/gp_intro.pdf>`__
//! - Wikipedia. Bayesian linear regression,
//!   `link <http://en.wikipedia.org/wiki/Bayesian_linear_regression>`__

use ndarray::Array1;

use crate::distribution::{ClosedFormDistribution, Distribution};
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::vector::Vectorizable;

/// Interface every Bayesian regression family implements to relate a weight
/// posterior to distributions over outputs.
///
/// Both operations are pure: identical arguments always produce
/// distributions with identical parameters.
pub trait BayesianRegression {
    /// Type of the outputs, typically `f64`.
    type Output;

    /// Posterior distribution of the weights.
    type Posterior: ClosedFormDistribution<Array1<f64>>;

    /// Distribution from which outputs are generated given weights and input.
    type Conditional: Distribution<Self::Output>;

    /// Closed-form distribution over outputs produced by the predictive
    /// evaluator.
    type PredictiveOutput: ClosedFormDistribution<Self::Output>;

    /// Evaluator producing the predictive distribution for an input.
    type Predictive: Evaluator<dyn Vectorizable, Output = Result<Self::PredictiveOutput>>;

    /// Creates the distribution from which the outputs are generated, given
    /// the weights and the input to condition on.
    ///
    /// Returns `RegressionError::DimensionMismatch` if the length of `weights`
    /// differs from the length of the input's feature vector.
    fn create_conditional_distribution<V: Vectorizable + ?Sized>(
        &self,
        input: &V,
        weights: &Array1<f64>,
    ) -> Result<Self::Conditional>;

    /// Creates the predictive distribution of outputs given the weight
    /// posterior.
    ///
    /// Returns `RegressionError::DimensionMismatch` if the posterior's
    /// dimensionality differs from the weight dimensionality of the model.
    fn create_predictive_distribution(&self, posterior: &Self::Posterior)
        -> Result<Self::Predictive>;
}
