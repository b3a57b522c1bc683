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
#![warn(missing_docs)]

//! bayes_regression provides the interface shared by Bayesian regression
//! models, together with closed-form Gaussian distributions and a Bayesian
//! linear regression built on them. The weights of a regression are described
//! by a posterior distribution, estimated elsewhere from observed data. From
//! that posterior a model creates the conditional distribution of outputs for
//! a fixed weight vector, and the predictive distribution of outputs with the
//! weight uncertainty integrated out.
//!
//! The crate also provides simple distance metrics for generic
//! distance-based algorithms such as nearest-neighbor search.

pub mod distribution;
pub mod error;
pub mod evaluator;
pub mod linear;
pub mod math;
pub mod metric;
pub mod regression;
pub mod vector;

pub use crate::distribution::{
    ClosedFormDistribution, Distribution, MultivariateGaussian, UnivariateGaussian,
};
pub use crate::error::{RegressionError, Result};
pub use crate::evaluator::Evaluator;
pub use crate::linear::{
    BayesianLinearRegression, LinearPredictiveDistribution, LinearRegressionSettings,
};
pub use crate::metric::{nearest_neighbor, IdentityDistanceMetric, Metric};
pub use crate::regression::BayesianRegression;
pub use crate::vector::{Vectorizable, WithBias};
