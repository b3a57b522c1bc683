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

//! Probability distribution interfaces and the Gaussian distributions used
//! by the regression models.
//!
//! Includes:
//! - `Distribution`: anything that can be sampled from.
//! - `ClosedFormDistribution`: a distribution described by a fixed, small
//!   parameter vector.
//! - `UnivariateGaussian`: distribution over scalar outputs.
//! - `MultivariateGaussian`: distribution over weight vectors.

use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{RegressionError, Result};
use crate::math::{cholesky, forward_substitution, is_symmetric};

/// Distribution interface for drawing values of type `T`.
pub trait Distribution<T> {
    /// Draws a single value using the caller supplied random number generator.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T;

    /// Draws `n` independent values.
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<T> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

/// A distribution representable by a fixed set of parameters, such as a
/// mean and covariance, rather than by samples.
pub trait ClosedFormDistribution<T>: Distribution<T> {
    /// Expected value of the distribution.
    fn mean(&self) -> T;

    /// All parameters of the distribution flattened into one vector.
    ///
    /// Two distributions of the same type with equal parameter vectors are
    /// the same distribution.
    fn parameters(&self) -> Array1<f64>;
}

/// Gaussian distribution over `f64` parameterized by mean and variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnivariateGaussian {
    mean: f64,
    variance: f64,
}

impl UnivariateGaussian {
    /// Creates a new `UnivariateGaussian`.
    ///
    /// The mean must be finite and the variance finite and strictly positive.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(RegressionError::InvalidParameter {
                name: "mean",
                value: mean,
                constraint: "must be finite",
            });
        }
        if !variance.is_finite() || variance <= 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "variance",
                value: variance,
                constraint: "must be finite and > 0",
            });
        }

        Ok(Self { mean, variance })
    }

    /// Standard normal distribution `N(0, 1)`.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
        }
    }

    /// Variance of the distribution.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Standard deviation of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Natural logarithm of the density at `x`.
    pub fn log_pdf(&self, x: f64) -> f64 {
        let delta = x - self.mean;
        -0.5 * ((2.0 * PI * self.variance).ln() + delta * delta / self.variance)
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }
}

impl Distribution<f64> for UnivariateGaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.mean + self.std_dev() * z
    }
}

impl ClosedFormDistribution<f64> for UnivariateGaussian {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn parameters(&self) -> Array1<f64> {
        Array1::from(vec![self.mean, self.variance])
    }
}

/// Gaussian distribution over vectors parameterized by a mean vector and
/// a symmetric positive definite covariance matrix.
///
/// The Cholesky factor of the covariance is computed once on construction and
/// reused for sampling and density evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariateGaussian {
    mean: Array1<f64>,
    covariance: Array2<f64>,
    cholesky: Array2<f64>,
}

impl MultivariateGaussian {
    /// Creates a new `MultivariateGaussian`.
    pub fn new(mean: Array1<f64>, covariance: Array2<f64>) -> Result<Self> {
        RegressionError::check_dimension(mean.len(), covariance.nrows(), "covariance rows")?;
        RegressionError::check_dimension(mean.len(), covariance.ncols(), "covariance columns")?;

        if let Some(&bad) = mean.iter().find(|m| !m.is_finite()) {
            return Err(RegressionError::InvalidParameter {
                name: "mean",
                value: bad,
                constraint: "must be finite",
            });
        }
        if !is_symmetric(covariance.view()) {
            tracing::warn!(dimensionality = mean.len(), "rejected asymmetric covariance");
            return Err(RegressionError::NotPositiveDefinite {
                context: "covariance must be symmetric",
            });
        }

        let cholesky = match cholesky(covariance.view(), "multivariate gaussian covariance") {
            Ok(l) => l,
            Err(err) => {
                tracing::warn!(dimensionality = mean.len(), "rejected covariance: {}", err);
                return Err(err);
            }
        };

        Ok(Self {
            mean,
            covariance,
            cholesky,
        })
    }

    /// Gaussian with the given mean and covariance `variance * I`.
    pub fn isotropic(mean: Array1<f64>, variance: f64) -> Result<Self> {
        if !variance.is_finite() || variance <= 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "variance",
                value: variance,
                constraint: "must be finite and > 0",
            });
        }
        let n = mean.len();
        Self::new(mean, Array2::<f64>::eye(n) * variance)
    }

    /// Number of dimensions of the support.
    pub fn dimensionality(&self) -> usize {
        self.mean.len()
    }

    /// Borrowed view of the mean vector.
    pub fn mean_view(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    /// Covariance matrix.
    pub fn covariance(&self) -> &Array2<f64> {
        &self.covariance
    }

    /// Natural logarithm of the density at `x`.
    pub fn log_pdf(&self, x: ArrayView1<f64>) -> Result<f64> {
        RegressionError::check_dimension(self.dimensionality(), x.len(), "log_pdf input")?;

        let delta = &x - &self.mean;
        let whitened = forward_substitution(self.cholesky.view(), delta.view());
        let mahalanobis = whitened.dot(&whitened);
        let log_det: f64 = 2.0 * self.cholesky.diag().iter().map(|d| d.ln()).sum::<f64>();
        let k = self.dimensionality() as f64;

        Ok(-0.5 * (k * (2.0 * PI).ln() + log_det + mahalanobis))
    }
}

impl Distribution<Array1<f64>> for MultivariateGaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        let z: Array1<f64> = (0..self.dimensionality())
            .map(|_| {
                let z: f64 = rng.sample(StandardNormal);
                z
            })
            .collect();
        &self.mean + &self.cholesky.dot(&z)
    }
}

impl ClosedFormDistribution<Array1<f64>> for MultivariateGaussian {
    fn mean(&self) -> Array1<f64> {
        self.mean.clone()
    }

    fn parameters(&self) -> Array1<f64> {
        self.mean
            .iter()
            .chain(self.covariance.iter())
            .copied()
            .collect()
    }
}
