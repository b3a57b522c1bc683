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

//! Error type shared by distributions and regression models.

/// Represents errors raised when building distributions or evaluating a
/// regression model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressionError {
    /// Two vectors (or a vector and a matrix) do not have compatible lengths.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length that was required.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
        /// Operation that detected the mismatch.
        context: &'static str,
    },

    /// A distribution or settings parameter is outside its valid domain.
    #[error("invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint the value violates.
        constraint: &'static str,
    },

    /// Cholesky factorisation failed.
    #[error("matrix is not symmetric positive definite ({context})")]
    NotPositiveDefinite {
        /// Operation that required the factorisation.
        context: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegressionError>;

impl RegressionError {
    /// Checks that `actual == expected`, otherwise returns a `DimensionMismatch`.
    pub(crate) fn check_dimension(
        expected: usize,
        actual: usize,
        context: &'static str,
    ) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(RegressionError::DimensionMismatch {
                expected,
                actual,
                context,
            })
        }
    }
}
