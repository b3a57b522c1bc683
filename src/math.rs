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

//! Small dense linear algebra helpers used by the Gaussian distributions.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{RegressionError, Result};

/// Relative tolerance used when checking a covariance matrix for symmetry.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Dot product of two vectors of equal length.
pub fn dot(a: ArrayView1<f64>, b: ArrayView1<f64>, context: &'static str) -> Result<f64> {
    RegressionError::check_dimension(a.len(), b.len(), context)?;
    Ok(a.dot(&b))
}

/// Computes `xᵀ A x` for a square matrix `A`.
pub fn quadratic_form(
    x: ArrayView1<f64>,
    a: ArrayView2<f64>,
    context: &'static str,
) -> Result<f64> {
    RegressionError::check_dimension(a.nrows(), x.len(), context)?;
    RegressionError::check_dimension(a.ncols(), x.len(), context)?;
    Ok(x.dot(&a.dot(&x)))
}

/// Whether `a` is square and symmetric within `SYMMETRY_TOLERANCE`.
pub fn is_symmetric(a: ArrayView2<f64>) -> bool {
    if a.nrows() != a.ncols() {
        return false;
    }

    let n = a.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            let scale = a[[i, j]].abs().max(a[[j, i]].abs()).max(1.0);
            if (a[[i, j]] - a[[j, i]]).abs() > SYMMETRY_TOLERANCE * scale {
                return false;
            }
        }
    }

    true
}

/// Lower triangular Cholesky factor `L` such that `A = L Lᵀ`.
///
/// Only the lower triangle of `a` is read.
pub fn cholesky(a: ArrayView2<f64>, context: &'static str) -> Result<Array2<f64>> {
    RegressionError::check_dimension(a.nrows(), a.ncols(), context)?;

    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for j in 0..n {
        let mut diag = a[[j, j]];
        for k in 0..j {
            diag -= l[[j, k]] * l[[j, k]];
        }
        if !diag.is_finite() || diag <= 0.0 {
            return Err(RegressionError::NotPositiveDefinite { context });
        }
        let diag = diag.sqrt();
        l[[j, j]] = diag;

        for i in (j + 1)..n {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = sum / diag;
        }
    }

    Ok(l)
}

/// Solves `L y = b` by forward substitution for lower triangular `L`.
pub fn forward_substitution(l: ArrayView2<f64>, b: ArrayView1<f64>) -> Array1<f64> {
    let n = b.len();
    let mut y = Array1::<f64>::zeros(n);

    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * y[k];
        }
        y[i] = sum / l[[i, i]];
    }

    y
}
