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

//! Conversion of model inputs into numeric feature vectors.

use ndarray::{Array1, ArrayView1};

/// Interface for inputs that can be represented as a numeric vector.
///
/// Regression models only ever see inputs through this trait, so anything
/// from a raw slice to a domain object can be used as an input as long as it
/// can produce its feature vector.
pub trait Vectorizable {
    /// Returns the feature vector of _this_ input.
    fn to_vector(&self) -> Array1<f64>;

    /// Number of features of _this_ input.
    fn dimensionality(&self) -> usize {
        self.to_vector().len()
    }
}

impl<V: Vectorizable + ?Sized> Vectorizable for &V {
    fn to_vector(&self) -> Array1<f64> {
        (**self).to_vector()
    }

    fn dimensionality(&self) -> usize {
        (**self).dimensionality()
    }
}

impl Vectorizable for Array1<f64> {
    fn to_vector(&self) -> Array1<f64> {
        self.clone()
    }

    fn dimensionality(&self) -> usize {
        self.len()
    }
}

impl Vectorizable for ArrayView1<'_, f64> {
    fn to_vector(&self) -> Array1<f64> {
        self.to_owned()
    }

    fn dimensionality(&self) -> usize {
        self.len()
    }
}

impl Vectorizable for [f64] {
    fn to_vector(&self) -> Array1<f64> {
        Array1::from(self.to_vec())
    }

    fn dimensionality(&self) -> usize {
        self.len()
    }
}

impl Vectorizable for Vec<f64> {
    fn to_vector(&self) -> Array1<f64> {
        self.as_slice().to_vector()
    }

    fn dimensionality(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Vectorizable for [f64; N] {
    fn to_vector(&self) -> Array1<f64> {
        self.as_slice().to_vector()
    }

    fn dimensionality(&self) -> usize {
        N
    }
}

/// Wraps an input and appends a constant `1.0` feature, so that the last
/// weight acts as an intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithBias<V>(pub V);

impl<V: Vectorizable> Vectorizable for WithBias<V> {
    fn to_vector(&self) -> Array1<f64> {
        let inner = self.0.to_vector();
        let mut out = Array1::<f64>::ones(inner.len() + 1);
        out.slice_mut(ndarray::s![..inner.len()]).assign(&inner);
        out
    }

    fn dimensionality(&self) -> usize {
        self.0.dimensionality() + 1
    }
}
