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

//! Distance metrics for generic distance-based algorithms.

/// A symmetric, non-negative distance between two values of type `T`.
pub trait Metric<T: ?Sized> {
    /// Distance between `first` and `second`.
    fn evaluate(&self, first: &T, second: &T) -> f64;
}

/// A distance metric that is 0 if two values are equal and 1 if they are not.
///
/// Works with any type with a valid `PartialEq`. A missing value is
/// represented with `Option::None`, and two missing values are equal. Note
/// that `f64::NAN` is not equal to itself, so its distance to itself is 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityDistanceMetric;

impl IdentityDistanceMetric {
    /// Creates a new `IdentityDistanceMetric`.
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq + ?Sized> Metric<T> for IdentityDistanceMetric {
    fn evaluate(&self, first: &T, second: &T) -> f64 {
        if first == second {
            0.0
        } else {
            1.0
        }
    }
}

/// Finds the candidate closest to `query` under `metric`.
///
/// Returns the index and distance of the first candidate with the smallest
/// distance, or `None` if there are no candidates.
pub fn nearest_neighbor<T, M>(metric: &M, query: &T, candidates: &[T]) -> Option<(usize, f64)>
where
    M: Metric<T> + ?Sized,
{
    candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, metric.evaluate(query, candidate)))
        .fold(None, |best, (idx, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((idx, distance)),
        })
}
