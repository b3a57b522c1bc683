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

//! Function objects mapping inputs to outputs.

/// A function-like object mapping an input of type `I` to an output.
///
/// `I` may be unsized so that evaluators can accept `dyn Vectorizable` or
/// slices directly.
pub trait Evaluator<I: ?Sized> {
    /// Type produced by the evaluator.
    type Output;

    /// Evaluates _this_ function at `input`.
    fn evaluate(&self, input: &I) -> Self::Output;
}
