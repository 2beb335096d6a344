//! A small, generic linear algebra library for graphics and simulation code.
//!
//! # Overview
//!
//! - [`Vector`] is a fixed-size vector of 2 to 4 elements, [`Matrix`] a column-major matrix of
//!   2 to 4 columns and rows, and [`Quat`] a quaternion.
//! - Every arithmetic and bitwise operator works element-wise, with either operand optionally
//!   being a broadcast scalar. The exception is `*` between matrices (and between a matrix and a
//!   vector), which is the linear-algebra product.
//! - The [`math`] module contains free functions (`sin`, `sqrt`, `select`, `dot`, ...) that work
//!   uniformly on scalars, vectors and matrices.
//! - Comparisons via [`Compare`] produce masks of sized booleans ([`Bool8`] through [`Bool64`])
//!   that are as wide as the compared scalars, and can be fed back into [`math::select`].
//! - [`translation_mat`], [`rotation_mat`], [`scale_mat`], [`camera_mat`] and
//!   [`perspective_mat`] build the usual transformation matrices.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors, so that
//!   they can be uploaded to the GPU as-is (see [`bytemuck`]).
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Mismatched dimensions are compile-time errors. Numerical edge cases (normalizing a zero
//!   vector, a zero field of view) are *not* checked and follow IEEE 754 semantics.
//! - This is not a solver library: no inversion, decompositions or eigenvalues.
//!
//! # Examples
//!
//! ```
//! use kiln_linalg::*;
//!
//! let view = camera_mat(vec3(0.0f32, 0.0, 5.0), Quat::IDENTITY);
//! let proj = perspective_mat(1.2f32, 16.0 / 9.0, 0.1, 100.0);
//! let clip = proj * (view * vec4(0.0, 0.0, 0.0, 1.0)).extend(1.0);
//! assert!(clip.w > 0.0);
//! ```

mod compare;
pub mod math;
mod matrix;
mod quat;
mod sized_bool;
mod traits;
mod transform;
mod vector;

pub use compare::Compare;
pub use matrix::*;
pub use quat::Quat;
pub use sized_bool::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
