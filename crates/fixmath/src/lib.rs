//! Fixed-size vectors, 2D segments and small matrices, generic over their element type.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is an `N`-element vector with the usual element-wise arithmetic, reductions
//!   (sum, product, mean, minimum, maximum), magnitude, dot product and normalization.
//! - [`Segment2<T>`] is a line segment between two 2D points.
//! - [`Matrix<T, R, C>`] is a small row-major matrix that can be multiplied with vectors.
//! - [`funcs`] contains freestanding helpers (averages, distances, angle conversion), and
//!   [`consts`] some angle constants.
//!
//! All dimensions are const generic parameters, so mismatched matrix and vector shapes are
//! rejected by the compiler.
//!
//! # Mixing element types
//!
//! Arithmetic between values of different element types is allowed, and the element type of the
//! result is picked by [`Promote`]: floats win over integers, wider types over narrower ones, and
//! signed over unsigned types of the same width. The result type is never narrower than either
//! operand, but the same-width unsigned to signed step wraps large values the way `as` does
//! (`vec1(u32::MAX) + vec1(0i32)` is `vec1(-1)`). Converting to a narrower type requires an
//! explicit [`Vector::cast`].
//!
//! Magnitudes, dot products and averages are always computed in [`f64`], regardless of the
//! element type, so they don't overflow for small integer types.
//!
//! ```
//! use fixmath::*;
//!
//! let pixel = vec2(200u8, 100);
//! let offset = vec2(-0.5, 0.25);
//!
//! let moved = pixel + offset;
//! assert_eq!(moved, vec2(199.5, 100.25));
//! assert_eq!(pixel.magnitude_squared(), 50000.0);
//! ```
//!
//! # Errors
//!
//! Operations whose arguments can only be checked at runtime (building a vector or matrix from a
//! slice, checked element access) return [`Result`]s with this crate's [`Error`]. Operators and
//! indexing panic on invalid input, like they do for arrays.

pub mod consts;
mod error;
pub mod funcs;
mod matrix;
mod promote;
mod segment;
mod traits;
mod vector;

pub use consts::*;
pub use error::*;
pub use matrix::*;
pub use promote::*;
pub use segment::*;
pub use traits::*;
pub use vector::*;
