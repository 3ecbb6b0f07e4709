//! Fixed-size tensors, vectors, matrices, angles and quaternions.
//!
//! All types in this crate are small, stack-allocated [`Copy`] values whose dimensions are part of
//! the type. Everything is built on a single container, [`Tensor`], parameterized by an element
//! type and a [`Shape`]. [`Vector`]s and [`Matrix`]s are aliases of rank 1 and rank 2 tensors,
//! [`Quaternion`]s pair a [`Vector3`] with a real part, and [`Angle`] stores radians no matter
//! which unit it was created from.
//!
//! ```
//! # use dk_math::*;
//! let m = Matrix3::rotation(angle_from_degrees(90.0), vec3(0.0, 0.0, 1.0))?;
//! let q = Quaternion::from_axis_angle(vec3(0.0, 0.0, 1.0), angle_from_degrees(90.0))?;
//!
//! let v = vec3(1.0, 0.0, 0.0);
//! assert!((m * v - q.apply(v)).magnitude() < 1e-9);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics for the
//!   dimensions lets shape mismatches be compile-time errors, and keeps everything on the stack.
//! - Support a single, row-major, unpadded data layout. Values can be cast to and from flat arrays
//!   of their element type with [`bytemuck`].
//! - Be generic over the element type, but only over the built-in integer and floating-point
//!   types (see [`Numeric`]). Lengths, dot products and determinants are computed in [`f64`]
//!   regardless of the element type.
//! - Report recoverable failures (out-of-range access, division by zero) as [`Error`]s. Operators
//!   that cannot return a [`Result`] panic instead, like integer division in `std` does.
//! - Don't do any logging setup. Failures are logged at `debug` level and rotations at `trace`
//!   level through the [`log`] facade; installing a logger is up to the application.
//!
//! # Cargo Features
//!
//! - `double-precision`: makes [`Real`], the element type of [`Vector3D`], [`Matrix4D`], [`Quat`]
//!   and the other `*D` aliases, [`f64`] instead of [`f32`].

mod angle;
mod approx;
mod error;
mod matrix;
mod quat;
pub mod shape;
mod tensor;
mod traits;
mod vector;

pub use angle::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use quat::*;
pub use shape::{Rank1, Rank2, Rank3, Shape, TensorIndex};
pub use tensor::Tensor;
pub use traits::*;
pub use vector::*;
