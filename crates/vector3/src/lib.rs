//! # Vector3
//!
//! A plain 3-component `f32` vector value type with the geometric helpers
//! game and rendering code reaches for: cross/dot products, length,
//! normalization, linear and spherical interpolation, reflection and distance.
//!
//! ## Features
//!
//! - **Value semantics**: `Copy`, `#[repr(C)]`, no allocation
//! - **Operators**: component-wise `+ - * /` against vectors and scalars,
//!   with compound assignment forms
//! - **Interop**: conversions to and from arrays, tuples and
//!   `nalgebra::Vector3<f32>` (default `nalgebra` feature), `bytemuck` casting
//! - **Testing**: `approx` traits for whole-vector tolerance checks
//!
//! ## Quick Start
//!
//! ```rust
//! use vector3::prelude::*;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(a.cross(b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
//!
//! let halfway = a.slerp(b, 0.5);
//! approx::assert_relative_eq!(halfway.length(), 1.0, epsilon = 1e-6);
//!
//! let parsed: Vector3 = "(1, 2, 3)".parse()?;
//! assert_eq!(parsed + Vector3::splat(1.0), Vector3::new(2.0, 3.0, 4.0));
//! # Ok::<(), ParseVector3Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod logging;

mod approx_eq;
mod convert;
mod format;
mod ops;
mod vector;

#[cfg(test)]
mod tests;

pub use format::ParseVector3Error;
pub use vector::Vector3;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{ParseVector3Error, Vector3};
}
