// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index resolution for n-dimensional arrays.
//!
//! This crate turns a heterogeneous index expression (integers, slices,
//! ellipses, new-axis markers, boolean scalars, integer coordinate arrays
//! and boolean masks) into a normalized per-axis plan from which an array
//! view (shape, strides, offset) can be built without copying data.
//!
//! The pipeline has three stages, applied in order:
//!
//! 1. [`expand_bool_indices`] rewrites boolean masks into integer
//!    coordinate arrays and boolean scalars into integers.
//! 2. [`bind_indices`] expands ellipses, wraps negative indices, clamps
//!    slice bounds to the target's dimensions and validates everything
//!    against the target shape.
//! 3. [`resolve_view`] (or [`resolve_subspace`]) combines the bound list
//!    with the target's strides into a [`ViewSpec`].
//!
//! Each stage consumes the previous stage's output and nothing else; the
//! expansion stage is only needed when the expression may contain boolean
//! indices.
//!
//! ```
//! use ndindex::{bind_indices, resolve_view, Index};
//!
//! // a[1, ..., 0] on a 2 × 3 × 4 × 5 array
//! let raw = [Index::Integer(1), Index::Ellipsis, Index::Integer(0)];
//! let dims = [2, 3, 4, 5];
//! let strides = [60, 20, 5, 1];
//!
//! let bound = bind_indices(&raw, &dims)?;
//! let view = resolve_view(&bound, &dims, &strides)?;
//! assert_eq!(view.dims, vec![3, 4]);
//! assert_eq!(view.strides, vec![20, 5]);
//! assert_eq!(view.offset, 60);
//! # Ok::<(), ndindex::IndexError>(())
//! ```

mod bind;
mod error;
mod expand;
mod index;
pub mod nonzero;
mod resolve;
mod slice;

pub use crate::bind::bind_indices;
pub use crate::error::{ErrorKind, IndexError};
pub use crate::expand::expand_bool_indices;
pub use crate::index::{BoolMask, CoordArray, Index};
pub use crate::resolve::{resolve_subspace, resolve_view, ViewSpec};
pub use crate::slice::Slice;

/// The maximum supported array rank.
///
/// Targets (and boolean masks) with more dimensions are rejected with
/// [`ErrorKind::RankTooLarge`] rather than handled by growing buffers.
/// Bound index lists may hold up to `2 * MAX_RANK` entries to leave room
/// for new axes.
pub const MAX_RANK: usize = 32;
