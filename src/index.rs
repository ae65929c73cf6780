// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};
use std::sync::Arc;

use crate::slice::Slice;

/// A 1-D sequence of integer coordinates, the payload of
/// [`Index::IntegerArray`].
///
/// Coordinate arrays are immutable and shared through `Arc`; the boolean
/// expansion stage produces one per mask dimension, and the binder passes
/// them through untouched (their contents are validated by the external
/// gather executor, not here).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordArray {
    coords: Box<[isize]>,
}

impl CoordArray {
    pub fn new(coords: Vec<isize>) -> CoordArray
    {
        CoordArray {
            coords: coords.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize
    {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[isize]
    {
        &self.coords
    }
}

impl From<Vec<isize>> for CoordArray {
    fn from(coords: Vec<isize>) -> CoordArray
    {
        CoordArray::new(coords)
    }
}

/// A boolean-valued array of arbitrary rank, stored row-major; the
/// payload of [`Index::BooleanArray`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoolMask {
    dims: Box<[usize]>,
    elems: Box<[bool]>,
}

impl BoolMask {
    /// Create a mask with the given shape from its elements in row-major
    /// order.
    ///
    /// **Panics** if `elems.len()` differs from the product of `dims`.
    pub fn new(dims: Vec<usize>, elems: Vec<bool>) -> BoolMask
    {
        assert_eq!(
            elems.len(),
            dims.iter().product::<usize>(),
            "BoolMask::new: element count must equal the product of dims"
        );
        BoolMask {
            dims: dims.into_boxed_slice(),
            elems: elems.into_boxed_slice(),
        }
    }

    /// Number of dimensions of the mask.
    pub fn ndim(&self) -> usize
    {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize]
    {
        &self.dims
    }

    /// The mask's elements in row-major order.
    pub fn elems(&self) -> &[bool]
    {
        &self.elems
    }
}

/// One element of an index expression.
///
/// An index expression is a `&[Index]`; see the crate docs for the
/// pipeline that turns one into a view. Array-valued kinds hold shared
/// handles: cloning an `Index` takes a new reference, dropping it
/// releases one, so a partially built index list cleans up after itself
/// on every failure path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Index {
    /// A single position along one axis; may be negative before binding.
    Integer(isize),
    /// A scalar boolean; the expansion and binding stages normalize it to
    /// `Integer(0)` or `Integer(1)`.
    Boolean(bool),
    /// A range with step size along one axis.
    Slice(Slice),
    /// A slice that runs to the natural end of the axis in the direction
    /// of `step`; exists only before binding.
    SliceOpenStop { start: isize, step: isize },
    /// Expands to as many full slices as needed to address every source
    /// dimension not addressed by the other entries.
    Ellipsis,
    /// Inserts a length-1 axis; consumes no source dimension.
    NewAxis,
    /// Shared handle to a 1-D coordinate sequence (advanced indexing).
    IntegerArray(Arc<CoordArray>),
    /// Shared handle to a boolean mask; eliminated by
    /// [`expand_bool_indices`](crate::expand_bool_indices) or
    /// [`bind_indices`](crate::bind_indices).
    BooleanArray(Arc<BoolMask>),
    /// Field-label indexing; reserved, always rejected.
    StringLabel(String),
}

/// Returns the number of entries that consume a source dimension,
/// counting a boolean mask as if it were already expanded to its rank.
pub(crate) fn count_non_new(indices: &[Index]) -> usize
{
    indices
        .iter()
        .map(|index| match index {
            Index::NewAxis => 0,
            Index::BooleanArray(mask) => mask.ndim(),
            _ => 1,
        })
        .sum()
}

impl From<Slice> for Index {
    #[inline]
    fn from(s: Slice) -> Index
    {
        Index::Slice(s)
    }
}

impl From<bool> for Index {
    #[inline]
    fn from(b: bool) -> Index
    {
        Index::Boolean(b)
    }
}

macro_rules! impl_index_from_index_type {
    ($index:ty) => {
        impl From<$index> for Index {
            #[inline]
            fn from(ix: $index) -> Index
            {
                Index::Integer(ix as isize)
            }
        }

        impl From<Range<$index>> for Index {
            #[inline]
            fn from(r: Range<$index>) -> Index
            {
                Index::Slice(Slice {
                    start: r.start as isize,
                    stop: r.end as isize,
                    step: 1,
                })
            }
        }

        impl From<RangeFrom<$index>> for Index {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Index
            {
                Index::SliceOpenStop {
                    start: r.start as isize,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Index {
            #[inline]
            fn from(r: RangeTo<$index>) -> Index
            {
                Index::Slice(Slice {
                    start: 0,
                    stop: r.end as isize,
                    step: 1,
                })
            }
        }
    };
}

impl_index_from_index_type!(isize);
impl_index_from_index_type!(usize);
impl_index_from_index_type!(i32);

impl From<RangeFull> for Index {
    #[inline]
    fn from(_: RangeFull) -> Index
    {
        Index::SliceOpenStop { start: 0, step: 1 }
    }
}
