// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::{from_kind, ErrorKind, IndexError};
use crate::index::Index;

/// The per-axis plan a bound index list resolves to: the dimensions and
/// strides of the derived view, plus its offset (in stride units) from
/// the source array's first element.
///
/// A view built from these fields shares the source array's storage; no
/// data is copied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewSpec {
    pub dims: Vec<usize>,
    pub strides: Vec<isize>,
    pub offset: isize,
}

impl ViewSpec {
    /// Number of dimensions of the resolved view.
    pub fn ndim(&self) -> usize
    {
        self.dims.len()
    }
}

/// Resolves a bound index list into a view over the target array.
///
/// Basic indexing only: an `IntegerArray` entry fails with
/// [`ErrorKind::ArrayIndicesNotAllowed`]. Use [`resolve_subspace`] when
/// array indices should reserve their source dimension instead.
///
/// The list must come from [`bind_indices`](crate::bind_indices); an
/// ellipsis, open-stop slice, boolean scalar or boolean mask fails with
/// [`ErrorKind::UnboundIndexKind`]. Source dimensions the list does not
/// address are kept whole at the end of the view.
///
/// **Panics** if `dims` and `strides` differ in length.
pub fn resolve_view(indices: &[Index], dims: &[usize], strides: &[isize])
    -> Result<ViewSpec, IndexError>
{
    resolve(indices, dims, strides, false)
}

/// Like [`resolve_view`], but `IntegerArray` entries are permitted: each
/// consumes one source dimension as a placeholder (as if indexed at 0)
/// and contributes no view dimension. The result is the subspace an
/// advanced-indexing executor gathers into.
pub fn resolve_subspace(indices: &[Index], dims: &[usize], strides: &[isize])
    -> Result<ViewSpec, IndexError>
{
    resolve(indices, dims, strides, true)
}

fn resolve(indices: &[Index], dims: &[usize], strides: &[isize], allow_arrays: bool)
    -> Result<ViewSpec, IndexError>
{
    assert_eq!(
        dims.len(),
        strides.len(),
        "resolve: dims and strides must have equal length"
    );
    let nd = dims.len();

    let mut out_dims = Vec::with_capacity(nd);
    let mut out_strides = Vec::with_capacity(nd);
    let mut offset = 0;
    // source dimension being consumed
    let mut i_dim = 0;
    for index in indices {
        match index {
            Index::Integer(v) => {
                if i_dim >= nd {
                    return Err(from_kind(ErrorKind::TooManyIndices));
                }
                offset += strides[i_dim] * v;
                i_dim += 1;
            }

            Index::Slice(slice) => {
                if i_dim >= nd {
                    return Err(from_kind(ErrorKind::TooManyIndices));
                }
                out_dims.push(slice.len());
                out_strides.push(slice.step * strides[i_dim]);
                offset += strides[i_dim] * slice.start;
                i_dim += 1;
            }

            Index::NewAxis => {
                out_dims.push(1);
                out_strides.push(0);
            }

            Index::IntegerArray(_) => {
                if !allow_arrays {
                    return Err(from_kind(ErrorKind::ArrayIndicesNotAllowed));
                }
                if i_dim >= nd {
                    return Err(from_kind(ErrorKind::TooManyIndices));
                }
                i_dim += 1;
            }

            Index::StringLabel(_) => {
                return Err(from_kind(ErrorKind::UnsupportedIndexKind));
            }

            Index::Boolean(_)
            | Index::SliceOpenStop { .. }
            | Index::BooleanArray(_)
            | Index::Ellipsis => {
                return Err(from_kind(ErrorKind::UnboundIndexKind));
            }
        }
    }

    // Source dimensions the expression leaves unaddressed stay whole.
    for j in i_dim..nd {
        out_dims.push(dims[j]);
        out_strides.push(strides[j]);
    }

    Ok(ViewSpec {
        dims: out_dims,
        strides: out_strides,
        offset,
    })
}
