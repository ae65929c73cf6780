// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::{from_kind, ErrorKind, IndexError};
use crate::index::{count_non_new, Index};
use crate::nonzero::non_zero;
use crate::slice::Slice;
use crate::MAX_RANK;

/// Normalizes a raw index expression against a target shape.
///
/// Walking the expression left to right, this
///
/// 1. expands an ellipsis into full slices over every source dimension
///    the other entries leave unaddressed,
/// 2. wraps negative scalar indices and slice bounds around the axis
///    length and clamps slice bounds to the axis,
/// 3. gives open-stop slices their concrete stop,
/// 4. rewrites boolean masks into integer coordinate arrays and boolean
///    scalars into integers, and
/// 5. validates scalar indices against their dimension.
///
/// The result contains only `Integer`, `Slice`, `NewAxis` and
/// `IntegerArray` entries, ready for [`resolve_view`] or
/// [`resolve_subspace`]. Its length is the target rank plus the number
/// of new axes, except that an expression without an ellipsis may
/// address fewer dimensions; the resolver keeps the trailing ones whole.
///
/// The contents of integer coordinate arrays are not range-checked here;
/// that is the gather executor's job.
///
/// On any failure the partially built list and every array-handle
/// reference it holds are released before the error returns.
///
/// [`resolve_view`]: crate::resolve_view
/// [`resolve_subspace`]: crate::resolve_subspace
pub fn bind_indices(indices: &[Index], dims: &[usize]) -> Result<Vec<Index>, IndexError>
{
    let nd = dims.len();
    if nd > MAX_RANK {
        return Err(from_kind(ErrorKind::RankTooLarge));
    }

    let mut out: Vec<Index> = Vec::with_capacity(nd);
    let mut n_new = 0;
    let mut seen_ellipsis = false;
    for (i, index) in indices.iter().enumerate() {
        match index {
            Index::StringLabel(_) => {
                return Err(from_kind(ErrorKind::UnsupportedIndexKind));
            }

            Index::Ellipsis => {
                if seen_ellipsis {
                    return Err(from_kind(ErrorKind::MultipleEllipses));
                }
                seen_ellipsis = true;
                // Expand to full slices over however many source
                // dimensions the remaining entries leave unaddressed.
                let addressed = out.len() + count_non_new(&indices[i + 1..]);
                let fill = (nd + n_new)
                    .checked_sub(addressed)
                    .ok_or_else(|| from_kind(ErrorKind::TooManyIndices))?;
                for _ in 0..fill {
                    let dim = dims[out.len() - n_new];
                    out.push(Index::Slice(Slice::full(dim)));
                }
            }

            Index::BooleanArray(mask) => {
                if out.len() + mask.ndim() > nd + n_new {
                    return Err(from_kind(ErrorKind::TooManyIndices));
                }
                for coords in non_zero(mask)? {
                    out.push(Index::IntegerArray(coords));
                }
            }

            Index::Slice(slice) => {
                let dim = source_dim(dims, out.len(), n_new)?;
                out.push(Index::Slice(Slice {
                    start: clamp_start(slice.start, dim, slice.step),
                    stop: clamp_stop(slice.stop, dim),
                    step: slice.step,
                }));
            }

            Index::SliceOpenStop { start, step } => {
                let dim = source_dim(dims, out.len(), n_new)?;
                // Run to the natural end of the axis in the direction of
                // travel; the stop needs no clamping.
                let stop = if *step > 0 { dim } else { -1 };
                out.push(Index::Slice(Slice {
                    start: clamp_start(*start, dim, *step),
                    stop,
                    step: *step,
                }));
            }

            Index::Integer(v) => bind_scalar(&mut out, dims, n_new, *v)?,
            Index::Boolean(b) => bind_scalar(&mut out, dims, n_new, *b as isize)?,

            Index::IntegerArray(_) => {
                source_dim(dims, out.len(), n_new)?;
                out.push(index.clone());
            }

            Index::NewAxis => {
                // Keeps the bound list within the 2 * MAX_RANK bound.
                if n_new == MAX_RANK {
                    return Err(from_kind(ErrorKind::RankTooLarge));
                }
                n_new += 1;
                out.push(Index::NewAxis);
            }
        }
    }

    Ok(out)
}

/// The source dimension the next consuming entry addresses, or
/// `TooManyIndices` when the expression already addresses the whole
/// array. New-axis entries occupy an output slot without consuming a
/// source dimension, hence the `n_new` correction.
fn source_dim(dims: &[usize], result: usize, n_new: usize) -> Result<isize, IndexError>
{
    if result >= dims.len() + n_new {
        return Err(from_kind(ErrorKind::TooManyIndices));
    }
    Ok(dims[result - n_new] as isize)
}

fn bind_scalar(out: &mut Vec<Index>, dims: &[usize], n_new: usize, val: isize)
    -> Result<(), IndexError>
{
    let dim = source_dim(dims, out.len(), n_new)?;
    let val = if val < 0 { val + dim } else { val };
    if val < 0 || val >= dim {
        return Err(from_kind(ErrorKind::InvalidIndex));
    }
    out.push(Index::Integer(val));
    Ok(())
}

/// Wraps and clamps a slice start. An in-range start is left alone; a
/// negative one first wraps around the axis. What remains out of range
/// clamps to the "empty" end of the axis: `0`/`dim` for ascending steps,
/// `-1`/`dim - 1` for descending ones, matching the sentinels
/// [`Slice::len`] expects.
fn clamp_start(mut start: isize, dim: isize, step: isize) -> isize
{
    if start < 0 {
        start += dim;
    }
    if start < 0 {
        if step < 0 {
            -1
        } else {
            0
        }
    } else if start >= dim {
        if step < 0 {
            dim - 1
        } else {
            dim
        }
    } else {
        start
    }
}

/// Wraps and clamps a slice stop into `[-1, dim]`. Unlike the start, the
/// clamping does not depend on the step sign: `-1` and `dim` are the two
/// "past the end" sentinels and either direction may legitimately stop
/// at either one.
fn clamp_stop(mut stop: isize, dim: isize) -> isize
{
    if stop < 0 {
        stop += dim;
    }
    if stop < 0 {
        -1
    } else if stop > dim {
        dim
    } else {
        stop
    }
}
