// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::{from_kind, ErrorKind, IndexError};
use crate::index::Index;
use crate::nonzero::non_zero;
use crate::MAX_RANK;

/// Rewrites boolean indices into integer form.
///
/// Each boolean mask of rank `r` becomes `r` integer coordinate arrays,
/// one per mask dimension, holding the coordinates of its true elements;
/// each scalar boolean becomes an integer. Every other entry passes
/// through unchanged, with array handles gaining a reference. On failure
/// the partially built list is dropped, releasing every reference it
/// took.
///
/// [`bind_indices`](crate::bind_indices) performs the same rewrite while
/// binding, so this stage is only needed by callers that want a purely
/// integer expression before binding.
pub fn expand_bool_indices(indices: &[Index]) -> Result<Vec<Index>, IndexError>
{
    let mut out = Vec::with_capacity(indices.len());
    for index in indices {
        match index {
            Index::BooleanArray(mask) => {
                if out.len() + mask.ndim() > 2 * MAX_RANK {
                    return Err(from_kind(ErrorKind::RankTooLarge));
                }
                for coords in non_zero(mask)? {
                    out.push(Index::IntegerArray(coords));
                }
            }
            Index::Boolean(b) => out.push(Index::Integer(*b as isize)),
            other => out.push(other.clone()),
        }
    }
    Ok(out)
}
