// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Search for the true elements of a boolean mask.
//!
//! The expansion and binding stages delegate to [`non_zero`] to turn a
//! mask of rank `r` into `r` coordinate arrays, one per mask dimension.

use std::sync::Arc;

use crate::error::{from_kind, ErrorKind, IndexError};
use crate::index::{BoolMask, CoordArray};
use crate::MAX_RANK;

/// Returns one coordinate array per mask dimension, each holding that
/// dimension's coordinate of every true element, in row-major scan order.
///
/// Fails with [`ErrorKind::RankTooLarge`] when the mask has more than
/// [`MAX_RANK`](crate::MAX_RANK) dimensions.
pub fn non_zero(mask: &BoolMask) -> Result<Vec<Arc<CoordArray>>, IndexError>
{
    let nd = mask.ndim();
    if nd > MAX_RANK {
        return Err(from_kind(ErrorKind::RankTooLarge));
    }

    let count = mask.elems().iter().filter(|&&b| b).count();
    let mut out: Vec<Vec<isize>> = (0..nd).map(|_| Vec::with_capacity(count)).collect();
    // odometer over the mask's shape, kept in step with the row-major scan
    let mut coord = vec![0isize; nd];
    for &elem in mask.elems() {
        if elem {
            for (axis_coords, &c) in out.iter_mut().zip(&coord) {
                axis_coords.push(c);
            }
        }
        for j in (0..nd).rev() {
            coord[j] += 1;
            if coord[j] < mask.dims()[j] as isize {
                break;
            }
            coord[j] = 0;
        }
    }

    Ok(out
        .into_iter()
        .map(|coords| Arc::new(CoordArray::new(coords)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::non_zero;
    use crate::error::ErrorKind;
    use crate::index::BoolMask;

    #[test]
    fn two_by_two()
    {
        let mask = BoolMask::new(vec![2, 2], vec![false, true, true, false]);
        let coords = non_zero(&mask).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].coords(), &[0, 1]);
        assert_eq!(coords[1].coords(), &[1, 0]);
    }

    #[test]
    fn one_dimensional()
    {
        let mask = BoolMask::new(vec![4], vec![true, false, false, true]);
        let coords = non_zero(&mask).unwrap();
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].coords(), &[0, 3]);
    }

    #[test]
    fn all_false()
    {
        let mask = BoolMask::new(vec![3], vec![false; 3]);
        let coords = non_zero(&mask).unwrap();
        assert_eq!(coords.len(), 1);
        assert!(coords[0].is_empty());
    }

    #[test]
    fn rank_too_large()
    {
        let mask = BoolMask::new(vec![1; 33], vec![true]);
        assert_eq!(non_zero(&mask).unwrap_err().kind(), ErrorKind::RankTooLarge);
    }
}
