// Copyright 2026 ndindex developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeTo};

/// A slice of one axis: a range with a step size.
///
/// Before binding, `start` and `stop` may be negative (counted from the
/// back of the axis) or out of range. [`bind_indices`] clamps them to the
/// axis: a bound ascending slice has `0 <= start <= stop <= dim` with an
/// exclusive `stop`, while a bound descending slice runs down to an
/// inclusive lower sentinel of `-1`, so `stop = -1` means "past the first
/// element".
///
/// `step` must be nonzero.
///
/// ## Examples
///
/// `Slice::new(a, b, 2)` is every second element from `a` until `b`. It
/// can also be created with `Slice::from(a..b).step_by(2)`. The Python
/// equivalent is `[a:b:2]`.
///
/// [`bind_indices`]: crate::bind_indices
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(j..k)`.
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    pub fn new(start: isize, stop: isize, step: isize) -> Slice
    {
        debug_assert_ne!(step, 0, "Slice::new: step must be nonzero");
        Slice { start, stop, step }
    }

    /// The full (bound) slice over an axis of length `dim`.
    pub(crate) fn full(dim: usize) -> Slice
    {
        Slice {
            start: 0,
            stop: dim as isize,
            step: 1,
        }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    #[inline]
    pub fn step_by(self, step: isize) -> Slice
    {
        debug_assert_ne!(step, 0, "Slice::step_by: step must be nonzero");
        Slice {
            step: self.step * step,
            ..self
        }
    }

    /// Returns the number of elements the slice yields, walking from
    /// `start` towards `stop` by `step`.
    ///
    /// The two step directions use different formulas because a bound
    /// descending slice stops at an inclusive `-1` sentinel while an
    /// ascending one has an exclusive `stop`.
    pub fn len(&self) -> usize
    {
        let Slice { start, stop, step } = *self;
        if (step < 0 && stop >= start) || (step > 0 && start >= stop) {
            0
        } else if step < 0 {
            (((stop - start + 1) / step) + 1) as usize
        } else {
            (((stop - start - 1) / step) + 1) as usize
        }
    }

    /// Returns `true` if the slice yields no elements.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if self.start != 0 {
            write!(f, "{}", self.start)?;
        }
        write!(f, "..{}", self.stop)?;
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice
            {
                Slice {
                    start: r.start as isize,
                    stop: r.end as isize,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice
            {
                Slice {
                    start: 0,
                    stop: r.end as isize,
                    step: 1,
                }
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);
