// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unbiased sampling of integers in `[0, bound)`.
//!
//! Taking `r % bound` of a uniform word over-represents the low
//! `2^BITS mod bound` results. We instead reject draws below
//! `threshold = 2^BITS mod bound`, leaving a range of accepted values whose
//! size is an exact multiple of `bound`. Fewer than `bound` of the
//! `2^BITS` possible draws are rejected, so for any `bound <= 2^(BITS-1)`
//! the expected number of draws is at most 2.

macro_rules! bounded_int_impl {
    ($fn_name:ident, $ty:ty) => {
        /// Sample uniformly from `[0, bound)` using words from `next`.
        ///
        /// `bound == 0` yields `0` without drawing.
        #[inline]
        pub(crate) fn $fn_name<F: FnMut() -> $ty>(bound: $ty, mut next: F) -> $ty {
            if bound == 0 {
                return 0;
            }
            // 2^BITS mod bound, computed without a wider type.
            let threshold = bound.wrapping_neg() % bound;
            loop {
                let r = next();
                if r >= threshold {
                    return r % bound;
                }
            }
        }
    };
}

bounded_int_impl! { bounded_u32, u32 }
bounded_int_impl! { bounded_u64, u64 }
