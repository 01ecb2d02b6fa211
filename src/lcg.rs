// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 64-bit linear congruential recurrence shared by all generators.

// This is the default multiplier used by PCG for 64-bit state.
pub(crate) const MULTIPLIER: u64 = 6364136223846793005;

/// One raw LCG step: `state * MULTIPLIER + increment (mod 2^64)`.
#[inline(always)]
pub(crate) fn step(state: u64, increment: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(increment)
}

/// Multi-step advance (jump-ahead, jump-back).
///
/// The method used here is based on Brown, "Random Number Generation
/// with Arbitrary Stride,", Transactions of the American Nuclear
/// Society (Nov. 1994).  The algorithm is very similar to fast
/// exponentiation.
///
/// Returns the state reached from `state` after `delta` calls to [`step`].
/// Passing `delta.wrapping_neg()` goes backwards "the long way round".
#[inline]
pub(crate) fn jump(state: u64, increment: u64, delta: u64) -> u64 {
    let mut acc_mult: u64 = 1;
    let mut acc_plus: u64 = 0;
    let mut cur_mult = MULTIPLIER;
    let mut cur_plus = increment;
    let mut mdelta = delta;

    // Always one round per bit of `delta`; only the accumulation depends on it.
    for _ in 0..u64::BITS {
        if (mdelta & 1) != 0 {
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            acc_mult = acc_mult.wrapping_mul(cur_mult);
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        mdelta >>= 1;
    }
    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}
