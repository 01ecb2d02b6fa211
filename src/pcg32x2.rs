// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A 64-bit generator composed of two `pcg32` streams.

use crate::bounded::bounded_u64;
use crate::pcg32::Lcg64Xsh32;
use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

// Stream selectors are compared without the bit that seeding discards.
const STREAM_MASK: u64 = u64::MAX >> 1;

/// Two [`Lcg64Xsh32`] generators producing 64-bit output.
///
/// Each output word is the next "hi" output in the upper 32 bits and the
/// next "lo" output in the lower 32 bits, so the period stays
/// 2<sup>64</sup>. Both halves are always moved by the same number of steps.
///
/// The halves must run on different streams. If the two stream selectors
/// given to [`Pcg32x2::seed`] agree in their low 63 bits, the second one is
/// complemented before use.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg32x2 {
    lo: Lcg64Xsh32,
    hi: Lcg64Xsh32,
}

/// [`Pcg32x2`] is the 64-bit output member of this crate.
pub type Pcg64 = Pcg32x2;

impl Pcg32x2 {
    /// An unseeded generator. Both halves have zero state and increment.
    pub const fn unseeded() -> Self {
        Pcg32x2 {
            lo: Lcg64Xsh32::unseeded(),
            hi: Lcg64Xsh32::unseeded(),
        }
    }

    /// Construct and seed; see [`Pcg32x2::seed`].
    pub fn new(state1: u64, state2: u64, stream1: u64, stream2: u64) -> Self {
        let mut pcg = Self::unseeded();
        pcg.seed(state1, state2, stream1, stream2);
        pcg
    }

    /// (Re)seed "lo" with `(state1, stream1)` and "hi" with
    /// `(state2, stream2)`.
    pub fn seed(&mut self, state1: u64, state2: u64, stream1: u64, mut stream2: u64) -> &mut Self {
        if stream1 & STREAM_MASK == stream2 & STREAM_MASK {
            debug!(
                "Pcg32x2: streams {:#x} and {:#x} collide, complementing the second",
                stream1, stream2
            );
            stream2 = !stream2;
        }
        self.lo.seed(state1, stream1);
        self.hi.seed(state2, stream2);
        self
    }

    /// Return the next 64 random bits; both halves advance by one step.
    #[inline]
    pub fn random(&mut self) -> u64 {
        let hi = u64::from(self.hi.random());
        let lo = u64::from(self.lo.random());
        (hi << 32) | lo
    }

    /// Return a value uniformly distributed in `[0, bound)`.
    ///
    /// `bound == 0` returns `0` and leaves the generator untouched.
    #[inline]
    pub fn bounded(&mut self, bound: u64) -> u64 {
        bounded_u64(bound, || self.random())
    }

    /// Jump ahead by `delta` outputs.
    #[inline]
    pub fn advance(&mut self, delta: u64) -> &mut Self {
        self.lo.advance(delta);
        self.hi.advance(delta);
        self
    }

    /// Jump back by `delta` outputs.
    #[inline]
    pub fn retreat(&mut self, delta: u64) -> &mut Self {
        self.advance(delta.wrapping_neg())
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Pcg32x2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pcg32x2 {{}}")
    }
}

impl SeedableRng for Pcg32x2 {
    type Seed = [u8; 32];

    /// The seed is read as four little-endian `u64`: `state1`, `state2`,
    /// `stream1`, `stream2`, in that order.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 4];
        le::read_u64_into(&seed, &mut seed_u64);

        Self::new(seed_u64[0], seed_u64[1], seed_u64[2], seed_u64[3])
    }
}

impl RngCore for Pcg32x2 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.random()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
