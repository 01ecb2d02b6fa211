// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2017 Paul Dicker.
// Copyright 2014-2017 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PCG random number generators

use crate::bounded::bounded_u32;
use crate::lcg;
use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

/// A PCG random number generator (XSH RR 64/32 (LCG) variant).
///
/// Permuted Congruential Generator with 64-bit state, internal Linear
/// Congruential Generator, and 32-bit output via "xorshift high (bits),
/// random rotation" output function.
///
/// This is a 64-bit LCG with explicitly chosen stream with the PCG-XSH-RR
/// output function. This combination is the standard `pcg32`.
///
/// Despite the name, this implementation uses 16 bytes (128 bit) space
/// comprising 64 bits of state and 64 bits stream selector. These are both
/// set by [`Lcg64Xsh32::seed`], or by `SeedableRng` using a 128-bit seed.
///
/// A value made by [`Lcg64Xsh32::unseeded`] (or `Default`) has a zero
/// increment and must be seeded before use.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Lcg64Xsh32 {
    state: u64,
    increment: u64,
}

/// [`Lcg64Xsh32`] is also officially known as `pcg32`.
pub type Pcg32 = Lcg64Xsh32;

impl Lcg64Xsh32 {
    /// An unseeded generator: zero state and zero increment.
    pub const fn unseeded() -> Self {
        Lcg64Xsh32 {
            state: 0,
            increment: 0,
        }
    }

    /// Construct an instance compatible with PCG seed and stream.
    ///
    /// Note that the highest bit of the `stream` parameter is discarded
    /// to simplify upholding internal invariants.
    ///
    /// PCG specifies the following default values for both parameters:
    ///
    /// - `state = 0xcafef00dd15ea5e5`
    /// - `stream = 0xa02bdbf7bb3c0a7`
    // Note: stream is 1442695040888963407u64 >> 1
    pub fn new(state: u64, stream: u64) -> Self {
        let mut pcg = Self::unseeded();
        pcg.seed(state, stream);
        pcg
    }

    /// (Re)seed the generator with an initial `state` and a `stream`
    /// selector.
    ///
    /// The same pair always yields the same sequence; generators differing
    /// only in `stream` produce unrelated sequences.
    pub fn seed(&mut self, state: u64, stream: u64) -> &mut Self {
        trace!("Seeding Lcg64Xsh32 on stream {:#x}", stream);
        // The increment must be odd, hence we discard one bit:
        self.increment = (stream << 1) | 1;
        // Move away from the initial value in two steps, injecting the seed
        // in between.
        self.state = 0;
        self.step();
        self.state = self.state.wrapping_add(state);
        self.step();
        self
    }

    /// Return the next 32 random bits, advancing the sequence by one.
    #[inline]
    pub fn random(&mut self) -> u32 {
        let state = self.state;
        self.step();
        output_xsh_rr(state)
    }

    /// Return a value uniformly distributed in `[0, bound)`.
    ///
    /// `bound == 0` returns `0` and leaves the generator untouched.
    #[inline]
    pub fn bounded(&mut self, bound: u32) -> u32 {
        bounded_u32(bound, || self.random())
    }

    /// Multi-step advance functions (jump-ahead, jump-back)
    ///
    /// Using this function is equivalent to calling [`random`] `delta`
    /// number of times, but takes a fixed 64 rounds.
    ///
    /// [`random`]: Lcg64Xsh32::random
    #[inline]
    pub fn advance(&mut self, delta: u64) -> &mut Self {
        self.state = lcg::jump(self.state, self.increment, delta);
        self
    }

    /// Undo `delta` steps. Since the period is exactly 2<sup>64</sup>, this
    /// is an advance by `2^64 - delta`.
    #[inline]
    pub fn retreat(&mut self, delta: u64) -> &mut Self {
        self.advance(delta.wrapping_neg())
    }

    #[inline(always)]
    fn step(&mut self) {
        // prepare the LCG for the next round
        self.state = lcg::step(self.state, self.increment);
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Lcg64Xsh32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lcg64Xsh32 {{}}")
    }
}

impl SeedableRng for Lcg64Xsh32 {
    type Seed = [u8; 16];

    /// We use a single 127-bit seed to initialise the state and select a stream.
    /// One `seed` bit (highest bit of `seed[15]`) is ignored.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 2];
        le::read_u64_into(&seed, &mut seed_u64);

        Self::new(seed_u64[0], seed_u64[1])
    }
}

impl RngCore for Lcg64Xsh32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.random()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
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

// Output function XSH RR: xorshift high (bits), followed by a random rotate
#[inline(always)]
fn output_xsh_rr(state: u64) -> u32 {
    const ROTATE: u32 = 59; // 64 - 5
    const XSHIFT: u32 = 18; // (5 + 32) / 2
    const SPARE: u32 = 27; // 64 - 32 - 5

    let rot = (state >> ROTATE) as u32;
    let xsh = (((state >> XSHIFT) ^ state) >> SPARE) as u32;
    xsh.rotate_right(rot)
}
