// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The PCG32 random number generator and a 64-bit composition of it.
//!
//! This is a native Rust implementation of the [PCG] `pcg32` generator
//! (64-bit LCG state, "XSH-RR" output permutation) together with a 64-bit
//! generator built from two independent `pcg32` streams.
//!
//! ## Generators
//!
//! This crate provides:
//!
//! -   [`Pcg32`] aka [`Lcg64Xsh32`], officially known as `pcg32`. It yields
//!     32-bit output, has a period of 2<sup>64</sup> and 2<sup>63</sup>
//!     selectable streams.
//! -   [`Pcg64`] aka [`Pcg32x2`], two `pcg32` generators ("lo" and "hi")
//!     whose outputs are concatenated into one 64-bit word.
//!
//! Both are deterministic and portable, with testing against reference
//! vectors. Neither is suitable for cryptographic use.
//!
//! ## Seeding (construction)
//!
//! A generator starts out unseeded and is seeded with a state and a stream
//! (sequence) selector. Seeding may be repeated to reset the sequence:
//! ```
//! use rand_pcg32x2::Pcg32;
//!
//! let mut rng = Pcg32::unseeded();
//! assert_eq!(rng.seed(1, 1).random(), 3380776849);
//! assert_eq!(rng.seed(1, 1).random(), 3380776849);
//! ```
//!
//! Generators also implement [`SeedableRng`], so `seed_from_u64`,
//! `from_seed` and `from_rng` are all available.
//!
//! ## Generation
//!
//! Besides raw output, both generators offer unbiased sampling from
//! `[0, bound)` and jumping forwards or backwards in logarithmic time:
//! ```
//! use rand_pcg32x2::Pcg32;
//!
//! let mut rng = Pcg32::new(42, 54);
//! let first = rng.random();
//! let roll = rng.bounded(6) + 1;
//! assert!((1..=6).contains(&roll));
//!
//! rng.retreat(2);
//! assert_eq!(rng.random(), first);
//! ```
//!
//! Generators implement [`RngCore`], so the `rand::Rng` extension trait
//! may be used with them as well.
//!
//! [PCG]: https://www.pcg-random.org/
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

#[macro_use]
mod log_macros;

mod bounded;
mod lcg;
mod pcg32;
mod pcg32x2;

pub use rand_core;

pub use self::pcg32::{Lcg64Xsh32, Pcg32};
pub use self::pcg32x2::{Pcg32x2, Pcg64};
