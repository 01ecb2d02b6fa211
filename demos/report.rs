// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the classic PCG demo report for both generators: some raw words,
//! the same words again after jumping back, coin tosses, dice rolls and a
//! shuffled deck of cards.
//!
//! Run with `cargo run --example report`.

use rand_pcg32x2::{Pcg32, Pcg32x2};
use std::mem::size_of;

const SUITS: usize = 4;
const CARDS: usize = 52;
const ROUNDS: usize = 5;

macro_rules! report {
    ($rng:ident, $word:ty, $fmt:literal) => {
        for round in 1..=ROUNDS {
            println!("Round {}:", round);

            print!("  {}bit:", <$word>::BITS);
            for _ in 0..6 {
                print!($fmt, $rng.random());
            }
            println!();

            print!("  Again:");
            $rng.retreat(6);
            for _ in 0..6 {
                print!($fmt, $rng.random());
            }
            println!();

            print!("  Coins: ");
            for _ in 0..65 {
                print!("{}", if $rng.bounded(2) == 1 { 'H' } else { 'T' });
            }
            println!();

            print!("  Rolls:");
            for _ in 0..33 {
                print!(" {}", $rng.bounded(6) + 1);
            }
            println!();

            let mut cards: [usize; CARDS] = core::array::from_fn(|i| i);
            for i in (2..=CARDS).rev() {
                let chosen = $rng.bounded(i as $word) as usize;
                cards.swap(chosen, i - 1);
            }
            print!("  Cards:");
            for (i, &c) in cards.iter().enumerate() {
                let rank = b"A23456789TJQK"[c / SUITS] as char;
                let suit = b"hcds"[c % SUITS] as char;
                print!(" {}{}", rank, suit);
                if (i + 1) % 22 == 0 {
                    print!("\n\t");
                }
            }
            println!();
        }
    };
}

fn main() {
    let mut rng = Pcg32::new(42, 54);
    println!("pcg32 random:");
    println!("      -  result:      32-bit unsigned int (u32)");
    println!("      -  period:      2^64   (* 2^63 streams)");
    println!("      -  state type:  Pcg32 ({} bytes)", size_of::<Pcg32>());
    println!("      -  output func: XSH-RR");
    println!();
    report!(rng, u32, " {:#010x}");

    println!();

    let mut rng = Pcg32x2::new(42, 42, 54, 54);
    println!("pcg32x2 random:");
    println!("      -  result:      64-bit unsigned int (u64)");
    println!("      -  period:      2^64   (* 2^63 streams)");
    println!("      -  state type:  Pcg32x2 ({} bytes)", size_of::<Pcg32x2>());
    println!("      -  output func: XSH-RR");
    println!();
    report!(rng, u64, " {:#018x}");
}
