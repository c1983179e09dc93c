// Copyright 2018 Developers of the Rand project.
// Copyright 2013-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Secure random variates and derived artifacts.
//!
//! This crate samples from the classic continuous and discrete probability
//! distributions, and builds shuffles, weighted choices, tokens and
//! passphrases, drawing all of its entropy from a cryptographically secure
//! source.
//!
//! # Quick start
//!
//! ```
//! use rand_secure::Generator;
//! use rand_secure::seq::IndexedRandom;
//!
//! let mut rng = Generator::new();
//! let wait = rng.expo_variate(1.0 / 30.0).unwrap();
//! let height = rng.gauss(170.0, 8.0).unwrap();
//! let winner = ["ana", "bo", "cy"].choice(&mut rng);
//! println!("{} {} {:?}", wait, height, winner);
//! ```
//!
//! # The entropy source
//!
//! Everything is built on [`ByteSource`], a supplier of random bytes. It is
//! implemented for the operating-system source [`OsRng`] and, through the
//! [`CryptoSource`] adapter, for any generator implementing `rand_core`'s
//! `CryptoRng`. Nothing in this crate falls back to a statistical-quality
//! generator.
//!
//! [`SecureRng`] is implemented for every `ByteSource` and supplies the
//! uniform primitives: [`SecureRng::uniform_unit`] returns a 53-bit float
//! in `[0, 1)`, and [`SecureRng::rand_below`] an unbiased integer.
//!
//! # Distributions
//!
//! The [`distr`] module holds one parameter type per distribution, each
//! implementing [`Distribution`]. Constructors validate parameters and
//! return an [`Error`]; sampling is infallible afterwards. The [`variates`]
//! module wraps each of them in a one-shot function, and [`Generator`]
//! exposes those as methods.
//!
//! # Sequences and strings
//!
//! See [`seq`] for choice, weighted choice, sampling without replacement and
//! shuffling, [`integers`] for integer ranges and [`strings`] for tokens and
//! passphrases.
//!
//! # Crate features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]. This is
//!   all it gates: the crate always depends on the standard library, so
//!   turning it off does not make it `no_std`.
//! - `log`: emits `log` records for generator creation and rejected inputs
//! - `serde`: (de)serialisation of distribution parameters

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables), deny(warnings))))]

#[macro_use]
mod log_macros;

pub mod distr;
mod error;
pub mod integers;
mod rng;
pub mod rngs;
pub mod seq;
mod source;
pub mod strings;
pub mod variates;

pub use crate::distr::Distribution;
pub use crate::error::Error;
pub use crate::rng::SecureRng;
pub use crate::rngs::{Generator, OsRng};
pub use crate::source::{ByteSource, CryptoSource};

#[cfg(test)]
mod test {
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::CryptoSource;

    /// Construct a deterministic secure source for reproducible tests
    pub fn rng(seed: u64) -> CryptoSource<ChaCha8Rng> {
        CryptoSource::new(ChaCha8Rng::seed_from_u64(seed))
    }
}
