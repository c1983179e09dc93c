// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generators and test sources.
//!
//! - [`Generator`] bundles a [`ByteSource`] with the gaussian spare slot and
//!   is the usual entry point for applications.
//! - [`mock::ReplaySource`] replays scripted bytes, for exact-value tests.
//!
//! For raw entropy, [`OsRng`] is re-exported from `rand_core`.
//!
//! [`ByteSource`]: crate::ByteSource

pub mod mock;
mod generator;

pub use self::generator::Generator;
pub use rand_core::OsRng;
