// Copyright 2018 Developers of the Rand project.
// Copyright 2013-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generating random samples from probability distributions
//!
//! This module is the sampling engine of the crate. Each distribution is a
//! small parameter struct: its constructor validates the parameters and
//! returns an [`Error`] when they fall outside the distribution's domain;
//! once constructed, [`Distribution::sample`] always terminates with a value
//! in the documented range.
//!
//! Every sampler draws its randomness through [`SecureRng::uniform_unit`]
//! only. Rejection samplers call it a variable number of times per sample.
//!
//! The following distributions are provided:
//!
//! - [`Uniform`] on a real interval
//! - [`Exp`]onential distribution
//! - [`Gamma`] and [`Beta`] distributions
//! - [`Normal`] and [`LogNormal`] distributions, plus the stateful [`Gauss`]
//!   pair generator
//! - [`Pareto`] and [`Weibull`] distributions
//! - [`Triangular`] distribution
//! - [`VonMises`] distribution on the circle
//! - [`Binomial`] distribution
//!
//! [`Error`]: crate::Error
//! [`SecureRng::uniform_unit`]: crate::SecureRng::uniform_unit

use core::marker::PhantomData;

use crate::SecureRng;

pub use self::binomial::Binomial;
pub use self::exponential::Exp;
pub use self::gamma::{Beta, Gamma};
pub use self::normal::{Gauss, LogNormal, Normal};
pub use self::pareto::Pareto;
pub use self::triangular::Triangular;
pub use self::uniform::Uniform;
pub use self::von_mises::VonMises;
pub use self::weibull::Weibull;

mod binomial;
mod exponential;
mod gamma;
mod normal;
mod pareto;
mod triangular;
mod uniform;
mod utils;
mod von_mises;
mod weibull;

/// Types (distributions) that can be used to create a random instance of `T`.
///
/// It is possible to sample from a distribution through both the
/// `Distribution` and [`SecureRng`] traits, via `distr.sample(&mut rng)` and
/// `rng.sample(distr)`.
pub trait Distribution<T> {
    /// Generate a random value of `T`, using `rng` as the source of randomness.
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> T;

    /// Create an iterator that generates random values of `T`, using `rng` as
    /// the source of randomness.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_core::OsRng;
    /// use rand_secure::distr::{Binomial, Distribution};
    ///
    /// let coins = Binomial::new(10, 0.5).unwrap();
    /// let heads: Vec<u64> = coins.sample_iter(OsRng).take(5).collect();
    /// assert!(heads.iter().all(|&h| h <= 10));
    /// ```
    fn sample_iter<R>(self, rng: R) -> DistIter<Self, R, T>
    where
        R: SecureRng,
        Self: Sized,
    {
        DistIter {
            distr: self,
            rng,
            phantom: PhantomData,
        }
    }
}

impl<'a, T, D: Distribution<T>> Distribution<T> for &'a D {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> T {
        (*self).sample(rng)
    }
}

/// An iterator that generates random values of `T` with distribution `D`,
/// using `R` as the source of randomness.
///
/// This `struct` is created by the [`sample_iter`] method on [`Distribution`].
/// See its documentation for more.
///
/// [`sample_iter`]: Distribution::sample_iter
#[derive(Debug)]
pub struct DistIter<D, R, T> {
    distr: D,
    rng: R,
    phantom: PhantomData<fn() -> T>,
}

impl<D, R, T> Iterator for DistIter<D, R, T>
where
    D: Distribution<T>,
    R: SecureRng,
{
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<T> {
        Some(self.distr.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
