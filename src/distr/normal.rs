// Copyright 2018 Developers of the Rand project.
// Copyright 2013 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The normal and derived distributions.

use core::f64::consts::TAU;

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 4 * exp(-0.5) / sqrt(2.0)
const NV_MAGICCONST: f64 = 1.7155277699214135;

/// The normal distribution `N(mu, sigma**2)`.
///
/// Sampled with the Kinderman–Monahan ratio-of-uniforms method[^1], which
/// draws two uniforms per attempt and accepts about 73% of attempts. With
/// `sigma == 0` every sample is exactly `mu`.
///
/// See [`Gauss`] for a faster generator which caches the second deviate of
/// each pair it computes.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, Normal};
///
/// // mean 2, standard deviation 3
/// let normal = Normal::new(2.0, 3.0).unwrap();
/// let v = normal.sample(&mut OsRng);
/// println!("{} is from a N(2, 9) distribution", v)
/// ```
///
/// [^1]: A. J. Kinderman and J. F. Monahan. 1977. "Computer Generation of
///       Random Variables Using the Ratio of Uniform Deviates". *ACM Trans.
///       Math. Softw.* 3, 3, 257-260.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Construct a new `Normal` distribution with the given mean and
    /// standard deviation.
    #[inline]
    pub fn new(mu: f64, sigma: f64) -> Result<Normal, Error> {
        check_sigma(sigma)?;
        Ok(Normal { mu, sigma })
    }

    /// Returns the mean (`μ`) of the distribution.
    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Returns the standard deviation (`σ`) of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.sigma
    }
}

impl Distribution<f64> for Normal {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z = loop {
            let u1 = rng.uniform_unit();
            let u2 = 1.0 - rng.uniform_unit();
            let z = NV_MAGICCONST * (u1 - 0.5) / u2;
            if z * z / 4.0 <= -u2.ln() {
                break z;
            }
        };
        self.mu + z * self.sigma
    }
}

#[inline]
fn check_sigma(sigma: f64) -> Result<(), Error> {
    if !(sigma >= 0.0) {
        return Err(Error::InvalidParameter("sigma must be >= 0.0"));
    }
    Ok(())
}

/// The log-normal distribution `ln N(mu, sigma**2)`.
///
/// If `X` is log-normal distributed, then `ln(X)` is `N(mu, sigma**2)`
/// distributed. `sigma` must be strictly positive.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, LogNormal};
///
/// // mean 2, standard deviation 3
/// let log_normal = LogNormal::new(2.0, 3.0).unwrap();
/// let v = log_normal.sample(&mut OsRng);
/// println!("{} is from an ln N(2, 9) distribution", v)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogNormal {
    norm: Normal,
}

impl LogNormal {
    /// Construct a new `LogNormal` distribution with the given mean
    /// and standard deviation of the logarithm of the distribution.
    #[inline]
    pub fn new(mu: f64, sigma: f64) -> Result<LogNormal, Error> {
        if !(sigma > 0.0) {
            return Err(Error::InvalidParameter("log_norm_variate: sigma must be > 0.0"));
        }
        Ok(LogNormal {
            norm: Normal { mu, sigma },
        })
    }
}

impl Distribution<f64> for LogNormal {
    #[inline]
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.norm.sample(rng).exp()
    }
}

/// Normal deviates from a polar (Box–Muller) pair generator with a one-slot
/// cache.
///
/// Each computation produces two independent standard deviates from two
/// uniforms, `cos(2πu1) * r` and `sin(2πu1) * r` with
/// `r = sqrt(-2 ln(1 - u2))`. The first is returned, the second is kept as
/// the pending spare and handed out (and cleared) by the next call, which
/// then draws no randomness at all.
///
/// The slot belongs to this value, so independent `Gauss` instances never
/// interfere. Sampling takes `&mut self`: to share one instance between
/// threads wrap it in a lock, or keep it confined to a single thread.
///
/// The spare is not tied to the source or the parameters: a spare computed
/// while sampling from one source is returned by the next call even if that
/// call passes a different source, scaled by that call's `mu` and `sigma`.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::Gauss;
///
/// let mut gauss = Gauss::new();
/// let a = gauss.sample(&mut OsRng, 0.0, 1.0).unwrap();
/// assert!(gauss.pending().is_some());
/// let b = gauss.sample(&mut OsRng, 0.0, 1.0).unwrap();
/// assert!(gauss.pending().is_none());
/// println!("{} {}", a, b);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gauss {
    next: Option<f64>,
}

impl Gauss {
    /// Create a generator with an empty spare slot.
    pub fn new() -> Gauss {
        Gauss { next: None }
    }

    /// Sample from `N(mu, sigma**2)`, consuming the pending spare if there
    /// is one.
    pub fn sample<R: SecureRng + ?Sized>(
        &mut self,
        rng: &mut R,
        mu: f64,
        sigma: f64,
    ) -> Result<f64, Error> {
        check_sigma(sigma)?;
        let z = match self.next.take() {
            Some(z) => {
                trace!("gauss: consuming cached spare deviate");
                z
            }
            None => {
                let x_tau = rng.uniform_unit() * TAU;
                let g2rad = (-2.0 * (1.0 - rng.uniform_unit()).ln()).sqrt();
                self.next = Some(x_tau.sin() * g2rad);
                trace!("gauss: computed a new pair, caching the spare");
                x_tau.cos() * g2rad
            }
        };
        Ok(mu + z * sigma)
    }

    /// The standard deviate waiting to be returned by the next call, if any.
    pub fn pending(&self) -> Option<f64> {
        self.next
    }

    /// Drop the pending spare, if any.
    pub fn clear(&mut self) {
        self.next = None;
    }
}
