// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A generator handle owning its byte source and gaussian spare slot.

use rand_core::OsRng;

use crate::distr::Gauss;
use crate::source::ByteSource;
use crate::variates;
use crate::Error;

/// A random generator: a [`ByteSource`] together with the one piece of
/// sampling state the crate has, the [`Gauss`] spare slot.
///
/// `Generator` implements `ByteSource` itself, so every [`SecureRng`] method
/// and every distribution can be used with it directly. It also exposes the
/// free functions of [`variates`] as methods, with [`Generator::gauss`]
/// routed through its own spare slot.
///
/// Independent generators never share a spare. Methods that touch the slot
/// take `&mut self`; to share a generator between threads put it behind a
/// `Mutex`, or keep one generator per thread.
///
/// # Example
///
/// ```
/// use rand_secure::Generator;
///
/// let mut rng = Generator::new();
/// let g = rng.gamma_variate(2.0, 1.0).unwrap();
/// let z = rng.gauss(0.0, 1.0).unwrap();
/// let k = rng.binomial_variate(10, 0.5).unwrap();
/// assert!(g >= 0.0 && k <= 10);
/// println!("{} {} {}", g, z, k);
/// ```
///
/// [`SecureRng`]: crate::SecureRng
#[derive(Clone, Debug)]
pub struct Generator<S = OsRng> {
    source: S,
    gauss: Gauss,
}

impl Generator<OsRng> {
    /// Create a generator drawing from the operating system's secure source.
    pub fn new() -> Self {
        Generator::with_source(OsRng)
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Generator::new()
    }
}

impl<S: ByteSource> Generator<S> {
    /// Create a generator drawing from `source`.
    pub fn with_source(source: S) -> Self {
        debug!("creating generator over {}", core::any::type_name::<S>());
        Generator {
            source,
            gauss: Gauss::new(),
        }
    }

    /// Return the byte source, dropping any pending gaussian spare.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Gaussian distribution with mean `mu` and standard deviation `sigma`,
    /// using this generator's spare slot.
    ///
    /// Faster than [`Generator::normal_variate`] as every other call is
    /// answered from the slot.
    pub fn gauss(&mut self, mu: f64, sigma: f64) -> Result<f64, Error> {
        self.gauss.sample(&mut self.source, mu, sigma)
    }

    /// The gaussian spare waiting for the next [`Generator::gauss`] call.
    pub fn pending_gauss(&self) -> Option<f64> {
        self.gauss.pending()
    }

    /// See [`variates::uniform`].
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        variates::uniform(self, a, b)
    }

    /// See [`variates::expo_variate`].
    pub fn expo_variate(&mut self, lambda: f64) -> Result<f64, Error> {
        variates::expo_variate(self, lambda)
    }

    /// See [`variates::gamma_variate`].
    pub fn gamma_variate(&mut self, alpha: f64, beta: f64) -> Result<f64, Error> {
        variates::gamma_variate(self, alpha, beta)
    }

    /// See [`variates::beta_variate`].
    pub fn beta_variate(&mut self, alpha: f64, beta: f64) -> Result<f64, Error> {
        variates::beta_variate(self, alpha, beta)
    }

    /// See [`variates::normal_variate`].
    pub fn normal_variate(&mut self, mu: f64, sigma: f64) -> Result<f64, Error> {
        variates::normal_variate(self, mu, sigma)
    }

    /// See [`variates::log_norm_variate`].
    pub fn log_norm_variate(&mut self, mu: f64, sigma: f64) -> Result<f64, Error> {
        variates::log_norm_variate(self, mu, sigma)
    }

    /// See [`variates::pareto_variate`].
    pub fn pareto_variate(&mut self, alpha: f64) -> Result<f64, Error> {
        variates::pareto_variate(self, alpha)
    }

    /// See [`variates::weibull_variate`].
    pub fn weibull_variate(&mut self, alpha: f64, beta: f64) -> Result<f64, Error> {
        variates::weibull_variate(self, alpha, beta)
    }

    /// See [`variates::triangular`].
    pub fn triangular(&mut self, low: f64, high: f64, mode: Option<f64>) -> Result<f64, Error> {
        variates::triangular(self, low, high, mode)
    }

    /// See [`variates::von_mises_variate`].
    pub fn von_mises_variate(&mut self, mu: f64, kappa: f64) -> Result<f64, Error> {
        variates::von_mises_variate(self, mu, kappa)
    }

    /// See [`variates::binomial_variate`].
    pub fn binomial_variate(&mut self, n: u64, p: f64) -> Result<u64, Error> {
        variates::binomial_variate(self, n, p)
    }
}

impl<S: ByteSource> ByteSource for Generator<S> {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.source.fill_bytes(dest)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::ReplaySource;
    use crate::SecureRng;

    #[test]
    fn gauss_spare_is_per_generator() {
        let mut a = Generator::with_source(ReplaySource::from_units(&[0.3, 0.6]));
        let mut b = Generator::with_source(ReplaySource::from_units(&[0.3, 0.6, 0.9, 0.1]));

        let a1 = a.gauss(0.0, 1.0).unwrap();
        let b1 = b.gauss(0.0, 1.0).unwrap();
        assert_eq!(a1, b1);
        assert_eq!(a.pending_gauss(), b.pending_gauss());

        // draining b's spare leaves a's untouched
        let b2 = b.gauss(0.0, 1.0).unwrap();
        assert_eq!(Some(b2), a.pending_gauss());
        assert_eq!(b.pending_gauss(), None);
        let a2 = a.gauss(0.0, 1.0).unwrap();
        assert_eq!(a2, b2);
        assert_eq!(a.into_source().overdrawn(), 0);
    }

    #[test]
    fn other_variates_do_not_touch_spare() {
        let mut rng = Generator::with_source(crate::test::rng(401));
        rng.gauss(0.0, 1.0).unwrap();
        let spare = rng.pending_gauss();
        rng.normal_variate(0.0, 1.0).unwrap();
        rng.gamma_variate(0.5, 1.0).unwrap();
        let _ = rng.uniform_unit();
        assert_eq!(rng.pending_gauss(), spare);
        assert_eq!(rng.gauss(5.0, 0.0).unwrap(), 5.0);
        assert_eq!(rng.pending_gauss(), None);
    }

    #[test]
    fn os_generator() {
        let mut rng = Generator::new();
        assert!((0.0..1.0).contains(&rng.uniform_unit()));
        assert!(rng.triangular(1.0, 2.0, None).unwrap() <= 2.0);
        assert!(rng.von_mises_variate(0.0, 1.0).unwrap() < core::f64::consts::TAU);
        assert_eq!(rng.binomial_variate(10, 1.0).unwrap(), 10);
    }
}
