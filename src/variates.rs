// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-shot sampling functions.
//!
//! Each function validates its parameters, builds the matching distribution
//! from [`distr`] and draws a single value. When sampling many values with the
//! same parameters, constructing the distribution once is cheaper.
//!
//! The only stateful sampler, `gauss`, is not here: it lives on
//! [`Generator::gauss`] and [`Gauss`], which own the spare slot.
//!
//! [`distr`]: crate::distr
//! [`Generator::gauss`]: crate::Generator::gauss
//! [`Gauss`]: crate::distr::Gauss

use crate::distr::{
    Beta, Binomial, Distribution, Exp, Gamma, LogNormal, Normal, Pareto, Triangular, Uniform,
    VonMises, Weibull,
};
use crate::{Error, SecureRng};

/// A value in `[a, b)` (or `[a, b]` depending on rounding).
#[inline]
pub fn uniform<R: SecureRng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    Uniform::new(a, b).sample(rng)
}

/// Exponential distribution; `lambda` is 1.0 divided by the desired mean.
///
/// Fails with [`Error::ArithmeticDegenerate`] when `lambda == 0`.
pub fn expo_variate<R: SecureRng + ?Sized>(rng: &mut R, lambda: f64) -> Result<f64, Error> {
    Ok(Exp::new(lambda)?.sample(rng))
}

/// Gamma distribution with shape `alpha > 0` and scale `beta > 0`.
pub fn gamma_variate<R: SecureRng + ?Sized>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
) -> Result<f64, Error> {
    Ok(Gamma::new(alpha, beta)?.sample(rng))
}

/// Beta distribution with `alpha > 0` and `beta > 0`; values in `[0, 1]`.
pub fn beta_variate<R: SecureRng + ?Sized>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
) -> Result<f64, Error> {
    Ok(Beta::new(alpha, beta)?.sample(rng))
}

/// Normal distribution with mean `mu` and standard deviation `sigma >= 0`.
pub fn normal_variate<R: SecureRng + ?Sized>(
    rng: &mut R,
    mu: f64,
    sigma: f64,
) -> Result<f64, Error> {
    Ok(Normal::new(mu, sigma)?.sample(rng))
}

/// Log-normal distribution: `exp(normal_variate(mu, sigma))`, `sigma > 0`.
pub fn log_norm_variate<R: SecureRng + ?Sized>(
    rng: &mut R,
    mu: f64,
    sigma: f64,
) -> Result<f64, Error> {
    Ok(LogNormal::new(mu, sigma)?.sample(rng))
}

/// Pareto distribution with shape `alpha`.
///
/// Fails with [`Error::ArithmeticDegenerate`] when `alpha == 0`.
pub fn pareto_variate<R: SecureRng + ?Sized>(rng: &mut R, alpha: f64) -> Result<f64, Error> {
    Ok(Pareto::new(alpha)?.sample(rng))
}

/// Weibull distribution with scale `alpha` and shape `beta`.
///
/// Fails with [`Error::ArithmeticDegenerate`] when `beta == 0`.
pub fn weibull_variate<R: SecureRng + ?Sized>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
) -> Result<f64, Error> {
    Ok(Weibull::new(alpha, beta)?.sample(rng))
}

/// Triangular distribution on `[low, high]` with the given `mode`, or the
/// midpoint when `mode` is `None`.
pub fn triangular<R: SecureRng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    mode: Option<f64>,
) -> Result<f64, Error> {
    Ok(Triangular::new(low, high, mode)?.sample(rng))
}

/// Von Mises distribution with mean angle `mu` and concentration
/// `kappa >= 0`; angles in `[0, 2π)`.
pub fn von_mises_variate<R: SecureRng + ?Sized>(
    rng: &mut R,
    mu: f64,
    kappa: f64,
) -> Result<f64, Error> {
    Ok(VonMises::new(mu, kappa)?.sample(rng))
}

/// Binomial distribution: successes in `n` trials with probability `p`.
pub fn binomial_variate<R: SecureRng + ?Sized>(rng: &mut R, n: u64, p: f64) -> Result<u64, Error> {
    Ok(Binomial::new(n, p)?.sample(rng))
}
