// Copyright 2018 Developers of the Rand project.
// Copyright 2016-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The binomial distribution.

use super::utils::log_gamma;
use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binomial distribution `Binomial(n, p)`.
///
/// The number of successes in `n` independent trials, each succeeding with
/// probability `p`; equivalent to `(0..n).filter(|_| rng.uniform_unit() < p).count()`.
/// Samples are integers in `[0, n]`.
///
/// This distribution has density function:
/// `f(k) = n!/(k! (n-k)!) p^k (1-p)^(n-k)` for `k >= 0`.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Binomial, Distribution};
///
/// let bin = Binomial::new(20, 0.3).unwrap();
/// let v = bin.sample(&mut OsRng);
/// println!("{} is from a binomial distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binomial {
    /// Number of trials.
    n: u64,
    /// Probability of success.
    p: f64,
}

impl Binomial {
    /// Construct a new `Binomial` with the given shape parameters `n` (number
    /// of trials) and `p` (probability of success).
    pub fn new(n: u64, p: f64) -> Result<Binomial, Error> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameter("binomial_variate: p must be in range [0, 1]"));
        }
        Ok(Binomial { n, p })
    }
}

impl Distribution<u64> for Binomial {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> u64 {
        // Handle these values directly.
        if self.p == 0.0 {
            return 0;
        } else if self.p == 1.0 {
            return self.n;
        }

        if self.n == 1 {
            return u64::from(rng.uniform_unit() < self.p);
        }

        // binomial distribution is symmetrical with respect to p -> 1-p, k -> n-k
        if self.p > 0.5 {
            return self.n - sample_low_p(rng, self.n, 1.0 - self.p);
        }
        sample_low_p(rng, self.n, self.p)
    }
}

/// Sample `Binomial(n, p)` for `0 < p <= 0.5`.
fn sample_low_p<R: SecureRng + ?Sized>(rng: &mut R, n: u64, p: f64) -> u64 {
    let result = if (n as f64) * p < 10.0 {
        geometric_waiting(rng, n, p)
    } else {
        transformed_rejection(rng, n, p)
    };
    result.min(n)
}

/// Algorithm BG: the geometric method of Devroye, `O(np)`.
///
/// Counts successes by jumping over the geometrically distributed runs of
/// failures between them until the trial index passes `n`.
///
/// Luc Devroye. 1986. *Non-Uniform Random Variate Generation*. Springer,
/// p. 525.
fn geometric_waiting<R: SecureRng + ?Sized>(rng: &mut R, n: u64, p: f64) -> u64 {
    let c = (1.0 - p).log2();
    if c == 0.0 {
        // p is too small to ever register a success
        return 0;
    }
    let n = n as f64;
    let mut x = 0;
    // trial index of the latest success; kept as a float as the jump may
    // be infinite when the uniform draw is zero
    let mut y = 0.0;
    loop {
        y += (rng.uniform_unit().log2() / c).floor() + 1.0;
        if y > n {
            return x;
        }
        x += 1;
    }
}

/// Algorithm BTRS: transformed rejection with squeeze by Hörmann.
///
/// The acceptance test compares `ln(v)` against the log of the rescaled
/// binomial probability; the published paper omits the logarithm of `v`
/// there, which is an erratum.
///
/// Wolfgang Hörmann. 1993. "The generation of binomial random variates".
/// *Journal of Statistical Computation and Simulation* 46, 1-2, 101-110.
fn transformed_rejection<R: SecureRng + ?Sized>(rng: &mut R, n: u64, p: f64) -> u64 {
    let float_n = n as f64;
    // standard deviation of the distribution
    let spq = (float_n * p * (1.0 - p)).sqrt();
    let b = 1.15 + 2.53 * spq;
    let a = -0.0873 + 0.0248 * b + 0.01 * p;
    let c = float_n * p + 0.5;
    let vr = 0.92 - 4.2 / b;

    // constants of the full acceptance test, only computed once a
    // candidate escapes the squeeze
    let mut setup: Option<(f64, f64, f64, f64)> = None;

    loop {
        let u = rng.uniform_unit() - 0.5;
        let us = 0.5 - u.abs();
        let k = ((2.0 * a / us + b) * u + c).floor();
        if !(k >= 0.0 && k <= float_n) {
            continue;
        }

        // The early-out squeeze test substantially reduces the number of
        // acceptance condition evaluations.
        let v = rng.uniform_unit();
        if us >= 0.07 && v <= vr {
            return k as u64;
        }

        let (alpha, lpq, m, h) = *setup.get_or_insert_with(|| {
            trace!("binomial: BTRS acceptance setup for n = {}, p = {}", n, p);
            let m = ((float_n + 1.0) * p).floor();
            (
                (2.83 + 5.1 / b) * spq,
                (p / (1.0 - p)).ln(),
                m,
                log_gamma(m + 1.0) + log_gamma(float_n - m + 1.0),
            )
        });
        let v = v * alpha / (a / (us * us) + b);
        if v.ln() <= h - log_gamma(k + 1.0) - log_gamma(float_n - k + 1.0) + (k - m) * lpq {
            return k as u64;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_binomial_mean_and_variance<R: SecureRng>(n: u64, p: f64, rng: &mut R) {
        let binomial = Binomial::new(n, p).unwrap();

        let expected_mean = n as f64 * p;
        let expected_variance = n as f64 * p * (1.0 - p);

        let mut results = vec![0.0; 10_000];
        for i in results.iter_mut() {
            *i = binomial.sample(rng) as f64;
        }

        let mean = results.iter().sum::<f64>() / results.len() as f64;
        assert!(
            (mean - expected_mean).abs() < expected_mean / 50.0,
            "Binomial({}, {}): mean {}",
            n,
            p,
            mean
        );

        let variance =
            results.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / results.len() as f64;
        assert!(
            (variance - expected_variance).abs() < expected_variance / 10.0,
            "Binomial({}, {}): variance {}",
            n,
            p,
            variance
        );
    }

    #[test]
    fn test_binomial() {
        let mut rng = crate::test::rng(351);
        test_binomial_mean_and_variance(150, 0.1, &mut rng);
        test_binomial_mean_and_variance(70, 0.6, &mut rng);
        test_binomial_mean_and_variance(40, 0.5, &mut rng);
        test_binomial_mean_and_variance(20, 0.7, &mut rng);
        test_binomial_mean_and_variance(20, 0.5, &mut rng);
        test_binomial_mean_and_variance(1000, 0.02, &mut rng);
        test_binomial_mean_and_variance(100_000, 0.35, &mut rng);
    }

    #[test]
    fn test_binomial_end_points() {
        let mut rng = crate::test::rng(352);
        for _ in 0..100 {
            assert_eq!(rng.sample(Binomial::new(20, 0.0).unwrap()), 0);
            assert_eq!(rng.sample(Binomial::new(20, 1.0).unwrap()), 20);
            assert_eq!(rng.sample(Binomial::new(0, 0.5).unwrap()), 0);
            assert_eq!(rng.sample(Binomial::new(5, 1e-18).unwrap()), 0);
        }
    }

    #[test]
    fn test_binomial_range() {
        let mut rng = crate::test::rng(353);
        for &(n, p) in &[
            (1, 0.3),
            (1, 0.9),
            (5, 0.25),
            (5, 0.75),
            (100, 0.25),
            (100, 0.75),
            (10_000, 0.75),
        ] {
            let d = Binomial::new(n, p).unwrap();
            for _ in 0..2000 {
                assert!(d.sample(&mut rng) <= n);
            }
        }
    }

    #[test]
    fn test_binomial_single_trial() {
        let mut rng = crate::test::rng(354);
        let d = Binomial::new(1, 0.3).unwrap();
        let hits = (0..20_000).filter(|_| d.sample(&mut rng) == 1).count();
        let frac = hits as f64 / 20_000.0;
        assert!((frac - 0.3).abs() < 0.02, "fraction {}", frac);
    }

    #[test]
    fn test_binomial_invalid_p() {
        for &p in &[-0.5, 1.5, f64::NAN] {
            assert_eq!(
                Binomial::new(1, p),
                Err(Error::InvalidParameter("binomial_variate: p must be in range [0, 1]"))
            );
        }
    }
}
