// Copyright 2018 Developers of the Rand project.
// Copyright 2013 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The exponential distribution.

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The exponential distribution `Exp(lambda)`.
///
/// `lambda` is 1.0 divided by the desired mean. Samples range over
/// `[0, +inf)` when `lambda` is positive and over `(-inf, 0]` when it is
/// negative. An infinite `lambda` always yields zero.
///
/// Sampled by inversion: `-ln(1 - u) / lambda`. Using `1 - u` keeps the
/// logarithm away from zero.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, Exp};
///
/// let exp = Exp::new(2.0).unwrap();
/// let v = exp.sample(&mut OsRng);
/// println!("{} is from a Exp(2) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exp {
    lambda: f64,
}

impl Exp {
    /// Construct a new `Exp` with the given rate parameter `lambda`.
    pub fn new(lambda: f64) -> Result<Exp, Error> {
        if lambda.is_nan() {
            return Err(Error::InvalidParameter("expo_variate: lambda is NaN"));
        }
        if lambda == 0.0 {
            return Err(Error::ArithmeticDegenerate("expo_variate: lambda must be nonzero"));
        }
        Ok(Exp { lambda })
    }
}

impl Distribution<f64> for Exp {
    #[inline]
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        -(1.0 - rng.uniform_unit()).ln() / self.lambda
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exp() {
        let exp = Exp::new(10.0).unwrap();
        let mut rng = crate::test::rng(221);
        for _ in 0..1000 {
            assert!(exp.sample(&mut rng) >= 0.0);
        }
    }

    #[test]
    fn sign_follows_lambda() {
        let mut rng = crate::test::rng(222);
        let pos = Exp::new(2.0).unwrap();
        let neg = Exp::new(-2.0).unwrap();
        let inf = Exp::new(f64::INFINITY).unwrap();
        for _ in 0..100 {
            assert!(pos.sample(&mut rng) >= 0.0);
            assert!(neg.sample(&mut rng) <= 0.0);
            assert_eq!(inf.sample(&mut rng), 0.0);
        }
    }

    #[test]
    fn mean() {
        let exp = Exp::new(2.0).unwrap();
        let mut rng = crate::test::rng(223);
        let n = 100_000;
        let mean = (0..n).map(|_| exp.sample(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.5 * 0.05, "mean {}", mean);
    }

    #[test]
    fn invalid() {
        assert_eq!(
            Exp::new(0.0),
            Err(Error::ArithmeticDegenerate("expo_variate: lambda must be nonzero"))
        );
        assert!(matches!(Exp::new(f64::NAN), Err(Error::InvalidParameter(_))));
    }
}
