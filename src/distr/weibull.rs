// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Weibull distribution.

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples floating-point numbers according to the Weibull distribution
/// with scale `alpha` and shape `beta`.
///
/// Sampled by inversion, `alpha * (-ln(1 - u))^(1 / beta)`.
///
/// # Example
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::Weibull;
/// use rand_secure::SecureRng;
///
/// let val = OsRng.sample(Weibull::new(1., 10.).unwrap());
/// println!("{}", val);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weibull {
    inv_shape: f64,
    scale: f64,
}

impl Weibull {
    /// Construct a new `Weibull` distribution with given scale `alpha` and
    /// shape `beta`.
    pub fn new(alpha: f64, beta: f64) -> Result<Weibull, Error> {
        if alpha.is_nan() || beta.is_nan() {
            return Err(Error::InvalidParameter("weibull_variate: alpha and beta must not be NaN"));
        }
        if beta == 0.0 {
            return Err(Error::ArithmeticDegenerate("weibull_variate: beta must be nonzero"));
        }
        Ok(Weibull { inv_shape: 1.0 / beta, scale: alpha })
    }
}

impl Distribution<f64> for Weibull {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.scale * (-(1.0 - rng.uniform_unit()).ln()).powf(self.inv_shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid() {
        assert_eq!(
            Weibull::new(1.0, 0.0),
            Err(Error::ArithmeticDegenerate("weibull_variate: beta must be nonzero"))
        );
        assert!(matches!(Weibull::new(f64::NAN, 1.0), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn sample() {
        let scale = 1.0;
        let shape = 2.0;
        let d = Weibull::new(scale, shape).unwrap();
        let mut rng = crate::test::rng(301);
        for _ in 0..1000 {
            let r = d.sample(&mut rng);
            assert!(r >= 0.);
        }
    }

    #[test]
    fn shape_one_is_exponential() {
        // Weibull(alpha, 1) is exponential with mean alpha
        let d = Weibull::new(3.0, 1.0).unwrap();
        let mut rng = crate::test::rng(302);
        let n = 20_000;
        let mean = (0..n).map(|_| d.sample(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 3.0).abs() < 0.15, "mean {}", mean);
    }
}
