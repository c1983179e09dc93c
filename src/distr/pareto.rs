// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Pareto distribution.

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples floating-point numbers according to the Pareto distribution
/// with unit scale and shape `alpha`.
///
/// Sampled by inversion, `(1 - u)^(-1 / alpha)`; for positive `alpha` the
/// samples lie in `[1, +inf)`.
///
/// # Example
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::Pareto;
/// use rand_secure::SecureRng;
///
/// let val = OsRng.sample(Pareto::new(2.0).unwrap());
/// println!("{}", val);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pareto {
    inv_neg_shape: f64,
}

impl Pareto {
    /// Construct a new Pareto distribution with the given shape parameter.
    pub fn new(alpha: f64) -> Result<Pareto, Error> {
        if alpha.is_nan() {
            return Err(Error::InvalidParameter("pareto_variate: alpha is NaN"));
        }
        if alpha == 0.0 {
            return Err(Error::ArithmeticDegenerate("pareto_variate: alpha must be nonzero"));
        }
        Ok(Pareto { inv_neg_shape: -1.0 / alpha })
    }
}

impl Distribution<f64> for Pareto {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        (1.0 - rng.uniform_unit()).powf(self.inv_neg_shape)
    }
}
