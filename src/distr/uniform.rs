// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A distribution uniformly sampling numbers within a given range.

use crate::{Distribution, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sample values uniformly between two bounds.
///
/// Samples are `low + (high - low) * u` with `u` from
/// [`SecureRng::uniform_unit`], so they lie in `[low, high)` when
/// `high > low`; rounding may occasionally produce `high` itself.
/// Reversed bounds are accepted and sample `(high, low]`.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, Uniform};
///
/// let between = Uniform::new(10.0, 10000.0);
/// let mut sum = 0.0;
/// for _ in 0..1000 {
///     sum += between.sample(&mut OsRng);
/// }
/// println!("{}", sum);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uniform {
    low: f64,
    scale: f64,
}

impl Uniform {
    /// Create a new `Uniform` instance sampling between `low` and `high`.
    pub fn new(low: f64, high: f64) -> Uniform {
        Uniform {
            low,
            scale: high - low,
        }
    }
}

impl Distribution<f64> for Uniform {
    #[inline]
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.low + self.scale * rng.uniform_unit()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::ReplaySource;

    #[test]
    fn range() {
        let mut rng = crate::test::rng(201);
        for &(low, high) in &[(-10.0, 10.0), (1e-300, 1e-299), (3.0, 3.5), (0.0, 1e300)] {
            let distr = Uniform::new(low, high);
            for _ in 0..1000 {
                let x = distr.sample(&mut rng);
                assert!(low <= x && x < high, "{} not in [{}, {})", x, low, high);
            }
        }
    }

    #[test]
    fn degenerate() {
        let mut rng = crate::test::rng(202);
        assert_eq!(Uniform::new(4.0, 4.0).sample(&mut rng), 4.0);
    }

    #[test]
    fn end_points() {
        let mut rng = ReplaySource::from_units(&[0.0, 0.5]);
        let distr = Uniform::new(2.0, 6.0);
        assert_eq!(distr.sample(&mut rng), 2.0);
        assert_eq!(distr.sample(&mut rng), 4.0);
    }
}
