// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! The triangular distribution.

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The triangular distribution.
///
/// A continuous probability distribution bounded by `low` and `high`, with a
/// `mode` (most likely value) in between. Without an explicit mode the
/// midpoint is used. The bounds may be given in either order.
///
/// Sampled by inversion: with `c` the position of the mode as a fraction of
/// the interval, a uniform `u <= c` maps onto the rising edge as
/// `low + (high - low) * sqrt(u * c)`; otherwise the same formula is applied
/// to the mirrored triangle. A zero-width interval always yields `low`.
///
/// # Example
///
/// ```rust
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, Triangular};
///
/// let d = Triangular::new(0., 5., Some(2.5)).unwrap();
/// let v = d.sample(&mut OsRng);
/// println!("{} is from a triangular distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangular {
    low: f64,
    high: f64,
    /// Fraction of the interval below the mode; unused when `low == high`.
    c: f64,
}

impl Triangular {
    /// Set up the Triangular distribution with defined `low`, `high` and
    /// optional `mode`.
    #[inline]
    pub fn new(low: f64, high: f64, mode: Option<f64>) -> Result<Triangular, Error> {
        if low.is_nan() || high.is_nan() || mode.map_or(false, f64::is_nan) {
            return Err(Error::InvalidParameter("triangular: low, high and mode must not be NaN"));
        }
        if high == low {
            return Ok(Triangular { low, high, c: 0.5 });
        }
        let c = match mode {
            Some(mode) => (mode - low) / (high - low),
            None => 0.5,
        };
        if !(0.0..=1.0).contains(&c) {
            return Err(Error::InvalidParameter("triangular: mode must lie between low and high"));
        }
        Ok(Triangular { low, high, c })
    }
}

impl Distribution<f64> for Triangular {
    #[inline]
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.high == self.low {
            return self.low;
        }
        let mut u = rng.uniform_unit();
        let (mut low, mut high, mut c) = (self.low, self.high, self.c);
        if u > c {
            u = 1.0 - u;
            c = 1.0 - c;
            core::mem::swap(&mut low, &mut high);
        }
        low + (high - low) * (u * c).sqrt()
    }
}
