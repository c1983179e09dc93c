// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The von Mises distribution.

use core::f64::consts::{PI, TAU};

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Concentrations at or below this sample a uniform angle.
const KAPPA_UNIFORM: f64 = 1e-6;

/// The von Mises distribution, a circular analogue of the normal
/// distribution.
///
/// `mu` is the mean angle in radians and `kappa >= 0` the concentration.
/// Samples are angles in `[0, 2π)`. When `kappa` is (nearly) zero this
/// reduces to a uniform angle.
///
/// Sampled with the algorithm of Best & Fisher[^1], a rejection method with
/// a wrapped-Cauchy envelope. The accepted deviation is reflected around
/// `mu` on a coin flip and reduced modulo `2π`.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, VonMises};
///
/// let d = VonMises::new(std::f64::consts::PI, 4.0).unwrap();
/// let angle = d.sample(&mut OsRng);
/// assert!((0.0..std::f64::consts::TAU).contains(&angle));
/// ```
///
/// [^1]: D. J. Best and N. I. Fisher. 1979. "Efficient Simulation of the
///       von Mises Distribution". *Applied Statistics* 28, 2, 152-157.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VonMises {
    mu: f64,
    /// `None` when the distribution degenerates to a uniform angle.
    r: Option<f64>,
}

impl VonMises {
    /// Construct a new `VonMises` distribution with mean angle `mu` and
    /// concentration `kappa`.
    pub fn new(mu: f64, kappa: f64) -> Result<VonMises, Error> {
        if !mu.is_finite() {
            return Err(Error::InvalidParameter("von_mises_variate: mu must be finite"));
        }
        if !(kappa >= 0.0) {
            return Err(Error::InvalidParameter("von_mises_variate: kappa must be >= 0.0"));
        }
        let r = if kappa <= KAPPA_UNIFORM {
            None
        } else {
            let s = 0.5 / kappa;
            Some(s + (1.0 + s * s).sqrt())
        };
        Ok(VonMises { mu, r })
    }
}

impl Distribution<f64> for VonMises {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        let r = match self.r {
            Some(r) => r,
            None => return TAU * rng.uniform_unit(),
        };

        let z = loop {
            let z = (PI * rng.uniform_unit()).cos();
            let d = z / (r + z);
            let u = rng.uniform_unit();
            if u < 1.0 - d * d || u <= (1.0 - d) * d.exp() {
                break z;
            }
        };

        let q = 1.0 / r;
        // |f| <= 1 analytically; rounding may step one ulp past it
        let f = ((q + z) / (1.0 + q * z)).clamp(-1.0, 1.0);
        let theta = if rng.uniform_unit() > 0.5 {
            self.mu + f.acos()
        } else {
            self.mu - f.acos()
        };
        let angle = theta.rem_euclid(TAU);
        // a tiny negative theta rounds up to TAU itself
        if angle < TAU {
            angle
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::ReplaySource;

    #[test]
    fn uniform_when_unconcentrated() {
        let d = VonMises::new(1.0, 0.0).unwrap();
        let mut rng = crate::test::rng(341);
        let mut bins = [0u32; 8];
        let n = 40_000;
        for _ in 0..n {
            let x = d.sample(&mut rng);
            assert!((0.0..TAU).contains(&x));
            bins[(x / TAU * 8.0) as usize] += 1;
        }
        for &b in &bins {
            let p = b as f64 / n as f64;
            assert!((p - 0.125).abs() < 0.01, "{}", p);
        }
    }

    #[test]
    fn range() {
        let mut rng = crate::test::rng(342);
        for &(mu, kappa) in &[(0.0, 0.5), (PI, 4.0), (-10.0, 1.0), (100.0, 1e3), (0.0, 1e-7)] {
            let d = VonMises::new(mu, kappa).unwrap();
            for _ in 0..1000 {
                let x = d.sample(&mut rng);
                assert!((0.0..TAU).contains(&x), "{} out of range", x);
            }
        }
    }

    #[test]
    fn concentrates_around_mean() {
        let mu = 2.0;
        let d = VonMises::new(mu, 50.0).unwrap();
        let mut rng = crate::test::rng(343);
        let n = 10_000;
        // circular mean via the resultant vector
        let (mut s, mut c) = (0.0, 0.0);
        for _ in 0..n {
            let x = d.sample(&mut rng);
            s += x.sin();
            c += x.cos();
        }
        let mean = s.atan2(c);
        assert!((mean - mu).abs() < 0.01, "mean {}", mean);
    }

    #[test]
    fn coin_flip_picks_side_of_mean() {
        let (mu, kappa) = (1.0, 1.0);
        let d = VonMises::new(mu, kappa).unwrap();
        // accepted envelope draw (0.5, 0.25), then the coin
        let mut rng = ReplaySource::from_units(&[0.5, 0.25, 0.75, 0.5, 0.25, 0.25]);

        let r = d.r.unwrap();
        let z = (PI * 0.5).cos();
        let q = 1.0 / r;
        let f = ((q + z) / (1.0 + q * z)).clamp(-1.0, 1.0);
        assert_eq!(d.sample(&mut rng), (mu + f.acos()).rem_euclid(TAU));
        assert_eq!(d.sample(&mut rng), (mu - f.acos()).rem_euclid(TAU));
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.overdrawn(), 0);
    }

    #[test]
    fn invalid() {
        assert!(VonMises::new(0.0, -1.0).is_err());
        assert!(VonMises::new(0.0, f64::NAN).is_err());
        assert!(VonMises::new(f64::INFINITY, 1.0).is_err());
    }
}
