// Copyright 2018 Developers of the Rand project.
// Copyright 2013 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Gamma and Beta distributions.

use core::f64::consts::{E, SQRT_2};

use self::GammaRepr::*;

use crate::{Distribution, Error, SecureRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SHAPE_ERROR: &str = "gamma_variate: alpha and beta must be > 0.0";
const FINITE_ERROR: &str = "gamma_variate: alpha and beta must be finite";

/// The Gamma distribution `Gamma(alpha, beta)`.
///
/// The density function of this distribution is
///
/// ```text
/// f(x) =  x^(alpha - 1) * exp(-x / beta) / (Γ(alpha) * beta^alpha)
/// ```
///
/// where `alpha` is the shape and `beta` the scale, both strictly positive
/// and finite.
/// The mean is `alpha * beta`.
///
/// Three methods are used depending on the shape:
///
/// - `alpha > 1`: R.C.H. Cheng's rejection algorithm GB[^1], with the
///   uniform deviate kept inside `(1e-7, 0.9999999)` so the log-odds
///   transform stays finite.
/// - `alpha == 1`: the exponential distribution, sampled directly.
/// - `alpha < 1`: Algorithm GS of Kennedy & Gentle[^2] (after Ahrens &
///   Dieter).
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Distribution, Gamma};
///
/// let gamma = Gamma::new(2.0, 5.0).unwrap();
/// let v = gamma.sample(&mut OsRng);
/// println!("{} is from a Gamma(2, 5) distribution", v);
/// ```
///
/// [^1]: R. C. H. Cheng. 1977. "The Generation of Gamma Variables with
///       Non-Integral Shape Parameter". *Applied Statistics* 26, 1, 71-75.
///
/// [^2]: W. J. Kennedy and J. E. Gentle. 1980. *Statistical Computing*.
///       Marcel Dekker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gamma {
    scale: f64,
    repr: GammaRepr,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum GammaRepr {
    Large(GammaLargeShape),
    One,
    Small(GammaSmallShape),
}

/// Constants of Cheng's algorithm GB for `alpha > 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct GammaLargeShape {
    alpha: f64,
    ainv: f64,
    bbb: f64,
    ccc: f64,
}

/// Constants of algorithm GS for `0 < alpha < 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct GammaSmallShape {
    alpha: f64,
    inv_alpha: f64,
    b: f64,
}

impl Gamma {
    /// Construct an object representing the `Gamma(alpha, beta)`
    /// distribution.
    #[inline]
    pub fn new(alpha: f64, beta: f64) -> Result<Gamma, Error> {
        if !(alpha > 0.0) || !(beta > 0.0) {
            return Err(Error::InvalidParameter(SHAPE_ERROR));
        }
        if !alpha.is_finite() || !beta.is_finite() {
            return Err(Error::InvalidParameter(FINITE_ERROR));
        }

        let repr = if alpha == 1.0 {
            One
        } else if alpha < 1.0 {
            Small(GammaSmallShape::new_raw(alpha))
        } else {
            Large(GammaLargeShape::new_raw(alpha))
        };
        Ok(Gamma { scale: beta, repr })
    }
}

impl GammaLargeShape {
    fn new_raw(alpha: f64) -> GammaLargeShape {
        // sqrt(2 * alpha - 1), without overflowing for alpha near f64::MAX
        let ainv = (alpha - 0.5).sqrt() * SQRT_2;
        GammaLargeShape {
            alpha,
            ainv,
            bbb: alpha - 4f64.ln(),
            ccc: alpha + ainv,
        }
    }
}

impl GammaSmallShape {
    fn new_raw(alpha: f64) -> GammaSmallShape {
        GammaSmallShape {
            alpha,
            inv_alpha: 1.0 / alpha,
            b: (E + alpha) / E,
        }
    }
}

impl Distribution<f64> for Gamma {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        let x = match self.repr {
            Large(ref g) => g.sample(rng),
            One => -(1.0 - rng.uniform_unit()).ln(),
            Small(ref g) => g.sample(rng),
        };
        x * self.scale
    }
}

impl Distribution<f64> for GammaLargeShape {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        // 1 + ln(4.5)
        const SG_MAGICCONST: f64 = 2.504077396776274;

        loop {
            let u1 = rng.uniform_unit();
            if !(1e-7 < u1 && u1 < 0.9999999) {
                continue;
            }
            let u2 = 1.0 - rng.uniform_unit();
            let v = (u1 / (1.0 - u1)).ln() / self.ainv;
            let x = self.alpha * v.exp();
            let z = u1 * u1 * u2;
            let r = self.bbb + self.ccc * v - x;
            if r + SG_MAGICCONST - 4.5 * z >= 0.0 || r >= z.ln() {
                return x;
            }
        }
    }
}

impl Distribution<f64> for GammaSmallShape {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let p = self.b * rng.uniform_unit();
            let x = if p <= 1.0 {
                p.powf(self.inv_alpha)
            } else {
                -((self.b - p) / self.alpha).ln()
            };
            let u = rng.uniform_unit();
            let accept = if p > 1.0 {
                u <= x.powf(self.alpha - 1.0)
            } else {
                u <= (-x).exp()
            };
            if accept {
                return x;
            }
        }
    }
}

/// The Beta distribution with shape parameters `alpha` and `beta`.
///
/// Sampled as `y / (y + y')` where `y ~ Gamma(alpha, 1)` and
/// `y' ~ Gamma(beta, 1)`, which matches the construction in Knuth, *TAOCP*
/// Vol 2, 3rd ed., p. 134. Samples lie in `[0, 1]`.
///
/// When the first gamma draw is exactly zero (which happens for extremely
/// small `alpha`) the sample is `0.0` and the second gamma draw is skipped.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::distr::{Beta, Distribution};
///
/// let beta = Beta::new(2.0, 5.0).unwrap();
/// let v = beta.sample(&mut OsRng);
/// println!("{} is from a Beta(2, 5) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Beta {
    gamma_a: Gamma,
    gamma_b: Gamma,
}

impl Beta {
    /// Construct an object representing the `Beta(alpha, beta)`
    /// distribution.
    pub fn new(alpha: f64, beta: f64) -> Result<Beta, Error> {
        Ok(Beta {
            gamma_a: Gamma::new(alpha, 1.0)?,
            gamma_b: Gamma::new(beta, 1.0)?,
        })
    }
}

impl Distribution<f64> for Beta {
    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R) -> f64 {
        let y = self.gamma_a.sample(rng);
        if y == 0.0 {
            return 0.0;
        }
        y / (y + self.gamma_b.sample(rng))
    }
}
