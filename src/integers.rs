// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random integers in ranges.
//!
//! All helpers reduce to the unbiased rejection sampler behind
//! [`SecureRng::rand_below`]; widths are computed in 128-bit arithmetic so
//! the full `i64` range is supported.

use crate::rng::below;
use crate::{Error, SecureRng};

/// Return a random integer in `[a, b]`, including both end points.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::integers::rand_int;
///
/// let roll = rand_int(&mut OsRng, 1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn rand_int<R: SecureRng + ?Sized>(rng: &mut R, a: i64, b: i64) -> Result<i64, Error> {
    if a > b {
        return Err(Error::InvalidParameter("rand_int: empty range"));
    }
    let width = (i128::from(b) - i128::from(a) + 1) as u128;
    Ok((i128::from(a) + below(rng, width) as i128) as i64)
}

/// Return `k` random integers in `[a, b]`.
pub fn rand_ints<R: SecureRng + ?Sized>(
    rng: &mut R,
    a: i64,
    b: i64,
    k: usize,
) -> Result<Vec<i64>, Error> {
    (0..k).map(|_| rand_int(&mut *rng, a, b)).collect()
}

/// Choose a random element of the arithmetic progression
/// `start, start + step, ...` stopping before `stop`.
///
/// `step` may be negative. Fails if `step` is zero or the range is empty.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::integers::rand_range;
///
/// let even = rand_range(&mut OsRng, 0, 10, 2).unwrap();
/// assert!(even % 2 == 0 && (0..10).contains(&even));
/// let down = rand_range(&mut OsRng, 10, 0, -3).unwrap();
/// assert!([10, 7, 4, 1].contains(&down));
/// ```
pub fn rand_range<R: SecureRng + ?Sized>(
    rng: &mut R,
    start: i64,
    stop: i64,
    step: i64,
) -> Result<i64, Error> {
    let width = i128::from(stop) - i128::from(start);
    let step = i128::from(step);
    let n = match step {
        0 => return Err(Error::InvalidParameter("rand_range: zero step")),
        s if s > 0 => (width + s - 1).div_euclid(s),
        s => (-(width + s + 1)).div_euclid(-s),
    };
    if n <= 0 {
        return Err(Error::InvalidParameter("rand_range: empty range"));
    }
    Ok((i128::from(start) + step * below(rng, n as u128) as i128) as i64)
}
