// Copyright 2018 Developers of the Rand project.
// Copyright 2013-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`SecureRng`] trait

use crate::distr::{DistIter, Distribution};
use crate::source::ByteSource;
use crate::Error;

/// 2^-53, the spacing of the values produced by [`SecureRng::uniform_unit`].
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// An automatically-implemented extension trait on [`ByteSource`] providing
/// the uniform primitives every sampler is built from.
///
/// The basic pattern is `fn foo<R: SecureRng + ?Sized>(rng: &mut R)`; the
/// `?Sized` un-bounding lets samplers run directly on `&mut dyn ByteSource`.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::SecureRng;
///
/// let mut rng = OsRng;
/// let x = rng.uniform_unit();
/// let die = rng.rand_below(6).unwrap() + 1;
/// assert!(x < 1.0 && (1..=6).contains(&die));
/// ```
pub trait SecureRng: ByteSource {
    /// Return a value `x` with `0.0 <= x < 1.0`, using the full 53 bits of
    /// `f64` mantissa precision.
    ///
    /// Seven bytes (56 bits) are read from the source, interpreted as a
    /// big-endian integer and the low three bits are discarded before
    /// scaling by 2^-53.
    #[inline]
    fn uniform_unit(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf[1..]);
        (u64::from_be_bytes(buf) >> 3) as f64 * UNIT_SCALE
    }

    /// Return `a + (b - a) * uniform_unit()`.
    ///
    /// The result lies in `[a, b)` when `b > a`; the upper bound is only
    /// reached when `a == b`.
    #[inline]
    fn uniform_in_range(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.uniform_unit()
    }

    /// Return an integer made of `k` random bits, `k <= 128`.
    ///
    /// `ceil(k / 8)` bytes are drawn and the surplus low bits are shifted
    /// away.
    fn rand_bits(&mut self, k: u32) -> Result<u128, Error> {
        if k > 128 {
            return Err(Error::InvalidParameter("rand_bits: number of bits must be at most 128"));
        }
        let num_bytes = ((k + 7) / 8) as usize;
        let mut buf = [0u8; 16];
        self.fill_bytes(&mut buf[16 - num_bytes..]);
        Ok(u128::from_be_bytes(buf) >> (num_bytes as u32 * 8 - k))
    }

    /// Return an unbiased integer in `[0, n)`.
    ///
    /// Fails if `n == 0`.
    fn rand_below(&mut self, n: u64) -> Result<u64, Error> {
        if n == 0 {
            return Err(Error::InvalidParameter("rand_below: empty range"));
        }
        Ok(below(self, u128::from(n)) as u64)
    }

    /// Return `true` with probability `p`.
    ///
    /// Values of `p` at or below zero never yield `true`; values at or above
    /// one always do.
    #[inline]
    fn rand_bool(&mut self, p: f64) -> bool {
        self.uniform_unit() < p
    }

    /// Sample a new value, using the given distribution.
    ///
    /// ```
    /// use rand_core::OsRng;
    /// use rand_secure::distr::Gamma;
    /// use rand_secure::SecureRng;
    ///
    /// let v = OsRng.sample(Gamma::new(2.0, 5.0).unwrap());
    /// assert!(v >= 0.0);
    /// ```
    #[inline]
    fn sample<T, D: Distribution<T>>(&mut self, distr: D) -> T {
        distr.sample(self)
    }

    /// Create an iterator that generates values using the given distribution.
    fn sample_iter<T, D>(self, distr: D) -> DistIter<D, Self, T>
    where
        D: Distribution<T>,
        Self: Sized,
    {
        distr.sample_iter(self)
    }
}

impl<S: ByteSource + ?Sized> SecureRng for S {}

/// Unbiased integer in `[0, n)` by rejection over `bit_length(n)` bits.
///
/// `n` must be non-zero.
pub(crate) fn below<R: SecureRng + ?Sized>(rng: &mut R, n: u128) -> u128 {
    debug_assert!(n > 0);
    let k = 128 - n.leading_zeros();
    loop {
        let mut buf = [0u8; 16];
        let num_bytes = ((k + 7) / 8) as usize;
        rng.fill_bytes(&mut buf[16 - num_bytes..]);
        let r = u128::from_be_bytes(buf) >> (num_bytes as u32 * 8 - k);
        if r < n {
            return r;
        }
    }
}

/// Uniform index in `[0, len)`; `len` must be non-zero.
#[inline]
pub(crate) fn gen_index<R: SecureRng + ?Sized>(rng: &mut R, len: usize) -> usize {
    below(rng, len as u128) as usize
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::ReplaySource;

    #[test]
    fn uniform_unit_bounds_and_mean() {
        let mut rng = crate::test::rng(101);
        let mut sum = 0.0;
        for _ in 0..100_000 {
            let x = rng.uniform_unit();
            assert!((0.0..1.0).contains(&x));
            sum += x;
        }
        let mean = sum / 100_000.0;
        assert!((mean - 0.5).abs() < 0.02, "mean {}", mean);
    }

    #[test]
    fn uniform_unit_extremes() {
        let mut zeros = ReplaySource::new(vec![0u8; 7]);
        assert_eq!(zeros.uniform_unit(), 0.0);

        let mut ones = ReplaySource::new(vec![0xffu8; 7]);
        assert_eq!(ones.uniform_unit(), 1.0 - f64::EPSILON / 2.0);

        // the low three bits of the seventh byte are discarded
        let mut low = ReplaySource::new(vec![0, 0, 0, 0, 0, 0, 0x07]);
        assert_eq!(low.uniform_unit(), 0.0);
        let mut half = ReplaySource::new(vec![0x80, 0, 0, 0, 0, 0, 0]);
        assert_eq!(half.uniform_unit(), 0.5);
    }

    #[test]
    fn uniform_in_range() {
        let mut rng = crate::test::rng(102);
        for _ in 0..1000 {
            let x = rng.uniform_in_range(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&x));
        }
        assert_eq!(rng.uniform_in_range(2.5, 2.5), 2.5);
    }

    #[test]
    fn rand_bits() {
        let mut rng = crate::test::rng(103);
        assert_eq!(rng.rand_bits(0).unwrap(), 0);
        for k in 1..=128 {
            let x = rng.rand_bits(k).unwrap();
            assert!(k == 128 || x < 1u128 << k);
        }
        assert!(rng.rand_bits(129).is_err());

        let mut replay = ReplaySource::new(vec![0xff, 0xff]);
        assert_eq!(replay.rand_bits(12).unwrap(), 0xfff);
    }

    #[test]
    fn rand_below() {
        let mut rng = crate::test::rng(104);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[rng.rand_below(7).unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.rand_below(1).unwrap(), 0);
        assert_eq!(rng.rand_below(0), Err(Error::InvalidParameter("rand_below: empty range")));
        assert!(rng.rand_below(u64::MAX).unwrap() < u64::MAX);
    }

    #[test]
    fn rand_bool_end_points() {
        let mut rng = crate::test::rng(105);
        for _ in 0..100 {
            assert!(!rng.rand_bool(0.0));
            assert!(rng.rand_bool(1.0));
        }
    }
}
