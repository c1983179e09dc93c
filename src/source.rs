// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`ByteSource`] capability and its secure implementations.

use rand_core::{CryptoRng, OsRng, RngCore};

/// A supplier of uniformly distributed random bytes.
///
/// This is the only capability the rest of the crate consumes from its
/// environment: every sampler reaches entropy through [`SecureRng`], which is
/// automatically implemented for every `ByteSource`.
///
/// Production sources are [`OsRng`] and any cryptographically secure
/// generator wrapped in [`CryptoSource`]. Deterministic sources for tests
/// live in [`mock`].
///
/// # Panics
///
/// Implementations backed by the operating system panic if the system
/// source fails, in the same way `OsRng::fill_bytes` does.
///
/// [`SecureRng`]: crate::SecureRng
/// [`mock`]: crate::rngs::mock
pub trait ByteSource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

impl<'a, S: ByteSource + ?Sized> ByteSource for &'a mut S {
    #[inline(always)]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    #[inline(always)]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}

impl ByteSource for OsRng {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(self, dest)
    }
}

/// Adapter turning any cryptographically secure [`RngCore`] into a
/// [`ByteSource`].
///
/// The [`CryptoRng`] bound keeps fast statistical generators out of the
/// sampling engine; use this to plug in e.g. a seeded ChaCha stream.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::{CryptoSource, SecureRng};
///
/// let mut source = CryptoSource::new(OsRng);
/// let x = source.uniform_unit();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CryptoSource<R>(R);

impl<R: RngCore + CryptoRng> CryptoSource<R> {
    /// Wrap a secure generator.
    pub fn new(rng: R) -> Self {
        CryptoSource(rng)
    }

    /// Return the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore + CryptoRng> ByteSource for CryptoSource<R> {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn os_source_fills() {
        let mut buf = [0u8; 64];
        ByteSource::fill_bytes(&mut OsRng, &mut buf);
        // 2^-512 chance of a false failure
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn by_reference_and_boxed() {
        let mut a = crate::test::rng(11);
        let mut b = crate::test::rng(11);
        let mut x = [0u8; 16];
        let mut y = [0u8; 16];
        (&mut a).fill_bytes(&mut x);
        let mut boxed: Box<dyn ByteSource + '_> = Box::new(&mut b);
        boxed.fill_bytes(&mut y);
        assert_eq!(x, y);
    }
}
