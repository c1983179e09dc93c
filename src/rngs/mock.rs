// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock byte source

use std::collections::VecDeque;

use crate::source::ByteSource;

/// A mock source replaying a fixed script of bytes
///
/// Bytes are handed out in order; once the script is exhausted further
/// requests are answered with zero bytes and counted, so a test can check
/// that no extra entropy was consumed via [`ReplaySource::overdrawn`].
///
/// This source is deterministic by construction and must never stand in
/// for a secure source outside of tests.
///
/// # Example
///
/// ```
/// use rand_secure::rngs::mock::ReplaySource;
/// use rand_secure::SecureRng;
///
/// let mut src = ReplaySource::from_units(&[0.25, 0.5]);
/// assert_eq!(src.uniform_unit(), 0.25);
/// assert_eq!(src.uniform_unit(), 0.5);
/// assert_eq!(src.remaining(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySource {
    script: VecDeque<u8>,
    overdrawn: usize,
}

impl ReplaySource {
    /// Create a `ReplaySource` yielding exactly `bytes`.
    pub fn new(bytes: Vec<u8>) -> Self {
        ReplaySource {
            script: bytes.into(),
            overdrawn: 0,
        }
    }

    /// Create a `ReplaySource` whose successive `uniform_unit` draws return
    /// `units`.
    ///
    /// Each unit is truncated to the nearest multiple of 2^-53 below it and
    /// must lie in `[0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if a unit is outside `[0, 1)`.
    pub fn from_units(units: &[f64]) -> Self {
        let mut bytes = Vec::with_capacity(units.len() * 7);
        for &u in units {
            assert!((0.0..1.0).contains(&u), "unit {} outside [0, 1)", u);
            let bits = ((u * (1u64 << 53) as f64) as u64) << 3;
            bytes.extend_from_slice(&bits.to_be_bytes()[1..]);
        }
        ReplaySource::new(bytes)
    }

    /// Number of scripted bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of bytes requested after the script ran out.
    pub fn overdrawn(&self) -> usize {
        self.overdrawn
    }
}

impl ByteSource for ReplaySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            match self.script.pop_front() {
                Some(x) => *b = x,
                None => {
                    *b = 0;
                    self.overdrawn += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReplaySource;
    use crate::SecureRng;

    #[test]
    fn replays_units() {
        let units = [0.0, 0.125, 0.75, 1.0 - f64::EPSILON / 2.0];
        let mut src = ReplaySource::from_units(&units);
        for &u in &units {
            assert_eq!(src.uniform_unit(), u);
        }
        assert_eq!(src.overdrawn(), 0);
        assert_eq!(src.uniform_unit(), 0.0);
        assert_eq!(src.overdrawn(), 7);
    }

    #[test]
    #[should_panic]
    fn rejects_unit_one() {
        ReplaySource::from_units(&[1.0]);
    }
}
