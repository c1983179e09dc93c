// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! This module provides:
//!
//! *   [`IndexedRandom`] for choosing and sampling elements of slices
//! *   [`SliceRandom`] for shuffling slices in place
//! *   [`sample_indices`] to choose distinct indices from `0..length`
//!
//! All index arithmetic goes through the unbiased
//! [`SecureRng::rand_below`] sampler, weighted selection through
//! [`SecureRng::uniform_unit`].

use std::collections::HashSet;

use crate::rng::gen_index;
use crate::{Error, SecureRng};

/// Extension trait on slices, providing random selection methods.
pub trait IndexedRandom {
    /// The element type.
    type Item;

    /// Uniformly sample one element
    ///
    /// Returns a reference to one uniformly-sampled random element of
    /// the slice, or `None` if the slice is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_core::OsRng;
    /// use rand_secure::seq::IndexedRandom;
    ///
    /// let choices = [1, 2, 4, 8, 16, 32];
    /// println!("{:?}", choices.choice(&mut OsRng));
    /// assert_eq!(choices[..0].choice(&mut OsRng), None);
    /// ```
    fn choice<R: SecureRng + ?Sized>(&self, rng: &mut R) -> Option<&Self::Item>;

    /// Choose `k` elements with replacement, each uniformly.
    ///
    /// Fails if the slice is empty and `k > 0`.
    fn choices<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
    ) -> Result<Vec<&Self::Item>, Error>;

    /// Choose `k` elements with replacement according to relative `weights`.
    ///
    /// Fails if `weights` and the slice differ in length, or if the total
    /// weight is not a positive finite number.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_core::OsRng;
    /// use rand_secure::seq::IndexedRandom;
    ///
    /// let items = ['a', 'b', 'c', 'd'];
    /// // 'd' is never chosen
    /// let picked = items.choices_weighted(&mut OsRng, &[2.0, 1.0, 1.0, 0.0], 10).unwrap();
    /// assert!(picked.iter().all(|&&c| c != 'd'));
    /// ```
    fn choices_weighted<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        weights: &[f64],
        k: usize,
    ) -> Result<Vec<&Self::Item>, Error>;

    /// Like [`IndexedRandom::choices_weighted`], with the running totals of
    /// the weights supplied directly.
    fn choices_cumulative<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        cum_weights: &[f64],
        k: usize,
    ) -> Result<Vec<&Self::Item>, Error>;

    /// Choose `k` distinct positions of the slice, in selection order.
    ///
    /// Every prefix of the result is itself a valid random sample. Elements
    /// that compare equal are still distinct positions.
    ///
    /// Fails if `k` exceeds the length of the slice.
    fn sample<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
    ) -> Result<Vec<&Self::Item>, Error>;

    /// Choose `k` distinct positions of the multiset in which element `i`
    /// occurs `counts[i]` times.
    ///
    /// ```
    /// use rand_core::OsRng;
    /// use rand_secure::seq::IndexedRandom;
    ///
    /// // same as sampling from ["red", "red", "red", "red", "blue", "blue"]
    /// let s = ["red", "blue"].sample_counts(&mut OsRng, &[4, 2], 5).unwrap();
    /// assert!(s.iter().filter(|&&&c| c == "red").count() >= 3);
    /// ```
    fn sample_counts<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        counts: &[usize],
        k: usize,
    ) -> Result<Vec<&Self::Item>, Error>;

    /// Return a shuffled copy of the slice.
    fn shuffled<R: SecureRng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Item>
    where
        Self::Item: Clone;
}

/// Extension trait on slices, providing in-place shuffling.
pub trait SliceRandom {
    /// Shuffle the slice in place, using the Fisher–Yates algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_core::OsRng;
    /// use rand_secure::seq::SliceRandom;
    ///
    /// let mut y = [1, 2, 3, 4, 5];
    /// y.shuffle(&mut OsRng);
    /// println!("Shuffled:   {:?}", y);
    /// ```
    fn shuffle<R: SecureRng + ?Sized>(&mut self, rng: &mut R);
}

impl<T> IndexedRandom for [T] {
    type Item = T;

    fn choice<R: SecureRng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self[gen_index(rng, self.len())])
        }
    }

    fn choices<R: SecureRng + ?Sized>(&self, rng: &mut R, k: usize) -> Result<Vec<&T>, Error> {
        if self.is_empty() && k > 0 {
            return Err(Error::InvalidParameter("choices: cannot choose from an empty sequence"));
        }
        Ok((0..k).map(|_| &self[gen_index(&mut *rng, self.len())]).collect())
    }

    fn choices_weighted<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        weights: &[f64],
        k: usize,
    ) -> Result<Vec<&T>, Error> {
        let cum_weights: Vec<f64> = weights
            .iter()
            .scan(0.0, |total, &w| {
                *total += w;
                Some(*total)
            })
            .collect();
        self.choices_cumulative(rng, &cum_weights, k)
    }

    fn choices_cumulative<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        cum_weights: &[f64],
        k: usize,
    ) -> Result<Vec<&T>, Error> {
        if cum_weights.len() != self.len() {
            warn!("choices: {} weights for {} elements", cum_weights.len(), self.len());
            return Err(Error::InvalidParameter(
                "choices: the number of weights does not match the sequence",
            ));
        }
        let total = *cum_weights
            .last()
            .ok_or(Error::InvalidParameter("choices: cannot choose from an empty sequence"))?;
        if !(total > 0.0) {
            return Err(Error::InvalidParameter(
                "choices: total of weights must be greater than zero",
            ));
        }
        if !total.is_finite() {
            return Err(Error::InvalidParameter("choices: total of weights must be finite"));
        }
        let hi = self.len() - 1;
        Ok((0..k)
            .map(|_| {
                let x = rng.uniform_unit() * total;
                &self[cum_weights[..hi].partition_point(|&c| c <= x)]
            })
            .collect())
    }

    fn sample<R: SecureRng + ?Sized>(&self, rng: &mut R, k: usize) -> Result<Vec<&T>, Error> {
        Ok(sample_indices(rng, self.len(), k)?.into_iter().map(|i| &self[i]).collect())
    }

    fn sample_counts<R: SecureRng + ?Sized>(
        &self,
        rng: &mut R,
        counts: &[usize],
        k: usize,
    ) -> Result<Vec<&T>, Error> {
        if counts.len() != self.len() {
            return Err(Error::InvalidParameter(
                "sample: the number of counts does not match the sequence",
            ));
        }
        let mut cum_counts = Vec::with_capacity(counts.len());
        let mut total = 0usize;
        for &c in counts {
            total = total
                .checked_add(c)
                .ok_or(Error::InvalidParameter("sample: total of counts overflows"))?;
            cum_counts.push(total);
        }
        if total == 0 {
            return Err(Error::InvalidParameter(
                "sample: total of counts must be greater than zero",
            ));
        }
        Ok(sample_indices(rng, total, k)?
            .into_iter()
            .map(|s| &self[cum_counts.partition_point(|&c| c <= s)])
            .collect())
    }

    fn shuffled<R: SecureRng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        let mut v = self.to_vec();
        v.shuffle(rng);
        v
    }
}

impl<T> SliceRandom for [T] {
    fn shuffle<R: SecureRng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.len()).rev() {
            // invariant: elements with index > i have been locked in place.
            self.swap(i, gen_index(rng, i + 1));
        }
    }
}

/// Randomly sample exactly `amount` distinct indices from `0..length`, in
/// selection order.
///
/// Small populations are sampled by swapping out of a pool of all indices;
/// large populations relative to `amount` by rejection against the set of
/// indices already chosen, which only needs `O(amount)` memory.
///
/// Fails if `amount > length`.
pub fn sample_indices<R: SecureRng + ?Sized>(
    rng: &mut R,
    length: usize,
    amount: usize,
) -> Result<Vec<usize>, Error> {
    if amount > length {
        return Err(Error::InvalidParameter("sample: sample larger than sequence"));
    }

    // size of a small set, as the pool and the set cost about the same there
    let mut set_size = 21usize;
    if amount > 5 {
        let exp = ((amount as f64) * 3.0).log(4.0).ceil() as u32;
        set_size = set_size.saturating_add(4usize.saturating_pow(exp));
    }

    let mut result = Vec::with_capacity(amount);
    if length <= set_size {
        let mut pool: Vec<usize> = (0..length).collect();
        for i in 0..amount {
            let j = gen_index(rng, length - i);
            result.push(pool[j]);
            pool[j] = pool[length - i - 1];
        }
    } else {
        let mut selected = HashSet::with_capacity(amount);
        for _ in 0..amount {
            let j = loop {
                let j = gen_index(rng, length);
                if selected.insert(j) {
                    break j;
                }
            };
            result.push(j);
        }
    }
    Ok(result)
}
