// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random tokens, lines and passphrases.
//!
//! Token helpers draw raw bytes from the source and encode them; they are
//! suitable for session keys, reset links and similar secrets as long as the
//! source itself is secure.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::seq::IndexedRandom;
use crate::{ByteSource, Error, SecureRng};

/// Return `n` random bytes.
pub fn rand_bytes<R: ByteSource + ?Sized>(rng: &mut R, n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    rng.fill_bytes(&mut buf);
    buf
}

/// Return `n` random bytes as a lowercase hex string of length `2 * n`.
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::strings::rand_hex;
///
/// let token = rand_hex(&mut OsRng, 16);
/// assert_eq!(token.len(), 32);
/// ```
pub fn rand_hex<R: ByteSource + ?Sized>(rng: &mut R, n: usize) -> String {
    hex::encode(rand_bytes(rng, n))
}

/// Return `n` random bytes encoded as unpadded URL-safe base64.
pub fn rand_urlsafe<R: ByteSource + ?Sized>(rng: &mut R, n: usize) -> String {
    URL_SAFE_NO_PAD.encode(rand_bytes(rng, n))
}

/// Return a uniformly chosen line of `text`.
///
/// Fails if `text` has no lines.
pub fn rand_line<'a, R: SecureRng + ?Sized>(rng: &mut R, text: &'a str) -> Result<&'a str, Error> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .choice(rng)
        .copied()
        .ok_or(Error::InvalidParameter("rand_line: text has no lines"))
}

/// A word list for passphrase generation.
///
/// Parsed from text holding one word per line; surrounding whitespace is
/// trimmed and blank lines are skipped. Loading the text is left to the
/// caller.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use rand_secure::strings::WordList;
///
/// let words = WordList::parse("Correct\nhorse\n\nbattery\nstaple\n").unwrap();
/// assert_eq!(words.len(), 4);
/// let phrase = words.passphrase(&mut OsRng, 4, "-");
/// assert_eq!(phrase.split('-').count(), 4);
/// assert_eq!(phrase, phrase.to_lowercase());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a word list. Fails if `text` contains no words.
    pub fn parse(text: &str) -> Result<WordList, Error> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        if words.is_empty() {
            warn!("word list rejected: no words in {} bytes of text", text.len());
            return Err(Error::InvalidParameter("passphrase: word list is empty"));
        }
        debug!("parsed word list of {} words", words.len());
        Ok(WordList { words })
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: an empty list cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, lowercased, in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Join `n` words chosen with replacement, separated by `sep`.
    pub fn passphrase<R: SecureRng + ?Sized>(&self, rng: &mut R, n: usize, sep: &str) -> String {
        let mut phrase = String::new();
        for i in 0..n {
            if i > 0 {
                phrase.push_str(sep);
            }
            if let Some(word) = self.words.choice(rng) {
                phrase.push_str(word);
            }
        }
        phrase
    }
}
