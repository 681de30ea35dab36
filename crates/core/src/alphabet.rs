//! The 26-letter alphabet every component operates on.
//!
//! Components never see raw `char`s: the machine converts at its boundary
//! and all wiring arithmetic happens on [`Letter`] indices mod 26.
//!
//! # Example
//! ```
//! use enigma_sim_core::alphabet::Letter;
//!
//! let q = Letter::from_char('q').unwrap();
//! assert_eq!(q.to_char(), 'Q');
//! assert_eq!(q.shift(10).to_char(), 'A');
//! assert_eq!(q.shift(-17).to_char(), 'Z');
//! ```

use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// A letter A-Z stored as its index 0..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);
    pub const Z: Letter = Letter(ALPHABET_LEN - 1);

    /// Convert an ASCII letter of either case.
    ///
    /// Returns `None` for digits, punctuation, whitespace and non-ASCII.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Wrap an index already known to be in range.
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Letter(index)
    }

    /// Zero-based alphabet index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Uppercase ASCII character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Move `by` places around the alphabet, wrapping in both directions.
    pub fn shift(self, by: i32) -> Self {
        let idx = (self.0 as i32 + by).rem_euclid(ALPHABET_LEN as i32);
        Letter(idx as u8)
    }

    /// Iterate A..=Z in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
