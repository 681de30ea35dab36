//! Plug leads: reciprocal letter-pair substitutions.

use crate::alphabet::Letter;
use crate::error::{PlugboardError, Result};
use std::fmt;
use std::str::FromStr;

/// A lead joining two distinct letters.
///
/// Encoding through a lead is an involution: each endpoint maps to the
/// other and every other letter is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lead {
    a: Letter,
    b: Letter,
}

impl Lead {
    /// Join two letters.
    ///
    /// # Errors
    /// `PlugboardError::InvalidLead` if the letters are equal.
    pub fn new(a: Letter, b: Letter) -> Result<Self> {
        if a == b {
            return Err(PlugboardError::InvalidLead {
                lead: format!("{}{}", a, b),
            }
            .into());
        }
        Ok(Self { a, b })
    }

    /// Parse a two-letter mapping such as `"HL"` or `"hl"`.
    ///
    /// # Errors
    /// `PlugboardError::InvalidLead` unless the input is exactly two distinct
    /// ASCII letters.
    pub fn parse(mapping: &str) -> Result<Self> {
        let invalid = || PlugboardError::InvalidLead {
            lead: mapping.to_string(),
        };

        let mut chars = mapping.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid().into());
        };

        let a = Letter::from_char(first).ok_or_else(invalid)?;
        let b = Letter::from_char(second).ok_or_else(invalid)?;
        Self::new(a, b)
    }

    /// The two endpoints, in the order given at construction.
    pub fn endpoints(&self) -> (Letter, Letter) {
        (self.a, self.b)
    }

    /// Whether `letter` is one of this lead's endpoints.
    pub fn contains(&self, letter: Letter) -> bool {
        self.a == letter || self.b == letter
    }

    /// Whether this lead and `other` use any common slot.
    pub fn overlaps(&self, other: &Lead) -> bool {
        self.contains(other.a) || self.contains(other.b)
    }

    /// Swap `letter` if it is an endpoint, otherwise return it unchanged.
    pub fn encode(&self, letter: Letter) -> Letter {
        if letter == self.a {
            self.b
        } else if letter == self.b {
            self.a
        } else {
            letter
        }
    }
}

impl FromStr for Lead {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Lead::parse(s)
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}
