//! Plugboard: a bounded set of disjoint leads applied before and after
//! the rotor stack.
//!
//! # Capacity
//!
//! The default board takes 10 leads. The hard ceiling is 13, since 13
//! disjoint pairs already use all 26 letters.

use crate::alphabet::Letter;
use crate::error::{PlugboardError, Result};
use crate::lead::Lead;
use std::fmt;

/// Leads a default plugboard accepts.
pub const DEFAULT_MAX_LEADS: usize = 10;

/// Absolute maximum number of leads.
pub const MAX_LEADS_CEILING: usize = 13;

/// An ordered collection of non-overlapping leads.
///
/// # Invariants
/// - `leads.len() <= max_leads <= MAX_LEADS_CEILING`
/// - no letter appears in more than one lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    leads: Vec<Lead>,
    max_leads: usize,
}

impl Plugboard {
    /// Create an empty board with the default capacity.
    pub fn new() -> Self {
        Self {
            leads: Vec::new(),
            max_leads: DEFAULT_MAX_LEADS,
        }
    }

    /// Create an empty board accepting up to `max_leads` leads.
    ///
    /// # Errors
    /// `PlugboardError::CapacityTooLarge` if `max_leads > 13`.
    pub fn with_capacity(max_leads: usize) -> Result<Self> {
        if max_leads > MAX_LEADS_CEILING {
            return Err(PlugboardError::CapacityTooLarge {
                requested: max_leads,
                max: MAX_LEADS_CEILING,
            }
            .into());
        }
        Ok(Self {
            leads: Vec::with_capacity(max_leads),
            max_leads,
        })
    }

    pub fn max_leads(&self) -> usize {
        self.max_leads
    }

    pub fn is_full(&self) -> bool {
        self.leads.len() >= self.max_leads
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Installed leads in insertion order.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Connect a lead.
    ///
    /// # Errors
    /// - `PlugboardError::PlugboardFull` if every slot is used
    /// - `PlugboardError::SlotOccupied` if either letter already has a lead
    pub fn add(&mut self, lead: Lead) -> Result<()> {
        if self.is_full() {
            return Err(PlugboardError::PlugboardFull {
                max: self.max_leads,
            }
            .into());
        }

        let (a, b) = lead.endpoints();
        if let Some(letter) = [a, b]
            .into_iter()
            .find(|&l| self.leads.iter().any(|installed| installed.contains(l)))
        {
            return Err(PlugboardError::SlotOccupied {
                letter: letter.to_char(),
            }
            .into());
        }

        self.leads.push(lead);
        Ok(())
    }

    /// Disconnect every installed lead that shares a letter with `lead`.
    ///
    /// Returns how many leads were removed (one or two: `"HM"` removes both
    /// `HL` and `MO`).
    ///
    /// # Errors
    /// `PlugboardError::NothingToRemove` if the board is empty or no lead
    /// matches.
    pub fn remove(&mut self, lead: &Lead) -> Result<usize> {
        let before = self.leads.len();
        self.leads.retain(|installed| !installed.overlaps(lead));

        match before - self.leads.len() {
            0 => Err(PlugboardError::NothingToRemove.into()),
            removed => Ok(removed),
        }
    }

    /// Disconnect every lead.
    pub fn clear(&mut self) {
        self.leads.clear();
    }

    /// Substitute `letter` through the lead holding it, if any.
    pub fn encode(&self, letter: Letter) -> Letter {
        self.leads
            .iter()
            .find(|lead| lead.contains(letter))
            .map_or(letter, |lead| lead.encode(letter))
    }

    /// Character-level encode: uppercases, substitutes, passes non-letters
    /// through unchanged.
    pub fn encode_char(&self, c: char) -> char {
        match Letter::from_char(c) {
            Some(letter) => self.encode(letter).to_char(),
            None => c,
        }
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.leads.iter().map(Lead::to_string).collect();
        write!(f, "[{}]", pairs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn lead(mapping: &str) -> Lead {
        Lead::parse(mapping).unwrap()
    }

    /// Ten disjoint leads covering A..=T.
    fn ten_leads() -> Vec<Lead> {
        ["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST"]
            .iter()
            .map(|m| lead(m))
            .collect()
    }

    #[test]
    fn test_encode_through_lead() {
        let mut board = Plugboard::new();
        board.add(lead("HL")).unwrap();

        assert_eq!(board.encode_char('H'), 'L');
        assert_eq!(board.encode_char('l'), 'H');
        assert_eq!(board.encode_char('x'), 'X');
    }

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::new();
        for letter in Letter::all() {
            assert_eq!(board.encode(letter), letter);
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Plugboard::new();
        for l in ten_leads() {
            board.add(l).unwrap();
        }
        assert!(board.is_full());

        let result = board.add(lead("UV"));
        assert!(matches!(
            result,
            Err(Error::Plugboard(PlugboardError::PlugboardFull { max: 10 }))
        ));
        assert_eq!(board.leads().len(), 10);
    }

    #[test]
    fn test_slot_occupied() {
        let mut board = Plugboard::new();
        board.add(lead("HL")).unwrap();

        let result = board.add(lead("LM"));
        assert!(matches!(
            result,
            Err(Error::Plugboard(PlugboardError::SlotOccupied { letter: 'L' }))
        ));
        let result = board.add(lead("AH"));
        assert!(matches!(
            result,
            Err(Error::Plugboard(PlugboardError::SlotOccupied { letter: 'H' }))
        ));
    }

    #[test]
    fn test_capacity_ceiling() {
        assert!(Plugboard::with_capacity(13).is_ok());
        assert!(matches!(
            Plugboard::with_capacity(14),
            Err(Error::Plugboard(PlugboardError::CapacityTooLarge {
                requested: 14,
                max: 13
            }))
        ));
    }

    #[test]
    fn test_thirteen_leads_cover_alphabet() {
        let mut board = Plugboard::with_capacity(13).unwrap();
        for pair in ["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST", "UV", "WX", "YZ"]
        {
            board.add(lead(pair)).unwrap();
        }
        for letter in Letter::all() {
            assert_ne!(board.encode(letter), letter);
        }
    }

    #[test]
    fn test_remove() {
        let mut board = Plugboard::new();
        board.add(lead("HL")).unwrap();
        board.add(lead("MO")).unwrap();

        assert_eq!(board.remove(&lead("LH")).unwrap(), 1);
        assert_eq!(board.leads(), &[lead("MO")]);
        assert_eq!(board.encode_char('H'), 'H');
    }

    #[test]
    fn test_remove_by_shared_letter() {
        let mut board = Plugboard::new();
        board.add(lead("HL")).unwrap();
        board.add(lead("MO")).unwrap();
        board.add(lead("QV")).unwrap();

        // One letter from each of two leads
        assert_eq!(board.remove(&lead("HM")).unwrap(), 2);
        assert_eq!(board.leads(), &[lead("QV")]);
    }

    #[test]
    fn test_remove_nothing() {
        let mut board = Plugboard::new();
        assert!(matches!(
            board.remove(&lead("HL")),
            Err(Error::Plugboard(PlugboardError::NothingToRemove))
        ));

        board.add(lead("HL")).unwrap();
        assert!(matches!(
            board.remove(&lead("AB")),
            Err(Error::Plugboard(PlugboardError::NothingToRemove))
        ));
        assert_eq!(board.leads().len(), 1);
    }

    #[test]
    fn test_display() {
        let mut board = Plugboard::new();
        assert_eq!(board.to_string(), "[]");
        board.add(lead("hl")).unwrap();
        board.add(lead("MO")).unwrap();
        assert_eq!(board.to_string(), "[HL MO]");
    }
}
