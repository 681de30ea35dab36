//! Rotors: fixed wiring plus mutable rotational state.
//!
//! A rotor's contacts turn with it, so the letter presented to the wiring
//! depends on how far the rotor has turned. Two numbers describe that
//! state:
//!
//! - `position`: the letter visible in the window (advanced by stepping)
//! - `ring`: the ring setting, 0-based, which turns the wiring core
//!   relative to the lettered ring
//!
//! Only their difference reaches the wiring, so both directions are a
//! single conjugated permutation:
//!
//! ```text
//! shift    = position - ring                   (mod 26)
//! forward  = W(x + shift) - shift              (mod 26)
//! backward = W⁻¹(x + shift) - shift            (mod 26)
//! ```
//!
//! The notch is tied to the window letter, so ring settings never move the
//! carry point.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{ComponentError, Result};
use crate::registry::RotorSpec;

/// One installed rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: &'static RotorSpec,
    position: Letter,
    ring: u8,
}

impl Rotor {
    /// Create a rotor at window `A` with ring setting 1.
    ///
    /// # Errors
    /// `ComponentError::UnknownRotor` if `name` is not in the registry.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::from_spec(RotorSpec::lookup(name)?))
    }

    pub fn from_spec(spec: &'static RotorSpec) -> Self {
        Self {
            spec,
            position: Letter::A,
            ring: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn notch(&self) -> Option<Letter> {
        self.spec.notch
    }

    /// Letter currently shown in the window.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Ring setting, 1-indexed as printed on the ring.
    pub fn ring_setting(&self) -> u8 {
        self.ring + 1
    }

    /// Turn the rotor so `letter` shows in the window.
    pub fn set_position(&mut self, letter: Letter) {
        self.position = letter;
    }

    /// Set the ring setting from its 1-indexed value.
    ///
    /// # Errors
    /// `ComponentError::InvalidRingSetting` outside 1..=26.
    pub fn set_ring(&mut self, setting: u8) -> Result<()> {
        if !(1..=ALPHABET_LEN).contains(&setting) {
            return Err(ComponentError::InvalidRingSetting(setting).into());
        }
        self.ring = setting - 1;
        Ok(())
    }

    /// Advance the window by one letter.
    pub fn step(&mut self) {
        self.position = self.position.shift(1);
    }

    /// Whether the window currently shows this rotor's notch letter.
    ///
    /// Always false for rotors without a notch.
    pub fn at_notch(&self) -> bool {
        self.spec.notch == Some(self.position)
    }

    /// Signal travelling from the plugboard side toward the reflector.
    pub fn encode_forward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        self.spec.wiring.forward(letter.shift(shift)).shift(-shift)
    }

    /// Signal travelling from the reflector back toward the plugboard.
    pub fn encode_backward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        self.spec.wiring.backward(letter.shift(shift)).shift(-shift)
    }

    fn shift(&self) -> i32 {
        self.position.index() as i32 - self.ring as i32
    }
}
