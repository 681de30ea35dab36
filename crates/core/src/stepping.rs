//! Rotor stepping: which rotors advance before each letter.
//!
//! Only the three rightmost rotors (indices 0..3) take part. Any rotor
//! beyond them stays where it was set, like the fixed fourth wheel of the
//! naval machine.
//!
//! # Rules
//!
//! All notch checks read the state *before* anything moves this cycle.
//!
//! - Rotor 0 always advances.
//! - If rotor `i` sits on its notch, rotor `i + 1` advances.
//! - If rotor `i` (not the rightmost) sits on its notch and has a left
//!   neighbour, rotor `i` advances as well. This is the double step: the
//!   middle rotor moves onto its notch on one key press and off it on the
//!   next, dragging the left rotor along.
//!
//! Each rotor advances at most once per letter however many rules fire.

use crate::rotor::Rotor;

/// Number of rotors the stepping mechanism can drive.
pub const STEPPING_WINDOW: usize = 3;

/// Which rotors advanced during one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    /// `stepped[i]` is true when rotor `i` advanced
    pub stepped: [bool; STEPPING_WINDOW],
    /// A rotor advanced because it sat on its own notch
    pub double_step: bool,
}

impl Advance {
    /// Number of rotors that moved.
    pub fn count(&self) -> usize {
        self.stepped.iter().filter(|&&s| s).count()
    }
}

/// Decide which rotors advance, without moving anything.
///
/// `rotors[0]` is the rightmost (fastest) rotor.
pub fn plan(rotors: &[Rotor]) -> Advance {
    let window = rotors.len().min(STEPPING_WINDOW);
    let mut advance = Advance::default();
    if window == 0 {
        return advance;
    }

    advance.stepped[0] = true;

    for i in 0..window - 1 {
        if !rotors[i].at_notch() {
            continue;
        }
        advance.stepped[i + 1] = true;
        if i > 0 {
            advance.stepped[i] = true;
            advance.double_step = true;
        }
    }

    advance
}

/// Advance the rotor stack by one mechanical cycle.
pub fn advance(rotors: &mut [Rotor]) -> Advance {
    let advance = plan(rotors);
    for (rotor, &stepped) in rotors.iter_mut().zip(advance.stepped.iter()) {
        if stepped {
            rotor.step();
        }
    }
    advance
}
