//! Counters describing what a machine has done since it was assembled.
//!
//! This module provides observable insights into machine behavior:
//! - Letters encoded and characters skipped
//! - How often each rotor advanced
//! - Double steps taken by the middle rotor
//! - Plugboard traffic
//!
//! # Thread Safety
//!
//! `MachineStats` is plain data owned by its `Machine`; it is updated
//! in-line on every encode and needs no synchronization.

use crate::stepping::{Advance, STEPPING_WINDOW};

/// Counters for one machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineStats {
    /// Letters pushed through the full signal path
    pub letters_encoded: u64,

    /// `rotor_advances[i]` counts steps of rotor `i` (0 = rightmost)
    pub rotor_advances: [u64; STEPPING_WINDOW],

    /// Cycles in which a rotor advanced off its own notch
    pub double_steps: u64,

    /// Plugboard passes that changed the letter (two passes per letter)
    pub plugboard_substitutions: u64,

    /// Non-letters copied through unchanged
    pub passed_through: u64,

    /// Non-letters dropped from the message
    pub stripped: u64,
}

impl MachineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one stepping cycle.
    pub fn record_advance(&mut self, advance: &Advance) {
        for (count, &stepped) in self.rotor_advances.iter_mut().zip(advance.stepped.iter()) {
            if stepped {
                *count += 1;
            }
        }
        if advance.double_step {
            self.double_steps += 1;
        }
    }

    /// Fraction of plugboard passes that substituted a letter.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn plugboard_rate(&self) -> f64 {
        if self.letters_encoded == 0 {
            0.0
        } else {
            self.plugboard_substitutions as f64 / (2 * self.letters_encoded) as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Machine Summary ===");
        println!("Letters encoded: {}", self.letters_encoded);
        println!("Passed through: {}", self.passed_through);
        println!("Stripped: {}", self.stripped);
        println!();

        println!("=== Rotors (right to left) ===");
        for (i, count) in self.rotor_advances.iter().enumerate() {
            println!("Rotor {} advances: {}", i, count);
        }
        println!("Double steps: {}", self.double_steps);
        println!();

        println!("=== Plugboard ===");
        println!(
            "Substitutions: {} ({:.1}% of passes)",
            self.plugboard_substitutions,
            self.plugboard_rate() * 100.0
        );
        println!();
    }

    /// Export counters as key=value lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "letters_encoded={}\n\
             rotor0_advances={}\n\
             rotor1_advances={}\n\
             rotor2_advances={}\n\
             double_steps={}\n\
             plugboard_substitutions={}\n\
             plugboard_rate={:.4}\n\
             passed_through={}\n\
             stripped={}\n",
            self.letters_encoded,
            self.rotor_advances[0],
            self.rotor_advances[1],
            self.rotor_advances[2],
            self.double_steps,
            self.plugboard_substitutions,
            self.plugboard_rate(),
            self.passed_through,
            self.stripped,
        )
    }
}
