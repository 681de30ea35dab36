//! Error types for the enigma-sim system.
//!
//! Every configuration and encoding failure is a structured error; nothing
//! in the core panics on bad input. Removing a lead that is not installed is
//! reported through the same channel as every other plugboard failure.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Plugboard: lead construction and lead installation/removal
/// - Component: rotor/reflector lookup and rotor settings
/// - Machine: assembly state and encode input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Plugboard or lead error (e.g., self-paired lead, occupied slot)
    #[error("plugboard error: {0}")]
    Plugboard(#[from] PlugboardError),

    /// Component error (e.g., unknown rotor name)
    #[error("component error: {0}")]
    Component(#[from] ComponentError),

    /// Machine error (e.g., encoding without a reflector)
    #[error("machine error: {0}")]
    Machine(#[from] MachineError),
}

/// Plugboard and lead errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlugboardError {
    /// Lead is not exactly two distinct letters
    #[error("invalid lead {lead:?}: a lead joins exactly two different letters")]
    InvalidLead { lead: String },

    /// Every lead slot is already in use
    #[error("plugboard full: all {max} leads connected")]
    PlugboardFull { max: usize },

    /// One of the lead's letters already has a lead connected
    #[error("slot {letter} already has a lead connected")]
    SlotOccupied { letter: char },

    /// No installed lead shares a letter with the lead to remove
    #[error("no matching lead to remove")]
    NothingToRemove,

    /// Requested capacity exceeds the 13 pairs the alphabet allows
    #[error("plugboard capacity {requested} exceeds maximum {max}")]
    CapacityTooLarge { requested: usize, max: usize },
}

/// Rotor and reflector errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Rotor name is not in the registry
    #[error("rotor {0:?} does not exist")]
    UnknownRotor(String),

    /// Reflector name is not in the registry
    #[error("reflector {0:?} does not exist")]
    UnknownReflector(String),

    /// Ring setting outside 1..=26
    #[error("ring setting {0} outside 1..=26")]
    InvalidRingSetting(u8),
}

/// Machine assembly and input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// No rotors or no reflector installed
    #[error("one or more components missing: install rotors and a reflector")]
    MissingComponents,

    /// Input is not exactly one letter (or a message contains a rejected character)
    #[error("invalid input {0:?}: expected a single letter A-Z")]
    InvalidInput(String),

    /// More ring settings than installed rotors
    #[error("{given} ring settings given for {rotors} rotors")]
    TooManyRingSettings { given: usize, rotors: usize },

    /// More start positions than installed rotors
    #[error("{given} rotor positions given for {rotors} rotors")]
    TooManyPositions { given: usize, rotors: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
