//! enigma-sim-core: an electromechanical rotor cipher machine
//!
//! This library provides the core components of a three/four-rotor cipher
//! machine in the style of the Enigma:
//! - Plug leads and a bounded plugboard of reciprocal letter swaps
//! - Rotors with ring settings and notches, drawn from a static registry
//! - Reflectors pairing all 26 letters
//! - The stepping mechanism, including the middle rotor's double step
//! - A `Machine` that steps and pushes each letter through the signal path
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `alphabet`: the `Letter` type every component works on
//! - `registry`: wiring tables for rotors I-V, Beta, Gamma and reflectors A-C
//! - `lead` / `plugboard`: the swap layer on either side of the rotors
//! - `rotor` / `reflector`: the scrambling components
//! - `stepping`: which rotors advance before each letter
//! - `machine`: assembly, settings and the signal path
//! - `settings`: key sheets describing a full configuration
//! - `stats`: counters for observing machine behavior
//!
//! # Example
//!
//! ```
//! use enigma_sim_core::Machine;
//!
//! let mut machine = Machine::new();
//! machine.add_components("B", ["I", "II", "III"]).unwrap();
//! machine.add_settings(&["HL", "MO"], "AAA", &[1, 1, 1]).unwrap();
//!
//! let ciphertext = machine.encode_message("ATTACKATDAWN").unwrap();
//!
//! // Same settings decode the message again
//! machine.set_positions("AAA").unwrap();
//! assert_eq!(machine.encode_message(&ciphertext).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Atomic configuration**: a failed settings call leaves the machine as it was
//! - **Deterministic**: Same key sheet, same output, bit for bit

pub mod alphabet;
pub mod error;
pub mod lead;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod registry;
pub mod rotor;
pub mod settings;
pub mod stats;
pub mod stepping;

// Re-export commonly used types
pub use alphabet::Letter;
pub use error::{Error, Result};
pub use lead::Lead;
pub use machine::{Machine, NonLetterPolicy};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::KeySheet;
pub use stats::MachineStats;
