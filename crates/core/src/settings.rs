//! Key sheets: a complete machine configuration as plain data.
//!
//! A key sheet is what an operator would read off the daily settings
//! list. Everything is written left to right as it reads on the machine.

use crate::error::Result;
use crate::machine::Machine;
use std::fmt;

/// A fully-formed machine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySheet {
    /// Reflector name, e.g. `"B"`
    pub reflector: String,

    /// Rotor names, left to right
    pub rotors: Vec<String>,

    /// Plug leads as two-letter mappings, e.g. `"HL"`
    pub plugs: Vec<String>,

    /// Start window letters, left to right (may be shorter than `rotors`)
    pub positions: String,

    /// 1-indexed ring settings, left to right (may be shorter than `rotors`)
    pub rings: Vec<u8>,
}

impl KeySheet {
    /// Assemble a fresh machine with a default plugboard.
    pub fn build(&self) -> Result<Machine> {
        let mut machine = Machine::new();
        self.apply(&mut machine)?;
        Ok(machine)
    }

    /// Install this configuration into `machine`.
    ///
    /// Use this with a machine from [`Machine::with_max_leads`] when the
    /// sheet has more than the default number of leads.
    pub fn apply(&self, machine: &mut Machine) -> Result<()> {
        machine.add_components(&self.reflector, &self.rotors)?;
        machine.add_settings(&self.plugs, &self.positions, &self.rings)
    }
}

impl fmt::Display for KeySheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rings: Vec<String> = self.rings.iter().map(|r| format!("{:02}", r)).collect();

        writeln!(f, "Reflector: {}", self.reflector)?;
        writeln!(f, "Rotors: {}", self.rotors.join(" "))?;
        writeln!(f, "Positions: {}", self.positions)?;
        writeln!(f, "Rings: {}", rings.join(" "))?;
        write!(f, "Plugboard: {}", self.plugs.join(" "))
    }
}
