//! One encode run: assemble, encode, optionally decode and compare.

use crate::config::Config;
use enigma_sim_core::{KeySheet, Machine, MachineStats, NonLetterPolicy, Result};
use tracing::{info, warn};

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct Report {
    pub output: String,
    /// `None` when verification was skipped
    pub verified: Option<bool>,
    pub stats: MachineStats,
}

/// Build a machine for `sheet` with the run's plugboard capacity and policy.
pub fn assemble(sheet: &KeySheet, max_leads: usize, policy: NonLetterPolicy) -> Result<Machine> {
    let mut machine = Machine::with_max_leads(max_leads)?;
    machine.set_non_letter_policy(policy);
    sheet.apply(&mut machine)?;
    Ok(machine)
}

/// Encode `plaintext` under `config`.
///
/// With verification on, a second machine built from the same key sheet
/// decodes the output; it must reproduce the plaintext as the policy
/// normalizes it.
pub fn run(config: &Config, plaintext: &str) -> Result<Report> {
    let mut machine = assemble(&config.key_sheet, config.max_leads, config.non_letters)?;
    let output = machine.encode_message(plaintext)?;
    info!(letters = machine.stats().letters_encoded, window = %machine.window(), "message encoded");

    let verified = if config.verify {
        let mut decoder = assemble(&config.key_sheet, config.max_leads, config.non_letters)?;
        let decoded = decoder.encode_message(&output)?;
        let ok = decoded == normalize(plaintext, config.non_letters);
        if !ok {
            warn!("decoded text does not match plaintext");
        }
        Some(ok)
    } else {
        None
    };

    Ok(Report {
        output,
        verified,
        stats: machine.stats().clone(),
    })
}

/// The plaintext as a round trip reproduces it: letters uppercased,
/// non-letters kept or dropped per `policy`.
pub fn normalize(plaintext: &str, policy: NonLetterPolicy) -> String {
    plaintext
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphabetic() {
                Some(c.to_ascii_uppercase())
            } else if policy == NonLetterPolicy::PassThrough {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
