//! The assembled machine: rotor stack, reflector and plugboard.
//!
//! # Signal Path
//!
//! ```text
//! key ─▶ step rotors
//!     ─▶ plugboard ─▶ rotor 0 ─▶ rotor 1 ─▶ … ─▶ rotor n-1
//!                                                     │
//!                                                 reflector
//!                                                     │
//! lamp ◀─ plugboard ◀─ rotor 0 ◀─ rotor 1 ◀─ … ◀─ rotor n-1
//! ```
//!
//! Rotor 0 is the rightmost, fastest rotor. Public methods that take or
//! return one value per rotor (names, positions, ring settings) order them
//! left to right, the way they read on the machine.
//!
//! # Lifecycle
//!
//! A machine starts empty. `add_components` installs a reflector and
//! rotors, `add_settings` sets leads, window letters and ring settings.
//! Every configuration call validates all of its input before touching the
//! machine, so a failing call changes nothing.

use crate::alphabet::Letter;
use crate::error::{Error, MachineError, Result};
use crate::lead::Lead;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::registry::RotorSpec;
use crate::rotor::Rotor;
use crate::settings::KeySheet;
use crate::stats::MachineStats;
use crate::stepping;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// What `encode_message` does with characters outside A-Z.
///
/// Single-letter encoding always rejects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonLetterPolicy {
    /// Fail the whole message before any rotor moves
    #[default]
    Reject,
    /// Drop them from the output
    Strip,
    /// Copy them to the output without stepping
    PassThrough,
}

impl FromStr for NonLetterPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "strip" => Ok(Self::Strip),
            "pass" | "pass-through" | "passthrough" => Ok(Self::PassThrough),
            other => Err(format!(
                "unknown non-letter policy {:?} (expected reject, strip or pass)",
                other
            )),
        }
    }
}

/// A rotor cipher machine.
///
/// Each machine owns its rotors and plugboard; nothing is shared between
/// instances except the static wiring tables.
///
/// # Thread Safety
/// Encoding mutates rotor state, so a machine needs `&mut` access.
/// Use one instance per thread or synchronize externally.
#[derive(Debug, Clone)]
pub struct Machine {
    /// Index 0 is the rightmost rotor
    rotors: Vec<Rotor>,
    reflector: Option<Reflector>,
    plugboard: Plugboard,
    non_letters: NonLetterPolicy,
    stats: MachineStats,
}

impl Machine {
    /// Create an empty machine with a default 10-lead plugboard.
    pub fn new() -> Self {
        Self {
            rotors: Vec::new(),
            reflector: None,
            plugboard: Plugboard::new(),
            non_letters: NonLetterPolicy::default(),
            stats: MachineStats::new(),
        }
    }

    /// Create an empty machine whose plugboard takes `max_leads` leads.
    ///
    /// # Errors
    /// `PlugboardError::CapacityTooLarge` if `max_leads > 13`.
    pub fn with_max_leads(max_leads: usize) -> Result<Self> {
        Ok(Self {
            plugboard: Plugboard::with_capacity(max_leads)?,
            ..Self::new()
        })
    }

    pub fn non_letter_policy(&self) -> NonLetterPolicy {
        self.non_letters
    }

    pub fn set_non_letter_policy(&mut self, policy: NonLetterPolicy) {
        self.non_letters = policy;
    }

    /// Install a reflector and rotors, rotors listed left to right.
    ///
    /// The reflector replaces any installed one. New rotors are placed to
    /// the right of rotors already installed.
    ///
    /// # Errors
    /// `ComponentError::UnknownReflector` / `ComponentError::UnknownRotor`
    /// for names not in the registry; nothing is installed in that case.
    pub fn add_components<I, S>(&mut self, reflector: &str, rotors: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reflector = Reflector::new(reflector)?;
        let mut added = rotors
            .into_iter()
            .map(|name| RotorSpec::lookup(name.as_ref()).map(Rotor::from_spec))
            .collect::<Result<Vec<_>>>()?;

        added.reverse();
        added.append(&mut self.rotors);
        self.rotors = added;
        self.reflector = Some(reflector);

        debug!(
            reflector = reflector.name(),
            rotors = ?self.rotor_names(),
            "components installed"
        );
        Ok(())
    }

    /// Connect plug leads, set window letters and ring settings.
    ///
    /// `positions` holds one letter per rotor and `rings` one 1-indexed
    /// setting per rotor, both left to right. Shorter inputs apply to the
    /// rightmost rotors and leave the others as they are.
    ///
    /// # Errors
    /// - `MachineError::MissingComponents` if no rotors are installed
    /// - `MachineError::TooManyPositions` / `TooManyRingSettings` if more
    ///   values than rotors are given
    /// - `MachineError::InvalidInput` for a non-letter position
    /// - `ComponentError::InvalidRingSetting` outside 1..=26
    /// - any lead or plugboard error from connecting `plugs`
    pub fn add_settings<S: AsRef<str>>(
        &mut self,
        plugs: &[S],
        positions: &str,
        rings: &[u8],
    ) -> Result<()> {
        if self.rotors.is_empty() {
            return Err(MachineError::MissingComponents.into());
        }

        let mut rotors = self.rotors.clone();
        apply_positions(&mut rotors, positions)?;

        let mut plugboard = self.plugboard.clone();
        for mapping in plugs {
            plugboard.add(Lead::parse(mapping.as_ref())?)?;
        }

        if rings.len() > rotors.len() {
            return Err(MachineError::TooManyRingSettings {
                given: rings.len(),
                rotors: rotors.len(),
            }
            .into());
        }
        for (rotor, &setting) in rotors.iter_mut().zip(rings.iter().rev()) {
            rotor.set_ring(setting)?;
        }

        self.rotors = rotors;
        self.plugboard = plugboard;

        debug!(
            window = %self.window(),
            rings = ?self.ring_settings(),
            plugboard = %self.plugboard,
            "settings applied"
        );
        Ok(())
    }

    /// Set window letters only, left to right.
    ///
    /// # Errors
    /// Same position errors as [`Machine::add_settings`].
    pub fn set_positions(&mut self, positions: &str) -> Result<()> {
        if self.rotors.is_empty() {
            return Err(MachineError::MissingComponents.into());
        }
        let mut rotors = self.rotors.clone();
        apply_positions(&mut rotors, positions)?;
        self.rotors = rotors;
        Ok(())
    }

    /// Remove every component and setting, returning to an empty machine.
    ///
    /// Plugboard capacity and the non-letter policy are kept.
    pub fn reset(&mut self) {
        self.rotors.clear();
        self.reflector = None;
        self.plugboard.clear();
        self.stats = MachineStats::new();
        debug!("machine reset");
    }

    /// Zero the counters without touching the configuration.
    pub fn reset_stats(&mut self) {
        self.stats = MachineStats::new();
    }

    /// Encode one letter, stepping the rotors first.
    ///
    /// Lowercase input is accepted; the result is always uppercase.
    ///
    /// # Errors
    /// - `MachineError::MissingComponents` without rotors or reflector
    /// - `MachineError::InvalidInput` if `c` is not an ASCII letter
    pub fn encode_letter(&mut self, c: char) -> Result<char> {
        let reflector = self.ready()?;
        let letter = Letter::from_char(c).ok_or_else(|| invalid_input(c.to_string()))?;
        Ok(self.encode_ready(reflector, letter).to_char())
    }

    /// Encode a key given as text, which must be exactly one letter.
    ///
    /// # Errors
    /// As [`Machine::encode_letter`]; also `MachineError::InvalidInput`
    /// for empty or multi-character input.
    pub fn encode_key(&mut self, key: &str) -> Result<char> {
        self.ready()?;
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.encode_letter(c),
            _ => Err(invalid_input(key)),
        }
    }

    /// Encode a message letter by letter.
    ///
    /// Non-letters are handled according to the machine's
    /// [`NonLetterPolicy`]. Under `Reject` the message is checked before
    /// any rotor moves.
    ///
    /// # Errors
    /// - `MachineError::MissingComponents` without rotors or reflector
    /// - `MachineError::InvalidInput` naming the first non-letter under
    ///   `Reject`
    pub fn encode_message(&mut self, message: &str) -> Result<String> {
        let reflector = self.ready()?;

        if self.non_letters == NonLetterPolicy::Reject {
            if let Some(c) = message.chars().find(|&c| Letter::from_char(c).is_none()) {
                return Err(invalid_input(c.to_string()));
            }
        }

        let mut output = String::with_capacity(message.len());
        for c in message.chars() {
            match Letter::from_char(c) {
                Some(letter) => output.push(self.encode_ready(reflector, letter).to_char()),
                None if self.non_letters == NonLetterPolicy::PassThrough => {
                    self.stats.passed_through += 1;
                    output.push(c);
                }
                None => self.stats.stripped += 1,
            }
        }

        Ok(output)
    }

    /// Installed rotors, index 0 rightmost.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Rotor names, left to right.
    pub fn rotor_names(&self) -> Vec<&'static str> {
        self.rotors.iter().rev().map(Rotor::name).collect()
    }

    /// Window letters, left to right.
    pub fn window(&self) -> String {
        self.rotors
            .iter()
            .rev()
            .map(|r| r.position().to_char())
            .collect()
    }

    /// 1-indexed ring settings, left to right.
    pub fn ring_settings(&self) -> Vec<u8> {
        self.rotors.iter().rev().map(Rotor::ring_setting).collect()
    }

    pub fn reflector_name(&self) -> Option<&'static str> {
        self.reflector.map(|r| r.name())
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Mutable plugboard access for connecting or removing leads between
    /// messages.
    pub fn plugboard_mut(&mut self) -> &mut Plugboard {
        &mut self.plugboard
    }

    pub fn stats(&self) -> &MachineStats {
        &self.stats
    }

    /// Snapshot the current configuration, with the current window as the
    /// start positions.
    ///
    /// # Errors
    /// `MachineError::MissingComponents` without rotors or reflector.
    pub fn key_sheet(&self) -> Result<KeySheet> {
        let reflector = self.ready()?;
        Ok(KeySheet {
            reflector: reflector.name().to_string(),
            rotors: self.rotor_names().iter().map(|n| n.to_string()).collect(),
            plugs: self.plugboard.leads().iter().map(Lead::to_string).collect(),
            positions: self.window(),
            rings: self.ring_settings(),
        })
    }

    /// The reflector, if the machine can encode.
    fn ready(&self) -> Result<Reflector> {
        match self.reflector {
            Some(reflector) if !self.rotors.is_empty() => Ok(reflector),
            _ => Err(MachineError::MissingComponents.into()),
        }
    }

    /// Step, then push one letter through the full signal path.
    fn encode_ready(&mut self, reflector: Reflector, letter: Letter) -> Letter {
        let advance = stepping::advance(&mut self.rotors);
        self.stats.record_advance(&advance);
        if advance.double_step {
            debug!(window = %self.window(), "double step");
        }

        let entry = self.plugboard.encode(letter);
        let signal = self
            .rotors
            .iter()
            .fold(entry, |signal, rotor| rotor.encode_forward(signal));
        let signal = reflector.reflect(signal);
        let signal = self
            .rotors
            .iter()
            .rev()
            .fold(signal, |signal, rotor| rotor.encode_backward(signal));
        let output = self.plugboard.encode(signal);

        self.stats.letters_encoded += 1;
        self.stats.plugboard_substitutions +=
            u64::from(entry != letter) + u64::from(output != signal);

        trace!(
            input = %letter,
            output = %output,
            stepped = advance.count(),
            window = %self.window(),
            "encoded"
        );
        output
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rings: Vec<String> = self
            .ring_settings()
            .iter()
            .map(|r| format!("{:02}", r))
            .collect();

        writeln!(f, "Rotors: {}", self.rotor_names().join(" "))?;
        writeln!(f, "Rotor positions: {}", self.window())?;
        writeln!(f, "Ring settings: {}", rings.join(" "))?;
        writeln!(f, "Reflector: {}", self.reflector_name().unwrap_or("-"))?;
        write!(f, "Plugboard: {}", self.plugboard)
    }
}

/// Set window letters from a left-to-right string onto a right-indexed stack.
fn apply_positions(rotors: &mut [Rotor], positions: &str) -> Result<()> {
    let letters = positions
        .chars()
        .map(|c| Letter::from_char(c).ok_or_else(|| invalid_input(positions)))
        .collect::<Result<Vec<_>>>()?;

    if letters.len() > rotors.len() {
        return Err(MachineError::TooManyPositions {
            given: letters.len(),
            rotors: rotors.len(),
        }
        .into());
    }

    for (rotor, &letter) in rotors.iter_mut().zip(letters.iter().rev()) {
        rotor.set_position(letter);
    }
    Ok(())
}

fn invalid_input(input: impl Into<String>) -> Error {
    MachineError::InvalidInput(input.into()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ComponentError, PlugboardError};

    fn machine(reflector: &str, rotors: &[&str], positions: &str, rings: &[u8]) -> Machine {
        let mut m = Machine::new();
        m.add_components(reflector, rotors).unwrap();
        m.add_settings::<&str>(&[], positions, rings).unwrap();
        m
    }

    #[test]
    fn test_encode_requires_components() {
        let mut m = Machine::new();
        assert_eq!(
            m.encode_letter('A'),
            Err(Error::Machine(MachineError::MissingComponents))
        );

        m.add_components("B", Vec::<&str>::new()).unwrap();
        assert_eq!(
            m.encode_letter('A'),
            Err(Error::Machine(MachineError::MissingComponents))
        );
    }

    #[test]
    fn test_golden_first_letter() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[1, 1, 1]);
        assert_eq!(m.encode_letter('A').unwrap(), 'B');
        assert_eq!(m.window(), "AAB");
    }

    #[test]
    fn test_lowercase_input() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[1, 1, 1]);
        assert_eq!(m.encode_message("aaaaa").unwrap(), "BDZGO");
    }

    #[test]
    fn test_encode_letter_rejects_non_letters() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[]);
        for c in [' ', '7', '?'] {
            assert!(matches!(
                m.encode_letter(c),
                Err(Error::Machine(MachineError::InvalidInput(_)))
            ));
        }
        assert_eq!(m.window(), "AAA");
    }

    #[test]
    fn test_encode_key_single_character() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[]);
        assert_eq!(m.encode_key("A").unwrap(), 'B');
        for key in ["", "AB"] {
            assert_eq!(
                m.encode_key(key),
                Err(Error::Machine(MachineError::InvalidInput(key.to_string())))
            );
        }
    }

    #[test]
    fn test_reject_policy_is_atomic() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[]);
        let result = m.encode_message("HELLO WORLD");
        assert_eq!(
            result,
            Err(Error::Machine(MachineError::InvalidInput(" ".to_string())))
        );
        assert_eq!(m.window(), "AAA");
        assert_eq!(m.stats().letters_encoded, 0);
    }

    #[test]
    fn test_strip_policy() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[]);
        m.set_non_letter_policy(NonLetterPolicy::Strip);
        assert_eq!(m.encode_message("HELLO, WORLD").unwrap(), "ILBDAAMTAZ");
        assert_eq!(m.stats().stripped, 2);
    }

    #[test]
    fn test_pass_through_policy_does_not_step() {
        let mut m = machine("B", &["I", "II", "III"], "AAA", &[]);
        m.set_non_letter_policy(NonLetterPolicy::PassThrough);
        assert_eq!(m.encode_message("HELLO WORLD!").unwrap(), "ILBDA AMTAZ!");
        assert_eq!(m.window(), "AAK");
        assert_eq!(m.stats().passed_through, 2);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("reject".parse::<NonLetterPolicy>(), Ok(NonLetterPolicy::Reject));
        assert_eq!("Strip".parse::<NonLetterPolicy>(), Ok(NonLetterPolicy::Strip));
        assert_eq!("pass".parse::<NonLetterPolicy>(), Ok(NonLetterPolicy::PassThrough));
        assert!("drop".parse::<NonLetterPolicy>().is_err());
    }

    #[test]
    fn test_add_components_orders_left_to_right() {
        let m = machine("C", &["Gamma", "IV", "II"], "BCD", &[3, 2, 1]);
        assert_eq!(m.rotor_names(), vec!["Gamma", "IV", "II"]);
        assert_eq!(m.rotors()[0].name(), "II");
        assert_eq!(m.window(), "BCD");
        assert_eq!(m.ring_settings(), vec![3, 2, 1]);
        assert_eq!(m.reflector_name(), Some("C"));
    }

    #[test]
    fn test_add_components_unknown_installs_nothing() {
        let mut m = Machine::new();
        assert_eq!(
            m.add_components("B", ["I", "IX"]),
            Err(Error::Component(ComponentError::UnknownRotor("IX".to_string())))
        );
        assert!(m.rotors().is_empty());

        assert_eq!(
            m.add_components("Q", ["I"]),
            Err(Error::Component(ComponentError::UnknownReflector("Q".to_string())))
        );
        assert_eq!(m.reflector_name(), None);
    }

    #[test]
    fn test_add_settings_requires_rotors() {
        let mut m = Machine::new();
        assert_eq!(
            m.add_settings(&["HL"], "A", &[1]),
            Err(Error::Machine(MachineError::MissingComponents))
        );
    }

    #[test]
    fn test_short_settings_apply_to_rightmost() {
        let mut m = Machine::new();
        m.add_components("B", ["I", "II", "III"]).unwrap();
        m.add_settings::<&str>(&[], "QR", &[5]).unwrap();
        assert_eq!(m.window(), "AQR");
        assert_eq!(m.ring_settings(), vec![1, 1, 5]);
    }

    #[test]
    fn test_too_many_ring_settings() {
        let mut m = Machine::new();
        m.add_components("B", ["I", "II"]).unwrap();
        assert_eq!(
            m.add_settings::<&str>(&[], "", &[1, 1, 1]),
            Err(Error::Machine(MachineError::TooManyRingSettings {
                given: 3,
                rotors: 2
            }))
        );
    }

    #[test]
    fn test_failed_settings_change_nothing() {
        let mut m = Machine::new();
        m.add_components("B", ["I", "II", "III"]).unwrap();

        // Valid positions and first lead, then a clash
        let result = m.add_settings(&["HL", "LM"], "XYZ", &[2, 2, 2]);
        assert!(matches!(
            result,
            Err(Error::Plugboard(PlugboardError::SlotOccupied { letter: 'L' }))
        ));
        assert_eq!(m.window(), "AAA");
        assert!(m.plugboard().is_empty());

        assert!(m.add_settings::<&str>(&[], "AAA", &[1, 27, 1]).is_err());
        assert_eq!(m.ring_settings(), vec![1, 1, 1]);

        assert_eq!(
            m.add_settings::<&str>(&[], "ABCD", &[]),
            Err(Error::Machine(MachineError::TooManyPositions {
                given: 4,
                rotors: 3
            }))
        );
        assert!(matches!(
            m.add_settings::<&str>(&[], "A1A", &[]),
            Err(Error::Machine(MachineError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_positions_are_absolute() {
        let mut m = machine("B", &["I", "II", "III"], "ABC", &[]);
        m.set_positions("ABC").unwrap();
        assert_eq!(m.window(), "ABC");
    }

    #[test]
    fn test_reset() {
        let mut m = Machine::with_max_leads(12).unwrap();
        m.add_components("B", ["I", "II", "III"]).unwrap();
        m.add_settings(&["HL"], "ABC", &[]).unwrap();
        m.encode_letter('A').unwrap();

        m.reset();
        assert!(m.rotors().is_empty());
        assert_eq!(m.reflector_name(), None);
        assert!(m.plugboard().is_empty());
        assert_eq!(m.plugboard().max_leads(), 12);
        assert_eq!(m.stats().letters_encoded, 0);
        assert_eq!(
            m.encode_letter('A'),
            Err(Error::Machine(MachineError::MissingComponents))
        );
    }

    #[test]
    fn test_machines_do_not_share_state() {
        let mut a = machine("B", &["I", "II", "III"], "AAA", &[]);
        let b = machine("B", &["I", "II", "III"], "AAA", &[]);

        a.plugboard_mut().add(Lead::parse("HL").unwrap()).unwrap();
        a.encode_message("AAAA").unwrap();

        assert!(b.plugboard().is_empty());
        assert_eq!(b.window(), "AAA");
    }

    #[test]
    fn test_stats_count_steps() {
        let mut m = machine("B", &["I", "II", "III"], "ADU", &[]);
        m.encode_message("AAA").unwrap();

        let stats = m.stats();
        assert_eq!(stats.letters_encoded, 3);
        assert_eq!(stats.rotor_advances, [3, 2, 1]);
        assert_eq!(stats.double_steps, 1);
    }

    #[test]
    fn test_key_sheet_snapshot() {
        let mut m = machine("B", &["IV", "V", "Beta"], "AAA", &[14, 9, 24]);
        m.plugboard_mut().add(Lead::parse("hl").unwrap()).unwrap();

        let sheet = m.key_sheet().unwrap();
        assert_eq!(sheet.reflector, "B");
        assert_eq!(sheet.rotors, vec!["IV", "V", "Beta"]);
        assert_eq!(sheet.plugs, vec!["HL"]);
        assert_eq!(sheet.positions, "AAA");
        assert_eq!(sheet.rings, vec![14, 9, 24]);
    }

    #[test]
    fn test_display() {
        let mut m = machine("B", &["I", "II", "III"], "ABC", &[1, 2, 3]);
        m.plugboard_mut().add(Lead::parse("HL").unwrap()).unwrap();
        assert_eq!(
            m.to_string(),
            "Rotors: I II III\n\
             Rotor positions: ABC\n\
             Ring settings: 01 02 03\n\
             Reflector: B\n\
             Plugboard: [HL]"
        );
    }
}
