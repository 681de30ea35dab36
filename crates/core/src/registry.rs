//! Static rotor and reflector wiring tables.
//!
//! Tables are built at compile time and never mutated. Each table entry
//! lists, for input letter A..Z, the letter the wire connects to.
//!
//! ```text
//! Rotor   Wiring                        Notch
//! I       EKMFLGDQVZNTOWYHXUSPAIBRCJ    Q
//! II      AJDKSIRUXBLHWTMCQGZNPYFVOE    E
//! III     BDFHJLCPRTXVZNYEIWGAKMUSQO    V
//! IV      ESOVPZJAYQUIRHXLNFTGKDCMWB    J
//! V       VZBRGITYUPSDNHLXAWMJQOFECK    Z
//! Beta    LEYJVCNIXWPBQMDRTAKZGFUHOS    -
//! Gamma   FSOKANUERHMBTIYCWLQPZXVGJD    -
//! ```

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{ComponentError, Result};

const N: usize = ALPHABET_LEN as usize;

/// A permutation of the alphabet with its inverse precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; N],
    backward: [u8; N],
}

impl Wiring {
    /// Build from an uppercase table such as `b"EKMF..."`.
    ///
    /// Only called on the constant tables below; a table that is not a
    /// permutation fails const evaluation.
    const fn from_table(table: &[u8; N]) -> Self {
        let mut forward = [0u8; N];
        let mut backward = [u8::MAX; N];
        let mut i = 0;
        while i < N {
            let out = table[i] - b'A';
            assert!((out as usize) < N, "wiring table must be uppercase A-Z");
            assert!(backward[out as usize] == u8::MAX, "wiring table is not a permutation");
            forward[i] = out;
            backward[out as usize] = i as u8;
            i += 1;
        }
        Self { forward, backward }
    }

    /// Follow the wire from `letter`.
    pub fn forward(&self, letter: Letter) -> Letter {
        Letter::from_index_unchecked(self.forward[letter.index() as usize])
    }

    /// Follow the wire back to the letter that reaches `letter`.
    pub fn backward(&self, letter: Letter) -> Letter {
        Letter::from_index_unchecked(self.backward[letter.index() as usize])
    }
}

/// Fixed description of a rotor type.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: &'static str,
    pub wiring: Wiring,
    /// Window letter at which this rotor carries into its left neighbour
    pub notch: Option<Letter>,
}

/// Fixed description of a reflector type.
#[derive(Debug, PartialEq, Eq)]
pub struct ReflectorSpec {
    pub name: &'static str,
    pub wiring: Wiring,
}

const fn notch(c: u8) -> Option<Letter> {
    Some(Letter::from_index_unchecked(c - b'A'))
}

/// Every rotor the machine can be fitted with.
pub static ROTORS: [RotorSpec; 7] = [
    RotorSpec {
        name: "I",
        wiring: Wiring::from_table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        notch: notch(b'Q'),
    },
    RotorSpec {
        name: "II",
        wiring: Wiring::from_table(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
        notch: notch(b'E'),
    },
    RotorSpec {
        name: "III",
        wiring: Wiring::from_table(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"),
        notch: notch(b'V'),
    },
    RotorSpec {
        name: "IV",
        wiring: Wiring::from_table(b"ESOVPZJAYQUIRHXLNFTGKDCMWB"),
        notch: notch(b'J'),
    },
    RotorSpec {
        name: "V",
        wiring: Wiring::from_table(b"VZBRGITYUPSDNHLXAWMJQOFECK"),
        notch: notch(b'Z'),
    },
    RotorSpec {
        name: "Beta",
        wiring: Wiring::from_table(b"LEYJVCNIXWPBQMDRTAKZGFUHOS"),
        notch: None,
    },
    RotorSpec {
        name: "Gamma",
        wiring: Wiring::from_table(b"FSOKANUERHMBTIYCWLQPZXVGJD"),
        notch: None,
    },
];

/// Every reflector the machine can be fitted with.
pub static REFLECTORS: [ReflectorSpec; 3] = [
    ReflectorSpec {
        name: "A",
        wiring: Wiring::from_table(b"EJMZALYXVBWFCRQUONTSPIKHGD"),
    },
    ReflectorSpec {
        name: "B",
        wiring: Wiring::from_table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    },
    ReflectorSpec {
        name: "C",
        wiring: Wiring::from_table(b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    },
];

impl RotorSpec {
    /// Find a rotor type by name, ignoring ASCII case.
    ///
    /// # Errors
    /// `ComponentError::UnknownRotor` if no rotor has that name.
    pub fn lookup(name: &str) -> Result<&'static RotorSpec> {
        ROTORS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ComponentError::UnknownRotor(name.to_string()).into())
    }
}

impl ReflectorSpec {
    /// Find a reflector type by name, ignoring ASCII case.
    ///
    /// # Errors
    /// `ComponentError::UnknownReflector` if no reflector has that name.
    pub fn lookup(name: &str) -> Result<&'static ReflectorSpec> {
        REFLECTORS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ComponentError::UnknownReflector(name.to_string()).into())
    }
}
