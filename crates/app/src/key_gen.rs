//! Random key sheets and sample messages.
//!
//! When a setting is not given on the command line it is drawn from a
//! seeded RNG, so any run can be repeated exactly with `--seed`.
//!
//! # Design
//!
//! Each part of the key sheet has its own draw function taking the RNG, so
//! the config layer can fill in only the missing parts (for example random
//! positions for an explicitly chosen four-rotor stack).

use enigma_sim_core::registry::{REFLECTORS, ROTORS};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rotors drawn for a random stack: the five notched wheels.
const STANDARD_ROTORS: usize = 5;

/// Rotors in a random stack.
pub const RANDOM_STACK_SIZE: usize = 3;

/// Leads on a random plugboard.
pub const RANDOM_LEAD_COUNT: usize = 10;

/// Words the sample message is built from.
const WORDS: &[&str] = &[
    "WEATHER", "REPORT", "NORTH", "SEA", "CONVOY", "SIGHTED", "COURSE", "SPEED", "KNOTS",
    "WIND", "VISIBILITY", "GOOD", "POOR", "ENEMY", "DESTROYER", "STOP", "ATTACK", "DAWN",
    "HOLD", "POSITION", "REQUEST", "FUEL", "GRID", "SQUARE", "NOTHING", "TO", "ENDS",
];

pub fn random_reflector(rng: &mut ChaCha8Rng) -> String {
    REFLECTORS
        .choose(rng)
        .map_or("B", |spec| spec.name)
        .to_string()
}

/// `count` distinct rotors, left to right, drawn from I-V.
pub fn random_rotors(rng: &mut ChaCha8Rng, count: usize) -> Vec<String> {
    ROTORS[..STANDARD_ROTORS]
        .choose_multiple(rng, count)
        .map(|spec| spec.name.to_string())
        .collect()
}

/// `count` disjoint leads (at most 13).
pub fn random_plugs(rng: &mut ChaCha8Rng, count: usize) -> Vec<String> {
    let mut letters: Vec<char> = ('A'..='Z').collect();
    letters.shuffle(rng);
    letters
        .chunks(2)
        .take(count)
        .map(|pair| pair.iter().collect())
        .collect()
}

/// One random window letter per rotor.
pub fn random_positions(rng: &mut ChaCha8Rng, count: usize) -> String {
    (0..count)
        .map(|_| (b'A' + rng.gen_range(0..26u8)) as char)
        .collect()
}

/// One random ring setting in 1..=26 per rotor.
pub fn random_rings(rng: &mut ChaCha8Rng, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.gen_range(1..=26)).collect()
}

/// Generate a letters-only sample message of exactly `len` letters.
///
/// Words are run together the way operators sent traffic, so the default
/// non-letter policy accepts the result.
pub fn generate_sample_message(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut message = String::with_capacity(len + 16);

    while message.len() < len {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        message.push_str(word);
    }

    message.truncate(len);
    message
}
