//! Configuration for the enigma-sim application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! Every setting not given on the command line is drawn from a seeded RNG,
//! and the seed is printed so runs are reproducible.

use crate::key_gen;
use clap::Parser;
use enigma_sim_core::plugboard::DEFAULT_MAX_LEADS;
use enigma_sim_core::{KeySheet, NonLetterPolicy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Default length of a generated sample message.
pub const DEFAULT_SAMPLE_LEN: usize = 64;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "enigma-sim")]
#[command(version, about = "Rotor cipher machine simulator", long_about = None)]
pub struct Args {
    /// Reflector: A, B or C (default: random)
    #[arg(long)]
    pub reflector: Option<String>,

    /// Rotors left to right, e.g. I,II,III (default: 3 random from I-V)
    #[arg(long, value_delimiter = ',')]
    pub rotors: Option<Vec<String>>,

    /// Plug leads, e.g. HL,MO,QV (default: 10 random leads)
    #[arg(long, value_delimiter = ',', conflicts_with = "no_plugs")]
    pub plugs: Option<Vec<String>>,

    /// Leave the plugboard empty
    #[arg(long)]
    pub no_plugs: bool,

    /// Start window letters left to right, e.g. ABC (default: random)
    #[arg(long)]
    pub positions: Option<String>,

    /// Ring settings 1-26 left to right, e.g. 1,1,1 (default: random)
    #[arg(long, value_delimiter = ',')]
    pub rings: Option<Vec<u8>>,

    /// Plugboard capacity (at most 13)
    #[arg(long, default_value_t = DEFAULT_MAX_LEADS)]
    pub max_leads: usize,

    /// Non-letters in the message: reject, strip or pass
    #[arg(long, default_value = "reject")]
    pub non_letters: NonLetterPolicy,

    /// Message text to encode
    #[arg(long, conflicts_with = "input_file")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(long = "in")]
    pub input_file: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(long = "out")]
    pub output_file: Option<PathBuf>,

    /// Write the machine counters as key=value lines to a file
    #[arg(long)]
    pub stats_out: Option<PathBuf>,

    /// Random seed for determinism
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of the generated sample message
    #[arg(long, default_value_t = DEFAULT_SAMPLE_LEN)]
    pub sample_len: usize,

    /// Print resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Don't print the machine summary
    #[arg(long)]
    pub no_stats: bool,

    /// Skip decoding the result to check it round-trips
    #[arg(long)]
    pub no_verify: bool,

    /// Log filter for stderr, e.g. warn, debug, enigma_sim_core=trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Where the plaintext comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Text(String),
    File(PathBuf),
    /// Generated from the run's seed
    Sample { len: usize },
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Machine ===
    /// Resolved key sheet (explicit values plus random fill-ins)
    pub key_sheet: KeySheet,

    /// Plugboard capacity
    pub max_leads: usize,

    /// Non-letter handling
    pub non_letters: NonLetterPolicy,

    // === Message ===
    pub message: MessageSource,

    /// Output file path (None = stdout)
    pub output_file: Option<PathBuf>,

    /// Counter export path (None = no export)
    pub stats_file: Option<PathBuf>,

    /// Seed used for every random default
    pub seed: u64,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the machine summary
    pub print_stats: bool,

    /// Whether to decode the result and compare
    pub verify: bool,

    /// Tracing filter directive
    pub log_level: String,
}

impl Config {
    /// Resolve parsed arguments into a full configuration.
    ///
    /// If no seed is given, uses a time-based one. Random draws happen in a
    /// fixed order whether or not a value is overridden, so overriding one
    /// setting never changes the random choice of another.
    pub fn from_args(args: Args) -> Self {
        let seed = args.seed.unwrap_or_else(time_seed);

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let random_reflector = key_gen::random_reflector(&mut rng);
        let random_rotors = key_gen::random_rotors(&mut rng, key_gen::RANDOM_STACK_SIZE);
        let rotors = args.rotors.unwrap_or(random_rotors);

        let random_plugs =
            key_gen::random_plugs(&mut rng, key_gen::RANDOM_LEAD_COUNT.min(args.max_leads));
        let random_positions = key_gen::random_positions(&mut rng, rotors.len());
        let random_rings = key_gen::random_rings(&mut rng, rotors.len());

        let plugs = if args.no_plugs {
            Vec::new()
        } else {
            args.plugs.unwrap_or(random_plugs)
        };

        let key_sheet = KeySheet {
            reflector: args.reflector.unwrap_or(random_reflector),
            rotors,
            plugs,
            positions: args.positions.unwrap_or(random_positions),
            rings: args.rings.unwrap_or(random_rings),
        };

        let message = match (args.message, args.input_file) {
            (Some(text), _) => MessageSource::Text(text),
            (None, Some(path)) => MessageSource::File(path),
            (None, None) => MessageSource::Sample {
                len: args.sample_len,
            },
        };

        Config {
            key_sheet,
            max_leads: args.max_leads,
            non_letters: args.non_letters,
            message,
            output_file: args.output_file,
            stats_file: args.stats_out,
            seed,
            print_config: args.print_config,
            print_stats: !args.no_stats,
            verify: !args.no_verify,
            log_level: args.log_level,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        match &self.message {
            MessageSource::Text(text) => println!("Message: {} chars (inline)", text.chars().count()),
            MessageSource::File(path) => println!("Message: {}", path.display()),
            MessageSource::Sample { len } => println!("Message: generated sample ({} letters)", len),
        }
        match &self.output_file {
            Some(path) => println!("Output: {}", path.display()),
            None => println!("Output: stdout"),
        }
        if let Some(path) = &self.stats_file {
            println!("Stats export: {}", path.display());
        }
        println!("Non-letters: {:?}", self.non_letters);
        println!();
        println!("=== Key Sheet ===");
        println!("{}", self.key_sheet);
        println!("Plugboard capacity: {}", self.max_leads);
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
