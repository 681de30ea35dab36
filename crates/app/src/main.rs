//! enigma-sim: command-line rotor cipher machine.
//!
//! Resolves a key sheet (explicit flags plus seeded random defaults),
//! encodes one message, checks it decodes back, and prints a summary.

mod config;
mod key_gen;
mod session;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::{Args, Config, MessageSource};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse());
    init_tracing(&config.log_level)?;

    if config.print_config {
        config.print();
    }

    let plaintext = load_message(&config)?;
    debug!(chars = plaintext.chars().count(), seed = config.seed, "message loaded");

    let report = session::run(&config, &plaintext).context("encoding failed")?;

    match &config.output_file {
        Some(path) => std::fs::write(path, &report.output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", report.output),
    }

    if let Some(path) = &config.stats_file {
        std::fs::write(path, report.stats.export_text())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if config.print_stats {
        report.stats.print_summary();
        match report.verified {
            Some(true) => println!("Verification: PASSED ✓"),
            Some(false) => println!("Verification: FAILED ✗ (decoded text differs)"),
            None => println!("Verification: skipped"),
        }
    }

    if report.verified == Some(false) {
        bail!("round trip did not reproduce the plaintext (seed {})", config.seed);
    }
    Ok(())
}

/// Log to stderr so stdout carries only the result and summary.
fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter {:?}", directive))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn load_message(config: &Config) -> Result<String> {
    Ok(match &config.message {
        MessageSource::Text(text) => text.clone(),
        MessageSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
            .trim_end_matches(['\r', '\n'])
            .to_string(),
        MessageSource::Sample { len } => key_gen::generate_sample_message(config.seed, *len),
    })
}
