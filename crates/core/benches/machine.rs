//! Benchmarks for machine operations.
//!
//! Measures key-sheet assembly, single-letter encoding and message
//! throughput across rotor stack sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_sim_core::{KeySheet, Machine};
use std::hint::black_box;

/// Message used consistently across throughput benchmarks.
const BENCH_MESSAGE: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

fn bench_sheet(rotors: &[&str]) -> KeySheet {
    KeySheet {
        reflector: "B".to_string(),
        rotors: rotors.iter().map(|s| s.to_string()).collect(),
        plugs: ["HL", "MO", "QV", "AZ", "BX", "CW", "DU", "EY", "FT", "GS"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        positions: "QEVZ"[..rotors.len().min(4)].to_string(),
        rings: vec![1; rotors.len()],
    }
}

/// Benchmarks `KeySheet::build()`: registry lookups, validation and
/// plugboard assembly.
fn bench_build(c: &mut Criterion) {
    let sheet = bench_sheet(&["I", "II", "III"]);
    c.bench_function("key_sheet_build", |b| {
        b.iter(|| black_box(&sheet).build().unwrap());
    });
}

/// Benchmarks `encode_letter()` with stepping. State advances naturally
/// between iterations, like an operator typing.
fn bench_encode_letter(c: &mut Criterion) {
    let mut machine = bench_sheet(&["I", "II", "III"]).build().unwrap();
    c.bench_function("encode_letter", |b| {
        b.iter(|| machine.encode_letter(black_box('A')).unwrap());
    });
}

/// Benchmarks `encode_message()` throughput for 1..=4 rotors.
fn bench_encode_message(c: &mut Criterion) {
    let stacks: [&[&str]; 4] = [
        &["I"],
        &["I", "II"],
        &["I", "II", "III"],
        &["Beta", "I", "II", "III"],
    ];

    let mut group = c.benchmark_group("encode_message");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for rotors in stacks {
        let mut machine: Machine = bench_sheet(rotors).build().unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(rotors.len()),
            &BENCH_MESSAGE,
            |b, message| {
                b.iter(|| machine.encode_message(black_box(message)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_encode_letter, bench_encode_message);
criterion_main!(benches);
