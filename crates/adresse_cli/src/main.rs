//! CLI normalization probe.
//!
//! # Responsibility
//! - Read one raw geocoding result as JSON on stdin.
//! - Print the normalized address as pretty JSON on stdout.
//! - Keep output deterministic for quick local sanity checks.

use adresse_core::{build, RawResult};
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("adresse_cli: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let raw: RawResult = match serde_json::from_str(&input) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("adresse_cli: invalid result JSON: {err}");
            return ExitCode::FAILURE;
        }
    };

    let address = build(raw);
    match serde_json::to_string_pretty(&address) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("adresse_cli: failed to encode address: {err}");
            ExitCode::FAILURE
        }
    }
}
