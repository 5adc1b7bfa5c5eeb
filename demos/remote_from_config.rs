//! Remote From Config
//!
//! This example builds a remote from a JSON description of the home,
//! then shows that invalid descriptions report every problem at once.
//!
//! Key concepts:
//! - Declarative device wiring
//! - Accumulated validation errors
//! - Undo history inspection
//!
//! Run with: cargo run --example remote_from_config

use switchboard::config::{ConfigError, HomeConfig};

const HOME: &str = r#"{
    "light": { "kind": "lamp", "location": "Study" },
    "fan": { "kind": "ceiling_fan", "location": "Porch" }
}"#;

const BROKEN: &str = r#"{
    "light": { "kind": "ceiling_fan", "location": "" },
    "fan": { "kind": "ceiling_fan", "location": "Porch" }
}"#;

fn main() -> Result<(), ConfigError> {
    println!("=== Remote From Config ===\n");

    let mut remote = HomeConfig::from_json(HOME)?.into_remote()?;

    println!("{}", remote.light_on());
    println!("{}", remote.fan_on());
    println!("{}", remote.fan_off());

    println!("\nHistory (oldest first):");
    for entry in remote.history().entries() {
        println!("  {} at {}", entry.slot, entry.executed_at.format("%H:%M:%S%.3f"));
    }

    println!();
    loop {
        let outcome = remote.undo();
        println!("{outcome}");
        if !outcome.is_undone() {
            break;
        }
    }
    println!("History drained: {} entries left", remote.history().len());

    println!("\nLoading a broken config:");
    match HomeConfig::from_json(BROKEN)?.into_remote() {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
