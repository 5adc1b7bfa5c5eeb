//! Remote control walkthrough.
//!
//! Switches a Living room Lamp and a Bedroom Ceiling Fan on and off, then
//! undoes every step and one more.

use switchboard::{HomeConfig, RemoteControl};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn run(remote: &mut RemoteControl) {
    println!("{}", remote.light_on());
    println!("{}", remote.light_off());
    println!("{}", remote.fan_on());
    println!("{}", remote.fan_off());

    for _ in 0..4 {
        println!("{}", remote.undo());
    }
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let mut remote = match HomeConfig::default().into_remote() {
        Ok(remote) => remote,
        Err(e) => {
            error!(error = %e, "Failed to build remote");
            return std::process::ExitCode::FAILURE;
        }
    };

    run(&mut remote);
    std::process::ExitCode::SUCCESS
}
