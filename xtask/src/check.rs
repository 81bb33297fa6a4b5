use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{cargo, OnFailure};

/// Crates that must build without `std`.
const NO_STD_CRATES: [&str; 3] = ["lcd-surface", "display", "ui"];

/// Embedded target the no_std crates are checked against.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

pub fn run(host_only: bool) -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    if !host_only {
        for krate in NO_STD_CRATES {
            cargo(
                &format!("Checking {krate} for {EMBEDDED_TARGET}"),
                &["check", "-p", krate, "--target", EMBEDDED_TARGET, "--no-default-features"],
                OnFailure::Abort,
            )?;
        }
        cargo(
            "Checking display with defmt",
            &["check", "-p", "display", "--target", EMBEDDED_TARGET, "--features", "defmt"],
            OnFailure::Abort,
        )?;
    }

    cargo(
        "Checking display with tracing, serde and std",
        &["check", "-p", "display", "--features", "tracing,serde,std"],
        OnFailure::Abort,
    )?;
    cargo(
        "Running clippy lints",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;
    if cargo("Checking code formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    println!(
        "{}",
        format!("✓ All checks completed in {:.2}s", total_start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();

    Ok(())
}
