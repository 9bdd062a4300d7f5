//! sleep_entropy: compute sleep-stage temporal entropy for one recording.
//!
//! Usage: `sleep_entropy <RECORDING.edf> <ANNOTATION.xml>`
//!
//! Diagnostics go to stderr (`RUST_LOG` overrides the default `info` level);
//! stdout carries only the result as a JSON object, e.g.
//!
//! ```text
//!   {
//!     "Wake_Time_Entropy": 2.81,
//!     "N1_Time_Entropy": null,
//!     …
//!     "NREM_Time_Entropy": 4.02
//!   }
//! ```
//!
//! An annotation without sleep stages prints `{}` and exits successfully.
//! A sleep-stage event with a negative start or a non-positive duration is
//! rejected and the run fails.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sleep_entropy::{sleep_temporal_entropy, EntropyConfig};

#[derive(Parser, Debug)]
#[command(name = "sleep_entropy", about = "Temporal entropy of sleep-stage durations")]
struct Args {
    /// Polysomnography recording (EDF / EDF+).
    recording: PathBuf,

    /// Stage-scoring annotation (XML with ScoredEvent elements).
    ///
    /// Sleep-stage events must have Start >= 0 and Duration > 0; any other
    /// value fails the run. Non-stage events are only checked for being numbers.
    annotation: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let report = sleep_temporal_entropy(&args.recording, &args.annotation, &EntropyConfig::default())
        .with_context(|| {
            format!(
                "sleep entropy for {} / {}",
                args.recording.display(),
                args.annotation.display()
            )
        })?;

    println!("{}", serde_json::to_string_pretty(&report.outcome)?);
    Ok(())
}
