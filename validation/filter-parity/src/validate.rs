//! Runs both parity checks against a live Octave session.
//!
//! Writes one JSON record per check to `../output/filter_parity/` and, unless
//! `CI` is set, the frequency responses as CSV for plotting. Any failed check
//! ends the process with an error.
//!
//! Variables:
//! - `CI`: skip the CSV export.
//! - `FILTER_PARITY_SEED`: seed for the smoothing noise.
//! - `OCTAVE`: Octave executable (default `octave-cli`).
//! - `RUST_LOG`: log filter (default `info`).

use filter_parity::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct ValidationRecord<R: Serialize> {
    name: String,
    notes: String,
    config: RunConfig,
    result: R,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RunConfig::from_vars(|key| std::env::var(key).ok());
    let program = std::env::var("OCTAVE").unwrap_or_else(|_| "octave-cli".to_string());
    let output_dir = Path::new("../output/filter_parity");
    fs::create_dir_all(output_dir)?;

    info!(?config, %program, "starting validation");

    run_fir_check(&config, &program, output_dir)?;
    run_smoothing_check(&config, &program, output_dir)?;

    info!("all checks passed");
    Ok(())
}

fn run_fir_check(config: &RunConfig, program: &str, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let options = SessionOptions::default().program(program);
    let check = FirDesignCheck::new(FilterSpec::new(7, 0.2)?);
    let report = check.run_scoped(|| OctaveOracle::open(&options), config)?;

    write_record(
        output_dir.join("fir1_order7_cutoff0.2.json"),
        "fir1_order7_cutoff0.2",
        "fir1(7, 0.2) against firwin(8, 0.2) over 512 bins",
        config,
        report.summary(),
    )?;

    if config.skip_plots {
        info!("skipping response export");
    } else {
        let path = output_dir.join("fir1_order7_cutoff0.2_response.csv");
        report.export_csv(fs::File::create(&path)?)?;
        info!(path = %path.display(), "response exported");
    }
    Ok(())
}

fn run_smoothing_check(
    config: &RunConfig,
    program: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let options = SessionOptions::default()
        .program(program)
        .oned_as(Orientation::Column);
    let check = SmoothingCheck::new(SmoothingSpec::new(5, 3)?);
    let report = check.run_scoped(|| OctaveOracle::open(&options), config)?;

    write_record(
        output_dir.join("sgolay_window5_order3.json"),
        "sgolay_window5_order3",
        "sgolayfilt(x, 3, 5) against savgol_filter(x, 5, 3) on a noisy step",
        config,
        report,
    )
}

fn write_record<R: Serialize>(
    path: impl AsRef<Path>,
    name: &str,
    notes: &str,
    config: &RunConfig,
    result: R,
) -> Result<(), Box<dyn Error>> {
    let record = ValidationRecord {
        name: name.to_string(),
        notes: notes.to_string(),
        config: config.clone(),
        result,
    };
    fs::write(path.as_ref(), serde_json::to_string_pretty(&record)?)?;
    info!(path = %path.as_ref().display(), "record written");
    Ok(())
}
