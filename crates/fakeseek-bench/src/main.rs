//! fakeseek-bench: CLI tool for running the variation pipeline natively.
//!
//! Runs the four-stage variation pipeline on a given image file,
//! printing per-stage timing and output sizes. Useful for:
//!
//! - Eyeballing stage outputs without a browser (written as JPEGs)
//! - Checking seed reproducibility of the extreme stage
//! - Measuring per-stage durations on real photos
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin fakeseek-bench -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use fakeseek_pipeline::stages::{STAGES, run_stage};
use fakeseek_pipeline::{PipelineConfig, decode, encode};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

/// Variation pipeline experimentation and diagnostics for fakeseek.
///
/// Decodes the image once, runs each stage with timing, and optionally
/// writes the four encoded outputs next to the input.
#[derive(Parser)]
#[command(name = "fakeseek-bench", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Noise seed for the extreme stage (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write the four stage JPEGs into.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Number of runs for averaging.
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Output diagnostics as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Full pipeline config as a JSON string.
    ///
    /// When provided, `--seed` is ignored. The JSON must be a valid
    /// `PipelineConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,
}

/// Timing and size record for one stage of one run.
#[derive(Debug, Clone, Serialize)]
struct StageDiagnostics {
    label: String,
    transform_ms: f64,
    encode_ms: f64,
    jpeg_bytes: usize,
}

/// Full diagnostics for one run.
#[derive(Debug, Clone, Serialize)]
struct RunDiagnostics {
    decode_ms: f64,
    width: u32,
    height: u32,
    stages: Vec<StageDiagnostics>,
    total_ms: f64,
}

/// Build a [`PipelineConfig`] from CLI arguments.
fn config_from_cli(cli: &Cli) -> Result<PipelineConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }
    Ok(PipelineConfig {
        noise_seed: cli.seed,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let image_bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Image: {} ({} bytes)",
        cli.image_path.display(),
        image_bytes.len(),
    );
    eprintln!("Config: {config:?}");
    eprintln!("Runs: {}", cli.runs);
    eprintln!();

    let mut all_runs = Vec::with_capacity(cli.runs);

    for run in 0..cli.runs {
        if cli.runs > 1 {
            eprintln!("--- Run {}/{} ---", run + 1, cli.runs);
        }

        let diagnostics = match run_once(&image_bytes, &config, run == 0, cli.out_dir.as_deref()) {
            Ok(d) => d,
            Err(msg) => {
                eprintln!("{msg}");
                return ExitCode::FAILURE;
            }
        };

        if cli.json {
            match serde_json::to_string_pretty(&diagnostics) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing diagnostics: {e}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            print_report(&diagnostics);
        }

        all_runs.push(diagnostics);

        if cli.runs > 1 {
            eprintln!();
        }
    }

    if cli.runs > 1 {
        print_multi_run_summary(&all_runs);
    }

    ExitCode::SUCCESS
}

/// Run the full pipeline once with per-stage timing, optionally
/// writing stage JPEGs into `out_dir`.
fn run_once(
    image_bytes: &[u8],
    config: &PipelineConfig,
    write_outputs: bool,
    out_dir: Option<&std::path::Path>,
) -> Result<RunDiagnostics, String> {
    let total_start = Instant::now();

    let decode_start = Instant::now();
    let original =
        decode::decode_rgba(image_bytes).map_err(|e| format!("Pipeline error: {e}"))?;
    let decode_ms = decode_start.elapsed().as_secs_f64() * 1000.0;

    let mut rng = config
        .noise_seed
        .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let mut stages = Vec::with_capacity(STAGES.len());
    for spec in &STAGES {
        let transform_start = Instant::now();
        let frame = run_stage(spec, &original, &mut rng);
        let transform_ms = transform_start.elapsed().as_secs_f64() * 1000.0;

        let encode_start = Instant::now();
        let jpeg = encode::encode_jpeg(&frame, spec.jpeg_quality)
            .map_err(|e| format!("Pipeline error: {e}"))?;
        let encode_ms = encode_start.elapsed().as_secs_f64() * 1000.0;

        if write_outputs && let Some(dir) = out_dir {
            let path = dir.join(format!("{}.jpg", spec.label.as_str()));
            match std::fs::write(&path, &jpeg) {
                Ok(()) => eprintln!("Wrote {} ({} bytes)", path.display(), jpeg.len()),
                Err(e) => eprintln!("Error writing {}: {e}", path.display()),
            }
        }

        stages.push(StageDiagnostics {
            label: spec.label.as_str().to_owned(),
            transform_ms,
            encode_ms,
            jpeg_bytes: jpeg.len(),
        });
    }

    Ok(RunDiagnostics {
        decode_ms,
        width: original.width(),
        height: original.height(),
        stages,
        total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Print a human-readable report for one run.
fn print_report(diagnostics: &RunDiagnostics) {
    println!(
        "Decoded {}x{} in {:.3}ms",
        diagnostics.width, diagnostics.height, diagnostics.decode_ms,
    );
    println!(
        "{:<10} {:>14} {:>12} {:>12}",
        "Stage", "Transform (ms)", "Encode (ms)", "JPEG bytes"
    );
    println!("{}", "-".repeat(52));
    for stage in &diagnostics.stages {
        println!(
            "{:<10} {:>14.3} {:>12.3} {:>12}",
            stage.label, stage.transform_ms, stage.encode_ms, stage.jpeg_bytes,
        );
    }
    println!("Total: {:.3}ms", diagnostics.total_ms);
}

/// Print aggregated statistics across multiple runs.
#[allow(clippy::cast_precision_loss)]
fn print_multi_run_summary(all_runs: &[RunDiagnostics]) {
    debug_assert!(!all_runs.is_empty(), "no runs to summarize");

    println!();
    println!("Summary ({} runs)\n{}", all_runs.len(), "=".repeat(52));

    let totals: Vec<f64> = all_runs.iter().map(|r| r.total_ms).collect();
    let min = totals.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = totals.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let mean = totals.iter().sum::<f64>() / totals.len() as f64;
    println!("Total duration: min={min:.3}ms  mean={mean:.3}ms  max={max:.3}ms");

    println!();
    println!("{:<10} {:>20}", "Stage", "Mean transform (ms)");
    println!("{}", "-".repeat(32));

    let stage_count = all_runs.first().map_or(0, |r| r.stages.len());
    for i in 0..stage_count {
        let durations: Vec<f64> = all_runs
            .iter()
            .filter_map(|r| r.stages.get(i).map(|s| s.transform_ms))
            .collect();
        if durations.is_empty() {
            continue;
        }
        let stage_mean = durations.iter().sum::<f64>() / durations.len() as f64;
        let label = all_runs[0].stages[i].label.as_str();
        println!("{label:<10} {stage_mean:>18.3}ms");
    }
}
