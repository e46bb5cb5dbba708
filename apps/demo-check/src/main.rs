//! demo-check: runs the prebuilt demo file binary over every fixture case
//!
//! Usage: `demo-check ${AccessKey} ${Platform} [${Arch}]`

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

use demo_harness::{load_test_data, run_suite, CaseOutcome, CaseReport, Platform, SuiteConfig};

const USAGE: &str = "usage: demo-check ${AccessKey} ${Platform} [${Arch}]";

#[derive(Parser, Debug)]
#[command(
    name = "demo-check",
    version,
    about = "Check the demo file binary against the fixture cases"
)]
struct Cli {
    /// Access key forwarded to the demo
    access_key: String,
    /// Target platform (linux, mac, windows, raspberry-pi, jetson, beaglebone)
    platform: String,
    /// Library architecture subdirectory
    arch: Option<String>,

    /// Repository checkout holding sdk/ and resources/
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Demo executable (default: <root>/demo/c/build/picovoice_demo_file)
    #[arg(long)]
    demo_binary: Option<PathBuf>,
    /// Fixture file (default: <root>/resources/.test/test_data.json)
    #[arg(long)]
    test_data: Option<PathBuf>,
    /// Write a JSON report of every case to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    setup_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            debug!("argument error: {e}");
            println!("{USAGE}");
            return Ok(ExitCode::from(1));
        }
    };

    let platform: Platform = cli
        .platform
        .parse()
        .with_context(|| format!("platform `{}`", cli.platform))?;
    let mut cfg = SuiteConfig::new(cli.access_key, &cli.root, platform, cli.arch);
    if let Some(demo) = cli.demo_binary {
        cfg = cfg.with_demo_binary(demo);
    }
    let data_path = cli
        .test_data
        .unwrap_or_else(|| SuiteConfig::default_test_data(&cli.root));
    let cases = load_test_data(&data_path).context("loading test data")?;

    info!(
        demo = %cfg.demo_binary.display(),
        platform = %cfg.platform(),
        cases = cases.len(),
        "running demo checks"
    );
    println!("running {} tests", cases.len());
    let report = run_suite(&cfg, &cases, print_case);

    for case in &report.cases {
        if let CaseOutcome::Failed(f) = &case.outcome {
            println!("\n---- {} ----\n{f}", case.name);
        }
    }
    let verdict = if report.all_passed() { "ok" } else { "FAILED" };
    println!(
        "\ntest result: {verdict}. {} passed; {} failed",
        report.passed(),
        report.failed()
    );

    if let Some(path) = cli.report {
        let file = File::create(&path)
            .with_context(|| format!("creating report: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("writing report: {}", path.display()))?;
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_case(r: &CaseReport) {
    match &r.outcome {
        CaseOutcome::Passed => println!("test {} ... ok", r.name),
        CaseOutcome::Failed(_) => println!("test {} ... FAILED", r.name),
        CaseOutcome::Errored(e) => println!("test {} ... FAILED ({e})", r.name),
    }
}

fn setup_tracing() {
    // Best-effort; logs go to stderr so stdout stays a clean report
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
