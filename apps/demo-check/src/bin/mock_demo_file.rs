//! Stand-in for `picovoice_demo_file` used by the harness tests.
//!
//! Accepts the same flags, fails like the real demo when an input file is
//! missing, and treats the `-w` file as a JSON `MockInference` to print.

use clap::Parser;
use demo_harness::MockInference;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mock-demo-file", about = "Mock demo file binary")]
struct Args {
    #[arg(short = 'a')]
    access_key: String,
    #[arg(short = 'l')]
    library_path: PathBuf,
    #[arg(short = 'p')]
    porcupine_model_path: PathBuf,
    #[arg(short = 'r')]
    rhino_model_path: PathBuf,
    #[arg(short = 'k')]
    keyword_path: PathBuf,
    #[arg(short = 'c')]
    context_path: PathBuf,
    #[arg(short = 't', default_value_t = 0.5)]
    porcupine_sensitivity: f32,
    #[arg(short = 's', default_value_t = 0.5)]
    rhino_sensitivity: f32,
    #[arg(short = 'w')]
    wav_path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.access_key.is_empty() {
        eprintln!("access key is empty");
        return ExitCode::from(1);
    }
    for (what, s) in [
        ("porcupine", args.porcupine_sensitivity),
        ("rhino", args.rhino_sensitivity),
    ] {
        if !(0.0..=1.0).contains(&s) {
            eprintln!("{what} sensitivity {s} is out of range [0, 1]");
            return ExitCode::from(1);
        }
    }
    for path in [
        &args.library_path,
        &args.porcupine_model_path,
        &args.rhino_model_path,
        &args.keyword_path,
        &args.context_path,
        &args.wav_path,
    ] {
        if !path.is_file() {
            eprintln!("failed to open '{}'", path.display());
            return ExitCode::from(1);
        }
    }

    let inference = match MockInference::load(&args.wav_path) {
        Ok(inf) => inf,
        Err(e) => {
            eprintln!("failed to decode '{}': {e}", args.wav_path.display());
            return ExitCode::from(1);
        }
    };
    print!("{}", inference.render());
    if let Some(text) = &inference.stderr {
        eprint!("{text}");
    }
    match inference.exit_code {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::SUCCESS,
    }
}
