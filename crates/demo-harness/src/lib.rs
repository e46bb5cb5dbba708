//! demo-harness: black-box checks for the demo file binary
//!
//! The harness resolves the model, keyword, context and audio files for a
//! platform, launches the prebuilt demo with them, captures its output and
//! checks the inference markers it prints. The speech engine itself is never
//! linked; only its text output is inspected.

mod error;
pub use error::{HarnessError, Result};

mod types;
pub use types::{Expectation, ProcessResult, Sensitivities, TestCase};

mod platform;
pub use platform::Platform;

mod paths;
pub use paths::{append_language, ResourceLayout, ResourcePaths};

mod args;
pub use args::{build_args, InvocationArgs};

mod process;
pub use process::invoke;

mod verdict;
pub use verdict::{assert_outcome, AssertionFailure, Check};

mod fixtures;
pub use fixtures::{load_test_data, parse_test_data};

mod config;
pub use config::SuiteConfig;

mod suite;
pub use suite::{run_case, run_suite, CaseOutcome, CaseReport, SuiteReport};

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::MockInference;
