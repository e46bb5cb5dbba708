use crate::{assert_outcome, invoke, AssertionFailure, SuiteConfig, TestCase};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::time::Instant;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// The demo ran but its exit status or output was wrong.
    Failed(AssertionFailure),
    /// The demo could not be launched at all.
    Errored(String),
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

impl Serialize for CaseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            CaseOutcome::Passed => {
                map.serialize_entry("verdict", "passed")?;
            }
            CaseOutcome::Failed(failure) => {
                map.serialize_entry("verdict", "failed")?;
                map.serialize_entry("check", &failure.check.to_string())?;
                map.serialize_entry("stdout", &failure.stdout)?;
                map.serialize_entry("stderr", &failure.stderr)?;
            }
            CaseOutcome::Errored(msg) => {
                map.serialize_entry("verdict", "error")?;
                map.serialize_entry("detail", msg)?;
            }
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    pub duration_ms: u64,
    pub outcome: CaseOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// resolve → build → invoke → assert, once, no retry.
pub fn run_case(cfg: &SuiteConfig, case: &TestCase) -> CaseReport {
    let name = case.name();
    let started_at = OffsetDateTime::now_utc();
    let start = Instant::now();

    let inv = cfg.invocation(case);
    let outcome = match invoke(&inv) {
        Ok(result) => match assert_outcome(&result, &case.expectation()) {
            Ok(()) => CaseOutcome::Passed,
            Err(failure) => CaseOutcome::Failed(failure),
        },
        Err(e) => CaseOutcome::Errored(e.to_string()),
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    match &outcome {
        CaseOutcome::Passed => tracing::info!(case = %name, duration_ms, "passed"),
        CaseOutcome::Failed(f) => tracing::warn!(case = %name, check = %f.check, "failed"),
        CaseOutcome::Errored(e) => tracing::warn!(case = %name, error = %e, "errored"),
    }
    CaseReport {
        name,
        started_at,
        duration_ms,
        outcome,
    }
}

/// Runs every case in order. A failing case never stops the rest.
pub fn run_suite(
    cfg: &SuiteConfig,
    cases: &[TestCase],
    mut on_case: impl FnMut(&CaseReport),
) -> SuiteReport {
    let mut report = SuiteReport::default();
    for case in cases {
        let r = run_case(cfg, case);
        on_case(&r);
        report.cases.push(r);
    }
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        "suite finished"
    );
    report
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::{Check, Platform};

    fn case(intent: &str) -> TestCase {
        TestCase {
            language: "en".into(),
            keyword: "picovoice".into(),
            context: "coffee_maker".into(),
            audio_file_name: "picovoice-coffee.wav".into(),
            intent: Some(intent.into()),
            slots: None,
        }
    }

    fn cfg_with(demo: &str) -> SuiteConfig {
        SuiteConfig::new("key", "/repo", Platform::Linux, None).with_demo_binary(demo)
    }

    #[test]
    fn failures_do_not_halt_suite() {
        let cases = vec![case("orderDrink"), case("orderPizza"), case("orderDrink")];
        let mut seen = Vec::new();
        let report = run_suite(&cfg_with("/bin/false"), &cases, |r| seen.push(r.name.clone()));
        assert_eq!(seen.len(), 3);
        assert_eq!(report.cases.len(), 3);
        assert_eq!(report.passed(), 0);
        assert_eq!(report.failed(), 3);
        assert!(!report.all_passed());
    }

    #[test]
    fn exit_code_one_fails_case() {
        let r = run_case(&cfg_with("/bin/false"), &case("orderDrink"));
        match r.outcome {
            CaseOutcome::Failed(f) => assert_eq!(f.check, Check::ExitCode(Some(1))),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn silent_demo_lacks_wake_word() {
        let r = run_case(&cfg_with("/bin/true"), &case("orderDrink"));
        match r.outcome {
            CaseOutcome::Failed(f) => assert_eq!(f.check, Check::WakeWordMissing),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn unlaunchable_demo_is_error_outcome() {
        let r = run_case(&cfg_with("/nonexistent/demo"), &case("orderDrink"));
        assert!(matches!(r.outcome, CaseOutcome::Errored(_)));
    }

    #[test]
    fn report_serializes_verdicts() -> anyhow::Result<()> {
        let report = SuiteReport {
            cases: vec![
                CaseReport {
                    name: "a".into(),
                    started_at: OffsetDateTime::UNIX_EPOCH,
                    duration_ms: 5,
                    outcome: CaseOutcome::Passed,
                },
                CaseReport {
                    name: "b".into(),
                    started_at: OffsetDateTime::UNIX_EPOCH,
                    duration_ms: 7,
                    outcome: CaseOutcome::Errored("boom".into()),
                },
            ],
        };
        let v = serde_json::to_value(&report)?;
        assert_eq!(v["cases"][0]["outcome"]["verdict"], "passed");
        assert_eq!(v["cases"][0]["started_at"], "1970-01-01T00:00:00Z");
        assert_eq!(v["cases"][1]["outcome"]["verdict"], "error");
        assert_eq!(v["cases"][1]["outcome"]["detail"], "boom");
        Ok(())
    }
}
