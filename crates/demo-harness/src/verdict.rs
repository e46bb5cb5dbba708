//! Substring checks against the demo's printed inference.
//!
//! Matching is plain containment on stdout, so it is tied to the exact text
//! the demo prints (`intent : 'orderDrink'`, `'size' : 'large'`, ...).

use crate::{Expectation, ProcessResult};
use core::fmt;

pub const WAKE_WORD_MARKER: &str = "[wake word]";

/// The check that rejected a run, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    ExitCode(Option<i32>),
    StderrNotEmpty,
    WakeWordMissing,
    UnderstoodMismatch { expected: String },
    IntentMissing { expected: String },
    SlotMissing { expected: String },
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::ExitCode(Some(code)) => write!(f, "demo exited with status {code}"),
            Check::ExitCode(None) => f.write_str("demo terminated by signal"),
            Check::StderrNotEmpty => f.write_str("demo wrote to stderr"),
            Check::WakeWordMissing => write!(f, "stdout lacks `{WAKE_WORD_MARKER}`"),
            Check::UnderstoodMismatch { expected }
            | Check::IntentMissing { expected }
            | Check::SlotMissing { expected } => write!(f, "stdout lacks `{expected}`"),
        }
    }
}

/// A rejected run together with what the demo printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub check: Check,
    pub stdout: String,
    pub stderr: String,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.check)?;
        writeln!(f, "--- stdout ---")?;
        writeln!(f, "{}", self.stdout.trim_end())?;
        if !self.stderr.is_empty() {
            writeln!(f, "--- stderr ---")?;
            writeln!(f, "{}", self.stderr.trim_end())?;
        }
        Ok(())
    }
}

pub fn understood_marker(understood: bool) -> String {
    format!("is_understood : '{understood}'")
}

pub fn intent_marker(intent: &str) -> String {
    format!("intent : '{intent}'")
}

pub fn slot_marker(key: &str, value: &str) -> String {
    format!("'{key}' : '{value}'")
}

pub fn assert_outcome(
    result: &ProcessResult,
    expected: &Expectation,
) -> Result<(), AssertionFailure> {
    let fail = |check: Check| AssertionFailure {
        check,
        stdout: result.stdout.clone(),
        stderr: result.stderr.clone(),
    };

    if !result.success() {
        return Err(fail(Check::ExitCode(result.exit_code)));
    }
    if !result.stderr.is_empty() {
        return Err(fail(Check::StderrNotEmpty));
    }
    let out = result.stdout.as_str();
    if !out.contains(WAKE_WORD_MARKER) {
        return Err(fail(Check::WakeWordMissing));
    }
    let understood = understood_marker(expected.understood);
    if !out.contains(&understood) {
        return Err(fail(Check::UnderstoodMismatch {
            expected: understood,
        }));
    }
    if let Some(intent) = &expected.intent {
        let marker = intent_marker(intent);
        if !out.contains(&marker) {
            return Err(fail(Check::IntentMissing { expected: marker }));
        }
    }
    if let Some(slots) = &expected.slots {
        for (key, value) in slots {
            let marker = slot_marker(key, value);
            if !out.contains(&marker) {
                return Err(fail(Check::SlotMissing { expected: marker }));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const COFFEE: &str = "[wake word]\n{\n  is_understood : 'true',\n  intent : 'orderDrink',\n  slots : {\n    'size' : 'large',\n    'beverage' : 'coffee',\n  }\n}\n";

    fn ok(stdout: &str) -> ProcessResult {
        ProcessResult {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn coffee_expectation() -> Expectation {
        let mut slots = BTreeMap::new();
        slots.insert("size".to_string(), "large".to_string());
        Expectation {
            understood: true,
            intent: Some("orderDrink".into()),
            slots: Some(slots),
        }
    }

    #[test]
    fn accepts_matching_output() {
        assert_eq!(assert_outcome(&ok(COFFEE), &coffee_expectation()), Ok(()));
    }

    #[test]
    fn nonzero_exit_fails_regardless_of_stdout() {
        let mut r = ok(COFFEE);
        r.exit_code = Some(1);
        let err = assert_outcome(&r, &coffee_expectation()).unwrap_err();
        assert_eq!(err.check, Check::ExitCode(Some(1)));

        r.exit_code = None;
        let err = assert_outcome(&r, &coffee_expectation()).unwrap_err();
        assert_eq!(err.check, Check::ExitCode(None));
    }

    #[test]
    fn any_stderr_fails() {
        let mut r = ok(COFFEE);
        r.stderr = " ".into();
        let err = assert_outcome(&r, &coffee_expectation()).unwrap_err();
        assert_eq!(err.check, Check::StderrNotEmpty);
    }

    #[test]
    fn missing_wake_word_fails() {
        let stdout = COFFEE.replace("[wake word]\n", "");
        let err = assert_outcome(&ok(&stdout), &coffee_expectation()).unwrap_err();
        assert_eq!(err.check, Check::WakeWordMissing);
        // without any other expectation as well
        let err = assert_outcome(&ok("is_understood : 'false'"), &Expectation::default())
            .unwrap_err();
        assert_eq!(err.check, Check::WakeWordMissing);
    }

    #[test]
    fn understood_flag_is_exact() {
        let not_understood = "[wake word]\n{\n  is_understood : 'false',\n}\n";
        let err = assert_outcome(&ok(not_understood), &coffee_expectation()).unwrap_err();
        assert_eq!(
            err.check,
            Check::UnderstoodMismatch {
                expected: "is_understood : 'true'".into()
            }
        );
        assert_eq!(assert_outcome(&ok(not_understood), &Expectation::default()), Ok(()));

        let shouty = "[wake word]\nis_understood : 'TRUE'\n";
        assert!(assert_outcome(&ok(shouty), &coffee_expectation()).is_err());
        let partial = "[wake word]\nis_understood : 'tru'\n";
        assert!(assert_outcome(&ok(partial), &coffee_expectation()).is_err());
    }

    #[test]
    fn wrong_intent_fails() {
        let mut exp = coffee_expectation();
        exp.intent = Some("orderPizza".into());
        let err = assert_outcome(&ok(COFFEE), &exp).unwrap_err();
        assert_eq!(
            err.check,
            Check::IntentMissing {
                expected: "intent : 'orderPizza'".into()
            }
        );
    }

    #[test]
    fn slot_order_does_not_matter() {
        let mut a = BTreeMap::new();
        a.insert("size".to_string(), "large".to_string());
        a.insert("beverage".to_string(), "coffee".to_string());
        let reordered = "[wake word]\nis_understood : 'true'\n'beverage' : 'coffee'\n'size' : 'large'\n";
        let exp = Expectation {
            understood: true,
            intent: None,
            slots: Some(a),
        };
        assert_eq!(assert_outcome(&ok(COFFEE), &exp), Ok(()));
        assert_eq!(assert_outcome(&ok(reordered), &exp), Ok(()));
    }

    #[test]
    fn missing_slot_reported_with_stdout() {
        let mut exp = coffee_expectation();
        if let Some(slots) = exp.slots.as_mut() {
            slots.insert("sugarAmount".into(), "some sugar".into());
        }
        let err = assert_outcome(&ok(COFFEE), &exp).unwrap_err();
        assert_eq!(
            err.check,
            Check::SlotMissing {
                expected: "'sugarAmount' : 'some sugar'".into()
            }
        );
        assert_eq!(err.stdout, COFFEE);
        let text = err.to_string();
        assert!(text.contains("stdout lacks `'sugarAmount' : 'some sugar'`"));
        assert!(text.contains("intent : 'orderDrink'"));
    }
}
