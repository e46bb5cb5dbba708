use crate::{HarnessError, Result, TestCase};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TestData {
    tests: Tests,
}

#[derive(Debug, Deserialize)]
struct Tests {
    parameters: Vec<Parameter>,
}

#[derive(Debug, Deserialize)]
struct Parameter {
    language: String,
    wakeword: String,
    context_name: String,
    audio_file: String,
    #[serde(default)]
    inference: Option<Inference>,
}

#[derive(Debug, Deserialize)]
struct Inference {
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    slots: Option<BTreeMap<String, String>>,
}

impl From<Parameter> for TestCase {
    fn from(p: Parameter) -> Self {
        let (intent, slots) = match p.inference {
            Some(inf) => (inf.intent, inf.slots),
            None => (None, None),
        };
        TestCase {
            language: p.language,
            keyword: p.wakeword,
            context: p.context_name,
            audio_file_name: p.audio_file,
            intent,
            slots,
        }
    }
}

pub fn parse_test_data(raw: &str) -> Result<Vec<TestCase>> {
    let data: TestData = serde_json::from_str(raw)?;
    Ok(data.tests.parameters.into_iter().map(TestCase::from).collect())
}

/// Reads the suite's fixture file once, before any case runs.
pub fn load_test_data(path: impl AsRef<Path>) -> Result<Vec<TestCase>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_test_data(&raw)?;
    tracing::info!(path = %path.display(), cases = cases.len(), "loaded test data");
    Ok(cases)
}
