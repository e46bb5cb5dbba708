use crate::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Scripted result a mock demo prints in place of a real inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockInference {
    #[serde(default = "yes")]
    pub wake_word: bool,
    #[serde(default)]
    pub is_understood: bool,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
    /// Forces a non-zero exit after printing.
    #[serde(default)]
    pub exit_code: Option<i32>,
    /// Extra text written to stderr.
    #[serde(default)]
    pub stderr: Option<String>,
}

fn yes() -> bool {
    true
}

impl Default for MockInference {
    fn default() -> Self {
        Self {
            wake_word: true,
            is_understood: false,
            intent: None,
            slots: BTreeMap::new(),
            exit_code: None,
            stderr: None,
        }
    }
}

impl MockInference {
    pub fn understood(intent: impl Into<String>) -> Self {
        Self {
            is_understood: true,
            intent: Some(intent.into()),
            ..Self::default()
        }
    }

    pub fn with_slot(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Text in the demo's stdout format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.wake_word {
            out.push_str("[wake word]\n");
        }
        out.push_str("{\n");
        let _ = writeln!(out, "  is_understood : '{}',", self.is_understood);
        if self.is_understood {
            if let Some(intent) = &self.intent {
                let _ = writeln!(out, "  intent : '{intent}',");
            }
            if !self.slots.is_empty() {
                out.push_str("  slots : {\n");
                for (k, v) in &self.slots {
                    let _ = writeln!(out, "    '{k}' : '{v}',");
                }
                out.push_str("  }\n");
            }
        }
        out.push_str("}\n");
        out
    }
}
