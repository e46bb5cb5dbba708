use std::collections::BTreeMap;

/// One fixture row: which resources to feed the demo and what it should print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub language: String,
    pub keyword: String,
    pub context: String,
    pub audio_file_name: String,
    pub intent: Option<String>,
    pub slots: Option<BTreeMap<String, String>>,
}

impl TestCase {
    /// Stable display name, e.g. `en_picovoice_coffee_maker_picovoice-coffee`.
    pub fn name(&self) -> String {
        let stem = self
            .audio_file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.audio_file_name);
        format!(
            "{}_{}_{}_{}",
            self.language, self.keyword, self.context, stem
        )
    }

    /// Every fixture row expects the demo to understand the command.
    pub fn expectation(&self) -> Expectation {
        Expectation {
            understood: true,
            intent: self.intent.clone(),
            slots: self.slots.clone(),
        }
    }
}

/// What a run must print for the case to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectation {
    pub understood: bool,
    pub intent: Option<String>,
    pub slots: Option<BTreeMap<String, String>>,
}

/// Wake-word (`-t`) and intent (`-s`) sensitivities passed to the demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensitivities {
    pub porcupine: f32,
    pub rhino: f32,
}

impl Default for Sensitivities {
    fn default() -> Self {
        Self {
            porcupine: 0.5,
            rhino: 0.5,
        }
    }
}

/// Captured outcome of one demo execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
