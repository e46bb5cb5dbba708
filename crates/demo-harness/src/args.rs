use crate::{ResourcePaths, Sensitivities};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program plus its argv for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl InvocationArgs {
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Value following `flag`, if present.
    pub fn value_of(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }
}

/// Flags in the order the demo's usage line lists them.
pub fn build_args(
    program: &Path,
    access_key: &str,
    paths: &ResourcePaths,
    sensitivities: Sensitivities,
) -> InvocationArgs {
    let mut args: Vec<OsString> = Vec::with_capacity(18);
    let mut push = |flag: &str, value: OsString| {
        args.push(flag.into());
        args.push(value);
    };
    push("-a", access_key.into());
    push("-l", paths.library.clone().into_os_string());
    push("-p", paths.porcupine_model.clone().into_os_string());
    push("-r", paths.rhino_model.clone().into_os_string());
    push("-k", paths.keyword.clone().into_os_string());
    push("-c", paths.context.clone().into_os_string());
    push("-t", sensitivities.porcupine.to_string().into());
    push("-s", sensitivities.rhino.to_string().into());
    push("-w", paths.audio.clone().into_os_string());
    InvocationArgs {
        program: program.to_path_buf(),
        args,
    }
}
