use crate::{
    build_args, InvocationArgs, Platform, ResourceLayout, Sensitivities, TestCase,
};
use std::path::{Path, PathBuf};

/// Suite-wide settings, built once at startup and shared by reference with
/// every case.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub access_key: String,
    pub layout: ResourceLayout,
    pub demo_binary: PathBuf,
    pub sensitivities: Sensitivities,
}

impl SuiteConfig {
    pub fn new(
        access_key: impl Into<String>,
        root: impl Into<PathBuf>,
        platform: Platform,
        arch: Option<String>,
    ) -> Self {
        let root = root.into();
        let demo_binary = Self::default_demo_binary(&root);
        Self {
            access_key: access_key.into(),
            layout: ResourceLayout::new(root, platform, arch),
            demo_binary,
            sensitivities: Sensitivities::default(),
        }
    }

    pub fn with_demo_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.demo_binary = path.into();
        self
    }

    /// `demo/c/build/picovoice_demo_file` under the checkout.
    pub fn default_demo_binary(root: &Path) -> PathBuf {
        root.join("demo")
            .join("c")
            .join("build")
            .join(format!("picovoice_demo_file{}", std::env::consts::EXE_SUFFIX))
    }

    /// `resources/.test/test_data.json` under the checkout.
    pub fn default_test_data(root: &Path) -> PathBuf {
        root.join("resources").join(".test").join("test_data.json")
    }

    pub fn platform(&self) -> Platform {
        self.layout.platform
    }

    pub fn invocation(&self, case: &TestCase) -> InvocationArgs {
        let paths = self.layout.resolve_case(case);
        build_args(&self.demo_binary, &self.access_key, &paths, self.sensitivities)
    }
}
