use crate::{Platform, TestCase};
use std::path::PathBuf;

/// Appends `_<language>` unless the language is the default `en`.
pub fn append_language(base: &str, language: &str) -> String {
    if language == "en" {
        base.to_string()
    } else {
        format!("{base}_{language}")
    }
}

/// Repository checkout the resources are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    pub root: PathBuf,
    pub platform: Platform,
    pub arch: Option<String>,
}

/// Every file the demo is pointed at for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub library: PathBuf,
    pub porcupine_model: PathBuf,
    pub rhino_model: PathBuf,
    pub keyword: PathBuf,
    pub context: PathBuf,
    pub audio: PathBuf,
}

impl ResourceLayout {
    pub fn new(root: impl Into<PathBuf>, platform: Platform, arch: Option<String>) -> Self {
        Self {
            root: root.into(),
            platform,
            arch: arch.filter(|a| !a.is_empty()),
        }
    }

    /// `sdk/c/lib/<platform>[/<arch>]/libpicovoice.<ext>`
    pub fn library_path(&self) -> PathBuf {
        let mut p = self.root.join("sdk").join("c").join("lib").join(self.platform.as_str());
        if let Some(arch) = &self.arch {
            p.push(arch);
        }
        p.join(format!("libpicovoice.{}", self.platform.lib_ext()))
    }

    pub fn porcupine_model_path(&self, language: &str) -> PathBuf {
        self.engine_model_path("porcupine", "porcupine_params", language)
    }

    pub fn rhino_model_path(&self, language: &str) -> PathBuf {
        self.engine_model_path("rhino", "rhino_params", language)
    }

    pub fn keyword_path(&self, language: &str, keyword: &str) -> PathBuf {
        self.platform_resource("porcupine", "keyword_files", language, keyword, "ppn")
    }

    pub fn context_path(&self, language: &str, context: &str) -> PathBuf {
        self.platform_resource("rhino", "contexts", language, context, "rhn")
    }

    pub fn audio_path(&self, audio_file_name: &str) -> PathBuf {
        self.root
            .join("resources")
            .join("audio_samples")
            .join(audio_file_name)
    }

    /// Builds every path for one combination. Nothing is checked on disk
    /// here; a missing file is reported by the demo itself.
    pub fn resolve(
        &self,
        language: &str,
        keyword: &str,
        context: &str,
        audio_file_name: &str,
    ) -> ResourcePaths {
        let paths = ResourcePaths {
            library: self.library_path(),
            porcupine_model: self.porcupine_model_path(language),
            rhino_model: self.rhino_model_path(language),
            keyword: self.keyword_path(language, keyword),
            context: self.context_path(language, context),
            audio: self.audio_path(audio_file_name),
        };
        tracing::debug!(?paths, language, keyword, context, "resolved resources");
        paths
    }

    pub fn resolve_case(&self, case: &TestCase) -> ResourcePaths {
        self.resolve(
            &case.language,
            &case.keyword,
            &case.context,
            &case.audio_file_name,
        )
    }

    fn engine_model_path(&self, engine: &str, stem: &str, language: &str) -> PathBuf {
        self.root
            .join("resources")
            .join(engine)
            .join("lib")
            .join("common")
            .join(format!("{}.pv", append_language(stem, language)))
    }

    fn platform_resource(
        &self,
        engine: &str,
        dir: &str,
        language: &str,
        name: &str,
        ext: &str,
    ) -> PathBuf {
        let platform = self.platform.as_str();
        self.root
            .join("resources")
            .join(engine)
            .join("resources")
            .join(append_language(dir, language))
            .join(platform)
            .join(format!("{name}_{platform}.{ext}"))
    }
}
