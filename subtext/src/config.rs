use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Whisper model sizes, plus a user-provided ggml file.
#[derive(Debug, Clone)]
pub enum Model {
    Tiny,
    TinyEn,
    Base,
    BaseEn,
    Small,
    SmallEn,
    Medium,
    MediumEn,
    LargeV2,
    LargeV3,
    LargeV3Turbo,
    /// Path to a local .ggml/.bin model file.
    Custom(PathBuf),
}

impl Model {
    /// Parse a size identifier (e.g. a CLI argument).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tiny" => Some(Model::Tiny),
            "tiny.en" => Some(Model::TinyEn),
            "base" => Some(Model::Base),
            "base.en" => Some(Model::BaseEn),
            "small" => Some(Model::Small),
            "small.en" => Some(Model::SmallEn),
            "medium" => Some(Model::Medium),
            "medium.en" => Some(Model::MediumEn),
            "large-v2" => Some(Model::LargeV2),
            "large-v3" => Some(Model::LargeV3),
            "large-v3-turbo" => Some(Model::LargeV3Turbo),
            _ => None,
        }
    }

    /// Model filename as published in the ggml conversions on Hugging Face.
    pub fn filename(&self) -> String {
        match self {
            Model::Custom(path) => path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom-model".into()),
            _ => format!("ggml-{}.bin", self.name()),
        }
    }

    /// Human-readable size name.
    pub fn name(&self) -> &str {
        match self {
            Model::Tiny => "tiny",
            Model::TinyEn => "tiny.en",
            Model::Base => "base",
            Model::BaseEn => "base.en",
            Model::Small => "small",
            Model::SmallEn => "small.en",
            Model::Medium => "medium",
            Model::MediumEn => "medium.en",
            Model::LargeV2 => "large-v2",
            Model::LargeV3 => "large-v3",
            Model::LargeV3Turbo => "large-v3-turbo",
            Model::Custom(_) => "custom",
        }
    }
}

/// A language for transcription, validated against whisper.cpp's
/// supported-language table. Accepts short codes ("en", "de") and full
/// names ("english", "german").
#[derive(Debug, Clone, Default)]
pub enum Language {
    /// Auto-detect from audio.
    #[default]
    Auto,
    /// A validated short code (e.g. "en").
    Code(String),
}

impl Language {
    pub fn new(lang: &str) -> Result<Self, Error> {
        let lower = lang.to_lowercase();
        if lower == "auto" {
            return Ok(Language::Auto);
        }

        match whisper_rs::get_lang_id(&lower) {
            Some(id) => {
                // Normalize full names to the short code
                let code = whisper_rs::get_lang_str(id).unwrap_or(&lower).to_string();
                Ok(Language::Code(code))
            }
            None => Err(Error::UnsupportedLanguage(lang.to_string())),
        }
    }

    /// The short code, or None for auto-detection.
    pub fn code(&self) -> Option<&str> {
        match self {
            Language::Auto => None,
            Language::Code(code) => Some(code),
        }
    }

    /// All supported languages as (code, full_name) pairs.
    pub fn supported() -> Vec<(&'static str, &'static str)> {
        let max = whisper_rs::get_lang_max_id();
        (0..=max)
            .filter_map(|id| {
                let code = whisper_rs::get_lang_str(id)?;
                let name = whisper_rs::get_lang_str_full(id)?;
                Some((code, name))
            })
            .collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Auto => write!(f, "auto"),
            Language::Code(code) => write!(f, "{code}"),
        }
    }
}

/// Transcription options.
///
/// Defaults match the production pipeline this crate grew out of: CPU
/// inference, greedy sampling at temperature 0, no word-level timestamps.
pub struct TranscribeOptions {
    pub model: Model,
    pub language: Language,
    pub n_threads: Option<u32>,
    pub gpu: bool,
    pub gpu_device: u32,
    pub temperature: f32,
    pub cache_dir: Option<PathBuf>,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            model: Model::Base,
            language: Language::Auto,
            n_threads: None,
            gpu: false,
            gpu_device: 0,
            temperature: 0.0,
            cache_dir: None,
        }
    }
}

impl TranscribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Set the language, validating against whisper's supported languages.
    pub fn language(mut self, lang: &str) -> Result<Self, Error> {
        self.language = Language::new(lang)?;
        Ok(self)
    }

    pub fn n_threads(mut self, n: u32) -> Self {
        self.n_threads = Some(n);
        self
    }

    pub fn gpu(mut self, enabled: bool) -> Self {
        self.gpu = enabled;
        self
    }

    pub fn gpu_device(mut self, device: u32) -> Self {
        self.gpu_device = device;
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }

    pub fn cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = Some(dir);
        self
    }

    /// Resolve the model cache directory, defaulting to
    /// ~/.cache/subtext/models.
    pub fn resolve_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join("subtext")
                .join("models")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parse_known_sizes() {
        assert!(matches!(Model::parse("tiny"), Some(Model::Tiny)));
        assert!(matches!(Model::parse("base.en"), Some(Model::BaseEn)));
        assert!(matches!(Model::parse("large-v3"), Some(Model::LargeV3)));
        assert!(matches!(
            Model::parse("large-v3-turbo"),
            Some(Model::LargeV3Turbo)
        ));
    }

    #[test]
    fn test_model_parse_unknown() {
        assert!(Model::parse("enormous").is_none());
        assert!(Model::parse("").is_none());
    }

    #[test]
    fn test_model_filename() {
        assert_eq!(Model::Tiny.filename(), "ggml-tiny.bin");
        assert_eq!(Model::MediumEn.filename(), "ggml-medium.en.bin");
        assert_eq!(
            Model::Custom(PathBuf::from("/models/my-model.bin")).filename(),
            "my-model.bin"
        );
    }

    #[test]
    fn test_language_auto() {
        let lang = Language::new("auto").unwrap();
        assert!(lang.code().is_none());
    }

    #[test]
    fn test_language_short_code() {
        let lang = Language::new("en").unwrap();
        assert_eq!(lang.code(), Some("en"));
    }

    #[test]
    fn test_language_full_name_normalized() {
        let lang = Language::new("english").unwrap();
        assert_eq!(lang.code(), Some("en"));
    }

    #[test]
    fn test_language_rejects_unknown() {
        assert!(Language::new("klingon").is_err());
    }

    #[test]
    fn test_default_options_match_pipeline() {
        let opts = TranscribeOptions::default();
        assert!(!opts.gpu);
        assert_eq!(opts.temperature, 0.0);
        assert!(opts.n_threads.is_none());
    }

    #[test]
    fn test_resolve_cache_dir_override() {
        let opts = TranscribeOptions::new().cache_dir(PathBuf::from("/tmp/models"));
        assert_eq!(opts.resolve_cache_dir(), PathBuf::from("/tmp/models"));
    }
}
