//! Audio transcription library — file in, SRT subtitles and plain-text
//! transcript out.
//!
//! **subtext** handles the full pipeline: model caching (auto-download on
//! first use), audio decoding via ffmpeg (any container, 16 kHz mono
//! resample), and transcription via whisper.cpp. Results format as SRT or
//! plain text, and [`output::write_outputs`] writes the standard
//! `en.srt` + `en.txt` pair used by the subtitle pipeline.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> subtext::Result<()> {
//! let transcript = subtext::transcribe_file("meeting.mp3").await?;
//! println!("{}", transcript.to_srt());
//! # Ok(())
//! # }
//! ```

pub(crate) mod audio;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub(crate) mod transcribe;
pub mod types;

pub use config::{Language, Model, TranscribeOptions};
pub use error::{Error, Result};
pub use output::{write_outputs, OutputPaths};
pub use types::{Segment, Transcript};

use std::path::Path;

/// Transcribe a local audio/video file with default options.
pub async fn transcribe_file(path: impl AsRef<Path>) -> Result<Transcript> {
    transcribe_file_with_options(path, &TranscribeOptions::default()).await
}

/// Transcribe a local audio/video file with custom options.
pub async fn transcribe_file_with_options(
    path: impl AsRef<Path>,
    options: &TranscribeOptions,
) -> Result<Transcript> {
    let path = path.as_ref();

    // Ensure model is available
    let cache_dir = options.resolve_cache_dir();
    let model_path = model::ensure_model(&options.model, &cache_dir).await?;

    // Decode audio
    let samples = audio::load_audio(path)?;

    // Transcribe
    transcribe::transcribe_samples(&samples, &model_path, options)
}
