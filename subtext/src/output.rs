use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::Transcript;

/// Subtitle filename written into the output directory.
pub const SRT_FILENAME: &str = "en.srt";
/// Transcript filename written into the output directory.
pub const TXT_FILENAME: &str = "en.txt";

/// Paths of the files produced by [`write_outputs`].
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub srt: PathBuf,
    pub txt: PathBuf,
}

/// Write a transcript into `output_dir` as `en.srt` and `en.txt`.
///
/// The directory is created if missing; existing files are overwritten.
/// Each file is opened, written once, and closed.
pub fn write_outputs(transcript: &Transcript, output_dir: &Path) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)?;

    let srt = output_dir.join(SRT_FILENAME);
    let txt = output_dir.join(TXT_FILENAME);

    std::fs::write(&srt, transcript.to_srt())?;
    std::fs::write(&txt, transcript.text())?;

    info!(srt = %srt.display(), txt = %txt.display(), "outputs written");

    Ok(OutputPaths { srt, txt })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;
    use std::fs;

    fn transcript() -> Transcript {
        Transcript {
            segments: vec![
                Segment {
                    start: 0.0,
                    end: 1.5,
                    text: " Hello world.".into(),
                },
                Segment {
                    start: 1.5,
                    end: 3.0,
                    text: " Goodbye.".into(),
                },
            ],
            language: "en".into(),
            duration: 3.0,
            model: "base".into(),
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_both_files() {
        let dir = scratch_dir("subtext_test_outputs");
        let paths = write_outputs(&transcript(), &dir).unwrap();

        assert_eq!(paths.srt, dir.join("en.srt"));
        assert_eq!(paths.txt, dir.join("en.txt"));
        assert!(paths.srt.exists());
        assert!(paths.txt.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let dir = scratch_dir("subtext_test_nested").join("a").join("b");
        let paths = write_outputs(&transcript(), &dir).unwrap();
        assert!(paths.srt.exists());

        fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).ok();
    }

    #[test]
    fn test_txt_is_space_joined_transcript() {
        let dir = scratch_dir("subtext_test_txt");
        let t = transcript();
        let paths = write_outputs(&t, &dir).unwrap();

        let content = fs::read_to_string(&paths.txt).unwrap();
        assert_eq!(content, "Hello world. Goodbye.");
        assert_eq!(content, t.text());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_srt_content_matches_formatter() {
        let dir = scratch_dir("subtext_test_srt");
        let t = transcript();
        let paths = write_outputs(&t, &dir).unwrap();

        let content = fs::read_to_string(&paths.srt).unwrap();
        assert_eq!(content, t.to_srt());
        assert!(content.starts_with("1\n00:00:00,000 --> 00:00:01,500\n"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_overwrites_existing_files() {
        let dir = scratch_dir("subtext_test_overwrite");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en.srt"), "stale").unwrap();
        fs::write(dir.join("en.txt"), "stale").unwrap();

        let paths = write_outputs(&transcript(), &dir).unwrap();
        let content = fs::read_to_string(&paths.txt).unwrap();
        assert_eq!(content, "Hello world. Goodbye.");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_transcript_writes_empty_files() {
        let dir = scratch_dir("subtext_test_empty");
        let t = Transcript {
            segments: vec![],
            language: "en".into(),
            duration: 0.0,
            model: "base".into(),
        };
        let paths = write_outputs(&t, &dir).unwrap();

        assert_eq!(fs::read_to_string(&paths.srt).unwrap(), "");
        assert_eq!(fs::read_to_string(&paths.txt).unwrap(), "");

        fs::remove_dir_all(&dir).ok();
    }
}
