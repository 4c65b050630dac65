use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use subtext::{Model, TranscribeOptions};

#[derive(Parser)]
#[command(
    name = "subtext",
    about = "Transcribe an audio file to en.srt and en.txt"
)]
struct Cli {
    /// Audio (or video) file to transcribe.
    audio_path: PathBuf,

    /// Directory the en.srt and en.txt files are written into.
    output_dir: PathBuf,

    /// Whisper model size (e.g. "base", "large-v3") or a path to a ggml file.
    model_size: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        std::process::exit(code);
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("subtext=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let model = match Model::parse(&cli.model_size) {
        Some(m) => m,
        None => {
            // Not a known size — try as a path to a local ggml file
            let path = PathBuf::from(&cli.model_size);
            if path.exists() {
                Model::Custom(path)
            } else {
                eprintln!("Unknown model: {}", cli.model_size);
                eprintln!("Use a size like tiny, base, small, medium, large-v3, or a path to a .ggml file");
                std::process::exit(1);
            }
        }
    };

    // The pipeline produces English outputs (en.srt / en.txt)
    let opts = match TranscribeOptions::new().model(model).language("en") {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let transcript = match subtext::transcribe_file_with_options(&cli.audio_path, &opts).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let paths = match subtext::write_outputs(&transcript, &cli.output_dir) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Transcription complete. SRT saved to {} and TXT saved to {}",
        paths.srt.display(),
        paths.txt.display()
    );
}
