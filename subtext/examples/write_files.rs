//! Transcribe a file and write the en.srt / en.txt pair into a directory.
//!
//! Usage: cargo run --example write_files -- path/to/audio.mp3 out/

use subtext::{Model, TranscribeOptions};

#[tokio::main]
async fn main() -> subtext::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: write_files <audio-file> <output-dir>");
    let out_dir = args.next().expect("usage: write_files <audio-file> <output-dir>");

    let opts = TranscribeOptions::new().model(Model::Base).language("en")?;

    let transcript = subtext::transcribe_file_with_options(&path, &opts).await?;
    let paths = subtext::write_outputs(&transcript, out_dir.as_ref())?;

    println!("{}", paths.srt.display());
    println!("{}", paths.txt.display());

    Ok(())
}
