//! Clean command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::{load_transcript, save_transcript, TranscriptCleaner};
use anyhow::Result;
use std::path::Path;

/// Run the clean command.
pub fn run_clean(input: &str, output: Option<String>, _settings: Settings) -> Result<()> {
    let segments = load_transcript(Path::new(input))?;
    let cleaner = TranscriptCleaner::new()?;
    let cleaned = cleaner.clean_transcript(&segments);

    match output {
        Some(path) => {
            save_transcript(Path::new(&path), &cleaned)?;
            Output::success(&format!("Cleaned {} segments into {}", cleaned.len(), path));
        }
        None => {
            let json = serde_json::to_string_pretty(&cleaned)?;
            println!("{}", json);
        }
    }

    Ok(())
}
