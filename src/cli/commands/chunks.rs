//! Chunks command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use crate::transcript::format_timestamp;
use anyhow::Result;
use std::path::Path;

/// Run the chunks command: show the chunking result without embedding.
pub fn run_chunks(transcript: &str, settings: Settings) -> Result<()> {
    let pipeline = Pipeline::new(settings)?;

    match pipeline.chunk_file(Path::new(transcript)) {
        Ok(chunks) => {
            if chunks.is_empty() {
                Output::warning("Transcript produced no chunks.");
            } else {
                Output::header(&format!("Chunks ({})", chunks.len()));
                println!();

                for (order, chunk) in chunks.iter().enumerate() {
                    Output::chunk(
                        order,
                        &format_timestamp(chunk.start),
                        &format_timestamp(chunk.end),
                        &chunk.text,
                    );
                }
            }
        }
        Err(e) => {
            Output::error(&format!("Failed to chunk transcript: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
