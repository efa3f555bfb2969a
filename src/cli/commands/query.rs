//! Query command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use anyhow::Result;
use std::path::Path;

/// Run the query command.
pub async fn run_query(
    transcript: &str,
    question: &str,
    top_k: Option<usize>,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Query) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let top_k = top_k.unwrap_or(settings.query.top_k);
    let pipeline = Pipeline::new(settings)?;

    let spinner = Output::spinner("Indexing transcript...");
    let index = match pipeline.index_file(Path::new(transcript)).await {
        Ok(index) => index,
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to index transcript: {}", e));
            return Err(e.into());
        }
    };
    spinner.set_message("Searching...");

    let results = pipeline.query(&index, question, top_k).await;
    spinner.finish_and_clear();

    match results {
        Ok(results) => {
            if results.is_empty() {
                Output::warning("No results found.");
            } else {
                Output::success(&format!(
                    "Top {} of {} chunks",
                    results.len(),
                    index.len()
                ));

                for (rank, result) in results.iter().enumerate() {
                    Output::search_result(
                        rank + 1,
                        &result.format_timestamp(),
                        result.distance,
                        &result.chunk.text,
                    );
                }
            }
        }
        Err(e) => {
            Output::error(&format!("Query failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
