//! Spole - Transcript Semantic Search
//!
//! A local-first CLI tool for finding moments in video transcripts by meaning.
//!
//! The name "Spole" comes from the Norwegian word for "rewind."
//!
//! # Overview
//!
//! Spole allows you to:
//! - Load a video transcript (JSON segments with timestamps)
//! - Clean and chunk it into token-bounded, overlapping windows
//! - Embed the chunks and search them by free-text query
//! - Get back the most relevant chunks with their original timestamps
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `transcript` - Transcript data model, loading, and cleaning
//! - `tokenizer` - Tokenization for token-budgeted chunking
//! - `chunking` - Token-window chunking
//! - `embedding` - Embedding generation
//! - `index` - Flat nearest-neighbor vector index
//! - `retrieval` - Query engine over an embedded chunk collection
//! - `pipeline` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use spole::config::Settings;
//! use spole::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(settings)?;
//!
//!     let index = pipeline.index_file("transcript.json".as_ref()).await?;
//!     let results = pipeline.query(&index, "I love future bread", 3).await?;
//!
//!     for result in &results {
//!         println!("{} @ {}", result.chunk.text, result.format_timestamp());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod chunking;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod index;
pub mod openai;
pub mod pipeline;
pub mod retrieval;
pub mod tokenizer;
pub mod transcript;

pub use error::{Result, SpoleError};
