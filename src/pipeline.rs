//! Pipeline coordination for Spole.
//!
//! Wires the cleaner, tokenizer, chunker and embedder together for one run:
//! transcript in, searchable chunk index out, queries against it. Components
//! are constructed once and passed explicitly, so tests can swap in fakes.

use crate::chunking::{Chunk, ChunkingConfig, TokenWindowChunker};
use crate::config::Settings;
use crate::embedding::{Embedder, OpenAIEmbedder};
use crate::error::Result;
use crate::retrieval::{ChunkIndex, ScoredChunk};
use crate::tokenizer::{BpeTokenizer, Tokenizer};
use crate::transcript::{load_transcript, TranscriptCleaner, TranscriptSegment};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The main pipeline: clean, chunk, embed, index, query.
pub struct Pipeline {
    settings: Settings,
    tokenizer: Arc<dyn Tokenizer>,
    embedder: Arc<dyn Embedder>,
    chunker: TokenWindowChunker,
    cleaner: Option<TranscriptCleaner>,
}

impl Pipeline {
    /// Create a pipeline from settings, with OpenAI-backed embedding.
    ///
    /// Chunking parameters are validated here, before any transcript is
    /// touched.
    pub fn new(settings: Settings) -> Result<Self> {
        let tokenizer: Arc<dyn Tokenizer> =
            match BpeTokenizer::for_model(&settings.chunking.tokenizer_model) {
                Ok(t) => Arc::new(t),
                Err(e) => {
                    warn!(
                        "No tokenizer for model '{}' ({}), falling back to cl100k_base",
                        settings.chunking.tokenizer_model, e
                    );
                    Arc::new(BpeTokenizer::cl100k()?)
                }
            };

        let embedder = Arc::new(OpenAIEmbedder::with_config(
            &settings.embedding.model,
            settings.embedding.dimensions as usize,
        ));

        Self::with_components(settings, tokenizer, embedder)
    }

    /// Create a pipeline with custom components.
    pub fn with_components(
        settings: Settings,
        tokenizer: Arc<dyn Tokenizer>,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self> {
        let chunker = TokenWindowChunker::new(ChunkingConfig {
            chunk_size: settings.chunking.chunk_size,
            overlap: settings.chunking.overlap,
        })?;

        let cleaner = if settings.cleaning.enabled || settings.cleaning.normalize_queries {
            Some(TranscriptCleaner::new()?)
        } else {
            None
        };

        Ok(Self {
            settings,
            tokenizer,
            embedder,
            chunker,
            cleaner,
        })
    }

    /// Get a reference to the embedder.
    pub fn embedder(&self) -> Arc<dyn Embedder> {
        self.embedder.clone()
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load a transcript file and split it into chunks, without embedding.
    pub fn chunk_file(&self, path: &Path) -> Result<Vec<Chunk>> {
        let segments = load_transcript(path)?;
        self.chunk_segments(&segments)
    }

    /// Clean (if enabled) and chunk transcript segments.
    pub fn chunk_segments(&self, segments: &[TranscriptSegment]) -> Result<Vec<Chunk>> {
        let cleaned;
        let segments = if self.settings.cleaning.enabled {
            match &self.cleaner {
                Some(cleaner) => {
                    cleaned = cleaner.clean_transcript(segments);
                    &cleaned
                }
                None => segments,
            }
        } else {
            segments
        };

        self.chunker.chunk(segments, self.tokenizer.as_ref())
    }

    /// Build a searchable index from a transcript file.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn index_file(&self, path: &Path) -> Result<ChunkIndex> {
        let segments = load_transcript(path)?;
        info!("Loaded {} transcript segments", segments.len());
        self.index_segments(&segments).await
    }

    /// Build a searchable index from transcript segments.
    pub async fn index_segments(&self, segments: &[TranscriptSegment]) -> Result<ChunkIndex> {
        let chunks = self.chunk_segments(segments)?;
        info!("Created {} chunks", chunks.len());
        ChunkIndex::build(chunks, self.embedder.as_ref()).await
    }

    /// Query a chunk index built by this pipeline.
    ///
    /// The question is normalized with the transcript cleaner only when
    /// `cleaning.normalize_queries` is set; by default it is embedded as
    /// typed.
    pub async fn query(
        &self,
        index: &ChunkIndex,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<ScoredChunk>> {
        let normalized;
        let question = if self.settings.cleaning.normalize_queries {
            match &self.cleaner {
                Some(cleaner) => {
                    normalized = cleaner.clean_text(question);
                    normalized.as_str()
                }
                None => question,
            }
        } else {
            question
        };

        index.query(question, self.embedder.as_ref(), top_k).await
    }
}
