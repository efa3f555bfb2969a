//! Token-window chunking of transcript segments.
//!
//! Splits each segment's text into overlapping windows of at most `chunk_size`
//! tokens. Every chunk derived from a segment carries that segment's full
//! `(start, end)` range; sub-segment timing is not interpolated.

use crate::error::{Result, SpoleError};
use crate::tokenizer::Tokenizer;
use crate::transcript::{format_timestamp, TranscriptSegment};
use serde::{Deserialize, Serialize};

/// A chunk of transcript text with inherited timing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content of this chunk.
    pub text: String,
    /// Start time in seconds, inherited from the source segment.
    pub start: f64,
    /// End time in seconds, inherited from the source segment.
    pub end: f64,
}

impl Chunk {
    /// Create a new chunk.
    pub fn new(text: String, start: f64, end: f64) -> Self {
        Self { text, start, end }
    }

    /// Duration of this chunk in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Format the start time for display.
    pub fn format_timestamp(&self) -> String {
        format_timestamp(self.start)
    }
}

/// Configuration for token-window chunking.
#[derive(Debug, Clone, Copy)]
pub struct ChunkingConfig {
    /// Maximum number of tokens per chunk.
    pub chunk_size: usize,
    /// Number of tokens shared between consecutive chunks of a segment.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 200,
            overlap: 50,
        }
    }
}

impl ChunkingConfig {
    /// Validate the configuration.
    ///
    /// `overlap >= chunk_size` would make the window advance by zero or less
    /// and loop forever, so it is rejected here rather than at chunking time.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SpoleError::Config(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.overlap >= self.chunk_size {
            return Err(SpoleError::Config(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }
        Ok(())
    }

    /// Window advance per step.
    fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

/// Token-window chunker.
///
/// Construction validates the configuration, so a held chunker is always safe
/// to run.
pub struct TokenWindowChunker {
    config: ChunkingConfig,
}

impl TokenWindowChunker {
    /// Create a chunker, rejecting invalid configurations.
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Split transcript segments into token-bounded chunks.
    ///
    /// Segments that encode to zero tokens produce no chunks. A segment whose
    /// token count exceeds `chunk_size` produces several chunks, all carrying
    /// the segment's original time range.
    pub fn chunk(
        &self,
        segments: &[TranscriptSegment],
        tokenizer: &dyn Tokenizer,
    ) -> Result<Vec<Chunk>> {
        let mut chunks = Vec::new();

        for segment in segments {
            let tokens = tokenizer.encode(&segment.text);
            if tokens.is_empty() {
                continue;
            }

            let mut i = 0;
            loop {
                let end = (i + self.config.chunk_size).min(tokens.len());
                let text = tokenizer.decode(&tokens[i..end])?;
                chunks.push(Chunk::new(text, segment.start, segment.end));

                // Once a window has reached the end of the token stream, any
                // further window would be a pure suffix of this one.
                if end == tokens.len() {
                    break;
                }
                i += self.config.stride();
            }
        }

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One token per character. Lossless and deterministic, which makes chunk
    /// counts easy to reason about in tests.
    struct CharTokenizer;

    impl Tokenizer for CharTokenizer {
        fn encode(&self, text: &str) -> Vec<u32> {
            text.chars().map(|c| c as u32).collect()
        }

        fn decode(&self, tokens: &[u32]) -> Result<String> {
            Ok(tokens
                .iter()
                .filter_map(|&t| char::from_u32(t))
                .collect())
        }
    }

    fn segment(text: &str, start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment::new("c1".to_string(), text.to_string(), start, end)
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let config = ChunkingConfig {
            chunk_size: 0,
            overlap: 0,
        };
        assert!(TokenWindowChunker::new(config).is_err());
    }

    #[test]
    fn test_rejects_overlap_equal_to_chunk_size() {
        let config = ChunkingConfig {
            chunk_size: 10,
            overlap: 10,
        };
        assert!(TokenWindowChunker::new(config).is_err());
    }

    #[test]
    fn test_empty_segment_yields_no_chunks() {
        let chunker = TokenWindowChunker::new(ChunkingConfig::default()).unwrap();
        let chunks = chunker
            .chunk(&[segment("", 0.0, 5.0)], &CharTokenizer)
            .unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_segments_yield_one_chunk_each() {
        // Token counts 50, 50, 50 against chunk_size 200: one chunk per
        // segment, timestamps unchanged.
        let chunker = TokenWindowChunker::new(ChunkingConfig {
            chunk_size: 200,
            overlap: 50,
        })
        .unwrap();

        let text = "a".repeat(50);
        let segments = vec![
            segment(&text, 0.0, 10.0),
            segment(&text, 10.0, 20.0),
            segment(&text, 20.0, 30.0),
        ];

        let chunks = chunker.chunk(&segments, &CharTokenizer).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!((chunks[0].start, chunks[0].end), (0.0, 10.0));
        assert_eq!((chunks[1].start, chunks[1].end), (10.0, 20.0));
        assert_eq!((chunks[2].start, chunks[2].end), (20.0, 30.0));
    }

    #[test]
    fn test_long_segment_chunk_count() {
        // N = 500 tokens, chunk_size = 200, overlap = 50:
        // ceil((500 - 50) / 150) = 3 chunks.
        let chunker = TokenWindowChunker::new(ChunkingConfig {
            chunk_size: 200,
            overlap: 50,
        })
        .unwrap();

        let text = "x".repeat(500);
        let chunks = chunker
            .chunk(&[segment(&text, 3.0, 40.0)], &CharTokenizer)
            .unwrap();

        assert_eq!(chunks.len(), 3);
        // All chunks inherit the full segment range.
        for chunk in &chunks {
            assert_eq!((chunk.start, chunk.end), (3.0, 40.0));
        }
        // Windows: [0, 200), [150, 350), [300, 500).
        assert_eq!(chunks[0].text.len(), 200);
        assert_eq!(chunks[1].text.len(), 200);
        assert_eq!(chunks[2].text.len(), 200);
    }

    #[test]
    fn test_consecutive_chunks_overlap() {
        let chunker = TokenWindowChunker::new(ChunkingConfig {
            chunk_size: 4,
            overlap: 2,
        })
        .unwrap();

        let chunks = chunker
            .chunk(&[segment("abcdef", 0.0, 1.0)], &CharTokenizer)
            .unwrap();

        // ceil((6 - 2) / 2) = 2 windows, sharing two tokens.
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "abcd");
        assert_eq!(chunks[1].text, "cdef");
    }

    #[test]
    fn test_chunk_timestamp_formatting() {
        let chunk = Chunk::new("hello".to_string(), 125.0, 130.0);
        assert_eq!(chunk.format_timestamp(), "02:05");
        assert_eq!(chunk.duration(), 5.0);
    }
}
