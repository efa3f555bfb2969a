//! Tokenization for token-budgeted chunking.
//!
//! Chunk boundaries are measured in tokens, not characters, so the chunker
//! needs an encode/decode pair. The trait keeps the chunker testable with a
//! fake tokenizer; the production implementation wraps a tiktoken BPE.

use crate::error::{Result, SpoleError};
use tiktoken_rs::CoreBPE;

/// Trait for tokenizer implementations.
///
/// Encoding must be deterministic, and decoding any window of encoded tokens
/// must succeed. Decoded text need not byte-equal the original (token
/// boundaries may split characters), but must be stable for a given window.
pub trait Tokenizer: Send + Sync {
    /// Encode text into an ordered token sequence.
    fn encode(&self, text: &str) -> Vec<u32>;

    /// Decode a token sequence back into text.
    fn decode(&self, tokens: &[u32]) -> Result<String>;
}

/// BPE tokenizer backed by tiktoken.
pub struct BpeTokenizer {
    bpe: CoreBPE,
}

impl BpeTokenizer {
    /// Create a tokenizer for the given model name (e.g. "text-embedding-3-small").
    pub fn for_model(model: &str) -> Result<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|e| SpoleError::Tokenizer(format!("Unknown model '{}': {}", model, e)))?;
        Ok(Self { bpe })
    }

    /// Create a tokenizer with the cl100k_base encoding.
    pub fn cl100k() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| SpoleError::Tokenizer(format!("Failed to load cl100k_base: {}", e)))?;
        Ok(Self { bpe })
    }
}

impl Tokenizer for BpeTokenizer {
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    fn decode(&self, tokens: &[u32]) -> Result<String> {
        self.bpe
            .decode(tokens.to_vec())
            .map_err(|e| SpoleError::Tokenizer(format!("Decode failed: {}", e)))
    }
}
