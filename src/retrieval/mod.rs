//! Query engine over an embedded chunk collection.
//!
//! The positional correspondence between the vector index and the chunk list
//! is load-bearing: result row `i` must map back to chunk `i`. `ChunkIndex`
//! bundles the two behind one constructor so they cannot drift apart.

use crate::chunking::Chunk;
use crate::embedding::Embedder;
use crate::error::{Result, SpoleError};
use crate::index::FlatIndex;
use crate::transcript::format_timestamp;
use tracing::{debug, instrument};

/// A chunk returned from a query, with its distance to the query vector.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// The matched chunk with its original timestamps.
    pub chunk: Chunk,
    /// Squared L2 distance to the query embedding (lower is more relevant).
    pub distance: f32,
}

impl ScoredChunk {
    /// Format the chunk's start time for display.
    pub fn format_timestamp(&self) -> String {
        format_timestamp(self.chunk.start)
    }
}

/// A vector index paired with the chunks it was built from.
pub struct ChunkIndex {
    index: FlatIndex,
    chunks: Vec<Chunk>,
}

impl ChunkIndex {
    /// Embed the chunks and build an index over them.
    ///
    /// The embedder used here must also be the one used for queries against
    /// the returned index.
    #[instrument(skip(chunks, embedder), fields(chunks = chunks.len()))]
    pub async fn build(chunks: Vec<Chunk>, embedder: &dyn Embedder) -> Result<Self> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(SpoleError::Embedding(format!(
                "Embedder returned {} vectors for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        let index = FlatIndex::build(embeddings)?;
        debug!("Built index over {} chunks", chunks.len());

        Ok(Self { index, chunks })
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the index holds no chunks. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The chunks in index order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Answer a free-text question with the `top_k` most relevant chunks.
    ///
    /// The question is embedded as a single row and searched against the
    /// index; result positions map back to the bundled chunk list, so the
    /// returned chunks carry their original timestamps.
    #[instrument(skip(self, embedder))]
    pub async fn query(
        &self,
        question: &str,
        embedder: &dyn Embedder,
        top_k: usize,
    ) -> Result<Vec<ScoredChunk>> {
        let query_embedding = embedder.embed(question).await?;
        let hits = self.index.search(&query_embedding, top_k)?;

        Ok(hits
            .into_iter()
            .map(|hit| ScoredChunk {
                chunk: self.chunks[hit.index].clone(),
                distance: hit.distance,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Embeds texts by their position in a fixed vocabulary. Deterministic
    /// and offline.
    struct FakeEmbedder {
        vocabulary: Vec<&'static str>,
    }

    impl FakeEmbedder {
        fn new(vocabulary: Vec<&'static str>) -> Self {
            Self { vocabulary }
        }

        fn vector_for(&self, text: &str) -> Vec<f32> {
            let mut v = vec![0.0; self.vocabulary.len()];
            if let Some(i) = self.vocabulary.iter().position(|&w| text.contains(w)) {
                v[i] = 1.0;
            }
            v
        }
    }

    #[async_trait]
    impl Embedder for FakeEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            Ok(self.vector_for(text))
        }

        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|t| self.vector_for(t)).collect())
        }

        fn dimensions(&self) -> usize {
            self.vocabulary.len()
        }
    }

    fn chunk(text: &str, start: f64, end: f64) -> Chunk {
        Chunk::new(text.to_string(), start, end)
    }

    #[tokio::test]
    async fn test_query_returns_matching_chunk_with_timestamps() {
        let embedder = FakeEmbedder::new(vec!["bread", "weather", "music"]);

        let chunks = vec![
            chunk("the weather is grim today", 0.0, 10.0),
            chunk("i love future bread", 10.0, 20.0),
            chunk("music from the nineties", 20.0, 30.0),
        ];

        let index = ChunkIndex::build(chunks, &embedder).await.unwrap();
        assert_eq!(index.len(), 3);

        let results = index.query("tell me about bread", &embedder, 1).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.text, "i love future bread");
        assert_eq!(results[0].chunk.start, 10.0);
        assert_eq!(results[0].chunk.end, 20.0);
        assert_eq!(results[0].distance, 0.0);
    }

    #[tokio::test]
    async fn test_query_clamps_top_k_to_chunk_count() {
        let embedder = FakeEmbedder::new(vec!["a", "b"]);
        let chunks = vec![chunk("a", 0.0, 1.0), chunk("b", 1.0, 2.0)];

        let index = ChunkIndex::build(chunks, &embedder).await.unwrap();
        let results = index.query("a", &embedder, 10).await.unwrap();

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_query_results_ordered_by_distance() {
        let embedder = FakeEmbedder::new(vec!["alpha", "beta", "gamma"]);
        let chunks = vec![
            chunk("alpha", 0.0, 1.0),
            chunk("beta", 1.0, 2.0),
            chunk("gamma", 2.0, 3.0),
        ];

        let index = ChunkIndex::build(chunks, &embedder).await.unwrap();
        let results = index.query("beta", &embedder, 3).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].chunk.text, "beta");
        assert!(results[0].distance <= results[1].distance);
        assert!(results[1].distance <= results[2].distance);
    }

    #[tokio::test]
    async fn test_build_over_no_chunks_is_rejected() {
        let embedder = FakeEmbedder::new(vec!["a"]);
        let result = ChunkIndex::build(Vec::new(), &embedder).await;
        assert!(matches!(result, Err(SpoleError::Config(_))));
    }
}
