use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::EmbeddingProvider;
use crate::application::ports::embedding_provider::EmbeddingRequest;
use crate::application::services::TextChunker;
use crate::domain::entities::{EmbeddingRecord, TextChunk};
use crate::domain::repositories::EmbeddingRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingRunSummary {
    pub run_id: Uuid,
    pub chunks_attempted: usize,
    pub chunks_succeeded: usize,
    /// Tokens billed for the stored chunks, as reported by the provider.
    pub tokens_used: u64,
}

pub struct EmbeddingService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    embedding_repository: Arc<dyn EmbeddingRepository>,
    chunker: TextChunker,
}

impl EmbeddingService {
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        embedding_repository: Arc<dyn EmbeddingRepository>,
        chunker: TextChunker,
    ) -> Self {
        Self {
            embedding_provider,
            embedding_repository,
            chunker,
        }
    }

    /// Chunks `text` and stores one embedding per chunk under a fresh run.
    ///
    /// Chunks are embedded sequentially. A chunk that fails at the provider or
    /// at the repository is skipped and the run carries on.
    pub async fn embed_document(&self, document_id: Uuid, text: &str) -> EmbeddingRunSummary {
        let chunks = self.chunker.chunk(document_id, text);
        let run_id = Uuid::new_v4();
        let total_chunks = chunks.len();
        let mut chunks_succeeded = 0;
        let mut tokens_used = 0u64;

        tracing::info!(
            "Embedding document {} in {} chunks (run {})",
            document_id,
            total_chunks,
            run_id
        );

        for chunk in &chunks {
            match self.embed_chunk(run_id, chunk, total_chunks).await {
                Ok(tokens) => {
                    chunks_succeeded += 1;
                    tokens_used += tokens;
                }
                Err(e) => tracing::warn!(
                    "Skipping chunk {} of document {}: {}",
                    chunk.index,
                    document_id,
                    e
                ),
            }
        }

        tracing::info!(
            "Embedding run {} stored {}/{} chunks using {} tokens",
            run_id,
            chunks_succeeded,
            total_chunks,
            tokens_used
        );

        EmbeddingRunSummary {
            run_id,
            chunks_attempted: total_chunks,
            chunks_succeeded,
            tokens_used,
        }
    }

    async fn embed_chunk(
        &self,
        run_id: Uuid,
        chunk: &TextChunk,
        total_chunks: usize,
    ) -> Result<u64, String> {
        let response = self
            .embedding_provider
            .generate_embedding(EmbeddingRequest {
                text: chunk.text.clone(),
            })
            .await
            .map_err(|e| format!("provider error: {}", e))?;
        let tokens = response
            .token_count
            .and_then(|count| u64::try_from(count).ok())
            .unwrap_or(0);
        tracing::debug!("Chunk {} embedded with {} tokens", chunk.index, tokens);

        let record = EmbeddingRecord::new(
            chunk.document_id,
            run_id,
            chunk.index as i32,
            chunk.text.clone(),
            response.embedding,
            response.model_name,
            chunk.length,
            total_chunks,
            chunk.start,
        );

        self.embedding_repository
            .save(&record)
            .await
            .map_err(|e| format!("repository error: {}", e))?;
        Ok(tokens)
    }

    pub fn model_name(&self) -> String {
        self.embedding_provider.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::EmbeddingRepository;
    use crate::domain::value_objects::ChunkingConfig;
    use crate::infrastructure::memory::InMemoryEmbeddingRepository;
    use crate::test_support::StubEmbeddingProvider;

    fn service(
        provider: StubEmbeddingProvider,
        repository: Arc<InMemoryEmbeddingRepository>,
    ) -> EmbeddingService {
        EmbeddingService::new(
            Arc::new(provider),
            repository,
            TextChunker::new(ChunkingConfig::new(10, 2).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_all_chunks_are_stored_in_order() {
        let repository = Arc::new(InMemoryEmbeddingRepository::new());
        let service = service(StubEmbeddingProvider::new(), repository.clone());
        let document_id = Uuid::new_v4();

        let summary = service.embed_document(document_id, &"a".repeat(26)).await;

        assert_eq!(summary.chunks_attempted, 3);
        assert_eq!(summary.chunks_succeeded, 3);
        assert_eq!(summary.tokens_used, 30);

        let records = repository.find_by_run(summary.run_id).await.unwrap();
        let indices: Vec<i32> = records.iter().map(|r| r.chunk_index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(records[2].metadata()["total_chunks"], 3);
        assert_eq!(records[1].metadata()["start_offset"], 8);
        assert_eq!(records[0].model_name(), "stub-embedding");
    }

    #[tokio::test]
    async fn test_provider_failure_skips_only_that_chunk() {
        let repository = Arc::new(InMemoryEmbeddingRepository::new());
        let service = service(StubEmbeddingProvider::failing_on("X"), repository.clone());

        // Only the last window (chars 16..26) contains the marker.
        let text = format!("{}X", "b".repeat(25));
        let summary = service.embed_document(Uuid::new_v4(), &text).await;

        assert_eq!(summary.chunks_attempted, 3);
        assert_eq!(summary.chunks_succeeded, 2);
        // The stub bills one token per character of the two stored windows.
        assert_eq!(summary.tokens_used, 20);
    }

    #[tokio::test]
    async fn test_repository_failure_does_not_stop_run() {
        let repository = Arc::new(InMemoryEmbeddingRepository::new());
        repository.fail_chunk(0).await;
        let service = service(StubEmbeddingProvider::new(), repository.clone());

        let summary = service.embed_document(Uuid::new_v4(), &"c".repeat(26)).await;

        assert_eq!(summary.chunks_succeeded, 2);
        assert_eq!(summary.tokens_used, 20);
        assert_eq!(repository.all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_each_call_starts_a_new_run() {
        let repository = Arc::new(InMemoryEmbeddingRepository::new());
        let service = service(StubEmbeddingProvider::new(), repository.clone());
        let document_id = Uuid::new_v4();

        let first = service.embed_document(document_id, "short text").await;
        let second = service.embed_document(document_id, "short text").await;

        assert_ne!(first.run_id, second.run_id);
        assert_eq!(repository.count_by_document(document_id).await.unwrap(), 2);
    }
}
