use uuid::Uuid;

use crate::domain::entities::TextChunk;
use crate::domain::value_objects::ChunkingConfig;

/// Fixed-size sliding window over characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChunker {
    config: ChunkingConfig,
}

impl TextChunker {
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ChunkingConfig {
        self.config
    }

    /// Splits `text` into overlapping windows. Empty text yields no chunks.
    pub fn chunk(&self, document_id: Uuid, text: &str) -> Vec<TextChunk> {
        // Byte offset of every char boundary, including the end of the text.
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = boundaries.len() - 1;

        let mut chunks = Vec::new();
        if char_count == 0 {
            return chunks;
        }

        let mut start = 0;
        loop {
            let end = (start + self.config.chunk_size()).min(char_count);
            chunks.push(TextChunk {
                document_id,
                index: chunks.len(),
                text: text[boundaries[start]..boundaries[end]].to_string(),
                start,
                length: end - start,
            });

            if end == char_count {
                break;
            }
            start += self.config.stride();
        }

        chunks
    }
}
