use uuid::Uuid;

/// A window of a document's text. Offsets and lengths count characters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    pub document_id: Uuid,
    pub index: usize,
    pub text: String,
    pub start: usize,
    pub length: usize,
}

impl TextChunk {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}
