use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::EmbeddingHandler;

pub fn embedding_routes(embedding_handler: Arc<EmbeddingHandler>) -> Router {
    Router::new()
        .route("/embeddings/generate", post(EmbeddingHandler::generate_embeddings))
        .with_state(embedding_handler)
}
