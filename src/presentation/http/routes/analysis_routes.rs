use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::{AnalysisHandler, ReanalysisHandler};

pub fn analysis_routes(
    analysis_handler: Arc<AnalysisHandler>,
    reanalysis_handler: Arc<ReanalysisHandler>,
) -> Router {
    Router::new()
        .route("/analysis/batch", post(AnalysisHandler::batch_analyze))
        .with_state(analysis_handler)
        .merge(
            Router::new()
                .route("/reanalysis/run", post(ReanalysisHandler::run_reanalysis))
                .with_state(reanalysis_handler),
        )
}
