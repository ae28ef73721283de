use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::application::services::AuditLogger;
use crate::infrastructure::{container::AppContainer, messaging::ReanalysisScheduler};
use crate::presentation::http::{
    handlers::{
        AccessHandler, AnalysisHandler, AuditHandler, EmbeddingHandler, ReanalysisHandler,
        ReportHandler,
    },
    routes::{access_routes, analysis_routes, embedding_routes, health_routes, report_routes},
};

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub struct HttpServer {
    analysis_handler: Arc<AnalysisHandler>,
    report_handler: Arc<ReportHandler>,
    embedding_handler: Arc<EmbeddingHandler>,
    reanalysis_handler: Arc<ReanalysisHandler>,
    access_handler: Arc<AccessHandler>,
    audit_handler: Arc<AuditHandler>,
    audit_logger: Arc<AuditLogger>,
    reanalysis_scheduler: ReanalysisScheduler,
    port: u16,
}

impl HttpServer {
    pub fn new(container: &AppContainer, port: Option<u16>) -> Self {
        Self {
            analysis_handler: container.analysis_handler.clone(),
            report_handler: container.report_handler.clone(),
            embedding_handler: container.embedding_handler.clone(),
            reanalysis_handler: container.reanalysis_handler.clone(),
            access_handler: container.access_handler.clone(),
            audit_handler: container.audit_handler.clone(),
            audit_logger: container.audit_logger.clone(),
            reanalysis_scheduler: container.reanalysis_scheduler(),
            port: port.unwrap_or(3000),
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes(self.audit_logger.clone()))
            .merge(analysis_routes(
                self.analysis_handler.clone(),
                self.reanalysis_handler.clone(),
            ))
            .merge(report_routes(self.report_handler.clone()))
            .merge(embedding_routes(self.embedding_handler.clone()))
            .merge(access_routes(
                self.access_handler.clone(),
                self.audit_handler.clone(),
            ))
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Start the re-analysis scheduler; it lives as long as the runtime.
        let _scheduler = self.reanalysis_scheduler.spawn();

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        tracing::info!("Listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
