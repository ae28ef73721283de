use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::use_cases::RunScheduledReanalysisUseCase;

/// Runs the scheduled re-analysis on a fixed interval in the background.
pub struct ReanalysisScheduler {
    use_case: Arc<RunScheduledReanalysisUseCase>,
    interval: Duration,
}

impl ReanalysisScheduler {
    pub fn new(use_case: Arc<RunScheduledReanalysisUseCase>, interval: Duration) -> Self {
        Self { use_case, interval }
    }

    /// Spawns the loop. A zero interval disables the scheduler.
    pub fn spawn(self) -> Option<JoinHandle<()>> {
        if self.interval.is_zero() {
            tracing::info!("Scheduled re-analysis is disabled");
            return None;
        }

        Some(tokio::spawn(async move { self.start().await }))
    }

    async fn start(&self) {
        tracing::info!(
            "Starting re-analysis scheduler, interval {}s",
            self.interval.as_secs()
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the first run waits a full interval.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// One independent run. Errors are logged and never stop the loop.
    pub async fn run_once(&self) -> bool {
        match self.use_case.execute().await {
            Ok(response) => {
                tracing::info!(
                    "Scheduled re-analysis finished: {} submitted, {} succeeded",
                    response.count,
                    response.successful
                );
                true
            }
            Err(e) => {
                tracing::error!("Scheduled re-analysis failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::BatchAnalyzeDocumentsUseCase;
    use crate::application::use_cases::batch_analyze_documents::BatchSettings;
    use crate::application::use_cases::run_scheduled_reanalysis::ReanalysisSettings;
    use crate::infrastructure::memory::{
        InMemoryDocumentRepository, InMemoryDocumentStorage, InMemoryNotificationRepository,
        InMemoryReportRepository,
    };

    fn use_case() -> Arc<RunScheduledReanalysisUseCase> {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let batch = BatchAnalyzeDocumentsUseCase::new(
            documents.clone(),
            Arc::new(InMemoryDocumentStorage::new()),
            None,
            BatchSettings {
                group_size: 3,
                group_delay: Duration::ZERO,
            },
        );
        Arc::new(RunScheduledReanalysisUseCase::new(
            Arc::new(InMemoryReportRepository::new()),
            documents,
            Arc::new(InMemoryNotificationRepository::new()),
            Arc::new(batch),
            ReanalysisSettings::default(),
        ))
    }

    #[tokio::test]
    async fn test_zero_interval_disables_scheduler() {
        let scheduler = ReanalysisScheduler::new(use_case(), Duration::ZERO);
        assert!(scheduler.spawn().is_none());
    }

    #[tokio::test]
    async fn test_run_once_with_nothing_to_do() {
        let scheduler = ReanalysisScheduler::new(use_case(), Duration::from_secs(60));
        assert!(scheduler.run_once().await);
    }
}
