use serde::Serialize;

use crate::application::use_cases::run_scheduled_reanalysis::ScheduledReanalysisResponse;

#[derive(Debug, Serialize)]
pub struct ReanalysisResponseDto {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub successful: usize,
    pub notifications_created: usize,
}

impl From<ScheduledReanalysisResponse> for ReanalysisResponseDto {
    fn from(response: ScheduledReanalysisResponse) -> Self {
        Self {
            success: true,
            message: response.message,
            count: response.count,
            successful: response.successful,
            notifications_created: response.notifications_created,
        }
    }
}
