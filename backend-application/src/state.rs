use std::sync::Arc;

use backend_domain::ports::{
    Clock, ContentRepository, HealthCheckService, OfficialEventRepository, ReportRepository,
};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub report_repo: Arc<dyn ReportRepository>,
    pub event_repo: Arc<dyn OfficialEventRepository>,
    pub content_repo: Arc<dyn ContentRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub clock: Arc<dyn Clock>,
    pub metrics: Arc<Metrics>,
}
