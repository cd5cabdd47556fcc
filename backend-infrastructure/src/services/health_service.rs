use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::ports::HealthCheckService;
use backend_domain::OfficialEventRepository;

pub struct DefaultHealthService {
    event_repo: Arc<dyn OfficialEventRepository>,
    backend_name: &'static str,
}

impl DefaultHealthService {
    pub fn new(event_repo: Arc<dyn OfficialEventRepository>, backend_name: &'static str) -> Self {
        Self {
            event_repo,
            backend_name,
        }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_store(&self) -> anyhow::Result<bool> {
        self.event_repo
            .ping()
            .await
            .map(|_| true)
            .map_err(anyhow::Error::from)
    }

    fn backend_name(&self) -> &'static str {
        self.backend_name
    }
}
