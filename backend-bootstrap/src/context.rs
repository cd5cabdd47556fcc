use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use backend_application::{AppState, Metrics};
use backend_domain::ports::{ContentRepository, OfficialEventRepository, ReportRepository};
use backend_infrastructure::{
    AppConfig, DefaultHealthService, LocalStore, RemoteStore, StoreBackend, SystemClock,
};

pub struct AppContext {
    pub state: AppState,
}

struct StoreHandles {
    reports: Arc<dyn ReportRepository>,
    events: Arc<dyn OfficialEventRepository>,
    content: Arc<dyn ContentRepository>,
    name: &'static str,
}

impl StoreHandles {
    fn from_store<T>(store: Arc<T>, name: &'static str) -> Self
    where
        T: ReportRepository + OfficialEventRepository + ContentRepository + 'static,
    {
        Self {
            reports: store.clone(),
            events: store.clone(),
            content: store,
            name,
        }
    }
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let stores = open_store(config).await?;
        info!(store = stores.name, "store selected");

        let health_service = Arc::new(DefaultHealthService::new(stores.events.clone(), stores.name));
        let state = AppState {
            config: config.to_runtime_config(),
            report_repo: stores.reports,
            event_repo: stores.events,
            content_repo: stores.content,
            health_service,
            clock: Arc::new(SystemClock),
            metrics: Arc::new(Metrics::default()),
        };
        Ok(Self { state })
    }
}

async fn open_store(config: &AppConfig) -> Result<StoreHandles> {
    match config.store_backend {
        StoreBackend::Local => open_local(config).await,
        StoreBackend::Remote => {
            let store = Arc::new(RemoteStore::new(&config.to_remote_config())?);
            if let Err(err) = store.ping().await {
                warn!("remote store not reachable yet: {}", err);
            }
            Ok(StoreHandles::from_store(store, "remote"))
        }
        StoreBackend::Auto => {
            if config.remote_url.is_none() {
                return open_local(config).await;
            }
            match RemoteStore::new(&config.to_remote_config()) {
                Ok(store) => match store.ping().await {
                    Ok(()) => Ok(StoreHandles::from_store(Arc::new(store), "remote")),
                    Err(err) => {
                        warn!("remote store unreachable, falling back to local file: {}", err);
                        open_local(config).await
                    }
                },
                Err(err) => {
                    warn!("remote store misconfigured, falling back to local file: {}", err);
                    open_local(config).await
                }
            }
        }
    }
}

async fn open_local(config: &AppConfig) -> Result<StoreHandles> {
    let store = LocalStore::open(&config.local_store_path).await?;
    info!(path = %store.path().display(), "using local store");
    Ok(StoreHandles::from_store(Arc::new(store), "local"))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn local_config(backend: StoreBackend) -> AppConfig {
        let path = std::env::temp_dir()
            .join(format!("siglon-context-{}", Uuid::new_v4()))
            .join("siglon_db.json");
        AppConfig {
            store_backend: backend,
            local_store_path: path.to_string_lossy().to_string(),
            admin_password: Some("rahasia".to_string()),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn local_backend_serves_seeded_data() {
        let context = AppContext::new(&local_config(StoreBackend::Local))
            .await
            .expect("context");
        assert_eq!(context.state.health_service.backend_name(), "local");
        let events = context.state.event_repo.fetch_events(None).await.expect("events");
        assert_eq!(events.len(), 5);
    }

    #[tokio::test]
    async fn auto_without_remote_url_uses_local_file() {
        let context = AppContext::new(&local_config(StoreBackend::Auto))
            .await
            .expect("context");
        assert_eq!(context.state.health_service.backend_name(), "local");
        assert_eq!(context.state.config.admin_password.as_deref(), Some("rahasia"));
    }

    #[tokio::test]
    async fn auto_falls_back_when_remote_is_unreachable() {
        let config = AppConfig {
            remote_url: Some("http://127.0.0.1:9".to_string()),
            remote_api_key: Some("anon".to_string()),
            request_timeout_seconds: 2,
            ..local_config(StoreBackend::Auto)
        };
        let context = AppContext::new(&config).await.expect("context");
        assert_eq!(context.state.health_service.backend_name(), "local");
    }
}
