use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use backend_infrastructure::AppConfig;

const LOG_FILE_PREFIX: &str = "siglon-backend.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Plain stdout subscriber for the current thread while the config that
/// drives `init_tracing` is still being loaded. Drop the guard before
/// calling `init_tracing`.
pub fn startup_subscriber() -> DefaultGuard {
    startup_subscriber_with_writer(std::io::stdout)
}

fn startup_subscriber_with_writer<W>(writer: W) -> DefaultGuard
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Installs the global subscriber. The returned guard flushes the file
/// writer and must live until shutdown.
pub fn init_tracing(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = env_filter();
    let json = config.log_format == "json";

    let stdout_layer = if json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = if json {
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed()
            } else {
                fmt::layer().with_ansi(false).with_writer(writer).boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn config_warnings_reach_the_startup_subscriber() {
        let captured = Captured::default();
        {
            let _guard = startup_subscriber_with_writer(captured.clone());
            AppConfig::default().validate().expect("defaults are valid");
        }
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("admin_password not set"), "{}", output);
    }

    #[test]
    fn startup_subscriber_is_scoped_to_its_guard() {
        let guard = startup_subscriber();
        assert!(tracing::enabled!(tracing::Level::WARN));
        drop(guard);
        assert!(!tracing::enabled!(tracing::Level::WARN));
    }
}
