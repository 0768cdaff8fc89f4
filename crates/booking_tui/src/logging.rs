use std::path::{Path, PathBuf};

use color_eyre::Result;
use lazy_static::lazy_static;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

use crate::config::PROJECT_NAME;

pub const LOG_FILE: &str = "booking.log";

lazy_static! {
    pub static ref LOG_ENV: String = format!("{PROJECT_NAME}_LOG_LEVEL");
}

/// Where [`init`] writes for a given data dir.
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

/// Log to `<data_dir>/booking.log`. The terminal belongs to the UI, so there
/// is no console layer. Keep the returned guard alive until exit or buffered
/// lines are lost.
pub fn init(data_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;
    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directives = std::env::var(LOG_ENV.as_str())
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    let filter = env_filter(directives.as_deref());

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(guard)
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn env_var_is_prefixed_with_the_project_name() {
        assert_eq!(LOG_ENV.as_str(), "BOOKING_LOG_LEVEL");
    }

    #[test]
    fn log_file_lives_in_the_data_dir() {
        assert_eq!(
            log_file(Path::new("/var/lib/booking")),
            PathBuf::from("/var/lib/booking/booking.log")
        );
    }

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(env_filter(None).to_string(), "info");
        assert_eq!(env_filter(Some("")).to_string(), "info");
    }
}
