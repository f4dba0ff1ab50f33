use std::path::Path;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::CrateLevelFilter;
use super::format::FlowFormat;
use crate::config::LoggingConfig;
use crate::err_with_loc;
use crate::error::Context;

/// Keeps the non-blocking log writers flushing; drop it only on shutdown.
#[must_use = "dropping the guard stops file logging"]
pub struct TracingGuard {
    _writers: Vec<WorkerGuard>,
    pub base_directory: PathBuf,
}

fn create_log_dirs(base: &Path) -> crate::Result<()> {
    for dir in [base.to_path_buf(), base.join("debug"), base.join("error")] {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).with_context(|| format!("failed to create logs directory: {}", dir.display()))?;
        }
    }
    Ok(())
}

pub fn setup_tracing(
    engine_name: &str,
    logging: &LoggingConfig,
) -> crate::Result<TracingGuard> {
    let base_logs_dir = logging.base_directory();
    create_log_dirs(&base_logs_dir)?;

    let log_file = format!("{}.log", engine_name);
    let debug_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), &log_file);
    let error_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), &log_file);
    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);
    #[cfg_attr(not(feature = "dev"), allow(unused_mut))]
    let mut writers = vec![debug_guard, error_guard];

    let format = FlowFormat::new(engine_name);

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(CrateLevelFilter::DEBUG_ONLY),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(CrateLevelFilter::ERROR_WARN),
        );

    // terminal goes to stderr so stdout stays clean for the rendered scene
    #[cfg(all(feature = "prod", not(feature = "dev")))]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(CrateLevelFilter::ERROR_ONLY),
    );

    #[cfg(feature = "dev")]
    let subscriber = {
        let info_appender = RollingFileAppender::new(Rotation::DAILY, &base_logs_dir, &log_file);
        let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
        writers.push(info_guard);

        subscriber
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(true)
                    .event_format(format.clone())
                    .with_writer(std::io::stderr)
                    .with_filter(CrateLevelFilter::INFO_AND_ABOVE),
            )
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(false)
                    .event_format(format.clone())
                    .with_writer(non_blocking_info)
                    .with_filter(CrateLevelFilter::INFO_AND_ABOVE),
            )
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| err_with_loc!(anyhow::anyhow!("failed to install tracing subscriber: {}", e)))?;

    tracing::info!("{}_logging_started::debug_logs::{}", engine_name, base_logs_dir.join("debug").join(&log_file).display());
    tracing::info!("{}_logging_started::error_logs::{}", engine_name, base_logs_dir.join("error").join(&log_file).display());

    Ok(TracingGuard {
        _writers: writers,
        base_directory: base_logs_dir,
    })
}
