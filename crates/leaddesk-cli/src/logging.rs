// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_ENV: &str = "LEADDESK_LOG";
const LOG_FILE_PREFIX: &str = "leaddesk.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub default_filter: String,
}

/// `LEADDESK_LOG` wins over the configured level when set and non-blank.
fn resolve_directive<'a>(env_value: Option<&'a str>, default_filter: &'a str) -> &'a str {
    env_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default_filter)
}

pub fn build_filter(env_value: Option<&str>, default_filter: &str) -> Result<EnvFilter> {
    let directive = resolve_directive(env_value, default_filter);
    EnvFilter::try_new(directive).map_err(|error| {
        anyhow!("invalid log filter {directive:?}: {error}; set [logging].level or {LOG_ENV} to a level like info or leaddesk_app=debug")
    })
}

pub fn prepare_log_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| {
        format!(
            "create log directory {}; set [logging].dir to a writable path",
            dir.display()
        )
    })
}

/// Install the global subscriber writing to a daily rolling file.
/// The returned guard flushes pending lines on drop and must outlive the TUI.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), &config.default_filter)?;
    prepare_log_dir(&config.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("install log subscriber")?;

    tracing::info!(log_dir = %config.log_dir.display(), "logging initialized");
    Ok(guard)
}
