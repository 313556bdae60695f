mod config;
mod job;
mod listener;
mod properties;

use config::{Config, ConfigError, parse_property_override};
use job::{ConnectionCheckJob, JobRunner};
use listener::EnvironmentPropertyBridge;
use properties::{ProcessEnvironment, SharedProperties};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn parse_property_overrides() -> Result<Vec<(String, String)>, ConfigError> {
    let mut overrides = Vec::new();
    for arg in env::args().skip(1) {
        if let Some(pair) = parse_property_override(&arg)? {
            overrides.push(pair);
        }
    }
    Ok(overrides)
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = parse_config_path();

    let mut config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.app.log_level.as_deref());

    match parse_property_overrides() {
        Ok(overrides) => config.apply_overrides(overrides),
        Err(e) => {
            error!(error = %e, "Invalid command line");
            return ExitCode::FAILURE;
        }
    }

    let initial = config.initial_properties();
    debug!(count = initial.len(), "Seeded properties from config and command line");
    let mut properties = SharedProperties::new(initial);
    let runner = JobRunner::new(vec![Arc::new(EnvironmentPropertyBridge::new())]);
    let job = ConnectionCheckJob::from_config(&config.job);

    info!(
        app = %config.app.name,
        env = %config.app.env,
        config = %config_path,
        listeners = ?runner.listener_names(),
        "Starting job"
    );

    let execution = runner.run(&job, &mut properties, &ProcessEnvironment).await;

    if let Ok(snapshot) = properties.snapshot() {
        let keys: Vec<&str> = snapshot.iter().map(|(k, _)| k).collect();
        debug!(keys = ?keys, "Properties after job");
    }

    if execution.is_success() {
        ExitCode::SUCCESS
    } else {
        error!(exit_status = %execution.exit_status, "Job did not complete");
        ExitCode::FAILURE
    }
}
