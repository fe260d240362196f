use log::{debug, error, info, warn};

use crate::config::Config;
use crate::core::types::{Outcome, ProbeResult, RunReport};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, actual_concurrency: usize) {
    let use_head_requests = config.use_head_requests.unwrap_or(true);
    let user_agent = config.user_agent.as_deref().unwrap_or("(default)");

    info!("Configuration: concurrency={actual_concurrency}, head_requests={use_head_requests}");
    info!("HTTP: user_agent={user_agent}");
}

/// Log individual probe results for debugging
pub fn log_probe_result(result: &ProbeResult) {
    match result.outcome {
        Outcome::Up => debug!("✓ {} -> {}", result.site, result.detail),
        Outcome::Down => debug!("✗ {} -> {}", result.site, result.detail),
    }
}

/// Log run completion
pub fn log_run_complete(report: &RunReport, duration_ms: u128) {
    if report.down == 0 {
        info!(
            "✅ Run complete: {}/{} sites up, {} invalid line(s) ({}ms)",
            report.up,
            report.probed(),
            report.invalid,
            duration_ms
        );
    } else {
        warn!(
            "❌ Run complete: {}/{} sites up, {} down, {} invalid line(s) ({}ms)",
            report.up,
            report.probed(),
            report.down,
            report.invalid,
            duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
