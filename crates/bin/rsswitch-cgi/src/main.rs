//! # rsswitch-cgi: remote socket switch CGI program
//!
//! Composition root that wires the adapters together and answers exactly one
//! CGI request.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` on standard error (standard output carries the
//!   response)
//! - Construct the device writer and code logger (adapters)
//! - Construct the switch service, injecting them via port traits
//! - Decode the request, run it, write the response
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::io;
use std::process::ExitCode;

use rsswitch_adapter_cgi::{CgiRequest, page};
use rsswitch_adapter_device_file::DeviceFile;
use rsswitch_adapter_syslog::{SyslogConfig, SyslogLogger};
use rsswitch_app::code_log::TracingCodeLogger;
use rsswitch_app::ports::CodeLogger;
use rsswitch_app::services::switch_service::SwitchService;
use rsswitch_domain::control_code::ControlCode;
use rsswitch_domain::error::SwitchError;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// Code logger picked by configuration.
enum CodeLog {
    Syslog(SyslogLogger),
    Tracing(TracingCodeLogger),
}

impl CodeLog {
    fn from_config(config: &SyslogConfig) -> Self {
        if config.enabled {
            Self::Syslog(SyslogLogger::from_config(config))
        } else {
            Self::Tracing(TracingCodeLogger)
        }
    }
}

impl CodeLogger for CodeLog {
    fn log_code(&self, code: &ControlCode) -> Result<(), SwitchError> {
        match self {
            Self::Syslog(logger) => logger.log_code(code),
            Self::Tracing(logger) => logger.log_code(code),
        }
    }
}

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&LoggingConfig::default().filter);
            tracing::error!(error = %err, causes = ?page::source_chain(&err), "failed to load configuration");
            // Best effort: the server still gets a response to show.
            let _ = page::internal_error(&err).write_to(io::stdout().lock());
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.filter);

    let device = DeviceFile::from_config(&config.device);
    let logger = CodeLog::from_config(&config.syslog);
    tracing::debug!(
        device = %device.path().display(),
        syslog = config.syslog.enabled,
        max_socket = config.device.max_socket,
        "rsswitch-cgi configured"
    );
    let service = SwitchService::new(device, logger).with_max_socket(config.device.max_socket);

    let request = CgiRequest::from_env();
    let response = rsswitch_adapter_cgi::handle(&service, &request, io::stdin().lock());

    if let Err(err) = response.write_to(io::stdout().lock()) {
        tracing::error!(error = %err, "failed to write response");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}
