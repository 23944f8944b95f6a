//! # rsswitch-adapter-syslog
//!
//! [`CodeLogger`] implementation that sends each dispatched control code to
//! the local syslog daemon over its Unix datagram socket.
//!
//! ## Responsibilities
//! - Format an RFC 3164 message (facility `user`, severity `info`) whose
//!   body is exactly the code's digits
//! - Deliver it with one datagram per code, no connection kept; daemons
//!   listening on a stream socket get a NUL-terminated message instead
//! - Report socket failures so the use-case can refuse the write
//!
//! ## Dependency rule
//! Depends on `rsswitch-app` (for the port trait) and `rsswitch-domain`.

pub mod config;
pub mod error;

use std::io::{self, Write};
use std::os::unix::net::{UnixDatagram, UnixStream};
use std::path::{Path, PathBuf};

use rsswitch_app::ports::CodeLogger;
use rsswitch_domain::control_code::ControlCode;
use rsswitch_domain::error::SwitchError;

pub use config::SyslogConfig;
pub use error::SyslogError;

/// `LOG_USER` facility code.
const FACILITY_USER: u8 = 1;
/// `LOG_INFO` severity.
const SEVERITY_INFO: u8 = 6;

/// Sends control codes to a syslog datagram socket.
#[derive(Debug, Clone)]
pub struct SyslogLogger {
    socket: PathBuf,
    ident: String,
}

impl SyslogLogger {
    pub fn new(socket: impl Into<PathBuf>, ident: impl Into<String>) -> Self {
        Self {
            socket: socket.into(),
            ident: ident.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SyslogConfig) -> Self {
        Self::new(config.socket.clone(), config.ident.clone())
    }

    #[must_use]
    pub fn socket(&self) -> &Path {
        &self.socket
    }

    /// Render the datagram for one code, e.g. `<14>rsswitch[42]: 0051`.
    #[must_use]
    pub fn format_message(&self, code: &ControlCode) -> String {
        let priority = FACILITY_USER * 8 + SEVERITY_INFO;
        format!("<{priority}>{}[{}]: {code}", self.ident, std::process::id())
    }

    /// Send one code, as a datagram first and over a stream connection if
    /// the datagram is refused.
    ///
    /// # Errors
    ///
    /// Returns [`SyslogError::Socket`] when no local socket can be created and
    /// [`SyslogError::Send`] when the daemon socket is missing or refuses
    /// both transports. `Send` carries the datagram failure.
    pub fn send(&self, code: &ControlCode) -> Result<(), SyslogError> {
        let message = self.format_message(code);
        let sender = UnixDatagram::unbound().map_err(SyslogError::Socket)?;
        let Err(source) = sender.send_to(message.as_bytes(), &self.socket) else {
            return Ok(());
        };
        self.send_stream(&message).map_err(|stream_err| {
            tracing::debug!(error = %stream_err, "stream fallback to syslog failed");
            SyslogError::Send {
                path: self.socket.clone(),
                source,
            }
        })
    }

    /// Stream daemons split messages on NUL.
    fn send_stream(&self, message: &str) -> io::Result<()> {
        let mut stream = UnixStream::connect(&self.socket)?;
        stream.write_all(message.as_bytes())?;
        stream.write_all(b"\0")?;
        stream.flush()
    }
}

impl CodeLogger for SyslogLogger {
    fn log_code(&self, code: &ControlCode) -> Result<(), SwitchError> {
        self.send(code)?;
        tracing::debug!(socket = %self.socket.display(), %code, "control code sent to syslog");
        Ok(())
    }
}
