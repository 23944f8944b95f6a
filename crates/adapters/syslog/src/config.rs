//! Syslog configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Local syslog socket settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyslogConfig {
    /// Send codes to syslog. When off, codes are only traced.
    pub enabled: bool,
    /// Datagram socket of the local syslog daemon.
    pub socket: PathBuf,
    /// Program name put in front of each message.
    pub ident: String,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            socket: PathBuf::from("/dev/log"),
            ident: "rsswitch".to_string(),
        }
    }
}
