//! Syslog adapter error types.

use std::path::PathBuf;

use rsswitch_domain::error::SwitchError;

/// Errors raised while talking to the syslog daemon.
#[derive(Debug, thiserror::Error)]
pub enum SyslogError {
    /// No local datagram socket could be created.
    #[error("failed to create syslog socket")]
    Socket(#[source] std::io::Error),

    /// The daemon socket refused the message.
    #[error("failed to send to syslog at {}", path.display())]
    Send {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SyslogError> for SwitchError {
    fn from(err: SyslogError) -> Self {
        Self::LogEmission(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_socket_path_on_send_error() {
        let err = SyslogError::Send {
            path: PathBuf::from("/dev/log"),
            source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
        };
        assert_eq!(err.to_string(), "failed to send to syslog at /dev/log");
    }

    #[test]
    fn should_convert_to_log_emission_error() {
        let err: SwitchError =
            SyslogError::Socket(std::io::Error::from(std::io::ErrorKind::Other)).into();
        assert!(matches!(err, SwitchError::LogEmission(_)));
    }
}
