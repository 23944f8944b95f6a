//! In-process code logger backed by `tracing`.

use rsswitch_domain::control_code::ControlCode;
use rsswitch_domain::error::SwitchError;

use crate::ports::CodeLogger;

/// Logs control codes as `tracing` events under the `rsswitch::code` target.
///
/// Used when no system log is configured. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCodeLogger;

impl CodeLogger for TracingCodeLogger {
    fn log_code(&self, code: &ControlCode) -> Result<(), SwitchError> {
        tracing::info!(target: "rsswitch::code", "{code}");
        Ok(())
    }
}
