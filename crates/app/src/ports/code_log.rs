//! Code log port: audit trail of dispatched control codes.

use rsswitch_domain::control_code::ControlCode;
use rsswitch_domain::error::SwitchError;

/// Records each control code before it is sent to the device.
pub trait CodeLogger {
    /// Emit one log message carrying exactly the code's digits.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::LogEmission`] when the sink is unreachable.
    fn log_code(&self, code: &ControlCode) -> Result<(), SwitchError>;
}

impl<T: CodeLogger + ?Sized> CodeLogger for &T {
    fn log_code(&self, code: &ControlCode) -> Result<(), SwitchError> {
        (**self).log_code(code)
    }
}
