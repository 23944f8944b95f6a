//! Device port: delivery of control codes to the socket driver.

use rsswitch_domain::control_code::ControlCode;
use rsswitch_domain::error::SwitchError;

/// Sink that hands a [`ControlCode`] to the hardware.
///
/// Each call is a single, complete command; implementations must not
/// append to earlier writes.
pub trait DeviceWriter {
    /// Deliver the code.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::DeviceWrite`] when the device rejects or cannot
    /// receive the code.
    fn write_code(&self, code: &ControlCode) -> Result<(), SwitchError>;
}

impl<T: DeviceWriter + ?Sized> DeviceWriter for &T {
    fn write_code(&self, code: &ControlCode) -> Result<(), SwitchError> {
        (**self).write_code(code)
    }
}
