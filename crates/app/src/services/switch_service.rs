//! Switch service: turns a submitted form into a dispatched control code.

use rsswitch_domain::control_code::{ControlCode, MAX_SOCKET_DIGIT};
use rsswitch_domain::error::SwitchError;
use rsswitch_domain::form::FormSubmission;
use rsswitch_domain::selection::Selection;

use crate::ports::{CodeLogger, DeviceWriter};

/// What a successful request resolved to and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub selection: Selection,
    pub code: ControlCode,
}

/// Application service handling one socket switch request.
///
/// The logger and the device are independent sinks with no locking or
/// rollback: the code is logged first, then written, and the first failure
/// stops the request. Concurrent requests race on the device and the last
/// writer wins.
pub struct SwitchService<D, L> {
    device: D,
    logger: L,
    max_socket: u8,
}

impl<D: DeviceWriter, L: CodeLogger> SwitchService<D, L> {
    /// Create a new service accepting every single-digit socket number.
    pub fn new(device: D, logger: L) -> Self {
        Self {
            device,
            logger,
            max_socket: MAX_SOCKET_DIGIT,
        }
    }

    /// Restrict accepted socket numbers to `0..=max_socket`.
    #[must_use]
    pub fn with_max_socket(mut self, max_socket: u8) -> Self {
        self.max_socket = max_socket.min(MAX_SOCKET_DIGIT);
        self
    }

    #[must_use]
    pub fn max_socket(&self) -> u8 {
        self.max_socket
    }

    /// Resolve, encode, log, and write the code for one form submission.
    ///
    /// Nothing is logged or written unless the form resolves to a complete
    /// control code.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Selection`] for an unusable form,
    /// [`SwitchError::LogEmission`] when logging fails (the device is left
    /// untouched), or [`SwitchError::DeviceWrite`] when the write fails.
    #[tracing::instrument(skip_all, fields(field_count = form.len()))]
    pub fn handle(&self, form: &FormSubmission) -> Result<SwitchOutcome, SwitchError> {
        let selection = Selection::resolve(form)?;
        let code = ControlCode::encode(&selection, self.max_socket)?;

        self.logger.log_code(&code)?;
        self.device.write_code(&code)?;

        tracing::info!(
            %code,
            group = %selection.group,
            socket = code.socket(),
            state = %code.state(),
            "control code dispatched"
        );
        Ok(SwitchOutcome { selection, code })
    }
}
