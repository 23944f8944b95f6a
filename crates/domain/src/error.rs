//! Error types shared across the workspace.
//!
//! [`SelectionError`] is caused by the submitted form. [`SwitchError`] wraps
//! it together with the two side-effect failures so callers can tell a bad
//! request from a failed dispatch.

/// Boxed error produced by an adapter behind a port.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error returned by the switch use-case.
#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    /// The form did not describe a usable selection.
    #[error("invalid form submission")]
    Selection(#[from] SelectionError),

    /// The control code could not be sent to the log sink.
    #[error("failed to emit control code to the system log")]
    LogEmission(#[source] BoxError),

    /// The control code could not be written to the device file.
    #[error("failed to write control code to the device")]
    DeviceWrite(#[source] BoxError),
}

impl SwitchError {
    /// Whether the request itself was at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Selection(_))
    }

    /// The selection error, when this is one.
    #[must_use]
    pub fn as_selection(&self) -> Option<&SelectionError> {
        match self {
            Self::Selection(err) => Some(err),
            Self::LogEmission(_) | Self::DeviceWrite(_) => None,
        }
    }
}

/// Why a submitted form could not be turned into a control code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Neither `sock_group0` nor `sock_group1` was submitted.
    #[error("no socket group selected (expected sock_group0 or sock_group1)")]
    MissingSelector,

    /// The selector carried something other than `off` or `on`.
    #[error("unknown socket state {0:?} (expected \"off\" or \"on\")")]
    UnknownState(String),

    /// The selection is incomplete or does not fit the control code.
    #[error("invalid selection")]
    InvalidSelection(#[source] InvalidSelectionReason),
}

/// Details about an [`SelectionError::InvalidSelection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelectionReason {
    /// The socket number field was missing, blank, or not a number.
    #[error("socket number not entered")]
    SocketNotEntered,

    /// The state field was blank.
    #[error("socket state not set")]
    StateNotSet,

    /// The socket number needs more than one digit or exceeds the limit.
    #[error("socket {socket} is out of range (0..={max})")]
    SocketOutOfRange {
        /// The submitted socket number, as entered.
        socket: String,
        /// Highest accepted socket number.
        max: u8,
    },
}

impl From<InvalidSelectionReason> for SelectionError {
    fn from(reason: InvalidSelectionReason) -> Self {
        Self::InvalidSelection(reason)
    }
}
