//! Control code: the four-digit command written to the device file.
//!
//! Layout is one decimal digit per field, in order: device type, group,
//! socket, state. The driver reads the digits positionally, so every field
//! must fit a single digit.

use std::fmt;

use crate::error::{InvalidSelectionReason, SelectionError};
use crate::selection::{Group, Selection, SocketSlot, StateSlot, SwitchState};

/// Only device type the controller drives.
pub const DEVICE_TYPE: u8 = 0;

/// Highest socket number a single digit can carry.
pub const MAX_SOCKET_DIGIT: u8 = 9;

/// A fully resolved command for the socket driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCode {
    group: Group,
    socket: u8,
    state: SwitchState,
}

impl ControlCode {
    /// Encode a selection, accepting sockets `0..=max_socket`.
    ///
    /// `max_socket` is clamped to [`MAX_SOCKET_DIGIT`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidSelection`] when the socket was not
    /// entered, the state was not set, or the socket is out of range.
    pub fn encode(selection: &Selection, max_socket: u8) -> Result<Self, SelectionError> {
        let max = max_socket.min(MAX_SOCKET_DIGIT);
        let socket = match &selection.socket {
            SocketSlot::Entered(socket) => u8::try_from(*socket)
                .ok()
                .filter(|socket| *socket <= max)
                .ok_or_else(|| InvalidSelectionReason::SocketOutOfRange {
                    socket: socket.to_string(),
                    max,
                })?,
            SocketSlot::Overflowed(raw) => {
                return Err(InvalidSelectionReason::SocketOutOfRange {
                    socket: raw.clone(),
                    max,
                }
                .into());
            }
            SocketSlot::NotEntered => return Err(InvalidSelectionReason::SocketNotEntered.into()),
        };
        let StateSlot::Set(state) = selection.state else {
            return Err(InvalidSelectionReason::StateNotSet.into());
        };

        Ok(Self {
            group: selection.group,
            socket,
            state,
        })
    }

    #[must_use]
    pub fn group(&self) -> Group {
        self.group
    }

    #[must_use]
    pub fn socket(&self) -> u8 {
        self.socket
    }

    #[must_use]
    pub fn state(&self) -> SwitchState {
        self.state
    }

    /// The four ASCII digits, without any terminator.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            DEVICE_TYPE,
            self.group.digit(),
            self.socket,
            self.state.digit(),
        ]
        .map(|digit| b'0' + digit)
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{}", char::from(byte))?;
        }
        Ok(())
    }
}
