//! Selection: the group, socket, and state picked in a submitted form.
//!
//! Fields that were not provided stay visible as [`SocketSlot::NotEntered`]
//! and [`StateSlot::NotSet`] so the confirmation page can report them, but a
//! selection holding either marker can never be encoded.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::SelectionError;
use crate::form::FormSubmission;

/// Selector field, companion socket field, and group, in lookup order.
const SELECTORS: [(&str, &str, Group); 2] = [
    ("sock_group0", "group0", Group::Zero),
    ("sock_group1", "group1", Group::One),
];

/// Logical bank of remote sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Zero,
    One,
}

impl Group {
    /// Digit used for this group in the control code.
    #[must_use]
    pub fn digit(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// Requested socket power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchState {
    Off,
    On,
}

impl SwitchState {
    /// Look up a state by its form value. Matching is exact.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Self::Off),
            "on" => Some(Self::On),
            _ => None,
        }
    }

    /// Digit used for this state in the control code.
    #[must_use]
    pub fn digit(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::On => f.write_str("on"),
        }
    }
}

/// Socket number as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketSlot {
    /// A number was entered. Range is checked only when encoding.
    Entered(i64),
    /// Digits too long for any integer type, kept as typed.
    Overflowed(String),
    /// The field was missing, blank, or not a number.
    NotEntered,
}

impl SocketSlot {
    fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim) else {
            return Self::NotEntered;
        };
        match raw.parse::<i64>() {
            Ok(socket) => Self::Entered(socket),
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                Self::Overflowed(raw.to_string())
            }
            Err(_) => Self::NotEntered,
        }
    }
}

impl fmt::Display for SocketSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entered(socket) => write!(f, "{socket}"),
            Self::Overflowed(raw) => f.write_str(raw),
            Self::NotEntered => f.write_str("Not entered"),
        }
    }
}

/// State as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSlot {
    Set(SwitchState),
    /// The selector field held only whitespace.
    NotSet,
}

impl fmt::Display for StateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(state) => write!(f, "{}", state.digit()),
            Self::NotSet => f.write_str("Not set"),
        }
    }
}

/// Group, socket, and state resolved from one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub group: Group,
    pub socket: SocketSlot,
    pub state: StateSlot,
}

impl Selection {
    /// Resolve a form submission.
    ///
    /// `sock_group0` is checked before `sock_group1`; the first one submitted
    /// with a value picks the group, and that value is the requested state.
    /// Fields submitted empty never reach the form, so `sock_group0=` falls
    /// through to `sock_group1`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MissingSelector`] when neither selector is
    /// present, and [`SelectionError::UnknownState`] when the selector holds
    /// anything but `off`, `on`, or whitespace.
    pub fn resolve(form: &FormSubmission) -> Result<Self, SelectionError> {
        let (selector, socket_field, group) = SELECTORS
            .into_iter()
            .find(|(selector, _, _)| form.contains(selector))
            .ok_or(SelectionError::MissingSelector)?;

        let socket = SocketSlot::parse(form.get_non_blank(socket_field));
        let state = match form.get_non_blank(selector) {
            None => StateSlot::NotSet,
            Some(name) => SwitchState::from_name(name)
                .map(StateSlot::Set)
                .ok_or_else(|| SelectionError::UnknownState(name.to_string()))?,
        };

        Ok(Self {
            group,
            socket,
            state,
        })
    }
}
