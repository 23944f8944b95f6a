//! Device file configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Where control codes go and which socket numbers the hardware accepts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceFileConfig {
    /// Path of the character device exposed by the driver.
    pub path: PathBuf,
    /// Highest socket number accepted (at most 9).
    pub max_socket: u8,
    /// Create the file when it does not exist. Off by default so a missing
    /// driver surfaces as a write error instead of a stray regular file.
    pub create_missing: bool,
}

impl Default for DeviceFileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/dev/rsswitch"),
            max_socket: 9,
            create_missing: false,
        }
    }
}
