//! # rsswitch-adapter-device-file
//!
//! [`DeviceWriter`] implementation that writes each control code to a file,
//! normally the `/dev/rsswitch` character device registered by the kernel
//! driver.
//!
//! ## Responsibilities
//! - Open the device in truncating write mode once per code
//! - Write exactly the four ASCII digits, no terminator
//! - Report open and write failures with the offending path
//!
//! ## Dependency rule
//! Depends on `rsswitch-app` (for the port trait) and `rsswitch-domain`.
//! The `app` and `domain` crates must never reference this adapter.

pub mod config;
pub mod error;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use rsswitch_app::ports::DeviceWriter;
use rsswitch_domain::control_code::ControlCode;
use rsswitch_domain::error::SwitchError;

pub use config::DeviceFileConfig;
pub use error::DeviceFileError;

/// Writes control codes to a file path.
///
/// There is no locking: two processes writing at once race, and whichever
/// write lands last is what the driver acts on.
#[derive(Debug, Clone)]
pub struct DeviceFile {
    path: PathBuf,
    create_missing: bool,
}

impl DeviceFile {
    /// Target an existing device file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_missing: false,
        }
    }

    /// Build from configuration.
    #[must_use]
    pub fn from_config(config: &DeviceFileConfig) -> Self {
        Self::new(config.path.clone()).create_missing(config.create_missing)
    }

    /// Whether a missing file should be created rather than reported.
    #[must_use]
    pub fn create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one code, replacing whatever the file held before.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceFileError::Open`] or [`DeviceFileError::Write`].
    pub fn write(&self, code: &ControlCode) -> Result<(), DeviceFileError> {
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(self.create_missing)
            .open(&self.path)
            .map_err(|source| DeviceFileError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(&code.to_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| DeviceFileError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), %code, "control code written");
        Ok(())
    }
}

impl DeviceWriter for DeviceFile {
    fn write_code(&self, code: &ControlCode) -> Result<(), SwitchError> {
        self.write(code).map_err(SwitchError::from)
    }
}
