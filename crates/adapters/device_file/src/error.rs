//! Device file adapter error types.

use std::path::PathBuf;

use rsswitch_domain::error::SwitchError;

/// Errors raised while writing to the device file.
#[derive(Debug, thiserror::Error)]
pub enum DeviceFileError {
    /// The device could not be opened for writing.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The device was opened but rejected the write.
    #[error("failed to write to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<DeviceFileError> for SwitchError {
    fn from(err: DeviceFileError) -> Self {
        Self::DeviceWrite(Box::new(err))
    }
}
