use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Gesture capture and export errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// A completed trajectory could not be serialized.
    #[error("Trajectory serialization failed: {source} {location}")]
    Serialization {
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The export sink rejected or could not deliver a completed gesture.
    #[error("Gesture export failed: {reason} {location}")]
    ExportFailed {
        /// Description of the delivery failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl RecorderError {
    /// Build an [`RecorderError::ExportFailed`] located at the caller.
    #[track_caller]
    pub fn export_failed(reason: impl Into<String>) -> Self {
        RecorderError::ExportFailed {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RecorderError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        RecorderError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
