//! Error types shared across Juzcast crates.

use std::path::PathBuf;

/// Top-level error type for Juzcast operations.
#[derive(Debug, thiserror::Error)]
pub enum JuzcastError {
    #[error("Timeline error: {message}")]
    Timeline { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Render command failed for ayah {verse_key} (exit code {code:?})")]
    UnitRenderFailed {
        verse_key: String,
        code: Option<i32>,
    },

    #[error("Batch render command failed (exit code {code:?})")]
    BatchRenderFailed { code: Option<i32> },

    #[error("Concat command failed (exit code {code:?})")]
    ConcatFailed { code: Option<i32> },

    #[error("Renderer not available: {name}")]
    RendererUnavailable { name: String },

    #[error("Interrupted")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using JuzcastError.
pub type JuzcastResult<T> = Result<T, JuzcastError>;

/// Conventional exit code for "terminated by interrupt".
pub const EXIT_INTERRUPTED: i32 = 130;

impl JuzcastError {
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Map an error to the process exit code contract.
    ///
    /// Interruption and per-ayah render failures both surface as 130 so a
    /// re-run is always the right response; a batch child's own exit code
    /// is passed through when known.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled => EXIT_INTERRUPTED,
            Self::UnitRenderFailed { .. } => EXIT_INTERRUPTED,
            Self::BatchRenderFailed { code } => code.unwrap_or(EXIT_INTERRUPTED),
            Self::ConcatFailed { code } => code.unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_maps_to_130() {
        assert_eq!(JuzcastError::Cancelled.exit_code(), 130);
    }

    #[test]
    fn test_unit_failure_maps_to_130() {
        let err = JuzcastError::UnitRenderFailed {
            verse_key: "2:255".to_string(),
            code: Some(1),
        };
        assert_eq!(err.exit_code(), 130);

        // Signal-killed child (no code) is treated the same.
        let err = JuzcastError::UnitRenderFailed {
            verse_key: "2:255".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 130);
    }

    #[test]
    fn test_batch_failure_passes_status_through() {
        let err = JuzcastError::BatchRenderFailed { code: Some(7) };
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_batch_failure_without_status_maps_to_130() {
        let err = JuzcastError::BatchRenderFailed { code: None };
        assert_eq!(err.exit_code(), 130);
    }

    #[test]
    fn test_data_errors_map_to_1() {
        assert_eq!(JuzcastError::timeline("missing segments").exit_code(), 1);
        assert_eq!(
            JuzcastError::FileNotFound {
                path: "timelines/juz_1.json".into()
            }
            .exit_code(),
            1
        );
    }
}
