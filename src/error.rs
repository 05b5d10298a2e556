use std::path::PathBuf;

/// Errors that abort a report build.
///
/// Recoverable conditions (missing screenshot directory, screenshots that
/// match no step) never surface here; they are logged and the build carries
/// on with degraded data.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Results document could not be read from disk
    #[error("cannot read test results at {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Results document is not valid JSON or does not have the expected shape
    #[error("malformed test results at {}: {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A report artifact (or its directory) could not be written
    #[error("cannot write {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an output document failed
    #[error("cannot serialize {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// Whether the failure happened while reading the results document.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReportError::InputUnreadable { .. } | ReportError::InputMalformed { .. }
        )
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
