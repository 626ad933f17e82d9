use thiserror::Error;

/// Classified failure of a single acquisition.
///
/// The display strings are what the webview receives when a command rejects, so
/// each variant keeps a stable leading phrase callers can match on.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("File path, type, and name are required: {0}")]
    InvalidRequest(String),

    #[error("File does not exist at path: {path}")]
    NotFound { path: String },

    #[error("Unable to open content stream: {uri}: {reason}")]
    UnreadableSource { uri: String, reason: String },

    #[error("Failed to read file: {0}")]
    ReadFailed(String),
}

impl AcquireError {
    /// Stable code used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            AcquireError::InvalidRequest(_) => "invalid_request",
            AcquireError::NotFound { .. } => "not_found",
            AcquireError::UnreadableSource { .. } => "unreadable_source",
            AcquireError::ReadFailed(_) => "read_failed",
        }
    }
}

impl From<std::io::Error> for AcquireError {
    fn from(e: std::io::Error) -> Self {
        AcquireError::ReadFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AcquireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_stable_prefixes() {
        let err = AcquireError::InvalidRequest("name".into());
        assert!(err.to_string().starts_with("File path, type, and name are required"));

        let err = AcquireError::NotFound {
            path: "/tmp/missing".into(),
        };
        assert_eq!(err.to_string(), "File does not exist at path: /tmp/missing");

        let err = AcquireError::UnreadableSource {
            uri: "content://media/1".into(),
            reason: "denied".into(),
        };
        assert!(err
            .to_string()
            .starts_with("Unable to open content stream: content://media/1"));

        let err: AcquireError = std::io::Error::other("boom").into();
        assert_eq!(err.kind(), "read_failed");
        assert_eq!(err.to_string(), "Failed to read file: boom");
    }
}
