use thiserror::Error;

/// Validation errors for the lecture form.
///
/// The `Display` text is shown inline under the form, so it is written for
/// the user rather than for logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LectureValidationError {
    #[error("제목을 비워둘 수 없습니다.")]
    EmptyTitle,
    #[error("유효한 음수가 아닌 금액을 입력하세요.")]
    InvalidAmount(String),
    #[error("유효한 음수가 아닌 금액을 입력하세요.")]
    NegativeAmount,
}

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to deserialize value for key '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage backend error: {0}")]
    Backend(String),
}
