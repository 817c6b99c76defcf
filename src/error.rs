use thiserror::Error;

/// ツール呼び出しの失敗。いずれも呼び出し側で回復可能。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("Argument '{parameter}' must be {expected}, got {found}")]
    TypeMismatch {
        parameter: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ToolError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn missing_argument(parameter: &str) -> Self {
        Self::InvalidArgument(format!("Missing required argument '{}'", parameter))
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
