use std::path::PathBuf;

use thiserror::Error;

pub type OptionsResult<T> = Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("javascript parse error at byte {offset}: {message}")]
    JsParse { message: String, offset: usize },

    #[error("unsupported javascript construct: {0}")]
    UnsupportedJs(String),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OptionsError {
    pub(crate) fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}
