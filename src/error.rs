use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("input not found: {0}")]
    InputNotFound(String),

    #[error("input is empty: {0}")]
    EmptyInput(String),

    #[error("text too short: at least {min} characters required (found {found})")]
    TextTooShort { min: usize, found: usize },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid CEFR level: {0}")]
    InvalidLevel(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssessError>;
