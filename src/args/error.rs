use thiserror::Error;

/// Errors in how the program was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no URL or mountpoint given")]
    NoArguments,

    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' is ambiguous")]
    AmbiguousOption(String),

    #[error("option '{0}' requires an argument")]
    MissingValue(String),

    #[error("option '{0}' doesn't allow an argument")]
    UnexpectedValue(String),

    #[error("invalid number '{value}' for option '{flag}'")]
    InvalidNumber { flag: String, value: String },
}
