use crate::filters::Source;
use thiserror::Error;

/// Why an API filter could not be read into its form shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The field map names a field but carries no `{ operation: value }` entry.
    MissingOperation { field: String },
    /// The operation key is not part of the operator taxonomy.
    UnknownOperation { field: String, operation: String },
    /// The value does not decode into any filter value shape.
    InvalidValue {
        field: String,
        operation: String,
        message: String,
    },
    /// None of the known source keys is present.
    UnrecognizedSource { keys: Vec<String> },
    /// A map that must hold one entry holds several.
    NotSingleton { keys: Vec<String> },
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::MissingOperation { field } => {
                write!(f, "field '{}' has no operation", field)
            }
            MalformedReason::UnknownOperation { field, operation } => {
                write!(f, "field '{}' uses unknown operation '{}'", field, operation)
            }
            MalformedReason::InvalidValue {
                field,
                operation,
                message,
            } => write!(
                f,
                "field '{}' has an invalid value for '{}': {}",
                field, operation, message
            ),
            MalformedReason::UnrecognizedSource { keys } => {
                write!(f, "no recognized source key among [{}]", keys.join(", "))
            }
            MalformedReason::NotSingleton { keys } => {
                write!(f, "expected a single entry, found [{}]", keys.join(", "))
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum SmartListError {
    #[error("Empty filter: no field map under source '{origin}'")]
    EmptyFilter { origin: Source },

    #[error("Malformed filter: {0}")]
    MalformedFilter(MalformedReason),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<MalformedReason> for SmartListError {
    fn from(reason: MalformedReason) -> Self {
        SmartListError::MalformedFilter(reason)
    }
}

pub type Result<T> = std::result::Result<T, SmartListError>;
