use std::sync::Arc;
use thiserror::Error;

/// The raw source text could not be turned into an option list.
///
/// Loading fails closed: when one of these is produced the option list stays empty and the
/// builder refuses edits until a load succeeds.
#[derive(Error, Debug, Clone)]
pub enum FormatError {
    #[error("\"raw\" JSON value was invalid: {0}")]
    Json(#[source] Arc<serde_json::Error>),

    #[error("values in \"raw\" JSON must be either string or numbers. \"{found}\" is not allowed (key \"{key}\")")]
    UnsupportedValueType { key: String, found: &'static str },

    #[error("\"raw\" JSON must be an object mapping values to labels, found {found}")]
    NotAnObject { found: &'static str },

    #[error("segment {segment} of the tilda/caret string has more than one '^'")]
    Delimited { segment: usize },
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Json(Arc::new(err))
    }
}

/// A collaborator field required by the option builder is missing or of the wrong kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "option builder expects \"controller\" to name a select field whose choices include \
         \"select\", \"radio\" or \"checkbox\" (id \"{id}\")"
    )]
    Controller { id: String },

    #[error(
        "option builder expects \"label\" to name a text input used as the heading of the \
         example fields (id \"{id}\")"
    )]
    Label { id: String },

    #[error(
        "option builder expects \"source\" to name a text input holding the raw option data \
         and receiving the builder's output (id \"{id}\")"
    )]
    Source { id: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub type Result<T> = std::result::Result<T, Error>;
