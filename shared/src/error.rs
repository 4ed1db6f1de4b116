use thiserror::Error;

/// Rejected component properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropError {
    #[error("malformed properties: {0}")]
    Malformed(String),

    #[error("n_clicks_timestamp must be -1 or an epoch timestamp in ms, got {0}")]
    InvalidTimestamp(i64),

    #[error("unknown spinner type `{0}` (expected `border` or `grow`)")]
    UnknownSpinnerType(String),

    #[error("unknown spinner size `{0}` (expected `sm`, `md` or `lg`)")]
    UnknownSpinnerSize(String),
}

impl From<serde_json::Error> for PropError {
    fn from(err: serde_json::Error) -> Self {
        PropError::Malformed(err.to_string())
    }
}
