//! Error types for the connector

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Failures raised while acquiring a token, searching, or validating credentials
#[derive(Debug, Error)]
pub enum GraphError {
    /// The identity provider returned no access token
    #[error("Could not obtain access token: {message}")]
    TokenAcquisition { message: String },

    /// The search API answered with a non-success status
    #[error("Search request failed with HTTP {status}: {body}")]
    SearchRequest { status: u16, body: String },

    /// The validation search failed; `cause` is the underlying failure's text
    #[error("Credential validation failed: {cause}")]
    CredentialValidation { cause: String },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid credential: {0} must be a string")]
    InvalidCredential(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Wrap any failure into the single validation error kind
    pub fn validation(cause: &GraphError) -> Self {
        Self::CredentialValidation {
            cause: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_cause_text() {
        let inner = GraphError::SearchRequest {
            status: 401,
            body: "InvalidAuthenticationToken".to_string(),
        };
        let wrapped = GraphError::validation(&inner);

        match wrapped {
            GraphError::CredentialValidation { ref cause } => {
                assert!(cause.contains("401"));
                assert!(cause.contains("InvalidAuthenticationToken"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
