//! Error taxonomy shared by every API call

use reqwest::StatusCode;
use thiserror::Error;

/// Longest response body excerpt kept inside an error message.
const BODY_EXCERPT_LEN: usize = 512;

/// No session is available, or the server rejected the one we sent.
///
/// Kept as its own type so that boolean-sentinel calls, which collapse every
/// other failure into `false`, can still surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not authenticated: log in first")]
pub struct Unauthenticated;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Unauthenticated(#[from] Unauthenticated),

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request rejected with {status}: {body}")]
    ClientError { status: StatusCode, body: String },

    #[error("resource not found")]
    NotFound,

    /// 5xx, or any other status the server should not have produced.
    #[error("server failure {status}: {body}")]
    ServerFailure { status: StatusCode, body: String },

    #[error("response body could not be decoded: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Map a non-success status and its body to the matching variant.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let body = excerpt(body);
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthenticated(Unauthenticated),
            StatusCode::NOT_FOUND => ApiError::NotFound,
            s if s.is_client_error() => ApiError::ClientError { status: s, body },
            s => ApiError::ServerFailure { status: s, body },
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated(_))
    }

    /// The HTTP status behind this error, when there was a response at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthenticated(_) => None,
            ApiError::Transport(e) => e.status(),
            ApiError::ClientError { status, .. } | ApiError::ServerFailure { status, .. } => {
                Some(*status)
            }
            ApiError::NotFound => Some(StatusCode::NOT_FOUND),
            ApiError::InvalidPayload(_) | ApiError::InvalidRequest(_) => None,
        }
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_taxonomy() {
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, b"").is_unauthenticated());
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, b"gone"),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, b"{\"detail\":\"bad ids\"}"),
            ApiError::ClientError { status: StatusCode::UNPROCESSABLE_ENTITY, ref body } if body.contains("bad ids")
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, b""),
            ApiError::ServerFailure { status: StatusCode::BAD_GATEWAY, .. }
        ));
    }

    #[test]
    fn long_bodies_are_cut() {
        let body = "x".repeat(BODY_EXCERPT_LEN * 2);
        let ApiError::ServerFailure { body, .. } =
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, body.as_bytes())
        else {
            panic!("expected a server failure");
        };
        assert_eq!(body.chars().count(), BODY_EXCERPT_LEN + 1);
        assert!(body.ends_with('…'));
    }
}
