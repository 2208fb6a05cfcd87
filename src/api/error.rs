use thiserror::Error;

/// Failures an API call can surface before the sentinel layer absorbs them.
///
/// Variants carry enough of the response to diagnose a failure from the
/// logs, since the sentinel layer hides it from the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An authenticated call was attempted with no session in the store.
    #[error("no credential in the session store")]
    MissingCredential,

    #[error("unauthorized (401) - the token may have expired server-side")]
    Unauthorized,

    #[error("access denied (403): {0}")]
    AccessDenied(String),

    #[error("not found (404): {0}")]
    NotFound(String),

    #[error("rate limited (429)")]
    RateLimited,

    #[error("server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Unexpected status or a 2xx body that did not parse.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Cap on how much of a response body gets carried into an error message.
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let body = truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(body),
            404 => ApiError::NotFound(body),
            429 => ApiError::RateLimited,
            code @ 500..=599 => ApiError::ServerError { status: code, body },
            _ => ApiError::InvalidResponse(format!("unexpected status {status}: {body}")),
        }
    }
}

// Bodies can be arbitrarily large error pages; keep log lines bounded.
// Cuts on a char boundary so multi-byte text cannot panic the slice.
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut cut = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... ({} bytes total)", &body[..cut], body.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_statuses_to_variants() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "missing"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream down"),
            ApiError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, ""),
            ApiError::InvalidResponse(_)
        ));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let msg = err.to_string();
        assert!(msg.len() < body.len());
        assert!(msg.contains("bytes total"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(600);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        // Display must not panic and must still carry the size.
        assert!(err.to_string().contains("1200 bytes total"));
    }
}
