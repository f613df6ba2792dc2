//! HTTP API Client
//!
//! Functions for communicating with the ToneShift REST API.

use gloo_net::http::Request;

/// Backend base URL. The two endpoints under it are the only external
/// interfaces of the application.
pub const API_BASE: &str = "https://toneshift-backend.onrender.com";

// ============ Request/Response Types ============

#[derive(Debug, serde::Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, serde::Serialize)]
pub struct RewriteRequest {
    pub content: String,
    pub tone: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    pub rewritten_content: String,
}

// ============ Errors ============

/// Failure modes of the login call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The backend rejected the credentials (any non-2xx status).
    InvalidCredentials,
    /// The request never completed.
    Network(String),
}

/// Failure modes of the rewrite call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// 401/403: the stored token is no longer accepted.
    SessionExpired,
    /// Any other failure: non-auth status, transport error, malformed body.
    Failed(String),
}

/// Whether a status code means the session token is no longer valid.
pub fn is_auth_failure(status: u16) -> bool {
    matches!(status, 401 | 403)
}

// ============ API Functions ============

/// Log in with email and password.
///
/// On success the backend responds with the session token as plain text.
pub async fn login(email: &str, password: &str) -> Result<String, LoginError> {
    let response = Request::post(&format!("{}/auth/login", API_BASE))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| LoginError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| LoginError::Network(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(LoginError::InvalidCredentials);
    }

    response
        .text()
        .await
        .map_err(|e| LoginError::Network(format!("Parse error: {}", e)))
}

/// Rewrite `content` in the requested tone.
///
/// Sends the session token as a bearer credential. A 401/403 response means
/// the token is stale and the caller must drop the session.
pub async fn rewrite(token: &str, content: &str, tone: &str) -> Result<String, RewriteError> {
    let response = Request::post(&format!("{}/ai/rewrite", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&RewriteRequest {
            content: content.to_string(),
            tone: tone.to_string(),
        })
        .map_err(|e| RewriteError::Failed(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| RewriteError::Failed(format!("Network error: {}", e)))?;

    if !response.ok() {
        if is_auth_failure(response.status()) {
            return Err(RewriteError::SessionExpired);
        }
        return Err(RewriteError::Failed(format!(
            "Rewrite failed with status {}",
            response.status()
        )));
    }

    let result: RewriteResponse = response
        .json()
        .await
        .map_err(|e| RewriteError::Failed(format!("Parse error: {}", e)))?;

    Ok(result.rewritten_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_statuses() {
        assert!(is_auth_failure(401));
        assert!(is_auth_failure(403));
        assert!(!is_auth_failure(400));
        assert!(!is_auth_failure(404));
        assert!(!is_auth_failure(500));
        assert!(!is_auth_failure(200));
    }

    #[test]
    fn test_rewrite_request_wire_format() {
        let body = serde_json::to_value(RewriteRequest {
            content: "See you tomorrow".to_string(),
            tone: "Casual".to_string(),
        })
        .unwrap();
        assert_eq!(body["content"], "See you tomorrow");
        assert_eq!(body["tone"], "Casual");
    }

    #[test]
    fn test_rewrite_response_is_camel_case() {
        let parsed: RewriteResponse =
            serde_json::from_str(r#"{"rewrittenContent":"See you tomorrow!"}"#).unwrap();
        assert_eq!(parsed.rewritten_content, "See you tomorrow!");
    }
}
