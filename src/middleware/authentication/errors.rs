use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

/// Terminal verification failures. Both render as 401 with a fixed message;
/// no internal detail (which check failed, why) reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The credential header was absent or empty.
    #[error("No Token authorization denied")]
    MissingCredential,
    /// The credential was present but malformed, tampered with or expired.
    #[error("Invalid auth Token")]
    InvalidCredential,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "msg": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[tokio::test]
    async fn missing_credential_renders_contract_body() {
        let err = AuthError::MissingCredential;
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["msg"], "No Token authorization denied");
    }

    #[tokio::test]
    async fn invalid_credential_renders_contract_body() {
        let err = AuthError::InvalidCredential;
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["msg"], "Invalid auth Token");
    }
}
