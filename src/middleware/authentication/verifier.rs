use crate::configuration::AuthSettings;
use crate::middleware::authentication::AuthError;
use crate::models;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Header carrying the caller's credential on protected routes.
pub const CREDENTIAL_HEADER: &str = "x-auth-token";

/// Claim set a credential must carry. Anything that does not deserialize
/// into exactly this shape is rejected, whatever else the payload contains.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: UserClaim,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: String,
}

/// Stateless credential verifier, built once at startup from [`AuthSettings`]
/// and shared read-only across requests.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(settings: &AuthSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared explicitly in `verify` so the boundary semantics
        // (exp == now is expired) do not depend on library leeway defaults.
        validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Checks a caller-supplied credential and extracts the identity it
    /// carries. Pure with respect to the verifier: calling it twice with the
    /// same token yields the same result, and nothing is retained between
    /// calls.
    pub fn verify(&self, token: Option<&str>) -> Result<models::AuthenticatedUser, AuthError> {
        let token = match token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(AuthError::MissingCredential),
        };

        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!("token rejected: {}", err);
                AuthError::InvalidCredential
            })?;

        // A token expiring right now is already expired.
        if data.claims.exp <= chrono::Utc::now().timestamp() {
            tracing::debug!("token rejected: expired");
            return Err(AuthError::InvalidCredential);
        }

        Ok(models::AuthenticatedUser {
            id: data.claims.user.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-secret";

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(&AuthSettings {
            jwt_secret: SECRET.to_string(),
        })
    }

    fn sign(secret: &str, claims: &serde_json::Value) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn token_for(id: &str, exp: i64) -> String {
        sign(SECRET, &serde_json::json!({ "user": { "id": id }, "exp": exp }))
    }

    #[test]
    fn missing_or_blank_token_is_missing_credential() {
        let verifier = verifier();

        assert!(matches!(
            verifier.verify(None),
            Err(AuthError::MissingCredential)
        ));
        assert!(matches!(
            verifier.verify(Some("")),
            Err(AuthError::MissingCredential)
        ));
        assert!(matches!(
            verifier.verify(Some("   ")),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn malformed_token_is_invalid() {
        let verifier = verifier();

        for garbage in ["not-a-jwt", "a.b", "a.b.c.d", "....."] {
            assert!(matches!(
                verifier.verify(Some(garbage)),
                Err(AuthError::InvalidCredential)
            ));
        }
    }

    #[test]
    fn valid_token_yields_the_encoded_identity() {
        let verifier = verifier();
        let token = token_for("abc123", chrono::Utc::now().timestamp() + 3600);

        let user = verifier.verify(Some(&token)).unwrap();
        assert_eq!(user.id, "abc123");
    }

    #[test]
    fn verification_is_idempotent() {
        let verifier = verifier();
        let token = token_for("abc123", chrono::Utc::now().timestamp() + 3600);

        let first = verifier.verify(Some(&token)).unwrap();
        let second = verifier.verify(Some(&token)).unwrap();
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn expired_token_is_invalid() {
        let verifier = verifier();
        let token = token_for("abc123", chrono::Utc::now().timestamp() - 3600);

        assert!(matches!(
            verifier.verify(Some(&token)),
            Err(AuthError::InvalidCredential)
        ));
    }

    #[test]
    fn expiry_boundary_fails_closed() {
        let verifier = verifier();
        let now = chrono::Utc::now().timestamp();

        // exp == now and exp just below now are both expired
        for exp in [now, now - 1] {
            let token = token_for("abc123", exp);
            assert!(matches!(
                verifier.verify(Some(&token)),
                Err(AuthError::InvalidCredential)
            ));
        }

        // a token with a little life left still passes
        let token = token_for("abc123", now + 5);
        assert!(verifier.verify(Some(&token)).is_ok());
    }

    #[test]
    fn tampered_signature_is_never_accepted() {
        let verifier = verifier();
        let token = token_for("abc123", chrono::Utc::now().timestamp() + 3600);
        let (payload, signature) = token.rsplit_once('.').unwrap();

        for position in 0..signature.len() {
            let mut tampered = signature.as_bytes().to_vec();
            tampered[position] = if tampered[position] == b'A' { b'B' } else { b'A' };
            let tampered = format!("{}.{}", payload, std::str::from_utf8(&tampered).unwrap());

            assert!(
                matches!(
                    verifier.verify(Some(&tampered)),
                    Err(AuthError::InvalidCredential)
                ),
                "tampered signature accepted at position {}",
                position
            );
        }
    }

    #[test]
    fn token_signed_with_another_secret_is_invalid() {
        let verifier = verifier();
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = sign(
            "some-other-secret",
            &serde_json::json!({ "user": { "id": "abc123" }, "exp": exp }),
        );

        assert!(matches!(
            verifier.verify(Some(&token)),
            Err(AuthError::InvalidCredential)
        ));
    }

    #[test]
    fn nonconforming_claims_are_invalid() {
        let verifier = verifier();
        let exp = chrono::Utc::now().timestamp() + 3600;

        let payloads = [
            // no user claim at all
            serde_json::json!({ "exp": exp }),
            // user claim without an id
            serde_json::json!({ "user": {}, "exp": exp }),
            // id of the wrong type
            serde_json::json!({ "user": { "id": 42 }, "exp": exp }),
            // user claim of the wrong shape
            serde_json::json!({ "user": "abc123", "exp": exp }),
        ];

        for payload in payloads {
            let token = sign(SECRET, &payload);
            assert!(
                matches!(
                    verifier.verify(Some(&token)),
                    Err(AuthError::InvalidCredential)
                ),
                "accepted nonconforming payload {}",
                payload
            );
        }
    }
}
