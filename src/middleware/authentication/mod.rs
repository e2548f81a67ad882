mod errors;
mod manager;
mod manager_middleware;
mod verifier;

pub use errors::AuthError;
pub use manager::TokenAuth;
pub use manager_middleware::TokenAuthMiddleware;
pub use verifier::{TokenClaims, TokenVerifier, UserClaim, CREDENTIAL_HEADER};
