use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity attached to the request by the token middleware after a
/// successful verification. Lives for one request, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
}

/// Stored user row referenced by profiles. Accounts are created by the
/// identity service that also issues tokens; this API only reads them and
/// deletes them together with the owning profile.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
