use crate::models;
use serde::Serialize;

/// Read view of a profile with the owning account's public fields embedded.
/// `user` is None when the account row is gone (accounts are managed by the
/// identity service, so a profile can briefly outlive its owner).
#[derive(Debug, Serialize)]
pub struct ProfileWithOwner {
    #[serde(flatten)]
    pub profile: models::Profile,
    pub user: Option<Owner>,
}

#[derive(Debug, Serialize)]
pub struct Owner {
    pub name: String,
    pub avatar: Option<String>,
}

impl From<(models::Profile, Option<models::Account>)> for ProfileWithOwner {
    fn from((profile, account): (models::Profile, Option<models::Account>)) -> Self {
        Self {
            profile,
            user: account.map(|account| Owner {
                name: account.name,
                avatar: account.avatar,
            }),
        }
    }
}
