pub mod delete;
pub mod education;
pub mod experience;
pub mod get;
pub mod github;
pub mod upsert;

use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::Error;
use sqlx::PgPool;

/// Loads the calling user's profile or fails the request with the 404 every
/// entry-mutating handler shares.
pub(crate) async fn fetch_own(pool: &PgPool, user_id: &str) -> Result<models::Profile, Error> {
    db::profile::fetch_by_user_id(pool, user_id)
        .await
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Profile>::build().not_found("Profile does not exist"))
}
