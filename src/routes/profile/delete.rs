use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Removes the caller's profile together with the account row. Both deletes
/// are independently atomic; a missing profile is not an error, matching the
/// idempotent delete semantics of the storage layer.
#[tracing::instrument(name = "Delete profile and account.", skip_all)]
pub async fn item(
    user: web::ReqData<Arc<models::AuthenticatedUser>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::profile::delete_by_user_id(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))?;

    db::user::delete(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))?;

    Ok(JsonResponse::<models::Profile>::build().ok("User Deleted"))
}
