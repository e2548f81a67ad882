use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Get logged user profile.", skip_all)]
pub async fn me(
    user: web::ReqData<Arc<models::AuthenticatedUser>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let profile = db::profile::fetch_by_user_id(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<views::ProfileWithOwner>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::ProfileWithOwner>::build().not_found("Profile does not exist")
        })?;

    let profile = with_owner(pg_pool.get_ref(), profile)
        .await
        .map_err(|err| JsonResponse::<views::ProfileWithOwner>::build().internal_server_error(err))?;

    Ok(JsonResponse::build().set_item(profile).ok("OK"))
}

#[tracing::instrument(name = "Get profile by user id.", skip_all)]
pub async fn by_user(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (user_id,) = path.into_inner();

    let profile = db::profile::fetch_by_user_id(pg_pool.get_ref(), &user_id)
        .await
        .map_err(|err| JsonResponse::<views::ProfileWithOwner>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::ProfileWithOwner>::build().not_found("Profile not found")
        })?;

    let profile = with_owner(pg_pool.get_ref(), profile)
        .await
        .map_err(|err| JsonResponse::<views::ProfileWithOwner>::build().internal_server_error(err))?;

    Ok(JsonResponse::build().set_item(profile).ok("OK"))
}

#[tracing::instrument(name = "Get profile list.", skip_all)]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let profiles = db::profile::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::ProfileWithOwner>::build().internal_server_error(err))?;

    let mut items = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let item = with_owner(pg_pool.get_ref(), profile).await.map_err(|err| {
            JsonResponse::<views::ProfileWithOwner>::build().internal_server_error(err)
        })?;
        items.push(item);
    }

    Ok(JsonResponse::build().set_list(items).ok("OK"))
}

async fn with_owner(
    pool: &PgPool,
    profile: models::Profile,
) -> Result<views::ProfileWithOwner, String> {
    let owner = db::user::fetch(pool, &profile.user_id).await?;
    Ok(views::ProfileWithOwner::from((profile, owner)))
}
