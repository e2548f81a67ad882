use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Add profile education.", skip_all)]
pub async fn add(
    user: web::ReqData<Arc<models::AuthenticatedUser>>,
    form: web::Json<forms::Education>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    form.validate()
        .map_err(|errors| JsonResponse::<models::Profile>::build().form_error(errors.to_string()))?;

    let mut profile = super::fetch_own(pg_pool.get_ref(), &user.id).await?;
    // newest entry first
    profile.education.0.insert(0, form.into());

    db::profile::update(pg_pool.get_ref(), profile)
        .await
        .map(|profile| JsonResponse::build().set_item(profile).ok("OK"))
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Delete profile education.", skip_all)]
pub async fn remove(
    user: web::ReqData<Arc<models::AuthenticatedUser>>,
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (edu_id,) = path.into_inner();
    let mut profile = super::fetch_own(pg_pool.get_ref(), &user.id).await?;

    let entries = &mut profile.education.0;
    let count = entries.len();
    entries.retain(|entry| entry.id != edu_id);
    if entries.len() == count {
        return Err(JsonResponse::<models::Profile>::build().not_found("Education does not exist"));
    }

    db::profile::update(pg_pool.get_ref(), profile)
        .await
        .map(|profile| JsonResponse::build().set_item(profile).ok("OK"))
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))
}
