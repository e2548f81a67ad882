use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{
    web,
    web::{Bytes, Data},
    Error, Responder, Result,
};
use serde_valid::Validate;
use sqlx::PgPool;
use std::str;
use std::sync::Arc;

#[tracing::instrument(name = "Create or update profile.", skip_all)]
pub async fn item(
    body: Bytes,
    user: web::ReqData<Arc<models::AuthenticatedUser>>,
    pg_pool: Data<PgPool>,
) -> Result<impl Responder> {
    let form = body_into_form(body)?;

    let existing = db::profile::fetch_by_user_id(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))?;

    match existing {
        Some(mut profile) => {
            form.apply_to(&mut profile);
            db::profile::update(pg_pool.get_ref(), profile)
                .await
                .map(|profile| {
                    JsonResponse::build()
                        .set_id(profile.id)
                        .set_item(profile)
                        .ok("OK")
                })
                .map_err(|err| {
                    JsonResponse::<models::Profile>::build().internal_server_error(err)
                })
        }
        None => {
            let mut profile = models::Profile::new(user.id.clone());
            form.apply_to(&mut profile);
            db::profile::insert(pg_pool.get_ref(), profile)
                .await
                .map(|profile| {
                    JsonResponse::build()
                        .set_id(profile.id)
                        .set_item(profile)
                        .ok("OK")
                })
                .map_err(|err| {
                    JsonResponse::<models::Profile>::build().internal_server_error(err)
                })
        }
    }
}

fn body_into_form(body: Bytes) -> Result<forms::Profile, Error> {
    let body_str = str::from_utf8(&body)
        .map_err(|_| JsonResponse::<forms::Profile>::build().bad_request("payload is not utf-8"))?;

    let deserializer = &mut serde_json::Deserializer::from_str(body_str);
    serde_path_to_error::deserialize(deserializer)
        .map_err(|err| {
            let msg = format!("{}:{:?}", err.path(), err);
            JsonResponse::<forms::Profile>::build().bad_request(msg)
        })
        .and_then(|form: forms::Profile| {
            form.validate().map_err(|errors| {
                tracing::debug!("Invalid profile payload: {}", errors);
                JsonResponse::<forms::Profile>::build().form_error(errors.to_string())
            })?;

            Ok(form)
        })
}
