use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_user_id(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<models::Profile>, String> {
    let query_span = tracing::info_span!("Fetch profile by user id.");
    sqlx::query_as::<_, models::Profile>(
        r#"
        SELECT
            *
        FROM profile
        WHERE user_id=$1
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        err => {
            tracing::error!("Failed to fetch profile, error: {:?}", err);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Profile>, String> {
    let query_span = tracing::info_span!("Fetch all profiles.");
    sqlx::query_as::<_, models::Profile>(
        r#"
        SELECT
            *
        FROM profile
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch profiles, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, mut profile: models::Profile) -> Result<models::Profile, String> {
    let query_span = tracing::info_span!("Saving new profile into the database");
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO profile (user_id, status, skills, company, website, location, bio,
                             githubusername, social, experience, education, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING id
        "#,
    )
    .bind(profile.user_id.clone())
    .bind(profile.status.clone())
    .bind(profile.skills.clone())
    .bind(profile.company.clone())
    .bind(profile.website.clone())
    .bind(profile.location.clone())
    .bind(profile.bio.clone())
    .bind(profile.githubusername.clone())
    .bind(profile.social.clone())
    .bind(profile.experience.clone())
    .bind(profile.education.clone())
    .bind(profile.created_at)
    .bind(profile.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |id| {
        profile.id = id;
        profile
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, profile: models::Profile) -> Result<models::Profile, String> {
    let query_span = tracing::info_span!("Updating profile");
    sqlx::query_as::<_, models::Profile>(
        r#"
        UPDATE profile
        SET
            status=$2,
            skills=$3,
            company=$4,
            website=$5,
            location=$6,
            bio=$7,
            githubusername=$8,
            social=$9,
            experience=$10,
            education=$11,
            updated_at=NOW()
        WHERE user_id=$1
        RETURNING *
        "#,
    )
    .bind(profile.user_id.clone())
    .bind(profile.status.clone())
    .bind(profile.skills.clone())
    .bind(profile.company.clone())
    .bind(profile.website.clone())
    .bind(profile.location.clone())
    .bind(profile.bio.clone())
    .bind(profile.githubusername.clone())
    .bind(profile.social.clone())
    .bind(profile.experience.clone())
    .bind(profile.education.clone())
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|updated| {
        tracing::info!("Profile {} has been saved to database", updated.id);
        updated
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

#[tracing::instrument(name = "Delete profile by user id.", skip(pool))]
pub async fn delete_by_user_id(pool: &PgPool, user_id: &str) -> Result<bool, String> {
    sqlx::query(
        r#"
        DELETE FROM profile
        WHERE user_id=$1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!("Failed to delete profile, error: {:?}", err);
        "Failed to delete".to_string()
    })
}
