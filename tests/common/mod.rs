use devlink::configuration::{get_configuration, DatabaseSettings, Settings};
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

/// Secret shared by the spawned server and the tokens the tests mint.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub jwt_secret: String,
}

pub async fn spawn_app() -> Option<TestApp> {
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
    let configuration = get_configuration().expect("Failed to get configuration");

    spawn_app_with_configuration(configuration).await
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let jwt_secret = configuration.auth.jwt_secret.clone();
    let server = devlink::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        jwt_secret,
    })
}

async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

#[allow(dead_code)]
pub fn issue_token(user_id: &str, secret: &str, exp: i64) -> String {
    let claims = serde_json::json!({ "user": { "id": user_id }, "exp": exp });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

#[allow(dead_code)]
pub async fn seed_account(pool: &PgPool, id: &str, name: &str, email: &str) {
    sqlx::query(
        r#"
        INSERT INTO account (id, name, email, avatar)
        VALUES ($1, $2, $3, NULL)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .execute(pool)
    .await
    .expect("Failed to seed account");
}
