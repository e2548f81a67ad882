use crate::connectors::ConnectorConfig;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub auth: AuthSettings,
    pub connectors: ConnectorConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

/// Token verification settings. The secret is process-wide, loaded once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

impl AuthSettings {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| config::ConfigError::NotFound("JWT_SECRET".to_string()))?;

        Ok(AuthSettings { jwt_secret })
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Configuration file named `configuration` with a .json, .toml, .yaml or
    // .yml extension, looked up in the working directory
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // The verification secret comes from the environment when present; the
    // file value is a development fallback only
    if let Ok(auth) = AuthSettings::from_env() {
        config.auth = auth;
    }

    Ok(config)
}
