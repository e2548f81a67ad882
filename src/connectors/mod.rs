//! External service connectors.
//!
//! All outbound integrations go through a connector: a trait describing the
//! calls a route needs, an HTTP client implementing it, and configuration to
//! point it elsewhere per environment. Routes receive the trait object via
//! `web::Data<Arc<dyn ...>>` and never touch HTTP details, which keeps them
//! testable against a stub server.

pub mod config;
pub mod errors;
pub mod github_service;

pub use config::{ConnectorConfig, GithubConnectorConfig};
pub use errors::ConnectorError;
pub use github_service::init as init_github;
pub use github_service::{GithubClient, GithubConnector, RepositorySummary};
