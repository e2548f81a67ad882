use crate::connectors::{ConnectorError, GithubConnector, RepositorySummary};
use crate::helpers::JsonResponse;
use actix_web::{web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get github repositories.", skip_all)]
pub async fn repos(
    path: web::Path<(String,)>,
    connector: web::Data<Arc<dyn GithubConnector>>,
) -> Result<impl Responder> {
    let (username,) = path.into_inner();

    match connector.list_repositories(&username).await {
        Ok(repos) => Ok(JsonResponse::build().set_list(repos).ok("OK")),
        Err(ConnectorError::NotFound(_)) => {
            Err(JsonResponse::<RepositorySummary>::build().not_found("No Github profile found"))
        }
        Err(err) => {
            tracing::warn!("github lookup failed: {}", err);
            Err(err.into())
        }
    }
}
