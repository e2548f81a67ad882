use crate::middleware::authentication::{AuthError, TokenVerifier, CREDENTIAL_HEADER};

use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse},
    Error, HttpMessage, ResponseError,
};
use futures::{
    future::LocalBoxFuture,
    task::{Context, Poll},
};

pub struct TokenAuthMiddleware<S> {
    pub(super) service: Rc<S>,
    pub(super) verifier: Arc<TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let verdict = match credential_header(&req) {
                Ok(token) => verifier.verify(token.as_deref()),
                Err(err) => Err(err),
            };

            match verdict {
                Ok(user) => {
                    req.extensions_mut().insert(Arc::new(user));
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Err(err) => {
                    tracing::debug!("request rejected: {}", err);
                    let (request, _) = req.into_parts();
                    let response = err.error_response().map_into_right_body();
                    Ok(ServiceResponse::new(request, response))
                }
            }
        })
    }
}

/// Reads the credential header. A header that is present but not valid UTF-8
/// counts as an invalid credential, not a missing one.
fn credential_header(req: &ServiceRequest) -> Result<Option<String>, AuthError> {
    match req.headers().get(CREDENTIAL_HEADER) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|token| Some(token.to_string()))
            .map_err(|_| AuthError::InvalidCredential),
    }
}
