use crate::configuration::Settings;
use crate::connectors;
use crate::middleware::authentication::{TokenAuth, TokenVerifier};
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    // The verifier is built once from configuration and shared read-only by
    // every worker; it is the only authentication state in the process.
    let verifier = Arc::new(TokenVerifier::new(&settings.auth));

    let github_connector = connectors::init_github(&settings.connectors);

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        let token_auth = || TokenAuth::new(Arc::clone(&verifier));

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::scope("/api/profile")
                    .service(
                        web::resource("")
                            .route(web::get().to(routes::profile::get::list))
                            .route(
                                web::post()
                                    .to(routes::profile::upsert::item)
                                    .wrap(token_auth()),
                            )
                            .route(
                                web::delete()
                                    .to(routes::profile::delete::item)
                                    .wrap(token_auth()),
                            ),
                    )
                    .service(
                        web::resource("/me")
                            .route(web::get().to(routes::profile::get::me).wrap(token_auth())),
                    )
                    .service(
                        web::resource("/user/{user_id}")
                            .route(web::get().to(routes::profile::get::by_user)),
                    )
                    .service(
                        web::resource("/experience").route(
                            web::put()
                                .to(routes::profile::experience::add)
                                .wrap(token_auth()),
                        ),
                    )
                    .service(
                        web::resource("/experience/{exp_id}").route(
                            web::delete()
                                .to(routes::profile::experience::remove)
                                .wrap(token_auth()),
                        ),
                    )
                    .service(
                        web::resource("/education").route(
                            web::put()
                                .to(routes::profile::education::add)
                                .wrap(token_auth()),
                        ),
                    )
                    .service(
                        web::resource("/education/{edu_id}").route(
                            web::delete()
                                .to(routes::profile::education::remove)
                                .wrap(token_auth()),
                        ),
                    )
                    .service(
                        web::resource("/github/{username}")
                            .route(web::get().to(routes::profile::github::repos)),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(github_connector.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
