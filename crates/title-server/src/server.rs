use std::io;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Routes plus extractor configs, so malformed input gets the JSON envelope.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::invalid_body(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::invalid_body(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/generate", web::post().to(handlers::generate::handler))
            .route("/health", web::get().to(handlers::health::handler))
            .route("/favorites", web::get().to(handlers::favorites::list))
            .route("/favorites", web::post().to(handlers::favorites::create))
            .route("/favorites/tags", web::get().to(handlers::favorites::tags))
            .route(
                "/favorites/{id}",
                web::delete().to(handlers::favorites::delete),
            ),
    );
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let address = config.bind_address();
    let state = AppState::new(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let state = web::Data::new(state);

    log::info!("Listening on http://{}", address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind(address)?
    .run()
    .await
}
