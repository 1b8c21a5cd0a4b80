use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod db;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod workout;
use crate::routes::init_routes;
use crate::config::settings::HistorySettings;
use crate::error::WorkoutError;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    history_settings: HistorySettings,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let history_settings = web::Data::new(history_settings);

    let server = HttpServer::new( move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        // Malformed bodies and path segments get the same error shape as validation failures
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| WorkoutError::validation(err.to_string()).into());
        let path_config = web::PathConfig::default()
            .error_handler(|err, _req| WorkoutError::validation(err.to_string()).into());

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config)
            .app_data(path_config)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(history_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
