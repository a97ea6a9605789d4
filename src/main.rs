mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::Config;
use crate::repositories::{MySqlUserRepository, UserRepository};
use crate::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // Connect to MySQL
    let repository = MySqlUserRepository::connect(&config).await.map_err(|e| {
        error!("Failed to connect to MySQL: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e)
    })?;
    info!("Connected to MySQL successfully!");

    if config.db_bootstrap_schema {
        repository.ensure_schema().await.map_err(|e| {
            error!("Failed to prepare the users table: {}", e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;
    }

    // Initialize services
    let user_service = web::Data::new(UserService::new(Arc::new(repository)));

    // Start HTTP server
    let server_addr = config.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
