mod config;
mod cors;
mod job_controller;
mod services;

use crate::config::AppConfig;
use crate::job_controller::state::JobsState;
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let bind = (config.host.clone(), config.port);
    info!("Serving data from {}", config.data_dir.display());

    let (jobs_state, rx) = JobsState::new();
    let updater_state = jobs_state.clone();
    tokio::spawn(async move {
        job_controller::state::start_job_updater(updater_state, rx).await;
    });

    info!("Server running at {}", config.url());

    let config = web::Data::new(config);
    let jobs_state = web::Data::new(jobs_state);
    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(cors::answer_preflight))
            .wrap(cors::headers())
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(jobs_state.clone())
            .service(services::instructors::configure_routes())
            .service(services::professors::configure_routes())
            .service(services::classes::configure_routes())
            .service(services::merge::configure_routes())
    })
    .bind(bind)?
    .run()
    .await
}
