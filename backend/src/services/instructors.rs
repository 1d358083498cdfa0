//! `GET /instructors`: the stored instructors document, unmodified.

use crate::config::AppConfig;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use common::store;

const API_PATH: &str = "/instructors";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

pub(crate) async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match store::load_json_value(&config.instructors_path()) {
        Ok(doc) => HttpResponse::Ok().json(doc),
        Err(e) => super::unavailable("instructors", e),
    }
}
