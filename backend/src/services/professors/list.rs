use crate::config::AppConfig;
use actix_web::{web, HttpResponse, Responder};
use common::store;

pub(crate) async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match store::load_json_value(&config.merged_path()) {
        Ok(doc) => HttpResponse::Ok().json(doc),
        Err(e) => super::super::unavailable("merged professors", e),
    }
}
