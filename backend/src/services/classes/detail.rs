use crate::config::AppConfig;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::{normalize_code, CourseRecord};
use common::model::professor::MergedProfessor;
use common::store;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct ClassDetail {
    pub class: CourseRecord,
    pub professors: Vec<MergedProfessor>,
}

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    code: web::Path<String>,
) -> impl Responder {
    let classes = match store::load_catalog(&config.classes_path()) {
        Ok(classes) => classes,
        Err(e) => return super::super::unavailable("classes", e),
    };
    let merged = match store::load_merged(&config.merged_path()) {
        Ok(merged) => merged,
        Err(e) => return super::super::unavailable("merged professors", e),
    };

    match class_detail(classes, merged, &code) {
        Some(detail) => HttpResponse::Ok().json(detail),
        None => HttpResponse::NotFound().body("Class not found"),
    }
}

/// The class with the given code and every merged professor teaching it, in
/// merged document order.
pub(crate) fn class_detail(
    classes: Vec<CourseRecord>,
    merged: Vec<MergedProfessor>,
    code: &str,
) -> Option<ClassDetail> {
    let wanted = normalize_code(code);
    let class = classes
        .into_iter()
        .find(|c| c.normalized_code() == wanted)?;
    let professors = merged.into_iter().filter(|p| p.teaches(&wanted)).collect();
    Some(ClassDetail { class, professors })
}
