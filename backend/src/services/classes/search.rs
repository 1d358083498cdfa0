use crate::config::AppConfig;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::CourseRecord;
use common::requests::ClassSearchQuery;
use common::store;

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    query: web::Query<ClassSearchQuery>,
) -> impl Responder {
    let query = query.q.trim().to_lowercase();
    if query.is_empty() {
        return HttpResponse::Ok().json(Vec::<CourseRecord>::new());
    }

    match store::load_catalog(&config.classes_path()) {
        Ok(classes) => HttpResponse::Ok().json(search_classes(&classes, &query)),
        Err(e) => super::super::unavailable("classes", e),
    }
}

/// Classes matching every whitespace-separated word of `query`, sorted by name.
///
/// A word matches when it occurs in the lowercased name, or in the lowercased
/// code with its spaces removed (so `cs101` finds `"CS 101"`).
pub(crate) fn search_classes<'a>(
    classes: &'a [CourseRecord],
    query: &str,
) -> Vec<&'a CourseRecord> {
    let query = query.to_lowercase();
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<&CourseRecord> = classes
        .iter()
        .filter(|class| {
            let code = class.normalized_code();
            let name = class.name.to_lowercase();
            words.iter().all(|w| name.contains(w) || code.contains(w))
        })
        .collect();

    found.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    found
}
