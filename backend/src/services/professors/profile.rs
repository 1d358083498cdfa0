use crate::config::AppConfig;
use actix_web::{web, HttpResponse, Responder};
use common::merge::split_catalog_name;
use common::model::catalog::CourseRecord;
use common::model::professor::{CourseContribution, MergedProfessor};
use common::store;
use serde::Serialize;
use serde_json::Number;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfessorProfile {
    /// Every class whose catalog entry lists the professor under this exact name.
    pub classes: Vec<CourseContribution>,
    /// Mean of the numeric grade averages in `classes`; null when none has one.
    pub avg_grade: Option<f64>,
    pub professor: Option<MergedProfessor>,
}

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    slug: web::Path<String>,
) -> impl Responder {
    let classes = match store::load_catalog(&config.classes_path()) {
        Ok(classes) => classes,
        Err(e) => return super::super::unavailable("classes", e),
    };
    let merged = match store::load_merged(&config.merged_path()) {
        Ok(merged) => merged,
        Err(e) => return super::super::unavailable("merged professors", e),
    };

    match professor_profile(&classes, merged, &slug) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => HttpResponse::NotFound().body("Professor not found"),
    }
}

/// Builds the profile of the catalog name `slug`.
///
/// The merged record is looked up loosely: last names must be equal, and the
/// record's first name must start with the first word of the slug's first
/// name. Case, periods and repeated spaces are ignored. Returns `None` when
/// neither a class nor a merged record knows the name.
pub(crate) fn professor_profile(
    classes: &[CourseRecord],
    merged: Vec<MergedProfessor>,
    slug: &str,
) -> Option<ProfessorProfile> {
    let taught: Vec<CourseContribution> = classes
        .iter()
        .filter_map(|class| {
            let entry = class.professors.iter().find(|p| p.prof == slug)?;
            Some(CourseContribution {
                code: class.code.clone(),
                name: class.name.clone(),
                avggrade: entry.avggrade.clone(),
            })
        })
        .collect();

    let grades: Vec<f64> = taught
        .iter()
        .filter_map(|c| c.avggrade.as_ref().and_then(Number::as_f64))
        .collect();
    let avg_grade = if grades.is_empty() {
        None
    } else {
        Some(grades.iter().sum::<f64>() / grades.len() as f64)
    };

    let (last, first) = split_catalog_name(slug).unwrap_or((slug, ""));
    let wanted_last = normalize(last);
    let wanted_first = normalize(first)
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string();
    let professor = merged.into_iter().find(|p| {
        normalize(&p.last_name) == wanted_last
            && normalize(&p.first_name).starts_with(&wanted_first)
    });

    if taught.is_empty() && professor.is_none() {
        return None;
    }
    Some(ProfessorProfile {
        classes: taught,
        avg_grade,
        professor,
    })
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;
    use actix_web::http::StatusCode;
    use actix_web::test::{call_and_read_body_json, call_service, init_service, TestRequest};
    use actix_web::App;

    #[test]
    fn averages_only_numeric_grades() {
        let classes = store::parse_catalog(
            r#"[
                {"code": "A1", "name": "A", "professors": [{"prof": "Roe, Rick", "avggrade": 3.0}]},
                {"code": "B1", "name": "B", "professors": [{"prof": "Roe, Rick", "avggrade": null}]},
                {"code": "C1", "name": "C", "professors": [{"prof": "Roe, Rick"}, {"prof": "Lee, Ann"}]},
                {"code": "D1", "name": "D", "professors": [{"prof": "Roe, Rick", "avggrade": 4}]}
            ]"#,
        )
        .unwrap();

        let profile = professor_profile(&classes, Vec::new(), "Roe, Rick").unwrap();
        let codes: Vec<_> = profile.classes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["A1", "B1", "C1", "D1"]);
        assert_eq!(profile.avg_grade, Some(3.5));
        assert!(profile.professor.is_none());
    }

    #[test]
    fn merged_record_found_ignoring_case_and_periods() {
        let classes = store::parse_catalog(test_support::CLASSES).unwrap();
        let merged = common::merge(
            &classes,
            &store::parse_ratings(test_support::RATINGS).unwrap(),
        )
        .professors;

        let profile = professor_profile(&classes, merged, "Doe, Jane A.").unwrap();
        assert_eq!(profile.classes.len(), 1);
        assert_eq!(profile.classes[0].code, "MATH 200");
        assert_eq!(profile.professor.unwrap().last_name, "Doe");
    }

    #[test]
    fn unknown_name_has_no_profile() {
        let classes = store::parse_catalog(test_support::CLASSES).unwrap();
        assert!(professor_profile(&classes, Vec::new(), "Nobody, Known").is_none());
        assert!(professor_profile(&classes, Vec::new(), "Nobody").is_none());
    }

    #[actix_web::test]
    async fn profile_with_only_null_grades_has_null_average() {
        let (_dir, config) = test_support::merged_data_dir();
        let app = init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = TestRequest::get()
            .uri("/api/professors/Kim,%20Lee")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["classes"][0]["code"], "CS 101");
        assert!(body["avgGrade"].is_null());
        assert_eq!(body["professor"]["firstName"], "Lee");
        assert!(body["professor"]["avgRating"].is_null());

        let req = TestRequest::get()
            .uri("/api/professors/Doe,%20Jane")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["avgGrade"], 3.5);
        assert_eq!(body["professor"]["numRatings"], 50);
    }

    #[actix_web::test]
    async fn unknown_professor_is_not_found() {
        let (_dir, config) = test_support::merged_data_dir();
        let app = init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = TestRequest::get()
            .uri("/api/professors/Nobody,%20Known")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
