//! HTTP endpoints of the data service. Each sub-module exposes a
//! `configure_routes` returning its Actix `Scope`.

pub mod classes;
pub mod instructors;
pub mod merge;
pub mod professors;

use actix_web::HttpResponse;
use common::MergeError;
use log::error;

/// Response for a stored document that could not be loaded.
fn unavailable(document: &str, err: MergeError) -> HttpResponse {
    error!("Failed to load {}: {}", document, err);
    HttpResponse::ServiceUnavailable().body(format!("Error loading {}: {}", document, err))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::AppConfig;
    use std::fs;
    use tempfile::TempDir;

    pub const CLASSES: &str = r#"[
        {"subject": "CS", "code": "CS 101", "name": "Intro to Programming",
         "professors": [{"prof": "Doe, Jane", "avggrade": 3.5}, {"prof": "Kim, Lee"}]},
        {"subject": "MATH", "code": "MATH 200", "name": "calculus",
         "professors": [{"prof": "Doe, Jane A.", "avggrade": 2.8}]},
        {"subject": "CS", "code": "CS 310", "name": "Algorithms", "professors": []}
    ]"#;

    pub const RATINGS: &str = r#"[
        {"firstName": "Jane", "lastName": "Doe", "avgRating": 4.2, "avgDifficulty": 2.1,
         "wouldTakeAgainPercent": 90, "numRatings": 50}
    ]"#;

    pub const INSTRUCTORS: &str = r#"[{"name": "Doe, Jane", "dept": "CS"}, {"name": "Kim, Lee"}]"#;

    /// Data directory with the raw documents in place and no merged output.
    pub fn data_dir() -> (TempDir, AppConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        fs::create_dir_all(dir.path().join("raw")).unwrap();
        fs::write(config.classes_path(), CLASSES).unwrap();
        fs::write(config.ratings_path(), RATINGS).unwrap();
        fs::write(config.instructors_path(), INSTRUCTORS).unwrap();
        (dir, config)
    }

    /// Same as `data_dir`, with the merged document already produced.
    pub fn merged_data_dir() -> (TempDir, AppConfig) {
        let (dir, config) = data_dir();
        common::store::run_merge(&config.merge_paths()).unwrap();
        (dir, config)
    }
}
