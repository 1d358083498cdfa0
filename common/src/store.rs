//! Reading the input documents and writing the merged professors document.
//!
//! Parsing is also where structural validation happens: a document that is
//! not an array, or a record missing `code`, `name` or `prof`, fails the whole
//! run before the engine sees any of it.

use crate::error::{MergeError, MergeResult};
use crate::merge::{merge_with_progress, MergeSummary};
use crate::model::catalog::CourseRecord;
use crate::model::professor::MergedProfessor;
use crate::model::rating::RatingRecord;
use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Locations of the three documents of a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePaths {
    pub classes: PathBuf,
    pub ratings: PathBuf,
    pub output: PathBuf,
}

pub fn parse_catalog(text: &str) -> MergeResult<Vec<CourseRecord>> {
    serde_json::from_str(text).map_err(MergeError::InvalidCatalog)
}

pub fn parse_ratings(text: &str) -> MergeResult<Vec<RatingRecord>> {
    serde_json::from_str(text).map_err(MergeError::InvalidRatings)
}

pub fn load_catalog(path: &Path) -> MergeResult<Vec<CourseRecord>> {
    parse_catalog(&read(path)?)
}

pub fn load_ratings(path: &Path) -> MergeResult<Vec<RatingRecord>> {
    parse_ratings(&read(path)?)
}

/// Loads a document previously written by [`save_merged`].
pub fn load_merged(path: &Path) -> MergeResult<Vec<MergedProfessor>> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| MergeError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads any JSON document as-is, for endpoints that serve it unmodified.
pub fn load_json_value(path: &Path) -> MergeResult<serde_json::Value> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| MergeError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> MergeResult<String> {
    info!("Loading: {}", display_path(path));
    fs::read_to_string(path).map_err(|e| MergeError::io(path, e))
}

/// Serializes with four-space indentation and non-ASCII characters left as is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> MergeResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(MergeError::Serialize)?;
    Ok(buf)
}

/// Writes the merged professors to `path`.
///
/// The document is written to a temporary file next to `path` and renamed
/// over it, so readers see either the previous document or the complete new
/// one.
pub fn save_merged(path: &Path, professors: &[MergedProfessor]) -> MergeResult<()> {
    info!("Saving to: {}", display_path(path));
    let bytes = to_pretty_json(professors)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| MergeError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MergeError::io(dir, e))?;
    let tmp_path = tmp.path().to_path_buf();
    tmp.write_all(&bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| MergeError::io(tmp_path, e))?;
    tmp.persist(path).map_err(|e| MergeError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Loads both inputs, merges them and saves the result.
pub fn run_merge(paths: &MergePaths) -> MergeResult<MergeSummary> {
    run_merge_with_progress(paths, |_, _| {})
}

/// Same as [`run_merge`], forwarding the engine's per-course progress.
pub fn run_merge_with_progress<F>(paths: &MergePaths, progress: F) -> MergeResult<MergeSummary>
where
    F: FnMut(usize, usize),
{
    let catalog = load_catalog(&paths.classes)?;
    let ratings = load_ratings(&paths.ratings)?;

    let outcome = merge_with_progress(&catalog, &ratings, progress);
    save_merged(&paths.output, &outcome.professors)?;
    Ok(outcome.summary)
}

fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CLASSES: &str = r#"[
        {"code": "CS101", "name": "Intro", "subject": "CS",
         "professors": [{"prof": "Doe, Jane", "avggrade": 3.5}, {"prof": "Müller, Jörg"}]}
    ]"#;
    const RATINGS: &str = r#"[
        {"firstName": "Jane", "lastName": "Doe", "avgRating": 4.2, "avgDifficulty": 2.1,
         "wouldTakeAgainPercent": 90, "numRatings": 50}
    ]"#;

    fn paths_in(dir: &Path) -> MergePaths {
        MergePaths {
            classes: dir.join("classes.json"),
            ratings: dir.join("professors.json"),
            output: dir.join("processed").join("merged_professors.json"),
        }
    }

    #[test]
    fn catalog_must_be_an_array() {
        let err = parse_catalog(r#"{"code": "CS101"}"#).unwrap_err();
        assert!(matches!(err, MergeError::InvalidCatalog(_)));
    }

    #[test]
    fn catalog_requires_code_and_name() {
        let err = parse_catalog(r#"[{"name": "Intro", "professors": []}]"#).unwrap_err();
        assert!(err.to_string().contains("code"));
        assert!(parse_catalog(r#"[{"code": "CS101", "professors": []}]"#).is_err());
    }

    #[test]
    fn ratings_tolerate_missing_names() {
        let ratings = parse_ratings(r#"[{"avgRating": 3.0}]"#).unwrap();
        assert_eq!(ratings[0].first_name, "");
        assert_eq!(ratings[0].last_name, "");
        assert!(matches!(
            parse_ratings("42").unwrap_err(),
            MergeError::InvalidRatings(_)
        ));
    }

    #[test]
    fn non_integer_rating_counts_pass_through() {
        let ratings = parse_ratings(
            r#"[{"firstName": "Jane", "lastName": "Doe", "numRatings": 50.0},
                {"firstName": "Ann", "lastName": "Lee", "numRatings": -1}]"#,
        )
        .unwrap();
        let classes = parse_catalog(
            r#"[{"code": "CS101", "name": "Intro",
                 "professors": [{"prof": "Doe, Jane"}, {"prof": "Lee, Ann"}]}]"#,
        )
        .unwrap();

        let merged = crate::merge(&classes, &ratings).professors;
        let json = serde_json::to_value(&merged).unwrap();
        assert_eq!(json[0]["numRatings"], serde_json::json!(50.0));
        assert_eq!(json[1]["numRatings"], serde_json::json!(-1));
    }

    #[test]
    fn pretty_json_uses_four_spaces_and_keeps_unicode() {
        let bytes = to_pretty_json(&serde_json::json!({"name": "Jörg"})).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n    \"name\": \"Jörg\"\n}");
    }

    #[test]
    fn run_merge_writes_output_document() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.classes, CLASSES).unwrap();
        fs::write(&paths.ratings, RATINGS).unwrap();

        let summary = run_merge(&paths).unwrap();
        assert_eq!(summary.professors, 2);
        assert_eq!(summary.matched_entries, 1);

        let written: Vec<MergedProfessor> =
            serde_json::from_str(&fs::read_to_string(&paths.output).unwrap()).unwrap();
        assert_eq!(written[0].last_name, "Doe");
        assert_eq!(written[1].first_name, "Jörg");
        assert_eq!(written[1].avg_rating, None);
    }

    #[test]
    fn run_merge_is_idempotent() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.classes, CLASSES).unwrap();
        fs::write(&paths.ratings, RATINGS).unwrap();

        run_merge(&paths).unwrap();
        let first = fs::read(&paths.output).unwrap();
        run_merge(&paths).unwrap();
        assert_eq!(first, fs::read(&paths.output).unwrap());
    }

    #[test]
    fn invalid_input_leaves_previous_output_untouched() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::create_dir_all(paths.output.parent().unwrap()).unwrap();
        fs::write(&paths.output, "[]").unwrap();
        fs::write(&paths.classes, r#"[{"code": "CS101", "name": "Intro", "professors": [{}]}]"#)
            .unwrap();
        fs::write(&paths.ratings, RATINGS).unwrap();

        let err = run_merge(&paths).unwrap_err();
        assert!(matches!(err, MergeError::InvalidCatalog(_)));
        assert_eq!(fs::read_to_string(&paths.output).unwrap(), "[]");
    }

    #[test]
    fn missing_input_is_reported_as_not_found() {
        let dir = tempdir().unwrap();
        let err = run_merge(&paths_in(dir.path())).unwrap_err();
        assert!(err.is_not_found());
    }
}
