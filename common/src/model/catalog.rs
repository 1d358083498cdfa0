use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One course of the catalog, together with every professor who taught it.
///
/// `code`, `name` and each entry's `prof` are required. A course without a
/// `professors` key is read as taught by nobody; any other keys of the source
/// document are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    /// Department, e.g. `"CS"`. Not every catalog carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub professors: Vec<ProfessorEntry>,
}

/// A professor as listed by the catalog for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorEntry {
    /// Catalog-format name: `"Last, First[ Middle...]"`.
    pub prof: String,
    /// Average grade given in this course, if the catalog knows it.
    #[serde(default)]
    pub avggrade: Option<Number>,
}

impl CourseRecord {
    /// The course code lowercased with all whitespace removed, so that
    /// `"CS 101"` and `"cs101"` compare equal.
    pub fn normalized_code(&self) -> String {
        normalize_code(&self.code)
    }
}

pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professors_default_to_empty() {
        let course: CourseRecord =
            serde_json::from_str(r#"{"code":"CS101","name":"Intro"}"#).unwrap();
        assert!(course.professors.is_empty());
        assert_eq!(course.subject, None);
    }

    #[test]
    fn missing_prof_is_rejected() {
        let res = serde_json::from_str::<CourseRecord>(
            r#"{"code":"CS101","name":"Intro","professors":[{"avggrade":3.0}]}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn normalizes_codes() {
        assert_eq!(normalize_code(" CS 101\t"), "cs101");
    }
}
