use crate::model::rating::RatingRecord;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A professor in the merged output: the resolved identity, the rating
/// statistics copied from the matched ratings record, and every course the
/// catalog lists them for.
///
/// Unmatched professors carry `null` for all four statistics. Keys are
/// serialized in declaration order and nulls are always written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedProfessor {
    pub first_name: String,
    pub last_name: String,
    pub avg_rating: Option<Number>,
    pub avg_difficulty: Option<Number>,
    pub would_take_again_percent: Option<Number>,
    pub num_ratings: Option<Number>,
    pub courses: Vec<CourseContribution>,
}

/// A single course a professor taught, with the grade average of their section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseContribution {
    pub code: String,
    pub name: String,
    pub avggrade: Option<Number>,
}

impl MergedProfessor {
    pub fn from_rating(rating: &RatingRecord, first: CourseContribution) -> Self {
        Self {
            first_name: rating.first_name.clone(),
            last_name: rating.last_name.clone(),
            avg_rating: rating.avg_rating.clone(),
            avg_difficulty: rating.avg_difficulty.clone(),
            would_take_again_percent: rating.would_take_again_percent.clone(),
            num_ratings: rating.num_ratings.clone(),
            courses: vec![first],
        }
    }

    pub fn unrated(first_name: String, last_name: String, first: CourseContribution) -> Self {
        Self {
            first_name,
            last_name,
            avg_rating: None,
            avg_difficulty: None,
            would_take_again_percent: None,
            num_ratings: None,
            courses: vec![first],
        }
    }

    pub fn teaches(&self, normalized_code: &str) -> bool {
        self.courses
            .iter()
            .any(|c| crate::model::catalog::normalize_code(&c.code) == normalized_code)
    }
}
