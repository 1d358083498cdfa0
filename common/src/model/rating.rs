use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Aggregate statistics for one professor from the ratings dataset.
///
/// Every statistic may be null in the source; names default to the empty
/// string when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avg_rating: Option<Number>,
    #[serde(default)]
    pub avg_difficulty: Option<Number>,
    #[serde(default)]
    pub would_take_again_percent: Option<Number>,
    #[serde(default)]
    pub num_ratings: Option<Number>,
}
