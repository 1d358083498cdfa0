use serde::Deserialize;

/// Query string of the class search endpoint (`?q=...`).
#[derive(Deserialize, Debug, Default)]
pub struct ClassSearchQuery {
    #[serde(default)]
    pub q: String,
}
