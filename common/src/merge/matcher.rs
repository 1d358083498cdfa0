/// Splits a catalog name on its first comma into `(last, rest)`.
///
/// Returns `None` when the name has no comma.
pub fn split_catalog_name(class_prof: &str) -> Option<(&str, &str)> {
    class_prof.split_once(',')
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Decides whether a catalog name denotes the ratings professor `first last`.
///
/// Last names must match exactly after normalization; the catalog's first part
/// only has to start with `first`, so trailing middle names and initials are
/// tolerated. The test is one-directional: `"Smith, John Robert"` matches
/// `John Smith`, but `"Smith, Jo"` does not.
pub fn names_match(class_prof: &str, first: &str, last: &str) -> bool {
    let Some((class_last, class_first)) = split_catalog_name(class_prof) else {
        return false;
    };

    if normalize(class_last) != normalize(last) {
        return false;
    }
    normalize(class_first).starts_with(&normalize(first))
}
