use crate::merge::matcher::names_match;
use crate::model::rating::RatingRecord;

/// Finds the ratings record for a catalog professor name.
///
/// The first record in dataset order that matches wins; later candidates are
/// never considered, even if they would match more closely.
pub fn resolve<'a>(class_prof: &str, ratings: &'a [RatingRecord]) -> Option<&'a RatingRecord> {
    ratings
        .iter()
        .find(|r| names_match(class_prof, &r.first_name, &r.last_name))
}
