use crate::merge::matcher::split_catalog_name;
use crate::merge::resolver::resolve;
use crate::model::catalog::{CourseRecord, ProfessorEntry};
use crate::model::professor::{CourseContribution, MergedProfessor};
use crate::model::rating::RatingRecord;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Counters describing a finished merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of distinct professor records emitted.
    pub professors: usize,
    /// Number of course/professor entries scanned in the catalog.
    pub entries: usize,
    pub matched_entries: usize,
    pub unmatched_entries: usize,
    /// Records whose identity differs from an earlier record only by case.
    pub case_collisions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub professors: Vec<MergedProfessor>,
    pub summary: MergeSummary,
}

/// Merges the catalog with the ratings dataset.
///
/// Courses and their professor entries are visited in input order. Each entry
/// adds one [`CourseContribution`] to the record of its resolved identity,
/// creating the record the first time the identity is seen.
pub fn merge(catalog: &[CourseRecord], ratings: &[RatingRecord]) -> MergeOutcome {
    merge_with_progress(catalog, ratings, |_, _| {})
}

/// Same as [`merge`], calling `progress(done, total)` after each course.
pub fn merge_with_progress<F>(
    catalog: &[CourseRecord],
    ratings: &[RatingRecord],
    mut progress: F,
) -> MergeOutcome
where
    F: FnMut(usize, usize),
{
    let mut acc = Accumulator::default();
    let total = catalog.len();

    for (idx, course) in catalog.iter().enumerate() {
        for entry in &course.professors {
            acc.add(course, entry, ratings);
        }
        progress(idx + 1, total);
    }

    let outcome = acc.finish();
    info!(
        "Merged {} currently teaching professors with ratings and courses.",
        outcome.summary.professors
    );
    outcome
}

#[derive(Default)]
struct Accumulator {
    professors: Vec<MergedProfessor>,
    by_identity: HashMap<(String, String), usize>,
    // Lowercased identity -> first record seen with it.
    by_folded_identity: HashMap<(String, String), usize>,
    summary: MergeSummary,
}

impl Accumulator {
    fn add(&mut self, course: &CourseRecord, entry: &ProfessorEntry, ratings: &[RatingRecord]) {
        self.summary.entries += 1;

        let contribution = CourseContribution {
            code: course.code.clone(),
            name: course.name.clone(),
            avggrade: entry.avggrade.clone(),
        };

        let matched = resolve(&entry.prof, ratings);
        let (first_name, last_name) = match matched {
            Some(rating) => {
                self.summary.matched_entries += 1;
                (rating.first_name.clone(), rating.last_name.clone())
            }
            None => {
                self.summary.unmatched_entries += 1;
                debug!("No ratings record for '{}'", entry.prof);
                unmatched_identity(&entry.prof)
            }
        };

        let key = (first_name, last_name);
        match self.by_identity.entry(key) {
            Entry::Occupied(slot) => {
                self.professors[*slot.get()].courses.push(contribution);
            }
            Entry::Vacant(slot) => {
                let (first_name, last_name) = slot.key().clone();
                let record = match matched {
                    Some(rating) => MergedProfessor::from_rating(rating, contribution),
                    None => {
                        MergedProfessor::unrated(first_name.clone(), last_name.clone(), contribution)
                    }
                };
                let idx = self.professors.len();
                self.professors.push(record);
                slot.insert(idx);

                let folded = (first_name.to_lowercase(), last_name.to_lowercase());
                if let Some(&earlier) = self.by_folded_identity.get(&folded) {
                    let other = &self.professors[earlier];
                    warn!(
                        "'{} {}' differs from '{} {}' only by case; keeping both records",
                        first_name, last_name, other.first_name, other.last_name
                    );
                    self.summary.case_collisions += 1;
                } else {
                    self.by_folded_identity.insert(folded, idx);
                }
            }
        }
    }

    fn finish(mut self) -> MergeOutcome {
        self.summary.professors = self.professors.len();
        MergeOutcome {
            professors: self.professors,
            summary: self.summary,
        }
    }
}

/// Identity of a catalog name with no ratings record: the text before the
/// first comma is the last name, the text after it (minus the separating
/// space) the first name. Without a comma the first name is empty.
fn unmatched_identity(class_prof: &str) -> (String, String) {
    match split_catalog_name(class_prof) {
        Some((last, rest)) => {
            let first = rest.strip_prefix(' ').unwrap_or(rest);
            (first.to_string(), last.to_string())
        }
        None => (String::new(), class_prof.to_string()),
    }
}
