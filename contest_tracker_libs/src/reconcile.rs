use crate::types::{ContestCandidate, ContestRecord, NewContest};
use std::collections::HashMap;

/// Merges a platform's freshly fetched candidates with its previously
/// persisted records. The fresh listing wholesale replaces the stored one;
/// the only field that survives a match is the bookmark flag, carried over by
/// contest name. Names absent from the fresh listing are dropped, names the
/// store has never seen start unbookmarked.
///
/// Duplicate names within one fetch pass through untouched. A source that
/// produces them yields duplicate persisted records, which is a defect in
/// that source, not in the reconciliation.
pub fn reconcile(fresh: Vec<ContestCandidate>, existing: &[ContestRecord]) -> Vec<NewContest> {
    let bookmarks: HashMap<&str, bool> = existing
        .iter()
        .map(|record| (record.name.as_str(), record.bookmarked))
        .collect();

    fresh
        .into_iter()
        .map(|candidate| {
            let bookmarked = bookmarks
                .get(candidate.name.as_str())
                .copied()
                .unwrap_or(false);
            candidate.into_new(bookmarked)
        })
        .collect()
}
