//! Query resolution and neighbor ranking
//!
//! Resolves a free-text query to a reference catalog entry by
//! case-insensitive title substring (lowest id wins among multiple matches,
//! a documented simplification), then ranks every other entry by cosine
//! similarity to the reference. "No title matched" is an empty result, not
//! an error; the caller decides how to degrade.

use crate::error::Result;
use crate::similarity;
use crate::snapshot::Snapshot;
use cinerec_catalog::{CatalogEntry, Error as CatalogError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Default number of neighbors returned, matching the original assistant.
pub const DEFAULT_TOP_N: usize = 5;

/// One ranked neighbor of a reference entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended catalog entry
    pub entry: CatalogEntry,

    /// Cosine similarity to the reference entry, in [0, 1]
    pub score: f32,
}

impl Snapshot {
    /// Top-`top_n` entries most similar to the title matching `query`.
    ///
    /// Returns an empty list when no title contains the query. Scores are
    /// strictly ordered descending; ties break by ascending id so results
    /// are deterministic. The reference entry itself is never included.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        match self.catalog().find_by_title(query) {
            Some(reference) => {
                debug!(query, reference = reference.id, "query resolved to reference entry");
                self.recommend_for(reference.id, top_n)
            }
            None => {
                debug!(query, "no title matched query");
                Ok(Vec::new())
            }
        }
    }

    /// Top-`top_n` entries most similar to the entry with id `reference`.
    ///
    /// The by-id path used when the caller already holds an entry (the
    /// "show similar" action); the free-text path delegates here after
    /// resolution. Fails with `NotFound` for an id outside the catalog.
    pub fn recommend_for(&self, reference: u32, top_n: usize) -> Result<Vec<Recommendation>> {
        if self.catalog().get(reference).is_none() {
            return Err(CatalogError::NotFound { id: reference }.into());
        }

        let scores = similarity::scores(self.vectors(), reference as usize)?;

        let mut candidates: Vec<usize> = (0..scores.len())
            .filter(|&row| row != reference as usize)
            .collect();
        candidates.sort_unstable_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });
        candidates.truncate(top_n);

        Ok(candidates
            .into_iter()
            .filter_map(|row| self.catalog().get(row as u32))
            .map(|entry| Recommendation {
                entry: entry.clone(),
                score: scores[entry.id as usize],
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinerec_catalog::RawRecord;

    fn snapshot(titles: &[&str]) -> Snapshot {
        let records = titles
            .iter()
            .map(|t| RawRecord::new(*t, "película"))
            .collect();
        Snapshot::build(records).unwrap()
    }

    #[test]
    fn matrix_scenario_ranks_shared_token_first() {
        let snap = snapshot(&["The Matrix", "Matrix Reloaded", "Titanic"]);
        let recs = snap.recommend("Matrix", 2).unwrap();

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].entry.id, 1, "shares the token `matrix`");
        assert_eq!(recs[1].entry.id, 2);
        assert!(recs[0].score > recs[1].score);
    }

    #[test]
    fn reference_entry_is_never_recommended() {
        let snap = snapshot(&["The Matrix", "Matrix Reloaded", "Matrix Revolutions"]);
        let recs = snap.recommend("matrix", 10).unwrap();
        assert!(recs.iter().all(|r| r.entry.id != 0));
    }

    #[test]
    fn unmatched_query_is_empty_not_an_error() {
        let snap = snapshot(&["The Matrix", "Titanic"]);
        let recs = snap.recommend("Nonexistent Title XYZ", 5).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn scores_are_descending_with_id_tie_break() {
        // Titanic and Avatar are both unrelated to the reference, so they
        // tie at 0.0 and must come back in id order.
        let snap = snapshot(&["The Matrix", "Matrix Reloaded", "Titanic", "Avatar"]);
        let recs = snap.recommend("The Matrix", 10).unwrap();

        assert_eq!(recs.len(), 3);
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if (pair[0].score - pair[1].score).abs() < f32::EPSILON {
                assert!(pair[0].entry.id < pair[1].entry.id);
            }
        }
        assert_eq!(recs[0].entry.id, 1);
        assert_eq!(recs[1].entry.id, 2);
        assert_eq!(recs[2].entry.id, 3);
    }

    #[test]
    fn top_n_bounds_the_result() {
        let snap = snapshot(&["The Matrix", "Matrix Reloaded", "Titanic", "Avatar"]);
        assert_eq!(snap.recommend("matrix", 1).unwrap().len(), 1);
        assert_eq!(snap.recommend("matrix", 100).unwrap().len(), 3);
        assert!(snap.recommend("matrix", 0).unwrap().is_empty());
    }

    #[test]
    fn recommend_for_unknown_id_is_not_found() {
        let snap = snapshot(&["The Matrix", "Titanic"]);
        let err = snap.recommend_for(99, 5).unwrap_err();
        assert_eq!(
            err,
            crate::Error::Catalog(CatalogError::NotFound { id: 99 })
        );
    }

    #[test]
    fn recommend_for_matches_free_text_path() {
        let snap = snapshot(&["The Matrix", "Matrix Reloaded", "Titanic"]);
        let by_text = snap.recommend("The Matrix", 2).unwrap();
        let by_id = snap.recommend_for(0, 2).unwrap();
        assert_eq!(by_text, by_id);
    }
}
