//! Cosine similarity over the vector space
//!
//! Rows of a [`TermVectorSpace`] are L2-normalized, so cosine similarity is
//! a plain dot product. Scores for one row against the whole corpus are
//! computed in a single matrix-vector pass because this sits on the hot
//! path of every recommendation request.

use crate::error::{Error, Result};
use crate::vectorize::TermVectorSpace;

/// Similarity of row `index` against every row of the space, in row order.
///
/// `output[index]` is the self-similarity: 1.0 for a nonzero row, 0.0 for a
/// zero row (a document that was empty or all stop words). Fails with
/// [`Error::IndexOutOfRange`] when `index` is not a valid row.
pub fn scores(space: &TermVectorSpace, index: usize) -> Result<Vec<f32>> {
    if index >= space.len() {
        return Err(Error::IndexOutOfRange {
            index,
            len: space.len(),
        });
    }

    let query = space.row(index);
    Ok((0..space.len())
        .map(|row| dot(query, space.row(row)))
        .collect())
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::TfidfVectorizer;

    const EPS: f32 = 1e-5;

    fn fit(corpus: &[&str]) -> TermVectorSpace {
        TfidfVectorizer::new().fit(corpus).unwrap()
    }

    #[test]
    fn self_similarity_is_one_for_nonzero_rows() {
        let space = fit(&["The Matrix", "Matrix Reloaded", "Titanic"]);
        for i in 0..space.len() {
            let s = scores(&space, i).unwrap();
            assert_eq!(s.len(), 3);
            assert!((s[i] - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn self_similarity_is_zero_for_zero_rows() {
        let space = fit(&["The Matrix", "de la que"]);
        let s = scores(&space, 1).unwrap();
        assert_eq!(s[1], 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let space = fit(&[
            "The Matrix",
            "Matrix Reloaded",
            "Titanic",
            "Matrix Revolutions",
        ]);
        for i in 0..space.len() {
            let si = scores(&space, i).unwrap();
            for j in 0..space.len() {
                let sj = scores(&space, j).unwrap();
                assert!((si[j] - sj[i]).abs() < EPS, "asymmetric at ({i}, {j})");
            }
        }
    }

    #[test]
    fn shared_tokens_score_higher_than_disjoint_ones() {
        let space = fit(&["The Matrix", "Matrix Reloaded", "Titanic"]);
        let s = scores(&space, 0).unwrap();
        assert!(s[1] > s[2]);
        assert!(s[1] > 0.0);
        assert_eq!(s[2], 0.0);
    }

    #[test]
    fn out_of_range_row_is_rejected() {
        let space = fit(&["The Matrix"]);
        assert_eq!(
            scores(&space, 1).unwrap_err(),
            Error::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn scores_stay_within_unit_interval() {
        let space = fit(&[
            "El Secreto de sus Ojos",
            "Los Ojos de Julia",
            "El Secreto del Bosque",
        ]);
        let s = scores(&space, 0).unwrap();
        for value in s {
            assert!((0.0..=1.0 + EPS).contains(&value));
        }
    }
}
