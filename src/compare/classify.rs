//! Pairwise commit classification
//!
//! Every left commit is scanned against the right commits not yet claimed by
//! an earlier match. An identity match claims its right commit and ends the
//! scan. Each message match along the way claims its right commit too, so one
//! left commit may claim several right commits that share its message. A later
//! identity match upgrades the left commit but leaves those claims in place.

use crate::model::{BranchLog, Category, ColorMap, CommitRecord};

/// Classify both logs against each other.
///
/// Returns `(left_colors, right_colors)`, each index-aligned with its log.
pub fn classify(left: &BranchLog, right: &BranchLog) -> (ColorMap, ColorMap) {
    let candidates = right.commits();
    // Some(_) = claimed by a left commit
    let mut claims: Vec<Option<Category>> = vec![None; candidates.len()];

    let left_categories: Vec<Category> = left
        .commits()
        .iter()
        .map(|commit| scan(commit, candidates, &mut claims))
        .collect();

    let right_categories = claims
        .into_iter()
        .map(|claim| claim.unwrap_or(Category::Unmatched));

    (ColorMap::new(left_categories), ColorMap::new(right_categories))
}

/// Scan the unclaimed `candidates` for `commit`, claiming every match found.
///
/// Returns the category of `commit` itself.
fn scan(
    commit: &CommitRecord,
    candidates: &[CommitRecord],
    claims: &mut [Option<Category>],
) -> Category {
    let mut category = Category::Unmatched;

    for (candidate, claim) in candidates.iter().zip(claims.iter_mut()) {
        if claim.is_some() {
            continue;
        }
        if candidate.identity == commit.identity {
            *claim = Some(Category::IdentityMatch);
            return Category::IdentityMatch;
        }
        if candidate.message == commit.message {
            *claim = Some(Category::MessageMatch);
            category = Category::MessageMatch;
        }
    }

    category
}
