//! Pairwise compatibility reasons
//!
//! Explains why a candidate profile might be a good match for a viewer,
//! as a short ordered list of reason strings for display next to the
//! candidate's card.

use crate::types::UserProfile;

/// Maximum number of reasons returned per pair
const MAX_REASONS: usize = 3;

/// Generate at most three match reasons for a (viewer, candidate) pair
///
/// Rules fire in fixed priority order: shared skills, shared interests,
/// same branch, similar year level (within one year). Set intersections
/// preserve the viewer's ordering. When no rule fires, three generic filler
/// reasons are substituted so the caller never renders an empty explanation.
pub fn match_reasons(viewer: &UserProfile, candidate: &UserProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    let common_skills: Vec<&str> = viewer
        .skills
        .iter()
        .filter(|skill| candidate.skills.contains(skill))
        .map(|s| s.as_str())
        .collect();
    if !common_skills.is_empty() {
        reasons.push(format!("Shared skills: {}", common_skills.join(", ")));
    }

    let common_interests: Vec<&str> = viewer
        .interests
        .iter()
        .filter(|interest| candidate.interests.contains(interest))
        .map(|s| s.as_str())
        .collect();
    if !common_interests.is_empty() {
        reasons.push(format!("Common interests: {}", common_interests.join(", ")));
    }

    if viewer.branch == candidate.branch {
        reasons.push("Same branch/department".to_string());
    }

    if (viewer.year - candidate.year).abs() <= 1 {
        reasons.push("Similar year level".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Complementary skill sets".to_string());
        reasons.push("High compatibility score".to_string());
        reasons.push("Active on platform".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
