//! Pattern-based insight rules for AI-flavored feedback
//!
//! A small rule engine: an ordered list of named (predicate, effect) pairs
//! evaluated against a profile. Each firing rule appends fixed sentences to
//! a base rating's strength/improvement/recommendation lists; nothing is
//! merged or deduplicated, so repeated application repeats the text.

use crate::engine::rating::{calculate_user_rating, Rating};
use crate::types::UserProfile;

/// Skills treated as the modern web stack
const MODERN_WEB_SKILLS: &[&str] = &["React", "Node.js", "Python", "JavaScript", "TypeScript"];

/// One insight rule: a predicate over the profile and the text it appends
pub struct InsightRule {
    pub name: &'static str,
    pub predicate: fn(&UserProfile) -> bool,
    pub apply: fn(&mut Rating),
}

/// Interests that overlap a skill name by substring match, either direction,
/// case-insensitive
fn aligned_interest_count(user: &UserProfile) -> usize {
    user.interests
        .iter()
        .filter(|interest| {
            let interest = interest.to_lowercase();
            user.skills.iter().any(|skill| {
                let skill = skill.to_lowercase();
                skill.contains(&interest) || interest.contains(&skill)
            })
        })
        .count()
}

fn modern_web_count(user: &UserProfile) -> usize {
    user.skills
        .iter()
        .filter(|skill| MODERN_WEB_SKILLS.contains(&skill.as_str()))
        .count()
}

static RULES: &[InsightRule] = &[
    InsightRule {
        name: "modern_web_stack",
        predicate: |user| modern_web_count(user) >= 3,
        apply: |rating| {
            rating
                .strengths
                .push("Strong foundation in modern web technologies".to_string());
        },
    },
    InsightRule {
        name: "interest_skill_alignment",
        predicate: |user| aligned_interest_count(user) >= 2,
        apply: |rating| {
            rating
                .strengths
                .push("Excellent alignment between interests and skills".to_string());
        },
    },
    InsightRule {
        name: "missing_alignment",
        predicate: |user| aligned_interest_count(user) == 0,
        apply: |rating| {
            rating
                .recommendations
                .push("Consider developing skills that align with your interests".to_string());
        },
    },
    InsightRule {
        name: "hackathon_pro",
        predicate: |user| user.badges.iter().any(|b| b == "Hackathon Pro"),
        apply: |rating| {
            rating
                .strengths
                .push("Proven ability to perform under pressure".to_string());
            rating
                .recommendations
                .push("Leverage hackathon experience in real-world projects".to_string());
        },
    },
    InsightRule {
        name: "top_contributor",
        predicate: |user| user.badges.iter().any(|b| b == "Top Contributor"),
        apply: |rating| {
            rating
                .strengths
                .push("Consistent and valuable contributor to the community".to_string());
            rating
                .recommendations
                .push("Consider taking on mentoring roles".to_string());
        },
    },
];

/// The ordered rule set, exposed for inspection and tests
pub fn insight_rules() -> &'static [InsightRule] {
    RULES
}

/// Compute an AI-flavored rating: the deterministic base rating plus the
/// insight pass. Numeric scores are untouched; only the text lists grow.
pub fn ai_feedback(user: &UserProfile) -> Rating {
    let mut rating = calculate_user_rating(user);
    for rule in RULES {
        if (rule.predicate)(user) {
            (rule.apply)(&mut rating);
        }
    }
    rating
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn profile(skills: &[&str], interests: &[&str], badges: &[&str]) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Test".to_string(),
            email: "t@example.edu".to_string(),
            role: Role::Student,
            avatar: String::new(),
            bio: "bio".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            branch: "CS".to_string(),
            year: 2,
            compatibility: None,
            badges: badges.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_modern_web_rule_needs_three_skills() {
        let two = profile(&["React", "Python"], &[], &[]);
        let three = profile(&["React", "Python", "TypeScript"], &[], &[]);
        let strength = "Strong foundation in modern web technologies".to_string();
        assert!(!ai_feedback(&two).strengths.contains(&strength));
        assert!(ai_feedback(&three).strengths.contains(&strength));
    }

    #[test]
    fn test_alignment_substring_matches_either_direction() {
        // "React" skill vs "React Development" interest, "ML" interest vs
        // "Machine Learning ML" style containment
        let user = profile(
            &["React", "Rust"],
            &["React Development", "Rust Web Services"],
            &[],
        );
        assert_eq!(aligned_interest_count(&user), 2);
        assert!(ai_feedback(&user)
            .strengths
            .contains(&"Excellent alignment between interests and skills".to_string()));
    }

    #[test]
    fn test_no_alignment_adds_recommendation() {
        let user = profile(&["C++"], &["Photography"], &[]);
        assert!(ai_feedback(&user)
            .recommendations
            .contains(&"Consider developing skills that align with your interests".to_string()));
    }

    #[test]
    fn test_badge_rules_append_pairs() {
        let user = profile(&[], &[], &["Hackathon Pro", "Top Contributor"]);
        let rating = ai_feedback(&user);
        assert!(rating
            .strengths
            .contains(&"Proven ability to perform under pressure".to_string()));
        assert!(rating
            .recommendations
            .contains(&"Leverage hackathon experience in real-world projects".to_string()));
        assert!(rating
            .strengths
            .contains(&"Consistent and valuable contributor to the community".to_string()));
        assert!(rating
            .recommendations
            .contains(&"Consider taking on mentoring roles".to_string()));
    }

    #[test]
    fn test_insights_do_not_change_scores() {
        let user = profile(
            &["React", "Python", "TypeScript"],
            &["Machine Learning"],
            &["Hackathon Pro"],
        );
        let base = calculate_user_rating(&user);
        let enhanced = ai_feedback(&user);
        assert_eq!(enhanced.overall_score, base.overall_score);
        assert_eq!(enhanced.categories, base.categories);
        assert!(enhanced.strengths.len() > base.strengths.len());
    }

    #[test]
    fn test_rules_are_named_and_ordered() {
        let names: Vec<&str> = insight_rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "modern_web_stack",
                "interest_skill_alignment",
                "missing_alignment",
                "hackathon_pro",
                "top_contributor"
            ]
        );
    }
}
