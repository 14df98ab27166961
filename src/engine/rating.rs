//! Single-user rating computation
//!
//! Deterministic heuristics that turn a profile's skills, badges, interests,
//! and bio into a five-category performance rating with generated strength,
//! improvement, achievement, and recommendation text.

use crate::types::UserProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Experience level derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl RatingLevel {
    /// Level thresholds: `<60` Beginner, `<75` Intermediate, `<90` Advanced,
    /// else Expert
    pub fn from_score(overall: u8) -> Self {
        if overall >= 90 {
            RatingLevel::Expert
        } else if overall >= 75 {
            RatingLevel::Advanced
        } else if overall >= 60 {
            RatingLevel::Intermediate
        } else {
            RatingLevel::Beginner
        }
    }

    /// Fixed promotion text for the current level
    pub fn next_milestone(&self) -> &'static str {
        match self {
            RatingLevel::Beginner => {
                "Reach Intermediate level by expanding your skill set and participating in 3+ projects"
            }
            RatingLevel::Intermediate => {
                "Reach Advanced level by mentoring others and leading a project team"
            }
            RatingLevel::Advanced => {
                "Reach Expert level by organizing events and publishing technical content"
            }
            RatingLevel::Expert => {
                "Maintain Expert status by continuing to innovate and lead in the community"
            }
        }
    }
}

impl std::fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingLevel::Beginner => write!(f, "Beginner"),
            RatingLevel::Intermediate => write!(f, "Intermediate"),
            RatingLevel::Advanced => write!(f, "Advanced"),
            RatingLevel::Expert => write!(f, "Expert"),
        }
    }
}

/// The five named category scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub technical_skills: u8,
    pub collaboration: u8,
    pub leadership: u8,
    pub innovation: u8,
    pub communication: u8,
}

impl CategoryScores {
    /// Unweighted mean of the five categories, rounded to nearest
    pub fn mean_rounded(&self) -> u8 {
        let sum = self.technical_skills as u32
            + self.collaboration as u32
            + self.leadership as u32
            + self.innovation as u32
            + self.communication as u32;
        ((sum as f64 / 5.0).round() as u32).min(100) as u8
    }
}

/// A computed performance rating
///
/// Ratings are immutable value objects; each computation yields a fresh one.
/// The overall score is always the rounded mean of the five categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub overall_score: u8,
    pub categories: CategoryScores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub achievements: Vec<String>,
    pub recommendations: Vec<String>,
    pub level: RatingLevel,
    pub next_milestone: String,
}

fn capped(raw: u32) -> u8 {
    raw.min(100) as u8
}

/// Compute a rating for a single profile
///
/// Deterministic, no randomness. Category formulas:
/// - technicalSkills: `min(100, skills * 15)`
/// - collaboration: `min(100, badges * 20 + 30)`
/// - leadership: mentors fixed at 85, otherwise `min(100, badges * 15 + 40)`
/// - innovation: `min(100, |skills ∪ interests| * 12)`
/// - communication: 80 with a bio, 60 without
pub fn calculate_user_rating(user: &UserProfile) -> Rating {
    let skill_count = user.skills.len() as u32;
    let badge_count = user.badges.len() as u32;

    let technical_skills = capped(skill_count * 15);
    let collaboration = capped(badge_count * 20 + 30);
    let leadership = if user.is_mentor() {
        85
    } else {
        capped(badge_count * 15 + 40)
    };

    // Union of skills and interests; near-duplicate phrasings ("React" vs
    // "React Development") count separately. Intentional coarse heuristic.
    let unique: HashSet<&str> = user
        .skills
        .iter()
        .chain(user.interests.iter())
        .map(|s| s.as_str())
        .collect();
    let innovation = capped(unique.len() as u32 * 12);

    let communication = if user.bio.is_empty() { 60 } else { 80 };

    let categories = CategoryScores {
        technical_skills,
        collaboration,
        leadership,
        innovation,
        communication,
    };
    let overall_score = categories.mean_rounded();
    let level = RatingLevel::from_score(overall_score);

    let mut strengths = Vec::new();
    if technical_skills >= 80 {
        strengths.push("Strong technical foundation with diverse skill set".to_string());
    }
    if collaboration >= 80 {
        strengths.push("Excellent team player and collaborator".to_string());
    }
    if leadership >= 80 {
        strengths.push("Natural leadership abilities".to_string());
    }
    if innovation >= 80 {
        strengths.push("Innovative thinker with creative problem-solving skills".to_string());
    }
    if communication >= 80 {
        strengths.push("Clear and effective communicator".to_string());
    }

    let mut improvements = Vec::new();
    if technical_skills < 70 {
        improvements.push("Expand technical skill set through courses and practice".to_string());
    }
    if collaboration < 70 {
        improvements
            .push("Increase participation in team projects and collaborations".to_string());
    }
    if leadership < 70 {
        improvements.push("Take on leadership roles in group activities".to_string());
    }
    if innovation < 70 {
        improvements.push("Explore creative approaches to problem-solving".to_string());
    }
    if communication < 70 {
        improvements.push("Work on presentation and communication skills".to_string());
    }

    let mut achievements = Vec::new();
    if !user.badges.is_empty() {
        achievements.push(format!("Earned {} achievement badges", user.badges.len()));
    }
    if user.skills.len() >= 5 {
        achievements.push(format!("Mastered {} technical skills", user.skills.len()));
    }
    if user.interests.len() >= 3 {
        achievements.push(format!("Active in {} interest areas", user.interests.len()));
    }
    if user.is_mentor() {
        achievements.push("Recognized as a mentor in the community".to_string());
    }

    let mut recommendations = Vec::new();
    if technical_skills < 85 {
        let focus = user
            .skills
            .first()
            .map(|s| s.as_str())
            .unwrap_or("a new technology");
        recommendations.push(format!(
            "Focus on learning {} to boost technical skills",
            focus
        ));
    }
    if collaboration < 85 {
        recommendations
            .push("Join more team projects to enhance collaboration experience".to_string());
    }
    if leadership < 85 && !user.is_mentor() {
        recommendations
            .push("Consider mentoring junior students to develop leadership skills".to_string());
    }
    if innovation < 85 {
        recommendations.push("Participate in hackathons and innovation challenges".to_string());
    }
    recommendations
        .push("Maintain consistent activity on the platform to build your reputation".to_string());

    Rating {
        overall_score,
        categories,
        strengths,
        improvements,
        achievements,
        recommendations,
        level,
        next_milestone: level.next_milestone().to_string(),
    }
}
