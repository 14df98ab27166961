//! Leaderboard ranking over a user population

use crate::types::UserProfile;
use serde::Serialize;

/// Maximum leaderboard size
pub const LEADERBOARD_LIMIT: usize = 10;

/// One row of the ranked leaderboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub branch: String,
    pub score: i64,
    pub skills: usize,
    pub badges: usize,
}

/// Rank students by activity score, optionally restricted to one branch
///
/// Score formula: `skills * 12 + badges * 25 + year * 2`. Mentors are
/// excluded. The sort is stable and descending, so equal scores keep input
/// order; at most the top 10 entries are returned.
pub fn leaderboard(users: &[UserProfile], branch: Option<&str>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .filter(|u| !u.is_mentor())
        .filter(|u| branch.map_or(true, |b| u.branch == b))
        .map(|u| {
            let skills = u.skills.len();
            let badges = u.badges.len();
            LeaderboardEntry {
                name: u.name.clone(),
                branch: u.branch.clone(),
                score: skills as i64 * 12 + badges as i64 * 25 + u.year as i64 * 2,
                skills,
                badges,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn student(name: &str, branch: &str, skills: usize, badges: usize, year: i32) -> UserProfile {
        UserProfile {
            id: name.to_string(),
            name: name.to_string(),
            email: format!("{}@example.edu", name),
            role: Role::Student,
            avatar: String::new(),
            bio: String::new(),
            skills: (0..skills).map(|i| format!("s{}", i)).collect(),
            interests: vec![],
            branch: branch.to_string(),
            year,
            compatibility: None,
            badges: (0..badges).map(|i| format!("b{}", i)).collect(),
        }
    }

    #[test]
    fn test_strictly_descending_for_distinct_scores() {
        let users = vec![
            student("low", "CS", 1, 0, 1),   // 14
            student("high", "CS", 4, 2, 3),  // 104
            student("mid", "CS", 2, 1, 2),   // 53
        ];
        let ranked = leaderboard(&users, None);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "high");
        assert_eq!(ranked[0].score, 104);
        assert_eq!(ranked[1].name, "mid");
        assert_eq!(ranked[2].name, "low");
        assert!(ranked.windows(2).all(|w| w[0].score > w[1].score));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let users = vec![
            student("first", "CS", 2, 0, 0),
            student("second", "CS", 2, 0, 0),
        ];
        let ranked = leaderboard(&users, None);
        assert_eq!(ranked[0].name, "first");
        assert_eq!(ranked[1].name, "second");
    }

    #[test]
    fn test_branch_filter_and_mentor_exclusion() {
        let mut mentor = student("prof", "CS", 9, 9, 0);
        mentor.role = Role::Mentor;
        let users = vec![
            student("cs", "CS", 1, 0, 1),
            student("it", "IT", 5, 2, 4),
            mentor,
        ];
        let ranked = leaderboard(&users, Some("CS"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "cs");
    }

    #[test]
    fn test_truncates_to_ten() {
        let users: Vec<UserProfile> = (0..15)
            .map(|i| student(&format!("u{}", i), "CS", i, 0, 1))
            .collect();
        assert_eq!(leaderboard(&users, None).len(), LEADERBOARD_LIMIT);
    }
}
