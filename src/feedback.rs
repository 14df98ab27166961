//! Feedback history log
//!
//! An append-and-cap journal of computed ratings per user, keyed by user id
//! and stored through the persistence store. Entries are always inserted at
//! the head and never reordered, so eviction is FIFO by insertion order:
//! once a user's history exceeds the cap, the oldest entry falls off.
//! No update or delete operation exists.

use crate::engine::Rating;
use crate::storage::{keys, KeyValueBackend, Store};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Maximum retained entries per user
pub const HISTORY_CAP: usize = 10;

/// Where a rating came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackSource {
    SelfAssessment,
    PeerReview,
    AiAnalysis,
}

impl std::fmt::Display for FeedbackSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackSource::SelfAssessment => write!(f, "self-assessment"),
            FeedbackSource::PeerReview => write!(f, "peer-review"),
            FeedbackSource::AiAnalysis => write!(f, "ai-analysis"),
        }
    }
}

/// One journal entry wrapping an immutable rating
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: String,
    pub user_id: String,
    pub rating: Rating,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub source: FeedbackSource,
}

/// Append-only feedback journal over a [`Store`]
pub struct FeedbackLog<'a, B> {
    store: &'a Store<B>,
}

impl<'a, B: KeyValueBackend> FeedbackLog<'a, B> {
    pub fn new(store: &'a Store<B>) -> Self {
        Self { store }
    }

    /// Record a rating for a user: constructs a fresh entry, prepends it to
    /// the user's history, truncates to the cap, and writes back. Returns
    /// the stored entry.
    pub fn save(&self, user_id: &str, rating: Rating, source: FeedbackSource) -> FeedbackEntry {
        let entry = FeedbackEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            rating,
            date: Utc::now(),
            source,
        };

        let mut history = self.history(user_id);
        history.insert(0, entry.clone());
        if history.len() > HISTORY_CAP {
            debug!(
                "Feedback history for {} at cap, evicting {} oldest",
                user_id,
                history.len() - HISTORY_CAP
            );
            history.truncate(HISTORY_CAP);
        }
        self.store
            .write_collection(&keys::feedback(user_id), &history);
        entry
    }

    /// Full (≤ cap) history for a user, most-recent-first
    pub fn history(&self, user_id: &str) -> Vec<FeedbackEntry> {
        self.store.read_collection(&keys::feedback(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_user_rating;
    use crate::storage::memory::MemoryBackend;
    use crate::types::{Role, UserProfile};

    fn sample_rating() -> Rating {
        calculate_user_rating(&UserProfile {
            id: "1".to_string(),
            name: "Alex".to_string(),
            email: "alex@example.edu".to_string(),
            role: Role::Student,
            avatar: String::new(),
            bio: "bio".to_string(),
            skills: vec!["React".to_string()],
            interests: vec![],
            branch: "CS".to_string(),
            year: 3,
            compatibility: None,
            badges: vec![],
        })
    }

    #[test]
    fn test_save_prepends_newest_first() {
        let store = Store::new(MemoryBackend::new());
        let log = FeedbackLog::new(&store);
        let first = log.save("1", sample_rating(), FeedbackSource::SelfAssessment);
        let second = log.save("1", sample_rating(), FeedbackSource::AiAnalysis);

        let history = log.history("1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
    }

    #[test]
    fn test_history_never_exceeds_cap() {
        let store = Store::new(MemoryBackend::new());
        let log = FeedbackLog::new(&store);
        let mut ids = Vec::new();
        for _ in 0..25 {
            ids.push(log.save("1", sample_rating(), FeedbackSource::AiAnalysis).id);
        }

        let history = log.history("1");
        assert_eq!(history.len(), HISTORY_CAP);
        // The retained entries are the 10 most recently inserted, newest first
        let expected: Vec<&String> = ids.iter().rev().take(HISTORY_CAP).collect();
        let actual: Vec<&String> = history.iter().map(|e| &e.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_histories_are_keyed_per_user() {
        let store = Store::new(MemoryBackend::new());
        let log = FeedbackLog::new(&store);
        log.save("1", sample_rating(), FeedbackSource::PeerReview);
        assert_eq!(log.history("1").len(), 1);
        assert!(log.history("2").is_empty());
    }

    #[test]
    fn test_source_serializes_kebab_case() {
        let json = serde_json::to_string(&FeedbackSource::SelfAssessment).unwrap();
        assert_eq!(json, "\"self-assessment\"");
        let json = serde_json::to_string(&FeedbackSource::AiAnalysis).unwrap();
        assert_eq!(json, "\"ai-analysis\"");
    }
}
