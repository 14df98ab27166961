//! Integration tests for the feedback history journal over the file backend

use campusnet::engine::{ai_feedback, calculate_user_rating, peer_review_rating};
use campusnet::feedback::{FeedbackLog, FeedbackSource, HISTORY_CAP};
use campusnet::storage::file::FileBackend;
use campusnet::storage::Store;
use campusnet::types::{Role, UserProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: "Alex Johnson".to_string(),
        email: "alex@example.edu".to_string(),
        role: Role::Student,
        avatar: String::new(),
        bio: "Full-stack enthusiast".to_string(),
        skills: vec!["React".to_string(), "Python".to_string()],
        interests: vec!["Web Development".to_string()],
        branch: "Computer Science".to_string(),
        year: 3,
        compatibility: None,
        badges: vec!["Hackathon Pro".to_string()],
    }
}

#[test]
fn test_all_three_sources_share_one_capped_journal() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(FileBackend::new(temp_dir.path().join("campusnet.json")));
    let log = FeedbackLog::new(&store);
    let user = profile("1");

    log.save(&user.id, calculate_user_rating(&user), FeedbackSource::SelfAssessment);
    log.save(&user.id, ai_feedback(&user), FeedbackSource::AiAnalysis);
    let mut rng = StdRng::seed_from_u64(11);
    log.save(
        &user.id,
        peer_review_rating(&user.id, &mut rng),
        FeedbackSource::PeerReview,
    );

    let history = log.history(&user.id);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].source, FeedbackSource::PeerReview);
    assert_eq!(history[2].source, FeedbackSource::SelfAssessment);
}

#[test]
fn test_history_survives_reopening_and_stays_capped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("campusnet.json");
    let user = profile("1");

    {
        let store = Store::new(FileBackend::new(&path));
        let log = FeedbackLog::new(&store);
        for _ in 0..(HISTORY_CAP + 5) {
            log.save(&user.id, calculate_user_rating(&user), FeedbackSource::SelfAssessment);
        }
    }

    let store = Store::new(FileBackend::new(&path));
    let log = FeedbackLog::new(&store);
    let history = log.history(&user.id);
    assert_eq!(history.len(), HISTORY_CAP);
    // Newest first, strictly non-increasing timestamps
    assert!(history
        .windows(2)
        .all(|pair| pair[0].date >= pair[1].date));
}

#[test]
fn test_stored_json_uses_durable_key_and_wire_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("campusnet.json");
    let user = profile("7");

    let store = Store::new(FileBackend::new(&path));
    let log = FeedbackLog::new(&store);
    log.save(&user.id, calculate_user_rating(&user), FeedbackSource::AiAnalysis);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("simply_connect_feedback_7"));
    // Entry and rating fields keep the camelCase wire shape
    assert!(raw.contains("userId"));
    assert!(raw.contains("overallScore"));
    assert!(raw.contains("technicalSkills"));
    assert!(raw.contains("nextMilestone"));
    assert!(raw.contains("\\\"type\\\":\\\"ai-analysis\\\""));
}

#[test]
fn test_corrupt_history_resets_without_touching_other_users() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(FileBackend::new(temp_dir.path().join("campusnet.json")));
    let log = FeedbackLog::new(&store);
    let alice = profile("1");
    let bob = profile("2");

    log.save(&alice.id, calculate_user_rating(&alice), FeedbackSource::SelfAssessment);
    log.save(&bob.id, calculate_user_rating(&bob), FeedbackSource::SelfAssessment);

    // Overwrite alice's history with garbage through the raw backend key
    use campusnet::storage::{keys, KeyValueBackend};
    store
        .backend()
        .write(&keys::feedback(&alice.id), "not json")
        .unwrap();

    assert!(log.history(&alice.id).is_empty());
    assert_eq!(log.history(&bob.id).len(), 1);

    // Saving after corruption starts a clean journal
    log.save(&alice.id, calculate_user_rating(&alice), FeedbackSource::PeerReview);
    assert_eq!(log.history(&alice.id).len(), 1);
}
