//! CampusNet - Campus Collaboration Core
//!
//! The headless core of a campus networking platform for students and
//! mentors. It provides:
//! - Typed, durable persistence for profiles, projects, events, and tasks
//! - Deterministic skill scoring, matching, and leaderboard ranking
//! - A capped per-user feedback history journal
//! - An AI advisor boundary with a deterministic offline fallback
//!
//! # Architecture
//!
//! The system is organized into several layers:
//! - **Types**: Core data structures (UserProfile, Project, MicroTask, etc.)
//! - **Storage**: Key-value persistence over pluggable backends (file, memory)
//! - **Engine**: Pure scoring, matching, insight, and ranking functions
//! - **Feedback**: The append-and-cap rating journal
//! - **Advisor**: Remote generative-AI integration and its local fallback
//!
//! # Example
//!
//! ```ignore
//! use campusnet::{calculate_user_rating, FeedbackLog, FeedbackSource, Store};
//! use campusnet::storage::file::FileBackend;
//!
//! fn main() -> campusnet::Result<()> {
//!     let store = Store::new(FileBackend::new("campusnet.json"));
//!     store.initialize_with_seed_data();
//!
//!     let user = store.find_user("1").expect("seeded user");
//!     let rating = calculate_user_rating(&user);
//!
//!     let log = FeedbackLog::new(&store);
//!     log.save(&user.id, rating, FeedbackSource::SelfAssessment);
//!
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod seed;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use advisor::{advisor_from_env, Advisor, GeminiAdvisor, LocalAdvisor};
pub use engine::{
    ai_feedback, calculate_user_rating, leaderboard, match_reasons, peer_review_rating,
    CategoryScores, LeaderboardEntry, Rating, RatingLevel,
};
pub use error::{CampusNetError, Result};
pub use feedback::{FeedbackEntry, FeedbackLog, FeedbackSource, HISTORY_CAP};
pub use storage::{KeyValueBackend, Store};
pub use types::{
    Event, EventType, Message, MicroTask, PreferencesUpdate, Project, ProjectStatus, Role, Theme,
    UserPreferences, UserProfile, UserUpdate,
};

/// Initialize stderr logging for embedding applications
///
/// Respects `RUST_LOG`, defaulting to `info`. Call at most once per process.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
