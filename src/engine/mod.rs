//! Scoring & matching engine
//!
//! Pure, deterministic transformations from profile data to human-readable
//! ratings and rankings. No I/O; the engine depends only on the data model,
//! never on the persistence store.
//!
//! - [`rating`]: multi-category performance rating for a single profile
//! - [`matching`]: pairwise compatibility reasons between two profiles
//! - [`insights`]: rule-based insight pass layered on top of a base rating
//! - [`peer`]: randomized peer-review perturbation (intentionally non-deterministic)
//! - [`leaderboard`]: ranked top performers over a population
//!
//! The engine performs no input validation: degenerate profiles (empty skill
//! sets, negative years) produce degenerate but non-crashing scores.

pub mod insights;
pub mod leaderboard;
pub mod matching;
pub mod peer;
pub mod rating;

pub use insights::{ai_feedback, insight_rules, InsightRule};
pub use leaderboard::{leaderboard, LeaderboardEntry, LEADERBOARD_LIMIT};
pub use matching::match_reasons;
pub use peer::peer_review_rating;
pub use rating::{calculate_user_rating, CategoryScores, Rating, RatingLevel};
