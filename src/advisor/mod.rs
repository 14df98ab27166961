//! External AI advisor adapter
//!
//! Capability boundary for advisory features: free-form chat, project-idea
//! generation, resume optimization, skill recommendation, and skill-learning
//! insight. Each operation either calls a remote generative-text service
//! ([`gemini::GeminiAdvisor`]) or returns a deterministic local suggestion
//! ([`local::LocalAdvisor`]).
//!
//! The scoring engine and the persistence store never depend on this module;
//! latency or failure here must never block or crash them. Remote failures
//! degrade to `None` (structured calls) or a fixed apology string (chat) --
//! callers treat the fallback and the remote path as equally valid.

pub mod gemini;
pub mod local;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use gemini::{GeminiAdvisor, GeminiConfig};
pub use local::LocalAdvisor;

/// Environment variable carrying the remote service credential
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Speaker of a prior chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One prior turn of a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Generated project idea
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Resume optimization result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReview {
    /// Optimization score from 0 to 100
    pub score: u8,
    pub suggestions: Vec<String>,
}

/// Suggested additional skills for a resume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecommendations {
    pub suggested_skills: Vec<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// One high-impact skill to learn next, with a practical plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInsight {
    pub recommended_skill: String,
    #[serde(default)]
    pub why: Option<String>,
    pub plan: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

/// Resume fields sent to the advisor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    #[serde(default)]
    pub existing_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub period: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    pub role: String,
    pub desc: String,
}

/// Profile slice sent with a skill-insight request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInsightRequest {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

/// Advisory capability
///
/// Chat never fails past the boundary: remote errors map to a fixed apology
/// string. Structured operations return `Ok(None)` on remote failure or a
/// malformed response; callers must handle `None` gracefully.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Free-form assistant reply to a prompt with optional prior turns
    async fn chat(&self, prompt: &str, history: &[ChatTurn]) -> Result<String>;

    /// One practical project idea for the given skills and interests
    async fn project_idea(
        &self,
        skills: &[String],
        interests: &[String],
    ) -> Result<Option<ProjectIdea>>;

    /// Score a resume and suggest improvements
    async fn optimize_resume(&self, resume: &ResumeData) -> Result<Option<ResumeReview>>;

    /// Suggest additional skills worth adding to a resume
    async fn recommend_skills(&self, resume: &ResumeData)
        -> Result<Option<SkillRecommendations>>;

    /// Recommend one high-impact skill to learn next
    async fn skill_insight(
        &self,
        request: &SkillInsightRequest,
    ) -> Result<Option<SkillInsight>>;
}

/// Select an advisor from the environment
///
/// An absent or empty `GEMINI_API_KEY` deterministically selects the local
/// fallback; the remote path is never attempted without a credential.
pub fn advisor_from_env() -> Box<dyn Advisor> {
    match GeminiAdvisor::with_default() {
        Ok(remote) => Box::new(remote),
        Err(_) => {
            debug!("No advisor credential configured, using local fallback");
            Box::new(LocalAdvisor)
        }
    }
}
