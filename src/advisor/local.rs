//! Deterministic local advisor
//!
//! Drop-in stand-in for the remote advisor when no API credential is
//! configured. Every operation returns a fixed, sensible canned value so the
//! rest of the system behaves identically in offline and online modes.

use crate::advisor::{
    Advisor, ChatTurn, ProjectIdea, ResumeData, ResumeReview, SkillInsight, SkillInsightRequest,
    SkillRecommendations,
};
use crate::error::Result;
use async_trait::async_trait;

/// Advisor with canned responses, used when no credential is configured
pub struct LocalAdvisor;

#[async_trait]
impl Advisor for LocalAdvisor {
    async fn chat(&self, _prompt: &str, _history: &[ChatTurn]) -> Result<String> {
        Ok("Hi! I'm CampusNet AI. I'm here to help you find teammates, suggest project ideas, and assist with your campus collaboration needs. How can I help you today?".to_string())
    }

    async fn project_idea(
        &self,
        _skills: &[String],
        _interests: &[String],
    ) -> Result<Option<ProjectIdea>> {
        Ok(Some(ProjectIdea {
            title: "Campus Event Finder App".to_string(),
            description: "A mobile app that helps students discover and register for campus events based on their interests and schedule.".to_string(),
            features: vec![
                "Personalized event recommendations".to_string(),
                "Calendar integration".to_string(),
                "Social networking features".to_string(),
            ],
        }))
    }

    async fn optimize_resume(&self, _resume: &ResumeData) -> Result<Option<ResumeReview>> {
        Ok(Some(ResumeReview {
            score: 75,
            suggestions: vec![
                "Add more quantifiable achievements to your experience section".to_string(),
                "Include relevant technical skills you've gained from projects".to_string(),
                "Consider adding a summary section at the top of your resume".to_string(),
            ],
        }))
    }

    async fn recommend_skills(
        &self,
        _resume: &ResumeData,
    ) -> Result<Option<SkillRecommendations>> {
        Ok(Some(SkillRecommendations {
            suggested_skills: vec![
                "Problem Solving".to_string(),
                "Team Collaboration".to_string(),
                "JavaScript".to_string(),
                "React".to_string(),
                "Git".to_string(),
            ],
            reasoning: Some("Based on your project and internship experience, these skills are commonly highlighted in campus placement resumes.".to_string()),
        }))
    }

    async fn skill_insight(
        &self,
        _request: &SkillInsightRequest,
    ) -> Result<Option<SkillInsight>> {
        Ok(Some(SkillInsight {
            recommended_skill: "Three.js".to_string(),
            why: Some("It complements your frontend/UI interests and helps you stand out with interactive 3D portfolios and demos.".to_string()),
            plan: vec![
                "Learn core concepts: scene, camera, renderer".to_string(),
                "Build a simple 3D landing page hero section".to_string(),
                "Add animations + interactions (orbit controls, raycasting)".to_string(),
                "Publish a demo and add it to your resume/portfolio".to_string(),
            ],
            projects: vec![
                "Interactive 3D portfolio homepage".to_string(),
                "3D product showcase for a campus startup".to_string(),
            ],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_is_deterministic() {
        let advisor = LocalAdvisor;
        let a = advisor.chat("anything", &[]).await.unwrap();
        let b = advisor.chat("something else", &[]).await.unwrap();
        assert_eq!(a, b);
        assert!(a.contains("CampusNet AI"));
    }

    #[tokio::test]
    async fn test_structured_responses_are_always_some() {
        let advisor = LocalAdvisor;
        let resume = ResumeData::default();
        let request = SkillInsightRequest::default();

        let idea = advisor.project_idea(&[], &[]).await.unwrap().unwrap();
        assert_eq!(idea.title, "Campus Event Finder App");
        assert_eq!(idea.features.len(), 3);

        let review = advisor.optimize_resume(&resume).await.unwrap().unwrap();
        assert_eq!(review.score, 75);
        assert_eq!(review.suggestions.len(), 3);

        let skills = advisor.recommend_skills(&resume).await.unwrap().unwrap();
        assert_eq!(skills.suggested_skills.len(), 5);
        assert!(skills.reasoning.is_some());

        let insight = advisor.skill_insight(&request).await.unwrap().unwrap();
        assert_eq!(insight.recommended_skill, "Three.js");
        assert_eq!(insight.plan.len(), 4);
    }
}
