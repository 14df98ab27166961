//! Remote advisor backed by the Gemini generateContent API
//!
//! Follows the adapter contract strictly: transport, HTTP, and parse errors
//! never escape a trait method. Chat degrades to a fixed apology string and
//! the structured operations degrade to `Ok(None)`, each with a `warn!` so
//! the failure is visible in logs.

use crate::advisor::{
    Advisor, ChatRole, ChatTurn, ProjectIdea, ResumeData, ResumeReview, SkillInsight,
    SkillInsightRequest, SkillRecommendations, GEMINI_API_KEY_ENV,
};
use crate::error::{CampusNetError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, warn};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const CHAT_SYSTEM_INSTRUCTION: &str = "You are CampusNet AI, a helpful assistant for university students. You help them find teammates, suggest project ideas, give career advice, and help with technical questions. Keep responses concise and encouraging.";

/// Returned by chat when the remote call fails
pub const CHAT_APOLOGY: &str =
    "I'm having trouble connecting to my brain right now. Please try again later!";

/// Returned by chat when the remote call succeeds but carries no text
const CHAT_EMPTY_REPLY: &str = "I'm sorry, I couldn't process that request.";

/// Configuration for the remote advisor
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model to use (default: gemini-3-flash-preview)
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: env::var(GEMINI_API_KEY_ENV).unwrap_or_default(),
            model: "gemini-3-flash-preview".to_string(),
        }
    }
}

/// Advisor that calls the Gemini generateContent endpoint
pub struct GeminiAdvisor {
    config: GeminiConfig,
    client: reqwest::Client,
}

/// Gemini API request format
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiAdvisor {
    /// Create a new remote advisor with custom config
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(CampusNetError::Config(format!(
                "{} not set",
                GEMINI_API_KEY_ENV
            )));
        }

        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    /// Create with config from the environment
    pub fn with_default() -> Result<Self> {
        Self::new(GeminiConfig::default())
    }

    async fn call_api(
        &self,
        contents: Vec<Content>,
        system_instruction: Option<&str>,
        json_response: bool,
    ) -> Result<String> {
        debug!("Calling Gemini API");

        let request = GeminiRequest {
            contents,
            system_instruction: system_instruction.map(|text| SystemInstruction {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
            generation_config: json_response.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        let url = format!("{}/{}:generateContent", API_BASE, self.config.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(CampusNetError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CampusNetError::AdvisorApi(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| CampusNetError::AdvisorApi(format!("Failed to parse response: {}", e)))?;

        api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CampusNetError::AdvisorApi("Empty response from API".to_string()))
    }

    /// Send a single-turn prompt expecting a JSON body and parse it. Any
    /// failure along the way logs and collapses to `None`.
    async fn generate_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        prompt: String,
    ) -> Result<Option<T>> {
        let contents = vec![Content {
            role: "user".to_string(),
            parts: vec![Part { text: prompt }],
        }];

        let text = match self.call_api(contents, None, true).await {
            Ok(text) => text,
            Err(e) => {
                warn!("{} request failed: {}", operation, e);
                return Ok(None);
            }
        };

        match serde_json::from_str(strip_json_fences(&text)) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("{} returned malformed JSON: {}", operation, e);
                Ok(None)
            }
        }
    }
}

/// Models sometimes wrap JSON-mode output in markdown code fences
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    async fn chat(&self, prompt: &str, history: &[ChatTurn]) -> Result<String> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: match turn.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Model => "model".to_string(),
                },
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });

        match self
            .call_api(contents, Some(CHAT_SYSTEM_INSTRUCTION), false)
            .await
        {
            Ok(text) if text.is_empty() => Ok(CHAT_EMPTY_REPLY.to_string()),
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("Chat request failed: {}", e);
                Ok(CHAT_APOLOGY.to_string())
            }
        }
    }

    async fn project_idea(
        &self,
        skills: &[String],
        interests: &[String],
    ) -> Result<Option<ProjectIdea>> {
        let prompt = format!(
            "Generate a unique and practical project idea for a university student with the following skills: {} and interests: {}. Provide a title, a short description, and a list of 3 key features.",
            skills.join(", "),
            interests.join(", ")
        );
        self.generate_json("Project idea", prompt).await
    }

    async fn optimize_resume(&self, resume: &ResumeData) -> Result<Option<ResumeReview>> {
        let prompt = format!(
            "Analyze the following resume data and provide 3 specific suggestions to improve it for ATS systems and campus placements. Resume Data: {}",
            serde_json::to_string(resume)?
        );
        self.generate_json("Resume optimization", prompt).await
    }

    async fn recommend_skills(
        &self,
        resume: &ResumeData,
    ) -> Result<Option<SkillRecommendations>> {
        let prompt = format!(
            "Based on the following student's past experience, projects, and current skills, suggest 5-10 additional technical and soft skills that would be relevant for campus placements and ATS screening. Avoid repeating skills that already exist. Return only concise skill names.\n\nData: {}",
            serde_json::to_string(resume)?
        );
        self.generate_json("Skill recommendation", prompt).await
    }

    async fn skill_insight(
        &self,
        request: &SkillInsightRequest,
    ) -> Result<Option<SkillInsight>> {
        let prompt = format!(
            "You are a campus career/learning coach. Given a student's skills, interests, and branch, recommend ONE high-impact skill to learn next. Provide a short reason (1-2 sentences), a 4-step practical learning plan, and 1-3 small project ideas.\n\nInput: {}",
            serde_json::to_string(request)?
        );
        self.generate_json("Skill insight", prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_key() {
        let config = GeminiConfig {
            api_key: String::new(),
            model: "gemini-3-flash-preview".to_string(),
        };
        assert!(GeminiAdvisor::new(config).is_err());
    }

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(strip_json_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_json_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_json_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_request_serializes_gemini_wire_names() {
        let request = GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hi".to_string(),
                }],
            }],
            system_instruction: Some(SystemInstruction {
                parts: vec![Part {
                    text: "sys".to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\""));
    }

    #[test]
    fn test_response_parses_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}],"role":"model"}}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "hello");
    }
}
