//! Core data types for the CampusNet platform
//!
//! This module defines the domain model shared by the persistence store and
//! the scoring engine: user profiles, projects, events, micro collaboration
//! tasks, messages, and user preferences.
//!
//! All serde renames preserve the exact JSON shapes of the durable store, so
//! an existing store can be migrated without rewriting its blobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform role for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Mentor => write!(f, "mentor"),
        }
    }
}

/// A student or mentor profile
///
/// Skills, interests, and badges are ordered sequences with set semantics:
/// duplicates are suppressed at write time through the `add_*` helpers, not
/// at read time. Mentors carry the year sentinel `0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Free-text department/branch category
    pub branch: String,
    /// Study year; mentors use the sentinel 0
    pub year: i32,
    /// Precomputed compatibility percentage, only meaningful relative to a
    /// specific viewer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<u8>,
    pub badges: Vec<String>,
}

impl UserProfile {
    /// Add a skill, suppressing duplicates (first occurrence wins)
    pub fn add_skill(&mut self, skill: impl Into<String>) {
        let skill = skill.into();
        if !self.skills.contains(&skill) {
            self.skills.push(skill);
        }
    }

    /// Add an interest, suppressing duplicates
    pub fn add_interest(&mut self, interest: impl Into<String>) {
        let interest = interest.into();
        if !self.interests.contains(&interest) {
            self.interests.push(interest);
        }
    }

    /// Award a badge; append-only, duplicates suppressed
    pub fn award_badge(&mut self, badge: impl Into<String>) {
        let badge = badge.into();
        if !self.badges.contains(&badge) {
            self.badges.push(badge);
        }
    }

    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }
}

/// Partial update applied to a stored profile
///
/// Only the populated fields are merged; everything else is left untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub compatibility: Option<u8>,
    pub badges: Option<Vec<String>>,
}

impl UserUpdate {
    /// Merge this update into an existing profile
    pub fn apply_to(&self, user: &mut UserProfile) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
        if let Some(bio) = &self.bio {
            user.bio = bio.clone();
        }
        if let Some(skills) = &self.skills {
            user.skills = skills.clone();
        }
        if let Some(interests) = &self.interests {
            user.interests = interests.clone();
        }
        if let Some(branch) = &self.branch {
            user.branch = branch.clone();
        }
        if let Some(year) = self.year {
            user.year = year;
        }
        if let Some(compatibility) = self.compatibility {
            user.compatibility = Some(compatibility);
        }
        if let Some(badges) = &self.badges {
            user.badges = badges.clone();
        }
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    Idea,
}

/// A student project listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Member user ids
    pub members: Vec<String>,
    pub status: ProjectStatus,
}

/// Campus event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Hackathon,
    Workshop,
    Seminar,
}

/// A campus event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

/// A small help request posted by a user
///
/// Tasks are never mutated after creation; "saved" and "completed" status
/// live in separate membership sets keyed by task id (see `storage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroTask {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Author display name
    pub author: String,
    pub skills_required: Vec<String>,
    /// Free-text reward ("Coffee / Shoutout", "Peer Review", ...)
    pub reward: String,
    pub created_at: String,
}

/// A direct message between two users
///
/// Append-only log; `read` is the only field mutated after creation, flipped
/// in bulk per (sender, recipient) thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Create a new unread message with a fresh id and the current timestamp
    pub fn new(
        from_user_id: impl Into<String>,
        to_user_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from_user_id: from_user_id.into(),
            to_user_id: to_user_id.into(),
            content: content.into(),
            timestamp: Utc::now(),
            read: false,
        }
    }
}

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Viewer-local preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
        }
    }
}

/// Partial update applied to stored preferences
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub theme: Option<Theme>,
    pub notifications: Option<bool>,
}

impl PreferencesUpdate {
    /// Merge this update into existing preferences
    pub fn apply_to(&self, preferences: &mut UserPreferences) {
        if let Some(theme) = self.theme {
            preferences.theme = theme;
        }
        if let Some(notifications) = self.notifications {
            preferences.notifications = notifications;
        }
    }
}
