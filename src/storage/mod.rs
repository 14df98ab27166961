//! Persistence store for the CampusNet platform
//!
//! Provides a typed facade over a single string-keyed durable store, with
//! safe defaults when a key is absent or its value is corrupt.
//!
//! The design splits into two layers:
//! - [`KeyValueBackend`]: the injectable raw store (one JSON blob per key)
//! - [`Store`]: named, typed collections plus read-modify-write helpers
//!
//! Failure semantics: backend errors and corrupt values are caught here,
//! logged, and degrade to an empty collection on read or a dropped write.
//! The store never propagates a fatal error to callers; the platform stays
//! usable (with data loss) rather than crashing.
//!
//! Concurrency: every mutation is a full read-modify-write of an entire
//! collection with no locking. A single synchronous writer is assumed;
//! overlapping writers race with last-writer-wins.

pub mod file;
pub mod memory;

use crate::error::Result;
use crate::seed;
use crate::types::{
    Event, Message, MicroTask, PreferencesUpdate, Project, UserPreferences, UserProfile,
    UserUpdate,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Durable store keys, one per collection
///
/// Exact key names are preserved for data compatibility with existing stores.
pub mod keys {
    pub const USERS: &str = "simply_connect_users";
    pub const PROJECTS: &str = "simply_connect_projects";
    pub const TASKS: &str = "simply_connect_tasks";
    pub const EVENTS: &str = "simply_connect_events";
    pub const CONNECTIONS: &str = "simply_connect_connections";
    pub const MESSAGES: &str = "simply_connect_messages";
    pub const LIKED_PROJECTS: &str = "simply_connect_liked_projects";
    pub const USER_PREFERENCES: &str = "simply_connect_user_preferences";
    pub const SAVED_TASKS: &str = "simply_connect_saved_micro_tasks";
    pub const COMPLETED_TASKS: &str = "simply_connect_completed_micro_tasks";
    pub const MICRO_STATS: &str = "simply_connect_micro_stats";

    /// Per-user feedback history key
    pub fn feedback(user_id: &str) -> String {
        format!("simply_connect_feedback_{}", user_id)
    }

    /// The fixed collection keys, used by `clear_all`
    pub const ALL: &[&str] = &[
        USERS,
        PROJECTS,
        TASKS,
        EVENTS,
        CONNECTIONS,
        MESSAGES,
        LIKED_PROJECTS,
        USER_PREFERENCES,
        SAVED_TASKS,
        COMPLETED_TASKS,
        MICRO_STATS,
    ];
}

/// Raw string-keyed durable store
///
/// Implementations own a single origin-scoped map of key to serialized
/// collection. Both operations are synchronous; a write replaces any prior
/// value (last-writer-wins, no merge).
pub trait KeyValueBackend: Send + Sync {
    /// Read the raw value for a key, `None` when absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value for a key, replacing any prior value
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; no-op when absent
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed collections over a [`KeyValueBackend`]
///
/// All reads return disposable snapshots with no back-reference to storage;
/// callers must explicitly write back any mutation.
pub struct Store<B> {
    backend: B,
}

impl<B: KeyValueBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Raw access to the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and parse a collection, degrading to the default on any failure
    pub(crate) fn read_collection<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.backend.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Corrupt value for key {}, treating as empty: {}", key, e);
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                warn!("Failed to read key {}, treating as empty: {}", key, e);
                T::default()
            }
        }
    }

    /// Serialize and write a collection, dropping the write on any failure
    pub(crate) fn write_collection<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize value for key {}, write dropped: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.backend.write(key, &raw) {
            warn!("Failed to write key {}, write dropped: {}", key, e);
        }
    }

    // === Users ===

    pub fn users(&self) -> Vec<UserProfile> {
        self.read_collection(keys::USERS)
    }

    pub fn save_users(&self, users: &[UserProfile]) {
        self.write_collection(keys::USERS, &users);
    }

    pub fn add_user(&self, user: UserProfile) {
        let mut users = self.users();
        users.push(user);
        self.save_users(&users);
    }

    /// Look up a profile by id; `None` when absent (callers report "not
    /// found" rather than treating this as an error)
    pub fn find_user(&self, user_id: &str) -> Option<UserProfile> {
        self.users().into_iter().find(|u| u.id == user_id)
    }

    /// Merge a partial update into the first profile with a matching id.
    /// Silent no-op when the id is not found.
    pub fn update_user(&self, user_id: &str, update: &UserUpdate) {
        let mut users = self.users();
        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                update.apply_to(user);
                self.save_users(&users);
            }
            None => {
                debug!("update_user: no profile with id {}, skipping", user_id);
            }
        }
    }

    // === Projects ===

    pub fn projects(&self) -> Vec<Project> {
        self.read_collection(keys::PROJECTS)
    }

    pub fn save_projects(&self, projects: &[Project]) {
        self.write_collection(keys::PROJECTS, &projects);
    }

    pub fn add_project(&self, project: Project) {
        let mut projects = self.projects();
        projects.push(project);
        self.save_projects(&projects);
    }

    // === Tasks ===

    pub fn tasks(&self) -> Vec<MicroTask> {
        self.read_collection(keys::TASKS)
    }

    pub fn save_tasks(&self, tasks: &[MicroTask]) {
        self.write_collection(keys::TASKS, &tasks);
    }

    pub fn add_task(&self, task: MicroTask) {
        let mut tasks = self.tasks();
        tasks.push(task);
        self.save_tasks(&tasks);
    }

    // === Events ===

    pub fn events(&self) -> Vec<Event> {
        self.read_collection(keys::EVENTS)
    }

    pub fn save_events(&self, events: &[Event]) {
        self.write_collection(keys::EVENTS, &events);
    }

    // === Connections ===

    pub fn connections(&self) -> Vec<String> {
        self.read_collection(keys::CONNECTIONS)
    }

    pub fn save_connections(&self, connections: &[String]) {
        self.write_collection(keys::CONNECTIONS, &connections);
    }

    /// Add a connection; idempotent
    pub fn add_connection(&self, user_id: &str) {
        let mut connections = self.connections();
        if !connections.iter().any(|c| c == user_id) {
            connections.push(user_id.to_string());
            self.save_connections(&connections);
        }
    }

    pub fn remove_connection(&self, user_id: &str) {
        let mut connections = self.connections();
        if let Some(index) = connections.iter().position(|c| c == user_id) {
            connections.remove(index);
            self.save_connections(&connections);
        }
    }

    // === Messages ===

    pub fn messages(&self) -> Vec<Message> {
        self.read_collection(keys::MESSAGES)
    }

    pub fn save_messages(&self, messages: &[Message]) {
        self.write_collection(keys::MESSAGES, &messages);
    }

    pub fn add_message(&self, message: Message) {
        let mut messages = self.messages();
        messages.push(message);
        self.save_messages(&messages);
    }

    /// Messages exchanged between an unordered pair of users, ascending by
    /// timestamp. Full scan; fine for the few hundred records this store is
    /// expected to hold.
    pub fn messages_between(&self, user_a: &str, user_b: &str) -> Vec<Message> {
        let mut thread: Vec<Message> = self
            .messages()
            .into_iter()
            .filter(|m| {
                (m.from_user_id == user_a && m.to_user_id == user_b)
                    || (m.from_user_id == user_b && m.to_user_id == user_a)
            })
            .collect();
        thread.sort_by_key(|m| m.timestamp);
        thread
    }

    /// Flip the read flag for every unread message in the (from, to) thread
    pub fn mark_messages_read(&self, from_user_id: &str, to_user_id: &str) {
        let mut messages = self.messages();
        let mut changed = false;
        for message in messages.iter_mut() {
            if message.from_user_id == from_user_id
                && message.to_user_id == to_user_id
                && !message.read
            {
                message.read = true;
                changed = true;
            }
        }
        if changed {
            self.save_messages(&messages);
        }
    }

    // === Liked projects ===

    pub fn liked_projects(&self) -> Vec<String> {
        self.read_collection(keys::LIKED_PROJECTS)
    }

    pub fn save_liked_projects(&self, liked: &[String]) {
        self.write_collection(keys::LIKED_PROJECTS, &liked);
    }

    /// Toggle set membership for a project id
    pub fn toggle_like_project(&self, project_id: &str) {
        let mut liked = self.liked_projects();
        match liked.iter().position(|p| p == project_id) {
            Some(index) => {
                liked.remove(index);
            }
            None => liked.push(project_id.to_string()),
        }
        self.save_liked_projects(&liked);
    }

    // === Preferences ===

    pub fn preferences(&self) -> UserPreferences {
        match self.backend.read(keys::USER_PREFERENCES) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Corrupt preferences, using defaults: {}", e);
                UserPreferences::default()
            }),
            Ok(None) => UserPreferences::default(),
            Err(e) => {
                warn!("Failed to read preferences, using defaults: {}", e);
                UserPreferences::default()
            }
        }
    }

    pub fn save_preferences(&self, preferences: &UserPreferences) {
        self.write_collection(keys::USER_PREFERENCES, preferences);
    }

    /// Merge a partial update into the stored preferences
    pub fn update_preferences(&self, update: &PreferencesUpdate) {
        let mut preferences = self.preferences();
        update.apply_to(&mut preferences);
        self.save_preferences(&preferences);
    }

    // === Saved / completed micro tasks ===

    pub fn saved_task_ids(&self) -> Vec<String> {
        self.read_collection(keys::SAVED_TASKS)
    }

    pub fn save_saved_task_ids(&self, task_ids: &[String]) {
        self.write_collection(keys::SAVED_TASKS, &task_ids);
    }

    /// Toggle set membership for a saved task id
    pub fn toggle_saved_task(&self, task_id: &str) {
        let mut saved = self.saved_task_ids();
        match saved.iter().position(|t| t == task_id) {
            Some(index) => {
                saved.remove(index);
            }
            None => saved.push(task_id.to_string()),
        }
        self.save_saved_task_ids(&saved);
    }

    pub fn completed_task_ids(&self) -> Vec<String> {
        self.read_collection(keys::COMPLETED_TASKS)
    }

    /// Mark a task completed for a user: adds the task id to the completed
    /// set and bumps the user's completed-task counter. Idempotent per task.
    pub fn complete_task(&self, task_id: &str, user_id: &str) {
        let mut completed = self.completed_task_ids();
        if completed.iter().any(|t| t == task_id) {
            return;
        }
        completed.push(task_id.to_string());
        self.write_collection(keys::COMPLETED_TASKS, &completed);

        let mut stats: HashMap<String, u32> = self.read_collection(keys::MICRO_STATS);
        *stats.entry(user_id.to_string()).or_insert(0) += 1;
        self.write_collection(keys::MICRO_STATS, &stats);
    }

    /// Completed-task count for a user
    pub fn tasks_completed_by(&self, user_id: &str) -> u32 {
        let stats: HashMap<String, u32> = self.read_collection(keys::MICRO_STATS);
        stats.get(user_id).copied().unwrap_or(0)
    }

    // === Lifecycle ===

    /// Populate the store with the seed dataset when the users collection is
    /// empty; no-op otherwise.
    pub fn initialize_with_seed_data(&self) {
        if !self.users().is_empty() {
            return;
        }
        info!("Initializing store with seed data");
        self.save_users(&seed::seed_users());
        self.save_projects(&seed::seed_projects());
        self.save_events(&seed::seed_events());
        self.save_tasks(&seed::seed_tasks());
    }

    /// Remove every fixed collection key (development/testing path).
    /// Per-user feedback keys are dynamic and are left in place; delete the
    /// backing file for a full wipe.
    pub fn clear_all(&self) {
        for key in keys::ALL {
            if let Err(e) = self.backend.remove(key) {
                warn!("Failed to remove key {}: {}", key, e);
            }
        }
    }
}
