//! Session-token persistence.
//!
//! The clinician's session key survives app restarts so the tablet does not
//! demand a fresh login every time it wakes. The token is an opaque string;
//! expiry is the server's concern and shows up as a 401 on the next call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::settings::UserSettings;

/// Persisted session token, stored under the app config directory
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionStore {
    #[serde(default)]
    pub session: Option<String>,
}

impl SessionStore {
    /// Get the path to the session JSON file
    pub fn get_session_path() -> Option<PathBuf> {
        UserSettings::get_config_dir().map(|p| p.join("session.json"))
    }

    /// Load the stored session from disk; a missing or unreadable file is an
    /// empty store, never an error.
    pub fn load() -> Self {
        let path = match Self::get_session_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save the session to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_session_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize session: {}", e))?;

        std::fs::write(&path, content).map_err(|e| format!("Failed to write session file: {}", e))
    }

    /// Drop the stored token (sign-out)
    pub fn clear(&mut self) -> Result<(), String> {
        self.session = None;
        self.save()
    }
}
