//! Blocking HTTP client for the health-records API.
//!
//! Every call is a single request-response with no retry and no timeout; a
//! failure is reported once and the caller decides whether the user sees it.
//! Authorized endpoints send the session token as `Authorization: Session <key>`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::api::types::{
    BloodPressureRecord, GlucoseRecord, HealthOverview, LoginRequest, LoginResponse,
    PaginatedResponse, ParticipantLookupRequest, ParticipantSummary, WeightRecord,
};

pub const DEFAULT_BASE_URL: &str = "https://cs-25-303.wyatt-herkamp.dev/api";

const USER_AGENT: &str = concat!("VitalView/", env!("CARGO_PKG_VERSION"));

/// Errors from a single API call
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("server returned status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not signed in")]
    MissingSession,
}

impl ApiError {
    /// True for a 401/403, which on the login endpoint means bad credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401) | ApiError::Status(403))
    }
}

/// Cheaply cloneable handle; clones are handed to background threads.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    session: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Option<String>) -> Self {
        self.session = session;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn require_session(&self) -> Result<&str, ApiError> {
        self.session.as_deref().ok_or(ApiError::MissingSession)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut request = ureq::get(self.endpoint(path))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");
        if let Some(session) = &self.session {
            request = request.header("Authorization", format!("Session {}", session));
        }

        let mut response = match request.call() {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(status)) => return Err(ApiError::Status(status)),
            Err(e) => return Err(ApiError::Transport(e.to_string())),
        };

        response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let mut request = ureq::post(self.endpoint(path))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");
        if let Some(session) = &self.session {
            request = request.header("Authorization", format!("Session {}", session));
        }

        let mut response = match request.send_json(body) {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(status)) => return Err(ApiError::Status(status)),
            Err(e) => return Err(ApiError::Transport(e.to_string())),
        };

        response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Exchange clinician credentials for a session key
    pub fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json(
            "/auth/login/password",
            &LoginRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            },
        )
    }

    /// Search participants by name; session-authorized
    pub fn lookup_participants(
        &self,
        request: &ParticipantLookupRequest,
        page_size: u32,
        page: u32,
    ) -> Result<PaginatedResponse<ParticipantSummary>, ApiError> {
        self.require_session()?;
        self.post_json(
            &format!("/participant/lookup?page_size={}&page={}", page_size, page),
            request,
        )
    }

    pub fn health_overview(&self, participant_id: i64) -> Result<HealthOverview, ApiError> {
        self.require_session()?;
        self.get_json(&format!("/participant/get/{}/health_overview", participant_id))
    }

    pub fn glucose_history(
        &self,
        participant_id: i64,
        page_size: u32,
    ) -> Result<PaginatedResponse<GlucoseRecord>, ApiError> {
        self.require_session()?;
        self.get_json(&format!(
            "/participant/stats/glucose/history/{}?page_size={}",
            participant_id, page_size
        ))
    }

    pub fn bp_history(
        &self,
        participant_id: i64,
        page_size: u32,
    ) -> Result<PaginatedResponse<BloodPressureRecord>, ApiError> {
        self.require_session()?;
        self.get_json(&format!(
            "/participant/stats/bp/history/{}?page_size={}",
            participant_id, page_size
        ))
    }

    pub fn weight_history(
        &self,
        participant_id: i64,
        page_size: u32,
    ) -> Result<PaginatedResponse<WeightRecord>, ApiError> {
        self.require_session()?;
        self.get_json(&format!(
            "/participant/stats/weight/history/{}?page_size={}",
            participant_id, page_size
        ))
    }
}
