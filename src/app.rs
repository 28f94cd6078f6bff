//! Main application state and `eframe::App` implementation.
//!
//! All rendering and state mutation happen on the UI thread. Network calls
//! run on short-lived background threads that report one [`ApiEvent`] over
//! an mpsc channel, drained at the top of every frame. There is no retry and
//! no cancellation; a request that never reports simply leaves the screen
//! showing what it already had.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::api::client::{ApiClient, ApiError};
use crate::api::types::{ParticipantLookupRequest, ParticipantSummary};
use crate::normalize;
use crate::overlay::OverlayInteraction;
use crate::session::SessionStore;
use crate::settings::UserSettings;
use crate::state::{
    ApiEvent, MetricKind, Screen, ToastType, FETCH_WINDOW, LOOKUP_PAGE_SIZE,
};

/// Clinician login form state
#[derive(Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    /// Inline error shown under the form; login is the one flow where
    /// failures are surfaced rather than just logged
    pub error: Option<String>,
    pub pending: bool,
}

/// Patient lookup screen state
#[derive(Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<ParticipantSummary>,
    pub pending: bool,
    /// Participant whose records are currently being fetched
    pub loading_patient: Option<i64>,
}

/// Stats screen state: the active tab plus one overlay interaction per
/// tap-target series (blood pressure uses both)
pub struct StatsState {
    pub active_metric: MetricKind,
    pub overlays: [OverlayInteraction; 2],
}

impl Default for StatsState {
    fn default() -> Self {
        Self {
            active_metric: MetricKind::Glucose,
            overlays: [OverlayInteraction::default(); 2],
        }
    }
}

impl StatsState {
    pub fn select_metric(&mut self, metric: MetricKind) {
        self.active_metric = metric;
        self.overlays = [OverlayInteraction::default(); 2];
    }
}

/// Main application state
pub struct VitalViewApp {
    pub settings: UserSettings,
    pub session: SessionStore,
    pub screen: Screen,
    pub login: LoginState,
    pub search: SearchState,
    /// Loaded patient, owned here and dropped on hand-back
    pub patient: Option<Box<crate::state::PatientVitals>>,
    pub stats: StatsState,
    pub settings_open: bool,
    pub exit_modal_open: bool,
    /// Toast messages for user feedback
    pub toast_message: Option<(String, Instant, ToastType)>,
    /// Scale factor derived from the window size each frame (1.0 at the
    /// 1366x1024 design resolution)
    pub ui_scale: f32,
    api_sender: Sender<ApiEvent>,
    api_receiver: Receiver<ApiEvent>,
}

impl VitalViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = UserSettings::load();
        let session = SessionStore::load();
        let screen = if session.session.is_some() {
            Screen::PatientSearch
        } else {
            Screen::Login
        };
        let (api_sender, api_receiver) = channel();

        Self {
            settings,
            session,
            screen,
            login: LoginState::default(),
            search: SearchState::default(),
            patient: None,
            stats: StatsState::default(),
            settings_open: false,
            exit_modal_open: false,
            toast_message: None,
            ui_scale: 1.0,
            api_sender,
            api_receiver,
        }
    }

    /// Font size scaled to the current window
    pub fn scaled_font(&self, size: f32) -> f32 {
        size * self.ui_scale
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.toast_message = Some((message.into(), Instant::now(), toast_type));
    }

    /// Client snapshot for a background call
    fn client(&self) -> ApiClient {
        ApiClient::new(self.settings.api_base_url.clone()).with_session(self.session.session.clone())
    }

    /// Run one API job on a background thread; its event lands in the next
    /// frame's drain. A send into a shut-down app is silently dropped.
    fn dispatch(&self, job: impl FnOnce(ApiClient) -> ApiEvent + Send + 'static) {
        let client = self.client();
        let sender = self.api_sender.clone();
        thread::spawn(move || {
            let _ = sender.send(job(client));
        });
    }

    /// Submit the login form
    pub fn start_login(&mut self) {
        let username = self.login.username.trim().to_owned();
        let password = self.login.password.clone();
        if username.is_empty() || password.is_empty() {
            self.login.error = Some("Enter your username and password".to_owned());
            return;
        }
        self.login.pending = true;
        self.login.error = None;
        self.dispatch(move |client| ApiEvent::LoginFinished(client.login(&username, &password)));
    }

    /// Fire a participant lookup for the current query
    pub fn start_lookup(&mut self) {
        let request = ParticipantLookupRequest::from_query(&self.search.query);
        self.search.pending = true;
        self.dispatch(move |client| {
            ApiEvent::LookupFinished(client.lookup_participants(&request, LOOKUP_PAGE_SIZE, 1))
        });
    }

    /// Fetch the overview and all three metric histories for a participant,
    /// normalizing each page as it arrives
    pub fn start_patient_load(&mut self, participant: &ParticipantSummary) {
        let participant = participant.clone();
        self.search.loading_patient = Some(participant.id);
        self.dispatch(move |client| {
            let page_size = FETCH_WINDOW as u32;
            let loaded = (move || {
                let overview = client.health_overview(participant.id)?;
                let glucose = client.glucose_history(participant.id, page_size)?;
                let pressure = client.bp_history(participant.id, page_size)?;
                let weight = client.weight_history(participant.id, page_size)?;

                // Newest record of any history stands in when the overview
                // has no visit date
                let last_visited = overview
                    .last_visited
                    .or_else(|| glucose.data.first().map(|r| r.date_of_visit.clone()))
                    .or_else(|| pressure.data.first().map(|r| r.date_of_visit.clone()))
                    .or_else(|| weight.data.first().map(|r| r.date_of_visit.clone()));

                Ok::<_, ApiError>(Box::new(crate::state::PatientVitals {
                    participant,
                    last_visited,
                    glucose: normalize::normalize_glucose(&glucose),
                    pressure: normalize::normalize_pressure(&pressure),
                    weight: normalize::normalize_weight(&weight),
                }))
            })();
            ApiEvent::PatientLoaded(loaded)
        });
    }

    /// Hand-back flow: drop the loaded patient and return to search
    pub fn return_tablet(&mut self) {
        self.patient = None;
        self.exit_modal_open = false;
        self.settings_open = false;
        self.stats = StatsState::default();
        self.screen = Screen::PatientSearch;
        self.show_toast(
            "Thank you! Please return the tablet to the front desk.",
            ToastType::Success,
        );
    }

    /// Drop the stored session and go back to the login screen
    pub fn sign_out(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!("failed to clear stored session: {}", e);
        }
        self.patient = None;
        self.search = SearchState::default();
        self.screen = Screen::Login;
    }

    fn drain_api_events(&mut self) {
        while let Ok(event) = self.api_receiver.try_recv() {
            self.handle_api_event(event);
        }
    }

    fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::LoginFinished(Ok(response)) => {
                self.session.session = Some(response.session_key);
                if let Err(e) = self.session.save() {
                    tracing::warn!("failed to persist session: {}", e);
                }
                self.login.pending = false;
                self.login.password.clear();
                self.login.error = None;
                self.screen = Screen::PatientSearch;
            }
            ApiEvent::LoginFinished(Err(e)) => {
                tracing::warn!("login failed: {}", e);
                self.login.pending = false;
                self.login.error = Some(if e.is_unauthorized() {
                    "Invalid username or password".to_owned()
                } else {
                    format!("Login failed: {}", e)
                });
            }
            ApiEvent::LookupFinished(Ok(page)) => {
                self.search.pending = false;
                self.search.results = page.data;
            }
            ApiEvent::LookupFinished(Err(e)) => {
                // Not surfaced; the list keeps whatever it last showed
                tracing::warn!("participant lookup failed: {}", e);
                self.search.pending = false;
                if e.is_unauthorized() {
                    self.login.error = Some("Session expired, please sign in again".to_owned());
                    self.sign_out();
                }
            }
            ApiEvent::PatientLoaded(Ok(vitals)) => {
                self.search.loading_patient = None;
                self.stats = StatsState::default();
                self.patient = Some(vitals);
                self.screen = Screen::Portal;
            }
            ApiEvent::PatientLoaded(Err(e)) => {
                tracing::warn!("failed to load patient records: {}", e);
                self.search.loading_patient = None;
            }
        }
    }
}

impl eframe::App for VitalViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_api_events();

        let rect = ctx.screen_rect();
        self.ui_scale = (rect.height() / 1024.0 + rect.width() / 1366.0) / 2.0;

        // Keep frames coming while a background fetch is outstanding
        if self.login.pending || self.search.pending || self.search.loading_patient.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Login => self.render_login(ui),
            Screen::PatientSearch => self.render_patient_search(ui),
            Screen::Portal => self.render_portal(ui),
            Screen::Stats => self.render_stats(ui),
        });

        self.render_toast(ctx);
    }
}
