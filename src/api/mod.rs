//! Client for the remote health-records API.
//!
//! All response shapes are decoded into typed structs at this boundary so the
//! rendering layer never sees raw JSON. Requests are blocking and are meant
//! to run on a background thread (see [`crate::app`]).

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL};
