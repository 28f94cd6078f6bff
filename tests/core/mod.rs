//! Core module tests for non-UI functionality
//!
//! Tests for:
//! - History normalization pipeline (raw JSON through chart data)
//! - Overlay coordinate mapping
//! - Press interaction and popup content
//! - Core state types and constants

pub mod geometry_tests;
pub mod normalize_tests;
pub mod state_tests;
