//! Press state and popup content for chart marker overlays.
//!
//! Each tap-target series owns one [`OverlayInteraction`] (blood pressure
//! has two, upper and lower). Pressing a marker captures its measured
//! on-screen position and anchors a popup near it; releasing or dismissing
//! returns to idle. A marker whose position cannot be measured simply shows
//! no popup for that interaction.

use eframe::egui;

use crate::state::ChartData;
use crate::units::VitalUnit;

/// Offset from the pressed marker to the popup's top-left corner
pub const POPUP_OFFSET: egui::Vec2 = egui::vec2(-140.0, -200.0);

/// Press state of one tap-target series
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    Idle,
    Pressed { index: usize, anchor: egui::Pos2 },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayInteraction {
    state: OverlayState,
}

impl OverlayInteraction {
    /// Press marker `index` at its measured screen position. Ignored while
    /// another marker is held (release always precedes the next press) and
    /// when measurement failed.
    pub fn press(&mut self, index: usize, measured: Option<egui::Pos2>) {
        if self.state != OverlayState::Idle {
            return;
        }
        let Some(position) = measured else {
            return;
        };
        if !position.x.is_finite() || !position.y.is_finite() {
            return;
        }
        self.state = OverlayState::Pressed {
            index,
            anchor: position + POPUP_OFFSET,
        };
    }

    /// Release the held marker, hiding the popup
    pub fn release(&mut self) {
        self.state = OverlayState::Idle;
    }

    /// Explicit popup dismissal (tap-outside / close request)
    pub fn dismiss(&mut self) {
        self.state = OverlayState::Idle;
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// The held marker index and popup anchor, if any
    pub fn active(&self) -> Option<(usize, egui::Pos2)> {
        match self.state {
            OverlayState::Idle => None,
            OverlayState::Pressed { index, anchor } => Some((index, anchor)),
        }
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        matches!(self.state, OverlayState::Pressed { index: held, .. } if held == index)
    }
}

/// Popup content for the point at `index`: the visit label and the formatted
/// reading. A dual-series chart joins both values into one `upper/lower`
/// string at the shared index.
pub fn popup_lines(chart: &ChartData, unit: VitalUnit, index: usize) -> Option<(String, String)> {
    let label = chart.labels.get(index)?.clone();
    let value_line = match chart.series.as_slice() {
        [single] => unit.format(*single.get(index)?),
        [upper, lower, ..] => unit.format_pair(*upper.get(index)?, *lower.get(index)?),
        [] => return None,
    };
    Some((label, value_line))
}
