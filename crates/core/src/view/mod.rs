//! View state and interaction transitions
//!
//! The two mutable view dimensions (display unit, selected point) live in
//! an explicit [`ViewState`] value mutated only through the transition
//! methods here, so the state machine is testable without any frontend.
//!
//! States: `NoSelection` and `PointSelected(i)`. `select` moves between
//! them, `reset` returns to `NoSelection`, and the unit toggle is an
//! orthogonal dimension that never changes the selection itself. Focus
//! traversal is a frontend concern separate from selection; the clamped
//! step functions live here so the clamping rules are shared and tested.

use crate::core_types::units::TemperatureUnit;
use crate::data::{layer_for_altitude, TEMPERATURE_PROFILE};
use serde::Serialize;
use std::time::Duration;

/// Prompt shown in the details panel while nothing is selected.
pub const PLACEHOLDER_PROMPT: &str = "Click on a point on the chart or use the keyboard to \
     navigate and explore temperature data for different atmospheric layers.";

/// How long a selection announcement stays visible.
pub const ANNOUNCEMENT_LIFETIME: Duration = Duration::from_secs(1);

/// Transient text for the assistive live region after a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
}

/// The mutable view state: display unit plus optional selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub unit: TemperatureUnit,
    /// Index into [`TEMPERATURE_PROFILE`], if a point is selected.
    pub selected: Option<usize>,
}

impl ViewState {
    /// Select the point at `index`, replacing any previous selection.
    ///
    /// Returns the live-region announcement for the new selection.
    /// Panics if `index` is not a valid profile index; markers only carry
    /// valid indices, so an out-of-range value is a caller bug.
    pub fn select(&mut self, index: usize) -> Announcement {
        assert!(
            index < TEMPERATURE_PROFILE.len(),
            "selection index {index} out of range"
        );
        self.selected = Some(index);
        Announcement {
            text: format!(
                "Selected data point at {} km altitude",
                TEMPERATURE_PROFILE[index].altitude_km
            ),
        }
    }

    /// Clear the selection; the details panel returns to its prompt.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Flip the display unit. Selection is preserved.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    /// Label for the unit-toggle control: names the unit a click would
    /// switch to, not the current one.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self.unit {
            TemperatureUnit::Celsius => "Show °F",
            TemperatureUnit::Fahrenheit => "Show °C",
        }
    }

    /// Details for the current selection, or `None` for the placeholder.
    #[must_use]
    pub fn selected_details(&self) -> Option<PointDetails> {
        self.selected.map(|index| point_details(index, self.unit))
    }
}

/// Move marker focus toward higher altitudes, clamped to the last marker.
#[inline]
#[must_use]
pub fn focus_up(index: usize) -> usize {
    (index + 1).min(TEMPERATURE_PROFILE.len() - 1)
}

/// Move marker focus toward lower altitudes, clamped to the first marker.
#[inline]
#[must_use]
pub fn focus_down(index: usize) -> usize {
    index.saturating_sub(1)
}

/// Everything the details panel shows for a selected point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointDetails {
    pub layer_name: &'static str,
    /// "80 km"
    pub altitude_text: String,
    /// "-86°C" or "-122.8°F" depending on the display unit.
    pub temperature_text: String,
    /// "50-80 km"
    pub layer_range_text: String,
    pub characteristics: &'static str,
}

/// Build the details panel content for a profile point.
#[must_use]
pub fn point_details(index: usize, unit: TemperatureUnit) -> PointDetails {
    let point = &TEMPERATURE_PROFILE[index];
    let layer = layer_for_altitude(point.altitude_km);
    PointDetails {
        layer_name: layer.name,
        altitude_text: format!("{} km", point.altitude_km),
        temperature_text: unit.format(point.temperature),
        layer_range_text: layer.range_text(),
        characteristics: layer.characteristics,
    }
}

/// Content of the hover/focus tooltip. Showing it never mutates view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub layer_name: &'static str,
    pub altitude_text: String,
    pub temperature_text: String,
}

/// Build the tooltip for a profile point in the current unit.
#[must_use]
pub fn tooltip_content(index: usize, unit: TemperatureUnit) -> TooltipContent {
    let point = &TEMPERATURE_PROFILE[index];
    let layer = layer_for_altitude(point.altitude_km);
    TooltipContent {
        layer_name: layer.name,
        altitude_text: format!("Altitude: {} km", point.altitude_km),
        temperature_text: format!("Temperature: {}", unit.format(point.temperature)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_reselect_replaces_selection() {
        let mut view = ViewState::default();
        assert_eq!(view.selected, None);

        view.select(3);
        assert_eq!(view.selected, Some(3));

        view.select(7);
        assert_eq!(view.selected, Some(7), "only one point may be active");
    }

    #[test]
    fn test_reset_clears_selection_and_restores_prompt() {
        let mut view = ViewState::default();
        view.select(5);
        view.reset();
        assert_eq!(view.selected, None);
        assert!(view.selected_details().is_none(), "panel must show the prompt");
    }

    #[test]
    fn test_selection_announcement_names_the_altitude() {
        let mut view = ViewState::default();
        let announcement = view.select(10);
        assert_eq!(announcement.text, "Selected data point at 80 km altitude");
    }

    #[test]
    fn test_unit_toggle_preserves_selection() {
        let mut view = ViewState::default();
        view.select(10);
        view.toggle_unit();
        assert_eq!(view.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(view.selected, Some(10), "toggle is orthogonal to selection");
        view.toggle_unit();
        assert_eq!(view.unit, TemperatureUnit::Celsius);
        assert_eq!(view.selected, Some(10));
    }

    #[test]
    fn test_toggle_label_names_the_resulting_unit() {
        let mut view = ViewState::default();
        assert_eq!(view.toggle_label(), "Show °F");
        view.toggle_unit();
        assert_eq!(view.toggle_label(), "Show °C");
    }

    #[test]
    fn test_mesopause_details_in_both_units() {
        let details = point_details(10, TemperatureUnit::Celsius);
        assert_eq!(details.layer_name, "Mesosphere");
        assert_eq!(details.altitude_text, "80 km");
        assert_eq!(details.temperature_text, "-86°C");
        assert_eq!(details.layer_range_text, "50-80 km");

        let converted = point_details(10, TemperatureUnit::Fahrenheit);
        assert_eq!(converted.temperature_text, "-122.8°F");
        assert_eq!(converted.layer_name, "Mesosphere");
    }

    #[test]
    fn test_focus_traversal_clamps_at_both_ends() {
        let last = TEMPERATURE_PROFILE.len() - 1;
        assert_eq!(focus_up(last), last, "ArrowUp must not pass the last point");
        assert_eq!(focus_down(0), 0, "ArrowDown must not pass the first point");
        assert_eq!(focus_up(0), 1);
        assert_eq!(focus_down(last), last - 1);
    }

    #[test]
    fn test_tooltip_content_uses_current_unit() {
        let tip = tooltip_content(0, TemperatureUnit::Fahrenheit);
        assert_eq!(tip.layer_name, "Troposphere");
        assert_eq!(tip.altitude_text, "Altitude: 0 km");
        assert_eq!(tip.temperature_text, "Temperature: 59.0°F");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_rejects_invalid_index() {
        let mut view = ViewState::default();
        view.select(TEMPERATURE_PROFILE.len());
    }
}
