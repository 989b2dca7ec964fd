//! Coordinate mapping between data values and pixel positions
//!
//! Pure affine transforms over a fixed 600x500 content area with authored
//! margins. The temperature axis uses a per-unit authored domain: the
//! Fahrenheit gridlines are their own constants, not converted Celsius
//! endpoints, so tick values stay round in both unit systems.
//!
//! All functions here are deterministic and cheap (15 points, 4 layers);
//! they are re-invoked on every rebuild with no caching.

use crate::core_types::units::{Celsius, TemperatureUnit};

/// Width of the plotted content area (px).
pub const CONTENT_WIDTH: f64 = 600.0;
/// Height of the plotted content area (px).
pub const CONTENT_HEIGHT: f64 = 500.0;
/// Margin above the content area (px).
pub const MARGIN_TOP: f64 = 50.0;
/// Margin right of the content area, used for layer labels (px).
pub const MARGIN_RIGHT: f64 = 100.0;
/// Margin below the content area, used for axis labels (px).
pub const MARGIN_BOTTOM: f64 = 80.0;
/// Margin left of the content area, used for axis labels (px).
pub const MARGIN_LEFT: f64 = 100.0;

/// Full drawing surface width including margins (px).
pub const SURFACE_WIDTH: f64 = MARGIN_LEFT + CONTENT_WIDTH + MARGIN_RIGHT;
/// Full drawing surface height including margins (px).
pub const SURFACE_HEIGHT: f64 = MARGIN_TOP + CONTENT_HEIGHT + MARGIN_BOTTOM;

/// Highest plotted altitude (km); the y axis spans [0, this].
pub const MAX_ALTITUDE_KM: f64 = 100.0;

/// Authored temperature domain in Celsius mode.
pub const CELSIUS_DOMAIN: [f64; 2] = [-100.0, 40.0];
/// Authored temperature domain in Fahrenheit mode.
pub const FAHRENHEIT_DOMAIN: [f64; 2] = [-148.0, 104.0];

/// Gridline temperatures in Celsius mode (display-unit values).
pub const CELSIUS_GRID_TEMPS: [f64; 5] = [-100.0, -60.0, -20.0, 20.0, 40.0];
/// Gridline temperatures in Fahrenheit mode (display-unit values).
pub const FAHRENHEIT_GRID_TEMPS: [f64; 5] = [-148.0, -76.0, -4.0, 68.0, 104.0];

/// Altitude gridlines and axis ticks (km).
pub const ALTITUDE_TICKS_KM: [f64; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

/// Authored temperature domain for the given unit.
#[inline]
#[must_use]
pub const fn temperature_domain(unit: TemperatureUnit) -> [f64; 2] {
    match unit {
        TemperatureUnit::Celsius => CELSIUS_DOMAIN,
        TemperatureUnit::Fahrenheit => FAHRENHEIT_DOMAIN,
    }
}

/// Gridline values for the given unit, already in display units.
#[inline]
#[must_use]
pub const fn grid_temperatures(unit: TemperatureUnit) -> [f64; 5] {
    match unit {
        TemperatureUnit::Celsius => CELSIUS_GRID_TEMPS,
        TemperatureUnit::Fahrenheit => FAHRENHEIT_GRID_TEMPS,
    }
}

/// Tick values labelled on the x axis (the top-of-domain tick is unlabelled).
#[must_use]
pub fn axis_label_temperatures(unit: TemperatureUnit) -> &'static [f64] {
    let grid = match unit {
        TemperatureUnit::Celsius => &CELSIUS_GRID_TEMPS,
        TemperatureUnit::Fahrenheit => &FAHRENHEIT_GRID_TEMPS,
    };
    &grid[..grid.len() - 1]
}

/// Map a display-unit temperature value to an x pixel position.
///
/// Affine over the unit's authored domain:
/// `left + (value - min) / (max - min) * width`.
#[inline]
#[must_use]
pub fn x_for_display_value(value: f64, unit: TemperatureUnit) -> f64 {
    let [domain_min, domain_max] = temperature_domain(unit);
    MARGIN_LEFT + (value - domain_min) / (domain_max - domain_min) * CONTENT_WIDTH
}

/// Map a stored Celsius temperature to an x pixel position, converting to
/// the display unit first.
#[inline]
#[must_use]
pub fn x_for_temperature(temp: Celsius, unit: TemperatureUnit) -> f64 {
    x_for_display_value(unit.numeric(temp), unit)
}

/// Map an altitude to a y pixel position. Inverted: higher altitude is
/// closer to the top of the surface (smaller y).
#[inline]
#[must_use]
pub fn y_for_altitude(altitude_km: f64) -> f64 {
    MARGIN_TOP + CONTENT_HEIGHT - (altitude_km / MAX_ALTITUDE_KM) * CONTENT_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TEMPERATURE_PROFILE;
    use approx::assert_relative_eq;

    #[test]
    fn test_x_scale_endpoints() {
        // Domain edges land on the content edges in both units.
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            let [lo, hi] = temperature_domain(unit);
            assert_relative_eq!(x_for_display_value(lo, unit), MARGIN_LEFT);
            assert_relative_eq!(x_for_display_value(hi, unit), MARGIN_LEFT + CONTENT_WIDTH);
        }
    }

    #[test]
    fn test_x_scale_is_affine_midpoint() {
        // -30°C is exactly halfway through [-100, 40].
        assert_relative_eq!(
            x_for_temperature(Celsius::new(-30.0), TemperatureUnit::Celsius),
            MARGIN_LEFT + CONTENT_WIDTH / 2.0
        );
    }

    #[test]
    fn test_gridlines_align_across_units() {
        // The Fahrenheit ticks were authored as the Celsius ticks' exact
        // conversions, so corresponding gridlines share pixel positions.
        for (c, f) in CELSIUS_GRID_TEMPS.iter().zip(&FAHRENHEIT_GRID_TEMPS) {
            assert_relative_eq!(
                x_for_display_value(*c, TemperatureUnit::Celsius),
                x_for_display_value(*f, TemperatureUnit::Fahrenheit),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_curve_x_position_is_unit_independent() {
        // Switching units re-labels the axis but must not move the curve.
        for point in &TEMPERATURE_PROFILE {
            assert_relative_eq!(
                x_for_temperature(point.temperature, TemperatureUnit::Celsius),
                x_for_temperature(point.temperature, TemperatureUnit::Fahrenheit),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_y_scale_endpoints() {
        assert_relative_eq!(y_for_altitude(0.0), MARGIN_TOP + CONTENT_HEIGHT);
        assert_relative_eq!(y_for_altitude(MAX_ALTITUDE_KM), MARGIN_TOP);
    }

    #[test]
    fn test_y_scale_strictly_decreasing_over_profile() {
        for pair in TEMPERATURE_PROFILE.windows(2) {
            assert!(
                y_for_altitude(pair[1].altitude_km) < y_for_altitude(pair[0].altitude_km),
                "higher altitude must map to smaller y: {} km vs {} km",
                pair[0].altitude_km,
                pair[1].altitude_km
            );
        }
    }
}
