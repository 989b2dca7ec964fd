//! Semantic temperature types for type-safe unit handling
//!
//! The chart stores every sampled temperature in Celsius and converts to
//! Fahrenheit only at display time. Newtype wrappers keep the two scales
//! from being mixed accidentally.
//!
//! # Design Philosophy
//! - Stored state is always [`Celsius`]; [`Fahrenheit`] exists only as a
//!   display-side conversion target
//! - Total ordering via `total_cmp` (NaN ordered after all values)
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use atmo_chart_core::core_types::units::{Celsius, TemperatureUnit};
//!
//! let mesopause = Celsius::new(-86.0);
//! assert_eq!(TemperatureUnit::Fahrenheit.format(mesopause), "-122.8°F");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Create a new Celsius temperature.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Convert to Fahrenheit: `F = C * 9/5 + 32`.
    #[inline]
    #[must_use]
    pub fn to_fahrenheit(self) -> Fahrenheit {
        Fahrenheit(self.0 * 9.0 / 5.0 + 32.0)
    }

    /// Get the raw f64 value.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

/// Temperature in degrees Fahrenheit. Display-side only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fahrenheit(f64);

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fahrenheit {
    /// Create a new Fahrenheit temperature.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fahrenheit(value)
    }

    /// Convert back to Celsius: `C = (F - 32) * 5/9`.
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius((self.0 - 32.0) * 5.0 / 9.0)
    }

    /// Get the raw f64 value.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Fahrenheit {
        c.to_fahrenheit()
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.0)
    }
}

/// The display unit currently selected by the user.
///
/// Authored Celsius values are shown verbatim; converted Fahrenheit values
/// are rounded to one decimal at display only, never in stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Degree symbol suffix: `°C` or `°F`.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Spoken unit name for accessible descriptions.
    #[inline]
    #[must_use]
    pub const fn spoken(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }

    /// The unit that a toggle action would switch to.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    /// Numeric value of a stored temperature in this unit, for scale math.
    #[inline]
    #[must_use]
    pub fn numeric(self, temp: Celsius) -> f64 {
        match self {
            TemperatureUnit::Celsius => temp.value(),
            TemperatureUnit::Fahrenheit => temp.to_fahrenheit().value(),
        }
    }

    /// Displayed magnitude without the unit suffix ("-86" or "-122.8").
    #[must_use]
    pub fn format_value(self, temp: Celsius) -> String {
        match self {
            TemperatureUnit::Celsius => format!("{}", temp.value()),
            TemperatureUnit::Fahrenheit => format!("{:.1}", temp.to_fahrenheit().value()),
        }
    }

    /// Displayed magnitude with the unit suffix ("-86°C" or "-122.8°F").
    #[must_use]
    pub fn format(self, temp: Celsius) -> String {
        format!("{}{}", self.format_value(temp), self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(*Celsius::new(0.0).to_fahrenheit(), 32.0);
        assert_eq!(*Celsius::new(15.0).to_fahrenheit(), 59.0);
        // -86°C is -122.8°F only after display rounding
        assert!((*Celsius::new(-86.0).to_fahrenheit() + 122.8).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_preserves_stored_state() {
        // Rounding happens only at display; the stored Celsius value must
        // survive a C -> F -> C round trip exactly.
        for raw in [-100.0, -86.0, -56.0, -3.0, 15.0, 27.0, 40.0] {
            let stored = Celsius::new(raw);
            let back = stored.to_fahrenheit().to_celsius();
            assert!(
                (back.value() - raw).abs() < 1e-12,
                "round trip changed {} to {}",
                raw,
                back.value()
            );
        }
    }

    #[test]
    fn test_display_precision_per_unit() {
        let surface = Celsius::new(15.0);
        assert_eq!(TemperatureUnit::Celsius.format_value(surface), "15");
        assert_eq!(TemperatureUnit::Fahrenheit.format_value(surface), "59.0");
        assert_eq!(
            TemperatureUnit::Fahrenheit.format(Celsius::new(-86.0)),
            "-122.8°F"
        );
    }

    #[test]
    fn test_toggle_is_involutive() {
        let unit = TemperatureUnit::Celsius;
        assert_eq!(unit.toggled(), TemperatureUnit::Fahrenheit);
        assert_eq!(unit.toggled().toggled(), unit);
    }

    #[test]
    fn test_total_ordering() {
        let cold = Celsius::new(-86.0);
        let warm = Celsius::new(27.0);
        assert_eq!(cold.min(warm), cold);
        assert_eq!(cold.max(warm), warm);
    }
}
