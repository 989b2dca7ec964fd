//! Atmospheric layer definitions
//!
//! Four named altitude bands covering 0-100 km contiguously, each with a
//! band tint and a one-line description. The table is immutable embedded
//! data; validity (non-overlapping, ascending, full coverage) is asserted
//! by tests rather than checked at runtime.

use serde::Serialize;

/// A named altitude band with distinct thermal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layer {
    /// Layer name, e.g. "Troposphere".
    pub name: &'static str,
    /// Lower edge of the band (km, inclusive).
    pub altitude_low_km: f64,
    /// Upper edge of the band (km, inclusive).
    pub altitude_high_km: f64,
    /// Band tint as RGB, rendered semi-transparent by the frontend.
    pub color_rgb: [u8; 3],
    /// One-line description shown in the info panel and data table.
    pub characteristics: &'static str,
}

impl Layer {
    /// Whether `altitude_km` falls inside this band (edges inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, altitude_km: f64) -> bool {
        altitude_km >= self.altitude_low_km && altitude_km <= self.altitude_high_km
    }

    /// Altitude range as display text, e.g. "0-12 km".
    #[must_use]
    pub fn range_text(&self) -> String {
        format!("{}-{} km", self.altitude_low_km, self.altitude_high_km)
    }
}

/// The atmospheric layers, ascending by altitude.
pub const LAYERS: [Layer; 4] = [
    Layer {
        name: "Troposphere",
        altitude_low_km: 0.0,
        altitude_high_km: 12.0,
        color_rgb: [135, 206, 250],
        characteristics: "Weather occurs here. Temperature decreases with altitude.",
    },
    Layer {
        name: "Stratosphere",
        altitude_low_km: 12.0,
        altitude_high_km: 50.0,
        color_rgb: [255, 182, 193],
        characteristics: "Contains ozone layer. Temperature increases with altitude.",
    },
    Layer {
        name: "Mesosphere",
        altitude_low_km: 50.0,
        altitude_high_km: 80.0,
        color_rgb: [221, 160, 221],
        characteristics: "Coldest layer. Meteors burn up here.",
    },
    Layer {
        name: "Thermosphere",
        altitude_low_km: 80.0,
        altitude_high_km: 100.0,
        color_rgb: [255, 228, 181],
        characteristics: "Very hot but low density. Aurora occur here.",
    },
];

/// A named transition altitude between two layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundaryMarker {
    pub name: &'static str,
    pub altitude_km: u32,
}

/// Layer transition labels drawn on the chart.
pub const BOUNDARIES: [BoundaryMarker; 3] = [
    BoundaryMarker {
        name: "Tropopause",
        altitude_km: 12,
    },
    BoundaryMarker {
        name: "Stratopause",
        altitude_km: 50,
    },
    BoundaryMarker {
        name: "Mesopause",
        altitude_km: 80,
    },
];

/// Find the layer containing `altitude_km`.
///
/// Boundary altitudes (12, 50, 80 km) resolve to the lower layer, whose
/// inclusive range matches first. Any altitude outside every band falls
/// back to the last (highest) layer rather than erroring, so the lookup
/// is total.
#[must_use]
pub fn layer_for_altitude(altitude_km: f64) -> &'static Layer {
    LAYERS
        .iter()
        .find(|layer| layer.contains(altitude_km))
        .unwrap_or(&LAYERS[LAYERS.len() - 1])
}
