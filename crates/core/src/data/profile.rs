//! The sampled temperature profile
//!
//! Fifteen (altitude, temperature) observations spanning surface to 100 km,
//! ascending by altitude. The sequence order defines the polyline drawn
//! through them. Temperatures are stored in Celsius; Fahrenheit is a
//! display-time conversion.

use crate::core_types::units::Celsius;
use crate::data::layers::{Layer, LAYERS};
use serde::Serialize;

/// One (altitude, temperature) observation on the plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    /// Altitude above the surface (km).
    pub altitude_km: f64,
    /// Observed temperature at that altitude.
    pub temperature: Celsius,
}

/// Temperature samples through the atmosphere, surface first.
pub const TEMPERATURE_PROFILE: [SamplePoint; 15] = [
    sample(0.0, 15.0),   // Surface
    sample(5.0, -18.0),  // Mid troposphere
    sample(10.0, -50.0), // Tropopause
    sample(12.0, -56.0), // Tropopause boundary
    sample(20.0, -56.0), // Lower stratosphere
    sample(30.0, -46.0), // Mid stratosphere
    sample(40.0, -22.0), // Upper stratosphere
    sample(50.0, -3.0),  // Stratopause
    sample(60.0, -17.0), // Lower mesosphere
    sample(70.0, -53.0), // Mid mesosphere
    sample(80.0, -86.0), // Mesopause (coldest)
    sample(85.0, -81.0), // Lower thermosphere
    sample(90.0, -56.0), // Mid thermosphere
    sample(95.0, -12.0), // Upper thermosphere
    sample(100.0, 27.0), // High thermosphere
];

const fn sample(altitude_km: f64, temperature_c: f64) -> SamplePoint {
    SamplePoint {
        altitude_km,
        temperature: Celsius::new(temperature_c),
    }
}

/// Per-layer roll-up of the sampled temperatures, for the data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSummary {
    pub layer: Layer,
    /// Coldest sample whose altitude falls in the layer's inclusive range.
    pub min_temperature: Celsius,
    /// Warmest sample whose altitude falls in the layer's inclusive range.
    pub max_temperature: Celsius,
}

/// Summarize the profile per layer.
///
/// Boundary samples (12, 50, 80 km) count toward both adjacent layers;
/// each band's displayed range covers its edge temperatures.
#[must_use]
pub fn layer_summaries() -> Vec<LayerSummary> {
    LAYERS
        .iter()
        .map(|layer| {
            let temps = TEMPERATURE_PROFILE
                .iter()
                .filter(|point| layer.contains(point.altitude_km))
                .map(|point| point.temperature);
            let min_temperature = temps.clone().min().unwrap_or_default();
            let max_temperature = temps.max().unwrap_or_default();
            LayerSummary {
                layer: *layer,
                min_temperature,
                max_temperature,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::layers::layer_for_altitude;

    #[test]
    fn test_profile_is_ascending_in_altitude() {
        for pair in TEMPERATURE_PROFILE.windows(2) {
            assert!(
                pair[0].altitude_km < pair[1].altitude_km,
                "profile must ascend: {} km before {} km",
                pair[0].altitude_km,
                pair[1].altitude_km
            );
        }
    }

    #[test]
    fn test_every_sample_lands_in_a_layer() {
        for point in &TEMPERATURE_PROFILE {
            let layer = layer_for_altitude(point.altitude_km);
            assert!(
                layer.contains(point.altitude_km),
                "sample at {} km must fall inside its layer, got {}",
                point.altitude_km,
                layer.name
            );
        }
    }

    #[test]
    fn test_mesopause_is_the_coldest_sample() {
        let coldest = TEMPERATURE_PROFILE
            .iter()
            .min_by_key(|point| point.temperature)
            .unwrap();
        assert_eq!(coldest.altitude_km, 80.0);
        assert_eq!(coldest.temperature, Celsius::new(-86.0));
    }

    #[test]
    fn test_layer_summaries_match_known_extremes() {
        let summaries = layer_summaries();
        assert_eq!(summaries.len(), 4);

        // Troposphere: 15 at the surface down to -56 at the tropopause.
        assert_eq!(summaries[0].min_temperature, Celsius::new(-56.0));
        assert_eq!(summaries[0].max_temperature, Celsius::new(15.0));

        // Stratosphere shares the -56 boundary sample with the troposphere.
        assert_eq!(summaries[1].min_temperature, Celsius::new(-56.0));
        assert_eq!(summaries[1].max_temperature, Celsius::new(-3.0));

        // Mesosphere bottoms out at the mesopause.
        assert_eq!(summaries[2].min_temperature, Celsius::new(-86.0));

        // Thermosphere tops out at the highest sample.
        assert_eq!(summaries[3].max_temperature, Celsius::new(27.0));
    }
}
