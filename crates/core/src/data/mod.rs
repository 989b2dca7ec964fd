//! Embedded atmospheric dataset
//!
//! Immutable layer table and temperature profile. Nothing here depends on
//! view state; the chart and view modules read from these constants.

pub mod layers;
pub mod profile;

pub use layers::{layer_for_altitude, BoundaryMarker, Layer, BOUNDARIES, LAYERS};
pub use profile::{layer_summaries, LayerSummary, SamplePoint, TEMPERATURE_PROFILE};
