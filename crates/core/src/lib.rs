//! Atmospheric Temperature Chart Core Library
//!
//! Pure logic for an interactive temperature-vs-altitude chart: the
//! embedded atmospheric dataset, coordinate mapping onto a fixed drawing
//! surface, full-scene assembly, the selection/unit view-state machine,
//! and best-effort loading of decorative graphics.
//!
//! Frontends (the terminal demos in this workspace) own event handling
//! and painting; everything they display comes from this crate so the
//! chart geometry, interactive markers, and info panel stay consistent
//! under unit toggling and selection changes.

// Core types and utilities
pub mod core_types;

// Embedded dataset
pub mod data;

// Geometry and scene assembly
pub mod chart;

// Interaction state machine
pub mod view;

// Decorative asset loading
pub mod assets;

// Re-export core types
pub use core_types::{Celsius, Fahrenheit, TemperatureUnit, Vec2};

// Re-export dataset types
pub use data::{
    layer_for_altitude, layer_summaries, BoundaryMarker, Layer, LayerSummary, SamplePoint,
    BOUNDARIES, LAYERS, TEMPERATURE_PROFILE,
};

// Re-export chart types
pub use chart::{scale, Band, Label, Line, Marker, Scene};

// Re-export view types
pub use view::{
    focus_down, focus_up, point_details, tooltip_content, Announcement, PointDetails,
    TooltipContent, ViewState, ANNOUNCEMENT_LIFETIME, PLACEHOLDER_PROMPT,
};

// Re-export asset types
pub use assets::{parse_svg_shapes, spawn_decor_loader, DecorGroup, DecorShape, DecorSource, DEFAULT_DECOR};
