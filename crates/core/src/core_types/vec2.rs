//! Vector type alias for 2D pixel positions.

use nalgebra::Vector2;

/// 2D vector type for positions on the drawing surface.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used throughout
/// the chart for pixel coordinates, marker positions, and band extents.
pub type Vec2 = Vector2<f64>;
