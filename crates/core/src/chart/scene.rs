//! Scene assembly
//!
//! Builds the complete visible chart from the embedded dataset and the
//! current view state. The build is a full rebuild every time: with equal
//! inputs it returns an equal [`Scene`], and frontends are expected to
//! clear and repaint rather than diff. Primitive lists are ordered
//! back-to-front; painting them in struct-field order reproduces the
//! authored paint order (grid, axes, layer bands, curve, markers,
//! boundary labels, decorative graphics).

use crate::assets::DecorGroup;
use crate::chart::scale;
use crate::core_types::units::TemperatureUnit;
use crate::core_types::vec2::Vec2;
use crate::data::{BOUNDARIES, LAYERS, TEMPERATURE_PROFILE};
use crate::view::ViewState;

/// A straight line segment in surface pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
}

/// A positioned piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Vec2,
    pub text: String,
}

/// A tinted atmospheric layer band with its right-gutter label.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Top-left corner of the band rectangle.
    pub origin: Vec2,
    /// Width and height of the band rectangle.
    pub size: Vec2,
    pub color_rgb: [u8; 3],
    /// Layer name, vertically centered on the band.
    pub label: Label,
}

/// An interactive point marker carrying its profile index.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index into [`TEMPERATURE_PROFILE`]; the interaction layer selects
    /// and focuses markers by this index.
    pub index: usize,
    pub position: Vec2,
    /// Accessible description in the current display unit.
    pub description: String,
}

/// The complete visible chart, fields in paint order (back-to-front).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub grid_lines: Vec<Line>,
    pub axes: Vec<Line>,
    pub axis_labels: Vec<Label>,
    pub bands: Vec<Band>,
    pub boundary_lines: Vec<Line>,
    /// Temperature polyline vertices in profile (ascending altitude) order.
    pub curve: Vec<Vec2>,
    pub markers: Vec<Marker>,
    pub boundary_labels: Vec<Label>,
    /// Decorative groups merged in whenever they have arrived; may be empty.
    pub decor: Vec<DecorGroup>,
}

impl Scene {
    /// Build the full scene for the given view state.
    #[must_use]
    pub fn build(view: &ViewState, decor: &[DecorGroup]) -> Scene {
        let unit = view.unit;
        Scene {
            grid_lines: build_grid(unit),
            axes: build_axes(),
            axis_labels: build_axis_labels(unit),
            bands: build_bands(),
            boundary_lines: build_boundary_lines(),
            curve: build_curve(unit),
            markers: build_markers(unit),
            boundary_labels: build_boundary_labels(),
            decor: decor.to_vec(),
        }
    }
}

fn vertical_content_line(x: f64) -> Line {
    Line {
        from: Vec2::new(x, scale::MARGIN_TOP),
        to: Vec2::new(x, scale::MARGIN_TOP + scale::CONTENT_HEIGHT),
    }
}

fn horizontal_content_line(y: f64) -> Line {
    Line {
        from: Vec2::new(scale::MARGIN_LEFT, y),
        to: Vec2::new(scale::MARGIN_LEFT + scale::CONTENT_WIDTH, y),
    }
}

fn build_grid(unit: TemperatureUnit) -> Vec<Line> {
    let mut lines = Vec::new();
    for temp in scale::grid_temperatures(unit) {
        lines.push(vertical_content_line(scale::x_for_display_value(temp, unit)));
    }
    for alt in scale::ALTITUDE_TICKS_KM {
        lines.push(horizontal_content_line(scale::y_for_altitude(alt)));
    }
    lines
}

fn build_axes() -> Vec<Line> {
    vec![
        // X axis along the bottom of the content area.
        horizontal_content_line(scale::MARGIN_TOP + scale::CONTENT_HEIGHT),
        // Y axis along the left edge.
        vertical_content_line(scale::MARGIN_LEFT),
    ]
}

fn build_axis_labels(unit: TemperatureUnit) -> Vec<Label> {
    let baseline = scale::MARGIN_TOP + scale::CONTENT_HEIGHT;
    let mut labels = Vec::new();
    for temp in scale::axis_label_temperatures(unit) {
        labels.push(Label {
            position: Vec2::new(scale::x_for_display_value(*temp, unit), baseline + 20.0),
            text: format!("{temp}"),
        });
    }
    for alt in scale::ALTITUDE_TICKS_KM {
        labels.push(Label {
            position: Vec2::new(scale::MARGIN_LEFT - 15.0, scale::y_for_altitude(alt) + 5.0),
            text: format!("{alt}"),
        });
    }
    labels.push(Label {
        position: Vec2::new(scale::MARGIN_LEFT + scale::CONTENT_WIDTH / 2.0, baseline + 50.0),
        text: format!("Temperature ({})", unit.symbol()),
    });
    labels.push(Label {
        position: Vec2::new(25.0, scale::MARGIN_TOP + scale::CONTENT_HEIGHT / 2.0),
        text: "Altitude (km)".to_string(),
    });
    labels
}

fn build_bands() -> Vec<Band> {
    LAYERS
        .iter()
        .map(|layer| {
            let top = scale::y_for_altitude(layer.altitude_high_km);
            let bottom = scale::y_for_altitude(layer.altitude_low_km);
            Band {
                origin: Vec2::new(scale::MARGIN_LEFT, top),
                size: Vec2::new(scale::CONTENT_WIDTH, bottom - top),
                color_rgb: layer.color_rgb,
                label: Label {
                    position: Vec2::new(
                        scale::MARGIN_LEFT + scale::CONTENT_WIDTH + 10.0,
                        (top + bottom) / 2.0,
                    ),
                    text: layer.name.to_string(),
                },
            }
        })
        .collect()
}

fn build_boundary_lines() -> Vec<Line> {
    // A separating line at the top of every band except the outermost.
    LAYERS[..LAYERS.len() - 1]
        .iter()
        .map(|layer| horizontal_content_line(scale::y_for_altitude(layer.altitude_high_km)))
        .collect()
}

fn build_curve(unit: TemperatureUnit) -> Vec<Vec2> {
    TEMPERATURE_PROFILE
        .iter()
        .map(|point| {
            Vec2::new(
                scale::x_for_temperature(point.temperature, unit),
                scale::y_for_altitude(point.altitude_km),
            )
        })
        .collect()
}

fn build_markers(unit: TemperatureUnit) -> Vec<Marker> {
    TEMPERATURE_PROFILE
        .iter()
        .enumerate()
        .map(|(index, point)| Marker {
            index,
            position: Vec2::new(
                scale::x_for_temperature(point.temperature, unit),
                scale::y_for_altitude(point.altitude_km),
            ),
            description: format!(
                "Data point: {} km altitude, {} degrees {}",
                point.altitude_km,
                unit.format_value(point.temperature),
                unit.spoken()
            ),
        })
        .collect()
}

fn build_boundary_labels() -> Vec<Label> {
    BOUNDARIES
        .iter()
        .map(|boundary| Label {
            position: Vec2::new(
                scale::SURFACE_WIDTH - 5.0,
                scale::y_for_altitude(f64::from(boundary.altitude_km)) + 3.0,
            ),
            text: boundary.name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_idempotent() {
        let view = ViewState::default();
        let first = Scene::build(&view, &[]);
        let second = Scene::build(&view, &[]);
        assert_eq!(first, second, "equal state must produce an equal scene");
    }

    #[test]
    fn test_marker_per_sample_with_matching_indices() {
        let scene = Scene::build(&ViewState::default(), &[]);
        assert_eq!(scene.markers.len(), TEMPERATURE_PROFILE.len());
        for (i, marker) in scene.markers.iter().enumerate() {
            assert_eq!(marker.index, i);
        }
    }

    #[test]
    fn test_curve_follows_profile_order() {
        let scene = Scene::build(&ViewState::default(), &[]);
        assert_eq!(scene.curve.len(), TEMPERATURE_PROFILE.len());
        for pair in scene.curve.windows(2) {
            assert!(pair[1].y < pair[0].y, "curve must ascend through altitudes");
        }
    }

    #[test]
    fn test_marker_descriptions_follow_unit() {
        let mut view = ViewState::default();
        let celsius = Scene::build(&view, &[]);
        assert_eq!(
            celsius.markers[10].description,
            "Data point: 80 km altitude, -86 degrees Celsius"
        );

        view.toggle_unit();
        let fahrenheit = Scene::build(&view, &[]);
        assert_eq!(
            fahrenheit.markers[10].description,
            "Data point: 80 km altitude, -122.8 degrees Fahrenheit"
        );
    }

    #[test]
    fn test_unit_toggle_relabels_axis_but_keeps_curve() {
        let mut view = ViewState::default();
        let celsius = Scene::build(&view, &[]);
        view.toggle_unit();
        let fahrenheit = Scene::build(&view, &[]);

        assert_ne!(celsius.axis_labels, fahrenheit.axis_labels);
        for (a, b) in celsius.curve.iter().zip(&fahrenheit.curve) {
            assert!((a - b).norm() < 1e-9, "curve geometry must not move");
        }
    }

    #[test]
    fn test_band_extents_cover_content_area() {
        let scene = Scene::build(&ViewState::default(), &[]);
        assert_eq!(scene.bands.len(), LAYERS.len());
        let total_height: f64 = scene.bands.iter().map(|band| band.size.y).sum();
        assert!((total_height - scale::CONTENT_HEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_labels_at_fixed_altitudes() {
        let scene = Scene::build(&ViewState::default(), &[]);
        let names: Vec<&str> = scene
            .boundary_labels
            .iter()
            .map(|label| label.text.as_str())
            .collect();
        assert_eq!(names, ["Tropopause", "Stratopause", "Mesopause"]);
    }

    #[test]
    fn test_decor_is_merged_when_present() {
        use crate::assets::{DecorGroup, DecorShape};
        let group = DecorGroup {
            id: "clouds",
            opacity: 0.6,
            shapes: vec![DecorShape::Circle {
                center: Vec2::new(150.0, 120.0),
                radius: 18.0,
            }],
        };
        let without = Scene::build(&ViewState::default(), &[]);
        let with = Scene::build(&ViewState::default(), &[group.clone()]);
        assert!(without.decor.is_empty());
        assert_eq!(with.decor, vec![group]);
        // Everything interactive is unaffected by decoration.
        assert_eq!(without.markers, with.markers);
    }
}
