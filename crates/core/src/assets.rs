//! Best-effort decorative graphics loading
//!
//! The chart optionally shows decorative cloud and mountain shapes loaded
//! from SVG files next to the binary. Loading runs on a background thread
//! and delivers results over a channel; the chart is fully interactive
//! before, during, and without any of it. A missing or unparseable file is
//! logged and skipped, never surfaced as an error.
//!
//! Only `<circle>` and `<ellipse>` elements are extracted; everything else
//! in the file is ignored. The shapes are authored in drawing-surface
//! pixel coordinates.

use crate::core_types::vec2::Vec2;
use std::fs;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, warn};

/// One drawable decorative primitive, in surface pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DecorShape {
    Circle { center: Vec2, radius: f64 },
    Ellipse { center: Vec2, radii: Vec2 },
}

/// A loaded group of decorative shapes (one per source file).
#[derive(Debug, Clone, PartialEq)]
pub struct DecorGroup {
    /// Stable identifier, e.g. "clouds".
    pub id: &'static str,
    /// Opacity the frontend should apply to the whole group.
    pub opacity: f64,
    pub shapes: Vec<DecorShape>,
}

/// A decorative asset to fetch at startup.
#[derive(Debug, Clone, Copy)]
pub struct DecorSource {
    pub id: &'static str,
    /// Path relative to the working directory.
    pub path: &'static str,
    pub opacity: f64,
}

/// The two optional decorative resources, independently failable.
pub const DEFAULT_DECOR: [DecorSource; 2] = [
    DecorSource {
        id: "clouds",
        path: "assets/clouds.svg",
        opacity: 0.6,
    },
    DecorSource {
        id: "mountains",
        path: "assets/mountains.svg",
        opacity: 0.7,
    },
];

/// Fetch decorative assets on a background thread, fire-and-forget.
///
/// Each successfully parsed source arrives on the returned channel as its
/// own [`DecorGroup`]; failures are logged and produce nothing. The thread
/// is never joined and the receiver may simply be dropped.
#[must_use]
pub fn spawn_decor_loader(sources: &'static [DecorSource]) -> mpsc::Receiver<DecorGroup> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for source in sources {
            match fs::read_to_string(source.path) {
                Ok(svg) => {
                    let shapes = parse_svg_shapes(&svg);
                    if shapes.is_empty() {
                        warn!(id = source.id, path = source.path, "no drawable shapes in decorative asset");
                        continue;
                    }
                    debug!(id = source.id, count = shapes.len(), "decorative asset loaded");
                    // Receiver may already be gone; that is fine.
                    let _ = tx.send(DecorGroup {
                        id: source.id,
                        opacity: source.opacity,
                        shapes,
                    });
                }
                Err(err) => {
                    warn!(id = source.id, path = source.path, error = %err, "decorative asset unavailable, skipping");
                }
            }
        }
    });
    rx
}

/// Extract circle and ellipse elements from SVG text.
///
/// Deliberately not a real XML parser: decorative assets are authored
/// in-repo with flat shape lists, and anything that does not scan cleanly
/// is skipped.
#[must_use]
pub fn parse_svg_shapes(svg: &str) -> Vec<DecorShape> {
    let mut shapes = Vec::new();
    for (needle, is_circle) in [("<circle", true), ("<ellipse", false)] {
        let mut rest = svg;
        while let Some(start) = rest.find(needle) {
            let tail = &rest[start..];
            let Some(end) = tail.find('>') else {
                break;
            };
            let tag = &tail[..end];
            if let Some(shape) = parse_shape_tag(tag, is_circle) {
                shapes.push(shape);
            }
            rest = &tail[end..];
        }
    }
    shapes
}

fn parse_shape_tag(tag: &str, is_circle: bool) -> Option<DecorShape> {
    let cx = attr_value(tag, "cx")?;
    let cy = attr_value(tag, "cy")?;
    let center = Vec2::new(cx, cy);
    if is_circle {
        Some(DecorShape::Circle {
            center,
            radius: attr_value(tag, "r")?,
        })
    } else {
        Some(DecorShape::Ellipse {
            center,
            radii: Vec2::new(attr_value(tag, "rx")?, attr_value(tag, "ry")?),
        })
    }
}

fn attr_value(tag: &str, name: &str) -> Option<f64> {
    let marker = format!(" {name}=\"");
    let start = tag.find(&marker)? + marker.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    rest[..end].trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 630">
        <circle cx="150" cy="120" r="18" fill="#bab9b9"/>
        <ellipse cx="210" cy="110" rx="40" ry="16" fill="#bab9b9"/>
        <path d="M0 0 L10 10"/>
    </svg>"##;

    #[test]
    fn test_parses_circles_and_ellipses() {
        let shapes = parse_svg_shapes(SAMPLE);
        assert_eq!(shapes.len(), 2);
        assert_eq!(
            shapes[0],
            DecorShape::Circle {
                center: Vec2::new(150.0, 120.0),
                radius: 18.0
            }
        );
        assert_eq!(
            shapes[1],
            DecorShape::Ellipse {
                center: Vec2::new(210.0, 110.0),
                radii: Vec2::new(40.0, 16.0)
            }
        );
    }

    #[test]
    fn test_malformed_tags_are_skipped() {
        let svg = r#"<circle cx="10" cy="oops" r="4"/><circle cx="1" cy="2" r="3"/>"#;
        let shapes = parse_svg_shapes(svg);
        assert_eq!(shapes.len(), 1, "only the well-formed circle should parse");
    }

    #[test]
    fn test_missing_file_sends_nothing() {
        static MISSING: [DecorSource; 1] = [DecorSource {
            id: "nope",
            path: "assets/does-not-exist.svg",
            opacity: 1.0,
        }];
        let rx = spawn_decor_loader(&MISSING);
        // Loader thread finishes and drops the sender without sending.
        assert!(rx.recv().is_err(), "missing asset must produce no group");
    }
}
