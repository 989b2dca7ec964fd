//! Chart geometry and scene assembly

pub mod scale;
pub mod scene;

pub use scene::{Band, Label, Line, Marker, Scene};
