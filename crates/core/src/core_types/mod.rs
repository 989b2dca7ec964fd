//! Core types and utilities

pub mod units;
pub mod vec2;

pub use units::{Celsius, Fahrenheit, TemperatureUnit};
pub use vec2::Vec2;
