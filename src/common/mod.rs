//! Shared value types used across the OPC and PresentationML layers.

mod color;
pub mod unit;
pub mod xml;

pub use color::RGBColor;
