//! PresentationML document generation.
//!
//! Builds .pptx files from an in-memory slide model. The module is
//! write-only: a [`Presentation`] is populated slide by slide and then
//! serialized once into an OPC package.

mod error;
mod package;
mod presentation;
mod shape;
mod slide;
pub(crate) mod template;

pub use error::{PptxError, Result};
pub use presentation::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH, Presentation};
pub use shape::{Connector, DiagramBox, Geometry, Shape};
pub use slide::{Paragraph, Slide, SlideLayout, TitleStyle};
