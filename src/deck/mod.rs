//! The built-in Gym Management System overview deck.
//!
//! Slide copy lives in [`content`] as a static table; [`build_deck`] renders
//! the table into a [`Presentation`](crate::pptx::Presentation) ready to be
//! saved.

mod content;
mod render;

pub use content::OUTPUT_FILE;
pub use render::build_deck;
