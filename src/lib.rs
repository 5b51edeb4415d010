//! Longan - a minimal PresentationML (.pptx) writing layer and deck generator
//!
//! This crate builds PowerPoint presentations programmatically and serializes
//! them as OPC (Open Packaging Conventions) packages. It ships with a built-in
//! generator for the Gym Management System overview deck.
//!
//! # Example - Building a presentation
//!
//! ```no_run
//! use longan::pptx::{Paragraph, Presentation, SlideLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = Presentation::new();
//!
//! let slide = pres.add_slide(SlideLayout::TitleAndBody);
//! slide.set_title("Quarterly Review");
//! slide.add_paragraph(Paragraph::new("Revenue up 12%", 18.0, 6.0));
//!
//! pres.save("review.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Generating the built-in deck
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = longan::deck::build_deck();
//! pres.save("Gym_Management_System_Presentation.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared value types: colors, length units, XML escaping.
pub mod common;

/// Built-in deck content and rendering.
pub mod deck;

/// Open Packaging Conventions (OPC) package model and writer.
///
/// A .pptx file is a ZIP archive of parts connected by relationships; this
/// module provides the partname, relationship, and content-type machinery
/// plus the physical ZIP writer.
pub mod opc;

/// PresentationML (.pptx) document model and XML serialization.
pub mod pptx;

pub use common::RGBColor;
pub use pptx::{Presentation, PptxError, Slide, SlideLayout};
