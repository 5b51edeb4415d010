/// The top-level presentation object.
use crate::pptx::error::Result;
use crate::pptx::package;
use crate::pptx::slide::{Slide, SlideLayout};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Default slide width in EMUs (10 inches, 4:3).
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;

/// Default slide height in EMUs (7.5 inches, 4:3).
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// Slide IDs in the slide ID list must be 256 or greater.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation document under construction.
///
/// Slides are appended in order; [`save`](Presentation::save) serializes the
/// whole document to a .pptx package in one pass.
pub struct Presentation {
    /// Slides in presentation order
    slides: Vec<Slide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Presentation {
    /// Create an empty presentation with the default 4:3 slide size.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
        }
    }

    /// Append a new slide based on the given layout.
    ///
    /// Returns a mutable reference to the new slide for populating content.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(Slide::new(slide_id, layout));
        self.slides.last_mut().unwrap()
    }

    /// Get the slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Save the presentation to a .pptx file.
    ///
    /// The package is fully assembled in memory before anything touches the
    /// filesystem, so a failure never leaves a truncated file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize the presentation to .pptx package bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::serialize(self)
    }

    /// Generate the presentation part XML.
    ///
    /// # Arguments
    /// * `master_r_id` - Relationship ID of the slide master
    /// * `slide_r_ids` - Relationship IDs of the slides, in presentation order
    pub(crate) fn to_xml(&self, master_r_id: &str, slide_r_ids: &[String]) -> Result<String> {
        debug_assert_eq!(slide_r_ids.len(), self.slides.len());

        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{}"/></p:sldMasterIdLst>"#,
            master_r_id
        )?;

        xml.push_str("<p:sldIdLst>");
        for (slide, r_id) in self.slides.iter().zip(slide_r_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)?;
        }
        xml.push_str("</p:sldIdLst>");

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            self.slide_height, self.slide_width
        )?;

        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Title);
        pres.add_slide(SlideLayout::TitleAndBody);

        assert_eq!(pres.slides()[0].slide_id(), 256);
        assert_eq!(pres.slides()[1].slide_id(), 257);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Title).set_title("First");
        pres.add_slide(SlideLayout::TitleAndBody).set_title("Second");

        let xml = pres
            .to_xml("rId1", &["rId2".to_string(), "rId3".to_string()])
            .unwrap();

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }
}
