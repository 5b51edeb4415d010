/// Slide types and XML generation.
///
/// A slide pairs a layout with its content: a title, an optional subtitle or
/// body text, and free-floating diagram shapes. XML is generated in one pass
/// when the package is assembled; drawing object IDs are allocated at that
/// point (the group shape is always ID 1, the title ID 2, the subtitle or
/// body placeholder ID 3, and diagram shapes count up from 4).
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::pptx::error::Result;
use crate::pptx::shape::Shape;
use std::fmt::Write as FmtWrite;

/// The slide layouts available in the generated deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Centered title with a subtitle placeholder
    Title,
    /// Top title with a body placeholder
    TitleAndBody,
}

/// Character formatting for the slide title.
///
/// Titles without an explicit style inherit their formatting from the layout.
#[derive(Debug, Clone, Copy)]
pub struct TitleStyle {
    /// Font size in points
    pub size_pt: f64,
    /// Bold text
    pub bold: bool,
    /// Use the theme's accent1 color instead of the inherited color
    pub accent: bool,
}

/// A single body paragraph with its character and paragraph formatting.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Paragraph text; empty text produces a blank paragraph
    pub text: String,
    /// Font size in points
    pub size_pt: f64,
    /// Space after the paragraph in points
    pub space_after_pt: f64,
    /// Bold text
    pub bold: bool,
}

impl Paragraph {
    /// Create a paragraph with the given text, font size and trailing space.
    pub fn new(text: impl Into<String>, size_pt: f64, space_after_pt: f64) -> Self {
        Self {
            text: text.into(),
            size_pt,
            space_after_pt,
            bold: false,
        }
    }

    /// Make the paragraph bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A slide in a presentation.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID, unique within the presentation
    pub(crate) slide_id: u32,
    /// The layout this slide is based on
    pub(crate) layout: SlideLayout,
    /// Slide title (rendered into the title placeholder)
    pub(crate) title: String,
    /// Optional explicit title formatting
    pub(crate) title_style: Option<TitleStyle>,
    /// Subtitle lines (Title layout only)
    pub(crate) subtitle: Vec<String>,
    /// Body paragraphs (TitleAndBody layout only)
    pub(crate) body: Vec<Paragraph>,
    /// Free-floating diagram shapes
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            title: String::new(),
            title_style: None,
            subtitle: Vec::new(),
            body: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the layout this slide is based on.
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Get the slide title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set explicit formatting for the title.
    pub fn set_title_style(&mut self, style: TitleStyle) -> &mut Self {
        self.title_style = Some(style);
        self
    }

    /// Set the subtitle text; newlines separate lines.
    pub fn set_subtitle(&mut self, subtitle: &str) -> &mut Self {
        self.subtitle = subtitle.split('\n').map(str::to_string).collect();
        self
    }

    /// Append a body paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.body.push(paragraph);
        self
    }

    /// Append a diagram shape.
    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Get the body paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.body
    }

    /// Get the diagram shapes.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        self.write_title_shape(&mut xml)?;

        match self.layout {
            SlideLayout::Title => {
                if !self.subtitle.is_empty() {
                    self.write_subtitle_shape(&mut xml)?;
                }
            },
            SlideLayout::TitleAndBody => {
                if !self.body.is_empty() {
                    self.write_body_shape(&mut xml)?;
                }
            },
        }

        // Diagram shapes follow the placeholders in the ID sequence
        let mut shape_id = 4u32;
        for shape in &self.shapes {
            shape.write_xml(&mut xml, shape_id)?;
            shape_id += 1;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the title placeholder shape.
    ///
    /// Position and default formatting are inherited from the layout; only
    /// an explicit [`TitleStyle`] produces run properties here.
    fn write_title_shape(&self, xml: &mut String) -> Result<()> {
        let ph_type = match self.layout {
            SlideLayout::Title => "ctrTitle",
            SlideLayout::TitleAndBody => "title",
        };

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        write!(xml, r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#, ph_type)?;
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        match self.title_style {
            Some(style) => {
                write!(
                    xml,
                    r#"<a:rPr lang="en-US" sz="{}""#,
                    pt_to_centipoints(style.size_pt)
                )?;
                if style.bold {
                    xml.push_str(r#" b="1""#);
                }
                xml.push_str(r#" dirty="0">"#);
                if style.accent {
                    xml.push_str(
                        r#"<a:solidFill><a:schemeClr val="accent1"/></a:solidFill>"#,
                    );
                }
                xml.push_str("</a:rPr>");
            },
            None => xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#),
        }
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.title))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write the subtitle placeholder shape with one paragraph per line.
    fn write_subtitle_shape(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Subtitle 2"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in &self.subtitle {
            xml.push_str("<a:p>");
            if !line.is_empty() {
                xml.push_str("<a:r>");
                xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write the body placeholder shape with the slide's paragraphs.
    fn write_body_shape(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Content Placeholder 2"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.body {
            xml.push_str("<a:p>");
            write!(
                xml,
                r#"<a:pPr><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
                pt_to_centipoints(paragraph.space_after_pt)
            )?;
            if !paragraph.text.is_empty() {
                xml.push_str("<a:r>");
                write!(
                    xml,
                    r#"<a:rPr lang="en-US" sz="{}""#,
                    pt_to_centipoints(paragraph.size_pt)
                )?;
                if paragraph.bold {
                    xml.push_str(r#" b="1""#);
                }
                xml.push_str(r#" dirty="0"/>"#);
                write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_xml() {
        let mut slide = Slide::new(256, SlideLayout::Title);
        slide.set_title("Gym Management System");
        slide.set_title_style(TitleStyle {
            size_pt: 44.0,
            bold: true,
            accent: true,
        });
        slide.set_subtitle("Overview & Architecture\nProfessional Presentation");

        let xml = slide.to_xml().unwrap();

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"sz="4400" b="1""#));
        assert!(xml.contains(r#"<a:schemeClr val="accent1"/>"#));
        assert!(xml.contains("<a:t>Gym Management System</a:t>"));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>Overview &amp; Architecture</a:t>"));
        assert!(xml.contains("<a:t>Professional Presentation</a:t>"));
    }

    #[test]
    fn test_body_slide_xml() {
        let mut slide = Slide::new(257, SlideLayout::TitleAndBody);
        slide.set_title("Presentation Agenda");
        slide.add_paragraph(Paragraph::new("• System Overview", 18.0, 6.0));
        slide.add_paragraph(Paragraph::new("Ready!", 18.0, 6.0).bold());

        let xml = slide.to_xml().unwrap();

        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains(r#"<a:spcPts val="600"/>"#));
        assert!(xml.contains(r#"sz="1800" dirty="0""#));
        assert!(xml.contains(r#"sz="1800" b="1" dirty="0""#));
        assert!(xml.contains("<a:t>• System Overview</a:t>"));
    }

    #[test]
    fn test_empty_paragraph_has_no_run() {
        let mut slide = Slide::new(258, SlideLayout::TitleAndBody);
        slide.set_title("Thank You!");
        slide.add_paragraph(Paragraph::new("", 16.0, 6.0));

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<a:p><a:pPr><a:spcAft><a:spcPts val="600"/></a:spcAft></a:pPr></a:p>"#));
    }

    #[test]
    fn test_plain_title_has_no_explicit_formatting() {
        let mut slide = Slide::new(259, SlideLayout::TitleAndBody);
        slide.set_title("System Architecture");

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<a:rPr lang="en-US" dirty="0"/>"#));
        assert!(!xml.contains("schemeClr val=\"accent1\""));
    }

    #[test]
    fn test_shape_ids_start_after_placeholders() {
        use crate::common::RGBColor;
        use crate::pptx::shape::{DiagramBox, Geometry};

        let mut slide = Slide::new(260, SlideLayout::TitleAndBody);
        slide.set_title("System Architecture");
        for i in 0..3 {
            slide.add_shape(Shape::Box(DiagramBox {
                geometry: Geometry::RoundedRectangle,
                x: i * 100,
                y: 0,
                width: 100,
                height: 100,
                fill: RGBColor::new(0, 0, 0),
                text: String::new(),
            }));
        }

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Shape 4"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="5" name="Shape 5"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="6" name="Shape 6"/>"#));
    }
}
