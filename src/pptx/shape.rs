/// Shape types and XML generation for slides.
///
/// Slides carry two kinds of free-floating shapes: filled diagram boxes with
/// centered text, and straight connectors between diagram boxes. Both are
/// positioned in EMUs relative to the top-left corner of the slide.
use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::pptx::error::Result;
use std::fmt::Write as FmtWrite;

/// Preset geometry for a diagram box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Rounded rectangle (`roundRect`)
    RoundedRectangle,
    /// Cylinder (`can`), conventionally used for database nodes
    Cylinder,
}

impl Geometry {
    /// The DrawingML preset geometry name.
    fn prst(&self) -> &'static str {
        match self {
            Geometry::RoundedRectangle => "roundRect",
            Geometry::Cylinder => "can",
        }
    }
}

/// A filled auto shape with centered text, used for diagram nodes.
#[derive(Debug, Clone)]
pub struct DiagramBox {
    /// Preset geometry
    pub geometry: Geometry,
    /// Left edge in EMUs
    pub x: i64,
    /// Top edge in EMUs
    pub y: i64,
    /// Width in EMUs
    pub width: i64,
    /// Height in EMUs
    pub height: i64,
    /// Solid fill color
    pub fill: RGBColor,
    /// Text content; newlines separate paragraphs
    pub text: String,
}

/// A straight connector between two points on the slide.
///
/// DrawingML positions connectors by a bounding box plus flip flags, so the
/// endpoint order is preserved through `flipH`/`flipV` rather than stored
/// directly.
#[derive(Debug, Clone)]
pub struct Connector {
    /// Start point in EMUs
    pub x1: i64,
    pub y1: i64,
    /// End point in EMUs
    pub x2: i64,
    pub y2: i64,
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub enum Shape {
    Box(DiagramBox),
    Connector(Connector),
}

impl Shape {
    /// Append this shape's XML to the slide's shape tree.
    ///
    /// # Arguments
    /// * `xml` - Output buffer
    /// * `shape_id` - Drawing object ID, unique within the slide
    pub(crate) fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        match self {
            Shape::Box(b) => write_box_xml(xml, shape_id, b),
            Shape::Connector(c) => write_connector_xml(xml, shape_id, c),
        }
    }
}

fn write_box_xml(xml: &mut String, shape_id: u32, b: &DiagramBox) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="Shape {}"/>"#, shape_id, shape_id)?;
    xml.push_str("<p:cNvSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, b.x, b.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, b.width, b.height)?;
    xml.push_str("</a:xfrm>");
    write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, b.geometry.prst())?;
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        b.fill.to_hex()
    )?;
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" anchor="ctr"/>"#);
    xml.push_str("<a:lstStyle/>");
    for line in b.text.split('\n') {
        xml.push_str("<a:p>");
        xml.push_str(r#"<a:pPr algn="ctr"/>"#);
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

fn write_connector_xml(xml: &mut String, shape_id: u32, c: &Connector) -> Result<()> {
    let off_x = c.x1.min(c.x2);
    let off_y = c.y1.min(c.y2);
    let ext_x = (c.x2 - c.x1).abs();
    let ext_y = (c.y2 - c.y1).abs();
    let flip_h = c.x2 < c.x1;
    let flip_v = c.y2 < c.y1;

    xml.push_str("<p:cxnSp>");
    xml.push_str("<p:nvCxnSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Connector {}"/>"#,
        shape_id, shape_id
    )?;
    xml.push_str("<p:cNvCxnSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvCxnSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm");
    if flip_h {
        xml.push_str(r#" flipH="1""#);
    }
    if flip_v {
        xml.push_str(r#" flipV="1""#);
    }
    xml.push('>');
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, off_x, off_y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, ext_x, ext_y)?;
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
    xml.push_str(r#"<a:ln><a:solidFill><a:schemeClr val="tx1"/></a:solidFill></a:ln>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("</p:cxnSp>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches_to_emu;

    #[test]
    fn test_box_xml() {
        let shape = Shape::Box(DiagramBox {
            geometry: Geometry::RoundedRectangle,
            x: inches_to_emu(1.0),
            y: inches_to_emu(2.0),
            width: inches_to_emu(2.0),
            height: inches_to_emu(1.5),
            fill: RGBColor::new(70, 130, 180),
            text: "Frontend\nReact.js".to_string(),
        });

        let mut xml = String::new();
        shape.write_xml(&mut xml, 4).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="4""#));
        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"<a:srgbClr val="4682B4"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="1828800"/>"#));
        assert!(xml.contains("<a:t>Frontend</a:t>"));
        assert!(xml.contains("<a:t>React.js</a:t>"));
    }

    #[test]
    fn test_cylinder_geometry() {
        let shape = Shape::Box(DiagramBox {
            geometry: Geometry::Cylinder,
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            fill: RGBColor::new(255, 140, 0),
            text: "Database".to_string(),
        });

        let mut xml = String::new();
        shape.write_xml(&mut xml, 5).unwrap();
        assert!(xml.contains(r#"prst="can""#));
    }

    #[test]
    fn test_connector_flips() {
        // Left-to-right horizontal connector: no flips
        let mut xml = String::new();
        Shape::Connector(Connector {
            x1: 100,
            y1: 50,
            x2: 300,
            y2: 50,
        })
        .write_xml(&mut xml, 7)
        .unwrap();
        assert!(xml.contains("<a:xfrm>"));
        assert!(xml.contains(r#"<a:off x="100" y="50"/>"#));
        assert!(xml.contains(r#"<a:ext cx="200" cy="0"/>"#));

        // End point left of start point: horizontal flip
        let mut xml = String::new();
        Shape::Connector(Connector {
            x1: 300,
            y1: 50,
            x2: 100,
            y2: 150,
        })
        .write_xml(&mut xml, 8)
        .unwrap();
        assert!(xml.contains(r#"<a:xfrm flipH="1">"#));
        assert!(xml.contains(r#"<a:off x="100" y="50"/>"#));
    }

    #[test]
    fn test_box_text_is_escaped() {
        let shape = Shape::Box(DiagramBox {
            geometry: Geometry::RoundedRectangle,
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            fill: RGBColor::new(0, 0, 0),
            text: "Q&A <notes>".to_string(),
        });

        let mut xml = String::new();
        shape.write_xml(&mut xml, 4).unwrap();
        assert!(xml.contains("<a:t>Q&amp;A &lt;notes&gt;</a:t>"));
    }

    #[test]
    fn test_box_blank_line_has_no_run() {
        let shape = Shape::Box(DiagramBox {
            geometry: Geometry::RoundedRectangle,
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            fill: RGBColor::new(240, 248, 255),
            text: "Users\n\nGET /api/users".to_string(),
        });

        let mut xml = String::new();
        shape.write_xml(&mut xml, 4).unwrap();
        assert!(xml.contains(r#"<a:p><a:pPr algn="ctr"/></a:p>"#));
    }
}
