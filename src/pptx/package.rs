//! Assembly of the OPC package for a presentation.
//!
//! Builds every part of the .pptx package and wires the relationship graph:
//! the package points at the presentation and document properties, the
//! presentation points at the master, slides and support parts, the master
//! points at its layouts and theme, and each slide points back at its layout.
//!
//! The master is related to layout 1, layout 2 and the theme in that order,
//! because the master template XML references them as `rId1`..`rId3`.

use crate::common::xml::escape_xml;
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::error::OpcError;
use crate::opc::package::OpcPackage;
use crate::opc::packuri::PackUri;
use crate::opc::part::{BlobPart, Part};
use crate::opc::pkgwriter::PackageWriter;
use crate::pptx::error::Result;
use crate::pptx::presentation::Presentation;
use crate::pptx::slide::SlideLayout;
use crate::pptx::template;
use chrono::Utc;
use std::fmt::Write as FmtWrite;

fn pack_uri(uri: &str) -> Result<PackUri> {
    Ok(PackUri::new(uri).map_err(OpcError::InvalidPackUri)?)
}

fn xml_part(uri: &str, content_type: &str, xml: &str) -> Result<BlobPart> {
    Ok(BlobPart::new(
        pack_uri(uri)?,
        content_type.to_string(),
        xml.as_bytes().to_vec(),
    ))
}

/// Serialize a presentation to .pptx package bytes.
pub(crate) fn serialize(pres: &Presentation) -> Result<Vec<u8>> {
    let pkg = build_package(pres)?;
    log::debug!("assembled package with {} parts", pkg.part_count());
    Ok(PackageWriter::to_bytes(&pkg)?)
}

/// Build the complete OPC package for a presentation.
fn build_package(pres: &Presentation) -> Result<OpcPackage> {
    let mut pkg = OpcPackage::new();

    // Slide master with its layouts and theme. Relationship order matters
    // here: the master XML references rId1, rId2 and rId3.
    let mut master = xml_part(
        "/ppt/slideMasters/slideMaster1.xml",
        ct::PML_SLIDE_MASTER,
        template::slide_master_xml(),
    )?;
    master.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
    master.relate_to("../slideLayouts/slideLayout2.xml", rt::SLIDE_LAYOUT);
    master.relate_to("../theme/theme1.xml", rt::THEME);
    pkg.add_part(Box::new(master));

    let layouts = [
        ("/ppt/slideLayouts/slideLayout1.xml", template::slide_layout_title_xml()),
        ("/ppt/slideLayouts/slideLayout2.xml", template::slide_layout_body_xml()),
    ];
    for (uri, xml) in layouts {
        let mut layout = xml_part(uri, ct::PML_SLIDE_LAYOUT, xml)?;
        layout.relate_to("../slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);
        pkg.add_part(Box::new(layout));
    }

    pkg.add_part(Box::new(xml_part(
        "/ppt/theme/theme1.xml",
        ct::OFC_THEME,
        template::theme_xml(),
    )?));
    pkg.add_part(Box::new(xml_part(
        "/ppt/presProps.xml",
        ct::PML_PRES_PROPS,
        template::pres_props_xml(),
    )?));
    pkg.add_part(Box::new(xml_part(
        "/ppt/viewProps.xml",
        ct::PML_VIEW_PROPS,
        template::view_props_xml(),
    )?));
    pkg.add_part(Box::new(xml_part(
        "/ppt/tableStyles.xml",
        ct::PML_TABLE_STYLES,
        template::table_styles_xml(),
    )?));

    // Slide parts, each pointing back at its layout
    for (index, slide) in pres.slides().iter().enumerate() {
        let uri = format!("/ppt/slides/slide{}.xml", index + 1);
        let layout_target = match slide.layout() {
            SlideLayout::Title => "../slideLayouts/slideLayout1.xml",
            SlideLayout::TitleAndBody => "../slideLayouts/slideLayout2.xml",
        };

        let slide_xml = slide.to_xml()?;
        log::debug!("slide {}: {} bytes", index + 1, slide_xml.len());

        let mut part = xml_part(&uri, ct::PML_SLIDE, &slide_xml)?;
        part.relate_to(layout_target, rt::SLIDE_LAYOUT);
        pkg.add_part(Box::new(part));
    }

    // Presentation part. The master is related first so the slide rIds
    // follow it in order.
    let mut pres_part = xml_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, "")?;
    let master_r_id = pres_part.relate_to("slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);
    let slide_r_ids: Vec<String> = (1..=pres.slide_count())
        .map(|n| pres_part.relate_to(&format!("slides/slide{}.xml", n), rt::SLIDE))
        .collect();
    pres_part.relate_to("presProps.xml", rt::PRES_PROPS);
    pres_part.relate_to("viewProps.xml", rt::VIEW_PROPS);
    pres_part.relate_to("theme/theme1.xml", rt::THEME);
    pres_part.relate_to("tableStyles.xml", rt::TABLE_STYLES);
    pres_part.set_blob(pres.to_xml(&master_r_id, &slide_r_ids)?.into_bytes());
    pkg.add_part(Box::new(pres_part));

    // Document properties
    pkg.add_part(Box::new(xml_part(
        "/docProps/core.xml",
        ct::OPC_CORE_PROPERTIES,
        &core_props_xml(pres),
    )?));
    pkg.add_part(Box::new(xml_part(
        "/docProps/app.xml",
        ct::OFC_EXTENDED_PROPERTIES,
        &app_props_xml(pres)?,
    )?));

    // Package-level relationships
    pkg.relate_to("ppt/presentation.xml", rt::OFFICE_DOCUMENT);
    pkg.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);
    pkg.relate_to("docProps/app.xml", rt::EXTENDED_PROPERTIES);

    Ok(pkg)
}

/// Generate `/docProps/core.xml` with the current time as the creation and
/// modification timestamps (W3CDTF format).
fn core_props_xml(pres: &Presentation) -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let title = pres
        .slides()
        .first()
        .map(|slide| slide.title())
        .unwrap_or_default();

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#);
    xml.push_str(r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#);
    xml.push_str(r#"xmlns:dcterms="http://purl.org/dc/terms/" "#);
    xml.push_str(r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#);
    xml.push_str(r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    let _ = write!(xml, "<dc:title>{}</dc:title>", escape_xml(title));
    xml.push_str("<dc:creator>longan</dc:creator>");
    xml.push_str("<cp:lastModifiedBy>longan</cp:lastModifiedBy>");
    xml.push_str("<cp:revision>1</cp:revision>");
    let _ = write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        now
    );
    let _ = write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        now
    );
    xml.push_str("</cp:coreProperties>");

    xml
}

/// Generate `/docProps/app.xml` with the slide count and slide titles.
fn app_props_xml(pres: &Presentation) -> Result<String> {
    let slide_count = pres.slide_count();

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#);
    xml.push_str(r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<Application>Microsoft Office PowerPoint</Application>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");

    xml.push_str("<HeadingPairs><vt:vector size=\"4\" baseType=\"variant\">");
    xml.push_str("<vt:variant><vt:lpstr>Theme</vt:lpstr></vt:variant>");
    xml.push_str("<vt:variant><vt:i4>1</vt:i4></vt:variant>");
    xml.push_str("<vt:variant><vt:lpstr>Slide Titles</vt:lpstr></vt:variant>");
    write!(xml, "<vt:variant><vt:i4>{}</vt:i4></vt:variant>", slide_count)?;
    xml.push_str("</vt:vector></HeadingPairs>");

    write!(
        xml,
        r#"<TitlesOfParts><vt:vector size="{}" baseType="lpstr">"#,
        slide_count + 1
    )?;
    xml.push_str("<vt:lpstr>Office Theme</vt:lpstr>");
    for slide in pres.slides() {
        write!(xml, "<vt:lpstr>{}</vt:lpstr>", escape_xml(slide.title()))?;
    }
    xml.push_str("</vt:vector></TitlesOfParts>");

    xml.push_str("</Properties>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::slide::SlideLayout;
    use std::io::Read;

    fn two_slide_presentation() -> Presentation {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Title).set_title("First");
        pres.add_slide(SlideLayout::TitleAndBody).set_title("Second");
        pres
    }

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_package_has_all_parts() {
        let bytes = serialize(&two_slide_presentation()).unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.clone())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();

        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/theme/theme1.xml",
            "ppt/presProps.xml",
            "ppt/viewProps.xml",
            "ppt/tableStyles.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.contains(&expected), "missing package member {expected}");
        }
    }

    #[test]
    fn test_content_types_cover_slides() {
        let bytes = serialize(&two_slide_presentation()).unwrap();
        let content_types = read_member(&bytes, "[Content_Types].xml");

        assert!(content_types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(content_types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(content_types.contains("presentationml.presentation.main+xml"));
    }

    #[test]
    fn test_slide_rels_point_at_matching_layout() {
        let bytes = serialize(&two_slide_presentation()).unwrap();

        let slide1_rels = read_member(&bytes, "ppt/slides/_rels/slide1.xml.rels");
        assert!(slide1_rels.contains("../slideLayouts/slideLayout1.xml"));

        let slide2_rels = read_member(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(slide2_rels.contains("../slideLayouts/slideLayout2.xml"));
    }

    #[test]
    fn test_app_props_list_slide_titles() {
        let bytes = serialize(&two_slide_presentation()).unwrap();
        let app = read_member(&bytes, "docProps/app.xml");

        assert!(app.contains("<Slides>2</Slides>"));
        assert!(app.contains("<vt:lpstr>First</vt:lpstr>"));
        assert!(app.contains("<vt:lpstr>Second</vt:lpstr>"));
    }

    #[test]
    fn test_core_props_carry_deck_title() {
        let bytes = serialize(&two_slide_presentation()).unwrap();
        let core = read_member(&bytes, "docProps/core.xml");

        assert!(core.contains("<dc:title>First</dc:title>"));
        assert!(core.contains(r#"xsi:type="dcterms:W3CDTF""#));
    }
}
