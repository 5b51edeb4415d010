//! Renders the deck content tables into a presentation.

use crate::common::unit::inches_to_emu;
use crate::deck::content::{self, BoxFill, SlideSpec};
use crate::pptx::{
    Connector, DiagramBox, Geometry, Paragraph, Presentation, Shape, SlideLayout, TitleStyle,
};

/// Build the full deck as an in-memory presentation.
pub fn build_deck() -> Presentation {
    let mut pres = Presentation::new();

    for spec in content::DECK {
        render_slide(&mut pres, spec);
    }

    log::info!("built deck with {} slides", pres.slide_count());
    pres
}

fn render_slide(pres: &mut Presentation, spec: &SlideSpec) {
    match spec {
        SlideSpec::Title { title, subtitle } => {
            let slide = pres.add_slide(SlideLayout::Title);
            slide.set_title(title);
            slide.set_title_style(TitleStyle {
                size_pt: 44.0,
                bold: true,
                accent: true,
            });
            slide.set_subtitle(subtitle);
        },
        SlideSpec::Bullets {
            title,
            size_pt,
            space_after_pt,
            items,
        } => {
            let slide = pres.add_slide(SlideLayout::TitleAndBody);
            slide.set_title(title);
            for item in *items {
                let mut paragraph = Paragraph::new(
                    item.text,
                    item.size_pt.unwrap_or(*size_pt),
                    *space_after_pt,
                );
                if item.bold {
                    paragraph = paragraph.bold();
                }
                slide.add_paragraph(paragraph);
            }
        },
        SlideSpec::Boxes {
            title,
            width_in,
            height_in,
            fill,
            boxes,
        } => {
            let slide = pres.add_slide(SlideLayout::TitleAndBody);
            slide.set_title(title);
            for spec in *boxes {
                let fill = match fill {
                    BoxFill::Fixed(color) => *color,
                    BoxFill::ByRole => {
                        let label = spec.text.split('\n').next().unwrap_or_default();
                        content::role_fill(label)
                    },
                };
                slide.add_shape(Shape::Box(DiagramBox {
                    geometry: Geometry::RoundedRectangle,
                    x: inches_to_emu(spec.x_in),
                    y: inches_to_emu(spec.y_in),
                    width: inches_to_emu(*width_in),
                    height: inches_to_emu(*height_in),
                    fill,
                    text: spec.text.to_string(),
                }));
            }
        },
        SlideSpec::Diagram {
            title,
            nodes,
            links,
        } => {
            let slide = pres.add_slide(SlideLayout::TitleAndBody);
            slide.set_title(title);
            for node in *nodes {
                slide.add_shape(Shape::Box(DiagramBox {
                    geometry: node.geometry,
                    x: inches_to_emu(node.x_in),
                    y: inches_to_emu(node.y_in),
                    width: inches_to_emu(node.width_in),
                    height: inches_to_emu(node.height_in),
                    fill: node.fill,
                    text: node.text.to_string(),
                }));
            }
            for link in *links {
                slide.add_shape(Shape::Connector(Connector {
                    x1: inches_to_emu(link.from.0),
                    y1: inches_to_emu(link.from.1),
                    x2: inches_to_emu(link.to.0),
                    y2: inches_to_emu(link.to.1),
                }));
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::Slide;

    fn slide_titles(pres: &Presentation) -> Vec<&str> {
        pres.slides().iter().map(Slide::title).collect()
    }

    #[test]
    fn test_deck_slide_count_and_titles() {
        let pres = build_deck();
        assert_eq!(pres.slide_count(), 13);

        let expected = [
            "Gym Management System",
            "Presentation Agenda",
            "System Overview & Business Value",
            "System Architecture",
            "Database Schema Design",
            "User Roles & Access Control",
            "Core Features & Functionality",
            "API Endpoints & Integration",
            "Security & Authentication",
            "Deployment & Scalability",
            "Future Enhancements & Roadmap",
            "Questions & Discussion",
            "Thank You!",
        ];
        assert_eq!(slide_titles(&pres), expected);
    }

    #[test]
    fn test_only_first_slide_uses_title_layout() {
        let pres = build_deck();
        for (index, slide) in pres.slides().iter().enumerate() {
            let expected = if index == 0 {
                SlideLayout::Title
            } else {
                SlideLayout::TitleAndBody
            };
            assert_eq!(slide.layout(), expected);
        }
    }

    #[test]
    fn test_architecture_slide_shapes() {
        let pres = build_deck();
        let slide = &pres.slides()[3];

        let boxes: Vec<&DiagramBox> = slide
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Box(b) => Some(b),
                _ => None,
            })
            .collect();
        let connectors: Vec<&Connector> = slide
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Connector(c) => Some(c),
                _ => None,
            })
            .collect();

        assert_eq!(boxes.len(), 3);
        assert_eq!(connectors.len(), 2);

        // The database node is the cylinder
        let cylinder = boxes
            .iter()
            .find(|b| b.geometry == Geometry::Cylinder)
            .unwrap();
        assert!(cylinder.text.starts_with("Database"));

        // The backend-to-database connector runs down and to the left
        let diagonal = &connectors[1];
        assert!(diagonal.x2 < diagonal.x1);
        assert!(diagonal.y2 > diagonal.y1);
    }

    #[test]
    fn test_schema_slide_has_seven_entities() {
        let pres = build_deck();
        let slide = &pres.slides()[4];
        assert_eq!(slide.shapes().len(), 7);
    }

    #[test]
    fn test_role_boxes_have_distinct_fills() {
        let pres = build_deck();
        let slide = &pres.slides()[5];

        let boxes: Vec<&DiagramBox> = slide
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Box(b) => Some(b),
                _ => None,
            })
            .collect();

        let labels: Vec<&str> = boxes
            .iter()
            .map(|b| b.text.split('\n').next().unwrap())
            .collect();
        assert_eq!(labels, ["ADMIN", "STAFF", "TRAINER", "MEMBER"]);

        let fills: Vec<String> = boxes.iter().map(|b| b.fill.to_hex()).collect();
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_consecutive_builds_agree() {
        let first = build_deck();
        let second = build_deck();

        assert_eq!(first.slide_count(), second.slide_count());
        assert_eq!(slide_titles(&first), slide_titles(&second));
    }

    #[test]
    fn test_save_to_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(content::OUTPUT_FILE);

        assert!(build_deck().save(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_contact_slide_emphasizes_readiness_line() {
        let pres = build_deck();
        let slide = &pres.slides()[12];

        let emphasized = slide
            .paragraphs()
            .iter()
            .find(|p| p.text == "Ready for implementation and deployment!")
            .unwrap();
        assert!(emphasized.bold);
        assert_eq!(emphasized.size_pt, 18.0);

        // Other lines keep the slide-wide formatting
        let plain = slide
            .paragraphs()
            .iter()
            .find(|p| p.text == "Any additional questions?")
            .unwrap();
        assert!(!plain.bold);
        assert_eq!(plain.size_pt, 16.0);
    }

    #[test]
    fn test_deck_serializes_to_valid_package() {
        let bytes = build_deck().to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

        assert!(archive.by_name("ppt/slides/slide13.xml").is_ok());
        assert!(archive.by_name("ppt/slides/slide14.xml").is_err());
    }

    #[test]
    fn test_all_package_xml_is_well_formed() {
        use quick_xml::events::Event;

        let bytes = build_deck().to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

        for index in 0..archive.len() {
            let mut file = archive.by_index(index).unwrap();
            let name = file.name().to_string();
            if !name.ends_with(".xml") && !name.ends_with(".rels") {
                continue;
            }

            let mut content = String::new();
            std::io::Read::read_to_string(&mut file, &mut content).unwrap();

            let mut reader = quick_xml::Reader::from_str(&content);
            loop {
                match reader.read_event() {
                    Ok(Event::Eof) => break,
                    Ok(_) => {},
                    Err(err) => panic!("malformed XML in {name}: {err}"),
                }
            }
        }
    }

    #[test]
    fn test_deck_saves_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(content::OUTPUT_FILE);

        build_deck().save(&path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
