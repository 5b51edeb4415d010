//! Static content tables for the generated deck.
//!
//! Every slide is described by a [`SlideSpec`] entry in [`DECK`]; the
//! renderer consumes the table in order. Keeping the copy in one place means
//! wording changes never touch the rendering code.

use crate::common::RGBColor;
use crate::pptx::Geometry;

/// The file the deck is written to.
pub const OUTPUT_FILE: &str = "Gym_Management_System_Presentation.pptx";

/// One bullet line in a body placeholder.
pub(crate) struct BulletItem {
    pub text: &'static str,
    pub bold: bool,
    /// Overrides the slide-wide bullet size when set
    pub size_pt: Option<f64>,
}

const fn item(text: &'static str) -> BulletItem {
    BulletItem {
        text,
        bold: false,
        size_pt: None,
    }
}

const fn emphasized(text: &'static str, size_pt: f64) -> BulletItem {
    BulletItem {
        text,
        bold: true,
        size_pt: Some(size_pt),
    }
}

/// A rounded-rectangle node in a box grid; position in inches.
pub(crate) struct BoxSpec {
    /// Box text; the first line is the label
    pub text: &'static str,
    pub x_in: f64,
    pub y_in: f64,
}

const fn grid_box(text: &'static str, x_in: f64, y_in: f64) -> BoxSpec {
    BoxSpec { text, x_in, y_in }
}

/// Fill selection for a box grid.
pub(crate) enum BoxFill {
    /// Every box uses the same color
    Fixed(RGBColor),
    /// Each box is colored by its first text line via [`role_fill`]
    ByRole,
}

/// A node in an architecture diagram; position and size in inches.
pub(crate) struct NodeSpec {
    pub geometry: Geometry,
    pub text: &'static str,
    pub x_in: f64,
    pub y_in: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub fill: RGBColor,
}

/// A straight connector between two points, in inches.
pub(crate) struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Declarative description of one slide.
pub(crate) enum SlideSpec {
    /// Centered title with a subtitle
    Title {
        title: &'static str,
        subtitle: &'static str,
    },
    /// Title with a bulleted body
    Bullets {
        title: &'static str,
        size_pt: f64,
        space_after_pt: f64,
        items: &'static [BulletItem],
    },
    /// Title with a grid of uniformly sized rounded-rectangle boxes
    Boxes {
        title: &'static str,
        width_in: f64,
        height_in: f64,
        fill: BoxFill,
        boxes: &'static [BoxSpec],
    },
    /// Title with free-form diagram nodes and connectors
    Diagram {
        title: &'static str,
        nodes: &'static [NodeSpec],
        links: &'static [Link],
    },
}

/// Fill color for a role box, keyed by the role label.
pub(crate) fn role_fill(role: &str) -> RGBColor {
    match role {
        "ADMIN" => RGBColor::new(220, 20, 60),   // Crimson
        "STAFF" => RGBColor::new(255, 165, 0),   // Orange
        "TRAINER" => RGBColor::new(34, 139, 34), // Forest Green
        _ => RGBColor::new(70, 130, 180),        // Steel Blue
    }
}

/// The deck, slide by slide.
pub(crate) static DECK: &[SlideSpec] = &[
    SlideSpec::Title {
        title: "Gym Management System",
        subtitle: "Comprehensive System Overview & Architecture\nProfessional Presentation",
    },
    SlideSpec::Bullets {
        title: "Presentation Agenda",
        size_pt: 18.0,
        space_after_pt: 6.0,
        items: &[
            item("• System Overview & Business Value"),
            item("• Technical Architecture"),
            item("• Database Design & Schema"),
            item("• User Roles & Access Control"),
            item("• Core Features & Functionality"),
            item("• API Endpoints & Integration"),
            item("• Security & Authentication"),
            item("• Deployment & Scalability"),
            item("• Future Enhancements"),
            item("• Q&A & Discussion"),
        ],
    },
    SlideSpec::Bullets {
        title: "System Overview & Business Value",
        size_pt: 16.0,
        space_after_pt: 8.0,
        items: &[
            item("🏋️ Full-Stack Gym Management Solution"),
            item("🎯 Comprehensive Role-Based Access Control"),
            item("💼 Streamlined Operations Management"),
            item("📊 Real-Time Analytics & Reporting"),
            item("🔐 Enterprise-Grade Security"),
            item("📱 Responsive Web Application"),
            item("🗄️ Robust Database Architecture"),
            item("🔄 Seamless API Integration"),
        ],
    },
    SlideSpec::Diagram {
        title: "System Architecture",
        nodes: &[
            NodeSpec {
                geometry: Geometry::RoundedRectangle,
                text: "Frontend\nReact.js\nBootstrap 5",
                x_in: 1.0,
                y_in: 2.0,
                width_in: 2.0,
                height_in: 1.5,
                fill: RGBColor::new(70, 130, 180), // Steel Blue
            },
            NodeSpec {
                geometry: Geometry::RoundedRectangle,
                text: "Backend\nSpring Boot\nJava 17",
                x_in: 4.0,
                y_in: 2.0,
                width_in: 2.0,
                height_in: 1.5,
                fill: RGBColor::new(46, 139, 87), // Sea Green
            },
            NodeSpec {
                geometry: Geometry::Cylinder,
                text: "Database\nMySQL 8.0\nJPA/Hibernate",
                x_in: 2.5,
                y_in: 4.5,
                width_in: 2.0,
                height_in: 1.5,
                fill: RGBColor::new(255, 140, 0), // Dark Orange
            },
        ],
        links: &[
            // Frontend to backend
            Link {
                from: (3.0, 2.75),
                to: (4.0, 2.75),
            },
            // Backend down to the database
            Link {
                from: (4.0, 3.5),
                to: (3.5, 4.5),
            },
        ],
    },
    SlideSpec::Boxes {
        title: "Database Schema Design",
        width_in: 2.0,
        height_in: 1.2,
        fill: BoxFill::Fixed(RGBColor::new(135, 206, 235)), // Sky Blue
        boxes: &[
            grid_box("Users\nRole-based access\nAuthentication", 1.0, 2.0),
            grid_box("Memberships\nSubscription plans\nStatus tracking", 3.0, 2.0),
            grid_box("Equipment\nInventory management\nMaintenance tracking", 5.0, 2.0),
            grid_box("Gym Classes\nClass scheduling\nCapacity management", 1.0, 4.0),
            grid_box("Training Sessions\nPersonal training\nBooking system", 3.0, 4.0),
            grid_box("Payments\nTransaction records\nMultiple methods", 5.0, 4.0),
            grid_box(
                "Class Registrations\nAttendance tracking\nEnrollment management",
                3.0,
                6.0,
            ),
        ],
    },
    SlideSpec::Boxes {
        title: "User Roles & Access Control",
        width_in: 2.5,
        height_in: 1.5,
        fill: BoxFill::ByRole,
        boxes: &[
            grid_box(
                "ADMIN\nFull system access\nUser management\nSystem configuration",
                1.0,
                2.0,
            ),
            grid_box(
                "STAFF\nMembership management\nEquipment management\nPayment processing",
                3.0,
                2.0,
            ),
            grid_box(
                "TRAINER\nTraining sessions\nClass teaching\nProgress tracking",
                5.0,
                2.0,
            ),
            grid_box(
                "MEMBER\nProfile management\nSession booking\nClass registration",
                3.0,
                4.0,
            ),
        ],
    },
    SlideSpec::Bullets {
        title: "Core Features & Functionality",
        size_pt: 16.0,
        space_after_pt: 6.0,
        items: &[
            item("🔐 JWT Authentication & Authorization"),
            item("👥 Multi-Role User Management"),
            item("💳 Membership & Subscription Management"),
            item("🏋️ Equipment Inventory & Maintenance"),
            item("📚 Class Scheduling & Registration"),
            item("👨‍🏫 Personal Training Session Booking"),
            item("💰 Payment Processing & Tracking"),
            item("📊 Real-Time Analytics & Reporting"),
            item("🔍 Advanced Search & Filtering"),
            item("📱 Responsive Web Interface"),
        ],
    },
    SlideSpec::Boxes {
        title: "API Endpoints & Integration",
        width_in: 2.5,
        height_in: 1.8,
        fill: BoxFill::Fixed(RGBColor::new(240, 248, 255)), // Alice Blue
        boxes: &[
            grid_box(
                "Authentication\n\nPOST /api/auth/signin\nPOST /api/auth/signup",
                1.0,
                2.0,
            ),
            grid_box(
                "Users\n\nGET /api/users\nPUT /api/users/{id}\nDELETE /api/users/{id}",
                3.0,
                2.0,
            ),
            grid_box(
                "Memberships\n\nGET /api/memberships\nPOST /api/memberships\nPUT /api/memberships/{id}",
                5.0,
                2.0,
            ),
            grid_box(
                "Equipment\n\nGET /api/equipment\nPOST /api/equipment\nPUT /api/equipment/{id}",
                1.0,
                4.0,
            ),
            grid_box(
                "Classes\n\nGET /api/gym-classes\nPOST /api/gym-classes\nPUT /api/gym-classes/{id}",
                3.0,
                4.0,
            ),
            grid_box(
                "Sessions\n\nGET /api/training-sessions\nPOST /api/training-sessions/book",
                5.0,
                4.0,
            ),
        ],
    },
    SlideSpec::Boxes {
        title: "Security & Authentication",
        width_in: 2.5,
        height_in: 1.5,
        fill: BoxFill::Fixed(RGBColor::new(255, 215, 0)), // Gold
        boxes: &[
            grid_box("JWT Tokens\nSecure token-based\nauthentication", 1.0, 2.0),
            grid_box("BCrypt\nPassword encryption\n& hashing", 3.0, 2.0),
            grid_box("Spring Security\nRole-based access\ncontrol", 5.0, 2.0),
            grid_box("CORS\nCross-origin\nresource sharing", 1.0, 4.0),
            grid_box("Input Validation\nData sanitization\n& validation", 3.0, 4.0),
            grid_box("HTTPS\nSecure communication\nprotocols", 5.0, 4.0),
        ],
    },
    SlideSpec::Bullets {
        title: "Deployment & Scalability",
        size_pt: 16.0,
        space_after_pt: 6.0,
        items: &[
            item("🚀 Spring Boot Application Server"),
            item("🗄️ MySQL Database with Connection Pooling"),
            item("🌐 React.js Frontend with Bootstrap"),
            item("🔧 Maven Build & Dependency Management"),
            item("📦 Docker Containerization Ready"),
            item("☁️ Cloud Deployment Compatible"),
            item("📊 Monitoring & Logging Integration"),
            item("🔄 CI/CD Pipeline Support"),
        ],
    },
    SlideSpec::Boxes {
        title: "Future Enhancements & Roadmap",
        width_in: 2.5,
        height_in: 1.5,
        fill: BoxFill::Fixed(RGBColor::new(138, 43, 226)), // Blue Violet
        boxes: &[
            grid_box("Mobile App\niOS & Android\napplications", 1.0, 2.0),
            grid_box("AI Integration\nSmart scheduling\n& recommendations", 3.0, 2.0),
            grid_box("Payment Gateway\nStripe, PayPal\nintegration", 5.0, 2.0),
            grid_box("Analytics\nAdvanced reporting\n& insights", 1.0, 4.0),
            grid_box("Notifications\nEmail & SMS\nalerts", 3.0, 4.0),
            grid_box("IoT Integration\nSmart equipment\nmonitoring", 5.0, 4.0),
        ],
    },
    SlideSpec::Bullets {
        title: "Questions & Discussion",
        size_pt: 18.0,
        space_after_pt: 8.0,
        items: &[
            item("❓ Technical Questions"),
            item("💡 Feature Requests"),
            item("🔧 Implementation Details"),
            item("📊 Performance Considerations"),
            item("🚀 Deployment Strategies"),
            item("🔄 Integration Options"),
            item("📱 User Experience"),
            item("🔐 Security Concerns"),
        ],
    },
    SlideSpec::Bullets {
        title: "Thank You!",
        size_pt: 16.0,
        space_after_pt: 6.0,
        items: &[
            item("🎯 Gym Management System"),
            item("📧 Contact: development@example.com"),
            item("🌐 Website: www.example.com"),
            item("📱 Phone: +1 (555) 123-4567"),
            item(""),
            emphasized("Ready for implementation and deployment!", 18.0),
            item(""),
            item("Any additional questions?"),
        ],
    },
];
