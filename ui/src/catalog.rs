//! Static navigation content: brand, primary entries and the subject catalog.

/// Brand mark shown at the leading edge of the header.
pub const BRAND: &str = "Coaching Hub";

/// Every link in the bar points here until real destinations exist.
pub const PLACEHOLDER_HREF: &str = "#";

/// A subject heading paired with its ordered course names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectEntry {
    pub title: &'static str,
    pub courses: &'static [&'static str],
}

pub const SUBJECTS: [SubjectEntry; 4] = [
    SubjectEntry {
        title: "Mathematics",
        courses: &["Calculus", "Algebra", "Geometry", "Statistics"],
    },
    SubjectEntry {
        title: "Physics",
        courses: &[
            "Mechanics",
            "Thermodynamics",
            "Electromagnetism",
            "Quantum Physics",
        ],
    },
    SubjectEntry {
        title: "Chemistry",
        courses: &[
            "Organic Chemistry",
            "Inorganic Chemistry",
            "Physical Chemistry",
            "Biochemistry",
        ],
    },
    SubjectEntry {
        title: "Biology",
        courses: &["Cell Biology", "Genetics", "Ecology", "Human Anatomy"],
    },
];

/// Primary entries, in display order. Desktop and mobile layouts both walk this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link(&'static str),
    /// The subjects dropdown toggle.
    Courses,
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Link(label) => label,
            NavEntry::Courses => "Courses",
        }
    }
}

pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry::Link("Home"),
    NavEntry::Courses,
    NavEntry::Link("About"),
    NavEntry::Link("Contact"),
];
