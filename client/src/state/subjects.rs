//! Research subject catalog and per-subject preference records.
//!
//! DESIGN
//! ======
//! The catalog is compiled in and read-only. Preferences reference catalog
//! entries by `id` only, so stored records stay small and survive catalog
//! copy edits.

#[cfg(test)]
#[path = "subjects_test.rs"]
mod subjects_test;

use serde::{Deserialize, Serialize};

/// One top-level research area offered during onboarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubjectCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub subcategories: Option<&'static [&'static str]>,
}

/// A user's interest in one catalog subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPreference {
    pub subject: String,
    /// Narrowed subcategory labels. Never populated by the selection screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<String>>,
}

impl SubjectPreference {
    /// Preference covering the whole subject.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), subcategories: None }
    }
}

/// Look up a catalog entry by id.
#[must_use]
pub fn find_subject(id: &str) -> Option<&'static SubjectCategory> {
    RESEARCH_SUBJECTS.iter().find(|s| s.id == id)
}

pub static RESEARCH_SUBJECTS: [SubjectCategory; 9] = [
    SubjectCategory {
        id: "cs",
        name: "Computer Science",
        description: "Computing, AI, algorithms, and software",
        subcategories: Some(&[
            "Artificial Intelligence",
            "Machine Learning",
            "Computer Vision",
            "Natural Language Processing",
            "Robotics",
            "Cryptography",
            "Distributed Systems",
            "Human-Computer Interaction",
            "Software Engineering",
            "Algorithms",
        ]),
    },
    SubjectCategory {
        id: "physics",
        name: "Physics",
        description: "Fundamental forces, matter, and energy",
        subcategories: Some(&[
            "Quantum Physics",
            "Astrophysics",
            "Condensed Matter",
            "High Energy Physics",
            "General Relativity",
            "Statistical Mechanics",
            "Optics",
            "Nuclear Physics",
        ]),
    },
    SubjectCategory {
        id: "mathematics",
        name: "Mathematics",
        description: "Pure and applied mathematics",
        subcategories: Some(&[
            "Number Theory",
            "Algebra",
            "Geometry",
            "Topology",
            "Analysis",
            "Probability",
            "Statistics",
            "Combinatorics",
            "Logic",
        ]),
    },
    SubjectCategory {
        id: "biology",
        name: "Biology",
        description: "Life sciences and biological systems",
        subcategories: Some(&[
            "Molecular Biology",
            "Genetics",
            "Neuroscience",
            "Immunology",
            "Ecology",
            "Evolutionary Biology",
            "Cell Biology",
            "Bioinformatics",
        ]),
    },
    SubjectCategory {
        id: "chemistry",
        name: "Chemistry",
        description: "Matter, composition, and reactions",
        subcategories: Some(&[
            "Organic Chemistry",
            "Inorganic Chemistry",
            "Physical Chemistry",
            "Analytical Chemistry",
            "Biochemistry",
            "Materials Science",
        ]),
    },
    SubjectCategory {
        id: "medicine",
        name: "Medicine & Health",
        description: "Medical research and healthcare",
        subcategories: Some(&[
            "Clinical Trials",
            "Epidemiology",
            "Public Health",
            "Pharmacology",
            "Oncology",
            "Cardiology",
            "Psychiatry",
            "Radiology",
        ]),
    },
    SubjectCategory {
        id: "engineering",
        name: "Engineering",
        description: "Applied sciences and technology",
        subcategories: Some(&[
            "Electrical Engineering",
            "Mechanical Engineering",
            "Civil Engineering",
            "Chemical Engineering",
            "Bioengineering",
            "Aerospace Engineering",
        ]),
    },
    SubjectCategory {
        id: "economics",
        name: "Economics",
        description: "Economic theory and analysis",
        subcategories: Some(&[
            "Microeconomics",
            "Macroeconomics",
            "Econometrics",
            "Behavioral Economics",
            "Game Theory",
            "Finance",
        ]),
    },
    SubjectCategory {
        id: "social",
        name: "Social Sciences",
        description: "Society, behavior, and culture",
        subcategories: Some(&["Psychology", "Sociology", "Anthropology", "Political Science", "Linguistics"]),
    },
];
