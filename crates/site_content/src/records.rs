use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub monogram: String,
    pub tagline: String,
    pub headline: String,
    pub intro: String,
    pub location: String,
    pub focus_line: String,
    pub current_study: String,
    pub email: String,
    pub phone: String,
    pub cv_url: String,
    /// File name of the hero portrait, resolved against the assets dir.
    pub portrait_image: String,
    pub about_heading: String,
    pub about_body: String,
}

/// One card in the project gallery. `image` is a file name resolved against
/// the configured assets directory, not a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub kind: String,
    pub link: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub figure: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    // Plain values stay ahead of the tables so the catalog serializes to
    // well-formed TOML.
    pub skills: Vec<String>,
    pub projects_index_url: String,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub focus_areas: Vec<FocusArea>,
    pub education: Vec<EducationEntry>,
    pub highlights: Vec<Highlight>,
    pub socials: Vec<SocialLink>,
}

impl Project {
    /// Stable key for texture caches and reveal bookkeeping.
    pub fn slug(&self) -> String {
        self.title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }
}
