//! Built-in catalog plus the optional TOML override a deployment can ship
//! next to the binary.

use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::records::{
    Catalog, EducationEntry, FocusArea, Highlight, Profile, Project, SocialLink,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read content file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse content file '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid link for '{owner}': {url}")]
    InvalidLink { owner: String, url: String },
    #[error("missing required field '{field}' on '{owner}'")]
    MissingField {
        owner: String,
        field: &'static str,
    },
}

impl Catalog {
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(raw).map_err(|source| CatalogError::Parse {
            path: origin.to_string(),
            source,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    /// Every outward link must parse as an absolute URL and every project
    /// card needs a title; anything else renders as authored.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    owner: "project".to_string(),
                    field: "title",
                });
            }
            require_url(&project.title, &project.link)?;
        }
        for social in &self.socials {
            require_url(&social.label, &social.url)?;
        }
        require_url("projects index", &self.projects_index_url)?;
        Ok(())
    }
}

fn require_url(owner: &str, candidate: &str) -> Result<(), CatalogError> {
    Url::parse(candidate).map_err(|_| CatalogError::InvalidLink {
        owner: owner.to_string(),
        url: candidate.to_string(),
    })?;
    Ok(())
}

/// The shipped portfolio content. A `portfolio.toml` catalog, when
/// configured and readable, replaces this wholesale.
pub fn default_catalog() -> Catalog {
    Catalog {
        skills: [
            "UI/UX Design",
            "Web Design",
            "Web Development",
            "Frontend Development",
            "React",
            "Next.js",
            "Tailwind CSS",
            "JavaScript",
            "HTML",
            "CSS",
            "Figma",
            "AI",
            "Machine Learning",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        projects_index_url: "https://github.com/emergingravi".to_string(),
        profile: Profile {
            name: "Ravi Shankar Sah".to_string(),
            monogram: "RS".to_string(),
            tagline: "Web Designer · Developer · Researcher".to_string(),
            headline: "Designing digital products that feel effortless and human.".to_string(),
            intro: "I'm Ravi Shankar Sah, a UI/UX designer, web developer, and AI/ML \
                    enthusiast from Nepal. I craft interfaces, build web apps, and \
                    research healthcare problems with machine learning."
                .to_string(),
            location: "Nepal".to_string(),
            focus_line: "UI/UX · Web Development · AI/ML".to_string(),
            current_study: "BSc. CSIT".to_string(),
            email: "ravi.prince.7374@gmail.com".to_string(),
            phone: "+977-9812174843".to_string(),
            cv_url: "https://ssravi.com.np/cv.pdf".to_string(),
            portrait_image: "pp.jpg".to_string(),
            about_heading: "Design that blends clarity, craft, and curiosity.".to_string(),
            about_body: "I design with a research mindset, prototype fast, and build \
                         solutions that scale. My work spans product interfaces, web \
                         development, and applied ML research in healthcare."
                .to_string(),
        },
        projects: vec![
            Project {
                title: "Parkinson's Disease Detection".to_string(),
                kind: "Research paper".to_string(),
                link: "https://doi.org/10.61440/JCRCS.2025.v3.60".to_string(),
                image: "parkinson.jpg".to_string(),
            },
            Project {
                title: "Chronic Kidney Disease Detection".to_string(),
                kind: "Research paper".to_string(),
                link: "https://doi.org/10.61440/JCRCS.2025.v3.59".to_string(),
                image: "kidney.jpg".to_string(),
            },
            Project {
                title: "Tourism Website".to_string(),
                kind: "Web project".to_string(),
                link: "https://emergingravi.github.io/Tourism_site/".to_string(),
                image: "tourism.jpg".to_string(),
            },
            Project {
                title: "Savour Bite".to_string(),
                kind: "College project".to_string(),
                link: "https://github.com/emergingravi/Savor_bite_a_resturant_website"
                    .to_string(),
                image: "resturant.jpg".to_string(),
            },
            Project {
                title: "Prodigy Infotech Projects".to_string(),
                kind: "Web practice".to_string(),
                link: "https://github.com/emergingravi/PRODIGY_WD_01".to_string(),
                image: "prodigy.jpg".to_string(),
            },
            Project {
                title: "Fire Alert Response System".to_string(),
                kind: "Hardware project".to_string(),
                link: "https://github.com/emergingravi/Fire_alert_response_system".to_string(),
                image: "fire.jpg".to_string(),
            },
            Project {
                title: "Judicial App Development".to_string(),
                kind: "Software project".to_string(),
                link: "https://judicialportal.netlify.app/".to_string(),
                image: "judicial.jpg".to_string(),
            },
            Project {
                title: "Clothing App Development".to_string(),
                kind: "Client project".to_string(),
                link: "https://evarabridalstudio.vercel.app/".to_string(),
                image: "clothing.jpg".to_string(),
            },
        ],
        focus_areas: vec![
            FocusArea {
                title: "UI/UX Design".to_string(),
                description: "Human-first flows, clean visual systems, and prototypes that \
                              are ready to hand off to engineering."
                    .to_string(),
            },
            FocusArea {
                title: "Web Development".to_string(),
                description: "Responsive, fast web apps with modern stacks and careful \
                              attention to micro-interactions."
                    .to_string(),
            },
            FocusArea {
                title: "AI + ML".to_string(),
                description: "Applied machine learning research for health-tech problems \
                              with clear outcomes."
                    .to_string(),
            },
        ],
        education: vec![
            EducationEntry {
                degree: "Bachelor in CSIT".to_string(),
                institution: "Samriddhi College | Tribhuwan University".to_string(),
            },
            EducationEntry {
                degree: "2078 +2 in Science".to_string(),
                institution: "Capital College and Research Center (CCRC) | NEB".to_string(),
            },
            EducationEntry {
                degree: "2076 SEE".to_string(),
                institution: "Monastic HSEB School, Janakpurdham | NE".to_string(),
            },
        ],
        highlights: vec![
            Highlight {
                figure: "8+".to_string(),
                label: "Projects shipped".to_string(),
            },
            Highlight {
                figure: "2".to_string(),
                label: "Research papers".to_string(),
            },
            Highlight {
                figure: "3".to_string(),
                label: "Focus areas".to_string(),
            },
            Highlight {
                figure: "5+".to_string(),
                label: "Web experiments".to_string(),
            },
        ],
        socials: vec![
            SocialLink {
                label: "Facebook".to_string(),
                url: "https://www.facebook.com/profile.php?id=100059997380813".to_string(),
            },
            SocialLink {
                label: "Instagram".to_string(),
                url: "https://www.instagram.com/ravisah028/".to_string(),
            },
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/emergingravi".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/ravi-shankar-sah-14b447265".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_passes_validation() {
        default_catalog().validate().expect("built-in content");
    }

    #[test]
    fn default_catalog_survives_a_toml_round_trip() {
        let serialized = toml::to_string(&default_catalog()).expect("serialize");
        let parsed = Catalog::from_toml_str(&serialized, "round-trip").expect("parse");
        assert_eq!(parsed, default_catalog());
    }

    #[test]
    fn rejects_relative_project_links() {
        let mut catalog = default_catalog();
        catalog.projects[0].link = "/projects/parkinson".to_string();
        let err = catalog.validate().expect_err("relative link");
        assert!(matches!(err, CatalogError::InvalidLink { .. }));
    }

    #[test]
    fn rejects_untitled_projects() {
        let mut catalog = default_catalog();
        catalog.projects[1].title = "   ".to_string();
        let err = catalog.validate().expect_err("blank title");
        assert!(matches!(
            err,
            CatalogError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn slugs_are_filesystem_and_id_safe() {
        let slug = default_catalog().projects[0].slug();
        assert_eq!(slug, "parkinson-s-disease-detection");
        assert!(slug.chars().all(|c| c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c == '-'));
    }
}
