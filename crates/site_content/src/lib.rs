//! Typed content for the portfolio page: who the site is about, what they
//! built, and where to reach them. The page chrome renders whatever this
//! crate hands it; nothing here knows about the UI.

pub mod catalog;
pub mod records;

pub use catalog::{default_catalog, CatalogError};
pub use records::{
    Catalog, EducationEntry, FocusArea, Highlight, Profile, Project, SocialLink,
};
