//! Glide Content Core
//!
//! The site's copy as explicit immutable configuration: sections, galleries,
//! website showcases, projects, skills, and experience, parsed from JSON and
//! handed to the view at construction time instead of living as module-level
//! literal arrays inside each page.

pub mod data;
pub mod loader;

pub use data::{
    GalleryItem, PageContent, PageKind, Panel, Project, Role, Section, Showcase, SiteContent,
    Skill,
};
pub use loader::{parse_site_content_json, ContentError};
