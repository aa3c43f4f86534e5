//! Canonical site content model.
//!
//! Field names follow the JSON the site authors edit; showcase entries keep
//! their camelCase keys.

use serde::{Deserialize, Serialize};

/// Everything the site renders, across all pages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteContent {
    pub pages: Vec<PageContent>,
}

/// Which layout a page uses; decides which content lists are required.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Wheel-paged full-screen sections (the home page).
    Paged,
    /// Free-scrolling image grid (graphics, websites).
    Gallery,
    /// Natural document scroll with a scroll spy (the arcade page).
    Scroll,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageContent {
    pub id: String,
    pub name: String,
    pub kind: PageKind,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub showcases: Vec<Showcase>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Role>,
}

/// One full-screen section: oversized title on the left, a labeled list on
/// the right.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub panel: Panel,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Panel {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub title: String,
}

/// A website showcase: screenshot pair, link, and blurb. `secondIsMobile`
/// switches the second screenshot to the phone-frame treatment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showcase {
    pub images: Vec<String>,
    pub link: String,
    pub bio: String,
    #[serde(default)]
    pub second_is_mobile: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub achievement: Option<String>,
    /// Free-form stat lines ("users": "200+", "uptime": "99.9%").
    #[serde(default)]
    pub stats: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Bar fill percentage, 0..=100.
    pub level: u8,
    pub exp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Role {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl SiteContent {
    /// Basic validation: unique non-empty page ids, paged pages carry
    /// sections, skill levels are percentages, showcases carry at least one
    /// image.
    pub fn validate_basic(&self) -> Result<(), String> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            if page.id.is_empty() {
                return Err(format!("page '{}' has an empty id", page.name));
            }
            if seen.contains(&page.id.as_str()) {
                return Err(format!("duplicate page id '{}'", page.id));
            }
            seen.push(&page.id);

            if page.kind == PageKind::Paged && page.sections.is_empty() {
                return Err(format!("paged page '{}' has no sections", page.id));
            }
            for section in &page.sections {
                if section.id.is_empty() {
                    return Err(format!("page '{}' has a section with an empty id", page.id));
                }
            }
            for skill in &page.skills {
                if skill.level > 100 {
                    return Err(format!(
                        "skill '{}' has level {} (max 100)",
                        skill.name, skill.level
                    ));
                }
            }
            for showcase in &page.showcases {
                if showcase.images.is_empty() {
                    return Err(format!(
                        "showcase '{}' on page '{}' has no images",
                        showcase.link, page.id
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn page(&self, id: &str) -> Option<&PageContent> {
        self.pages.iter().find(|p| p.id == id)
    }
}
