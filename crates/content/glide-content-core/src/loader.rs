//! JSON loader for [`SiteContent`].

use thiserror::Error;

use crate::data::SiteContent;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Parse site content JSON and run basic validation.
pub fn parse_site_content_json(s: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_str(s)?;
    content.validate_basic().map_err(ContentError::Invalid)?;
    Ok(content)
}
