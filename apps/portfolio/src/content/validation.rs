use std::collections::HashSet;

use thiserror::Error;

use crate::content::models::{Portfolio, SectionContent, MAX_LANGUAGE_LEVEL};

#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("Section id must not be empty (position {0})")]
    EmptySectionId(usize),

    #[error("Duplicate section id '{0}'")]
    DuplicateSectionId(String),

    #[error("Invalid colour '{color}' for tech icon '{name}', expected #RRGGBB")]
    InvalidColor { name: String, color: String },

    #[error("Language '{name}' has level {level}, maximum is {max}")]
    LanguageLevel { name: String, level: u8, max: u8 },

    #[error("'{field}' is not an http(s) URL: {value}")]
    InvalidUrl { field: String, value: String },

    #[error("Contact email '{0}' is not a mail address")]
    InvalidEmail(String),
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn check_url(field: &str, value: &str) -> Result<(), ContentError> {
    if is_http_url(value) {
        Ok(())
    } else {
        Err(ContentError::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Checks the invariants the page relies on. Asset files are not checked.
pub fn validate_portfolio(portfolio: &Portfolio) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for (idx, section) in portfolio.sections.iter().enumerate() {
        if section.id.trim().is_empty() {
            return Err(ContentError::EmptySectionId(idx));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(ContentError::DuplicateSectionId(section.id.clone()));
        }

        match &section.content {
            SectionContent::Projects { projects } => {
                for project in projects {
                    check_url("source_link", &project.source_link)?;
                }
            }
            SectionContent::TechStack { icons, .. } => {
                for icon in icons {
                    check_url("icon_url", &icon.icon_url)?;
                    if !is_hex_color(&icon.color) {
                        return Err(ContentError::InvalidColor {
                            name: icon.name.clone(),
                            color: icon.color.clone(),
                        });
                    }
                }
            }
            SectionContent::Blogs { posts } => {
                for link in posts.iter().filter_map(|p| p.link.as_deref()) {
                    check_url("link", link)?;
                }
            }
            _ => {}
        }
    }

    for language in &portfolio.languages {
        if language.level > MAX_LANGUAGE_LEVEL {
            return Err(ContentError::LanguageLevel {
                name: language.name.clone(),
                level: language.level,
                max: MAX_LANGUAGE_LEVEL,
            });
        }
    }

    let email = &portfolio.contact.email;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ContentError::InvalidEmail(email.clone())),
    }
}
