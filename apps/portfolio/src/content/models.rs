#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// The whole page, built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub contact: ContactInfo,
    /// Main-column sections in document order.
    pub sections: Vec<Section>,
    pub education: Vec<Education>,
    pub languages: Vec<Language>,
    pub interests: Vec<Interest>,
    pub cv: Asset,
    /// Suggested filename for the CV download.
    pub cv_download_name: String,
}

impl Portfolio {
    /// Section ids in document order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Every asset the page references, CV first.
    pub fn assets(&self) -> Vec<&Asset> {
        let mut assets = vec![&self.cv, &self.profile.photo];
        for section in &self.sections {
            if let SectionContent::Projects { projects } = &section.content {
                assets.extend(projects.iter().map(|p| &p.image));
            }
        }
        assets
    }

    pub fn find_asset(&self, name: &str) -> Option<&Asset> {
        self.assets().into_iter().find(|a| a.name == name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Stable anchor; also matched against scroll position.
    pub id: String,
    pub title: String,
    pub content: SectionContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    Header { title: String },
    Profile { paragraphs: Vec<String> },
    Experience { roles: Vec<Experience> },
    Achievements { items: Vec<Achievement> },
    Blogs { posts: Vec<BlogPost> },
    Projects { projects: Vec<Project> },
    TechStack {
        icons: Vec<TechIcon>,
        groups: Vec<SkillGroup>,
    },
}

impl SectionContent {
    pub fn kind_str(&self) -> &'static str {
        match self {
            SectionContent::Header { .. } => "header",
            SectionContent::Profile { .. } => "profile",
            SectionContent::Experience { .. } => "experience",
            SectionContent::Achievements { .. } => "achievements",
            SectionContent::Blogs { .. } => "blogs",
            SectionContent::Projects { .. } => "projects",
            SectionContent::TechStack { .. } => "tech_stack",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub photo: Asset,
    pub fun_fact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    pub phone: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub organization: String,
    pub role: String,
    pub period: String,
    pub duration: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub summary: String,
    /// Inline link shown inside the summary, if any.
    pub link: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub image: Asset,
    pub description: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    // Placeholders; never populated from a real source-hosting API.
    pub stars: u32,
    pub forks: u32,
    pub source_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechIcon {
    pub name: String,
    pub icon_url: String,
    /// Brand colour as `#RRGGBB`.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub qualification: String,
    pub institution: String,
    pub location: Option<String>,
    pub period: String,
}

pub const MAX_LANGUAGE_LEVEL: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
    /// 0..=MAX_LANGUAGE_LEVEL, rendered as filled bars.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Document,
}

/// A bundled file referenced by name; resolved against the assets directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub kind: AssetKind,
}

impl Asset {
    pub fn image(name: &str) -> Self {
        Asset {
            name: name.to_string(),
            kind: AssetKind::Image,
        }
    }

    pub fn document(name: &str) -> Self {
        Asset {
            name: name.to_string(),
            kind: AssetKind::Document,
        }
    }

    /// Public URL path the page uses to reference this asset.
    pub fn href(&self) -> String {
        format!("/assets/{}", self.name)
    }

    pub fn content_type(&self) -> &'static str {
        let ext = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => "application/pdf",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "svg" => "image/svg+xml",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}
