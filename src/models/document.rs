//! The content document exchanged with the backend.

use serde::{Deserialize, Serialize};

use super::{GalleryItem, Leadership, LogoPhilosophy, NewsItem};

/// Hero banner at the top of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Image URL or embedded data URL.
    pub background_image: String,
}

/// Vision statement and the ordered mission list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionMission {
    #[serde(rename = "visi")]
    pub vision: String,
    #[serde(rename = "misi")]
    pub mission: Vec<String>,
}

/// The single aggregate persisted by the backend and edited by the admin.
///
/// A valid document is always fully populated; the bundled default in
/// [`crate::content::default_document`] guarantees that before the first fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub hero: Hero,
    #[serde(rename = "visiMisi")]
    pub vision_mission: VisionMission,
    pub gallery: Vec<GalleryItem>,
    pub news: Vec<NewsItem>,
    pub leadership: Leadership,
    pub logo_philosophy: LogoPhilosophy,
}

/// Top-level sections of a [`ContentDocument`], each writable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    VisionMission,
    Gallery,
    News,
    Leadership,
    LogoPhilosophy,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::VisionMission,
        Section::Gallery,
        Section::News,
        Section::Leadership,
        Section::LogoPhilosophy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::VisionMission => "visiMisi",
            Section::Gallery => "gallery",
            Section::News => "news",
            Section::Leadership => "leadership",
            Section::LogoPhilosophy => "logoPhilosophy",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
