//! Write requests sent to the content endpoint and their responses.

use serde::{Deserialize, Serialize};

use super::{
    ContentDocument, GalleryItem, Leadership, LogoPhilosophy, NewsItem, Section, VisionMission,
};

/// Payload of [`WriteAction::UpdateHeroBackground`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBackground {
    pub background_image: String,
}

/// A whole named collection, replaced at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "items", rename_all = "lowercase")]
pub enum Collection {
    Gallery(Vec<GalleryItem>),
    News(Vec<NewsItem>),
}

/// An action tag plus its payload: `{"action": "...", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum WriteAction {
    UpdateAllData(ContentDocument),
    UpdateHeroBackground(HeroBackground),
    UpdateVisiMisi(VisionMission),
    UpdateCollection(Collection),
    UpdateLeadership(Leadership),
    UpdateLogoPhilosophy(LogoPhilosophy),
}

impl WriteAction {
    /// The single-section action carrying `section` of `doc`.
    pub fn for_section(doc: &ContentDocument, section: Section) -> Self {
        match section {
            Section::Hero => WriteAction::UpdateHeroBackground(HeroBackground {
                background_image: doc.hero.background_image.clone(),
            }),
            Section::VisionMission => WriteAction::UpdateVisiMisi(doc.vision_mission.clone()),
            Section::Gallery => {
                WriteAction::UpdateCollection(Collection::Gallery(doc.gallery.clone()))
            }
            Section::News => WriteAction::UpdateCollection(Collection::News(doc.news.clone())),
            Section::Leadership => WriteAction::UpdateLeadership(doc.leadership.clone()),
            Section::LogoPhilosophy => {
                WriteAction::UpdateLogoPhilosophy(doc.logo_philosophy.clone())
            }
        }
    }

    /// The wire tag, used in logs.
    pub fn tag(&self) -> &'static str {
        match self {
            WriteAction::UpdateAllData(_) => "UPDATE_ALL_DATA",
            WriteAction::UpdateHeroBackground(_) => "UPDATE_HERO_BACKGROUND",
            WriteAction::UpdateVisiMisi(_) => "UPDATE_VISI_MISI",
            WriteAction::UpdateCollection(_) => "UPDATE_COLLECTION",
            WriteAction::UpdateLeadership(_) => "UPDATE_LEADERSHIP",
            WriteAction::UpdateLogoPhilosophy(_) => "UPDATE_LOGO_PHILOSOPHY",
        }
    }
}

impl ContentDocument {
    /// Replace exactly the section addressed by `action`.
    pub fn apply_write(&mut self, action: WriteAction) {
        match action {
            WriteAction::UpdateAllData(doc) => *self = doc,
            WriteAction::UpdateHeroBackground(hero) => {
                self.hero.background_image = hero.background_image
            }
            WriteAction::UpdateVisiMisi(vision_mission) => self.vision_mission = vision_mission,
            WriteAction::UpdateCollection(Collection::Gallery(items)) => self.gallery = items,
            WriteAction::UpdateCollection(Collection::News(items)) => self.news = items,
            WriteAction::UpdateLeadership(leadership) => self.leadership = leadership,
            WriteAction::UpdateLogoPhilosophy(logo) => self.logo_philosophy = logo,
        }
    }
}

/// Response body of a write: `{"success": true}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<i64>,
}

impl WriteOutcome {
    pub fn ok(revision_id: i64) -> Self {
        Self {
            success: true,
            error: None,
            revision_id: Some(revision_id),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            revision_id: None,
        }
    }
}
