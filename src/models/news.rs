//! News, announcement and agenda items.

use serde::{Deserialize, Serialize};

/// Kind of a news entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NewsCategory {
    #[serde(rename = "Berita")]
    News,
    #[serde(rename = "Pengumuman")]
    Announcement,
    #[serde(rename = "Agenda")]
    Agenda,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::News => "Berita",
            NewsCategory::Announcement => "Pengumuman",
            NewsCategory::Agenda => "Agenda",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Berita" => Some(NewsCategory::News),
            "Pengumuman" => Some(NewsCategory::Announcement),
            "Agenda" => Some(NewsCategory::Agenda),
            _ => None,
        }
    }
}

/// A dated news entry. `id` is the creation timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "type")]
    pub category: NewsCategory,
    /// Pre-formatted date, e.g. `25 Agu 2024`.
    #[serde(rename = "date")]
    pub display_date: String,
}

/// Editable fields of a news entry; id and date are assigned on apply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "type")]
    pub category: NewsCategory,
}
