//! Photo gallery entries.

use serde::{Deserialize, Serialize};

/// One photo in the gallery. `id` is the creation timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    #[serde(rename = "src")]
    pub image_ref: String,
    #[serde(rename = "description")]
    pub caption: String,
}
