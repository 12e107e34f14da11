//! Logo philosophy blocks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoBlock {
    pub title: String,
    #[serde(rename = "imageUrl")]
    pub image_ref: String,
    pub details: Vec<String>,
}

/// The council logo (`primary`) and the cabinet logo (`secondary`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoPhilosophy {
    #[serde(rename = "blm")]
    pub primary: LogoBlock,
    #[serde(rename = "kabinet")]
    pub secondary: LogoBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSlot {
    Primary,
    Secondary,
}

impl LogoPhilosophy {
    pub fn block_mut(&mut self, slot: LogoSlot) -> &mut LogoBlock {
        match slot {
            LogoSlot::Primary => &mut self.primary,
            LogoSlot::Secondary => &mut self.secondary,
        }
    }
}
