//! Leadership roster: officers, mid-level officers and commissions.

use serde::{Deserialize, Serialize};

/// A person in the roster.
///
/// Top and mid officers carry `responsibilities`; commission coordinators and
/// their members carry `skills`. Only coordinators own `members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub role: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_ref: String,
    #[serde(rename = "tupoksi", default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
}

/// The three-tier roster tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leadership {
    pub top: Vec<Member>,
    pub mid: Vec<Member>,
    pub commissions: Vec<Member>,
}

impl Leadership {
    /// Find a node anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<&Member> {
        self.top
            .iter()
            .chain(self.mid.iter())
            .find(|m| m.id == id)
            .or_else(|| {
                self.commissions.iter().find_map(|coordinator| {
                    if coordinator.id == id {
                        return Some(coordinator);
                    }
                    coordinator
                        .members
                        .as_deref()
                        .and_then(|members| members.iter().find(|m| m.id == id))
                })
            })
    }

    /// Iterate every node: top, mid, then each coordinator followed by its members.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.top.iter().chain(self.mid.iter()).chain(
            self.commissions.iter().flat_map(|coordinator| {
                std::iter::once(coordinator).chain(coordinator.members.iter().flatten())
            }),
        )
    }
}
