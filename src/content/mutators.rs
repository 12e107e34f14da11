//! Pure edits over a content document.
//!
//! Every edit the admin can make is a [`Mutation`]. [`reduce`] applies one to
//! a document and returns the new value; it never fails. Anything
//! time-dependent (fresh ids, the display date) comes in through a [`Stamp`]
//! so reduction stays deterministic.

use std::collections::HashSet;

use crate::models::{
    ContentDocument, GalleryItem, Leadership, LogoBlock, LogoPhilosophy, LogoSlot, Member,
    NewsDraft, NewsItem, Section,
};

use super::{split_lines, Stamp};

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetHeroImage(String),
    /// `mission_text` is free-form multi-line text, one mission per line.
    SetVisionMission {
        vision: Option<String>,
        mission_text: Option<String>,
    },
    ReplaceGallery(Vec<GalleryItem>),
    AddGalleryItem {
        image_ref: String,
        caption: String,
    },
    UpdateGalleryItem {
        id: i64,
        image_ref: Option<String>,
        caption: Option<String>,
    },
    RemoveGalleryItem(i64),
    ReplaceNews(Vec<NewsItem>),
    AddNews(NewsDraft),
    UpdateNews {
        id: i64,
        draft: NewsDraft,
    },
    RemoveNews(i64),
    ReplaceLeadership(Leadership),
    /// Replace the node with the same id wherever it sits in the tree.
    UpdateLeader(Member),
    ReplaceLogoPhilosophy(LogoPhilosophy),
    /// `details_text` is free-form multi-line text, one detail per line.
    ReplaceLogoBlock {
        slot: LogoSlot,
        title: Option<String>,
        image_ref: Option<String>,
        details_text: Option<String>,
    },
}

impl Mutation {
    /// The top-level section this mutation writes to.
    pub fn section(&self) -> Section {
        match self {
            Mutation::SetHeroImage(_) => Section::Hero,
            Mutation::SetVisionMission { .. } => Section::VisionMission,
            Mutation::ReplaceGallery(_)
            | Mutation::AddGalleryItem { .. }
            | Mutation::UpdateGalleryItem { .. }
            | Mutation::RemoveGalleryItem(_) => Section::Gallery,
            Mutation::ReplaceNews(_)
            | Mutation::AddNews(_)
            | Mutation::UpdateNews { .. }
            | Mutation::RemoveNews(_) => Section::News,
            Mutation::ReplaceLeadership(_) | Mutation::UpdateLeader(_) => Section::Leadership,
            Mutation::ReplaceLogoPhilosophy(_) | Mutation::ReplaceLogoBlock { .. } => {
                Section::LogoPhilosophy
            }
        }
    }
}

/// Apply `mutation` to `doc`.
///
/// The flag is `false` when an update or removal named an id that is not in
/// the document; the returned document is then unchanged.
pub fn reduce(
    mut doc: ContentDocument,
    mutation: Mutation,
    stamp: &Stamp,
) -> (ContentDocument, bool) {
    let matched = match mutation {
        Mutation::SetHeroImage(image_ref) => {
            doc.hero.background_image = image_ref;
            true
        }
        Mutation::SetVisionMission {
            vision,
            mission_text,
        } => {
            if let Some(vision) = vision {
                doc.vision_mission.vision = vision;
            }
            if let Some(text) = mission_text {
                doc.vision_mission.mission = split_lines(&text);
            }
            true
        }
        Mutation::ReplaceGallery(items) => {
            doc.gallery = items;
            true
        }
        Mutation::AddGalleryItem { image_ref, caption } => {
            add_gallery_item(&mut doc.gallery, image_ref, caption, stamp);
            true
        }
        Mutation::UpdateGalleryItem {
            id,
            image_ref,
            caption,
        } => update_gallery_item(&mut doc.gallery, id, image_ref, caption),
        Mutation::RemoveGalleryItem(id) => remove_by_id(&mut doc.gallery, id, |g| g.id),
        Mutation::ReplaceNews(items) => {
            doc.news = items;
            true
        }
        Mutation::AddNews(draft) => {
            add_news(&mut doc.news, draft, stamp);
            true
        }
        Mutation::UpdateNews { id, draft } => update_news(&mut doc.news, id, draft, stamp),
        Mutation::RemoveNews(id) => remove_by_id(&mut doc.news, id, |n| n.id),
        Mutation::ReplaceLeadership(leadership) => {
            doc.leadership = leadership;
            true
        }
        Mutation::UpdateLeader(member) => update_leader(&mut doc.leadership, member),
        Mutation::ReplaceLogoPhilosophy(logo) => {
            doc.logo_philosophy = logo;
            true
        }
        Mutation::ReplaceLogoBlock {
            slot,
            title,
            image_ref,
            details_text,
        } => {
            replace_logo_block(
                doc.logo_philosophy.block_mut(slot),
                title,
                image_ref,
                details_text,
            );
            true
        }
    };

    (doc, matched)
}

/// A fresh id for a collection: the stamp id, bumped past every existing id.
///
/// When an existing id is already `i64::MAX` nothing can be bumped past it;
/// the nearest unused id to the stamp is taken instead.
pub fn fresh_id(stamp: &Stamp, existing: impl IntoIterator<Item = i64>) -> i64 {
    let existing: Vec<i64> = existing.into_iter().collect();
    match existing.iter().max() {
        None => stamp.id,
        Some(&max) => match max.checked_add(1) {
            Some(next) => stamp.id.max(next),
            None => unused_id(stamp.id, &existing),
        },
    }
}

fn unused_id(from: i64, taken: &[i64]) -> i64 {
    let taken: HashSet<i64> = taken.iter().copied().collect();
    (from..=i64::MAX)
        .chain((i64::MIN..from).rev())
        .find(|id| !taken.contains(id))
        .unwrap_or(from)
}

fn add_gallery_item(
    gallery: &mut Vec<GalleryItem>,
    image_ref: String,
    caption: String,
    stamp: &Stamp,
) {
    let id = fresh_id(stamp, gallery.iter().map(|g| g.id));
    gallery.insert(
        0,
        GalleryItem {
            id,
            image_ref,
            caption,
        },
    );
}

fn update_gallery_item(
    gallery: &mut [GalleryItem],
    id: i64,
    image_ref: Option<String>,
    caption: Option<String>,
) -> bool {
    let Some(item) = gallery.iter_mut().find(|g| g.id == id) else {
        return false;
    };
    if let Some(image_ref) = image_ref {
        item.image_ref = image_ref;
    }
    if let Some(caption) = caption {
        item.caption = caption;
    }
    true
}

fn add_news(news: &mut Vec<NewsItem>, draft: NewsDraft, stamp: &Stamp) {
    let id = fresh_id(stamp, news.iter().map(|n| n.id));
    news.insert(
        0,
        NewsItem {
            id,
            title: draft.title,
            body: draft.body,
            category: draft.category,
            display_date: stamp.display_date.clone(),
        },
    );
}

// Editing re-dates the item to the edit time.
fn update_news(news: &mut [NewsItem], id: i64, draft: NewsDraft, stamp: &Stamp) -> bool {
    let Some(item) = news.iter_mut().find(|n| n.id == id) else {
        return false;
    };
    item.title = draft.title;
    item.body = draft.body;
    item.category = draft.category;
    item.display_date = stamp.display_date.clone();
    true
}

fn remove_by_id<T>(items: &mut Vec<T>, id: i64, key: impl Fn(&T) -> i64) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

fn update_leader(leadership: &mut Leadership, replacement: Member) -> bool {
    let tiers = [
        &mut leadership.top,
        &mut leadership.mid,
        &mut leadership.commissions,
    ];
    let mut replacement = Some(replacement);
    for tier in tiers {
        if replace_in(tier, &mut replacement) {
            return true;
        }
    }
    false
}

/// Walk `nodes` and their nested members; replace the first node whose id
/// matches. `replacement` is taken only on a match.
fn replace_in(nodes: &mut [Member], replacement: &mut Option<Member>) -> bool {
    let Some(target_id) = replacement.as_ref().map(|m| m.id.clone()) else {
        return false;
    };
    for node in nodes.iter_mut() {
        if node.id == target_id {
            if let Some(mut new_node) = replacement.take() {
                if new_node.members.is_none() {
                    new_node.members = node.members.take();
                }
                *node = new_node;
            }
            return true;
        }
        if let Some(children) = node.members.as_mut() {
            if replace_in(children, replacement) {
                return true;
            }
        }
    }
    false
}

fn replace_logo_block(
    block: &mut LogoBlock,
    title: Option<String>,
    image_ref: Option<String>,
    details_text: Option<String>,
) {
    if let Some(title) = title {
        block.title = title;
    }
    if let Some(image_ref) = image_ref {
        block.image_ref = image_ref;
    }
    if let Some(text) = details_text {
        block.details = split_lines(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_document;
    use crate::models::NewsCategory;
    use std::collections::HashSet;

    fn stamp(id: i64) -> Stamp {
        Stamp {
            id,
            display_date: "18 Okt 2026".to_string(),
        }
    }

    fn draft(title: &str) -> NewsDraft {
        NewsDraft {
            title: title.to_string(),
            body: "Isi berita".to_string(),
            category: NewsCategory::Announcement,
        }
    }

    #[test]
    fn test_add_gallery_item_scenario() {
        let doc = default_document();
        let before = doc.gallery.len();

        let (doc, matched) = reduce(
            doc,
            Mutation::AddGalleryItem {
                image_ref: "data:image/png;base64,AAAA".to_string(),
                caption: "Test".to_string(),
            },
            &stamp(1_760_000_000_000),
        );

        assert!(matched);
        assert_eq!(doc.gallery.len(), before + 1);
        let newest = doc.gallery.iter().max_by_key(|g| g.id).unwrap();
        assert_eq!(newest.caption, "Test");
        assert_eq!(doc.gallery[0].id, newest.id);
    }

    #[test]
    fn test_fresh_id_bumps_past_existing() {
        assert_eq!(fresh_id(&stamp(10), [3, 7]), 10);
        assert_eq!(fresh_id(&stamp(10), [3, 12]), 13);
        assert_eq!(fresh_id(&stamp(10), std::iter::empty()), 10);
    }

    #[test]
    fn test_fresh_id_at_top_of_range() {
        assert_eq!(fresh_id(&stamp(10), [i64::MAX]), 10);
        assert_eq!(fresh_id(&stamp(10), [10, i64::MAX]), 11);
        assert_eq!(
            fresh_id(&stamp(i64::MAX), [i64::MAX - 1, i64::MAX]),
            i64::MAX - 2
        );
    }

    #[test]
    fn test_add_gallery_item_next_to_max_id() {
        let mut doc = default_document();
        doc.gallery[0].id = i64::MAX;
        let before = doc.gallery.len();

        let (doc, matched) = reduce(
            doc,
            Mutation::AddGalleryItem {
                image_ref: "img".to_string(),
                caption: "Baru".to_string(),
            },
            &stamp(10),
        );

        assert!(matched);
        assert_eq!(doc.gallery.len(), before + 1);
        assert_eq!(doc.gallery[0].caption, "Baru");
        let ids: HashSet<i64> = doc.gallery.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), doc.gallery.len());
    }

    #[test]
    fn test_repeated_adds_keep_ids_unique() {
        let mut doc = default_document();
        // A stalled clock: every stamp carries the same id.
        for i in 0..20 {
            let (next, _) = reduce(
                doc,
                Mutation::AddNews(draft(&format!("Item {i}"))),
                &stamp(1_000),
            );
            let (next, _) = reduce(
                next,
                Mutation::AddGalleryItem {
                    image_ref: "img".to_string(),
                    caption: format!("Foto {i}"),
                },
                &stamp(1_000),
            );
            doc = next;
        }

        let news: HashSet<i64> = doc.news.iter().map(|n| n.id).collect();
        assert_eq!(news.len(), doc.news.len());
        let gallery: HashSet<i64> = doc.gallery.iter().map(|g| g.id).collect();
        assert_eq!(gallery.len(), doc.gallery.len());
    }

    #[test]
    fn test_update_gallery_item_by_id() {
        let (doc, matched) = reduce(
            default_document(),
            Mutation::UpdateGalleryItem {
                id: 3,
                image_ref: None,
                caption: Some("Kampus baru".to_string()),
            },
            &stamp(1),
        );

        assert!(matched);
        let item = doc.gallery.iter().find(|g| g.id == 3).unwrap();
        assert_eq!(item.caption, "Kampus baru");
        assert_eq!(item.image_ref, "https://picsum.photos/seed/campus3/600/400");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let original = default_document();
        let (doc, matched) = reduce(original.clone(), Mutation::RemoveGalleryItem(999), &stamp(1));

        assert!(!matched);
        assert_eq!(doc, original);
    }

    #[test]
    fn test_remove_news_filters_entry() {
        let (doc, matched) = reduce(
            default_document(),
            Mutation::RemoveNews(1660825200000),
            &stamp(1),
        );

        assert!(matched);
        assert_eq!(doc.news.len(), 3);
        assert!(doc.news.iter().all(|n| n.id != 1660825200000));
    }

    #[test]
    fn test_add_news_is_dated_and_first() {
        let (doc, _) = reduce(
            default_document(),
            Mutation::AddNews(draft("Rapat Pleno")),
            &stamp(1_760_000_000_000),
        );

        assert_eq!(doc.news[0].title, "Rapat Pleno");
        assert_eq!(doc.news[0].display_date, "18 Okt 2026");
        assert_eq!(doc.news[0].id, 1_760_000_000_000);
    }

    #[test]
    fn test_update_news_redates_item() {
        let id = 1659356400000;
        let (doc, matched) = reduce(
            default_document(),
            Mutation::UpdateNews {
                id,
                draft: draft("Studi Banding (revisi)"),
            },
            &stamp(1),
        );

        assert!(matched);
        let item = doc.news.iter().find(|n| n.id == id).unwrap();
        assert_eq!(item.title, "Studi Banding (revisi)");
        assert_eq!(item.category, NewsCategory::Announcement);
        assert_eq!(item.display_date, "18 Okt 2026");
    }

    #[test]
    fn test_vision_mission_split() {
        let (doc, _) = reduce(
            default_document(),
            Mutation::SetVisionMission {
                vision: None,
                mission_text: Some("a\n\nb\n  \nc".to_string()),
            },
            &stamp(1),
        );

        assert_eq!(doc.vision_mission.mission, vec!["a", "b", "c"]);
        assert_eq!(doc.vision_mission.vision, default_document().vision_mission.vision);
    }

    #[test]
    fn test_tree_update_locality() {
        let original = default_document();
        let mut replacement = original.leadership.find("kom1-2").unwrap().clone();
        replacement.name = "Nama Baru".to_string();
        replacement.skills = Some(vec!["Negosiasi".to_string()]);

        let (doc, matched) = reduce(
            original.clone(),
            Mutation::UpdateLeader(replacement.clone()),
            &stamp(1),
        );

        assert!(matched);
        assert_eq!(doc.leadership.find("kom1-2"), Some(&replacement));
        for (before, after) in original.leadership.iter().zip(doc.leadership.iter()) {
            if before.id != "kom1-2" && before.id != "kom1" {
                assert_eq!(before, after);
            }
        }
        assert_eq!(doc.leadership.top, original.leadership.top);
        assert_eq!(doc.leadership.mid, original.leadership.mid);
        assert_eq!(doc.leadership.commissions[1..], original.leadership.commissions[1..]);
        let kom1 = &doc.leadership.commissions[0];
        assert_eq!(kom1.name, original.leadership.commissions[0].name);
        assert_eq!(kom1.members.as_ref().unwrap()[0], original.leadership.find("kom1-1").unwrap().clone());
    }

    #[test]
    fn test_update_coordinator_keeps_members() {
        let original = default_document();
        let mut coordinator = original.leadership.find("kom2").unwrap().clone();
        coordinator.name = "Koordinator Baru".to_string();
        coordinator.members = None;

        let (doc, matched) = reduce(original.clone(), Mutation::UpdateLeader(coordinator), &stamp(1));

        assert!(matched);
        let kom2 = doc.leadership.find("kom2").unwrap();
        assert_eq!(kom2.name, "Koordinator Baru");
        assert_eq!(kom2.members, original.leadership.find("kom2").unwrap().members);
    }

    #[test]
    fn test_update_unknown_leader_is_noop() {
        let original = default_document();
        let mut stranger = original.leadership.find("ketua").unwrap().clone();
        stranger.id = "nobody".to_string();

        let (doc, matched) = reduce(original.clone(), Mutation::UpdateLeader(stranger), &stamp(1));

        assert!(!matched);
        assert_eq!(doc, original);
    }

    #[test]
    fn test_logo_block_replaced_independently() {
        let original = default_document();
        let (doc, _) = reduce(
            original.clone(),
            Mutation::ReplaceLogoBlock {
                slot: LogoSlot::Secondary,
                title: Some("Filosofi Kabinet Baru".to_string()),
                image_ref: None,
                details_text: Some("Satu\n\nDua".to_string()),
            },
            &stamp(1),
        );

        assert_eq!(doc.logo_philosophy.primary, original.logo_philosophy.primary);
        assert_eq!(doc.logo_philosophy.secondary.title, "Filosofi Kabinet Baru");
        assert_eq!(doc.logo_philosophy.secondary.details, vec!["Satu", "Dua"]);
        assert_eq!(
            doc.logo_philosophy.secondary.image_ref,
            original.logo_philosophy.secondary.image_ref
        );
    }

    #[test]
    fn test_mutation_sections() {
        assert_eq!(Mutation::RemoveNews(1).section(), Section::News);
        assert_eq!(Mutation::SetHeroImage(String::new()).section(), Section::Hero);
        assert_eq!(
            Mutation::UpdateLeader(default_document().leadership.top[0].clone()).section(),
            Section::Leadership
        );
    }
}
