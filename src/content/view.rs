//! Display-only orderings and filters. These borrow from the document and
//! never change it.

use std::cmp::Ordering;

use crate::models::{NewsCategory, NewsItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewsSort {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl NewsSort {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(NewsSort::Newest),
            "oldest" => Some(NewsSort::Oldest),
            "a-z" => Some(NewsSort::TitleAsc),
            "z-a" => Some(NewsSort::TitleDesc),
            _ => None,
        }
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// News items in display order, optionally restricted to one category.
pub fn news_view(
    items: &[NewsItem],
    category: Option<NewsCategory>,
    sort: NewsSort,
) -> Vec<&NewsItem> {
    let mut view: Vec<&NewsItem> = items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect();

    match sort {
        NewsSort::Newest => view.sort_by(|a, b| b.id.cmp(&a.id)),
        NewsSort::Oldest => view.sort_by(|a, b| a.id.cmp(&b.id)),
        NewsSort::TitleAsc => view.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        NewsSort::TitleDesc => view.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
    view
}
