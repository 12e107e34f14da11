//! Data models for the BLM content site.
//!
//! Field names follow the site's own vocabulary; serde names match the JSON
//! the deployed backend already stores, so existing documents stay readable.

mod action;
mod aspiration;
mod document;
mod gallery;
mod leadership;
mod logo;
mod news;

pub use action::*;
pub use aspiration::*;
pub use document::*;
pub use gallery::*;
pub use leadership::*;
pub use logo::*;
pub use news::*;
