//! The content document store.
//!
//! Holds the canonical document (last known-good state) and the working copy
//! edited in admin mode. Mutations touch only the working copy; the canonical
//! document changes only on a successful load or commit. Failures become
//! status, never a corrupted canonical document.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use super::{default_document, reduce, IdClock, Mutation};
use crate::errors::SyncError;
use crate::models::{ContentDocument, Section, WriteAction};
use crate::sync::Gateway;

/// Progress of the last load and save, for the page to render spinners and a
/// retry affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStatus {
    pub loading: bool,
    pub saving: bool,
    /// Message of the last failed load or save, cleared by the next success.
    pub error: Option<String>,
    /// Whether canonical has ever come from the backend rather than the bundled default.
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed(String),
    /// A newer load was issued while this one was in flight; its response was dropped.
    Superseded,
}

#[derive(Debug)]
struct State {
    canonical: ContentDocument,
    working: ContentDocument,
    status: StoreStatus,
}

pub struct ContentStore<G> {
    gateway: G,
    state: RwLock<State>,
    clock: IdClock,
    load_seq: AtomicU64,
    /// Bumped on every successful save; a load that began before it is stale.
    save_seq: AtomicU64,
}

impl<G: Gateway> ContentStore<G> {
    /// A store showing the bundled default until the first load.
    pub fn new(gateway: G) -> Self {
        let canonical = default_document();
        Self {
            gateway,
            state: RwLock::new(State {
                working: canonical.clone(),
                canonical,
                status: StoreStatus::default(),
            }),
            clock: IdClock::new(),
            load_seq: AtomicU64::new(0),
            save_seq: AtomicU64::new(0),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch the document and adopt it as canonical.
    ///
    /// On failure canonical and working copy are left as they were and the
    /// error is recorded in [`StoreStatus`]. Only the most recently issued
    /// load may apply its response, and only if no save succeeded while it
    /// was in flight.
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let saves = self.save_seq.load(Ordering::SeqCst);
        {
            let mut state = self.state.write().await;
            state.status.loading = true;
            state.status.error = None;
        }

        let result = self.gateway.fetch_document().await;

        let mut state = self.state.write().await;
        if ticket != self.load_seq.load(Ordering::SeqCst) {
            tracing::debug!("Dropping response of superseded load #{}", ticket);
            return LoadOutcome::Superseded;
        }
        state.status.loading = false;
        if saves != self.save_seq.load(Ordering::SeqCst) {
            tracing::debug!("Dropping response of load #{} read before a save", ticket);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(doc) => {
                tracing::info!("Content loaded");
                state.working = doc.clone();
                state.canonical = doc;
                state.status.loaded = true;
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::warn!("Failed to load content: {}", e);
                let message = e.message().to_string();
                state.status.error = Some(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }

    pub async fn canonical(&self) -> ContentDocument {
        self.state.read().await.canonical.clone()
    }

    pub async fn working(&self) -> ContentDocument {
        self.state.read().await.working.clone()
    }

    pub async fn status(&self) -> StoreStatus {
        self.state.read().await.status.clone()
    }

    /// Whether the working copy differs from canonical.
    pub async fn is_dirty(&self) -> bool {
        let state = self.state.read().await;
        state.working != state.canonical
    }

    /// Apply one edit to the working copy.
    ///
    /// Returns `false` when an update or removal named an unknown id.
    pub async fn mutate(&self, mutation: Mutation) -> bool {
        let stamp = self.clock.stamp();
        let section = mutation.section();
        let mut state = self.state.write().await;

        let (working, matched) = reduce(state.working.clone(), mutation, &stamp);
        state.working = working;

        if !matched {
            tracing::debug!("Mutation on {} matched no entry", section);
        }
        matched
    }

    /// Push the whole working copy. On success it becomes canonical; on
    /// failure both copies are left as they were.
    pub async fn commit(&self) -> Result<(), SyncError> {
        let snapshot = self.begin_save().await;
        let result = self
            .gateway
            .push(WriteAction::UpdateAllData(snapshot.clone()))
            .await;

        self.finish_save(result, |canonical| *canonical = snapshot)
            .await
    }

    /// Push one section of the working copy. On success only that section of
    /// canonical is replaced.
    pub async fn commit_section(&self, section: Section) -> Result<(), SyncError> {
        let snapshot = self.begin_save().await;
        let action = WriteAction::for_section(&snapshot, section);
        let result = self.gateway.push(action.clone()).await;

        self.finish_save(result, |canonical| canonical.apply_write(action))
            .await
    }

    /// Reset the working copy to canonical, dropping unsaved edits.
    pub async fn discard(&self) {
        let mut state = self.state.write().await;
        state.working = state.canonical.clone();
    }

    async fn begin_save(&self) -> ContentDocument {
        let mut state = self.state.write().await;
        state.status.saving = true;
        state.working.clone()
    }

    async fn finish_save(
        &self,
        result: Result<(), SyncError>,
        promote: impl FnOnce(&mut ContentDocument),
    ) -> Result<(), SyncError> {
        let mut state = self.state.write().await;
        state.status.saving = false;

        match result {
            Ok(()) => {
                self.save_seq.fetch_add(1, Ordering::SeqCst);
                promote(&mut state.canonical);
                state.status.error = None;
                tracing::info!("Content saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to save content: {}", e);
                state.status.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }
}
