//! Runtime state wiring and the pure document transforms.
//!
//! The document transforms (`inventory`, `session`, `claim`, `guard`) are
//! synchronous pure functions over [`AppDocument`]; [`AppState`] brackets each
//! one with a full load and a full save of the persisted document. That
//! load-transform-save discipline, serialized behind a single gate, is the
//! whole concurrency story: check-then-act sequences like the claim cap are
//! race-free within this process. A second process pointed at the same file
//! is last-write-wins and not coordinated.

pub mod claim;
pub mod guard;
pub mod inventory;
pub mod session;

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::{
    dao::{
        models::AppDocument,
        store::{FileStore, StoreError, StoreResult},
    },
    dto::session::LiveSnapshot,
};

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state: the document store plus live-view plumbing.
pub struct AppState {
    store: FileStore,
    write_gate: Mutex<()>,
    live: watch::Sender<LiveSnapshot>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The live channel is seeded from the document as persisted, so an SSE
    /// subscriber connecting before any mutation still gets a real snapshot.
    pub fn new(store: FileStore) -> SharedState {
        let snapshot = LiveSnapshot::of(&store.load());
        let (live, _rx) = watch::channel(snapshot);
        Arc::new(Self {
            store,
            write_gate: Mutex::new(()),
            live,
        })
    }

    /// Read the current document. Never fails; see [`FileStore::load`].
    pub fn document(&self) -> AppDocument {
        self.store.load()
    }

    /// Subscribe to live session snapshots, updated after every mutation.
    pub fn live_watcher(&self) -> watch::Receiver<LiveSnapshot> {
        self.live.subscribe()
    }

    /// Run one document mutation: load, apply the pure transform, save, and
    /// broadcast the fresh live snapshot.
    ///
    /// Mutations are serialized behind the write gate so no two transforms
    /// interleave between load and save.
    pub async fn mutate<T>(
        &self,
        transform: impl FnOnce(&mut AppDocument) -> T,
    ) -> StoreResult<T> {
        let _gate = self.write_gate.lock().await;
        let mut doc = self.store.load();
        let value = transform(&mut doc);
        self.store.save(&doc)?;
        self.live.send_replace(LiveSnapshot::of(&doc));
        Ok(value)
    }

    /// Check that the document can actually be persisted.
    ///
    /// Saves the document back unchanged without broadcasting, so health
    /// checks never wake live SSE subscribers.
    pub async fn probe(&self) -> Result<(), StoreError> {
        let _gate = self.write_gate.lock().await;
        let doc = self.store.load();
        self.store.save(&doc)
    }
}
