//! Viewer state machine for the epoch detail modal.
//!
//! The viewer is either closed or open on exactly one epoch, tracked by id.
//! Navigation walks the catalog's declaration order and clamps at both ends
//! (no wraparound). An unknown id is logged and ignored, never an error.

use tracing::warn;

use crate::catalog::Catalog;

/// Direction for epoch-to-epoch navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the first epoch.
    Previous,
    /// Toward the last epoch.
    Next,
}

/// Modal viewer state: closed, or open on a specific epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    /// Id of the open epoch, `None` while closed.
    current: Option<String>,
}

impl Viewer {
    /// Create a closed viewer.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Id of the open epoch, if any.
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Open the viewer on `id`.
    ///
    /// Returns `true` if the id resolved and the viewer is now open on it.
    /// An unknown id leaves the state untouched and logs a diagnostic.
    /// Re-opening the current epoch is a no-op that still returns `true`.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> bool {
        if catalog.lookup(id).is_none() {
            warn!(epoch_id = %id, "unknown epoch id, ignoring open request");
            return false;
        }
        self.current = Some(id.to_string());
        true
    }

    /// Close the modal. No-op when already closed.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Step to the neighboring epoch in catalog order.
    ///
    /// Clamps at the first and last entry, and does nothing while closed.
    pub fn navigate(&mut self, catalog: &Catalog, direction: Direction) {
        let Some(id) = self.current.as_deref() else {
            return;
        };
        let Some(index) = catalog.index_of(id) else {
            warn!(epoch_id = %id, "open epoch missing from catalog, ignoring navigation");
            return;
        };

        let target = match direction {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => (index + 1 < catalog.len()).then_some(index + 1),
        };

        // None means we are already at an end, stay put
        if let Some(record) = target.and_then(|i| catalog.get(i)) {
            self.current = Some(record.id.clone());
        }
    }
}
