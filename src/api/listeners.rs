use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Change notifications emitted by a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderChangeEvent {
    /// Margins, axis lengths or transforms changed.
    TransformsRebuilt,
    StyleChanged,
    TickLimitsChanged,
}

pub type RenderListenerFn = Box<dyn FnMut(RenderChangeEvent) + Send + 'static>;

/// Registry of render-change callbacks keyed by listener id.
#[derive(Default)]
pub struct RenderListeners {
    entries: IndexMap<String, RenderListenerFn>,
}

impl fmt::Debug for RenderListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderListeners")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RenderListeners {
    /// Registers a callback. Returns `false` and keeps the existing entry when
    /// `id` is already registered.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        callback: impl FnMut(RenderChangeEvent) + Send + 'static,
    ) -> bool {
        let id = id.into();
        if self.entries.contains_key(&id) {
            warn!(listener_id = %id, "duplicate render listener ignored");
            return false;
        }
        self.entries.insert(id, Box::new(callback));
        true
    }

    /// Removes a listener by id. Returns `true` when removed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.shift_remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls every listener, most recently registered first.
    pub fn notify(&mut self, event: RenderChangeEvent) {
        for callback in self.entries.values_mut().rev() {
            callback(event);
        }
    }
}
