use crate::storage::EntryStorage;
use crate::store::EntryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: EntryStore,
}

impl AppState {
    pub fn new(storage: Arc<dyn EntryStorage>) -> Self {
        Self {
            store: EntryStore::new(storage),
        }
    }
}
