use crate::errors::StoreError;
use crate::models::{Entry, NewEntry};
use crate::storage::EntryStorage;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Durable collection of journal entries, one per UTC day.
///
/// Every call goes back to storage; nothing is cached between requests.
/// Appends are serialized within this process only. Another process writing
/// the same document can still race the read-check-write sequence.
#[derive(Clone)]
pub struct EntryStore {
    storage: Arc<dyn EntryStorage>,
    append_lock: Arc<Mutex<()>>,
}

impl EntryStore {
    pub fn new(storage: Arc<dyn EntryStorage>) -> Self {
        Self {
            storage,
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Full collection in storage order. Corrupt content is an error here.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, StoreError> {
        match self.storage.read().await.map_err(StoreError::Read)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(StoreError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    pub async fn append_entry(&self, candidate: NewEntry) -> Result<Entry, StoreError> {
        self.append_entry_at(candidate, Utc::now()).await
    }

    pub async fn append_entry_at(
        &self,
        candidate: NewEntry,
        now: DateTime<Utc>,
    ) -> Result<Entry, StoreError> {
        let mood = candidate.mood.trim();
        if mood.is_empty() {
            return Err(StoreError::Validation(
                "Please select a mood before submitting.".into(),
            ));
        }

        let _guard = self.append_lock.lock().await;
        let mut entries = self.existing_entries().await?;

        let today = now.date_naive().format("%Y-%m-%d").to_string();
        if entries.iter().any(|entry| entry.day() == today) {
            return Err(StoreError::DuplicateDay);
        }

        let entry = Entry {
            mood: mood.to_string(),
            notes: candidate.notes.trim().to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        entries.push(entry.clone());

        let payload = serde_json::to_vec_pretty(&entries).map_err(StoreError::Encode)?;
        self.storage.write(&payload).await.map_err(StoreError::Write)?;

        info!(day = %today, total = entries.len(), "entry saved");
        Ok(entry)
    }

    /// Read-before-append path: a corrupt document starts a fresh collection.
    async fn existing_entries(&self) -> Result<Vec<Entry>, StoreError> {
        match self.list_entries().await {
            Err(StoreError::Corrupt(err)) => {
                warn!(error = %err, "entries file corrupt, starting a new collection");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
