use async_trait::async_trait;
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};

/// Raw byte access to the persisted entries document.
///
/// `read` returns `Ok(None)` when nothing has been written yet.
#[async_trait]
pub trait EntryStorage: Send + Sync {
    async fn read(&self) -> io::Result<Option<Vec<u8>>>;
    async fn write(&self, bytes: &[u8]) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EntryStorage for FileStorage {
    async fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn write(&self, bytes: &[u8]) -> io::Result<()> {
        fs::write(&self.path, bytes).await
    }
}

/// In-memory document, used by tests. Writes can be switched to fail.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Mutex<Option<Vec<u8>>>,
    fail_writes: Mutex<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Mutex::new(Some(bytes.into())),
            fail_writes: Mutex::new(false),
        }
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().await = fail;
    }

    pub async fn snapshot(&self) -> Option<Vec<u8>> {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl EntryStorage for MemoryStorage {
    async fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.document.lock().await.clone())
    }

    async fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if *self.fail_writes.lock().await {
            return Err(io::Error::other("writes disabled"));
        }
        *self.document.lock().await = Some(bytes.to_vec());
        Ok(())
    }
}
