//! Persistent store for the favorites collection
//!
//! One fixed file holds the serialized collection verbatim (a JSON array of
//! quotes, no wrapper). Loads swallow every failure into an empty collection;
//! saves are handed to a background writer thread and never block or fail
//! visibly. The on-disk copy is a mirror, not a second source of truth.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::data::storage;
use crate::data::types::Quote;
use crate::error::Result;

/// Favorites data file name (the single storage key)
const FAVORITES_FILE: &str = "favorites_v1.json";

enum WriteCommand {
    Save(Vec<Quote>),
    Flush(Sender<()>),
    Shutdown,
}

/// Durable storage for one favorites collection
///
/// Writes are applied by a dedicated thread in the order they were queued,
/// so the file always converges on the last mutation.
pub struct FavoritesStore {
    path: PathBuf,
    tx: Sender<WriteCommand>,
    writer: Option<JoinHandle<()>>,
}

impl FavoritesStore {
    /// Open the store at the default config location
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(storage::data_path(FAVORITES_FILE)?))
    }

    /// Open the store at a specific path
    pub fn open_at(path: PathBuf) -> Self {
        let (tx, rx) = unbounded();
        let writer_path = path.clone();
        let writer = thread::spawn(move || writer_loop(&writer_path, rx));

        Self {
            path,
            tx,
            writer: Some(writer),
        }
    }

    /// Load the stored collection
    ///
    /// A missing, unreadable, or malformed file all come back as an empty
    /// collection; startup must never fail on storage problems. The failure
    /// is noted on stderr only.
    pub fn load(&self) -> Vec<Quote> {
        match storage::load_from::<Vec<Quote>>(&self.path) {
            Ok(Some(quotes)) => quotes,
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Failed to load favorites: {e}");
                Vec::new()
            }
        }
    }

    /// Queue a write of the full collection and return immediately
    ///
    /// Best-effort persistence: a failed write is noted on stderr and
    /// dropped, with no retry.
    pub fn save(&self, quotes: Vec<Quote>) {
        let _ = self.tx.send(WriteCommand::Save(quotes));
    }

    /// Block until every write queued so far has been attempted
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = bounded(1);
        if self.tx.send(WriteCommand::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl Drop for FavoritesStore {
    fn drop(&mut self) {
        // Shutdown is queued behind any pending saves, so they still land
        let _ = self.tx.send(WriteCommand::Shutdown);
        if let Some(writer) = self.writer.take() {
            let _ = writer.join();
        }
    }
}

fn writer_loop(path: &std::path::Path, rx: Receiver<WriteCommand>) {
    while let Ok(cmd) = rx.recv() {
        match cmd {
            WriteCommand::Save(quotes) => {
                if let Err(e) = storage::save_to(path, &quotes) {
                    eprintln!("Failed to save favorites: {e}");
                }
            }
            WriteCommand::Flush(ack) => {
                let _ = ack.send(());
            }
            WriteCommand::Shutdown => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("quotidian_store_test_{}.json", id))
    }

    fn quote(text: &str) -> Quote {
        Quote::new(text, "Anonymous")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let store = FavoritesStore::open_at(temp_path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_flush_load_roundtrip() {
        let path = temp_path();
        let store = FavoritesStore::open_at(path.clone());

        store.save(vec![quote("first"), quote("second")]);
        store.flush();

        let loaded = store.load();
        assert_eq!(loaded, vec![quote("first"), quote("second")]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let path = temp_path();
        let store = FavoritesStore::open_at(path.clone());

        let quotes = vec![quote("c"), quote("a"), quote("b")];
        store.save(quotes.clone());
        store.flush();

        assert_eq!(store.load(), quotes);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_last_queued_write_wins() {
        let path = temp_path();
        let store = FavoritesStore::open_at(path.clone());

        store.save(vec![quote("stale")]);
        store.save(vec![quote("stale"), quote("fresh")]);
        store.flush();

        assert_eq!(store.load(), vec![quote("stale"), quote("fresh")]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let path = temp_path();
        fs::write(&path, "{ this is not a quote list }").unwrap();

        let store = FavoritesStore::open_at(path.clone());
        assert!(store.load().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let path = temp_path();
        // Valid JSON, wrong type: an object instead of an array
        fs::write(&path, r#"{"text": "x", "author": "y"}"#).unwrap();

        let store = FavoritesStore::open_at(path.clone());
        assert!(store.load().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        // Parent "directory" is a regular file, so the write must fail
        let blocker = temp_path();
        fs::write(&blocker, "file, not a directory").unwrap();
        let path = blocker.join("favorites.json");

        let store = FavoritesStore::open_at(path);
        store.save(vec![quote("lost")]);
        store.flush();

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_drop_drains_pending_writes() {
        let path = temp_path();

        {
            let store = FavoritesStore::open_at(path.clone());
            store.save(vec![quote("persisted on drop")]);
            // No flush; Drop must drain the queue before the process moves on
        }

        let store = FavoritesStore::open_at(path.clone());
        assert_eq!(store.load(), vec![quote("persisted on drop")]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_blob_is_plain_array_of_records() {
        let path = temp_path();
        let store = FavoritesStore::open_at(path.clone());

        store.save(vec![Quote::new("Believe in yourself.", "Anonymous")]);
        store.flush();

        let content = fs::read_to_string(&path).unwrap();
        // The blob is the collection's serialization verbatim, no wrapper
        assert!(content.trim_start().starts_with('['));
        assert!(content.contains("\"text\""));
        assert!(content.contains("\"author\""));
        assert!(!content.contains("version"));

        let _ = fs::remove_file(&path);
    }
}
