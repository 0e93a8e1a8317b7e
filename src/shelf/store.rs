//! # Book Store
//!
//! The persistence collaborator behind a [`Shelf`](crate::shelf::Shelf).
//! The shelf reads each status list once with `fetch_books` and hands the
//! whole shelf back with `flush` after every committed change; it never
//! touches storage itself.
//!
//! [`JsonStore`] keeps everything in one JSON file (`~/.easydrag/shelf.json`
//! by default). All writes use atomic rename (write `.tmp`, then `rename()`)
//! for crash safety.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::shelf::book::{Book, BookStatus};

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Serde(e) => write!(f, "store data error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e)
    }
}

pub trait BookStore {
    /// Books with the given status, ordered by sort index.
    fn fetch_books(&self, status: BookStatus) -> Result<Vec<Book>, StoreError>;

    /// Persist the full shelf, replacing what was stored before.
    fn flush(&mut self, books: &[Book]) -> Result<(), StoreError>;
}

fn sorted_by_status(books: &[Book], status: BookStatus) -> Vec<Book> {
    let mut matching: Vec<Book> = books.iter().filter(|b| b.status == status).cloned().collect();
    matching.sort_by_key(|b| b.sort_index);
    matching
}

// ============================================================================
// JSON file store
// ============================================================================

/// On-disk layout of the shelf file.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ShelfFile {
    pub updated_at: i64,
    pub books: Vec<Book>,
}

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl JsonStore {
    /// Open the store at `path`. A missing file is an empty shelf.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let books = if path.exists() {
            let json = fs::read_to_string(&path)?;
            let file: ShelfFile = serde_json::from_str(&json)?;
            info!("Loaded {} books from {}", file.books.len(), path.display());
            file.books
        } else {
            info!("No shelf file at {}, starting empty", path.display());
            Vec::new()
        };
        Ok(Self { path, books })
    }
}

impl BookStore for JsonStore {
    fn fetch_books(&self, status: BookStatus) -> Result<Vec<Book>, StoreError> {
        Ok(sorted_by_status(&self.books, status))
    }

    fn flush(&mut self, books: &[Book]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = ShelfFile {
            updated_at: Utc::now().timestamp(),
            books: books.to_vec(),
        };
        atomic_write_json(&self.path, &file)?;
        self.books = file.books;
        debug!("Flushed {} books to {}", self.books.len(), self.path.display());
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// In-memory store
// ============================================================================

/// Keeps books in memory and counts flushes.
///
/// Clones share the same storage, so a caller can hand one clone to a
/// `Shelf` and keep another to inspect what was flushed.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    books: Vec<Book>,
    flushes: usize,
}

impl MemoryStore {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryInner { books, flushes: 0 })),
        }
    }

    pub fn flush_count(&self) -> usize {
        self.inner.borrow().flushes
    }

    /// Snapshot of the last flushed shelf.
    pub fn books(&self) -> Vec<Book> {
        self.inner.borrow().books.clone()
    }
}

impl BookStore for MemoryStore {
    fn fetch_books(&self, status: BookStatus) -> Result<Vec<Book>, StoreError> {
        Ok(sorted_by_status(&self.inner.borrow().books, status))
    }

    fn flush(&mut self, books: &[Book]) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.books = books.to_vec();
        inner.flushes += 1;
        Ok(())
    }
}
