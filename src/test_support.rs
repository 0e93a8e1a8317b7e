//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::core::hooks::{HapticKind, TransitionHooks};
use crate::core::move_config::Curve;
use crate::shelf::{Book, BookStatus, BookStore, MemoryStore, Shelf, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum HookCall {
    Haptic(HapticKind),
    Animate(Curve),
}

/// Records every hook call. Clones share the log.
#[derive(Debug, Default, Clone)]
pub struct RecordingHooks {
    calls: Rc<RefCell<Vec<HookCall>>>,
}

impl RecordingHooks {
    pub fn calls(&self) -> Vec<HookCall> {
        self.calls.borrow().clone()
    }

    pub fn haptics(&self) -> Vec<HapticKind> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HookCall::Haptic(kind) => Some(*kind),
                HookCall::Animate(_) => None,
            })
            .collect()
    }
}

impl TransitionHooks for RecordingHooks {
    fn haptic(&mut self, kind: HapticKind) {
        self.calls.borrow_mut().push(HookCall::Haptic(kind));
    }

    fn animate(&mut self, curve: Curve) {
        self.calls.borrow_mut().push(HookCall::Animate(curve));
    }
}

/// A store whose flushes always fail.
pub struct FailingStore;

impl BookStore for FailingStore {
    fn fetch_books(&self, _status: BookStatus) -> Result<Vec<Book>, StoreError> {
        Ok(Vec::new())
    }

    fn flush(&mut self, _books: &[Book]) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::other("disk full")))
    }
}

/// Books with the given titles and status, sort indices in order.
pub fn books(titles: &[&str], status: BookStatus) -> Vec<Book> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let mut book = Book::new(*title, status);
            book.sort_index = i as i64;
            book
        })
        .collect()
}

/// A loaded shelf over a memory store, plus a handle to that store.
pub fn shelf_with(reading: &[&str], finished: &[&str]) -> (Shelf, MemoryStore) {
    let mut all = books(reading, BookStatus::Reading);
    all.extend(books(finished, BookStatus::Finished));
    let store = MemoryStore::with_books(all);
    let mut shelf = Shelf::new(Box::new(store.clone()));
    shelf.fetch_data();
    (shelf, store)
}
