//! # Shelf View Model
//!
//! Two lists of books, "reading" and "finished", backed by a [`BookStore`].
//! This is the host the drag coordinator mutates: reorders act directly on
//! [`Shelf::reading`] / [`Shelf::finished`], and cross-list moves come in
//! through [`Shelf::move_book`].
//!
//! Every persisted change follows the same three steps:
//!
//! ```text
//! mutate in place → reindex both lists (0..n-1) → flush to the store
//! ```

use log::{debug, info, warn};

use crate::core::coordinator::{DragCoordinator, DropZone};
use crate::core::ListId;
use crate::shelf::book::{Book, BookStatus};
use crate::shelf::store::BookStore;

pub struct Shelf {
    pub reading: Vec<Book>,
    pub finished: Vec<Book>,
    /// Last persistence failure, shown in the status bar until the next success.
    pub last_error: Option<String>,
    store: Box<dyn BookStore>,
}

impl Shelf {
    pub fn new(store: Box<dyn BookStore>) -> Self {
        Self {
            reading: Vec::new(),
            finished: Vec::new(),
            last_error: None,
            store,
        }
    }

    /// Load both lists from the store.
    pub fn fetch_data(&mut self) {
        for status in BookStatus::ALL {
            match self.store.fetch_books(status) {
                Ok(books) => *self.list_mut(status) = books,
                Err(e) => {
                    warn!("Failed to fetch {:?} books: {}", status, e);
                    self.last_error = Some(e.to_string());
                }
            }
        }
        info!(
            "Shelf loaded: {} reading, {} finished",
            self.reading.len(),
            self.finished.len()
        );
    }

    pub fn list(&self, status: BookStatus) -> &[Book] {
        match status {
            BookStatus::Reading => &self.reading,
            BookStatus::Finished => &self.finished,
        }
    }

    pub fn list_mut(&mut self, status: BookStatus) -> &mut Vec<Book> {
        match status {
            BookStatus::Reading => &mut self.reading,
            BookStatus::Finished => &mut self.finished,
        }
    }

    pub fn reading_mut(&mut self) -> &mut Vec<Book> {
        &mut self.reading
    }

    pub fn finished_mut(&mut self) -> &mut Vec<Book> {
        &mut self.finished
    }

    /// Which list currently holds `book`, judged by id rather than the
    /// (possibly stale) status on the value passed in.
    fn status_of(&self, book: &Book) -> Option<BookStatus> {
        BookStatus::ALL
            .into_iter()
            .find(|status| self.list(*status).contains(book))
    }

    /// Move `book` to the list named `target`, at its head.
    ///
    /// No-op when the book is already in that list or not on the shelf.
    pub fn move_book(&mut self, book: &Book, target: &ListId) {
        let target_status = BookStatus::from_list_id(target);
        let Some(current) = self.status_of(book) else {
            debug!("move_book: '{}' is not on the shelf", book.title);
            return;
        };
        if current == target_status {
            return;
        }

        let source = self.list_mut(current);
        let Some(pos) = source.iter().position(|b| b == book) else {
            return;
        };
        let mut moved = source.remove(pos);
        moved.status = target_status;
        info!("Moving '{}' {:?} -> {:?}", moved.title, current, target_status);
        self.list_mut(target_status).insert(0, moved);

        self.save_reordered_list();
    }

    /// Reassign sort indices in display order and flush.
    pub fn save_reordered_list(&mut self) {
        for list in [&mut self.reading, &mut self.finished] {
            for (index, book) in list.iter_mut().enumerate() {
                book.sort_index = index as i64;
            }
        }
        self.flush();
    }

    /// Append a new book to the reading list and persist it.
    pub fn add_book(&mut self, title: &str, author: Option<&str>, total_pages: u32) -> Book {
        let mut book = Book::new(title, BookStatus::Reading).with_pages(0, total_pages);
        if let Some(author) = author {
            book = book.with_author(author);
        }
        book.sort_index = self.reading.len() as i64;
        self.reading.push(book.clone());
        self.flush();
        book
    }

    /// Fill an empty shelf with a few books so the demo has something to drag.
    pub fn seed_samples(&mut self) {
        if !self.reading.is_empty() || !self.finished.is_empty() {
            return;
        }
        let samples = [
            ("Dune", "Frank Herbert", 140, 412),
            ("The Left Hand of Darkness", "Ursula K. Le Guin", 90, 304),
            ("Piranesi", "Susanna Clarke", 12, 245),
        ];
        for (title, author, read, total) in samples {
            self.reading
                .push(Book::new(title, BookStatus::Reading).with_author(author).with_pages(read, total));
        }
        self.finished
            .push(Book::new("Middlemarch", BookStatus::Finished).with_author("George Eliot").with_pages(880, 880));
        info!("Seeded shelf with sample books");
        self.save_reordered_list();
    }

    fn flush(&mut self) {
        let all: Vec<Book> = self.reading.iter().chain(self.finished.iter()).cloned().collect();
        match self.store.flush(&all) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                warn!("Failed to save shelf: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Register one drop zone per status list.
    ///
    /// Cross-list arrivals go through [`Shelf::move_book`]; a drop commits the
    /// current order with [`Shelf::save_reordered_list`].
    pub fn register_zones(coordinator: &mut DragCoordinator<Shelf, Book>) {
        let lenses: [(BookStatus, fn(&mut Shelf) -> &mut Vec<Book>); 2] = [
            (BookStatus::Reading, Shelf::reading_mut),
            (BookStatus::Finished, Shelf::finished_mut),
        ];
        for (status, lens) in lenses {
            coordinator.register_drop_zone(
                DropZone::new(status.list_id(), lens)
                    .on_cross_list_move(|shelf: &mut Shelf, book: &Book, target: &ListId| {
                        shelf.move_book(book, target)
                    })
                    .on_commit(|shelf: &mut Shelf| shelf.save_reordered_list()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shelf::store::MemoryStore;
    use crate::test_support::{shelf_with, FailingStore};

    fn indices(list: &[Book]) -> Vec<i64> {
        list.iter().map(|b| b.sort_index).collect()
    }

    #[test]
    fn test_fetch_orders_by_sort_index() {
        let (shelf, _) = shelf_with(&["a", "b", "c"], &["x"]);
        let titles: Vec<_> = shelf.reading.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(shelf.finished.len(), 1);
    }

    #[test]
    fn test_move_book_to_other_list() {
        let (mut shelf, _) = shelf_with(&["a", "b"], &["x", "y"]);
        let b = shelf.reading[1].clone();
        shelf.move_book(&b, &"finished".into());

        assert_eq!(shelf.reading.len(), 1);
        assert_eq!(shelf.finished.len(), 3);
        assert_eq!(shelf.finished[0], b);
        assert_eq!(shelf.finished[0].status, BookStatus::Finished);
        assert_eq!(indices(&shelf.reading), vec![0]);
        assert_eq!(indices(&shelf.finished), vec![0, 1, 2]);
    }

    #[test]
    fn test_move_book_to_same_list_is_noop() {
        let (mut shelf, _) = shelf_with(&["a", "b"], &[]);
        let a = shelf.reading[0].clone();
        shelf.move_book(&a, &"reading".into());
        assert_eq!(shelf.reading[0], a);
        assert_eq!(shelf.reading.len(), 2);
    }

    #[test]
    fn test_move_book_uses_live_status_not_payload() {
        let (mut shelf, _) = shelf_with(&["a"], &[]);
        let stale = shelf.reading[0].clone();
        shelf.move_book(&stale, &"finished".into());
        // The payload still claims Reading; moving it to finished again is a no-op.
        shelf.move_book(&stale, &"finished".into());
        assert_eq!(shelf.finished.len(), 1);
        // And moving it back works even though the payload never changed.
        shelf.move_book(&stale, &"reading".into());
        assert_eq!(shelf.reading.len(), 1);
        assert_eq!(shelf.reading[0].status, BookStatus::Reading);
    }

    #[test]
    fn test_move_unknown_book_is_noop() {
        let (mut shelf, _) = shelf_with(&["a"], &[]);
        let stranger = Book::new("stranger", BookStatus::Reading);
        shelf.move_book(&stranger, &"finished".into());
        assert_eq!(shelf.reading.len(), 1);
        assert!(shelf.finished.is_empty());
    }

    #[test]
    fn test_save_reordered_list_reindexes() {
        let (mut shelf, _) = shelf_with(&["a", "b", "c"], &[]);
        shelf.reading.swap(0, 2);
        shelf.save_reordered_list();
        let titles: Vec<_> = shelf.reading.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
        assert_eq!(indices(&shelf.reading), vec![0, 1, 2]);
    }

    #[test]
    fn test_add_book_appends_to_reading() {
        let (mut shelf, _) = shelf_with(&["a"], &[]);
        let added = shelf.add_book("New", Some("Someone"), 100);
        assert_eq!(shelf.reading.last(), Some(&added));
        assert_eq!(added.sort_index, 1);
        assert_eq!(added.author.as_deref(), Some("Someone"));
    }

    #[test]
    fn test_seed_only_fills_empty_shelf() {
        let mut shelf = Shelf::new(Box::new(MemoryStore::default()));
        shelf.seed_samples();
        assert_eq!(shelf.reading.len(), 3);
        assert_eq!(shelf.finished.len(), 1);
        shelf.seed_samples();
        assert_eq!(shelf.reading.len(), 3);
    }

    #[test]
    fn test_flush_failure_is_recorded_not_fatal() {
        let mut shelf = Shelf::new(Box::new(FailingStore));
        shelf.add_book("a", None, 10);
        assert_eq!(shelf.reading.len(), 1);
        assert!(shelf.last_error.as_deref().unwrap().contains("disk full"));
    }
}
