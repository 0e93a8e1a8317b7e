//! # Shelf Demo
//!
//! A reading-progress shelf: the application the drag-and-drop core was
//! built for. Books live in two lists, "reading" and "finished"; dragging a
//! book within a list reorders it, dragging it onto the other list changes
//! its status.
//!
//! ## Modules
//!
//! - [`book`]: `Book` and `BookStatus`
//! - [`store`]: the `BookStore` persistence collaborator (JSON file, memory)
//! - [`model`]: `Shelf`, the view model the coordinator mutates

pub mod book;
pub mod model;
pub mod store;

pub use book::{Book, BookStatus};
pub use model::Shelf;
pub use store::{BookStore, JsonStore, MemoryStore, StoreError};
