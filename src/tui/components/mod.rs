//! # TUI Components
//!
//! Stateless, props-based pieces of the shelf screen:
//!
//! - `TitleBar`: app name, clock, drag status and the last error
//! - `ShelfColumn`: one status list drawn as a bordered column of rows
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! └── shelf_column.rs  (One list of books)
//! ```

mod shelf_column;
mod title_bar;

pub use shelf_column::ShelfColumn;
pub use title_bar::TitleBar;
