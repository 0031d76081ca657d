//! Practice Catalogue - Runnable Language Drills
//!
//! A registry of small, numbered demonstrations grouped by topic
//! (basic types, flow control, composite data, methods and traits,
//! strings), plus a dispatcher that runs a selection of them.
//!
//! Run the default selection with:
//! ```bash
//! cargo run --bin practice
//! ```
//!
//! Or run specific entries, or everything:
//! ```bash
//! cargo run --bin practice -- 3.11 4.20
//! cargo run --bin practice -- --all
//! cargo run --bin practice -- --list
//! ```

pub mod catalogue;
pub mod dispatcher;
pub mod error;
pub mod practice;
pub mod settings;
pub mod shapes;

pub use catalogue::{Action, Catalogue, Entry, Topic};
pub use dispatcher::{Dispatcher, RunReport, Selection};
pub use error::{CatalogueError, ConfigError};
pub use settings::Settings;

/// Builds the catalogue with every practice entry registered.
pub fn build_catalogue() -> Result<Catalogue, CatalogueError> {
    let mut catalogue = Catalogue::new();
    practice::register_all(&mut catalogue)?;
    Ok(catalogue)
}
