//! Sources of raw module graph data.
//!
//! The pipeline does not care where relationships come from. An
//! [`EdgeSource`] turns a project directory into a list of relationships;
//! [`GoModGraph`] does so by running `go mod graph` there.
//!
//! [`discover_modules`] finds project directories under a root so they do
//! not have to be listed by hand.

mod discover;
mod go;

pub use discover::discover_modules;
pub use go::GoModGraph;

use std::path::Path;

use crate::error::Result;
use crate::parser::Relationship;

/// Produces the relationships of one project directory.
pub trait EdgeSource {
    /// Loads every relationship reported for `dir`, in reported order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableSource`](crate::Error::UnreadableSource)
    /// when the data cannot be produced, and
    /// [`Error::Parse`](crate::Error::Parse) when it is malformed.
    fn load(&self, dir: &Path) -> Result<Vec<Relationship>>;
}
