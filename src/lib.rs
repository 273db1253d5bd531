//! ModScope - focused module dependency graphs for Graphviz
//!
//! This crate reads module graph data (such as `go mod graph` output), keeps
//! only the modules that transitively depend on a chosen focus module, groups
//! the remaining versions by module, and renders the result as Graphviz DOT
//! or JSON.

pub mod error;
pub mod export;
pub mod graph;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod timing;

pub use error::{Error, Result};
pub use export::ExportFormat;
pub use parser::{ModuleAndVersion, ModuleName, Relationship, VersionName};
pub use pipeline::{build, build_and_render, load_relationships};
pub use source::{discover_modules, EdgeSource, GoModGraph};
