//! Parser module for ModScope.
//!
//! Turns the line-oriented output of `go mod graph` into typed
//! [`Relationship`] edges between `(module, version)` identities.
//!
//! # Example
//!
//! ```
//! use modscope::parser::{parse_str, ModuleAndVersion};
//!
//! let rels = parse_str("example.com/app example.com/lib@v1.2.0\n").unwrap();
//! assert_eq!(rels[0].downstream, ModuleAndVersion::new("example.com/app", "tip"));
//! ```

pub mod mod_graph;
pub mod types;

// Re-export commonly used types for convenience
pub use mod_graph::{parse_line, parse_records, parse_str, ParseError, ParseResult};

pub use types::{ModuleAndVersion, ModuleName, Relationship, VersionName, TIP_VERSION};
