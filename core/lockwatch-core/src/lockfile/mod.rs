//! Lockfile discovery and parsing.
//!
//! The game client writes a lockfile on startup with its local API connection
//! parameters. We only ever read it.
//!
//! ```text
//! LockfileLocator → LockfileReader → parse_lockfile → LockfileRecord
//!  (which path?)     (read + swallow)   (five fields)
//! ```
//!
//! # Module Structure
//!
//! - [`locator`]: Ordered candidate paths, first existing wins
//! - [`parser`]: `processName:pid:port:password:protocol` → record
//! - [`reader`]: Composes the two; every failure becomes `None`
//! - [`types`]: The parsed record

pub mod locator;
pub mod parser;
pub mod reader;
pub mod types;

pub use locator::{LockfileLocator, DEFAULT_CANDIDATES};
pub use parser::parse_lockfile;
pub use reader::LockfileReader;
pub use types::LockfileRecord;
