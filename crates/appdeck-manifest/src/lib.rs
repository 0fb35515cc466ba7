//! Serializer for the directory's persisted form: a TypeScript config
//! module carrying the status config, the ordered record collection, and
//! the derivation functions. The module is the hand-edited source of
//! truth; this crate renders it deterministically, parses the record
//! collection back out, and supports marker-based record insertion that
//! leaves every other byte untouched.

pub mod error;
pub mod insert;
pub mod parse;
pub mod render;

pub use error::{ManifestError, Result};
pub use insert::insert_record;
pub use parse::parse_module;
pub use render::{render_module, render_record};
