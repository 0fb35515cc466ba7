//! Admin workflow over the directory: an explicit in-memory document (the
//! record collection) plus pure transition functions. Any interface layer
//! (CLI, web form, desktop UI) is a thin adapter issuing transitions and
//! re-rendering from the resulting document.

pub mod board;
pub mod error;

pub use board::Board;
pub use error::{BoardError, Result};
