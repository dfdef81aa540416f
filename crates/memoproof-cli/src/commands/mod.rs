//! Command implementations.

pub mod canonicalize;
pub mod commit;
pub mod parse_memo;
pub mod reveal;
