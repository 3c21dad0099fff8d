//! Domain Services
//!
//! Stateless logic with no I/O.

pub mod pattern_translator;

pub use pattern_translator::{escape_most, translate, translate_all, translate_for_bases};
