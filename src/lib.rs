//! daybook - Prompted daily reflection journal
//!
//! A command-line journaling application: fill out prompted morning and
//! evening reflections, keep the entries in a single JSON document, and
//! browse, edit or delete past entries from a history listing.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
