//! eogtricks - Image viewer plugin logic
//!
//! Bracketed filename tags, page-style navigation, quick move, safer
//! delete bindings and fullscreen windows, written against small host
//! capability traits, plus a command-line front end for the file-level parts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod host;
pub mod infrastructure;
pub mod plugins;

pub use error::EogtricksError;
