//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (file picker events) lives here so the page and components
//! only deal with plain `SelectedFile` metadata.

pub mod file;
