//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `upload_form` renders the always-visible form; the rest render pieces of
//! the results section from a `feedback::Report`.

pub mod feedback_list;
pub mod keyword_chips;
pub mod results_panel;
pub mod score_panel;
pub mod upload_form;
