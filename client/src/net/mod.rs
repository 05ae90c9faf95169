//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the single REST call to the analysis endpoint; the wire schema
//! lives in the `feedback` crate.

pub mod api;
