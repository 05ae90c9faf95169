//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data mutated through methods so transitions can be tested
//! without a browser; pages wrap it in `RwSignal` context.

pub mod submission;
