//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` adapts fetch, `localStorage` and the browser clock to the
//! `session` crate's seams; all provider wire handling lives in `session`.

pub mod browser;
