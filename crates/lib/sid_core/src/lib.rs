//! # sid_core
//!
//! Core domain logic for SID.
//!
//! - [`dispatch`] — tries candidate models in priority order until one answers
//! - [`generative`] — the outbound generation capability and its Gemini client
//! - [`filler`] — substitute replies used when every candidate fails
//! - [`local`] — offline keyword responder

pub mod dispatch;
pub mod filler;
pub mod generative;
pub mod local;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
