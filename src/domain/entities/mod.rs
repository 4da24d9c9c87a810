//! Core domain entities.
//!
//! The service has a single entity, [`ShortLink`], mapping a short code to
//! the URL it redirects to.

pub mod link;

pub use link::ShortLink;
