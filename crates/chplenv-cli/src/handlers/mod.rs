//! Command handlers.

pub mod launcher;
