//! DJcode — grammar and vocabulary validation for pattern token streams.

pub mod config;
pub mod dsl;
