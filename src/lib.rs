//! SQL seed scripts for the Yellow messaging development database.
//!
//! `generate(host)` yields the populate statements, `provision()` the init
//! statements. Nothing is escaped: hosts containing `'` produce broken SQL.

pub mod app;
pub mod config;
pub mod fixture;
pub mod logger;
pub mod seed;
pub mod sql;

pub use seed::{generate, provision};
