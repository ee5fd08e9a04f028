// src/point_spitter/mod.rs
pub mod error;
pub mod format_helpers;
pub mod models;
pub mod parser;
pub mod regexes;
pub mod session;
pub mod splitter;
