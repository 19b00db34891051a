//! Gororobas Core Library
//!
//! Rich-text document model shared by the Gororobas encyclopedia: notes,
//! vegetable descriptions and bios are stored as [`richtext::Document`] trees.

pub mod config;
pub mod error;
pub mod logging;
pub mod richtext;
