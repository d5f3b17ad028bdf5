//! Infrastructure layer module
//!
//! Filesystem-backed loading of YAML configuration documents.

pub mod config;
