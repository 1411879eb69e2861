//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Scan configuration (roots, exclusions, target extension)
//! - Tree index model and recoverable errors
//! - Path normalization utilities
//! - Tree rendering
//! - Source file reading

pub mod config;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
