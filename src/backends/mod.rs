//! Backends module - Filesystem traversal

pub mod scan;
