//! Flows module - End-to-end commands built from the backends

pub mod dump;
