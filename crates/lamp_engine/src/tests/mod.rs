//! Crate-level test fixtures and end-to-end lamp scenarios

pub mod support;
