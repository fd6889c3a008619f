//! Utility module

pub mod target;
