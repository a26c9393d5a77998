//! Utility functions

pub mod atomic;
pub mod time;
