//! Utility modules for web and DOM operations.

pub mod dom;
