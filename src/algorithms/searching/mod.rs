//! Search producers
//!
//! Both searches end with `status = "Found"` plus the matching `index`, or
//! with `status = "Not Found"` when the target is absent.

pub mod binary;
pub mod linear;

/// Status sentinel for a successful search
pub const FOUND: &str = "Found";

/// Status sentinel for an unsuccessful search
pub const NOT_FOUND: &str = "Not Found";
