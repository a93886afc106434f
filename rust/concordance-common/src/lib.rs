//! Core definitions (error type and result helpers), relied upon by all concordance-* crates.

pub mod error;
pub mod result;

pub use result::Result;
