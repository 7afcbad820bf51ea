//! Text analysis module for lexalign.
//!
//! Word-level normalization used by the aligner's stem stage and exposed on
//! its own through the CLI and the HTTP facade.

pub mod stem;

// Re-export commonly used types
pub use stem::*;
