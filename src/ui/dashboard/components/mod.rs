//! Dashboard component modules
//!
//! Contains the individual rendering components. The header, footer and
//! activity panel are shared with the other screens.

pub mod footer;
pub mod header;
pub mod logs;
pub mod sessions;
pub mod stats;
