//! Utility functions

pub mod path;

pub use path::{display_label, normalize_path};
