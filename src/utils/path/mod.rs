//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: slash normalization, canonical spelling and relative-path safety checks

pub mod fs;

pub use fs::{canonical_relative, join_relative, normalize_slashes, unsafe_component};
