//! Utility modules shared by the config and asset layers.

pub mod path;
