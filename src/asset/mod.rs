//! Extra asset handling: naming, digests, minification and path patterns.

pub mod digest;
pub mod glob;
mod kind;
pub mod minify;
mod name;

// Types
pub use kind::{AssetDescriptor, AssetType};
pub use name::{HASH_PREFIX_LEN, NamingMode};

// Pure helpers
pub use digest::{DigestCache, sha384_hex};
pub use glob::{AssetPattern, expand_all};
pub use name::minified_asset_name;
