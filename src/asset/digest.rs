//! Content digests for cache-safe asset names.
//!
//! In cache-safe mode the digest has to be known before pages render (it is
//! part of the referenced filename) but the file is only written after the
//! build. [`DigestCache`] carries the final content and its digest from the
//! pre-build phase to the post-build phase so the asset is read and minified
//! once.

use rustc_hash::FxHashMap;
use sha2::{Digest, Sha384};

use crate::error::{AssetError, AssetResult};

/// SHA-384 of the UTF-8 bytes of `content`, as lowercase hex.
pub fn sha384_hex(content: &str) -> String {
    hex::encode(Sha384::digest(content.as_bytes()))
}

/// Original asset path → final content and digest, for one build.
///
/// Keys are the unrenamed, slash-normalized relative paths.
#[derive(Debug, Default)]
pub struct DigestCache {
    content: FxHashMap<String, String>,
    digest: FxHashMap<String, String>,
}

impl DigestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the final content of `path` and its digest.
    pub fn record(&mut self, path: impl Into<String>, content: String, digest: String) {
        let path = path.into();
        self.digest.insert(path.clone(), digest);
        self.content.insert(path, content);
    }

    /// Content recorded for `path` during this build.
    ///
    /// Missing content means the post-build phase is running without the
    /// pre-build phase that should have recorded it.
    pub fn lookup_content(&self, path: &str) -> AssetResult<&str> {
        self.content
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| AssetError::KeyNotFound(path.to_owned()))
    }

    /// Digest recorded for `path`, or `""` when none was computed.
    pub fn lookup_digest(&self, path: &str) -> &str {
        self.digest.get(path).map_or("", String::as_str)
    }
}
