//! Asset processing errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::asset::AssetType;

/// Errors raised while rewriting references or materializing assets.
///
/// Every variant that concerns a file carries its path so the host can
/// report which asset aborted the build.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("source file `{}` not found", .0.display())]
    MissingSource(PathBuf, #[source] std::io::Error),

    #[error("built file `{}` not found", .0.display())]
    MissingOutput(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to rename `{}` to `{}`", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content requested from the digest cache before it was recorded.
    ///
    /// Indicates the post-build phase ran without a matching pre-build.
    #[error("no cached content for `{0}`: post-build ran without pre-build recording it")]
    KeyNotFound(String),

    #[error("failed to minify {kind} asset `{path}`: {message}")]
    Minify {
        kind: AssetType,
        path: String,
        message: String,
    },

    #[error("pattern `{pattern}` matched no files under `{}`", .root.display())]
    NoMatch { pattern: String, root: PathBuf },

    #[error("invalid pattern segment `{0}`")]
    Pattern(String, #[source] regex::Error),
}

pub type AssetResult<T> = Result<T, AssetError>;
