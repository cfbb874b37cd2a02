//! Asset type definitions.
//!
//! JS and CSS handling differ only in the minifier, the host reference list
//! and the file extension, so each type maps to a static [`AssetDescriptor`].

use std::fmt;

use super::minify::{MinifyError, minify_css, minify_js};

/// Kind of extra asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    /// JavaScript, referenced through `extra_javascript`.
    Js,
    /// Stylesheet, referenced through `extra_css`.
    Css,
}

/// Per-type handling table.
#[derive(Debug)]
pub struct AssetDescriptor {
    /// File extension without the leading dot.
    pub ext: &'static str,
    /// Name of the host's extra-asset reference list.
    pub extra_key: &'static str,
    /// Name of the plugin option listing files of this type.
    pub files_key: &'static str,
    /// Minifier for this type.
    pub minify: fn(&str) -> Result<String, MinifyError>,
}

static JS: AssetDescriptor = AssetDescriptor {
    ext: "js",
    extra_key: "extra_javascript",
    files_key: "js_files",
    minify: minify_js,
};

static CSS: AssetDescriptor = AssetDescriptor {
    ext: "css",
    extra_key: "extra_css",
    files_key: "css_files",
    minify: minify_css,
};

impl AssetType {
    /// All asset types, in processing order.
    pub const ALL: [Self; 2] = [Self::Js, Self::Css];

    /// Look up the handling table for this type.
    #[inline]
    pub fn descriptor(self) -> &'static AssetDescriptor {
        match self {
            Self::Js => &JS,
            Self::Css => &CSS,
        }
    }

    #[inline]
    pub fn ext(self) -> &'static str {
        self.descriptor().ext
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}
