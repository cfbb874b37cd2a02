//! Relative path handling.
//!
//! Asset paths travel through the plugin as slash-separated strings relative
//! to the docs or site directory. These helpers keep that representation
//! consistent:
//! - `normalize_slashes` - backslash to forward slash
//! - `canonical_relative` - one spelling per relative path
//! - `join_relative` - resolve a slash path under a base directory
//! - `unsafe_component` - reject `..` and absolute paths

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Normalize path separators to `/`.
///
/// Borrows when the input already uses forward slashes.
#[inline]
pub fn normalize_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Canonical spelling of a relative asset path.
///
/// Forward slashes only, with empty and `.` segments dropped, so
/// `./css//style.css` and `css\\style.css` both become `css/style.css`.
/// Digest cache keys and renamed paths are always in this form.
pub fn canonical_relative(path: &str) -> String {
    normalize_slashes(path)
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a slash-separated relative path onto a base directory.
///
/// Each segment is pushed separately so the result uses native separators.
pub fn join_relative(base: &Path, rel: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for segment in normalize_slashes(rel).split('/') {
        if !segment.is_empty() && segment != "." {
            path.push(segment);
        }
    }
    path
}

/// Describe why a configured path is unsafe, if it is.
///
/// Configured asset paths must stay inside the docs/site directories.
pub fn unsafe_component(path: &str) -> Option<&'static str> {
    let normalized = normalize_slashes(path);
    if normalized.starts_with('/') {
        return Some("absolute paths not allowed");
    }
    for comp in Path::new(normalized.as_ref()).components() {
        match comp {
            Component::ParentDir => return Some("parent directory '..' not allowed"),
            Component::Prefix(_) | Component::RootDir => {
                return Some("absolute paths not allowed");
            }
            _ => {}
        }
    }
    None
}
