//! `js_files` / `css_files` option.
//!
//! Accepts a single path or a list of paths; both are normalized to a list
//! of slash-separated relative paths on load.
//!
//! # Example
//!
//! ```toml
//! js_files = "js/app.js"
//! css_files = ["css/style.css", "css/themes/*.css"]
//! ```

use serde::{Deserialize, Serialize};

use crate::utils::path::normalize_slashes;

/// Raw option shape: one path or many.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FileListRepr {
    One(String),
    Many(Vec<String>),
}

/// Asset paths eligible for minification/renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FileListRepr", into = "Vec<String>")]
pub struct FileList(Vec<String>);

impl FileList {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            paths
                .into_iter()
                .map(|p| normalize_slashes(p.as_ref()).into_owned())
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<FileListRepr> for FileList {
    fn from(repr: FileListRepr) -> Self {
        match repr {
            FileListRepr::One(path) => Self::new([path]),
            FileListRepr::Many(paths) => Self::new(paths),
        }
    }
}

impl From<FileList> for Vec<String> {
    fn from(list: FileList) -> Self {
        list.0
    }
}
