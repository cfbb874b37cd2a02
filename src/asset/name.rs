//! Minified/hashed asset names.
//!
//! The same function names an asset in the host's reference list (pre-build)
//! and on disk (post-build). Both phases must call it with the same relative
//! path and digest, otherwise pages link to files that do not exist.

use serde::{Deserialize, Serialize};

use super::AssetType;

/// Number of digest characters embedded in a cache-safe filename.
pub const HASH_PREFIX_LEN: usize = 6;

/// Where the `[.hash][.min]` marker is inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    /// Before the first occurrence of `.<ext>` anywhere in the path.
    ///
    /// `my.css.file.css` becomes `my.min.css.file.css`.
    #[default]
    Legacy,
    /// Before the final extension of the last path segment.
    ///
    /// `my.css.file.css` becomes `my.css.file.min.css`.
    Extension,
}

/// Build the `[.hash][.min]` marker.
fn marker(minify: bool, digest: &str) -> String {
    let mut marker = String::new();
    if !digest.is_empty() {
        marker.push('.');
        marker.extend(digest.chars().take(HASH_PREFIX_LEN));
    }
    if minify {
        marker.push_str(".min");
    }
    marker
}

/// Add `[.hash].min` to an asset path.
///
/// `digest` is the full hex digest or empty when hashing is off. With
/// neither a digest nor minification the path is returned unchanged.
pub fn minified_asset_name(
    path: &str,
    kind: AssetType,
    minify: bool,
    digest: &str,
    mode: NamingMode,
) -> String {
    let marker = marker(minify, digest);
    if marker.is_empty() {
        return path.to_owned();
    }

    let ext = format!(".{}", kind.ext());
    match mode {
        NamingMode::Legacy => path.replacen(&ext, &format!("{marker}{ext}"), 1),
        NamingMode::Extension => insert_before_extension(path, &ext, &marker),
    }
}

/// Insert `marker` before the extension of the last path segment.
fn insert_before_extension(path: &str, ext: &str, marker: &str) -> String {
    let at = if path.ends_with(ext) {
        Some(path.len() - ext.len())
    } else {
        let name_start = path.rfind('/').map_or(0, |i| i + 1);
        path[name_start..]
            .rfind('.')
            .filter(|&i| i > 0)
            .map(|i| name_start + i)
    };

    match at {
        Some(at) => format!("{}{marker}{}", &path[..at], &path[at..]),
        None => format!("{path}{marker}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "54ca0a60263b2bf48ec6c74bb27ff3bdd000442f73e0b78811a5c097ac1d2b0e7b8fea17fe16f9d9618b76566a3ea171";

    fn legacy(path: &str, kind: AssetType, minify: bool, digest: &str) -> String {
        minified_asset_name(path, kind, minify, digest, NamingMode::Legacy)
    }

    #[test]
    fn test_all_combinations() {
        let path = "extra_assets/css/style.css";
        assert_eq!(legacy(path, AssetType::Css, false, ""), path);
        assert_eq!(
            legacy(path, AssetType::Css, true, ""),
            "extra_assets/css/style.min.css"
        );
        assert_eq!(
            legacy(path, AssetType::Css, false, DIGEST),
            "extra_assets/css/style.54ca0a.css"
        );
        assert_eq!(
            legacy(path, AssetType::Css, true, DIGEST),
            "extra_assets/css/style.54ca0a.min.css"
        );
    }

    #[test]
    fn test_js_extension() {
        assert_eq!(legacy("js/script.js", AssetType::Js, true, ""), "js/script.min.js");
        // Extension of the other type is left alone
        assert_eq!(legacy("js/script.js", AssetType::Css, true, ""), "js/script.js");
    }

    #[test]
    fn test_legacy_first_occurrence() {
        assert_eq!(
            legacy("my.css.file.css", AssetType::Css, true, ""),
            "my.min.css.file.css"
        );
        // `.js` also occurs inside `.json`
        assert_eq!(legacy("data.json.js", AssetType::Js, true, ""), "data.min.json.js");
    }

    #[test]
    fn test_extension_mode() {
        let name = |p: &str, kind, digest| {
            minified_asset_name(p, kind, true, digest, NamingMode::Extension)
        };
        assert_eq!(name("my.css.file.css", AssetType::Css, ""), "my.css.file.min.css");
        assert_eq!(name("data.json.js", AssetType::Js, ""), "data.json.min.js");
        assert_eq!(name("a.css/style.css", AssetType::Css, DIGEST), "a.css/style.54ca0a.min.css");
        // Unexpected extension: marker goes before whatever the file has
        assert_eq!(name("lib/app.mjs", AssetType::Js, ""), "lib/app.min.mjs");
        assert_eq!(name("lib/.hidden", AssetType::Js, ""), "lib/.hidden.min");
        assert_eq!(name("lib/app", AssetType::Js, ""), "lib/app.min");
    }

    #[test]
    fn test_modes_agree_on_ordinary_paths() {
        for path in ["style.css", "css/style.css", "deep/nested/dir/theme.css"] {
            for minify in [false, true] {
                for digest in ["", DIGEST] {
                    assert_eq!(
                        minified_asset_name(path, AssetType::Css, minify, digest, NamingMode::Legacy),
                        minified_asset_name(path, AssetType::Css, minify, digest, NamingMode::Extension),
                    );
                }
            }
        }
    }

    #[test]
    fn test_short_digest() {
        assert_eq!(legacy("a.css", AssetType::Css, false, "abc"), "a.abc.css");
    }

    #[test]
    fn test_naming_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            naming: NamingMode,
        }
        let w: Wrapper = toml::from_str(r#"naming = "extension""#).unwrap();
        assert_eq!(w.naming, NamingMode::Extension);
        assert_eq!(NamingMode::default(), NamingMode::Legacy);
    }
}
