//! Wildcard asset paths.
//!
//! A configured path may contain `*` (any run of characters within one
//! segment) or `?` (one character) in any segment. Patterns are matched
//! segment by segment; a wildcard never crosses a `/`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{AssetError, AssetResult};
use crate::utils::path::canonical_relative;

/// Whether `path` contains wildcard characters.
#[inline]
pub fn is_pattern(path: &str) -> bool {
    path.contains(['*', '?'])
}

#[derive(Debug)]
enum Segment {
    Literal(String),
    Wild(Regex),
}

impl Segment {
    fn parse(segment: &str) -> AssetResult<Self> {
        if !is_pattern(segment) {
            return Ok(Self::Literal(segment.to_owned()));
        }
        let mut re = String::with_capacity(segment.len() + 8);
        re.push('^');
        for c in segment.chars() {
            match c {
                '*' => re.push_str("[^/]*"),
                '?' => re.push_str("[^/]"),
                c => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
        }
        re.push('$');
        Regex::new(&re)
            .map(Self::Wild)
            .map_err(|e| AssetError::Pattern(segment.to_owned(), e))
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Literal(lit) => lit == name,
            Self::Wild(re) => re.is_match(name),
        }
    }
}

/// A configured asset path, possibly containing wildcards.
#[derive(Debug)]
pub struct AssetPattern {
    source: String,
    segments: Vec<Segment>,
}

impl AssetPattern {
    /// Parse a configured path; it is stored in canonical spelling.
    pub fn new(path: &str) -> AssetResult<Self> {
        let source = canonical_relative(path);
        let segments = source
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect::<AssetResult<_>>()?;
        Ok(Self { source, segments })
    }

    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Match a slash-separated relative path.
    pub fn matches(&self, path: &str) -> bool {
        let path = canonical_relative(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        parts.len() == self.segments.len()
            && self
                .segments
                .iter()
                .zip(&parts)
                .all(|(seg, part)| seg.matches(part))
    }

    /// Files under `root` matching this pattern, as sorted relative paths.
    ///
    /// Unreadable directories are treated as empty.
    pub fn expand(&self, root: &Path) -> Vec<String> {
        let mut frontier: Vec<(String, PathBuf)> = vec![(String::new(), root.to_path_buf())];
        let last = self.segments.len().saturating_sub(1);

        for (i, segment) in self.segments.iter().enumerate() {
            let want_file = i == last;
            let mut next = Vec::new();
            for (rel, dir) in &frontier {
                for name in matching_entries(dir, segment, want_file) {
                    let child_rel = if rel.is_empty() {
                        name.clone()
                    } else {
                        format!("{rel}/{name}")
                    };
                    next.push((child_rel, dir.join(&name)));
                }
            }
            frontier = next;
        }

        let mut found: Vec<String> = frontier.into_iter().map(|(rel, _)| rel).collect();
        found.sort();
        found
    }
}

/// Names in `dir` accepted by `segment`, keeping files for the last segment
/// and directories otherwise.
fn matching_entries(dir: &Path, segment: &Segment, want_file: bool) -> Vec<String> {
    let keep = |path: &Path| {
        if want_file {
            path.is_file()
        } else {
            path.is_dir()
        }
    };

    match segment {
        Segment::Literal(name) => {
            if keep(&dir.join(name)) {
                vec![name.clone()]
            } else {
                vec![]
            }
        }
        Segment::Wild(_) => {
            let Ok(entries) = fs::read_dir(dir) else {
                return vec![];
            };
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().into_string().ok())
                .filter(|name| segment.matches(name) && keep(&dir.join(name)))
                .collect()
        }
    }
}

/// Resolve configured paths against `root`.
///
/// Literal paths pass through unchecked (the caller reports missing files);
/// patterns expand against the directory and must match at least one file.
/// The result is canonical, sorted and free of duplicates.
pub fn expand_all(paths: &[String], root: &Path) -> AssetResult<Vec<String>> {
    let mut resolved = BTreeSet::new();
    for path in paths {
        let pattern = AssetPattern::new(path)?;
        if pattern.is_literal() {
            resolved.insert(pattern.source);
            continue;
        }
        let found = pattern.expand(root);
        if found.is_empty() {
            return Err(AssetError::NoMatch {
                pattern: pattern.source,
                root: root.to_path_buf(),
            });
        }
        resolved.extend(found);
    }
    Ok(resolved.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("css/*.css"));
        assert!(is_pattern("js/app-?.js"));
        assert!(!is_pattern("css/style.css"));
    }

    #[test]
    fn test_matches() {
        let pattern = AssetPattern::new("assets/*/style-?.css").unwrap();
        assert!(pattern.matches("assets/theme/style-1.css"));
        assert!(pattern.matches("assets\\theme\\style-a.css"));
        assert!(pattern.matches("./assets/theme/style-1.css"));
        assert!(!pattern.matches("assets/theme/style-10.css"));
        assert!(!pattern.matches("assets/a/b/style-1.css"));
        assert!(!pattern.matches("assets/theme/style-1.js"));
    }

    #[test]
    fn test_literal_dots_escaped() {
        let pattern = AssetPattern::new("*.css").unwrap();
        assert!(pattern.matches("a.css"));
        assert!(!pattern.matches("a_css"));
    }

    #[test]
    fn test_expand_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "css/b.css");
        touch(dir.path(), "css/a.css");
        touch(dir.path(), "css/notes.txt");
        touch(dir.path(), "css/sub/c.css");

        let pattern = AssetPattern::new("css/*.css").unwrap();
        assert_eq!(pattern.expand(dir.path()), vec!["css/a.css", "css/b.css"]);
    }

    #[test]
    fn test_expand_directory_wildcard() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "themes/dark/main.css");
        touch(dir.path(), "themes/light/main.css");
        touch(dir.path(), "themes/light/extra.css");

        let pattern = AssetPattern::new("themes/*/main.css").unwrap();
        assert_eq!(
            pattern.expand(dir.path()),
            vec!["themes/dark/main.css", "themes/light/main.css"]
        );
    }

    #[test]
    fn test_expand_all_dedup() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "js/a.js");
        touch(dir.path(), "js/b.js");

        let paths = vec!["js/b.js".to_string(), "js/*.js".into(), "js\\a.js".into()];
        let resolved = expand_all(&paths, dir.path()).unwrap();
        assert_eq!(resolved, vec!["js/a.js", "js/b.js"]);
    }

    #[test]
    fn test_expand_all_no_match() {
        let dir = TempDir::new().unwrap();
        let err = expand_all(&["js/*.js".to_string()], dir.path()).unwrap_err();
        assert!(matches!(err, AssetError::NoMatch { pattern, .. } if pattern == "js/*.js"));
    }

    #[test]
    fn test_expand_all_canonical_spelling() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "css/a.css");

        let paths = vec![
            "./css/a.css".to_string(),
            "css//a.css".into(),
            "./css/*.css".into(),
        ];
        let resolved = expand_all(&paths, dir.path()).unwrap();
        assert_eq!(resolved, vec!["css/a.css"]);
    }

    #[test]
    fn test_expand_all_literal_unchecked() {
        let dir = TempDir::new().unwrap();
        let resolved = expand_all(&["missing.css".to_string()], dir.path()).unwrap();
        assert_eq!(resolved, vec!["missing.css"]);
    }
}
