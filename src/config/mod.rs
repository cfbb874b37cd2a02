//! Plugin configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── files      # js_files / css_files (one path or a list)
//! ├── html       # htmlmin_opts table
//! ├── types/     # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs     # MinifyConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! minify_html = true
//! minify_js = true
//! minify_css = true
//! js_files = ["js/app.js"]
//! css_files = "css/style.css"
//! cache_safe = true
//!
//! [htmlmin_opts]
//! remove_comments = true
//! ```

mod files;
mod html;
pub mod types;

pub use files::FileList;
pub use html::HtmlMinifyOptions;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::asset::{AssetType, NamingMode};
use crate::log;
use crate::utils::path::unsafe_component;

const HTMLMIN_OPTS: &str = "htmlmin_opts";

// ============================================================================
// root configuration
// ============================================================================

/// Plugin options, immutable for the duration of a build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Minify rendered pages and `.html` templates.
    pub minify_html: bool,

    /// Minify the files listed in `js_files`.
    pub minify_js: bool,

    /// Minify the files listed in `css_files`.
    pub minify_css: bool,

    /// JS assets to process (relative to docs/site dir).
    pub js_files: FileList,

    /// CSS assets to process (relative to docs/site dir).
    pub css_files: FileList,

    /// HTML minifier overrides.
    pub htmlmin_opts: HtmlMinifyOptions,

    /// Embed a content digest in asset names.
    #[serde(alias = "cache_safe_extras")]
    pub cache_safe: bool,

    /// Where `[.hash][.min]` goes in a filename.
    pub naming: NamingMode,
}

impl MinifyConfig {
    /// Parse, report ignored keys and validate.
    ///
    /// Unknown keys are warnings; invalid paths are errors.
    pub fn load(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        Self::print_ignored_warning(&ignored);
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file. See [`MinifyConfig::load`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::load(&content)
    }

    /// Parse configuration from TOML string, without validation.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown keys.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Warn about each ignored key.
    fn print_ignored_warning(ignored: &[String]) {
        for key in ignored {
            match key.strip_prefix(HTMLMIN_OPTS).and_then(|k| k.strip_prefix('.')) {
                Some(opt) => log!("warning"; "htmlmin option '{}' not recognized", opt),
                None => log!("warning"; "minify option '{}' not recognized", key),
            }
        }
    }

    // ========================================================================
    // per-type accessors
    // ========================================================================

    /// Configured paths for an asset type.
    pub fn files(&self, kind: AssetType) -> &[String] {
        match kind {
            AssetType::Js => self.js_files.as_slice(),
            AssetType::Css => self.css_files.as_slice(),
        }
    }

    /// Whether minification is on for an asset type.
    pub fn minify_enabled(&self, kind: AssetType) -> bool {
        match kind {
            AssetType::Js => self.minify_js,
            AssetType::Css => self.minify_css,
        }
    }

    /// Whether an asset type is processed at all.
    ///
    /// A disabled type leaves references and files untouched.
    pub fn is_enabled(&self, kind: AssetType) -> bool {
        self.minify_enabled(kind) || self.cache_safe
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the file lists.
    ///
    /// Collects all errors and returns them at once; warnings are printed.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_into(&mut diag);
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        for kind in AssetType::ALL {
            let field = FieldPath::new(kind.descriptor().files_key);
            let files = self.files(kind);

            for (idx, path) in files.iter().enumerate() {
                if path.is_empty() {
                    diag.error(field, format!("[{idx}] empty path"));
                } else if let Some(reason) = unsafe_component(path) {
                    diag.error_with_hint(
                        field,
                        format!("[{idx}] path '{path}': {reason}"),
                        "paths are relative to the docs directory",
                    );
                }
            }

            if !files.is_empty() && !self.is_enabled(kind) {
                diag.warn(
                    field,
                    format!(
                        "{} files listed but neither minify_{} nor cache_safe is set",
                        kind,
                        kind.ext()
                    ),
                );
            } else if files.is_empty() && self.minify_enabled(kind) {
                diag.warn(field, format!("minify_{} is set but no files are listed", kind.ext()));
            }
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown keys (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> MinifyConfig {
    let (parsed, ignored) = MinifyConfig::parse_with_ignored(content).unwrap();
    assert!(ignored.is_empty(), "test config has unknown keys: {:?}", ignored);
    parsed
}

// ============================================================================
// tests
// ============================================================================
