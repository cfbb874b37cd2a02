//! Host build system interface.
//!
//! The host owns the build: it loads its own configuration, renders pages,
//! writes the output tree and calls [`BuildHooks`] at fixed points:
//!
//! | Hook               | Timing                                   |
//! |--------------------|------------------------------------------|
//! | `on_pre_build`     | before any page is rendered              |
//! | `on_post_page`     | after each page is rendered              |
//! | `on_post_template` | after each auxiliary template (404 page) |
//! | `on_post_build`    | after the full output tree is written    |

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::asset::AssetType;

/// The slice of host configuration the plugin reads and rewrites.
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    /// Documentation source directory.
    pub docs_dir: PathBuf,
    /// Built site output directory.
    pub site_dir: PathBuf,
    /// Theme override directory, searched before `docs_dir`.
    pub theme_dir: Option<PathBuf>,
    /// Script references emitted into every page.
    pub extra_javascript: Vec<String>,
    /// Stylesheet references emitted into every page.
    pub extra_css: Vec<String>,
}

impl HostConfig {
    pub fn new(docs_dir: impl Into<PathBuf>, site_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            site_dir: site_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_theme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.theme_dir = Some(dir.into());
        self
    }

    pub fn with_extras(mut self, kind: AssetType, extras: &[&str]) -> Self {
        *self.extras_mut(kind) = extras.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    /// Extra-asset reference list for an asset type.
    pub fn extras(&self, kind: AssetType) -> &[String] {
        match kind {
            AssetType::Js => &self.extra_javascript,
            AssetType::Css => &self.extra_css,
        }
    }

    pub fn extras_mut(&mut self, kind: AssetType) -> &mut Vec<String> {
        match kind {
            AssetType::Js => &mut self.extra_javascript,
            AssetType::Css => &mut self.extra_css,
        }
    }

    /// Source directories in lookup order.
    pub fn source_dirs(&self) -> impl Iterator<Item = &Path> {
        self.theme_dir
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.docs_dir.as_path()))
    }
}

/// A rendered page, as seen by `on_post_page`.
#[derive(Debug, Clone, Copy)]
pub struct PageInfo<'a> {
    /// Source file, relative to the docs directory.
    pub src_path: &'a str,
}

/// Build lifecycle hooks. Every hook defaults to a no-op.
pub trait BuildHooks {
    /// Called once before rendering; may rewrite the host configuration.
    fn on_pre_build(&mut self, config: &mut HostConfig) -> Result<()> {
        let _ = config;
        Ok(())
    }

    /// Called with each rendered page; returns the content to write.
    fn on_post_page(
        &self,
        output: String,
        page: &PageInfo<'_>,
        config: &HostConfig,
    ) -> Result<String> {
        let _ = (page, config);
        Ok(output)
    }

    /// Called with each rendered auxiliary template; returns the content to write.
    fn on_post_template(
        &self,
        output: String,
        template_name: &str,
        config: &HostConfig,
    ) -> Result<String> {
        let _ = (template_name, config);
        Ok(output)
    }

    /// Called once after the output tree has been written.
    fn on_post_build(&mut self, config: &HostConfig) -> Result<()> {
        let _ = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;
    impl BuildHooks for Noop {}

    #[test]
    fn test_extras_by_type() {
        let mut host = HostConfig::new("docs", "site")
            .with_extras(AssetType::Js, &["js/a.js"])
            .with_extras(AssetType::Css, &["css/a.css", "css/b.css"]);
        assert_eq!(host.extras(AssetType::Js), ["js/a.js"]);
        assert_eq!(host.extras(AssetType::Css).len(), 2);

        host.extras_mut(AssetType::Js)[0] = "js/a.min.js".into();
        assert_eq!(host.extra_javascript, ["js/a.min.js"]);
    }

    #[test]
    fn test_source_dirs_order() {
        let host = HostConfig::new("docs", "site");
        let dirs: Vec<_> = host.source_dirs().collect();
        assert_eq!(dirs, [Path::new("docs")]);

        let host = host.with_theme_dir("overrides");
        let dirs: Vec<_> = host.source_dirs().collect();
        assert_eq!(dirs, [Path::new("overrides"), Path::new("docs")]);
    }

    #[test]
    fn test_default_hooks_pass_through() {
        let mut hooks = Noop;
        let mut host = HostConfig::new("docs", "site").with_extras(AssetType::Css, &["a.css"]);
        hooks.on_pre_build(&mut host).unwrap();
        assert_eq!(host.extra_css, ["a.css"]);

        let page = PageInfo { src_path: "index.md" };
        let out = hooks.on_post_page("<p> x </p>".into(), &page, &host).unwrap();
        assert_eq!(out, "<p> x </p>");
        hooks.on_post_build(&host).unwrap();
    }
}
