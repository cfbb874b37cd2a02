//! The minify plugin.
//!
//! ```text
//! on_pre_build      rewrite::rewrite_references   (per enabled asset type)
//!       │                 └── fills DigestCache when cache-safe
//! on_post_page      html::minify_page
//! on_post_template  html::minify_page             (`.html` templates only)
//! on_post_build     materialize::materialize_assets (per enabled asset type)
//!                         └── drains DigestCache
//! ```
//!
//! The digest cache lives in a [`BuildState`] created by `on_pre_build` and
//! consumed by `on_post_build`, so a plugin reused across builds never sees
//! entries from a previous one.

mod materialize;
mod rewrite;


use anyhow::{Context, Result};

use crate::asset::{AssetType, DigestCache, minified_asset_name};
use crate::config::MinifyConfig;
use crate::host::{BuildHooks, HostConfig, PageInfo};
use crate::{debug, html, log};

/// State shared between the two phases of a single build.
#[derive(Debug, Default)]
pub struct BuildState {
    pub cache: DigestCache,
}

/// HTML/JS/CSS minification plugin.
#[derive(Debug)]
pub struct MinifyPlugin {
    config: MinifyConfig,
    build: Option<BuildState>,
}

impl MinifyPlugin {
    pub fn new(config: MinifyConfig) -> Self {
        Self {
            config,
            build: None,
        }
    }

    /// Load and validate the plugin config from TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(Self::new(MinifyConfig::load(content)?))
    }

    pub fn config(&self) -> &MinifyConfig {
        &self.config
    }

    /// State of the build in progress, between pre-build and post-build.
    pub fn build_state(&self) -> Option<&BuildState> {
        self.build.as_ref()
    }

    /// Public name of an asset for this configuration.
    ///
    /// The single naming entry point for both phases.
    pub fn asset_name(&self, path: &str, kind: AssetType, digest: &str) -> String {
        minified_asset_name(
            path,
            kind,
            self.config.minify_enabled(kind),
            digest,
            self.config.naming,
        )
    }

    /// Minify page markup, or return it unchanged when `minify_html` is off.
    fn minify_html_page(&self, output: String, what: &str) -> Result<String> {
        if !self.config.minify_html {
            return Ok(output);
        }
        html::minify_page(&output, &self.config.htmlmin_opts)
            .with_context(|| format!("failed to minify `{what}`"))
    }
}

impl BuildHooks for MinifyPlugin {
    fn on_pre_build(&mut self, config: &mut HostConfig) -> Result<()> {
        self.build = None;
        let mut state = BuildState::default();

        for kind in AssetType::ALL {
            if !self.config.is_enabled(kind) {
                continue;
            }
            let rewritten = rewrite::rewrite_references(self, kind, config, &mut state.cache)
                .with_context(|| {
                    format!("failed to rewrite `{}` entries", kind.descriptor().extra_key)
                })?;
            debug!("minify"; "{} {} reference(s) rewritten", rewritten, kind);
        }

        self.build = Some(state);
        Ok(())
    }

    fn on_post_page(
        &self,
        output: String,
        page: &PageInfo<'_>,
        _config: &HostConfig,
    ) -> Result<String> {
        self.minify_html_page(output, page.src_path)
    }

    fn on_post_template(
        &self,
        output: String,
        template_name: &str,
        _config: &HostConfig,
    ) -> Result<String> {
        if html::is_html_template(template_name) {
            self.minify_html_page(output, template_name)
        } else {
            Ok(output)
        }
    }

    fn on_post_build(&mut self, config: &HostConfig) -> Result<()> {
        let state = self.build.take().unwrap_or_default();

        for kind in AssetType::ALL {
            if !self.config.is_enabled(kind) {
                continue;
            }
            let written = materialize::materialize_assets(self, kind, config, &state.cache)
                .with_context(|| format!("failed to write {} assets", kind))?;
            for name in &written {
                log!("minify"; "{}", name);
            }
        }
        Ok(())
    }
}
