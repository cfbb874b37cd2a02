//! Extra-minify - HTML/JS/CSS minification for documentation-site builds.
//!
//! The plugin hooks into a host static-site build:
//!
//! - rendered pages and `.html` templates are minified in memory
//! - configured extra scripts and stylesheets are minified and renamed
//!   (`style.css` → `style.min.css`, or `style.<hash>.min.css` when
//!   cache-safe naming is on), and the host's reference lists are rewritten
//!   to match
//!
//! ```ignore
//! use extra_minify::{AssetType, BuildHooks, HostConfig, MinifyPlugin};
//!
//! let mut plugin = MinifyPlugin::from_toml(&std::fs::read_to_string("minify.toml")?)?;
//! let mut host = HostConfig::new("docs", "site").with_extras(AssetType::Css, &["css/style.css"]);
//! plugin.on_pre_build(&mut host)?;
//! // host renders pages through on_post_page and writes the site
//! plugin.on_post_build(&host)?;
//! ```

pub mod logger;

pub mod asset;
pub mod config;
pub mod error;
pub mod host;
pub mod html;
pub mod plugin;
pub mod utils;

pub use asset::AssetType;
pub use config::MinifyConfig;
pub use error::AssetError;
pub use host::{BuildHooks, HostConfig, PageInfo};
pub use plugin::MinifyPlugin;
