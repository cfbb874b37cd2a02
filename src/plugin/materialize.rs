//! Post-build: write final asset content and rename it to its public name.

use std::fs;

use crate::asset::{AssetType, DigestCache, expand_all};
use crate::error::{AssetError, AssetResult};
use crate::host::HostConfig;
use crate::utils::path::join_relative;

use super::MinifyPlugin;

/// Write and rename every configured asset of `kind` in the site directory.
///
/// Returns the new site-relative names, in processing order.
pub(super) fn materialize_assets(
    plugin: &MinifyPlugin,
    kind: AssetType,
    host: &HostConfig,
    cache: &DigestCache,
) -> AssetResult<Vec<String>> {
    let config = plugin.config();
    let paths = expand_all(config.files(kind), &host.site_dir)?;

    let mut written = Vec::with_capacity(paths.len());
    for rel in paths {
        let built = join_relative(&host.site_dir, &rel);
        if !built.is_file() {
            let err = fs::metadata(&built).err().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a file")
            });
            return Err(AssetError::MissingOutput(built, err));
        }

        let content = if config.cache_safe {
            cache.lookup_content(&rel)?.to_owned()
        } else {
            let source = fs::read_to_string(&built)
                .map_err(|e| AssetError::MissingOutput(built.clone(), e))?;
            if config.minify_enabled(kind) {
                (kind.descriptor().minify)(&source).map_err(|e| AssetError::Minify {
                    kind,
                    path: rel.clone(),
                    message: e.to_string(),
                })?
            } else {
                source
            }
        };
        fs::write(&built, content).map_err(|e| AssetError::Write(built.clone(), e))?;

        let name = plugin.asset_name(&rel, kind, cache.lookup_digest(&rel));
        if name != rel {
            let target = join_relative(&host.site_dir, &name);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| AssetError::Write(parent.to_path_buf(), e))?;
            }
            fs::rename(&built, &target).map_err(|source| AssetError::Rename {
                from: built.clone(),
                to: target.clone(),
                source,
            })?;
        }
        written.push(name);
    }
    Ok(written)
}
