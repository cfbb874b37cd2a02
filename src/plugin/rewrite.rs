//! Pre-build: point extra-asset references at the minified/hashed names.

use std::fs;
use std::path::PathBuf;

use crate::asset::{AssetPattern, AssetType, DigestCache, sha384_hex};
use crate::debug;
use crate::error::{AssetError, AssetResult};
use crate::host::HostConfig;
use crate::utils::path::{canonical_relative, join_relative};

use super::MinifyPlugin;

/// Rewrite matching entries of the host's extra list for `kind`.
///
/// In cache-safe mode the source is read, minified (if enabled) and digested
/// first, and the result recorded in `cache` under the canonical original
/// path. Rewritten entries are canonical too.
/// Returns the number of rewritten entries.
pub(super) fn rewrite_references(
    plugin: &MinifyPlugin,
    kind: AssetType,
    host: &mut HostConfig,
    cache: &mut DigestCache,
) -> AssetResult<usize> {
    let config = plugin.config();
    let patterns = config
        .files(kind)
        .iter()
        .map(|p| AssetPattern::new(p))
        .collect::<AssetResult<Vec<_>>>()?;

    let mut rewritten = Vec::new();
    for (idx, entry) in host.extras(kind).iter().enumerate() {
        let entry = canonical_relative(entry);
        if !patterns.iter().any(|p| p.matches(&entry)) {
            continue;
        }

        let digest = if config.cache_safe {
            let content = final_content(config.minify_enabled(kind), kind, host, &entry)?;
            let digest = sha384_hex(&content);
            cache.record(entry.as_str(), content, digest.clone());
            digest
        } else {
            String::new()
        };

        rewritten.push((idx, plugin.asset_name(&entry, kind, &digest)));
    }

    let count = rewritten.len();
    let extras = host.extras_mut(kind);
    for (idx, name) in rewritten {
        debug!("rewrite"; "{}: {} → {}", kind.descriptor().extra_key, extras[idx], name);
        extras[idx] = name;
    }
    Ok(count)
}

/// Read a source asset and minify it if requested.
fn final_content(
    minify: bool,
    kind: AssetType,
    host: &HostConfig,
    rel: &str,
) -> AssetResult<String> {
    let path = locate_source(host, rel);
    let content =
        fs::read_to_string(&path).map_err(|e| AssetError::MissingSource(path.clone(), e))?;
    if !minify {
        return Ok(content);
    }
    (kind.descriptor().minify)(&content).map_err(|e| AssetError::Minify {
        kind,
        path: rel.to_owned(),
        message: e.to_string(),
    })
}

/// Theme override if present there, else the docs directory.
fn locate_source(host: &HostConfig, rel: &str) -> PathBuf {
    host.source_dirs()
        .map(|dir| join_relative(dir, rel))
        .find(|path| path.is_file())
        .unwrap_or_else(|| join_relative(&host.docs_dir, rel))
}
