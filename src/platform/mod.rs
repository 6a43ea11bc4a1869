#[cfg(not(target_family="wasm"))]
mod native;
#[cfg(not(target_family="wasm"))]
use native::*;

#[cfg(target_family="wasm")]
mod wasm;
#[cfg(target_family="wasm")]
use wasm::*;

use std::{
    io,
    path::{Path, PathBuf},
};

use futures::future::try_join_all;

use crate::{config::BundleConfig, dir::bundle_relative, error::AssetError, memory::MemorySource};

/// Loads one whole file of a bundle. On the web `path` is fetched relative to
/// the site root.
pub async fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    read_file_impl(path).await
}

/// Fetches the listed assets and every raw resource in `config` into memory,
/// so they can be read synchronously afterwards.
pub async fn preload(
    base: impl AsRef<Path>,
    config: &BundleConfig,
    assets: &[&str],
) -> Result<MemorySource, AssetError> {
    let base = base.as_ref();
    let asset_reads = assets.iter().map(|&name| async move {
        let bytes = fetch(base, &config.assets_dir, name)
            .await
            .map_err(|e| AssetError::asset(name, e))?;
        Ok::<_, AssetError>((name, bytes))
    });
    let raw_reads = config.raw.iter().map(|entry| async move {
        let bytes = fetch(base, &config.raw_dir, &entry.file)
            .await
            .map_err(|e| AssetError::raw(entry.id, e))?;
        Ok::<_, AssetError>((entry, bytes))
    });
    let (assets, raw) = futures::try_join!(try_join_all(asset_reads), try_join_all(raw_reads))?;

    let mut source = MemorySource::new();
    for (name, bytes) in assets {
        source.insert_asset(name, bytes);
    }
    for (entry, bytes) in raw {
        source.insert_raw_entry(entry, bytes);
    }
    log::debug!("preloaded {} files from {}", source.len(), base.display());
    Ok(source)
}

async fn fetch(base: &Path, dir: &Path, name: &str) -> io::Result<Vec<u8>> {
    let path: PathBuf = base.join(dir).join(bundle_relative(name)?);
    read_file(&path).await
}
