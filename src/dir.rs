use std::{
    fs::File,
    io::{self, BufReader},
    path::{Component, Path, PathBuf},
};

use crate::{
    config::BundleConfig,
    error::AssetError,
    source::{not_found, AssetSource, AssetStream, ResourceId},
};

/// A bundle unpacked on disk, laid out as described by a [`BundleConfig`].
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    config: BundleConfig,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>, config: BundleConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Opens the bundle at `root`, reading `bundle.toml` if there is one.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let root = root.into();
        let config_path = root.join(BundleConfig::FILE_NAME);
        let config = if config_path.is_file() {
            BundleConfig::load(&config_path)?
        } else {
            log::debug!(
                "no {} under {}, using defaults",
                BundleConfig::FILE_NAME,
                root.display()
            );
            BundleConfig::default()
        };
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    fn open_under(&self, dir: &Path, name: &str) -> io::Result<AssetStream<'_>> {
        let relative = bundle_relative(name)?;
        let file = File::open(self.root.join(dir).join(relative))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

impl AssetSource for DirSource {
    fn open_asset(&self, name: &str) -> io::Result<AssetStream<'_>> {
        self.open_under(&self.config.assets_dir, name)
    }

    fn open_raw(&self, id: ResourceId) -> io::Result<AssetStream<'_>> {
        let entry = self
            .config
            .raw_entry(id)
            .ok_or_else(|| not_found(format_args!("raw resource {id}")))?;
        self.open_under(&self.config.raw_dir, &entry.file)
    }

    fn raw_id(&self, name: &str) -> Option<ResourceId> {
        self.config.raw_id(name)
    }
}

/// Turns a `/`-separated bundle name into a relative path that cannot climb
/// out of its directory.
pub(crate) fn bundle_relative(name: &str) -> io::Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("`{name}` points outside the bundle"),
                ))
            }
        }
    }
    if relative.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{name}` does not name a file"),
        ));
    }
    Ok(relative)
}
