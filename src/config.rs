use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{error::AssetError, source::ResourceId};

/// Layout of an on-disk bundle, read from `bundle.toml`.
///
/// ```toml
/// assets_dir = "assets"
/// raw_dir = "res/raw"
///
/// [[raw]]
/// id = 0x7f0e0000
/// name = "button_choose"
/// file = "button_choose.ogg"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    pub assets_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub raw: Vec<RawEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    pub id: ResourceId,
    pub name: String,
    /// Path relative to `raw_dir` (or the fetch base on the web).
    pub file: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            raw_dir: PathBuf::from("raw"),
            raw: Vec::new(),
        }
    }
}

impl BundleConfig {
    pub const FILE_NAME: &'static str = "bundle.toml";

    pub fn from_toml(text: &str) -> Result<Self, AssetError> {
        Self::parse(text, Path::new("<inline>"))
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = fs::read_to_string(path).map_err(|e| AssetError::Config {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, AssetError> {
        let config: BundleConfig = toml::from_str(text).map_err(|e| AssetError::Config {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        config.validate().map_err(|message| AssetError::Config {
            path: path.to_owned(),
            message,
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for entry in &self.raw {
            if !ids.insert(entry.id) {
                return Err(format!("raw resource id {} is listed twice", entry.id));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(format!("raw resource name `{}` is listed twice", entry.name));
            }
            if entry.file.is_empty() {
                return Err(format!("raw resource `{}` has no file", entry.name));
            }
        }
        Ok(())
    }

    pub fn raw_entry(&self, id: ResourceId) -> Option<&RawEntry> {
        self.raw.iter().find(|entry| entry.id == id)
    }

    pub fn raw_id(&self, name: &str) -> Option<ResourceId> {
        self.raw
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_config_uses_default_layout() {
        let config = BundleConfig::from_toml("").unwrap();
        assert_eq!(config, BundleConfig::default());
        assert_eq!(config.assets_dir, Path::new("assets"));
        assert_eq!(config.raw_dir, Path::new("raw"));
    }

    #[test]
    fn raw_table_resolves_both_ways() {
        let config = BundleConfig::from_toml(
            r#"
            raw_dir = "res/raw"

            [[raw]]
            id = 0x7f0e0000
            name = "button_choose"
            file = "button_choose.ogg"

            [[raw]]
            id = 0x7f0e0001
            name = "licenses"
            file = "licenses.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.raw_dir, Path::new("res/raw"));
        assert_eq!(config.raw_id("licenses"), Some(ResourceId(0x7f0e0001)));
        assert_eq!(config.raw_id("nope"), None);
        assert_eq!(
            config.raw_entry(ResourceId(0x7f0e0000)).map(|e| e.file.as_str()),
            Some("button_choose.ogg")
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = BundleConfig::from_toml(
            r#"
            [[raw]]
            id = 1
            name = "a"
            file = "a.txt"

            [[raw]]
            id = 1
            name = "b"
            file = "b.txt"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = BundleConfig::from_toml("assets_dir = [").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        let err = BundleConfig::from_toml("colour = \"red\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
