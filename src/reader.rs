use std::io::BufReader;

use image::DynamicImage;
use serde::de::DeserializeOwned;

use crate::{
    error::AssetError,
    source::{AssetSource, ResourceId},
    util::{copy_in_chunks, read_lines_normalized},
};

/// Reads whole assets and raw resources out of an [`AssetSource`].
///
/// Every call opens its own stream and drops it before returning, whether the
/// read succeeded or not. Nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct AssetReader<S> {
    source: S,
}

impl<S: AssetSource> AssetReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Reads a text asset line by line, ending every line with `\n`.
    pub fn read_text_asset(&self, name: &str) -> Result<String, AssetError> {
        check_name(name)?;
        let stream = self
            .source
            .open_asset(name)
            .map_err(|e| AssetError::asset(name, e))?;
        let text = read_lines_normalized(BufReader::new(stream))
            .map_err(|e| AssetError::asset(name, e))?;
        log::debug!("read text asset `{name}` ({} bytes)", text.len());
        Ok(text)
    }

    /// Decodes an image asset. The format is guessed from its contents.
    pub fn read_image_asset(&self, name: &str) -> Result<DynamicImage, AssetError> {
        let bytes = self.read_asset_bytes(name)?;
        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Image {
            name: name.to_owned(),
            source,
        })?;
        log::debug!(
            "decoded image asset `{name}` ({}x{})",
            image.width(),
            image.height()
        );
        Ok(image)
    }

    /// Deserializes a JSON text asset.
    pub fn read_json_asset<T: DeserializeOwned>(&self, name: &str) -> Result<T, AssetError> {
        let text = self.read_text_asset(name)?;
        serde_json::from_str(&text).map_err(|source| AssetError::Json {
            name: name.to_owned(),
            source,
        })
    }

    pub fn read_asset_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        check_name(name)?;
        let mut stream = self
            .source
            .open_asset(name)
            .map_err(|e| AssetError::asset(name, e))?;
        let bytes = copy_in_chunks(&mut stream).map_err(|e| AssetError::asset(name, e))?;
        log::debug!("read asset `{name}` ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Reads a raw resource and decodes it as UTF-8, replacing bad sequences.
    pub fn read_raw_resource(&self, id: ResourceId) -> Result<String, AssetError> {
        let bytes = self.read_raw_bytes(id)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn read_raw_bytes(&self, id: ResourceId) -> Result<Vec<u8>, AssetError> {
        let mut stream = self
            .source
            .open_raw(id)
            .map_err(|e| AssetError::raw(id, e))?;
        let bytes = copy_in_chunks(&mut stream).map_err(|e| AssetError::raw(id, e))?;
        log::debug!("read raw resource {id} ({} bytes)", bytes.len());
        Ok(bytes)
    }

    pub fn raw_id(&self, name: &str) -> Result<ResourceId, AssetError> {
        self.source
            .raw_id(name)
            .ok_or_else(|| AssetError::UnknownResource(name.to_owned()))
    }

    pub fn read_raw_resource_named(&self, name: &str) -> Result<String, AssetError> {
        self.read_raw_resource(self.raw_id(name)?)
    }

    pub fn read_raw_bytes_named(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.read_raw_bytes(self.raw_id(name)?)
    }

    /// Like [`read_text_asset`](Self::read_text_asset), but logs any failure
    /// and returns an empty string instead.
    pub fn text_asset_or_empty(&self, name: &str) -> String {
        self.read_text_asset(name).unwrap_or_else(|e| {
            log::warn!("{e}");
            String::new()
        })
    }

    /// Like [`read_image_asset`](Self::read_image_asset), but logs any failure
    /// and returns `None` instead.
    pub fn image_asset_or_none(&self, name: &str) -> Option<DynamicImage> {
        self.read_image_asset(name)
            .map_err(|e| log::warn!("{e}"))
            .ok()
    }

    /// Like [`read_raw_resource`](Self::read_raw_resource), but logs any
    /// failure and returns an empty string instead.
    pub fn raw_resource_or_empty(&self, id: ResourceId) -> String {
        self.read_raw_resource(id).unwrap_or_else(|e| {
            log::warn!("{e}");
            String::new()
        })
    }
}

fn check_name(name: &str) -> Result<(), AssetError> {
    if name.is_empty() {
        return Err(AssetError::EmptyName);
    }
    Ok(())
}
