use std::{collections::HashMap, io, io::Cursor};

use crate::{
    config::RawEntry,
    source::{not_found, AssetSource, AssetStream, ResourceId},
};

/// A bundle held entirely in memory.
///
/// Streams borrow the stored bytes, so reading never copies more than the
/// caller asks for.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    assets: HashMap<String, Vec<u8>>,
    raw: HashMap<ResourceId, Vec<u8>>,
    raw_names: HashMap<String, ResourceId>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert_asset(name, bytes);
        self
    }

    pub fn with_raw(mut self, id: ResourceId, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert_raw(id, bytes);
        self
    }

    pub fn with_named_raw(
        mut self,
        name: impl Into<String>,
        id: ResourceId,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.raw_names.insert(name.into(), id);
        self.insert_raw(id, bytes);
        self
    }

    pub fn insert_asset(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), bytes.into());
    }

    pub fn insert_raw(&mut self, id: ResourceId, bytes: impl Into<Vec<u8>>) {
        self.raw.insert(id, bytes.into());
    }

    pub(crate) fn insert_raw_entry(&mut self, entry: &RawEntry, bytes: Vec<u8>) {
        self.raw_names.insert(entry.name.clone(), entry.id);
        self.raw.insert(entry.id, bytes);
    }

    pub fn asset_names(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assets.len() + self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetSource for MemorySource {
    fn open_asset(&self, name: &str) -> io::Result<AssetStream<'_>> {
        match self.assets.get(name) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(not_found(format_args!("asset `{name}`"))),
        }
    }

    fn open_raw(&self, id: ResourceId) -> io::Result<AssetStream<'_>> {
        match self.raw.get(&id) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(not_found(format_args!("raw resource {id}"))),
        }
    }

    fn raw_id(&self, name: &str) -> Option<ResourceId> {
        self.raw_names.get(name).copied()
    }
}
