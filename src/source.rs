use std::{fmt, io, io::Read, sync::Arc};

use serde::Deserialize;

/// Integer id of a raw resource, assigned when the bundle is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        ResourceId(id)
    }
}

/// A read-only byte stream over one asset. Dropping it closes it.
pub type AssetStream<'a> = Box<dyn Read + 'a>;

/// Access to a bundle of named assets and numbered raw resources.
///
/// Implementations only hand out streams; copying, decoding and error
/// reporting are done by [`AssetReader`](crate::AssetReader).
pub trait AssetSource {
    fn open_asset(&self, name: &str) -> io::Result<AssetStream<'_>>;

    fn open_raw(&self, id: ResourceId) -> io::Result<AssetStream<'_>>;

    /// Resolves a symbolic raw resource name, if the source keeps a manifest.
    fn raw_id(&self, _name: &str) -> Option<ResourceId> {
        None
    }
}

impl<S: AssetSource + ?Sized> AssetSource for &S {
    fn open_asset(&self, name: &str) -> io::Result<AssetStream<'_>> {
        (**self).open_asset(name)
    }
    fn open_raw(&self, id: ResourceId) -> io::Result<AssetStream<'_>> {
        (**self).open_raw(id)
    }
    fn raw_id(&self, name: &str) -> Option<ResourceId> {
        (**self).raw_id(name)
    }
}

impl<S: AssetSource + ?Sized> AssetSource for Box<S> {
    fn open_asset(&self, name: &str) -> io::Result<AssetStream<'_>> {
        (**self).open_asset(name)
    }
    fn open_raw(&self, id: ResourceId) -> io::Result<AssetStream<'_>> {
        (**self).open_raw(id)
    }
    fn raw_id(&self, name: &str) -> Option<ResourceId> {
        (**self).raw_id(name)
    }
}

impl<S: AssetSource + ?Sized> AssetSource for Arc<S> {
    fn open_asset(&self, name: &str) -> io::Result<AssetStream<'_>> {
        (**self).open_asset(name)
    }
    fn open_raw(&self, id: ResourceId) -> io::Result<AssetStream<'_>> {
        (**self).open_raw(id)
    }
    fn raw_id(&self, name: &str) -> Option<ResourceId> {
        (**self).raw_id(name)
    }
}

pub(crate) fn not_found(what: impl fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{what} is not in the bundle"))
}
