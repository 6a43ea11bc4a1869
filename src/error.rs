use std::{io, path::PathBuf};

use thiserror::Error;

use crate::source::ResourceId;

/// Coarse classification of an [`AssetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The name or id does not resolve to anything in the bundle.
    NotFound,
    /// The resource exists but could not be opened or read to the end.
    Unreadable,
    /// The bytes were read but are not a valid image / JSON document.
    Decode,
    /// The bundle description itself is broken.
    Config,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset name must not be empty")]
    EmptyName,
    #[error("asset `{name}` is unavailable: {source}")]
    Asset {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("raw resource {id} is unavailable: {source}")]
    Raw {
        id: ResourceId,
        #[source]
        source: io::Error,
    },
    #[error("no raw resource is named `{0}`")]
    UnknownResource(String),
    #[error("asset `{name}` is not a decodable image: {source}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("asset `{name}` is not valid json: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid bundle config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl AssetError {
    pub(crate) fn asset(name: &str, source: io::Error) -> Self {
        AssetError::Asset {
            name: name.to_owned(),
            source,
        }
    }

    pub(crate) fn raw(id: ResourceId, source: io::Error) -> Self {
        AssetError::Raw { id, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AssetError::EmptyName | AssetError::UnknownResource(_) => ErrorKind::NotFound,
            AssetError::Asset { source, .. } | AssetError::Raw { source, .. } => {
                io_kind(source)
            }
            AssetError::Image { .. } | AssetError::Json { .. } => ErrorKind::Decode,
            AssetError::Config { .. } => ErrorKind::Config,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

fn io_kind(error: &io::Error) -> ErrorKind {
    match error.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::InvalidInput => ErrorKind::NotFound,
        _ => ErrorKind::Unreadable,
    }
}
