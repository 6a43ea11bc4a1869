//! Reads text, image and raw resources bundled with an application.
//!
//! An [`AssetSource`] hands out byte streams by asset name or raw resource
//! id; an [`AssetReader`] copies each stream fully into memory, closes it and
//! returns the decoded value.
//!
//! ```
//! use bundled_assets::{AssetReader, MemorySource};
//!
//! let reader = AssetReader::new(MemorySource::new().with_asset("config.txt", "alpha\nbeta"));
//! assert_eq!(reader.read_text_asset("config.txt").unwrap(), "alpha\nbeta\n");
//! assert_eq!(reader.text_asset_or_empty("missing.txt"), "");
//! ```

mod config;
mod dir;
mod error;
mod memory;
pub mod platform;
mod reader;
mod source;
mod util;

pub use config::{BundleConfig, RawEntry};
pub use dir::DirSource;
pub use error::{AssetError, ErrorKind};
pub use memory::MemorySource;
pub use reader::AssetReader;
pub use source::{AssetSource, AssetStream, ResourceId};

pub use image::DynamicImage;
