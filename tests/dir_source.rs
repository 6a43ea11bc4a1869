use std::path::{Path, PathBuf};

use bundled_assets::{
    AssetError, AssetReader, AssetSource, BundleConfig, DirSource, ErrorKind, ResourceId,
};
use serde::Deserialize;

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bundle")
}

fn reader() -> AssetReader<DirSource> {
    let _ = env_logger::builder().is_test(true).try_init();
    AssetReader::new(DirSource::open(fixture_root()).unwrap())
}

#[derive(Debug, Deserialize)]
struct Province {
    name: String,
    city: Vec<City>,
}

#[derive(Debug, Deserialize)]
struct City {
    name: String,
    area: Vec<String>,
}

#[test]
fn layout_comes_from_bundle_toml() {
    let reader = reader();
    let config = reader.source().config();
    assert_eq!(config.raw_dir, Path::new("res/raw"));
    assert_eq!(config.raw.len(), 2);
    assert_eq!(reader.source().root(), fixture_root());
}

#[test]
fn reads_text_image_and_raw_from_disk() {
    let reader = reader();
    assert_eq!(reader.read_text_asset("config.txt").unwrap(), "alpha\nbeta\n");

    let dot = reader.read_image_asset("images/dot.png").unwrap();
    assert_eq!((dot.width(), dot.height()), (3, 2));
    assert_eq!(dot.to_rgba8().get_pixel(2, 1).0, [255, 0, 0, 255]);

    assert_eq!(
        reader.read_raw_resource(ResourceId(0x7f0e0001)).unwrap(),
        "hello raw\n"
    );
    // raw text is decoded verbatim, CRLF included
    assert_eq!(
        reader.read_raw_resource_named("notes").unwrap(),
        "line one\r\nline two\r\n"
    );
}

#[test]
fn json_asset_feeds_a_selector() {
    let provinces: Vec<Province> = reader().read_json_asset("province.json").unwrap();
    let names: Vec<&str> = provinces.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Zhejiang", "Beijing"]);
    let hangzhou = &provinces[0].city[0];
    assert_eq!(hangzhou.name, "Hangzhou");
    assert_eq!(hangzhou.area, ["Xihu", "Binjiang"]);
}

#[test]
fn missing_files_are_not_found() {
    let reader = reader();
    let err = reader.read_text_asset("missing.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(reader.text_asset_or_empty("missing.txt"), "");

    // listed nowhere in bundle.toml
    let err = reader.read_raw_bytes(ResourceId(0x7f0e0099)).unwrap_err();
    assert!(matches!(err, AssetError::Raw { id: ResourceId(0x7f0e0099), .. }));
    assert!(err.is_not_found());
}

#[test]
fn names_cannot_leave_the_bundle() {
    let source = DirSource::open(fixture_root()).unwrap();
    assert!(source.open_asset("../bundle.toml").is_err());
    assert!(source.open_asset("images/../../bundle.toml").is_err());

    let reader = AssetReader::new(&source);
    let err = reader.read_text_asset("../bundle.toml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn bundle_without_config_uses_defaults() {
    let source = DirSource::open(fixture_root().join("res")).unwrap();
    assert_eq!(source.config(), &BundleConfig::default());
    assert!(source.raw_id("greeting").is_none());
}
