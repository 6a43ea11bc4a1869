use std::{fs::File, io::Result, path::Path};

use crate::util::copy_in_chunks;

pub(super) async fn read_file_impl(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    copy_in_chunks(&mut file)
}
