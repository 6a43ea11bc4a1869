use std::{io, path::Path};

use gloo::net::http::Request;

pub(super) async fn read_file_impl(path: &Path) -> io::Result<Vec<u8>> {
    let path = path.to_string_lossy();
    let req_url = if path.starts_with('/') {
        path.into_owned()
    } else {
        String::from("/") + &*path
    };
    let resp = Request::get(&req_url).send().await.map_err(fetch_error)?;
    match resp.status() {
        200..=299 => resp.binary().await.map_err(fetch_error),
        404 => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{req_url} returned 404"),
        )),
        status => Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{req_url} returned {status}"),
        )),
    }
}

fn fetch_error(error: gloo::net::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
