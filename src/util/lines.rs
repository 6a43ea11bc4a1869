use std::io::{self, BufRead};

/// Reads every line of `reader` and joins them with `\n`, including after the
/// last one. `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not
/// UTF-8 are replaced with U+FFFD.
pub(crate) fn read_lines_normalized<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    let mut chunk = Vec::new();
    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            return Ok(text);
        }
        let body = chunk.strip_suffix(b"\n").unwrap_or(&chunk[..]);
        let body = body.strip_suffix(b"\r").unwrap_or(body);
        for line in body.split(|&b| b == b'\r') {
            text.push_str(&String::from_utf8_lossy(line));
            text.push('\n');
        }
    }
}
