use std::io::{self, Read};

/// Size of the scratch buffer reused for every chunk.
pub(crate) const CHUNK_SIZE: usize = 1024;

/// Drains `reader` into a fresh buffer, one fixed-size chunk at a time.
pub(crate) fn copy_in_chunks<R: Read + ?Sized>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut contents = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(contents),
            Ok(len) => contents.extend_from_slice(&chunk[..len]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `step` bytes per read and interrupts every other call.
    struct Choppy {
        data: Cursor<Vec<u8>>,
        step: usize,
        calls: usize,
    }

    impl Read for Choppy {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let len = buf.len().min(self.step);
            self.data.read(&mut buf[..len])
        }
    }

    #[test]
    fn copies_across_several_chunks() {
        let data: Vec<u8> = (0..CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        let copied = copy_in_chunks(&mut Cursor::new(data.clone())).unwrap();
        assert_eq!(copied, data);
    }

    #[test]
    fn short_and_interrupted_reads_are_retried() {
        let data = b"the quick brown fox".to_vec();
        let mut reader = Choppy {
            data: Cursor::new(data.clone()),
            step: 3,
            calls: 0,
        };
        assert_eq!(copy_in_chunks(&mut reader).unwrap(), data);
    }

    #[test]
    fn empty_stream_gives_empty_buffer() {
        assert!(copy_in_chunks(&mut io::empty()).unwrap().is_empty());
    }
}
