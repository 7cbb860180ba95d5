// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Buffer size for line-oriented reads.
const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(|f| BufReader::with_capacity(READ_BUFFER_BYTES, f))
    }

    /// Read a prefix of the file into `buf`, returning the byte count.
    ///
    /// Keeps reading until `buf` is full or EOF, so short reads from pipes
    /// or network filesystems do not truncate the sample.
    pub fn read_prefix(path: &Path, buf: &mut [u8]) -> std::io::Result<usize> {
        let file = Self::open(path)?;
        let mut filled = 0;
        let mut limited = file.take(buf.len() as u64);
        loop {
            match limited.read(&mut buf[filled..]) {
                Ok(0) => return Ok(filled),
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
            if filled == buf.len() {
                return Ok(filled);
            }
        }
    }
}
