use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::ShortReadPolicy;
use crate::error::{AcquireError, Result};

/// Read a local file into a buffer sized from its metadata.
///
/// The handle is dropped on every exit path. A file that yields fewer bytes than
/// its declared length is handled according to `policy`.
pub fn read_local(path: &Path, policy: ShortReadPolicy) -> Result<Vec<u8>> {
    match std::fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AcquireError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    }

    let mut file = File::open(path)?;
    let declared = declared_len(file.metadata()?.len())?;

    read_declared(&mut file, declared, policy)
}

/// File length as a buffer size; fails where it does not fit in `usize`.
fn declared_len(len: u64) -> Result<usize> {
    usize::try_from(len)
        .map_err(|_| AcquireError::ReadFailed(format!("file too large: {} bytes", len)))
}

/// Read `declared` bytes from `reader`, looping over partial reads.
pub fn read_declared<R: Read>(
    reader: &mut R,
    declared: usize,
    policy: ShortReadPolicy,
) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; declared];
    let read = fill(reader, &mut buffer)?;

    debug!("Read {} of {} declared bytes", read, declared);

    if read < declared {
        match policy {
            ShortReadPolicy::Reject => {
                return Err(AcquireError::ReadFailed(format!(
                    "short read: got {} of {} bytes",
                    read, declared
                )));
            }
            ShortReadPolicy::Warn => {
                warn!("Short read: got {} of {} bytes", read, declared);
                buffer.truncate(read);
            }
        }
    }

    Ok(buffer)
}

/// Read until `buf` is full or the source ends. Returns the bytes read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Lazy, finite sequence of chunks pulled from a reader.
///
/// Each item holds at most `chunk_size` bytes. The sequence ends at the first
/// zero-length read or after yielding an error, and cannot be restarted.
pub struct Chunks<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: Read> Chunks<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buf: vec![0u8; chunk_size.max(1)],
            done: false,
        }
    }
}

impl<R: Read> Iterator for Chunks<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(n) => return Some(Ok(self.buf[..n].to_vec())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Copy a stream into one owned buffer, `chunk_size` bytes at a time.
/// Consumes the reader, so it is closed when this returns.
pub fn read_stream<R: Read>(reader: R, chunk_size: usize) -> Result<Vec<u8>> {
    let data = Chunks::new(reader, chunk_size).try_fold(Vec::new(), |mut acc, chunk| {
        acc.extend_from_slice(&chunk?);
        Ok::<_, io::Error>(acc)
    })?;
    Ok(data)
}
