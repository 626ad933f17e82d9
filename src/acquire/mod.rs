pub mod reader;
pub mod reference;
pub mod request;

pub use reference::*;
pub use request::*;

use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AcquireError, Result};
use crate::platform::ContentResolver;

/// Turns a file reference into bytes plus metadata.
///
/// Holds only read-only configuration and the platform resolver, so one
/// instance can serve concurrent calls; every call owns its buffers.
pub struct FileAcquirer {
    config: Config,
    resolver: Box<dyn ContentResolver>,
}

impl FileAcquirer {
    pub fn new(config: Config, resolver: Box<dyn ContentResolver>) -> Self {
        Self { config, resolver }
    }

    /// Validate, read and encode one request.
    pub fn acquire(&self, request: FileRequest) -> Result<FileResult> {
        request.validate()?;

        let reference = FileReference::classify(&request.reference);
        let request_id = Uuid::new_v4();
        let _span = info_span!("acquire", %request_id, kind = reference.kind()).entered();

        info!("Processing file: {}", request.reference);

        let data = match self.read(&reference) {
            Ok(data) => data,
            Err(e) => {
                warn!(kind = e.kind(), "Acquisition failed: {}", e);
                return Err(e);
            }
        };

        let result = FileResult::from_bytes(request, data)?;
        info!("File read successfully, bytes: {}", result.size);

        Ok(result)
    }

    fn read(&self, reference: &FileReference) -> Result<Vec<u8>> {
        match reference {
            FileReference::Local(path) => reader::read_local(path, self.config.short_read),
            FileReference::Provider(uri) => {
                let stream = self.resolver.open(uri).map_err(|e| {
                    AcquireError::UnreadableSource {
                        uri: uri.clone(),
                        reason: e.to_string(),
                    }
                })?;
                reader::read_stream(stream, self.config.effective_chunk_size())
            }
        }
    }
}
