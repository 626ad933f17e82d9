use serde::{Deserialize, Serialize};

/// Chunk size used when copying a content stream.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Plugin configuration, read from `plugins.fileupload` in `tauri.conf.json`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub chunk_size: usize,
    pub short_read: ShortReadPolicy,
}

/// What to do when a local file yields fewer bytes than its metadata declared.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShortReadPolicy {
    #[default]
    Reject,
    Warn,
}

impl Config {
    /// Chunk size actually used for copying; never zero.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            short_read: ShortReadPolicy::default(),
        }
    }
}
