use percent_encoding::percent_decode_str;
use std::path::PathBuf;

pub const CONTENT_SCHEME: &str = "content://";
pub const FILE_SCHEME: &str = "file://";

/// A file reference, classified by its prefix alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileReference {
    /// Filesystem path, with any `file://` prefix removed.
    Local(PathBuf),
    /// Opaque content-provider URI, kept verbatim.
    Provider(String),
}

impl FileReference {
    /// Classify a reference string without touching the filesystem.
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with(CONTENT_SCHEME) {
            return FileReference::Provider(reference.to_string());
        }

        match reference.strip_prefix(FILE_SCHEME) {
            Some(rest) => FileReference::Local(decode_path(rest)),
            None => FileReference::Local(PathBuf::from(reference)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FileReference::Local(_) => "local",
            FileReference::Provider(_) => "provider",
        }
    }
}

/// Percent-decode the remainder of a `file://` reference. `?` and `#` are
/// ordinary path characters here. Falls back to the raw text if decoding
/// does not yield UTF-8.
fn decode_path(rest: &str) -> PathBuf {
    match percent_decode_str(rest).decode_utf8() {
        Ok(decoded) => PathBuf::from(decoded.into_owned()),
        Err(_) => PathBuf::from(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_uri_is_provider() {
        let r = FileReference::classify("content://com.android.providers.media/document/1");
        assert_eq!(
            r,
            FileReference::Provider("content://com.android.providers.media/document/1".into())
        );
        assert_eq!(r.kind(), "provider");
    }

    #[test]
    fn test_bare_path_is_local() {
        assert_eq!(
            FileReference::classify("/tmp/sample.txt"),
            FileReference::Local("/tmp/sample.txt".into())
        );
    }

    #[test]
    fn test_file_prefix_is_stripped() {
        assert_eq!(
            FileReference::classify("file:///tmp/sample.txt"),
            FileReference::classify("/tmp/sample.txt")
        );
    }

    #[test]
    fn test_file_url_is_percent_decoded() {
        assert_eq!(
            FileReference::classify("file:///tmp/my%20photo.jpg"),
            FileReference::Local("/tmp/my photo.jpg".into())
        );
    }

    #[test]
    fn test_relative_file_url_falls_back_to_stripping() {
        assert_eq!(
            FileReference::classify("file://notes.txt"),
            FileReference::Local("notes.txt".into())
        );
    }

    #[test]
    fn test_hash_and_question_mark_stay_in_path() {
        assert_eq!(
            FileReference::classify("file:///tmp/track #1.mp3"),
            FileReference::classify("/tmp/track #1.mp3")
        );
        assert_eq!(
            FileReference::classify("file:///tmp/a?b#c"),
            FileReference::Local("/tmp/a?b#c".into())
        );
    }

    #[test]
    fn test_bare_file_prefix_is_empty_path() {
        assert_eq!(
            FileReference::classify("file://"),
            FileReference::Local(PathBuf::new())
        );
    }

    #[test]
    fn test_invalid_utf8_escape_keeps_raw_text() {
        assert_eq!(
            FileReference::classify("file:///tmp/bad%FF.bin"),
            FileReference::Local("/tmp/bad%FF.bin".into())
        );
    }

    #[test]
    fn test_classification_is_prefix_only() {
        // No filesystem lookup: a missing path is still local
        assert_eq!(FileReference::classify("does/not/exist").kind(), "local");
        // Scheme must lead the string
        assert_eq!(FileReference::classify("/x/content://y").kind(), "local");
    }
}
