use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AcquireError, Result};

/// Arguments of `process_file` as the webview sends them.
/// Absent fields deserialize as empty so validation can reject them uniformly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRequest {
    #[serde(rename = "filePath", deserialize_with = "null_as_empty")]
    pub reference: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub declared_type: String,
    #[serde(rename = "name", deserialize_with = "null_as_empty")]
    pub declared_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FileRequest {
    pub fn new(
        reference: impl Into<String>,
        declared_type: impl Into<String>,
        declared_name: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            declared_type: declared_type.into(),
            declared_name: declared_name.into(),
        }
    }

    /// Reject the request if any field is empty; lists every missing field.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("filePath", &self.reference),
            ("type", &self.declared_type),
            ("name", &self.declared_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            let missing = format!("missing {}", missing.join(", "));
            Err(AcquireError::InvalidRequest(missing))
        }
    }
}

/// Successful outcome of one acquisition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileResult {
    #[serde(rename = "byteArray")]
    pub data: Vec<u8>,
    #[serde(rename = "base64")]
    pub encoded_data: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(rename = "fileName")]
    pub declared_name: String,
}

impl FileResult {
    /// Encode `data` and assemble the result. Empty data is not a result.
    pub fn from_bytes(request: FileRequest, data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(AcquireError::ReadFailed("no data read".to_string()));
        }

        let encoded_data = STANDARD.encode(&data);
        let size = data.len() as u64;

        Ok(FileResult {
            data,
            encoded_data,
            size,
            declared_type: request.declared_type,
            declared_name: request.declared_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_each_missing_field() {
        assert!(FileRequest::new("/tmp/a", "txt", "a").validate().is_ok());

        let err = FileRequest::new("", "txt", "").validate().unwrap_err();
        assert!(matches!(err, AcquireError::InvalidRequest(ref m) if m == "missing filePath, name"));
    }

    #[test]
    fn test_request_deserializes_wire_names() {
        let req: FileRequest =
            serde_json::from_str(r#"{"filePath": "/tmp/a.png", "type": "png", "name": "a"}"#)
                .unwrap();
        assert_eq!(req.reference, "/tmp/a.png");
        assert_eq!(req.declared_type, "png");
        assert_eq!(req.declared_name, "a");

        let req: FileRequest =
            serde_json::from_str(r#"{"filePath": "/tmp/a.png", "type": null}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_result_encodes_and_sizes() {
        let result =
            FileResult::from_bytes(FileRequest::new("/x", "txt", "x"), b"hello".to_vec()).unwrap();
        assert_eq!(result.encoded_data, "aGVsbG8=");
        assert_eq!(result.size, 5);
        assert_eq!(STANDARD.decode(&result.encoded_data).unwrap(), result.data);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["base64"], "aGVsbG8=");
        assert_eq!(json["fileName"], "x");
        assert_eq!(json["type"], "txt");
        assert_eq!(json["byteArray"][0], 104);
    }

    #[test]
    fn test_empty_data_is_read_failure() {
        let request = FileRequest::new("/x", "txt", "x");
        let err = FileResult::from_bytes(request, Vec::new()).unwrap_err();
        assert_eq!(err.kind(), "read_failed");
    }
}
