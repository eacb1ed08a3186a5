use serde::{Deserialize, Serialize};

/// POST target for document upload, relative to the API base.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field carrying the document.
pub const UPLOAD_FIELD: &str = "pdf_file";

/// Acknowledged upload reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAck {
    pub message: String,
}

impl UploadAck {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_parses_server_message() {
        let ack: UploadAck =
            serde_json::from_str(r#"{"message":" Document indexed successfully!"}"#).unwrap();
        assert_eq!(ack.message, " Document indexed successfully!");
    }

    #[test]
    fn test_ack_rejects_error_body() {
        assert!(serde_json::from_str::<UploadAck>(r#"{"error":"No file part"}"#).is_err());
    }
}
