//! Network seam for the two flows.
//!
//! A request either yields a [`ServerReply`] (the server answered, whether it
//! acknowledged or declined) or a [`TransportError`] (no usable answer).

use contracts::api::chat::{ChatAnswer, ChatRequest};
use contracts::api::upload::{UploadAck, UPLOAD_FIELD};
use contracts::api::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::api_utils::Endpoints;

/// An answer the server actually gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply<T> {
    /// 2xx with the success body.
    Ack(T),
    /// Non-2xx; carries the server's explanation.
    Declined(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build request: {0}")]
    Encode(String),
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn ask(&self, request: &ChatRequest) -> Result<ServerReply<ChatAnswer>, TransportError>;
}

#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File;

    async fn upload(&self, file: &Self::File) -> Result<ServerReply<UploadAck>, TransportError>;
}

/// Classify a response body by the acknowledgement flag.
///
/// An acknowledged body must match `T`; a declined body only needs to be JSON.
pub fn decode_reply<T: DeserializeOwned>(
    acknowledged: bool,
    body: &str,
) -> Result<ServerReply<T>, TransportError> {
    if acknowledged {
        serde_json::from_str::<T>(body)
            .map(ServerReply::Ack)
            .map_err(|e| TransportError::Decode(e.to_string()))
    } else {
        serde_json::from_str::<ApiError>(body)
            .map(|e| ServerReply::Declined(e.message().to_string()))
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Browser transport over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<ServerReply<T>, TransportError> {
        let acknowledged = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        log::debug!("HTTP {} ({} bytes)", status, body.len());
        decode_reply(acknowledged, &body)
    }
}

impl ChatTransport for HttpTransport {
    async fn ask(&self, request: &ChatRequest) -> Result<ServerReply<ChatAnswer>, TransportError> {
        let response = Request::post(&self.endpoints.chat)
            .json(request)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read(response).await
    }
}

impl UploadTransport for HttpTransport {
    type File = web_sys::File;

    async fn upload(&self, file: &web_sys::File) -> Result<ServerReply<UploadAck>, TransportError> {
        let form_data =
            web_sys::FormData::new().map_err(|e| TransportError::Encode(format!("{e:?}")))?;
        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| TransportError::Encode(format!("{e:?}")))?;

        let response = Request::post(&self.endpoints.upload)
            .body(form_data)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledged_chat_body() {
        let reply: ServerReply<ChatAnswer> =
            decode_reply(true, r#"{"answer":"42","sources":["a"]}"#).unwrap();
        assert_eq!(reply, ServerReply::Ack(ChatAnswer::new("42", vec!["a".to_string()])));
    }

    #[test]
    fn test_declined_body_keeps_server_text() {
        let reply: ServerReply<UploadAck> = decode_reply(false, r#"{"error":"No selected file"}"#).unwrap();
        assert_eq!(reply, ServerReply::Declined("No selected file".to_string()));
    }

    #[test]
    fn test_declined_body_without_error_field() {
        let reply: ServerReply<ChatAnswer> = decode_reply(false, r#"{"detail":"x"}"#).unwrap();
        assert_eq!(reply, ServerReply::Declined(ApiError::UNKNOWN.to_string()));
    }

    #[test]
    fn test_unparsable_bodies_are_transport_failures() {
        let html = "<html><body>502 Bad Gateway</body></html>";
        assert!(matches!(
            decode_reply::<ChatAnswer>(false, html),
            Err(TransportError::Decode(_))
        ));
        assert!(matches!(
            decode_reply::<UploadAck>(true, r#"{"error":"shape mismatch"}"#),
            Err(TransportError::Decode(_))
        ));
    }
}
