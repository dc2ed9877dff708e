//! Success response envelope
//!
//! Every successful course endpoint answers with
//! `{ "status": 200, "message": "success", "data": ..., "meta": ... }`;
//! `data` and `meta` are omitted when absent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

use crate::app::PageMeta;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T = ()> {
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }

    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    fn with_status(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            message: message.into(),
            data,
            meta: None,
        }
    }
}

impl ApiResponse<()> {
    /// 200 response without a payload
    pub fn empty(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_carries_201() {
        let response = ApiResponse::created("success", "payload");
        assert_eq!(response.status, StatusCode::CREATED);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], 201);
        assert_eq!(json["message"], "success");
        assert_eq!(json["data"], "payload");
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn empty_omits_data() {
        let json = serde_json::to_value(ApiResponse::empty("success")).unwrap();
        assert_eq!(json["status"], 200);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn meta_is_serialized_when_present() {
        let meta = PageMeta::new(1, 10, 3, 10).unwrap();
        let json = serde_json::to_value(ApiResponse::ok("success", vec![1, 2, 3]).with_meta(meta))
            .unwrap();
        assert_eq!(json["meta"]["total_count"], 3);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn into_response_uses_envelope_status() {
        let response = ApiResponse::created("success", 1).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
