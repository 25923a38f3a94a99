use axum::{body::to_bytes, http::StatusCode, response::Response};
use serde::de::DeserializeOwned;

/// Splits a response into its status and JSON-decoded body.
pub async fn response_json<T: DeserializeOwned>(resp: Response) -> (StatusCode, T) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}
