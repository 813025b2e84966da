//! Document store backed by the managed REST backend.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::adapters::backend::traits::DocumentStore;
use crate::domain::{DocumentStoreError, RafiqError, Result};

use super::client::RestClient;
use super::models::error_message;

/// Profile document reads and merge writes over `GET`/`PATCH`
/// `/db/{collection}/{id}`.
///
/// The backend treats `PATCH` as an upsert with top-level merge semantics:
/// named attributes replace, unnamed attributes survive, missing documents
/// are created.
pub struct RestDocumentStore {
    client: RestClient,
}

impl RestDocumentStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn document_path(collection: &str, id: &str) -> String {
        format!("db/{collection}/{id}")
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let path = Self::document_path(collection, id);

        self.client
            .with_retry(|| async {
                let resp = self
                    .client
                    .request(Method::GET, &path)
                    .send()
                    .await
                    .map_err(transport_error)?;

                let status = resp.status();
                if status == StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if !status.is_success() {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(RafiqError::Documents(status_error(status, &body)));
                }
                let document = resp.json::<Value>().await.map_err(|e| {
                    RafiqError::Documents(DocumentStoreError::InvalidResponse(e.to_string()))
                })?;
                Ok(Some(document))
            })
            .await
    }

    async fn merge_document(&self, collection: &str, id: &str, attributes: Value) -> Result<()> {
        if !attributes.is_object() {
            return Err(RafiqError::Documents(DocumentStoreError::WriteFailed(
                "merge payload must be a JSON object".to_string(),
            )));
        }
        let path = Self::document_path(collection, id);

        self.client
            .with_retry(|| async {
                let resp = self
                    .client
                    .request(Method::PATCH, &path)
                    .json(&attributes)
                    .send()
                    .await
                    .map_err(transport_error)?;

                let status = resp.status();
                if !status.is_success() {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(RafiqError::Documents(status_error(status, &body)));
                }
                Ok(())
            })
            .await
    }
}

fn transport_error(e: reqwest::Error) -> RafiqError {
    if e.is_timeout() {
        RafiqError::Documents(DocumentStoreError::Timeout(e.to_string()))
    } else {
        RafiqError::Documents(DocumentStoreError::ConnectionFailed(e.to_string()))
    }
}

fn status_error(status: StatusCode, body: &str) -> DocumentStoreError {
    let message = error_message(body);
    if status.is_server_error() {
        DocumentStoreError::ServerError {
            status: status.as_u16(),
            message,
        }
    } else {
        DocumentStoreError::RequestRejected {
            status: status.as_u16(),
            message,
        }
    }
}
