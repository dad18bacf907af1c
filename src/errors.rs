use reqwest::{StatusCode, blocking::Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("domain {0:?} is empty")]
    Empty(String),
    #[error("domain {0:?} doesn't have a root")]
    MissingRoot(String),
}

/// A request the easyDNS API answered with a status of 400 or above.
///
/// The body is kept verbatim; the API doesn't use a consistent error format.
#[derive(Error, Debug)]
#[error("{status}: request failed: {body}")]
pub struct ApiError {
    status: StatusCode,
    body: String,
}

impl ApiError {
    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let body = resp
            .text()
            .unwrap_or_else(|e| format!("failed to read response body: {e}"));

        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    EasyDns(#[from] ApiError),
    #[error("failed to encode request payload: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("failed to decode response body: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("endpoint {0:?} cannot have path segments")]
    InvalidEndpoint(String),
    #[error("response doesn't contain a record id")]
    MissingRecordId,
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("endpoint {0:?} cannot have path segments")]
    InvalidEndpoint(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
