use addr::domain;
use reqwest::Method;
use reqwest::blocking::Response;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::record::{Type, ZoneRecord};
use crate::{ApiError, ClientBuilderError, ClientError};

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rest.easydns.net";
/// Sandbox API endpoint, for use with sandbox credentials.
pub const SANDBOX_ENDPOINT: &str = "https://sandbox.rest.easydns.net";

/// Sets `format=json` in the query of `url`, replacing any existing `format` pair.
fn force_json_format(url: &mut Url) {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "format")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("format", "json");
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    token: Option<String>,
    key: Option<String>,
    http_client: Option<reqwest::blocking::Client>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            token: None,
            key: None,
            http_client: None,
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the API token, sent as the Basic auth username.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Sets the API key, sent as the Basic auth password.
    pub fn key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Sets the HTTP client requests are sent with.
    ///
    /// Timeouts, proxies and TLS settings are taken from this client as-is.
    pub fn http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used. In
    /// the case that no HTTP client is set, a default one is created.
    ///
    /// # Errors
    /// - `MissingField` if the token or key is missing or empty.
    /// - `InvalidEndpoint` if the endpoint can't have path segments appended.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        if endpoint.cannot_be_a_base() {
            return Err(ClientBuilderError::InvalidEndpoint(endpoint.to_string()));
        }
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientBuilderError::MissingField("token".to_string()))?;
        let key = self
            .key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ClientBuilderError::MissingField("key".to_string()))?;

        Ok(Client {
            endpoint,
            token,
            key,
            client: self.http_client.unwrap_or_default(),
        })
    }
}

/// A TXT record created through [Client::add_txt_record].
///
/// Holds what is needed to delete the record again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecordHandle {
    /// Registrable root the record was created in.
    pub domain: String,
    /// Identifier easyDNS assigned to the record.
    pub id: String,
}

/// API client.
///
/// Every call sends exactly one request and is never retried.
pub struct Client {
    endpoint: Url,
    token: String,
    key: String,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client with a default HTTP client.
    ///
    /// # Errors
    ///
    /// The same as [ClientBuilder::build].
    pub fn new(endpoint: &Url, token: &str, key: &str) -> Result<Self, ClientBuilderError> {
        Self::builder()
            .endpoint(endpoint)
            .token(token)
            .key(key)
            .build()
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a [Url] from the endpoint and the path segments, with `format=json` set.
    fn build_url(&self, path: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(path);
        force_json_format(&mut url);
        Ok(url)
    }

    /// Sends a request with the given method and optional JSON body.
    ///
    /// The returned response always has a status below 400.
    fn send_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Response, ClientError> {
        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .basic_auth(&self.token, Some(&self.key));
        if let Some(body) = body {
            request = request.body(body);
        }

        let resp = request.send()?;
        let status = resp.status();
        debug!(%status, "received response");

        if status.as_u16() >= 400 {
            let err = ApiError::from_response(resp);
            warn!(%status, body = err.body(), "request rejected");
            return Err(ClientError::EasyDns(err));
        }
        Ok(resp)
    }

    /// Sends `payload` as JSON and decodes the JSON response into `T`.
    fn send_json<P: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        payload: &P,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_vec(payload).map_err(ClientError::Serialization)?;
        let text = self.send_request(method, url, Some(body))?.text()?;
        serde_json::from_str(&text).map_err(ClientError::Deserialization)
    }

    fn add(&self, domain: &str, record: &ZoneRecord) -> Result<String, ClientError> {
        let url = self.build_url(&["zones", "records", "add", domain, Type::Txt.as_str()])?;

        // Only the id is needed; the API leaves out record fields, such as
        // `domain` and `type`, and adds others depending on the zone.
        #[derive(Deserialize)]
        struct AddedRecord {
            #[serde(default)]
            id: Option<String>,
        }

        #[derive(Deserialize)]
        struct AddRecordResponse {
            #[serde(default)]
            msg: String,
            #[serde(default)]
            tm: i64,
            data: AddedRecord,
            #[serde(default)]
            status: i64,
        }

        let resp: AddRecordResponse = self.send_json(Method::PUT, url, record)?;
        debug!(
            msg = %resp.msg,
            tm = resp.tm,
            status = resp.status,
            id = resp.data.id.as_deref(),
            "record added"
        );

        resp.data
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ClientError::MissingRecordId)
    }

    fn delete(&self, domain: &str, id: &str) -> Result<(), ClientError> {
        let url = self.build_url(&["zones", "records", domain, id])?;

        // The body, if any, is dropped along with the response.
        self.send_request(Method::DELETE, url, None)?;
        Ok(())
    }

    /// Creates a TXT record in the zone of `domain`, returning the id easyDNS assigned to it.
    ///
    /// Each call creates a new record, even if an identical one exists.
    ///
    /// # Errors
    ///
    /// Will return an `EasyDns` error in the case of the API answering with a
    /// status of 400 or above, and `MissingRecordId` in the case of a successful
    /// response not containing the id.
    pub fn add_record(
        &self,
        domain: &domain::Name<'_>,
        record: &ZoneRecord,
    ) -> Result<String, ClientError> {
        self.add(domain.as_str(), record)
    }

    /// Deletes the record with the given id from the zone of `domain`.
    ///
    /// Deleting isn't idempotent: an id that was already deleted, or never
    /// existed, results in an `EasyDns` error with the status the API reports.
    pub fn delete_record(&self, domain: &domain::Name<'_>, id: &str) -> Result<(), ClientError> {
        self.delete(domain.as_str(), id)
    }

    /// Creates a TXT record for a fully-qualified name such as
    /// `_acme-challenge.example.com`, in the zone of its registrable root.
    ///
    /// # Errors
    ///
    /// Will return a `Domain` error in the case of the name having no registrable root.
    pub fn add_txt_record(
        &self,
        fqdn: &str,
        value: &str,
        ttl: i64,
    ) -> Result<TxtRecordHandle, ClientError> {
        let record = ZoneRecord::txt(fqdn, value, ttl)?;
        let id = self.add(&record.domain, &record)?;

        Ok(TxtRecordHandle {
            domain: record.domain,
            id,
        })
    }

    /// Deletes a TXT record created with [Client::add_txt_record].
    pub fn delete_txt_record(&self, handle: &TxtRecordHandle) -> Result<(), ClientError> {
        self.delete(&handle.domain, &handle.id)
    }
}
