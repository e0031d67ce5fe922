//! The authenticated request pipeline every typed operation rides on.

use std::borrow::Cow;

use reqwest::Client as ReqwestClient;
use reqwest::header::COOKIE;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::Result;
use crate::auth::SigningFields;
use crate::config::PanelConfig;
use crate::error::Error;
use crate::params::Params;
use crate::session::SessionStore;

/// Form field names injected by the signing layer. Caller parameters must
/// not use them.
const RESERVED_FIELDS: [&str; 2] = ["request_token", "request_time"];

/// Authenticated client for one panel endpoint.
///
/// Owns its session-cookie state exclusively; create one client per panel.
/// All operations take `&self` and perform exactly one HTTP round trip:
/// there are no background tasks, no retries, and the configured timeout is
/// the only cancellation mechanism. Concurrent calls on the same client are
/// safe; the cookie state is serialized and the last response observed wins.
#[derive(Debug)]
pub struct Client {
    address: String,
    api_key: SecretString,
    session: SessionStore,
    http: ReqwestClient,
}

impl Client {
    /// Creates a client from a panel address (no trailing slash) and the
    /// panel's API key.
    pub fn new(address: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(PanelConfig::new(address, api_key)?)
    }

    /// Creates a client from a prepared [`PanelConfig`].
    pub fn with_config(config: PanelConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::transport)?;
        Ok(Self {
            address: config.address,
            api_key: config.api_key,
            session: SessionStore::default(),
            http,
        })
    }

    /// Performs one signed call and returns the raw response body.
    ///
    /// This is the low-level escape hatch kept for debugging and for panel
    /// endpoints the typed surface does not cover yet; interpretation of the
    /// body is entirely up to the caller.
    #[deprecated(note = "debugging escape hatch; prefer the typed operations")]
    pub async fn raw(&self, endpoint: &str, params: Params) -> Result<Vec<u8>> {
        self.call(endpoint, params).await
    }

    /// Signs, sends, and classifies one request.
    ///
    /// The form body is the fresh timestamp/token pair followed by the
    /// caller's parameters. Held session cookies ride along; whatever the
    /// response carries replaces them, even an empty set. A transport
    /// failure leaves the held set untouched and surfaces as
    /// [`Kind::Transport`](crate::Kind::Transport); a status of 400 or above
    /// discards the body and surfaces as [`Kind::Status`](crate::Kind::Status).
    pub(crate) async fn call(&self, endpoint: &str, params: Params) -> Result<Vec<u8>> {
        if let Some(reserved) = RESERVED_FIELDS.iter().find(|key| params.contains_key(key)) {
            return Err(Error::validation(format!(
                "`{reserved}` is reserved for request signing"
            )));
        }

        let target = format!("{}{}", self.address, endpoint);
        let url = Url::parse(&target)
            .map_err(|err| Error::validation(format!("invalid request url `{target}`: {err}")))?;

        let signing = SigningFields::issue(&self.api_key);
        let mut form: Vec<(Cow<'static, str>, String)> = vec![
            (Cow::Borrowed("request_token"), signing.request_token),
            (Cow::Borrowed("request_time"), signing.request_time),
        ];
        form.extend(params.into_form());

        let mut request = self.http.post(url).form(&form);
        if let Some(cookies) = self.session.cookie_header() {
            trace!(endpoint, "replaying session cookies");
            request = request.header(COOKIE, cookies);
        }

        let response = request.send().await.map_err(Error::transport)?;
        self.session.record(response.headers());

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "panel call completed");
        if status.as_u16() >= 400 {
            return Err(Error::status(status));
        }
        let body = response.bytes().await.map_err(Error::transport)?;
        Ok(body.to_vec())
    }

    /// Structured decode: call, then parse the body as JSON into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Params,
    ) -> Result<T> {
        let body = self.call(endpoint, params).await?;
        decode(&body)
    }

    /// Best-effort decode for mutating endpoints whose JSON status/message
    /// body is the meaningful signal: a call failure degrades to an empty
    /// body, so the only error this path reports is a decode failure.
    pub(crate) async fn fetch_lenient<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Params,
    ) -> Result<T> {
        let body = self.call(endpoint, params).await.unwrap_or_default();
        decode(&body)
    }

    /// Plain-text decode: the body verbatim, lossily converted to UTF-8.
    pub(crate) async fn fetch_text(&self, endpoint: &str, params: Params) -> Result<String> {
        let body = self.call(endpoint, params).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &SessionStore {
        &self.session
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::decode)
}
