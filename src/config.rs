//! Connection settings for one panel endpoint.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::error::Error;

/// Everything needed to open a session against one panel.
///
/// The address must carry no trailing slash (`http://10.0.0.14:8888`, not
/// `http://10.0.0.14:8888/`); endpoint paths are appended verbatim. The API
/// key is held as a [`SecretString`] and never logged or sent in clear.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub(crate) address: String,
    pub(crate) api_key: SecretString,
    pub(crate) timeout: Option<Duration>,
}

impl PanelConfig {
    /// Validates the address and wraps the key.
    ///
    /// A malformed address is programmer misuse and is rejected here, before
    /// any call is made. Nothing else about the address is checked.
    pub fn new(address: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let address = address.into();
        Url::parse(&address)
            .map_err(|err| Error::validation(format!("invalid panel address `{address}`: {err}")))?;
        Ok(Self {
            address,
            api_key: SecretString::from(api_key.into()),
            timeout: None,
        })
    }

    /// Caps every call at `timeout`. A zero duration means no timeout, which
    /// is also the default.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }
}
