use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};

use crate::api;
use crate::config::ClientConfig;
use crate::message::Message;
use crate::transport::{HttpTransport, Request, Transport};
use crate::Error;

/// Sends messages to Sendinblue using a single API key.
///
/// A `Client` holds no mutable state, so one instance can be shared and
/// used for concurrent sends.
pub struct Client<T = HttpTransport> {
    api_key: String,
    endpoint: Url,
    transport: T,
}

impl Client<HttpTransport> {
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        let transport =
            HttpTransport::new(Duration::from_secs(api::SENDINBLUE_REQUEST_TIMEOUT))?;
        Self::with_transport(api_key, transport)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let api_key = match config.api_key {
            Some(ref key) => key.clone(),
            None => return Err(Error::Config("missing api_key".to_string())),
        };

        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Self::with_transport(api_key, transport)?.with_endpoint(&config.endpoint)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Result<Self, Error> {
        Ok(Self {
            api_key: api_key.into(),
            endpoint: Url::parse(api::SENDINBLUE_SMTP_EMAIL)?,
            transport,
        })
    }

    /// Point the client somewhere other than the production API.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, Error> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, message: &Message) -> Result<Request, Error> {
        let body = message.to_json()?;

        let mut key = HeaderValue::from_str(&self.api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(api::API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Request {
            method: Method::POST,
            url: self.endpoint.clone(),
            headers,
            body,
        })
    }

    /// Transmit the email message to Sendinblue.
    ///
    /// Exactly one request is made. Succeeds only on 201 Created; nothing
    /// is retried.
    pub async fn send(&self, message: &Message) -> Result<(), Error> {
        let request = self.build_request(message).map_err(|e| {
            log::error!("{}", e);
            e
        })?;

        log::info!(
            "Sending email from {} to {} recipient(s)",
            message.sender.email,
            message.to.len() + message.cc.len() + message.bcc.len()
        );

        let resp = self.transport.execute(request).await.map_err(|e| {
            log::error!("Failed to transmit message: {}", e);
            Error::Transmission(e)
        })?;

        api::map_status(resp).map_err(|e| {
            log::error!("{}", e);
            e
        })
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Never print the key
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl Message {
    /// Send this message with a default client for `api_key`.
    pub async fn send(&self, api_key: &str) -> Result<(), Error> {
        Client::from_api_key(api_key)?.send(self).await
    }
}
