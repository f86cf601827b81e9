//! libcurl-backed favicon client.

use super::{IconError, IconSource};
use crate::settings::Settings;
use std::time::Duration;

/// GETs `{endpoint}?domain={page_url}&sz={size}` and returns the body.
#[derive(Debug, Clone)]
pub struct FaviconClient {
    endpoint: String,
    size: u32,
    timeout: Duration,
}

impl FaviconClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            endpoint: settings.favicon_endpoint.clone(),
            size: settings.icon_size,
            timeout: settings.fetch_timeout,
        }
    }

    /// Full lookup URL for `page_url`, query params percent-encoded.
    pub fn lookup_url(&self, page_url: &str) -> Result<url::Url, IconError> {
        let size = self.size.to_string();
        Ok(url::Url::parse_with_params(
            &self.endpoint,
            &[("domain", page_url), ("sz", size.as_str())],
        )?)
    }
}

impl IconSource for FaviconClient {
    fn fetch(&self, page_url: &str) -> Result<Vec<u8>, IconError> {
        let lookup = self.lookup_url(page_url)?;
        tracing::debug!(url = %lookup, "fetching favicon");

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(lookup.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(IconError::Http(code));
        }
        Ok(body)
    }
}
