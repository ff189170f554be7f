// src/core/net.rs

// Blocking HTTP GET. One request per call, no retries.

use reqwest::blocking::Client;
use url::Url;

use crate::config::ClientOptions;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(opts: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub fn get_text(&self, url: &Url) -> Result<String> {
        logd!("GET {}", url);
        let resp = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .inspect_err(|e| loge!("GET {} failed: {}", url, e))?;

        let body = resp.text()?;
        logd!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}
