// src/config/options.rs
use std::time::Duration;

use url::Url;

use super::consts::*;
use crate::error::Result;

/// Remote pages the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Status page; the room identifier is appended as `?location=<id>`.
    pub status_base: String,
    /// Housing directory listing every laundry room.
    pub housing_page: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            status_base: s!(STATUS_ENDPOINT),
            housing_page: s!(HOUSING_PAGE),
        }
    }
}

impl Endpoints {
    /// Point both endpoints at one host, e.g. a local fixture server.
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        Ok(Self {
            status_base: base.join("washalertweb/washalertweb.aspx")?.into(),
            housing_page: base.join("laundry")?.into(),
        })
    }

    pub fn status_url(&self, identifier: &str) -> Result<Url> {
        let mut url = Url::parse(&self.status_base)?;
        url.query_pairs_mut().append_pair(LOCATION_PARAM, identifier);
        Ok(url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_url_appends_location() {
        let ep = Endpoints::default();
        let url = ep.status_url("0b9a4c3e-7f1d-4a2b-9c8e-1d2f3a4b5c6d").unwrap();
        assert_eq!(
            url.as_str(),
            "http://quantum-cloud-2.alscloud.net/washalertweb/washalertweb.aspx?location=0b9a4c3e-7f1d-4a2b-9c8e-1d2f3a4b5c6d"
        );
    }

    #[test]
    fn status_url_encodes_identifier() {
        let ep = Endpoints { status_base: s!("http://localhost/status"), ..Endpoints::default() };
        let url = ep.status_url("a b&c").unwrap();
        assert_eq!(url.query(), Some("location=a+b%26c"));
    }

    #[test]
    fn with_base_points_both_endpoints_at_host() {
        let ep = Endpoints::with_base("http://127.0.0.1:8080/").unwrap();
        assert_eq!(ep.status_base, "http://127.0.0.1:8080/washalertweb/washalertweb.aspx");
        assert_eq!(ep.housing_page, "http://127.0.0.1:8080/laundry");
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        assert_eq!(ClientOptions::default().timeout, Duration::from_secs(10));
    }
}
