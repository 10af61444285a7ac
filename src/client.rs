//! Client side of the probe endpoints, used by `probe-cli`.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Outcome of a single GET against one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub path: String,
    pub status: u16,
    pub ok: bool,
}

/// Both endpoints of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub url: String,
    pub healthy: CheckReport,
    pub ready: CheckReport,
}

impl StatusSummary {
    /// True only when both endpoints answered 2xx.
    pub fn ok(&self) -> bool {
        self.healthy.ok && self.ready.ok
    }
}

pub struct StatusClient {
    client: Client,
    base_url: String,
}

impl StatusClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Use a preconfigured client (proxy settings, pooling, TLS).
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`, which is expected to start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and report its status. Any non-2xx answer is `ok: false`.
    pub async fn check(&self, path: &str) -> Result<CheckReport, reqwest::Error> {
        let res = self.client.get(self.url(path)).send().await?;
        let status = res.status();
        Ok(CheckReport {
            path: path.to_string(),
            status: status.as_u16(),
            ok: status.is_success(),
        })
    }

    /// Check both endpoints.
    pub async fn summary(
        &self,
        healthy_path: &str,
        ready_path: &str,
    ) -> Result<StatusSummary, reqwest::Error> {
        let healthy = self.check(healthy_path).await?;
        let ready = self.check(ready_path).await?;
        Ok(StatusSummary {
            url: self.base_url.clone(),
            healthy,
            ready,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slashes() {
        let client = StatusClient::with_client("http://localhost:8080//", Client::new());
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/-/ready"), "http://localhost:8080/-/ready");

        let client = StatusClient::with_client("http://localhost:8080", Client::new());
        assert_eq!(client.url("/-/healthy"), "http://localhost:8080/-/healthy");
    }

    #[test]
    fn test_summary_ok_needs_both_checks() {
        let report = |ok| CheckReport {
            path: "/".into(),
            status: if ok { 200 } else { 503 },
            ok,
        };
        let mut summary = StatusSummary {
            url: "http://localhost".into(),
            healthy: report(true),
            ready: report(false),
        };
        assert!(!summary.ok());

        summary.ready = report(true);
        assert!(summary.ok());
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = StatusSummary {
            url: "http://localhost:8080".into(),
            healthy: CheckReport { path: "/-/healthy".into(), status: 200, ok: true },
            ready: CheckReport { path: "/-/ready".into(), status: 503, ok: false },
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["url"], "http://localhost:8080");
        assert_eq!(value["healthy"]["status"], 200);
        assert_eq!(value["healthy"]["ok"], true);
        assert_eq!(value["ready"]["path"], "/-/ready");
        assert_eq!(value["ready"]["ok"], false);
    }
}
