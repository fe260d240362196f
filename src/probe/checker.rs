use async_trait::async_trait;
use reqwest::redirect::Policy;

use std::time::Duration;

use crate::config::Config;
use crate::core::constants::defaults;
use crate::core::error::Result;
use crate::core::types::ProbeResult;
use crate::reporting::logging;

/// A single reachability probe against one site.
#[async_trait]
pub trait CheckSite {
    async fn check_site(&self, site: &str) -> ProbeResult;
}

/// HTTP-backed prober sharing one client across all probes.
#[derive(Debug)]
pub struct Checker {
    client: reqwest::Client,
    use_head_requests: bool,
}

impl Checker {
    /// Build a prober from configuration.
    ///
    /// No request timeout is set; the transport's own connection and
    /// response defaults decide how long a DOWN verdict takes.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let concurrency = config.effective_concurrency();

        let client = reqwest::Client::builder()
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(user_agent)
            .pool_max_idle_per_host(concurrency.min(defaults::MAX_IDLE_CONNECTIONS_PER_HOST))
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            use_head_requests: config
                .use_head_requests
                .unwrap_or(defaults::USE_HEAD_REQUESTS),
        })
    }

    /// Read and discard the response body so the pooled connection can be
    /// reused for the next probe to the same host.
    async fn drain_body(mut response: reqwest::Response) -> reqwest::Result<()> {
        while response.chunk().await?.is_some() {}
        Ok(())
    }
}

#[async_trait]
impl CheckSite for Checker {
    async fn check_site(&self, site: &str) -> ProbeResult {
        let request = if self.use_head_requests {
            self.client.head(site)
        } else {
            self.client.get(site)
        };

        match request.send().await {
            Ok(response) => {
                let status_line = response.status().to_string();

                // A drain failure stays local to this probe: a response was
                // received, so the site is UP either way.
                if let Err(err) = Self::drain_body(response).await {
                    logging::log_warning(&format!(
                        "could not drain response body for {site}: {err}"
                    ));
                }

                ProbeResult::up(site.to_string(), status_line)
            }
            Err(err) => {
                let detail = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());

                ProbeResult::down(site.to_string(), detail)
            }
        }
    }
}
