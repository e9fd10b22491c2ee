use std::net::IpAddr;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

use crate::{
    config::ProbeConfig,
    dns::Resolve,
    http::Fetch,
    models::{HttpAttempt, ProbeOutcome, ProbeResult, Scheme},
    report,
};

/// One complete evidence-gathering pass over a single host. Never fails:
/// network trouble of any kind ends up as [`ProbeOutcome::Absent`].
#[async_trait]
pub trait Probe: Send + Sync + 'static {
    async fn probe(&self, host: String) -> ProbeOutcome;
}

pub struct HostProber<R, F> {
    resolver: R,
    fetcher: F,
    config: ProbeConfig,
}

impl<R: Resolve, F: Fetch> HostProber<R, F> {
    pub fn new(resolver: R, fetcher: F, config: ProbeConfig) -> Self {
        HostProber {
            resolver,
            fetcher,
            config,
        }
    }

    async fn check(&self, host: String) -> ProbeOutcome {
        let mut result = ProbeResult {
            host,
            dns_resolved: None,
            ips: None,
            http_attempts: None,
        };

        if self.config.dns {
            let ips = self.resolve(&result.host).await;
            result.dns_resolved = Some(!ips.is_empty());
            if self.config.show_ips && !ips.is_empty() {
                result.ips = Some(ips.iter().map(IpAddr::to_string).collect());
            }
        }

        if self.config.http {
            let mut attempts = Vec::with_capacity(Scheme::ALL.len());
            for scheme in Scheme::ALL {
                attempts.push(self.http_attempt(scheme, &result.host).await);
            }
            result.http_attempts = Some(attempts);
        }

        if result.is_live() {
            ProbeOutcome::Live(result)
        } else {
            ProbeOutcome::Absent { host: result.host }
        }
    }

    async fn resolve(&self, host: &str) -> Vec<IpAddr> {
        let deadline = self.config.timeout;

        match timeout(deadline, self.resolver.resolve(host, deadline)).await {
            Ok(Ok(ips)) => ips,
            Ok(Err(err)) => {
                debug!(host, "dns: {}", err);
                Vec::new()
            }
            Err(_) => {
                debug!(host, "dns: timed out after {:?}", deadline);
                Vec::new()
            }
        }
    }

    async fn http_attempt(&self, scheme: Scheme, host: &str) -> HttpAttempt {
        let deadline = self.config.timeout;

        let url = match Url::parse(&format!("{}://{}", scheme, host)) {
            Ok(url) => url,
            Err(err) => {
                debug!(host, %scheme, "http: invalid url: {}", err);
                return HttpAttempt::failed(scheme);
            }
        };

        match timeout(deadline, self.fetcher.fetch(url, deadline)).await {
            Ok(Ok(res)) => HttpAttempt {
                scheme,
                status: Some(res.status),
                final_url: Some(res.final_url),
            },
            Ok(Err(err)) => {
                debug!(host, %scheme, "http: {}", err);
                HttpAttempt::failed(scheme)
            }
            Err(_) => {
                debug!(host, %scheme, "http: timed out after {:?}", deadline);
                HttpAttempt::failed(scheme)
            }
        }
    }
}

#[async_trait]
impl<R, F> Probe for HostProber<R, F>
where
    R: Resolve + 'static,
    F: Fetch + 'static,
{
    async fn probe(&self, host: String) -> ProbeOutcome {
        let deadline = self.config.probe_deadline();

        let outcome = match timeout(deadline, self.check(host.clone())).await {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(host = %host, "probe: exceeded {:?}", deadline);
                ProbeOutcome::Absent { host }
            }
        };

        report::print_outcome(&outcome, self.config.verbosity);
        outcome
    }
}
