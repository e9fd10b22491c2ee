use std::{net::IpAddr, time::Duration};

use async_trait::async_trait;
use tracing::warn;
use trust_dns_resolver::{
    config::{ResolverConfig, ResolverOpts},
    system_conf, TokioAsyncResolver,
};

use crate::Error;

pub type DnsResolver = TokioAsyncResolver;

/// Resolves a host to its addresses. The caller enforces `timeout` as the
/// deadline, so implementations may treat it as a hint.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, host: &str, timeout: Duration) -> Result<Vec<IpAddr>, Error>;
}

/// Builds a resolver from the system configuration, with `timeout` set on the
/// resolver's own options rather than on any process-wide default.
pub fn new_resolver(timeout: Duration) -> Result<DnsResolver, Error> {
    let (config, mut opts) = match system_conf::read_system_conf() {
        Ok(conf) => conf,
        Err(err) => {
            warn!("dns: reading system configuration failed, using defaults: {}", err);
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.timeout = timeout;
    opts.attempts = 1;

    Ok(TokioAsyncResolver::tokio(config, opts)?)
}

#[async_trait]
impl Resolve for DnsResolver {
    // the resolver's own opts already carry the same timeout
    async fn resolve(&self, host: &str, _timeout: Duration) -> Result<Vec<IpAddr>, Error> {
        let ips = self.lookup_ip(host).await?;
        Ok(ips.iter().collect())
    }
}
