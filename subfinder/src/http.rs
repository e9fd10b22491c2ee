use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, Client};
use url::Url;

use crate::Error;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// What a completed GET tells us: the status and where redirects ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub final_url: String,
}

#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: Url, timeout: Duration) -> Result<HttpResponse, Error>;
}

/// Certificate verification is disabled: probing checks that something
/// answers, not that it can be trusted.
pub fn new_http_client(timeout: Duration) -> Result<Client, Error> {
    let http_client = Client::builder()
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(timeout)
        .danger_accept_invalid_certs(true)
        .user_agent(USER_AGENT)
        .build()?;

    Ok(http_client)
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, url: Url, timeout: Duration) -> Result<HttpResponse, Error> {
        let res = self.get(url).timeout(timeout).send().await?;

        Ok(HttpResponse {
            status: res.status().as_u16(),
            final_url: res.url().to_string(),
        })
    }
}
