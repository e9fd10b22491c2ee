use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("At least one of DNS or HTTP probing must be enabled.")]
    NoProbesEnabled,
    #[error("No subdomains loaded from wordlist: {}", .0.display())]
    EmptyWordlist(PathBuf),
    #[error("Invalid target domain: {0:?}")]
    InvalidDomain(String),
    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,
    #[error("Timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),
    #[error("Reading wordlist {}: {source}", path.display())]
    Wordlist { path: PathBuf, source: io::Error },
    #[error("IO: {0}")]
    Io(#[from] io::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("DNS: {0}")]
    Resolve(#[from] trust_dns_resolver::error::ResolveError),
    #[error("tokio join error: {0}")]
    TokioJoinError(#[from] tokio::task::JoinError),
}
