use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Http, Scheme::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One GET per scheme. `status` and `final_url` are both `None` when the
/// request failed at the transport level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpAttempt {
    pub scheme: Scheme,
    pub status: Option<u16>,
    pub final_url: Option<String>,
}

impl HttpAttempt {
    pub fn failed(scheme: Scheme) -> Self {
        HttpAttempt {
            scheme,
            status: None,
            final_url: None,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.status, Some(status) if status < 400)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub host: String,
    /// `None` when DNS probing is disabled.
    #[serde(rename = "dns", skip_serializing_if = "Option::is_none")]
    pub dns_resolved: Option<bool>,
    /// Only filled in when IPs were requested and resolution succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,
    /// `None` when HTTP probing is disabled.
    #[serde(rename = "http", skip_serializing_if = "Option::is_none")]
    pub http_attempts: Option<Vec<HttpAttempt>>,
}

impl ProbeResult {
    pub fn is_live(&self) -> bool {
        self.dns_resolved == Some(true)
            || self
                .http_attempts
                .iter()
                .flatten()
                .any(HttpAttempt::is_live)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Live(ProbeResult),
    Absent { host: String },
}

impl ProbeOutcome {
    pub fn into_live(self) -> Option<ProbeResult> {
        match self {
            ProbeOutcome::Live(result) => Some(result),
            ProbeOutcome::Absent { .. } => None,
        }
    }
}
