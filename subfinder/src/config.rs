use std::time::Duration;

use crate::{args::Args, Error};

/// Longest accepted per-operation timeout.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(3600);

/// Immutable probing configuration, shared read-only by every probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeConfig {
    /// Deadline applied to each individual DNS lookup and HTTP request.
    pub timeout: Duration,
    pub dns: bool,
    pub http: bool,
    pub show_ips: bool,
    pub verbosity: u8,
}

impl ProbeConfig {
    pub fn from_args(args: &Args) -> Result<Self, Error> {
        let config = ProbeConfig {
            timeout: parse_timeout(args.timeout)?,
            dns: !args.skip_dns,
            http: !args.skip_http,
            show_ips: args.show_ips,
            verbosity: args.verbosity(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.dns && !self.http {
            return Err(Error::NoProbesEnabled);
        }
        Ok(())
    }

    /// Upper bound for a whole probe: one timeout per network operation
    /// (DNS lookup, then one request per scheme) plus one timeout of grace.
    pub fn probe_deadline(&self) -> Duration {
        let mut operations = 1;
        if self.dns {
            operations += 1;
        }
        if self.http {
            operations += 2;
        }
        self.timeout.saturating_mul(operations)
    }
}

fn parse_timeout(seconds: f64) -> Result<Duration, Error> {
    if !seconds.is_finite() || seconds <= 0.0 || seconds > MAX_TIMEOUT.as_secs_f64() {
        return Err(Error::InvalidTimeout(seconds));
    }
    Ok(Duration::from_secs_f64(seconds))
}

/// Trims whitespace and surrounding dots, lowercases.
pub fn normalize_domain(domain: &str) -> Result<String, Error> {
    let normalized = domain.trim().trim_matches('.').to_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return Err(Error::InvalidDomain(domain.to_string()));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(dns: bool, http: bool) -> ProbeConfig {
        ProbeConfig {
            timeout: Duration::from_secs(3),
            dns,
            http,
            show_ips: false,
            verbosity: 1,
        }
    }

    #[test]
    fn rejects_when_both_probes_disabled() {
        assert!(matches!(
            config(false, false).validate(),
            Err(Error::NoProbesEnabled)
        ));
        assert!(config(true, false).validate().is_ok());
        assert!(config(false, true).validate().is_ok());
    }

    #[test]
    fn rejects_bad_timeouts() {
        for seconds in [0.0, -1.0, f64::NAN, f64::INFINITY, 3600.5, 1e19] {
            assert!(matches!(
                parse_timeout(seconds),
                Err(Error::InvalidTimeout(_))
            ));
        }
        assert_eq!(parse_timeout(0.5).unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn probe_deadline_covers_every_operation() {
        assert_eq!(config(true, true).probe_deadline(), Duration::from_secs(12));
        assert_eq!(config(true, false).probe_deadline(), Duration::from_secs(6));
        assert_eq!(config(false, true).probe_deadline(), Duration::from_secs(9));
    }

    #[test]
    fn huge_timeout_is_rejected_from_args() {
        let args = Args::try_parse_from([
            "subfinder", "-d", "example.com", "-w", "subs.txt", "--timeout", "1e19",
        ])
        .unwrap();

        assert!(matches!(
            ProbeConfig::from_args(&args),
            Err(Error::InvalidTimeout(_))
        ));
    }

    #[test]
    fn probe_deadline_saturates() {
        let mut config = config(true, true);
        config.timeout = Duration::MAX;
        assert_eq!(config.probe_deadline(), Duration::MAX);

        config.timeout = MAX_TIMEOUT;
        assert_eq!(config.probe_deadline(), MAX_TIMEOUT * 4);
    }

    #[test]
    fn domain_normalization() {
        assert_eq!(normalize_domain(" Example.COM. ").unwrap(), "example.com");
        assert_eq!(normalize_domain(".example.com").unwrap(), "example.com");
        assert!(matches!(
            normalize_domain(" .. "),
            Err(Error::InvalidDomain(_))
        ));
        assert!(normalize_domain("exa mple.com").is_err());
    }
}
