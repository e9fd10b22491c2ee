use std::time::{Duration, Instant};

use crate::models::ProbeResult;

/// Live hosts of one run, sorted by host.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub results: Vec<ProbeResult>,
    pub elapsed: Duration,
}

pub fn aggregate(results: Vec<ProbeResult>, started: Instant) -> Report {
    Report {
        results: sorted(results),
        elapsed: started.elapsed(),
    }
}

fn sorted(mut results: Vec<ProbeResult>) -> Vec<ProbeResult> {
    results.retain(ProbeResult::is_live);
    results.sort_by(|a, b| a.host.cmp(&b.host));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(host: &str) -> ProbeResult {
        ProbeResult {
            host: host.to_string(),
            dns_resolved: Some(true),
            ips: None,
            http_attempts: None,
        }
    }

    fn hosts(report: &Report) -> Vec<&str> {
        report.results.iter().map(|r| r.host.as_str()).collect()
    }

    #[test]
    fn sorts_by_host() {
        let report = aggregate(
            vec![
                live("www.example.com"),
                live("api.example.com"),
                live("mail.example.com"),
                live("admin.example.com"),
            ],
            Instant::now(),
        );

        assert_eq!(
            hosts(&report),
            vec![
                "admin.example.com",
                "api.example.com",
                "mail.example.com",
                "www.example.com"
            ]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let first = aggregate(
            vec![live("b.example.com"), live("a.example.com"), live("c.example.com")],
            Instant::now(),
        );
        let second = aggregate(first.results.clone(), Instant::now());

        assert_eq!(first.results, second.results);
    }

    #[test]
    fn drops_anything_not_live() {
        let mut dead = live("dead.example.com");
        dead.dns_resolved = Some(false);

        let report = aggregate(vec![dead, live("www.example.com")], Instant::now());
        assert_eq!(hosts(&report), vec!["www.example.com"]);
    }

    #[test]
    fn empty_run() {
        let report = aggregate(Vec::new(), Instant::now());
        assert!(report.results.is_empty());
    }
}
