use crate::{aggregator::Report, models::ProbeOutcome};

pub fn hit_line(host: &str, ips: Option<&[String]>) -> String {
    match ips {
        Some(ips) if !ips.is_empty() => format!("[+] {} {}", host, ips.join(" ")),
        _ => format!("[+] {}", host),
    }
}

pub fn miss_line(host: &str) -> String {
    format!("[-] {}", host)
}

/// Hits are printed from verbosity 1, misses from verbosity 2.
pub fn print_outcome(outcome: &ProbeOutcome, verbosity: u8) {
    match outcome {
        ProbeOutcome::Live(result) if verbosity >= 1 => {
            println!("{}", hit_line(&result.host, result.ips.as_deref()));
        }
        ProbeOutcome::Absent { host } if verbosity >= 2 => println!("{}", miss_line(host)),
        _ => {}
    }
}

pub fn summary_line(report: &Report) -> String {
    format!(
        "Done. Found {} subdomains in {:.1}s.",
        report.results.len(),
        report.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::ProbeResult;

    #[test]
    fn hit_line_lists_ips_when_present() {
        let ips = vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()];
        assert_eq!(
            hit_line("www.example.com", Some(&ips)),
            "[+] www.example.com 10.0.0.1 10.0.0.2"
        );
        assert_eq!(hit_line("www.example.com", Some(&[])), "[+] www.example.com");
        assert_eq!(hit_line("www.example.com", None), "[+] www.example.com");
        assert_eq!(miss_line("api.example.com"), "[-] api.example.com");
    }

    #[test]
    fn summary() {
        let report = Report {
            results: vec![ProbeResult {
                host: "www.example.com".to_string(),
                dns_resolved: Some(true),
                ips: None,
                http_attempts: None,
            }],
            elapsed: Duration::from_millis(2340),
        };
        assert_eq!(summary_line(&report), "Done. Found 1 subdomains in 2.3s.");
    }
}
