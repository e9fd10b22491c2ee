use std::{collections::HashSet, fs, path::Path};

use regex::Regex;
use tracing::debug;

use crate::Error;

/// Reads a wordlist file and returns its normalized, deduplicated labels.
pub fn load(path: &Path) -> Result<Vec<String>, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Wordlist {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let labels = normalize(text.lines());
    debug!(path = %path.display(), count = labels.len(), "wordlist loaded");

    if labels.is_empty() {
        return Err(Error::EmptyWordlist(path.to_path_buf()));
    }
    Ok(labels)
}

/// Lowercases, keeps only `[a-z0-9_-]` lines, maps `_` to `-`, strips
/// hyphens a DNS label cannot start or end with, and drops duplicates while
/// preserving first-seen order.
pub fn normalize<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let allowed = Regex::new(r"^[a-z0-9_-]+$").expect("wordlist: compiling label regex");
    let mut seen = HashSet::new();

    lines
        .into_iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| allowed.is_match(line))
        .map(|line| line.replace('_', "-").trim_matches('-').to_string())
        .filter(|label| !label.is_empty())
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

pub fn hosts(labels: &[String], domain: &str) -> Vec<String> {
    labels
        .iter()
        .map(|label| format!("{}.{}", label, domain))
        .collect()
}
