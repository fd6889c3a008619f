//! Ping target normalisation and classification

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static IPV4_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").ok());
static IPV6_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([a-fA-F0-9:]+:+)+[a-fA-F0-9]+$").ok());
static SCHEME_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)^https?://").ok());
static FQDN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(([a-zA-Z0-9-]{1,63}\.)+[a-zA-Z]{2,63})$").ok());
static LABEL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9-]{1,63})$").ok());

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

/// What a ping target looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Ipv4,
    Ipv6,
    Hostname,
    Invalid,
}

/// Classified target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Input after cleaning
    pub value: String,
    pub kind: TargetKind,
}

/// Strip scheme, path and port from user input.
///
/// `https://example.com:8443/x` becomes `example.com`. Colons are treated as
/// a port separator, so IPv6 literals do not survive this step.
pub fn clean_hostname(input: &str) -> String {
    let value = input.trim();
    let value = match SCHEME_RE.as_ref().and_then(|re| re.find(value)) {
        Some(m) => &value[m.end()..],
        None => value,
    };
    let value = value.split('/').next().unwrap_or_default();
    let value = value.split(':').next().unwrap_or_default();
    value.to_string()
}

/// Dotted quad shape; octet ranges are not checked
pub fn is_ipv4(value: &str) -> bool {
    matches(&IPV4_RE, value.trim())
}

pub fn is_ipv6(value: &str) -> bool {
    matches(&IPV6_RE, value.trim())
}

/// A dotted name ending in an alphabetic TLD, or a single label
pub fn is_hostname(value: &str) -> bool {
    matches(&FQDN_RE, value) || matches(&LABEL_RE, value)
}

/// Classify raw user input.
///
/// IPv6 literals (optionally bracketed) are recognised before cleaning;
/// everything else is cleaned first.
pub fn classify_target(input: &str) -> Target {
    let trimmed = input.trim();
    let bare = trimmed
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(trimmed);
    if is_ipv6(bare) {
        return Target {
            value: bare.to_string(),
            kind: TargetKind::Ipv6,
        };
    }

    let value = clean_hostname(trimmed);
    let kind = if is_ipv4(&value) {
        TargetKind::Ipv4
    } else if is_hostname(&value) {
        TargetKind::Hostname
    } else {
        TargetKind::Invalid
    };
    log::debug!("Classified {input:?} as {kind:?}");
    Target { value, kind }
}
