//! `tcpping check <target>` – clean and classify a ping target.

use anyhow::{bail, Result};
use tcpping_core::utils::target::{classify_target, TargetKind};

fn describe(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Ipv4 => "IPv4 address",
        TargetKind::Ipv6 => "IPv6 address",
        TargetKind::Hostname => "hostname",
        TargetKind::Invalid => "invalid",
    }
}

pub fn run_check(input: &str, json: bool) -> Result<()> {
    let target = classify_target(input);
    tracing::debug!("'{input}' cleaned to '{}'", target.value);

    if json {
        println!("{}", serde_json::to_string_pretty(&target)?);
    } else {
        println!("{}\t{}", target.value, describe(target.kind));
    }

    if target.kind == TargetKind::Invalid {
        bail!("'{input}' is not an IP address or hostname");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_targets_pass() {
        assert!(run_check("https://example.com:8443/path", false).is_ok());
        assert!(run_check("1.1.1.1", true).is_ok());
    }

    #[test]
    fn invalid_target_fails() {
        assert!(run_check("not a host", false).is_err());
        assert_eq!(describe(TargetKind::Invalid), "invalid");
    }
}
