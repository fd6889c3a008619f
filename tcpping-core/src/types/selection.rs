//! Selection state types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// IP family of the generated hostname
///
/// `DualStack` leaves the family unpinned and is written as `tcp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Protocol {
    #[default]
    #[serde(rename = "tcp")]
    DualStack,
    #[serde(rename = "v4")]
    V4,
    #[serde(rename = "v6")]
    V6,
}

impl Protocol {
    /// All protocols, in display order
    pub fn all() -> &'static [Protocol] {
        &[Protocol::DualStack, Protocol::V4, Protocol::V6]
    }

    /// Label used in the hostname
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::DualStack => "tcp",
            Protocol::V4 => "v4",
            Protocol::V6 => "v6",
        }
    }

    /// Human readable name
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::DualStack => "Dual Stack",
            Protocol::V4 => "IPv4",
            Protocol::V6 => "IPv6",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "tcp" | "dual" => Ok(Protocol::DualStack),
            "v4" | "ipv4" => Ok(Protocol::V4),
            "v6" | "ipv6" => Ok(Protocol::V6),
            other => Err(CoreError::ValidationError(format!(
                "Unknown protocol: {other} (expected tcp, v4 or v6)"
            ))),
        }
    }
}

/// The user's current selection
///
/// Only [`crate::services::CascadeController`] builds new states, so a change
/// upstream always clears the fields below it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    pub(crate) protocol: Protocol,
    pub(crate) country: Option<String>,
    pub(crate) province: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) provider: Option<String>,
    /// Set briefly after a successful copy
    pub(crate) copied: bool,
}

impl SelectionState {
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn copied(&self) -> bool {
        self.copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_stack_serializes_as_tcp() {
        assert_eq!(Protocol::default().as_str(), "tcp");
        assert_eq!(serde_json::to_string(&Protocol::DualStack).unwrap(), r#""tcp""#);
        assert_eq!(serde_json::to_string(&Protocol::V6).unwrap(), r#""v6""#);
    }

    #[test]
    fn parse_protocol_aliases() {
        assert_eq!("".parse::<Protocol>().unwrap(), Protocol::DualStack);
        assert_eq!("TCP".parse::<Protocol>().unwrap(), Protocol::DualStack);
        assert_eq!("ipv4".parse::<Protocol>().unwrap(), Protocol::V4);
        assert_eq!(" v6 ".parse::<Protocol>().unwrap(), Protocol::V6);
    }

    #[test]
    fn parse_protocol_rejects_unknown() {
        assert!(matches!(
            "udp".parse::<Protocol>(),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn default_state_is_all_unset() {
        let state = SelectionState::default();
        assert_eq!(state.protocol(), Protocol::DualStack);
        assert!(state.country().is_none());
        assert!(state.province().is_none());
        assert!(state.city().is_none());
        assert!(state.provider().is_none());
        assert!(!state.copied());
    }
}
