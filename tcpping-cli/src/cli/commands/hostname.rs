//! `tcpping hostname` – derive the hostname for a selection.

use anyhow::{bail, Result};
use serde::Serialize;
use tcpping_core::{
    derive_url, CascadeController, Catalog, LocationDictionary, Protocol, SelectionState,
};

use super::{resolve, select_scope, Scope};

/// Selection as typed on the command line
#[derive(Debug, Clone, Copy)]
pub struct HostnameRequest<'a> {
    pub protocol: Protocol,
    pub scope: Scope<'a>,
    pub provider: &'a str,
}

#[derive(Debug, Serialize)]
struct HostnameOutput<'a> {
    selection: &'a SelectionState,
    hostname: &'a str,
}

/// Run the setters in cascade order and derive the hostname.
///
/// Errors when the selection stays incomplete; never prints an empty line.
pub fn build_hostname(
    dictionary: &LocationDictionary,
    request: &HostnameRequest<'_>,
) -> Result<(SelectionState, String)> {
    let ctl = CascadeController::for_dictionary(dictionary);
    let catalog = Catalog::new(dictionary);

    let state = ctl.set_protocol(&ctl.initial_state(), request.protocol);
    let state = select_scope(dictionary, &ctl, state, &request.scope)?;

    if state.city().is_none() && catalog.city_required(state.country()) {
        bail!(
            "selection incomplete: country {} needs --city",
            state.country().unwrap_or("-")
        );
    }

    let providers = catalog.providers(state.country(), state.province(), state.city());
    let provider = resolve(&providers, request.provider, "provider")?;
    let state = ctl.set_provider(&state, Some(provider));

    if let Some(info) = catalog.provider_info(&state) {
        if !info.supports(state.protocol()) {
            tracing::warn!(
                "provider {provider} does not advertise {}",
                state.protocol().label()
            );
        }
    }

    let hostname = derive_url(&state, dictionary);
    if hostname.is_empty() {
        bail!("selection incomplete: no hostname for this combination");
    }
    Ok((state, hostname))
}

pub fn run_hostname(
    dictionary: &LocationDictionary,
    request: &HostnameRequest<'_>,
    json: bool,
) -> Result<()> {
    let (state, hostname) = build_hostname(dictionary, request)?;

    if json {
        let output = HostnameOutput {
            selection: &state,
            hostname: &hostname,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{hostname}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hostname(protocol: Protocol, scope: Scope<'_>, provider: &str) -> Result<String> {
        let dictionary = LocationDictionary::builtin().unwrap();
        let request = HostnameRequest {
            protocol,
            scope,
            provider,
        };
        build_hostname(&dictionary, &request).map(|(_, h)| h)
    }

    #[test]
    fn country_level_china() {
        let url = hostname(Protocol::DualStack, Scope::default(), "ct").unwrap();
        assert_eq!(url, "tcp.ct.cn.tcpping.top");
    }

    #[test]
    fn city_level_china() {
        let scope = Scope {
            province: Some("gd"),
            city: Some("shenzhen"),
            ..Scope::default()
        };
        let url = hostname(Protocol::V4, scope, "CT").unwrap();
        assert_eq!(url, "v4.ct-shenzhen.cn.tcpping.top");
    }

    #[test]
    fn flat_country_with_city() {
        let scope = Scope {
            country: Some("us"),
            city: Some("lax"),
            ..Scope::default()
        };
        let url = hostname(Protocol::V6, scope, "aws").unwrap();
        assert_eq!(url, "v6.aws-lax.us.tcpping.top");
    }

    #[test]
    fn flat_country_without_city_is_incomplete() {
        let scope = Scope {
            country: Some("DE"),
            ..Scope::default()
        };
        let err = hostname(Protocol::DualStack, scope, "hetzner").unwrap_err();
        assert!(err.to_string().contains("needs --city"));
    }

    #[test]
    fn provider_must_exist_in_scope() {
        let scope = Scope {
            country: Some("DE"),
            city: Some("ber"),
            ..Scope::default()
        };
        let err = hostname(Protocol::DualStack, scope, "aws").unwrap_err();
        assert!(err.to_string().contains("expected one of: hetzner"));
    }

    #[test]
    fn json_output_shape() {
        let dictionary = LocationDictionary::builtin().unwrap();
        let request = HostnameRequest {
            protocol: Protocol::DualStack,
            scope: Scope::default(),
            provider: "cu",
        };
        let (state, hostname) = build_hostname(&dictionary, &request).unwrap();
        let value = serde_json::to_value(HostnameOutput {
            selection: &state,
            hostname: &hostname,
        })
        .unwrap();
        assert_eq!(value["hostname"], "tcp.cu.cn.tcpping.top");
        assert_eq!(value["selection"]["protocol"], "tcp");
        assert_eq!(value["selection"]["country"], "CN");
    }
}
