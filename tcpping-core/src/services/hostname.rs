//! Hostname derivation for the tcpping.top latency service.
//!
//! Output shape: `{proto}.{provider}[-{city}].{country}.tcpping.top`, or an
//! empty string while the selection is incomplete.

use crate::types::{LocationDictionary, SelectionState};

/// Zone every generated hostname lives under
pub const HOSTNAME_SUFFIX: &str = "tcpping.top";

/// Derive the ping hostname for a selection.
///
/// Missing fields yield `""`, never an error. A city is optional for the
/// hierarchical-form country and mandatory everywhere else (countries missing
/// from the dictionary follow the mandatory rule).
pub fn derive_url(state: &SelectionState, dictionary: &LocationDictionary) -> String {
    let proto = state.protocol().as_str();

    let (Some(provider), Some(country)) = (state.provider(), state.country()) else {
        return String::new();
    };

    let hierarchical = dictionary
        .country(country)
        .is_some_and(|c| c.is_hierarchical());
    let country = country.to_lowercase();

    match state.city() {
        Some(city) => format!("{proto}.{provider}-{city}.{country}.{HOSTNAME_SUFFIX}"),
        None if hierarchical => format!("{proto}.{provider}.{country}.{HOSTNAME_SUFFIX}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_dictionary, selection};
    use crate::types::Protocol;

    fn url(
        protocol: Protocol,
        country: Option<&str>,
        province: Option<&str>,
        city: Option<&str>,
        provider: Option<&str>,
    ) -> String {
        derive_url(
            &selection(protocol, country, province, city, provider),
            &sample_dictionary(),
        )
    }

    #[test]
    fn china_country_level() {
        assert_eq!(
            url(Protocol::DualStack, Some("CN"), None, None, Some("ct")),
            "tcp.ct.cn.tcpping.top"
        );
    }

    #[test]
    fn china_province_without_city_stays_country_level() {
        assert_eq!(
            url(Protocol::V6, Some("CN"), Some("gd"), None, Some("cm")),
            "v6.cm.cn.tcpping.top"
        );
    }

    #[test]
    fn china_with_city() {
        assert_eq!(
            url(Protocol::V4, Some("CN"), Some("gd"), Some("shenzhen"), Some("ct")),
            "v4.ct-shenzhen.cn.tcpping.top"
        );
    }

    #[test]
    fn china_city_without_province() {
        let dict = crate::LocationDictionary::builtin().unwrap();
        let ctl = crate::services::CascadeController::for_dictionary(&dict);
        let s = ctl.set_protocol(&ctl.initial_state(), Protocol::V4);
        let s = ctl.set_city(&s, Some("shenzhen"));
        let s = ctl.set_provider(&s, Some("ct"));
        assert_eq!(s.province(), None);
        assert_eq!(derive_url(&s, &dict), "v4.ct-shenzhen.cn.tcpping.top");
    }

    #[test]
    fn flat_country_requires_city() {
        assert_eq!(url(Protocol::V4, Some("US"), None, None, Some("anything")), "");
    }

    #[test]
    fn flat_country_complete() {
        assert_eq!(
            url(Protocol::V6, Some("US"), None, Some("nyc"), Some("aws")),
            "v6.aws-nyc.us.tcpping.top"
        );
    }

    #[test]
    fn missing_country_is_incomplete() {
        assert_eq!(url(Protocol::V4, None, None, Some("nyc"), Some("aws")), "");
    }

    #[test]
    fn missing_provider_is_incomplete() {
        for (country, province, city) in [
            (Some("CN"), None, None),
            (Some("CN"), Some("gd"), Some("shenzhen")),
            (Some("US"), None, Some("nyc")),
            (None, None, None),
        ] {
            assert_eq!(url(Protocol::DualStack, country, province, city, None), "");
        }
    }

    #[test]
    fn unknown_country_follows_flat_rule() {
        assert_eq!(url(Protocol::V4, Some("FR"), None, None, Some("ovh")), "");
        assert_eq!(
            url(Protocol::V4, Some("FR"), None, Some("par"), Some("ovh")),
            "v4.ovh-par.fr.tcpping.top"
        );
    }

    #[test]
    fn country_code_is_lower_cased_other_codes_verbatim() {
        assert_eq!(
            url(Protocol::DualStack, Some("Us"), None, Some("NYC"), Some("aws")),
            "tcp.aws-NYC.us.tcpping.top"
        );
    }

    #[test]
    fn copied_flag_does_not_affect_output() {
        let dict = sample_dictionary();
        let ctl = crate::services::CascadeController::for_dictionary(&dict);
        let s = selection(Protocol::V4, Some("US"), None, Some("nyc"), Some("aws"));
        assert_eq!(derive_url(&ctl.mark_copied(&s), &dict), derive_url(&s, &dict));
    }
}
