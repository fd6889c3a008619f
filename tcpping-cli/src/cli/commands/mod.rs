//! CLI command handlers, one per file.

mod check;
mod dictgen;
mod hostname;
mod list;

use anyhow::{bail, Result};
use tcpping_core::{
    CascadeController, Catalog, CoreError, LocationDictionary, SelectOption, SelectionState,
};

pub use check::run_check;
pub use dictgen::{run_dictgen, DictgenPaths};
pub use hostname::{run_hostname, HostnameRequest};
pub use list::run_list;

/// How many candidates an "unknown code" error lists
const SUGGESTION_LIMIT: usize = 12;

/// Location part of a selection as typed on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope<'a> {
    pub country: Option<&'a str>,
    pub province: Option<&'a str>,
    pub city: Option<&'a str>,
}

/// Match `input` against the option codes, ignoring ASCII case.
fn resolve<'a>(options: &[SelectOption<'a>], input: &str, what: &str) -> Result<&'a str> {
    let wanted = input.trim();
    if let Some(option) = options.iter().find(|o| o.code.eq_ignore_ascii_case(wanted)) {
        return Ok(option.code);
    }
    if options.is_empty() {
        bail!("unknown {what} '{input}': no {what} options in this scope");
    }

    let mut codes: Vec<&str> = options
        .iter()
        .take(SUGGESTION_LIMIT)
        .map(|o| o.code)
        .collect();
    if options.len() > SUGGESTION_LIMIT {
        codes.push("...");
    }
    bail!("unknown {what} '{input}', expected one of: {}", codes.join(", "))
}

/// Apply country, province and city through the cascade, in that order.
///
/// A city of the country with provinces may be given without its province;
/// the owning province is filled in, since city codes are unique there.
fn select_scope(
    dictionary: &LocationDictionary,
    ctl: &CascadeController,
    state: SelectionState,
    scope: &Scope<'_>,
) -> Result<SelectionState> {
    let catalog = Catalog::new(dictionary);
    let mut state = state;

    if let Some(country) = scope.country {
        let code = catalog
            .countries()
            .into_iter()
            .find(|o| o.code.eq_ignore_ascii_case(country.trim()))
            .map(|o| o.code)
            .ok_or_else(|| CoreError::CountryNotFound(country.to_string()))?;
        state = ctl.set_country(&state, Some(code));
    }

    let hierarchical = ctl.is_hierarchical(state.country());

    let province = match (scope.province, scope.city) {
        (Some(province), _) if hierarchical => {
            Some(resolve(&catalog.provinces(state.country()), province, "province")?)
        }
        // rejected by the cascade with ProvinceNotApplicable
        (Some(province), _) => Some(province),
        (None, Some(city)) if hierarchical => {
            let owner = owning_province(&catalog, &state, city);
            if let Some(owner) = owner {
                tracing::debug!("city {city} belongs to province {owner}");
            }
            owner
        }
        (None, _) => None,
    };
    if let Some(province) = province {
        state = ctl.set_province(&state, Some(province))?;
    }

    if let Some(city) = scope.city {
        let code = resolve(&catalog.cities(state.country(), state.province()), city, "city")?;
        state = ctl.set_city(&state, Some(code));
    }

    Ok(state)
}

/// Province of the selected country that lists `city`
fn owning_province<'a>(
    catalog: &Catalog<'a>,
    state: &SelectionState,
    city: &str,
) -> Option<&'a str> {
    catalog
        .provinces(state.country())
        .into_iter()
        .map(|p| p.code)
        .find(|&p| {
            catalog
                .cities(state.country(), Some(p))
                .iter()
                .any(|c| c.code.eq_ignore_ascii_case(city.trim()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> (LocationDictionary, CascadeController) {
        let dictionary = LocationDictionary::builtin().unwrap();
        let ctl = CascadeController::for_dictionary(&dictionary);
        (dictionary, ctl)
    }

    #[test]
    fn codes_match_case_insensitively() {
        let (dictionary, ctl) = builtin();
        let scope = Scope {
            country: Some("cn"),
            province: Some("GD"),
            city: Some("ShenZhen"),
        };
        let state = select_scope(&dictionary, &ctl, ctl.initial_state(), &scope).unwrap();
        assert_eq!(state.country(), Some("CN"));
        assert_eq!(state.province(), Some("gd"));
        assert_eq!(state.city(), Some("shenzhen"));
    }

    #[test]
    fn province_is_inferred_from_city() {
        let (dictionary, ctl) = builtin();
        let scope = Scope {
            city: Some("shenzhen"),
            ..Scope::default()
        };
        let state = select_scope(&dictionary, &ctl, ctl.initial_state(), &scope).unwrap();
        assert_eq!(state.province(), Some("gd"));
        assert_eq!(state.city(), Some("shenzhen"));
    }

    #[test]
    fn unknown_country_is_reported() {
        let (dictionary, ctl) = builtin();
        let scope = Scope {
            country: Some("XX"),
            ..Scope::default()
        };
        let err = select_scope(&dictionary, &ctl, ctl.initial_state(), &scope).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::CountryNotFound(_))
        ));
    }

    #[test]
    fn province_on_flat_country_is_rejected() {
        let (dictionary, ctl) = builtin();
        let scope = Scope {
            country: Some("US"),
            province: Some("ca"),
            ..Scope::default()
        };
        let err = select_scope(&dictionary, &ctl, ctl.initial_state(), &scope).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::ProvinceNotApplicable(_))
        ));
    }

    #[test]
    fn unknown_code_lists_candidates() {
        let (dictionary, _) = builtin();
        let catalog = Catalog::new(&dictionary);
        let err = resolve(&catalog.countries(), "FR", "country").unwrap_err();
        assert!(err.to_string().contains("CN, US, DE"));

        let err = resolve(&catalog.provinces(Some("CN")), "zz", "province").unwrap_err();
        assert!(err.to_string().ends_with("..."));
    }
}
