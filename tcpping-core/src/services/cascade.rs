//! Cascade controller: the only way to change a [`SelectionState`].
//!
//! Every setter is a pure `(state, input) -> state` transition. Changing a
//! broader selection clears every narrower one, and every setter clears the
//! transient `copied` flag. Inputs are not validated against the dictionary;
//! the option lists shown to the user are the gatekeepers of validity.

use crate::error::{CoreError, CoreResult};
use crate::types::{LocationDictionary, Protocol, SelectionState};

/// Empty or whitespace-only input means "unset".
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Owns the cascade rules for one dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeController {
    /// Code of the hierarchical-form country
    hierarchical: Option<String>,
}

impl CascadeController {
    pub fn new(hierarchical_country: Option<&str>) -> Self {
        Self {
            hierarchical: normalize(hierarchical_country),
        }
    }

    /// Controller whose hierarchical country is the dictionary's.
    pub fn for_dictionary(dictionary: &LocationDictionary) -> Self {
        Self::new(dictionary.hierarchical_country().map(|c| c.code.as_str()))
    }

    /// Session start: country defaults to the hierarchical-form country.
    pub fn initial_state(&self) -> SelectionState {
        SelectionState {
            country: self.hierarchical.clone(),
            ..SelectionState::default()
        }
    }

    /// Whether `country` is the hierarchical-form country
    pub fn is_hierarchical(&self, country: Option<&str>) -> bool {
        match (country, self.hierarchical.as_deref()) {
            (Some(c), Some(h)) => c.eq_ignore_ascii_case(h),
            _ => false,
        }
    }

    pub fn set_protocol(&self, state: &SelectionState, protocol: Protocol) -> SelectionState {
        SelectionState {
            protocol,
            copied: false,
            ..state.clone()
        }
    }

    /// Always resets province, city and provider, even for the same country.
    pub fn set_country(&self, state: &SelectionState, country: Option<&str>) -> SelectionState {
        SelectionState {
            protocol: state.protocol,
            country: normalize(country),
            province: None,
            city: None,
            provider: None,
            copied: false,
        }
    }

    /// Rejects a province for any country other than the hierarchical one;
    /// the state is left untouched in that case. Clearing is always allowed.
    pub fn set_province(
        &self,
        state: &SelectionState,
        province: Option<&str>,
    ) -> CoreResult<SelectionState> {
        let province = normalize(province);
        if province.is_some() && !self.is_hierarchical(state.country()) {
            log::warn!(
                "Rejected province {:?} for country {:?}",
                province,
                state.country()
            );
            return Err(CoreError::ProvinceNotApplicable(
                state.country.clone().unwrap_or_default(),
            ));
        }

        Ok(SelectionState {
            province,
            city: None,
            provider: None,
            copied: false,
            ..state.clone()
        })
    }

    pub fn set_city(&self, state: &SelectionState, city: Option<&str>) -> SelectionState {
        SelectionState {
            city: normalize(city),
            provider: None,
            copied: false,
            ..state.clone()
        }
    }

    pub fn set_provider(&self, state: &SelectionState, provider: Option<&str>) -> SelectionState {
        SelectionState {
            provider: normalize(provider),
            copied: false,
            ..state.clone()
        }
    }

    /// Raise the transient copied flag after a successful clipboard write.
    pub fn mark_copied(&self, state: &SelectionState) -> SelectionState {
        SelectionState {
            copied: true,
            ..state.clone()
        }
    }

    /// Drop the copied flag; a no-op when it is already down.
    pub fn clear_copied(&self, state: &SelectionState) -> SelectionState {
        SelectionState {
            copied: false,
            ..state.clone()
        }
    }
}
