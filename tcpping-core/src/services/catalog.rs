//! Scope-aware option lists for the presentation layer.
//!
//! Every lookup that misses yields an empty list or `None`.

use serde::Serialize;

use crate::types::{
    City, CodeMap, CountryLayout, GeoPoint, LocationDictionary, ProviderInfo, SelectionState,
};

/// One entry of a select list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// Read-only view over a dictionary that answers "what can be chosen here".
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    dictionary: &'a LocationDictionary,
}

impl<'a> Catalog<'a> {
    pub fn new(dictionary: &'a LocationDictionary) -> Self {
        Self { dictionary }
    }

    /// All countries in dictionary order
    pub fn countries(&self) -> Vec<SelectOption<'a>> {
        self.dictionary
            .countries
            .iter()
            .map(|c| SelectOption {
                code: &c.code,
                name: &c.name,
            })
            .collect()
    }

    /// Provinces of the country; empty for flat countries
    pub fn provinces(&self, country: Option<&str>) -> Vec<SelectOption<'a>> {
        match country
            .and_then(|c| self.dictionary.country(c))
            .map(|c| &c.layout)
        {
            Some(CountryLayout::Hierarchical { provinces, .. }) => provinces
                .iter()
                .map(|(code, p)| SelectOption { code, name: &p.name })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Cities in the `(country, province)` scope.
    ///
    /// Hierarchical countries list nothing until a province is chosen.
    pub fn cities(&self, country: Option<&str>, province: Option<&str>) -> Vec<SelectOption<'a>> {
        let cities: Option<&'a CodeMap<City>> = match country
            .and_then(|c| self.dictionary.country(c))
            .map(|c| &c.layout)
        {
            Some(CountryLayout::Hierarchical { provinces, .. }) => {
                province.and_then(|p| provinces.get(p)).map(|p| &p.cities)
            }
            Some(CountryLayout::Flat { cities }) => Some(cities),
            None => None,
        };

        cities
            .map(|cities| {
                cities
                    .iter()
                    .map(|(code, c)| SelectOption { code, name: &c.name })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Provider map for the `(country, province, city)` scope.
    ///
    /// Flat: the city's providers. Hierarchical: the city's, else the
    /// province's when non-empty, else the country-level providers.
    pub fn provider_map(
        &self,
        country: Option<&str>,
        province: Option<&str>,
        city: Option<&str>,
    ) -> Option<&'a CodeMap<ProviderInfo>> {
        let country = country.and_then(|c| self.dictionary.country(c))?;
        match &country.layout {
            CountryLayout::Flat { cities } => city.and_then(|c| cities.get(c)).map(|c| &c.providers),
            CountryLayout::Hierarchical {
                providers,
                provinces,
            } => {
                let province = province.and_then(|p| provinces.get(p));
                if let Some(city) = city {
                    return province
                        .and_then(|p| p.cities.get(city))
                        .map(|c| &c.providers);
                }
                match province {
                    Some(p) if !p.providers.is_empty() => Some(&p.providers),
                    _ => Some(providers),
                }
            }
        }
    }

    /// Providers in scope as select options
    pub fn providers(
        &self,
        country: Option<&str>,
        province: Option<&str>,
        city: Option<&str>,
    ) -> Vec<SelectOption<'a>> {
        self.provider_map(country, province, city)
            .map(|providers| {
                providers
                    .iter()
                    .map(|(code, p)| SelectOption { code, name: &p.name })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Provider details for the current selection
    pub fn provider_info(&self, state: &SelectionState) -> Option<&'a ProviderInfo> {
        let provider = state.provider()?;
        self.provider_map(state.country(), state.province(), state.city())
            .and_then(|m| m.get(provider))
    }

    /// Whether the country needs a city before a hostname can be derived
    pub fn city_required(&self, country: Option<&str>) -> bool {
        !country
            .and_then(|c| self.dictionary.country(c))
            .is_some_and(|c| c.is_hierarchical())
    }

    /// Display name of the selected country
    pub fn country_name(&self, state: &SelectionState) -> Option<&'a str> {
        state
            .country()
            .and_then(|c| self.dictionary.country(c))
            .map(|c| c.name.as_str())
    }

    /// Display name of the selected province
    pub fn province_name(&self, state: &SelectionState) -> Option<&'a str> {
        let country = state.country().and_then(|c| self.dictionary.country(c))?;
        country.province(state.province()?).map(|p| p.name.as_str())
    }

    /// Display name of the selected city
    pub fn city_name(&self, state: &SelectionState) -> Option<&'a str> {
        let country = state.country().and_then(|c| self.dictionary.country(c))?;
        country
            .city(state.province(), state.city()?)
            .map(|c| c.name.as_str())
    }

    /// Most specific known coordinate of the selection: city, then province,
    /// then country.
    pub fn location_of(&self, state: &SelectionState) -> Option<GeoPoint> {
        let country = state.country().and_then(|c| self.dictionary.country(c))?;
        let province = state.province().and_then(|p| country.province(p));
        let city = state.city().and_then(|c| country.city(state.province(), c));

        city.and_then(|c| c.loc)
            .or_else(|| province.and_then(|p| p.loc))
            .or(country.loc)
    }

    /// Coordinates of every city in the selection's scope; the whole country
    /// when a hierarchical country has no province chosen.
    pub fn scope_points(&self, state: &SelectionState) -> Vec<GeoPoint> {
        let Some(country) = state.country().and_then(|c| self.dictionary.country(c)) else {
            return Vec::new();
        };

        match state.province().and_then(|p| country.province(p)) {
            Some(province) => province.cities.values().filter_map(|c| c.loc).collect(),
            None => country.all_cities().filter_map(|(_, c)| c.loc).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_dictionary, selection};
    use crate::types::Protocol;

    fn codes(options: &[SelectOption<'_>]) -> Vec<String> {
        options.iter().map(|o| o.code.to_string()).collect()
    }

    #[test]
    fn countries_keep_dictionary_order() {
        let dict = sample_dictionary();
        assert_eq!(codes(&Catalog::new(&dict).countries()), vec!["CN", "US"]);
    }

    #[test]
    fn provinces_only_for_hierarchical() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        assert_eq!(codes(&catalog.provinces(Some("CN"))), vec!["bj", "gd", "sc"]);
        assert!(catalog.provinces(Some("US")).is_empty());
        assert!(catalog.provinces(None).is_empty());
    }

    #[test]
    fn hierarchical_cities_need_province() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        assert!(catalog.cities(Some("CN"), None).is_empty());
        assert_eq!(
            codes(&catalog.cities(Some("CN"), Some("gd"))),
            vec!["guangzhou", "shenzhen"]
        );
        assert!(catalog.cities(Some("CN"), Some("bj")).is_empty());
    }

    #[test]
    fn flat_cities_ignore_province() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        assert_eq!(codes(&catalog.cities(Some("US"), None)), vec!["lax", "nyc"]);
        assert_eq!(codes(&catalog.cities(Some("US"), Some("x"))), vec!["lax", "nyc"]);
    }

    #[test]
    fn hierarchical_provider_fallback_chain() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        // country level
        assert_eq!(codes(&catalog.providers(Some("CN"), None, None)), vec!["ct", "cu"]);
        // province level
        assert_eq!(
            codes(&catalog.providers(Some("CN"), Some("gd"), None)),
            vec!["cm", "ct"]
        );
        // province without providers falls back to the country
        assert_eq!(
            codes(&catalog.providers(Some("CN"), Some("sc"), None)),
            vec!["ct", "cu"]
        );
        // city level
        assert_eq!(
            codes(&catalog.providers(Some("CN"), Some("gd"), Some("guangzhou"))),
            vec!["ct"]
        );
    }

    #[test]
    fn flat_providers_need_city() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        assert!(catalog.providers(Some("US"), None, None).is_empty());
        assert_eq!(
            codes(&catalog.providers(Some("US"), None, Some("nyc"))),
            vec!["aws", "gcp"]
        );
        assert!(catalog.providers(Some("US"), None, Some("atlantis")).is_empty());
    }

    #[test]
    fn unknown_country_yields_nothing() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        assert!(catalog.cities(Some("XX"), None).is_empty());
        assert!(catalog.providers(Some("XX"), None, Some("a")).is_empty());
        assert!(catalog.city_required(Some("XX")));
    }

    #[test]
    fn city_required_for_flat_countries_only() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        assert!(!catalog.city_required(Some("CN")));
        assert!(catalog.city_required(Some("US")));
    }

    #[test]
    fn display_names_follow_selection() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        let s = selection(Protocol::V4, Some("CN"), Some("gd"), Some("shenzhen"), Some("ct"));
        assert_eq!(catalog.country_name(&s), Some("China"));
        assert_eq!(catalog.province_name(&s), Some("Guangdong"));
        assert_eq!(catalog.city_name(&s), Some("Shenzhen"));
        assert_eq!(catalog.provider_info(&s).map(|p| p.name.as_str()), Some("China Telecom"));
    }

    #[test]
    fn location_prefers_most_specific() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);

        let city = selection(Protocol::V4, Some("CN"), Some("gd"), Some("shenzhen"), None);
        assert_eq!(catalog.location_of(&city), Some(GeoPoint::new(22.54, 114.05)));

        let province = selection(Protocol::V4, Some("CN"), Some("gd"), None, None);
        assert_eq!(catalog.location_of(&province), Some(GeoPoint::new(23.13, 113.26)));

        // Sichuan carries no coordinate of its own
        let bare = selection(Protocol::V4, Some("CN"), Some("sc"), None, None);
        assert_eq!(catalog.location_of(&bare), Some(GeoPoint::new(35.86, 104.19)));

        let none = selection(Protocol::V4, None, None, None, None);
        assert_eq!(catalog.location_of(&none), None);
    }

    #[test]
    fn scope_points_narrow_with_province() {
        let dict = sample_dictionary();
        let catalog = Catalog::new(&dict);
        let country = selection(Protocol::V4, Some("CN"), None, None, None);
        assert_eq!(catalog.scope_points(&country).len(), 3);
        let gd = selection(Protocol::V4, Some("CN"), Some("gd"), None, None);
        assert_eq!(catalog.scope_points(&gd).len(), 2);
        // Los Angeles has no coordinate
        let us = selection(Protocol::V4, Some("US"), None, None, None);
        assert_eq!(catalog.scope_points(&us).len(), 1);
    }
}
