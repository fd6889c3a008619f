//! Location dictionary type definitions
//!
//! The dictionary is read-only reference data: countries, optionally grouped
//! provinces, cities and the hosting providers reachable from each scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::selection::Protocol;

/// Code-keyed map, ordered by code
pub type CodeMap<T> = BTreeMap<String, T>;

/// Geographic coordinate used by the map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Hosting provider entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Display name
    pub name: String,
    /// Reachable over IPv4
    pub v4: bool,
    /// Reachable over IPv6
    pub v6: bool,
}

impl ProviderInfo {
    /// Dual-stack provider with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            v4: true,
            v6: true,
        }
    }

    /// Whether the provider answers on the given protocol.
    ///
    /// Dual stack only needs one of the two families.
    #[must_use]
    pub fn supports(&self, protocol: Protocol) -> bool {
        match protocol {
            Protocol::DualStack => self.v4 || self.v6,
            Protocol::V4 => self.v4,
            Protocol::V6 => self.v6,
        }
    }
}

/// Accepts either a bare display name or the full object form.
impl<'de> Deserialize<'de> for ProviderInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        fn yes() -> bool {
            true
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NameOrInfo {
            Name(String),
            Info {
                name: String,
                #[serde(default = "yes")]
                v4: bool,
                #[serde(default = "yes")]
                v6: bool,
            },
        }

        Ok(match NameOrInfo::deserialize(deserializer)? {
            NameOrInfo::Name(name) => Self::new(name),
            NameOrInfo::Info { name, v4, v6 } => Self { name, v4, v6 },
        })
    }
}

/// City entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<GeoPoint>,
    #[serde(default)]
    pub providers: CodeMap<ProviderInfo>,
}

/// Province entry (hierarchical countries only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<GeoPoint>,
    #[serde(default)]
    pub providers: CodeMap<ProviderInfo>,
    #[serde(default)]
    pub cities: CodeMap<City>,
}

/// How a country organises its cities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum CountryLayout {
    /// Cities nested under provinces, plus country-level providers usable
    /// when no city is chosen
    Hierarchical {
        #[serde(default)]
        providers: CodeMap<ProviderInfo>,
        provinces: CodeMap<Province>,
    },
    /// Cities listed directly under the country
    Flat { cities: CodeMap<City> },
}

/// Country entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Upper-case country code (e.g. `CN`)
    pub code: String,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<GeoPoint>,
    #[serde(flatten)]
    pub layout: CountryLayout,
}

impl Country {
    /// Whether cities are nested under provinces
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self.layout, CountryLayout::Hierarchical { .. })
    }

    /// Look up a province by code
    #[must_use]
    pub fn province(&self, code: &str) -> Option<&Province> {
        match &self.layout {
            CountryLayout::Hierarchical { provinces, .. } => provinces.get(code),
            CountryLayout::Flat { .. } => None,
        }
    }

    /// Look up a city within the given province scope.
    ///
    /// Flat countries ignore `province`; hierarchical ones need it.
    #[must_use]
    pub fn city(&self, province: Option<&str>, code: &str) -> Option<&City> {
        match &self.layout {
            CountryLayout::Hierarchical { provinces, .. } => {
                province.and_then(|p| provinces.get(p)).and_then(|p| p.cities.get(code))
            }
            CountryLayout::Flat { cities } => cities.get(code),
        }
    }

    /// Iterate every city of the country regardless of province
    pub fn all_cities(&self) -> Box<dyn Iterator<Item = (&String, &City)> + '_> {
        match &self.layout {
            CountryLayout::Hierarchical { provinces, .. } => {
                Box::new(provinces.values().flat_map(|p| p.cities.iter()))
            }
            CountryLayout::Flat { cities } => Box::new(cities.iter()),
        }
    }
}

/// The complete location dictionary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDictionary {
    /// Countries in display order
    pub countries: Vec<Country>,
}

impl LocationDictionary {
    /// Look up a country by code (ASCII case-insensitive)
    #[must_use]
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// The country whose cities are nested under provinces, if any
    #[must_use]
    pub fn hierarchical_country(&self) -> Option<&Country> {
        self.countries.iter().find(|c| c.is_hierarchical())
    }
}
