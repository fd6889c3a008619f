//! Dictionary loading, validation and the offline generator.
//!
//! The built-in dictionary is embedded at compile time; an override can be
//! loaded from any JSON file of the same shape.

pub mod generate;
mod knowledge;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::types::{CountryLayout, LocationDictionary};

pub use knowledge::{CityKnowledge, Knowledge, ProvinceKnowledge};

/// Embedded dictionary (country → province → city → providers).
const BUILTIN_DICTIONARY: &str = include_str!("../../data/dictionary.json");

impl LocationDictionary {
    /// Parse the dictionary shipped with the crate
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_DICTIONARY)
    }

    /// Parse and validate a dictionary from JSON text
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let dictionary: Self =
            serde_json::from_str(json).map_err(|e| CoreError::DictionaryFormat(e.to_string()))?;
        dictionary.validate()?;
        Ok(dictionary)
    }

    /// Parse and validate a dictionary file
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading dictionary from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Pretty JSON in the on-disk shape
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// Check the structural invariants the cascade relies on:
    /// - at least one country, codes unique (ASCII case-insensitive)
    /// - exactly one hierarchical-form country
    /// - within that country, each city code belongs to exactly one province
    pub fn validate(&self) -> CoreResult<()> {
        if self.countries.is_empty() {
            return Err(CoreError::DictionaryFormat(
                "dictionary has no countries".to_string(),
            ));
        }

        let mut seen: HashMap<String, usize> = HashMap::new();
        for (index, country) in self.countries.iter().enumerate() {
            if country.code.trim().is_empty() {
                return Err(CoreError::DictionaryFormat(format!(
                    "country #{index} has an empty code"
                )));
            }
            if seen.insert(country.code.to_ascii_uppercase(), index).is_some() {
                return Err(CoreError::DictionaryFormat(format!(
                    "duplicate country code: {}",
                    country.code
                )));
            }
        }

        let hierarchical: Vec<&str> = self
            .countries
            .iter()
            .filter(|c| c.is_hierarchical())
            .map(|c| c.code.as_str())
            .collect();
        if hierarchical.len() != 1 {
            return Err(CoreError::DictionaryFormat(format!(
                "expected exactly one hierarchical country, found {}: {:?}",
                hierarchical.len(),
                hierarchical
            )));
        }

        for country in &self.countries {
            if let CountryLayout::Hierarchical { provinces, .. } = &country.layout {
                let mut owner: HashMap<&str, &str> = HashMap::new();
                for (province_code, province) in provinces {
                    for city_code in province.cities.keys() {
                        if let Some(first) = owner.insert(city_code, province_code) {
                            return Err(CoreError::DictionaryFormat(format!(
                                "city {city_code} appears in provinces {first} and {province_code}"
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
