//! City/province knowledge base used by the dictionary generator.
//!
//! Both tables are tab-separated; blank lines and lines starting with `#`
//! are ignored.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::GeoPoint;

const BUILTIN_CITIES: &str = include_str!("../../data/city_knowledge.tsv");
const BUILTIN_PROVINCES: &str = include_str!("../../data/provinces.tsv");

/// What is known about a city code
#[derive(Debug, Clone, PartialEq)]
pub struct CityKnowledge {
    /// Upper-case province code
    pub province: String,
    pub loc: GeoPoint,
}

/// What is known about a province code
#[derive(Debug, Clone, PartialEq)]
pub struct ProvinceKnowledge {
    pub name: String,
    pub loc: GeoPoint,
}

/// Lookup tables keyed by lower-case city code and upper-case province code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Knowledge {
    cities: HashMap<String, CityKnowledge>,
    provinces: HashMap<String, ProvinceKnowledge>,
}

impl Knowledge {
    /// Tables embedded in the crate
    pub fn builtin() -> CoreResult<Self> {
        Self::parse(BUILTIN_CITIES, BUILTIN_PROVINCES)
    }

    /// Built-in tables with either one replaced by caller-supplied text
    pub fn with_overrides(cities: Option<&str>, provinces: Option<&str>) -> CoreResult<Self> {
        Self::parse(
            cities.unwrap_or(BUILTIN_CITIES),
            provinces.unwrap_or(BUILTIN_PROVINCES),
        )
    }

    /// Parse `city<TAB>province<TAB>lat<TAB>lon` and
    /// `province<TAB>name<TAB>lat<TAB>lon` tables.
    pub fn parse(cities: &str, provinces: &str) -> CoreResult<Self> {
        let mut knowledge = Self::default();

        for (line, fields) in rows(cities) {
            let [code, province, lat, lon] = four(line, &fields)?;
            knowledge.cities.insert(
                code.to_lowercase(),
                CityKnowledge {
                    province: province.to_uppercase(),
                    loc: point(line, lat, lon)?,
                },
            );
        }

        for (line, fields) in rows(provinces) {
            let [code, name, lat, lon] = four(line, &fields)?;
            knowledge.provinces.insert(
                code.to_uppercase(),
                ProvinceKnowledge {
                    name: name.to_string(),
                    loc: point(line, lat, lon)?,
                },
            );
        }

        log::debug!(
            "Knowledge base: {} cities, {} provinces",
            knowledge.cities.len(),
            knowledge.provinces.len()
        );
        Ok(knowledge)
    }

    pub fn city(&self, code: &str) -> Option<&CityKnowledge> {
        self.cities.get(&code.to_lowercase())
    }

    pub fn province(&self, code: &str) -> Option<&ProvinceKnowledge> {
        self.provinces.get(&code.to_uppercase())
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }
}

/// Non-comment rows with their 1-based line numbers
fn rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
        .map(|(n, l)| (n, l.split('\t').map(str::trim).collect()))
}

fn four<'a>(line: usize, fields: &[&'a str]) -> CoreResult<[&'a str; 4]> {
    match fields {
        [a, b, c, d] if !a.is_empty() && !b.is_empty() => Ok([*a, *b, *c, *d]),
        _ => Err(CoreError::ListingFormat {
            line,
            message: format!("expected 4 tab-separated fields, got {}", fields.len()),
        }),
    }
}

fn point(line: usize, lat: &str, lon: &str) -> CoreResult<GeoPoint> {
    let parse = |v: &str| {
        v.parse::<f64>().map_err(|_| CoreError::ListingFormat {
            line,
            message: format!("invalid coordinate: {v}"),
        })
    };
    Ok(GeoPoint::new(parse(lat)?, parse(lon)?))
}
