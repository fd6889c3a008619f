//! Offline dictionary generator.
//!
//! Turns a plain-text province/city listing plus the knowledge base into the
//! hierarchical `CN` country, optionally merged into an existing dictionary
//! that supplies the flat countries.

use serde::Serialize;

use super::Knowledge;
use crate::error::{CoreError, CoreResult};
use crate::types::{
    City, CodeMap, Country, CountryLayout, GeoPoint, LocationDictionary, Province, ProviderInfo,
};

pub const GENERATED_COUNTRY_CODE: &str = "CN";
pub const GENERATED_COUNTRY_NAME: &str = "China";
pub const GENERATED_COUNTRY_CENTER: GeoPoint = GeoPoint::new(35.86, 104.19);

const PROVINCE_SECTION: &str = "Province";
const CITIES_SECTION: &str = "Cities";

/// One `name<ws>code` line of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub code: String,
    /// 1-based line in the listing
    pub line: usize,
}

/// Parsed listing: provinces and cities in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub provinces: Vec<ListingEntry>,
    pub cities: Vec<ListingEntry>,
}

/// What the generator did with the listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub provinces: usize,
    pub cities: usize,
    /// City codes with no knowledge-base entry
    pub skipped_unknown: Vec<String>,
    /// City codes whose province is not in the listing
    pub skipped_orphan: Vec<String>,
    /// Province or city codes seen more than once (first one kept)
    pub duplicates: Vec<String>,
}

/// Operators every generated scope offers
pub fn default_providers() -> CodeMap<ProviderInfo> {
    [
        ("ct", "China Telecom"),
        ("cu", "China Unicom"),
        ("cm", "China Mobile"),
        ("edu", "China Education Network"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), ProviderInfo::new(name)))
    .collect()
}

/// Split a listing into its sections.
///
/// Headers are lines ending in `:` (or the full-width `：`). Lines before the
/// first header and sections other than `Province`/`Cities` are ignored.
pub fn parse_listing(text: &str) -> CoreResult<Listing> {
    let mut listing = Listing::default();
    let mut section: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_suffix(':').or_else(|| line.strip_suffix('：')) {
            section = Some(header.trim().to_string());
            continue;
        }

        let target = match section.as_deref() {
            Some(PROVINCE_SECTION) => &mut listing.provinces,
            Some(CITIES_SECTION) => &mut listing.cities,
            _ => continue,
        };

        let Some((name, code)) = line.rsplit_once(char::is_whitespace) else {
            return Err(CoreError::ListingFormat {
                line: line_no,
                message: format!("expected `name code`, got `{line}`"),
            });
        };
        target.push(ListingEntry {
            name: name.trim().to_string(),
            code: code.to_string(),
            line: line_no,
        });
    }

    log::debug!(
        "Listing: {} provinces, {} cities",
        listing.provinces.len(),
        listing.cities.len()
    );
    Ok(listing)
}

/// Build the hierarchical country from a listing.
pub fn generate(listing: &Listing, knowledge: &Knowledge) -> (Country, GenerateReport) {
    let mut report = GenerateReport::default();
    let mut provinces: CodeMap<Province> = CodeMap::new();

    for entry in &listing.provinces {
        let code = entry.code.to_lowercase();
        if provinces.contains_key(&code) {
            log::warn!("Duplicate province {code} at line {}", entry.line);
            report.duplicates.push(code);
            continue;
        }
        let loc = knowledge.province(&entry.code).map(|p| p.loc);
        if loc.is_none() {
            log::warn!("No coordinates for province {code}");
        }
        provinces.insert(
            code,
            Province {
                name: entry.name.clone(),
                loc,
                providers: default_providers(),
                cities: CodeMap::new(),
            },
        );
    }

    let mut placed: CodeMap<()> = CodeMap::new();
    for entry in &listing.cities {
        let code = entry.code.to_lowercase();
        if placed.contains_key(&code) {
            log::warn!("Duplicate city {code} at line {}", entry.line);
            report.duplicates.push(code);
            continue;
        }

        let Some(info) = knowledge.city(&code) else {
            log::warn!("No knowledge for city {code} at line {}", entry.line);
            report.skipped_unknown.push(code);
            continue;
        };

        let Some(province) = provinces.get_mut(&info.province.to_lowercase()) else {
            log::warn!("Province {} of city {code} not in listing", info.province);
            report.skipped_orphan.push(code);
            continue;
        };

        province.cities.insert(
            code.clone(),
            City {
                name: entry.name.clone(),
                loc: Some(info.loc),
                providers: default_providers(),
            },
        );
        placed.insert(code, ());
    }

    report.provinces = provinces.len();
    report.cities = placed.len();
    log::info!(
        "Generated {} provinces, {} cities ({} unknown, {} orphan, {} duplicate)",
        report.provinces,
        report.cities,
        report.skipped_unknown.len(),
        report.skipped_orphan.len(),
        report.duplicates.len()
    );

    let country = Country {
        code: GENERATED_COUNTRY_CODE.to_string(),
        name: GENERATED_COUNTRY_NAME.to_string(),
        loc: Some(GENERATED_COUNTRY_CENTER),
        layout: CountryLayout::Hierarchical {
            providers: default_providers(),
            provinces,
        },
    };
    (country, report)
}

/// Put the generated country first, followed by the base dictionary's
/// flat countries. Hierarchical countries of the base are replaced.
pub fn merge(base: Option<LocationDictionary>, generated: Country) -> CoreResult<LocationDictionary> {
    let mut countries = vec![generated];
    if let Some(base) = base {
        countries.extend(base.countries.into_iter().filter(|c| {
            let keep = !c.is_hierarchical();
            if !keep {
                log::info!("Replacing hierarchical country {} from base", c.code);
            }
            keep
        }));
    }

    let dictionary = LocationDictionary { countries };
    dictionary.validate()?;
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_dictionary;

    const LISTING: &str = "Province:\nGuangdong\tGD\nInner Mongolia\tNM\n\nCities：\nShenzhen\tshenzhen\nGuangzhou  guangzhou\nAtlantis\tatlantis\nChengdu\tchengdu\nShenzhen\tShenzhen\n";

    fn knowledge() -> Knowledge {
        Knowledge::parse(
            "shenzhen\tGD\t22.54\t114.05\nguangzhou\tGD\t23.13\t113.26\nchengdu\tSC\t30.66\t104.06\n",
            "GD\tGuangdong\t23.13\t113.26\nSC\tSichuan\t30.66\t104.06\n",
        )
        .unwrap()
    }

    #[test]
    fn listing_sections_and_multiword_names() {
        let listing = parse_listing(LISTING).unwrap();
        assert_eq!(listing.provinces.len(), 2);
        assert_eq!(listing.provinces[1].name, "Inner Mongolia");
        assert_eq!(listing.provinces[1].code, "NM");
        assert_eq!(listing.cities.len(), 5);
        assert_eq!(listing.cities[1].code, "guangzhou");
        assert_eq!(listing.cities[1].line, 7);
    }

    #[test]
    fn listing_ignores_unknown_sections() {
        let listing = parse_listing("Notes:\nanything goes here\nCities:\nShenzhen shenzhen\n").unwrap();
        assert!(listing.provinces.is_empty());
        assert_eq!(listing.cities.len(), 1);
    }

    #[test]
    fn listing_rejects_single_token_line() {
        let err = parse_listing("Cities:\nshenzhen\n").unwrap_err();
        assert!(matches!(err, CoreError::ListingFormat { line: 2, .. }));
    }

    #[test]
    fn generate_places_and_reports() {
        let (country, report) = generate(&parse_listing(LISTING).unwrap(), &knowledge());

        assert_eq!(country.code, "CN");
        assert!(country.is_hierarchical());
        assert_eq!(report.provinces, 2);
        assert_eq!(report.cities, 2);
        assert_eq!(report.skipped_unknown, vec!["atlantis"]);
        assert_eq!(report.skipped_orphan, vec!["chengdu"]);
        assert_eq!(report.duplicates, vec!["shenzhen"]);

        let sz = country.city(Some("gd"), "shenzhen").unwrap();
        assert_eq!(sz.name, "Shenzhen");
        assert_eq!(sz.loc, Some(GeoPoint::new(22.54, 114.05)));
        assert_eq!(sz.providers.len(), 4);

        // known to the listing but not to the knowledge base
        let nm = country.province("nm").unwrap();
        assert!(nm.loc.is_none());
        assert!(nm.cities.is_empty());
    }

    #[test]
    fn merge_keeps_flat_countries_and_replaces_hierarchical() {
        let (country, _) = generate(&parse_listing(LISTING).unwrap(), &knowledge());
        let merged = merge(Some(sample_dictionary()), country).unwrap();
        let codes: Vec<&str> = merged.countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CN", "US"]);
        assert!(merged.country("CN").unwrap().province("bj").is_none());
    }

    #[test]
    fn builtin_listing_regenerates_builtin_dictionary_cn() {
        let listing = parse_listing(include_str!("../../data/locations.txt")).unwrap();
        let (country, report) = generate(&listing, &Knowledge::builtin().unwrap());
        assert!(report.skipped_unknown.is_empty());
        assert!(report.skipped_orphan.is_empty());

        let builtin = LocationDictionary::builtin().unwrap();
        assert_eq!(Some(&country), builtin.country("CN"));
    }
}
