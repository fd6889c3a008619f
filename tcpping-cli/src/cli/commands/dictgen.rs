//! `tcpping dictgen` – build a dictionary from a province/city listing.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tcpping_core::dictionary::generate::{generate, merge, parse_listing, GenerateReport};
use tcpping_core::dictionary::Knowledge;
use tcpping_core::LocationDictionary;

/// Input and output locations for one generator run
#[derive(Debug, Clone, Copy)]
pub struct DictgenPaths<'a> {
    pub listing: &'a Path,
    pub knowledge: Option<&'a Path>,
    pub provinces: Option<&'a Path>,
    pub base: Option<&'a Path>,
    pub output: Option<&'a Path>,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_optional(path: Option<&Path>) -> Result<Option<String>> {
    path.map(read).transpose()
}

/// Run the generator and return the merged dictionary with its report.
pub fn build_dictionary(paths: &DictgenPaths<'_>) -> Result<(LocationDictionary, GenerateReport)> {
    let listing = parse_listing(&read(paths.listing)?)
        .with_context(|| format!("in {}", paths.listing.display()))?;

    let cities = read_optional(paths.knowledge)?;
    let provinces = read_optional(paths.provinces)?;
    let knowledge = Knowledge::with_overrides(cities.as_deref(), provinces.as_deref())?;
    tracing::debug!(
        "knowledge base: {} cities, {} provinces",
        knowledge.city_count(),
        knowledge.province_count()
    );

    let (country, report) = generate(&listing, &knowledge);
    let base = paths.base.map(LocationDictionary::from_path).transpose()?;
    let dictionary = merge(base, country)?;
    Ok((dictionary, report))
}

fn write_report(out: &mut dyn Write, report: &GenerateReport) -> io::Result<()> {
    writeln!(
        out,
        "Generated {} provinces, {} cities",
        report.provinces, report.cities
    )?;
    let sections = [
        ("Skipped (no knowledge)", &report.skipped_unknown),
        ("Skipped (province not listed)", &report.skipped_orphan),
        ("Duplicates (first kept)", &report.duplicates),
    ];
    for (title, codes) in sections {
        if !codes.is_empty() {
            writeln!(out, "{title}: {}", codes.join(", "))?;
        }
    }
    Ok(())
}

pub fn run_dictgen(paths: &DictgenPaths<'_>) -> Result<()> {
    let (dictionary, report) = build_dictionary(paths)?;
    let json = dictionary.to_json_pretty()?;

    // stdout holds the dictionary unless --output is given
    match paths.output {
        Some(output) => {
            fs::write(output, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", output.display()))?;
            tracing::info!("wrote {}", output.display());
            write_report(&mut io::stdout().lock(), &report)?;
        }
        None => {
            println!("{json}");
            write_report(&mut io::stderr().lock(), &report)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const LISTING: &str =
        "Province:\nGuangdong\tGD\nSichuan\tSC\n\nCities:\nShenzhen\tshenzhen\nChengdu\tchengdu\nAtlantis\tatlantis\n";

    #[test]
    fn generates_with_builtin_knowledge() {
        let tmp = tempfile::tempdir().unwrap();
        let listing = write_file(&tmp, "listing.txt", LISTING);
        let paths = DictgenPaths {
            listing: &listing,
            knowledge: None,
            provinces: None,
            base: None,
            output: None,
        };

        let (dictionary, report) = build_dictionary(&paths).unwrap();
        assert_eq!(report.provinces, 2);
        assert_eq!(report.cities, 2);
        assert_eq!(report.skipped_unknown, ["atlantis"]);
        assert_eq!(dictionary.countries.len(), 1);
        let cn = dictionary.hierarchical_country().unwrap();
        assert!(cn.city(Some("gd"), "shenzhen").is_some());
    }

    #[test]
    fn base_and_output() {
        let tmp = tempfile::tempdir().unwrap();
        let listing = write_file(&tmp, "listing.txt", LISTING);
        let base = write_file(
            &tmp,
            "base.json",
            &LocationDictionary::builtin().unwrap().to_json_pretty().unwrap(),
        );
        let output = tmp.path().join("out.json");
        let paths = DictgenPaths {
            listing: &listing,
            knowledge: None,
            provinces: None,
            base: Some(&base),
            output: Some(&output),
        };

        run_dictgen(&paths).unwrap();
        let written = LocationDictionary::from_path(&output).unwrap();
        let codes: Vec<&str> = written.countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CN", "US", "DE"]);
        // generated China replaces the base one
        assert!(written.country("CN").unwrap().province("bj").is_none());
    }

    #[test]
    fn knowledge_override_is_used() {
        let tmp = tempfile::tempdir().unwrap();
        let listing = write_file(
            &tmp,
            "listing.txt",
            "Province:\nGuangdong\tGD\nCities:\nAtlantis\tatlantis\n",
        );
        let knowledge = write_file(&tmp, "cities.tsv", "atlantis\tGD\t22.0\t114.0\n");
        let paths = DictgenPaths {
            listing: &listing,
            knowledge: Some(&knowledge),
            provinces: None,
            base: None,
            output: None,
        };
        let (dictionary, report) = build_dictionary(&paths).unwrap();
        assert!(report.skipped_unknown.is_empty());
        assert!(dictionary.country("CN").unwrap().city(Some("gd"), "atlantis").is_some());
    }

    #[test]
    fn missing_listing_is_an_error() {
        let paths = DictgenPaths {
            listing: Path::new("/nonexistent/listing.txt"),
            knowledge: None,
            provinces: None,
            base: None,
            output: None,
        };
        let err = build_dictionary(&paths).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn report_lists_skips() {
        let report = GenerateReport {
            provinces: 1,
            cities: 2,
            skipped_unknown: vec!["atlantis".into()],
            skipped_orphan: Vec::new(),
            duplicates: vec!["shenzhen".into()],
        };
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Generated 1 provinces, 2 cities"));
        assert!(text.contains("Skipped (no knowledge): atlantis"));
        assert!(!text.contains("province not listed"));
        assert!(text.contains("Duplicates (first kept): shenzhen"));
    }
}
