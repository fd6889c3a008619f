//! CLI for the tcpping.top hostname generator.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tcpping_core::{LocationDictionary, Protocol};

use commands::{
    run_check, run_dictgen, run_hostname, run_list, DictgenPaths, HostnameRequest, Scope,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tcpping", version)]
#[command(about = "Build tcpping.top latency-test hostnames", long_about = None)]
pub struct Cli {
    /// Location dictionary JSON to use instead of the built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Derive the hostname for a selection.
    Hostname {
        /// tcp (dual stack), v4 or v6.
        #[arg(long, default_value = "tcp")]
        protocol: Protocol,
        /// Country code; defaults to the country with provinces.
        #[arg(long)]
        country: Option<String>,
        /// Province code (only for the country with provinces).
        #[arg(long)]
        province: Option<String>,
        /// City code; required outside the country with provinces.
        #[arg(long)]
        city: Option<String>,
        /// Provider code.
        #[arg(long)]
        provider: String,
        /// Print the selection and hostname as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the options available in a scope.
    List {
        /// What to list.
        #[arg(value_enum)]
        kind: ListKind,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// Print a JSON array instead of `code<TAB>name` lines.
        #[arg(long)]
        json: bool,
    },

    /// Clean and classify a ping target (IP address or hostname).
    Check {
        /// Target, e.g. `https://example.com:8443/path`.
        target: String,
        #[arg(long)]
        json: bool,
    },

    /// Generate a dictionary from a province/city listing.
    Dictgen {
        /// Listing with `Province:` and `Cities:` sections.
        #[arg(long, value_name = "PATH")]
        listing: PathBuf,
        /// City knowledge table (city, province, lat, lon).
        #[arg(long, value_name = "TSV")]
        knowledge: Option<PathBuf>,
        /// Province table (code, name, lat, lon).
        #[arg(long, value_name = "TSV")]
        provinces: Option<PathBuf>,
        /// Dictionary whose flat countries are carried over.
        #[arg(long, value_name = "JSON")]
        base: Option<PathBuf>,
        /// Write the dictionary here instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Countries,
    Provinces,
    Cities,
    Providers,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Hostname {
                protocol,
                country,
                province,
                city,
                provider,
                json,
            } => {
                let dictionary = load_dictionary(self.dictionary)?;
                let request = HostnameRequest {
                    protocol,
                    scope: Scope {
                        country: country.as_deref(),
                        province: province.as_deref(),
                        city: city.as_deref(),
                    },
                    provider: &provider,
                };
                run_hostname(&dictionary, &request, json)?;
            }
            CliCommand::List {
                kind,
                country,
                province,
                city,
                json,
            } => {
                let dictionary = load_dictionary(self.dictionary)?;
                let scope = Scope {
                    country: country.as_deref(),
                    province: province.as_deref(),
                    city: city.as_deref(),
                };
                run_list(&dictionary, kind, &scope, json)?;
            }
            CliCommand::Check { target, json } => run_check(&target, json)?,
            CliCommand::Dictgen {
                listing,
                knowledge,
                provinces,
                base,
                output,
            } => run_dictgen(&DictgenPaths {
                listing: &listing,
                knowledge: knowledge.as_deref(),
                provinces: provinces.as_deref(),
                base: base.as_deref(),
                output: output.as_deref(),
            })?,
        }

        Ok(())
    }
}

fn load_dictionary(path: Option<PathBuf>) -> Result<LocationDictionary> {
    let dictionary = match path {
        Some(path) => LocationDictionary::from_path(&path)?,
        None => LocationDictionary::builtin()?,
    };
    tracing::debug!("dictionary has {} countries", dictionary.countries.len());
    Ok(dictionary)
}
