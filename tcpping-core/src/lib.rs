//! tcpping Core Library
//!
//! Provides the platform-independent logic behind the tcpping.top hostname
//! generator, including:
//! - Location dictionary model, loading and validation
//! - Cascade controller for the protocol/country/province/city/provider selection
//! - Hostname derivation
//! - Offline dictionary generator
//!
//! Nothing here performs I/O except the explicit `from_path` loader; front
//! ends (TUI, CLI) own the clipboard, timers and terminal.

pub mod dictionary;
pub mod error;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{derive_url, CascadeController, Catalog, SelectOption, COPIED_FLASH};
pub use types::{
    City, CodeMap, Country, CountryLayout, GeoPoint, LocationDictionary, Protocol, Province,
    ProviderInfo, SelectionState,
};
