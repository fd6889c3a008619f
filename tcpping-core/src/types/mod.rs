//! Domain types

mod dictionary;
mod selection;

pub use dictionary::{
    City, CodeMap, Country, CountryLayout, GeoPoint, LocationDictionary, Province, ProviderInfo,
};
pub use selection::{Protocol, SelectionState};
