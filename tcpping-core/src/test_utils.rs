//! Test fixtures
//!
//! A small dictionary and a shortcut for building selection states.

use crate::services::CascadeController;
use crate::types::{LocationDictionary, Protocol, SelectionState};

/// CN with provinces plus a flat US
pub const SAMPLE_DICTIONARY_JSON: &str = r#"{
  "countries": [
    {
      "code": "CN",
      "name": "China",
      "loc": {"lat": 35.86, "lon": 104.19},
      "layout": "hierarchical",
      "providers": {"ct": "China Telecom", "cu": "China Unicom"},
      "provinces": {
        "bj": {"name": "Beijing", "loc": {"lat": 39.9, "lon": 116.4}, "cities": {}},
        "gd": {
          "name": "Guangdong",
          "loc": {"lat": 23.13, "lon": 113.26},
          "providers": {"ct": "China Telecom", "cm": "China Mobile"},
          "cities": {
            "guangzhou": {"name": "Guangzhou", "loc": {"lat": 23.13, "lon": 113.26}, "providers": {"ct": "China Telecom"}},
            "shenzhen": {"name": "Shenzhen", "loc": {"lat": 22.54, "lon": 114.05}, "providers": {"ct": "China Telecom", "cu": "China Unicom"}}
          }
        },
        "sc": {
          "name": "Sichuan",
          "cities": {
            "chengdu": {"name": "Chengdu", "loc": {"lat": 30.66, "lon": 104.06}}
          }
        }
      }
    },
    {
      "code": "US",
      "name": "United States",
      "loc": {"lat": 39.83, "lon": -98.58},
      "layout": "flat",
      "cities": {
        "lax": {"name": "Los Angeles", "providers": {"vultr": {"name": "Vultr", "v6": false}}},
        "nyc": {"name": "New York", "loc": {"lat": 40.71, "lon": -74.01}, "providers": {"aws": "Amazon Web Services", "gcp": "Google Cloud"}}
      }
    }
  ]
}"#;

/// Parse the sample dictionary
pub fn sample_dictionary() -> LocationDictionary {
    LocationDictionary::from_json(SAMPLE_DICTIONARY_JSON).unwrap()
}

/// Controller for the sample dictionary
pub fn sample_controller() -> CascadeController {
    CascadeController::for_dictionary(&sample_dictionary())
}

/// Build a state by calling the setters in cascade order
pub fn selection(
    protocol: Protocol,
    country: Option<&str>,
    province: Option<&str>,
    city: Option<&str>,
    provider: Option<&str>,
) -> SelectionState {
    let ctl = sample_controller();
    let state = ctl.set_protocol(&SelectionState::default(), protocol);
    let state = ctl.set_country(&state, country);
    let state = ctl.set_province(&state, province).unwrap_or(state);
    let state = ctl.set_city(&state, city);
    ctl.set_provider(&state, provider)
}
