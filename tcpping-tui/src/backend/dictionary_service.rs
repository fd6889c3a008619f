//! 字典加载

use std::path::Path;

use tcpping_core::{CoreResult, LocationDictionary};

/// 加载位置字典：给定路径时读取外部文件，否则使用内置字典
pub fn load_dictionary(path: Option<&Path>) -> CoreResult<LocationDictionary> {
    let dictionary = match path {
        Some(path) => LocationDictionary::from_path(path)?,
        None => LocationDictionary::builtin()?,
    };

    log::info!(
        "Dictionary loaded: {} countries{}",
        dictionary.countries.len(),
        path.map(|p| format!(" from {}", p.display()))
            .unwrap_or_default()
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_when_no_path() {
        let dictionary = load_dictionary(None).unwrap();
        assert!(dictionary.hierarchical_country().is_some());
    }

    #[test]
    fn missing_override_is_an_error() {
        assert!(load_dictionary(Some(Path::new("/nonexistent/tcpping.json"))).is_err());
    }
}
