use geoenrich_boundary::StoredEvent;
use geoenrich_core::entities::Coordinate;
use std::{collections::HashMap, fs, io::ErrorKind, path::Path};

/// Reads the resolved addresses of a previous run.
///
/// A missing file results in an empty mapping. The same applies
/// to a file that cannot be read or parsed, e.g. when the previous
/// run has been interrupted, but then a warning is logged.
pub fn load_coordinates(path: &Path) -> HashMap<String, Coordinate> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            if err.kind() == ErrorKind::NotFound {
                log::debug!("No previous results found in {}", path.display());
            } else {
                log::warn!("Could not read {}: {err}", path.display());
            }
            return HashMap::new();
        }
    };
    match parse_resolved(&json) {
        Ok(coordinates) => {
            log::info!(
                "Loaded {} existing addresses from {}",
                coordinates.len(),
                path.display()
            );
            coordinates
        }
        Err(err) => {
            log::warn!("Could not parse {}: {err}", path.display());
            HashMap::new()
        }
    }
}

fn parse_resolved(json: &str) -> serde_json::Result<HashMap<String, Coordinate>> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let coordinates = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value::<StoredEvent>(element).ok())
        .filter_map(|stored| {
            stored
                .resolved()
                .map(|(address, pos)| (address.to_owned(), pos))
        })
        .collect();
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn only_resolved_elements_are_loaded() {
        let json = r#"[
          { "id": 1, "title": "A", "address": "Stockholm", "lat": 59.33, "lon": 18.06 },
          { "id": 2, "title": "B", "address": "" },
          { "id": 3, "title": "C", "address": "Atlantis" },
          { "id": 4, "title": "D", "address": "Malmö", "error": "geocoding request timed out" },
          { "id": 5, "title": "E", "address": "Lund", "lat": 55.7 },
          { "id": 6, "title": "F", "lat": 1.0, "lon": 2.0 },
          "not an object",
          { "id": 7, "title": "G", "address": "Uppsala", "lat": 59.86, "lon": 17.64 }
        ]"#;
        let coordinates = parse_resolved(json).unwrap();
        assert_eq!(2, coordinates.len());
        assert_eq!(18.06, coordinates["Stockholm"].lon());
        assert_eq!(59.86, coordinates["Uppsala"].lat());
    }

    #[test]
    fn later_elements_win() {
        let json = r#"[
          { "address": "Stockholm", "lat": 1.0, "lon": 2.0 },
          { "address": "Stockholm", "lat": 3.0, "lon": 4.0 }
        ]"#;
        let coordinates = parse_resolved(json).unwrap();
        assert_eq!(3.0, coordinates["Stockholm"].lat());
    }

    #[test]
    fn missing_file_is_an_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_coordinates(&dir.path().join("missing.json")).is_empty());
    }

    #[test]
    fn corrupt_file_is_an_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(
            &path,
            "[\n  {\n    \"id\": 1,\n    \"address\": \"Stockholm\",\n    \"lat\": 59.33,\n    \"lon\": 18.06\n  }",
        )
        .unwrap();
        assert!(load_coordinates(&path).is_empty());
        fs::write(&path, "{}").unwrap();
        assert!(load_coordinates(&path).is_empty());
    }

    #[test]
    fn loading_twice_yields_the_same_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(
            &path,
            r#"[{ "id": 1, "title": "A", "address": "Stockholm", "lat": 59.33, "lon": 18.06 }]"#,
        )
        .unwrap();
        let first = load_coordinates(&path);
        let second = load_coordinates(&path);
        assert_eq!(first, second);
        assert_eq!(1, first.len());
    }
}
