use crate::entities::Coordinate;
use std::collections::HashMap;

/// Provides the coordinates that are already known from
/// an earlier run.
///
/// Implementations must be free of side effects: loading
/// twice yields the same mapping.
pub trait CoordinateSource {
    fn load_coordinates(&self) -> HashMap<String, Coordinate>;
}

/// Maps an address to its position, or to `None` if the
/// address has been looked up without a result.
///
/// The cache only grows; nothing is ever evicted.
#[derive(Debug, Default, Clone)]
pub struct CoordinateCache {
    entries: HashMap<String, Option<Coordinate>>,
}

impl CoordinateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S>(source: &S) -> Self
    where
        S: CoordinateSource + ?Sized,
    {
        source.load_coordinates().into_iter().collect()
    }

    /// `None` if the address has never been looked up,
    /// `Some(None)` if the lookup had no result.
    pub fn get(&self, address: &str) -> Option<Option<Coordinate>> {
        self.entries.get(address).copied()
    }

    pub fn insert(&mut self, address: String, pos: Option<Coordinate>) {
        self.entries.insert(address, pos);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Coordinate)> for CoordinateCache {
    fn from_iter<I: IntoIterator<Item = (String, Coordinate)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(address, pos)| (address, Some(pos)))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lon: f64) -> Coordinate {
        Coordinate::try_from_lat_lon_deg(lat, lon).unwrap()
    }

    struct FixedSource;

    impl CoordinateSource for FixedSource {
        fn load_coordinates(&self) -> HashMap<String, Coordinate> {
            [("Stockholm".to_string(), pos(59.33, 18.06))]
                .into_iter()
                .collect()
        }
    }

    #[test]
    fn distinguish_unknown_from_not_found() {
        let mut cache = CoordinateCache::new();
        assert!(cache.is_empty());
        assert_eq!(None, cache.get("Nowhere"));
        cache.insert("Nowhere".into(), None);
        assert_eq!(Some(None), cache.get("Nowhere"));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn keys_are_compared_verbatim() {
        let mut cache = CoordinateCache::new();
        cache.insert("Stockholm".into(), Some(pos(59.33, 18.06)));
        assert!(cache.get("stockholm").is_none());
        assert!(cache.get("Stockholm ").is_none());
        assert_eq!(Some(Some(pos(59.33, 18.06))), cache.get("Stockholm"));
    }

    #[test]
    fn load_from_source() {
        let cache = CoordinateCache::load(&FixedSource);
        assert_eq!(1, cache.len());
        assert_eq!(Some(Some(pos(59.33, 18.06))), cache.get("Stockholm"));
    }
}
