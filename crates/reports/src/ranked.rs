//! Insertion-ordered map used for report outputs.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// String-keyed map that remembers insertion order.
///
/// Reports insert groups already ranked, so serializing in insertion order
/// keeps the ranking visible in the JSON object. Keys are group keys and
/// therefore unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> RankedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry after all existing ones.
    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.entries.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in rank order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for RankedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for RankedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V: Serialize> Serialize for RankedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_insertion_order() {
        let map: RankedMap<u32> = [("zeta", 3), ("alpha", 2), ("mid", 1)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":3,"alpha":2,"mid":1}"#);
    }

    #[test]
    fn lookup_and_keys() {
        let mut map = RankedMap::new();
        map.push("BR", 4);
        map.push("unknown", 2);

        assert_eq!(map.get("unknown"), Some(&2));
        assert_eq!(map.get("US"), None);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["BR", "unknown"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_map_serializes_as_empty_object() {
        let map: RankedMap<String> = RankedMap::default();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }
}
