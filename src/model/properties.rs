use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A select-style value exposing a display name. Extra fields on the
/// source object (color, id, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectValue {
    pub name: String,
}

impl SelectValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A loosely-typed property value as found in host-supplied records:
/// a plain string, a select-like object with a name, a list of either,
/// or anything else (kept opaque, never matched by lookups).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Select(SelectValue),
    Many(Vec<PropertyValue>),
    Other(serde_json::Value),
}

/// Ordered field-name → value mapping. Order follows the source document,
/// and lookups return the first entry with an exactly matching name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for PropertyBag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BagVisitor;

        impl<'de> Visitor<'de> for BagVisitor {
            type Value = PropertyBag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of property values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry()? {
                    entries.push((name, value));
                }
                Ok(PropertyBag { entries })
            }
        }

        deserializer.deserialize_map(BagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_preserves_document_order() {
        let json = r#"{"Zeta": "z", "Alpha": "a", "Project": {"name": "Apollo"}}"#;
        let bag: PropertyBag = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = bag.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Project"]);
    }

    #[test]
    fn values_decode_by_shape() {
        let json = r#"{
            "plain": "hello",
            "select": {"name": "Apollo", "color": "red"},
            "list": [{"name": "First"}, "second"],
            "odd": 42
        }"#;
        let bag: PropertyBag = serde_json::from_str(json).unwrap();
        assert_eq!(bag.get("plain"), Some(&PropertyValue::Text("hello".into())));
        assert_eq!(
            bag.get("select"),
            Some(&PropertyValue::Select(SelectValue::new("Apollo")))
        );
        match bag.get("list") {
            Some(PropertyValue::Many(items)) => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {other:?}"),
        }
        assert!(matches!(bag.get("odd"), Some(PropertyValue::Other(_))));
    }

    #[test]
    fn lookup_is_exact_and_first_match_wins() {
        let mut bag = PropertyBag::new();
        bag.insert("Project", PropertyValue::Text("one".into()));
        bag.insert("Project", PropertyValue::Text("two".into()));
        assert_eq!(bag.get("Project"), Some(&PropertyValue::Text("one".into())));
        assert_eq!(bag.get("project"), None);
    }
}
