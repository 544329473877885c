//! Raw `WITH` properties of a schema statement
//!
//! The statement parser fills a `PropertyDefinitions` bag with either plain
//! string values (`gc_grace_seconds = 1000`) or sub-option maps
//! (`compaction = {'class': '...'}`). The typed getters below coerce values on
//! demand and fall back to a caller-supplied default when a key is absent.

use crate::ddl::{DdlError, DdlResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// A single property value: a string, or a map of sub-options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Simple(String),
    Map(HashMap<String, String>),
}

/// Bag of named properties attached to one schema statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyDefinitions {
    properties: HashMap<String, PropertyValue>,
}

impl PropertyDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from a JSON object such as
    /// `{"gc_grace_seconds": "1000", "compaction": {"class": "LeveledCompactionStrategy"}}`.
    pub fn from_json(json: &str) -> DdlResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DdlError::syntax(format!("Invalid property definitions: {}", e)))
    }

    /// Add a string-valued property. Each property may be defined once.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) -> DdlResult<()> {
        self.insert(name.into(), PropertyValue::Simple(value.into()))
    }

    /// Add a map-valued property. Each property may be defined once.
    pub fn add_map_property(
        &mut self,
        name: impl Into<String>,
        value: HashMap<String, String>,
    ) -> DdlResult<()> {
        self.insert(name.into(), PropertyValue::Map(value))
    }

    fn insert(&mut self, name: String, value: PropertyValue) -> DdlResult<()> {
        if self.properties.contains_key(&name) {
            return Err(DdlError::syntax(format!(
                "Multiple definition for property '{}'",
                name
            )));
        }
        self.properties.insert(name, value);
        Ok(())
    }

    /// Reject obsolete and unknown property names.
    ///
    /// Names are checked in sorted order so the reported offender is stable.
    pub fn validate(&self, keywords: &HashSet<&str>, obsolete: &HashSet<&str>) -> DdlResult<()> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();

        for name in names {
            if keywords.contains(name) {
                continue;
            }
            if obsolete.contains(name) {
                return Err(DdlError::configuration(format!(
                    "Obsolete property '{}' is no longer supported",
                    name
                )));
            }
            return Err(DdlError::configuration(format!("Unknown property '{}'", name)));
        }
        Ok(())
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The string value of `name`, or `None` when unset.
    pub fn get_simple(&self, name: &str) -> DdlResult<Option<&str>> {
        match self.properties.get(name) {
            None => Ok(None),
            Some(PropertyValue::Simple(value)) => Ok(Some(value.as_str())),
            Some(PropertyValue::Map(_)) => Err(DdlError::syntax(format!(
                "Invalid value for property '{}'. It should be a string",
                name
            ))),
        }
    }

    /// The sub-option map of `name`, or `None` when unset.
    pub fn get_map(&self, name: &str) -> DdlResult<Option<&HashMap<String, String>>> {
        match self.properties.get(name) {
            None => Ok(None),
            Some(PropertyValue::Map(map)) => Ok(Some(map)),
            Some(PropertyValue::Simple(_)) => Err(DdlError::syntax(format!(
                "Invalid value for property '{}'. It should be a map.",
                name
            ))),
        }
    }

    pub fn get_string(&self, name: &str, default: &str) -> DdlResult<String> {
        Ok(self.get_simple(name)?.unwrap_or(default).to_string())
    }

    /// `true`, `yes` and `1` (any case) are true; every other value is false.
    pub fn get_boolean(&self, name: &str, default: bool) -> DdlResult<bool> {
        Ok(match self.get_simple(name)? {
            None => default,
            Some(value) => matches!(value.to_lowercase().as_str(), "true" | "yes" | "1"),
        })
    }

    pub fn get_double(&self, name: &str, default: f64) -> DdlResult<f64> {
        match self.get_simple(name)? {
            None => Ok(default),
            Some(value) => value.parse::<f64>().map_err(|_| {
                DdlError::syntax(format!("Invalid double value {} for '{}'", value, name))
            }),
        }
    }

    pub fn get_int(&self, name: &str, default: i32) -> DdlResult<i32> {
        Self::to_int(name, self.get_simple(name)?, default)
    }

    /// Parse `value` as an integer on behalf of property `name`, or return
    /// `default` when there is no value.
    pub fn to_int(name: &str, value: Option<&str>, default: i32) -> DdlResult<i32> {
        match value {
            None => Ok(default),
            Some(value) => value.parse::<i32>().map_err(|_| {
                DdlError::syntax(format!("Invalid integer value {} for '{}'", value, name))
            }),
        }
    }
}

impl fmt::Display for PropertyDefinitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted: BTreeMap<&String, &PropertyValue> = self.properties.iter().collect();
        write!(f, "{{")?;
        for (i, (name, value)) in sorted.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                PropertyValue::Simple(v) => write!(f, "{}={}", name, v)?,
                PropertyValue::Map(map) => {
                    let sub: BTreeMap<&String, &String> = map.iter().collect();
                    write!(f, "{}={:?}", name, sub)?
                }
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> PropertyDefinitions {
        let mut props = PropertyDefinitions::new();
        props.add_property("gc_grace_seconds", "1000").unwrap();
        props.add_property("replicate_on_write", "YES").unwrap();
        props.add_property("read_repair_chance", "0.25").unwrap();
        props
            .add_map_property(
                "compaction",
                HashMap::from([("class".to_string(), "LeveledCompactionStrategy".to_string())]),
            )
            .unwrap();
        props
    }

    #[test]
    fn test_typed_getters() {
        let props = bag();
        assert_eq!(props.get_int("gc_grace_seconds", 0).unwrap(), 1000);
        assert!(props.get_boolean("replicate_on_write", false).unwrap());
        assert_eq!(props.get_double("read_repair_chance", 0.0).unwrap(), 0.25);
        assert_eq!(props.get_string("comment", "none").unwrap(), "none");
        assert_eq!(props.get_int("missing", 7).unwrap(), 7);
        assert!(props.get_map("compaction").unwrap().is_some());
        assert!(props.get_map("compression").unwrap().is_none());
    }

    #[test]
    fn test_boolean_parsing() {
        let mut props = PropertyDefinitions::new();
        props.add_property("a", "1").unwrap();
        props.add_property("b", "True").unwrap();
        props.add_property("c", "no").unwrap();
        props.add_property("d", "maybe").unwrap();
        assert!(props.get_boolean("a", false).unwrap());
        assert!(props.get_boolean("b", false).unwrap());
        assert!(!props.get_boolean("c", true).unwrap());
        assert!(!props.get_boolean("d", true).unwrap());
    }

    #[test]
    fn test_invalid_numbers_are_syntax_errors() {
        let mut props = PropertyDefinitions::new();
        props.add_property("gc_grace_seconds", "ten").unwrap();
        props.add_property("read_repair_chance", "half").unwrap();

        let err = props.get_int("gc_grace_seconds", 0).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message(), "Invalid integer value ten for 'gc_grace_seconds'");

        let err = props.get_double("read_repair_chance", 0.0).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message(), "Invalid double value half for 'read_repair_chance'");
    }

    #[test]
    fn test_numbers_are_not_trimmed() {
        let mut props = PropertyDefinitions::new();
        props.add_property("gc_grace_seconds", " 10 ").unwrap();
        props.add_property("bloom_filter_fp_chance", "0.1 ").unwrap();

        let err = props.get_int("gc_grace_seconds", 0).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message(), "Invalid integer value  10  for 'gc_grace_seconds'");

        assert!(props.get_double("bloom_filter_fp_chance", 0.01).unwrap_err().is_syntax());
        assert!(PropertyDefinitions::to_int("min_threshold", Some(" 2"), 4).is_err());
    }

    #[test]
    fn test_shape_mismatch() {
        let props = bag();
        assert!(props.get_simple("compaction").unwrap_err().is_syntax());

        let mut props = PropertyDefinitions::new();
        props.add_property("compaction", "LeveledCompactionStrategy").unwrap();
        let err = props.get_map("compaction").unwrap_err();
        assert_eq!(err.message(), "Invalid value for property 'compaction'. It should be a map.");
    }

    #[test]
    fn test_duplicate_definition() {
        let mut props = bag();
        let err = props.add_property("gc_grace_seconds", "5").unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message(), "Multiple definition for property 'gc_grace_seconds'");
    }

    #[test]
    fn test_validate_reports_first_name_in_order() {
        let mut props = PropertyDefinitions::new();
        props.add_property("zzz", "1").unwrap();
        props.add_property("aaa", "1").unwrap();
        let keywords = HashSet::from(["comment"]);
        let err = props.validate(&keywords, &HashSet::new()).unwrap_err();
        assert_eq!(err.message(), "Unknown property 'aaa'");
    }

    #[test]
    fn test_from_json() {
        let props = PropertyDefinitions::from_json(
            r#"{"comment": "hi", "compression": {"sstable_compression": "LZ4Compressor"}}"#,
        )
        .unwrap();
        assert_eq!(props.get_simple("comment").unwrap(), Some("hi"));
        assert_eq!(
            props.get_map("compression").unwrap().and_then(|m| m.get("sstable_compression")),
            Some(&"LZ4Compressor".to_string())
        );

        assert!(PropertyDefinitions::from_json(r#"{"gc_grace_seconds": 10}"#)
            .unwrap_err()
            .is_syntax());
    }

    #[test]
    fn test_display_is_sorted() {
        let mut props = PropertyDefinitions::new();
        props.add_property("gc_grace_seconds", "10").unwrap();
        props.add_property("comment", "x").unwrap();
        assert_eq!(props.to_string(), "{comment=x, gc_grace_seconds=10}");
    }
}
