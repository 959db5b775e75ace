//! Trace options

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How far from the start a traversal may go
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaxDepth {
    Bounded(usize),
    #[default]
    Unbounded,
}

impl MaxDepth {
    /// True if a node at `depth` may be visited
    pub fn allows(self, depth: usize) -> bool {
        match self {
            MaxDepth::Bounded(max) => depth <= max,
            MaxDepth::Unbounded => true,
        }
    }
}

impl From<usize> for MaxDepth {
    fn from(depth: usize) -> Self {
        MaxDepth::Bounded(depth)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Bounded(d) => write!(f, "{}", d),
            MaxDepth::Unbounded => f.write_str("infinity"),
        }
    }
}

/// Accepts a non-negative integer or `infinity` / `inf` / `unbounded`
/// (any case)
impl FromStr for MaxDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "infinity" | "inf" | "unbounded" => Ok(MaxDepth::Unbounded),
            _ => s
                .parse::<usize>()
                .map(MaxDepth::Bounded)
                .map_err(|_| format!("max depth must be a non-negative integer or 'infinity', got '{}'", s)),
        }
    }
}

impl Serialize for MaxDepth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxDepth::Bounded(d) => serializer.serialize_u64(*d as u64),
            MaxDepth::Unbounded => serializer.serialize_str("infinity"),
        }
    }
}

impl<'de> Deserialize<'de> for MaxDepth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MaxDepthVisitor;

        impl Visitor<'_> for MaxDepthVisitor {
            type Value = MaxDepth;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or \"infinity\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<MaxDepth, E> {
                usize::try_from(v)
                    .map(MaxDepth::Bounded)
                    .map_err(|_| E::custom("max depth out of range"))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<MaxDepth, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom("max depth must be non-negative"))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MaxDepth, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MaxDepthVisitor)
    }
}

/// How node and link names are chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeNaming {
    /// Formal label, any literal, named-individual heuristic, local name
    #[default]
    Preferred,
    /// Direct label, else `"<type label> <short id>"`, else local name
    TypePrefixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraceOptions {
    pub max_depth: MaxDepth,
    /// Preferred label language; `None` disables language filtering
    pub language: Option<String>,
    pub naming: NodeNaming,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_depth: MaxDepth::Unbounded,
            language: Some("en".to_string()),
            naming: NodeNaming::Preferred,
        }
    }
}

impl TraceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: impl Into<MaxDepth>) -> Self {
        self.max_depth = max_depth.into();
        self
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_string);
        self
    }

    pub fn with_naming(mut self, naming: NodeNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(lang) = &self.language {
            if lang.trim().is_empty() {
                return Err("language must not be blank (use none to disable filtering)".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_max_depth() {
        assert_eq!("3".parse::<MaxDepth>(), Ok(MaxDepth::Bounded(3)));
        assert_eq!("Infinity".parse::<MaxDepth>(), Ok(MaxDepth::Unbounded));
        assert_eq!(" inf ".parse::<MaxDepth>(), Ok(MaxDepth::Unbounded));
        assert!("-1".parse::<MaxDepth>().is_err());
        assert!("deep".parse::<MaxDepth>().is_err());
    }

    #[test]
    fn test_allows() {
        assert!(MaxDepth::Bounded(1).allows(1));
        assert!(!MaxDepth::Bounded(1).allows(2));
        assert!(MaxDepth::Unbounded.allows(usize::MAX));
    }

    #[test]
    fn test_deserialize_options() {
        let opts: TraceOptions =
            serde_json::from_value(json!({"maxDepth": 2, "naming": "typePrefixed"})).unwrap();
        assert_eq!(opts.max_depth, MaxDepth::Bounded(2));
        assert_eq!(opts.naming, NodeNaming::TypePrefixed);
        assert_eq!(opts.language.as_deref(), Some("en"));

        let opts: TraceOptions = serde_json::from_value(json!({"maxDepth": "INFINITY"})).unwrap();
        assert_eq!(opts.max_depth, MaxDepth::Unbounded);

        assert!(serde_json::from_value::<TraceOptions>(json!({"maxDepth": -2})).is_err());
        assert_eq!(serde_json::to_value(MaxDepth::Unbounded).unwrap(), json!("infinity"));
    }

    #[test]
    fn test_validate() {
        assert!(TraceOptions::default().validate().is_ok());
        assert!(TraceOptions::default().with_language(Some("")).validate().is_err());
    }
}
