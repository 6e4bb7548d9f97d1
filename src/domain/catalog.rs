//! Pattern catalog: a load-once, read-only mapping from pattern name to
//! seed coordinates. The persisted form is a JSON object of
//! `name -> [[row, col], ...]`, embedded at build time and parsed exactly
//! once at startup.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A named, immutable set of (row, col) seed coordinates
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: String,
    pub cells: Vec<(usize, usize)>,
}

/// Persisted catalog shape: name -> ordered [row, col] pairs
#[derive(Deserialize)]
#[serde(transparent)]
struct RawCatalog(BTreeMap<String, Vec<[usize; 2]>>);

/// Immutable name -> pattern mapping. BTreeMap keeps name enumeration
/// stable for the selector UI.
pub struct PatternCatalog {
    patterns: BTreeMap<String, Pattern>,
}

const PATTERNS_JSON: &str = include_str!("../../patterns.json");

impl PatternCatalog {
    /// Parse the embedded pattern file
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(PATTERNS_JSON)
    }

    /// Parse a catalog from its persisted JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let patterns = raw
            .0
            .into_iter()
            .map(|(name, coords)| {
                let cells = coords.into_iter().map(|[row, col]| (row, col)).collect();
                let pattern = Pattern {
                    name: name.clone(),
                    cells,
                };
                (name, pattern)
            })
            .collect();
        Ok(Self { patterns })
    }

    /// Catalog with no patterns, the fallback when loading fails
    pub fn empty() -> Self {
        Self {
            patterns: BTreeMap::new(),
        }
    }

    /// Pattern names in stable order, for populating the selector
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
