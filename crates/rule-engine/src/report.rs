//! Violation Report

use crate::rules::Rule;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use site_table::CellValue;
use std::fmt;

/// Opaque site identifier as rendered from the `SITE NUMBER` cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteNumber(String);

impl SiteNumber {
    /// Create an identifier from its text form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Read an identifier from a cell; empty and NaN cells have none
    pub fn from_cell(cell: &CellValue) -> Option<Self> {
        match cell {
            CellValue::Empty => None,
            CellValue::Float(value) if value.is_nan() => None,
            other => Some(Self(other.to_string())),
        }
    }

    /// Identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Violating site identifiers per rule, in table row order.
///
/// Entries are `None` only for the activation rule, which collects matching
/// rows even when their `SITE NUMBER` is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationReport {
    sites: [Vec<Option<SiteNumber>>; Rule::COUNT],
}

impl ViolationReport {
    pub(crate) fn from_sites(sites: [Vec<Option<SiteNumber>>; Rule::COUNT]) -> Self {
        Self { sites }
    }

    /// Sites flagged by one rule
    pub fn get(&self, rule: Rule) -> &[Option<SiteNumber>] {
        &self.sites[rule.index()]
    }

    /// Rules with their flagged sites, in fixed report order
    pub fn iter(&self) -> impl Iterator<Item = (Rule, &[Option<SiteNumber>])> + '_ {
        Rule::ALL
            .iter()
            .map(move |&rule| (rule, self.get(rule)))
    }

    /// Total number of flagged entries across all rules
    pub fn total(&self) -> usize {
        self.sites.iter().map(Vec::len).sum()
    }

    /// Whether no rule flagged anything
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

impl Serialize for ViolationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Rule::COUNT))?;
        for (rule, sites) in self.iter() {
            map.serialize_entry(rule.name(), sites)?;
        }
        map.end()
    }
}
