//! Standardized fact report.
//!
//! The JSON shape of [`Report`] is the interchange format between the
//! builder and the validation engine:
//!
//! ```json
//! {
//!   "header": { "taxonomy": "...", "entity": "...", "reportDate": "YYYY-MM-DD" },
//!   "facts": {
//!     "Assets.FinancialValue.<id>": [
//!       { "contextRef": "AsOf_<date>", "unitRef": "KRW", "decimals": 0, "value": 1 }
//!     ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::profile::FACT_DECIMALS;
use crate::value::FactValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeader {
    pub taxonomy: String,
    pub entity: String,
    /// ISO calendar date the report was built as of.
    pub report_date: String,
}

impl ReportHeader {
    pub fn new(
        taxonomy: impl Into<String>,
        entity: impl Into<String>,
        report_date: impl Into<String>,
    ) -> Self {
        Self {
            taxonomy: taxonomy.into(),
            entity: entity.into(),
            report_date: report_date.into(),
        }
    }
}

/// A single reported value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    /// `AsOf_<date>`.
    pub context_ref: String,
    /// Currency code.
    pub unit_ref: String,
    pub decimals: i32,
    pub value: FactValue,
}

impl Fact {
    /// Create a fact with the fixed decimal precision.
    pub fn new(
        context_ref: impl Into<String>,
        unit_ref: impl Into<String>,
        value: FactValue,
    ) -> Self {
        Self {
            context_ref: context_ref.into(),
            unit_ref: unit_ref.into(),
            decimals: FACT_DECIMALS,
            value,
        }
    }
}

/// Facts recorded under one concept, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptFacts {
    pub concept: String,
    pub facts: Vec<Fact>,
}

/// Concept name to fact sequence, iterated in order of first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facts {
    concepts: Vec<ConceptFacts>,
    index: HashMap<String, usize>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fact sequence for a concept, created empty on first use.
    pub fn concept_mut(&mut self, concept: &str) -> &mut Vec<Fact> {
        let position = match self.index.get(concept) {
            Some(position) => *position,
            None => {
                self.concepts.push(ConceptFacts {
                    concept: concept.to_string(),
                    facts: Vec::new(),
                });
                let position = self.concepts.len() - 1;
                self.index.insert(concept.to_string(), position);
                position
            }
        };
        &mut self.concepts[position].facts
    }

    /// Append a fact to a concept, keeping input order.
    pub fn push(&mut self, concept: impl AsRef<str>, fact: Fact) {
        self.concept_mut(concept.as_ref()).push(fact);
    }

    pub fn get(&self, concept: &str) -> Option<&[Fact]> {
        self.index
            .get(concept)
            .map(|position| self.concepts[*position].facts.as_slice())
    }

    /// Iterate concepts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Fact])> {
        self.concepts
            .iter()
            .map(|entry| (entry.concept.as_str(), entry.facts.as_slice()))
    }

    pub fn concepts(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|entry| entry.concept.as_str())
    }

    /// Number of distinct concepts.
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Number of facts across all concepts.
    pub fn fact_count(&self) -> usize {
        self.concepts.iter().map(|entry| entry.facts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl Serialize for Facts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.concepts.len()))?;
        for entry in &self.concepts {
            map.serialize_entry(&entry.concept, &entry.facts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Facts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FactsVisitor)
    }
}

struct FactsVisitor;

impl<'de> Visitor<'de> for FactsVisitor {
    type Value = Facts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of concept names to fact arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut facts = Facts::new();
        while let Some((concept, entries)) = access.next_entry::<String, Vec<Fact>>()? {
            facts.concept_mut(&concept).extend(entries);
        }
        Ok(facts)
    }
}

/// Standardized report: header plus facts grouped by concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub header: ReportHeader,
    pub facts: Facts,
}

impl Report {
    /// Create a report with no facts.
    pub fn new(header: ReportHeader) -> Self {
        Self {
            header,
            facts: Facts::new(),
        }
    }
}
