//! Validity relation between two enumerations

use super::Taxonomy;
use crate::error::{Result, TaxonomyError};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Static adjacency table from `A` values to their valid `B` values
///
/// Table order is significant: it decides `get_owner` and the order of
/// `all_pairs`.
#[derive(Debug)]
pub struct CrossTaxonomyMap<A: 'static, B: 'static> {
    entries: &'static [(A, &'static [B])],
}

/// Aggregate counts over a cross-taxonomy map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapStatistics {
    pub genre_count: usize,
    pub subgenre_count: usize,
    pub combination_count: usize,
    pub avg_subgenres_per_genre: f64,
}

impl<A: Taxonomy, B: Taxonomy> CrossTaxonomyMap<A, B> {
    pub const fn new(entries: &'static [(A, &'static [B])]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(A, &'static [B])] {
        self.entries
    }

    /// Valid `B` values for `a`; empty means `a` has no entry
    pub fn get_related(&self, a: A) -> &'static [B] {
        self.entries
            .iter()
            .find(|(owner, _)| *owner == a)
            .map(|(_, related)| *related)
            .unwrap_or(&[])
    }

    pub fn is_mapped(&self, a: A) -> bool {
        self.entries.iter().any(|(owner, _)| *owner == a)
    }

    pub fn is_valid_combination(&self, a: A, b: B) -> bool {
        self.get_related(a).contains(&b)
    }

    /// Build a pair, failing with `InvalidCombination` when not in the table
    pub fn create_pair(&self, a: A, b: B) -> Result<ValidatedPair<A, B>> {
        if !self.is_valid_combination(a, b) {
            return Err(TaxonomyError::InvalidCombination {
                first_kind: A::KIND,
                first: a.key(),
                second_kind: B::KIND,
                second: b.key(),
            });
        }
        Ok(ValidatedPair { first: a, second: b })
    }

    /// First owner of `b` in table order
    pub fn get_owner(&self, b: B) -> Option<A> {
        self.entries
            .iter()
            .find(|(_, related)| related.contains(&b))
            .map(|(owner, _)| *owner)
    }

    pub fn get_all_owners(&self, b: B) -> Vec<A> {
        self.entries
            .iter()
            .filter(|(_, related)| related.contains(&b))
            .map(|(owner, _)| *owner)
            .collect()
    }

    /// Every valid pair in table order
    pub fn all_pairs(&self) -> Vec<ValidatedPair<A, B>> {
        self.entries
            .iter()
            .flat_map(|(owner, related)| {
                related.iter().map(move |value| ValidatedPair {
                    first: *owner,
                    second: *value,
                })
            })
            .collect()
    }

    /// Distinct `B` values reachable from any entry, first-seen order
    pub fn mapped_values(&self) -> Vec<B> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|(_, related)| related.iter().copied())
            .filter(|value| seen.insert(*value))
            .collect()
    }

    pub fn statistics(&self) -> MapStatistics {
        let genre_count = self.entries.len();
        let combination_count: usize = self.entries.iter().map(|(_, related)| related.len()).sum();
        let avg = if genre_count == 0 {
            0.0
        } else {
            (combination_count as f64 / genre_count as f64 * 100.0).round() / 100.0
        };

        MapStatistics {
            genre_count,
            subgenre_count: self.mapped_values().len(),
            combination_count,
            avg_subgenres_per_genre: avg,
        }
    }

    /// `{a_key: [b_key, ...]}`
    pub fn export(&self) -> Value {
        let mut out = Map::new();
        for (owner, related) in self.entries {
            let keys = related.iter().map(|value| Value::from(value.key())).collect();
            out.insert(owner.key().to_string(), Value::Array(keys));
        }
        Value::Object(out)
    }

    /// Structural problems in the table; empty when the table is sound
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut owners = HashSet::new();

        for (owner, related) in self.entries {
            if !owners.insert(*owner) {
                problems.push(format!("duplicate {} entry '{}'", A::KIND, owner.key()));
            }
            if related.is_empty() {
                problems.push(format!("{} '{}' has no valid {} values", A::KIND, owner.key(), B::KIND));
            }
            let mut seen = HashSet::new();
            for value in related.iter() {
                if !seen.insert(*value) {
                    problems.push(format!(
                        "{} '{}' lists {} '{}' twice",
                        A::KIND,
                        owner.key(),
                        B::KIND,
                        value.key()
                    ));
                }
            }
        }

        problems
    }
}

/// A combination checked against a [`CrossTaxonomyMap`]
///
/// Only `CrossTaxonomyMap::create_pair` and `all_pairs` construct these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatedPair<A, B> {
    first: A,
    second: B,
}

impl<A: Taxonomy, B: Taxonomy> ValidatedPair<A, B> {
    pub fn first(&self) -> A {
        self.first
    }

    pub fn second(&self) -> B {
        self.second
    }

    /// `"Romance - Dark Romance"`
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.first.display_name(), self.second.display_name())
    }

    pub fn to_dict(&self) -> Value {
        let mut out = Map::new();
        out.insert(A::KIND.to_string(), Value::from(self.first.key()));
        out.insert(B::KIND.to_string(), Value::from(self.second.key()));
        out.insert("display_name".to_string(), Value::from(self.display_name()));
        Value::Object(out)
    }
}

impl<A: Taxonomy, B: Taxonomy> fmt::Display for ValidatedPair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first.key(), self.second.key())
    }
}

impl<A: Taxonomy, B: Taxonomy> Serialize for ValidatedPair<A, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(A::KIND, self.first.key())?;
        map.serialize_entry(B::KIND, self.second.key())?;
        map.serialize_entry("display_name", &self.display_name())?;
        map.end()
    }
}
