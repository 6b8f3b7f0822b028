//! Free-text resolution to canonical values
//!
//! A [`Resolver`] walks an explicit, ordered list of [`MatchStep`]s. The
//! first step that produces a value wins; there is no scoring and no
//! backtracking, so resolution is fully determined by the rule tables.

use super::{normalize, Taxonomy};
use crate::error::{Result, TaxonomyError};
use std::borrow::Cow;
use tracing::trace;

/// Number of keys carried in an `UnknownValue` diagnostic
const SAMPLE_SIZE: usize = 10;

/// One matching strategy, applied to the normalized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    /// Input equals a canonical key
    Exact,
    /// Input equals an alias
    Alias,
    /// First alias that contains the input or is contained in it
    AliasSubstring,
    /// First alias contained in the input (one direction only)
    AliasKeyword,
    /// First compound rule whose every term group hits the input
    Compound,
    /// First canonical key that contains the input or is contained in it
    CanonicalSubstring,
    /// `CanonicalSubstring` with underscores removed from both sides, so
    /// "shortstory" and "short story" meet "short_story"
    CompactSubstring,
    /// Drop a leading prefix from the working input for later steps
    StripPrefix(&'static str),
}

impl MatchStep {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStep::Exact => "exact",
            MatchStep::Alias => "alias",
            MatchStep::AliasSubstring => "alias_substring",
            MatchStep::AliasKeyword => "alias_keyword",
            MatchStep::Compound => "compound",
            MatchStep::CanonicalSubstring => "canonical_substring",
            MatchStep::CompactSubstring => "compact_substring",
            MatchStep::StripPrefix(_) => "strip_prefix",
        }
    }
}

/// AND over groups, OR within a group
///
/// `groups: &[&["fantasy"], &["romance", "romantic"]]` matches any input
/// containing "fantasy" and either "romance" or "romantic".
#[derive(Debug, Clone, Copy)]
pub struct CompoundRule<T: 'static> {
    pub groups: &'static [&'static [&'static str]],
    pub value: T,
}

impl<T> CompoundRule<T> {
    fn matches(&self, input: &str) -> bool {
        self.groups
            .iter()
            .all(|group| group.iter().any(|term| input.contains(term)))
    }
}

/// Ordered resolution rules for one enumeration
///
/// Built as a `static` by each catalog module. Alias keys are written in
/// normalized form.
#[derive(Debug)]
pub struct Resolver<T: 'static> {
    pub(crate) steps: &'static [MatchStep],
    pub(crate) aliases: &'static [(&'static str, T)],
    pub(crate) compounds: &'static [CompoundRule<T>],
    /// Suffix ignored on canonical keys during `CanonicalSubstring`
    pub(crate) ignore_suffix: Option<&'static str>,
}

impl<T: Taxonomy> Resolver<T> {
    /// Resolve free text, failing with `InvalidInput` or `UnknownValue`
    pub fn resolve(&self, input: &str) -> Result<T> {
        self.resolve_with_step(input).map(|(value, _)| value)
    }

    /// Resolve and report which step produced the match
    pub fn resolve_with_step(&self, input: &str) -> Result<(T, MatchStep)> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Err(TaxonomyError::InvalidInput {
                kind: T::KIND,
                input: input.to_string(),
            });
        }

        match self.match_normalized(&normalized) {
            Some((value, step)) => {
                trace!(
                    kind = T::KIND,
                    input,
                    matched = value.key(),
                    step = step.label(),
                    "Resolved taxonomy value"
                );
                Ok((value, step))
            }
            None => Err(TaxonomyError::UnknownValue {
                kind: T::KIND,
                input: input.to_string(),
                sample: sample_keys::<T>(),
            }),
        }
    }

    /// Run the step list over already-normalized input
    pub fn match_normalized(&self, normalized: &str) -> Option<(T, MatchStep)> {
        let mut working: Cow<'_, str> = Cow::Borrowed(normalized);

        for &step in self.steps {
            let found = match step {
                MatchStep::Exact => T::from_key(&working),
                MatchStep::Alias => self
                    .aliases
                    .iter()
                    .find(|(alias, _)| *alias == working.as_ref())
                    .map(|(_, value)| *value),
                MatchStep::AliasSubstring => self
                    .aliases
                    .iter()
                    .find(|(alias, _)| overlaps(&working, alias))
                    .map(|(_, value)| *value),
                MatchStep::AliasKeyword => self
                    .aliases
                    .iter()
                    .find(|(alias, _)| !alias.is_empty() && working.contains(alias))
                    .map(|(_, value)| *value),
                MatchStep::Compound => self
                    .compounds
                    .iter()
                    .find(|rule| rule.matches(&working))
                    .map(|rule| rule.value),
                MatchStep::CanonicalSubstring => T::all().iter().copied().find(|value| {
                    let key = value.key();
                    let key = self
                        .ignore_suffix
                        .and_then(|suffix| key.strip_suffix(suffix))
                        .unwrap_or(key);
                    overlaps(&working, key)
                }),
                MatchStep::CompactSubstring => {
                    let input = compact(&working);
                    T::all()
                        .iter()
                        .copied()
                        .find(|value| overlaps(&input, &compact(value.key())))
                }
                MatchStep::StripPrefix(prefix) => {
                    let stripped = working
                        .strip_prefix(prefix)
                        .filter(|rest| !rest.is_empty())
                        .map(str::to_owned);
                    if let Some(rest) = stripped {
                        working = Cow::Owned(rest);
                    }
                    None
                }
            };

            if let Some(value) = found {
                return Some((value, step));
            }
        }

        None
    }

    /// Closest key or alias by normalized Levenshtein similarity
    ///
    /// Only used to enrich error responses; never changes what `resolve`
    /// returns. Ties keep the first candidate (keys before aliases).
    pub fn suggest(&self, input: &str, threshold: f64) -> Option<T> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }

        let keys = T::all().iter().map(|value| (value.key(), *value));
        let aliases = self.aliases.iter().copied();

        let mut best: Option<(f64, T)> = None;
        for (candidate, value) in keys.chain(aliases) {
            let score = strsim::normalized_levenshtein(&normalized, candidate);
            if score >= threshold && best.map_or(true, |(top, _)| score > top) {
                best = Some((score, value));
            }
        }

        best.map(|(_, value)| value)
    }

    /// Ordered alias table
    pub fn aliases(&self) -> &'static [(&'static str, T)] {
        self.aliases
    }

    pub fn steps(&self) -> &'static [MatchStep] {
        self.steps
    }
}

/// Bidirectional containment; an empty candidate never matches
fn overlaps(input: &str, candidate: &str) -> bool {
    !candidate.is_empty() && (input.contains(candidate) || candidate.contains(input))
}

fn compact(text: &str) -> String {
    text.chars().filter(|ch| *ch != '_').collect()
}

/// First keys in definition order, alphabetized
fn sample_keys<T: Taxonomy>() -> Vec<&'static str> {
    let mut sample: Vec<&'static str> = T::all().iter().take(SAMPLE_SIZE).map(|v| v.key()).collect();
    sample.sort_unstable();
    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::taxonomy;

    taxonomy! {
        enum Shade {
            Crimson => "crimson",
            NavyBlue => "navy_blue",
            Olive => "olive",
            CrimsonSub => "crimson_sub",
        }
    }

    static SHADE_RESOLVER: Resolver<Shade> = Resolver {
        steps: &[
            MatchStep::Exact,
            MatchStep::StripPrefix("the_"),
            MatchStep::Alias,
            MatchStep::Compound,
            MatchStep::AliasSubstring,
            MatchStep::CanonicalSubstring,
        ],
        aliases: &[("red", Shade::Crimson), ("dark_blue", Shade::NavyBlue)],
        compounds: &[CompoundRule {
            groups: &[&["green"], &["brown", "drab"]],
            value: Shade::Olive,
        }],
        ignore_suffix: Some("_sub"),
    };

    impl Taxonomy for Shade {
        const KIND: &'static str = "shade";

        fn all() -> &'static [Self] {
            Self::ALL
        }

        fn key(self) -> &'static str {
            self.as_str()
        }

        fn display_name(self) -> String {
            crate::engine::title_case(self.as_str())
        }

        fn description(self) -> String {
            String::new()
        }

        fn resolver() -> &'static Resolver<Self> {
            &SHADE_RESOLVER
        }
    }

    #[test]
    fn test_step_precedence() {
        let r = Shade::resolver();
        assert_eq!(r.resolve_with_step("Crimson").unwrap(), (Shade::Crimson, MatchStep::Exact));
        assert_eq!(r.resolve_with_step("RED").unwrap(), (Shade::Crimson, MatchStep::Alias));
        assert_eq!(r.resolve_with_step("drab green").unwrap(), (Shade::Olive, MatchStep::Compound));
        assert_eq!(
            r.resolve_with_step("very dark blue").unwrap(),
            (Shade::NavyBlue, MatchStep::AliasSubstring)
        );
        assert_eq!(r.resolve_with_step("navy").unwrap(), (Shade::NavyBlue, MatchStep::CanonicalSubstring));
    }

    #[test]
    fn test_strip_prefix_feeds_later_steps() {
        assert_eq!(
            Shade::resolver().resolve_with_step("the red").unwrap(),
            (Shade::Crimson, MatchStep::Alias)
        );
    }

    #[test]
    fn test_canonical_substring_ignores_suffix() {
        // "crims" overlaps both keys; definition order picks the first
        assert_eq!(Shade::resolve("crims").unwrap(), Shade::Crimson);
        assert_eq!(Shade::resolve("crimson sub").unwrap(), Shade::CrimsonSub);
        // only the unsuffixed key takes part in substring matching
        assert!(matches!(
            Shade::resolve("son sub"),
            Err(TaxonomyError::UnknownValue { .. })
        ));
    }

    #[test]
    fn test_compact_substring_ignores_underscores() {
        static COMPACT: Resolver<Shade> = Resolver {
            steps: &[MatchStep::Exact, MatchStep::CompactSubstring],
            aliases: &[],
            compounds: &[],
            ignore_suffix: None,
        };
        assert_eq!(
            COMPACT.resolve_with_step("NavyBlue").unwrap(),
            (Shade::NavyBlue, MatchStep::CompactSubstring)
        );
        assert_eq!(COMPACT.resolve("deep navyblue ink").unwrap(), Shade::NavyBlue);
        assert!(Shade::resolver().resolve("navyblue").is_err());
    }

    #[test]
    fn test_empty_input_is_invalid() {
        for input in ["", "   ", " - "] {
            assert!(matches!(
                Shade::resolve(input),
                Err(TaxonomyError::InvalidInput { kind: "shade", .. })
            ));
        }
    }

    #[test]
    fn test_unknown_carries_sorted_sample() {
        match Shade::resolve("12345") {
            Err(TaxonomyError::UnknownValue { input, sample, .. }) => {
                assert_eq!(input, "12345");
                assert_eq!(sample, vec!["crimson", "crimson_sub", "navy_blue", "olive"]);
            }
            other => panic!("expected UnknownValue, got {other:?}"),
        }
    }

    #[test]
    fn test_suggest_finds_typos() {
        let r = Shade::resolver();
        assert_eq!(r.suggest("crimsn", 0.8), Some(Shade::Crimson));
        assert_eq!(r.suggest("dark_blu", 0.8), Some(Shade::NavyBlue));
        assert_eq!(r.suggest("zzzz", 0.8), None);
    }

    #[test]
    fn test_serde_is_strict() {
        assert_eq!(serde_json::to_string(&Shade::NavyBlue).unwrap(), "\"navy_blue\"");
        let parsed: Shade = serde_json::from_str("\"olive\"").unwrap();
        assert_eq!(parsed, Shade::Olive);
        assert!(serde_json::from_str::<Shade>("\"red\"").is_err());
    }

    #[test]
    fn test_from_str_is_fuzzy() {
        let parsed: Shade = "Dark Blue".parse().unwrap();
        assert_eq!(parsed, Shade::NavyBlue);
    }
}
