//! Domain catalogs
//!
//! Each module declares one or more enumerations and supplies only data:
//! keys, display names, alias rules and tier tables.

pub mod audience;
pub mod book_length;
pub mod character;
pub mod content_warning;
pub mod genre;
pub mod genre_subgenre;
pub mod levels;
pub mod plot;
pub mod research;
pub mod story_structure;
pub mod subgenre;
pub mod world;

pub use audience::AudienceType;
pub use book_length::BookLength;
pub use character::{CharacterArchetype, CharacterRole};
pub use content_warning::{ContentWarning, WarningCategory};
pub use genre::GenreType;
pub use genre_subgenre::{GenreSubgenrePair, GENRE_SUBGENRES};
pub use levels::{
    Difficulty, MarketSize, NarrativeImportance, PlotComplexity, PlotLength, Priority, PublishingViability,
    ReadingLevel, Severity, StoryLength, StructureComplexity, WorldComplexity,
};
pub use plot::PlotType;
pub use research::ResearchType;
pub use story_structure::StoryStructure;
pub use subgenre::SubGenreType;
pub use world::WorldType;

#[cfg(test)]
pub(crate) mod testing {
    use crate::engine::{MatchStep, Taxonomy};

    /// Every key resolves to itself
    pub fn assert_keys_resolve<T: Taxonomy>() {
        for value in T::all() {
            assert_eq!(T::resolve(value.key()).unwrap(), *value, "key {}", value.key());
        }
    }

    /// Every alias resolves to its target, except where the exact-key step
    /// or an earlier keyword rule takes precedence
    ///
    /// Returns the aliases shadowed by an earlier keyword so callers can pin
    /// them down explicitly.
    pub fn assert_aliases_resolve<T: Taxonomy>() -> Vec<&'static str> {
        let resolver = T::resolver();
        let exact_alias_step = resolver.steps().contains(&MatchStep::Alias);
        let mut shadowed = Vec::new();

        for (alias, target) in resolver.aliases() {
            let resolved = T::resolve(alias).unwrap();
            if let Some(key) = T::from_key(alias) {
                assert_eq!(resolved, key, "alias {alias} is also a key");
            } else if exact_alias_step || resolved == *target {
                assert_eq!(resolved, *target, "alias {alias}");
            } else {
                shadowed.push(*alias);
            }
        }

        shadowed
    }
}
