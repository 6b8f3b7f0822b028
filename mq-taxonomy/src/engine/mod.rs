//! Generic taxonomy engine
//!
//! Every domain enumeration is declared with [`taxonomy!`] and implements
//! [`Taxonomy`], supplying only its data: keys, display names, an ordered
//! alias table and tier partitions. Resolution, tier classification and
//! cross-taxonomy validation are shared.

mod cross_map;
mod normalize;
mod resolver;
mod tier;

pub use cross_map::{CrossTaxonomyMap, MapStatistics, ValidatedPair};
pub use normalize::normalize;
pub use resolver::{CompoundRule, MatchStep, Resolver};
pub use tier::Tier;

use crate::error::Result;
use serde_json::{json, Value};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed, ordered enumeration of canonical values
pub trait Taxonomy: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Singular label used in diagnostics ("genre", "content warning", ...)
    const KIND: &'static str;

    /// Every value in definition order
    fn all() -> &'static [Self];

    /// Canonical key (lowercase snake case)
    fn key(self) -> &'static str;

    fn display_name(self) -> String;

    fn description(self) -> String;

    /// Resolver holding this enumeration's alias and compound rules
    fn resolver() -> &'static Resolver<Self>;

    /// Exact key lookup, no normalization
    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.key() == key)
    }

    /// Resolve free text to a canonical value
    fn resolve(input: &str) -> Result<Self> {
        Self::resolver().resolve(input)
    }

    /// Plain JSON view of the value and its derived metadata
    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
        })
    }
}

/// Title-case a snake_case key: `"science_fiction"` -> `"Science Fiction"`
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Declare a canonical enumeration
///
/// Generates the enum (ordered by declaration), `ALL`, `KEYS`, `as_str()`,
/// `Display` (canonical key), `Serialize` (canonical key), strict
/// `Deserialize` (exact key only) and `FromStr` (fuzzy resolution through
/// the type's [`Taxonomy`] impl).
macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value in definition order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Canonical keys in definition order
            pub const KEYS: &'static [&'static str] = &[ $( $key ),+ ];

            /// Canonical key
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $key ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == raw)
                    .ok_or_else(|| <D::Error as ::serde::de::Error>::unknown_variant(&raw, $name::KEYS))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::TaxonomyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::engine::Taxonomy>::resolve(s)
            }
        }
    };
}

pub(crate) use taxonomy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("science_fiction"), "Science Fiction");
        assert_eq!(title_case("cli_fi"), "Cli Fi");
        assert_eq!(title_case("romance"), "Romance");
        assert_eq!(title_case(""), "");
    }
}
