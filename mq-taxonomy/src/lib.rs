//! # Musequill Taxonomy Engine
//!
//! Closed enumerations of literary concepts (genres, subgenres, plots,
//! audiences, book lengths, content warnings, research types, story
//! structures, character roles and archetypes, world types) with:
//! - derived metadata computed from static tier tables
//! - a deterministic fuzzy resolver from free text to a canonical value
//! - genre/subgenre combination validation
//! - generators that assemble content-warning profiles, research plans,
//!   structure recommendations and length recommendations
//!
//! Everything here is synchronous and pure over static data. Profiles and
//! plans are plain owned values.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod planning;

pub use engine::{normalize, CrossTaxonomyMap, MapStatistics, Resolver, Taxonomy, Tier, ValidatedPair};
pub use error::{Result, TaxonomyError};
