//! Gazetteer storage, entity resolution, and suggestion ranking.
//!
//! Two deliberately different matching strategies live here:
//!
//! - [`resolve`] - validation: a first-match cascade over the set in
//!   insertion order, used to classify extracted slots.
//! - [`suggest`] - autocomplete: a scored ranker over display entries.
//!
//! They solve different problems and must not be consolidated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod resolve;
pub mod set;
pub mod suggest;

pub use resolve::{resolve_exact, resolve_fuzzy, resolve_slot};
pub use set::{Gazetteer, NameEntry, NameSet, canonicalize};
pub use suggest::{DEFAULT_SUGGESTION_LIMIT, Suggestion, rank};
