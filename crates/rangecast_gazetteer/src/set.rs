//! Immutable name sets and the combined gazetteer.
//!
//! A [`NameSet`] stores canonical (lowercase) and display (original case)
//! forms for one category of names. Insertion order is preserved: the fuzzy
//! resolver scans entries in that order, so set construction order is part
//! of the resolution contract.

use std::collections::HashSet;

use rangecast_foundation::{Error, Result};

/// One gazetteer entry: canonical lookup form plus display form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameEntry {
    /// Lowercase, whitespace-collapsed lookup form. Unique within its set.
    pub canonical: String,
    /// Original-case display form.
    pub display: String,
}

/// An insertion-ordered set of names with unique canonical forms.
#[derive(Clone, Debug, Default)]
pub struct NameSet {
    entries: Vec<NameEntry>,
    canonicals: HashSet<String>,
}

impl NameSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from display names, deriving canonical forms.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is empty after normalization or if two
    /// names share a canonical form.
    pub fn from_display<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name.as_ref())?;
        }
        Ok(set)
    }

    /// Inserts one display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after normalization or its
    /// canonical form is already present.
    pub fn insert(&mut self, display: &str) -> Result<()> {
        let canonical = canonicalize(display);
        if canonical.is_empty() {
            return Err(Error::empty_name());
        }
        if self.canonicals.contains(&canonical) {
            return Err(Error::duplicate_name(canonical));
        }
        self.canonicals.insert(canonical.clone());
        self.entries.push(NameEntry {
            canonical,
            display: display.trim().to_string(),
        });
        Ok(())
    }

    /// Looks up an entry by canonical form.
    #[must_use]
    pub fn get(&self, canonical: &str) -> Option<&NameEntry> {
        if self.canonicals.contains(canonical) {
            self.entries.iter().find(|e| e.canonical == canonical)
        } else {
            None
        }
    }

    /// Whether a canonical form is a literal member.
    #[must_use]
    pub fn contains(&self, canonical: &str) -> bool {
        self.canonicals.contains(canonical)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalizes a display name into its canonical lookup form.
#[must_use]
pub fn canonicalize(display: &str) -> String {
    display
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The read-only reference data: countries and cities.
///
/// Constructed once at process start and never mutated; every parse borrows
/// it immutably, so overlapping host events are safe by construction.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    countries: NameSet,
    cities: NameSet,
}

impl Gazetteer {
    /// Creates a gazetteer from the two category sets.
    #[must_use]
    pub fn new(countries: NameSet, cities: NameSet) -> Self {
        Self { countries, cities }
    }

    /// The country set.
    #[must_use]
    pub fn countries(&self) -> &NameSet {
        &self.countries
    }

    /// The city set.
    #[must_use]
    pub fn cities(&self) -> &NameSet {
        &self.cities
    }

    /// Union scan order for grammars that prefer countries (Minimum).
    #[must_use]
    pub fn countries_then_cities(&self) -> [&NameSet; 2] {
        [&self.countries, &self.cities]
    }

    /// Union scan order for grammars that prefer cities (Trajectory).
    #[must_use]
    pub fn cities_then_countries(&self) -> [&NameSet; 2] {
        [&self.cities, &self.countries]
    }
}
