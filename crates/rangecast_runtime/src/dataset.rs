//! Gazetteer datasets loaded from JSON files.

use rangecast_foundation::{Error, Result};
use rangecast_gazetteer::{Gazetteer, NameSet};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk dataset format: display names per set, canonical forms derived
/// at load.
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    /// Country display names.
    pub countries: Vec<String>,
    /// City display names.
    pub cities: Vec<String>,
}

impl DatasetFile {
    /// Builds a gazetteer from the display name lists.
    ///
    /// # Errors
    ///
    /// Returns an error on empty or duplicate canonical names.
    pub fn into_gazetteer(self) -> Result<Gazetteer> {
        Ok(Gazetteer::new(
            NameSet::from_display(&self.countries)?,
            NameSet::from_display(&self.cities)?,
        ))
    }
}

/// Loads a gazetteer from a JSON dataset file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// contains empty or duplicate names.
pub fn load_dataset(path: &Path) -> Result<Gazetteer> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::dataset(format!("{}: {e}", path.display())))?;
    let file: DatasetFile = serde_json::from_str(&text)
        .map_err(|e| Error::dataset(format!("{}: {e}", path.display())))?;
    file.into_gazetteer()
}

/// A small built-in dataset for running the console without a file.
#[must_use]
pub fn demo_gazetteer() -> Gazetteer {
    let countries = NameSet::from_display([
        "Iran",
        "Israel",
        "Korea, North",
        "Korea, South",
        "Japan",
        "China",
        "Russia",
        "India",
        "Pakistan",
        "France",
        "United Kingdom",
        "United States",
    ])
    .unwrap_or_default();
    let cities = NameSet::from_display([
        "Tehran",
        "Isfahan",
        "Tel Aviv",
        "Jerusalem",
        "Pyongyang",
        "Seoul",
        "Tokyo",
        "Beijing",
        "Moscow",
        "New Delhi",
        "Islamabad",
        "Paris",
        "London",
        "Washington",
    ])
    .unwrap_or_default();
    Gazetteer::new(countries, cities)
}
