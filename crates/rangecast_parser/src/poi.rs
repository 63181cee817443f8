//! Custom POI batch parsing and validation.
//!
//! Groups are parsed from the raw input text rather than the normalized
//! form so that POI names keep their typed casing. A group exposing a
//! lat/lon pair but no usable range is retained with an error status
//! instead of being dropped; one malformed group never invalidates its
//! siblings.

use rangecast_foundation::{DistanceUnit, Poi, PoiStatus};

/// Largest max range accepted without a plausibility warning.
pub const MAX_PLAUSIBLE_RANGE: f64 = 20_000.0;

/// Filler and type-phrase words excluded from a POI name.
const NAME_STOPWORDS: &[&str] = &[
    "generate", "create", "build", "show", "a", "an", "the", "at", "from", "custom", "poi",
    "pois", "point", "points", "of", "interest",
];

/// Splits the text into POI groups on semicolons, newlines, and brackets.
#[must_use]
pub fn split_groups(text: &str) -> Vec<&str> {
    text.split([';', '\n', '[', ']'])
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .collect()
}

/// Parses every group in the text into POIs, in order.
///
/// Groups without a lat/lon pair are skipped; everything else is kept,
/// validated, and numbered for default names.
#[must_use]
pub fn parse_batch(text: &str) -> Vec<Poi> {
    let mut pois = Vec::new();
    for group in split_groups(text) {
        let index = pois.len() + 1;
        if let Some(poi) = parse_group(group, index) {
            pois.push(poi);
        }
    }
    pois
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Word(String),
    Number(f64),
    Range(f64, f64),
    Unit(DistanceUnit),
    Dash,
}

/// Parses one group matching `name? lat lon (range|min-max)? unit?`.
fn parse_group(group: &str, index: usize) -> Option<Poi> {
    let mut name_words: Vec<String> = Vec::new();
    let mut numbers: Vec<f64> = Vec::new();
    let mut range: Option<(f64, f64)> = None;
    let mut unit: Option<DistanceUnit> = None;

    for token in tokenize(group) {
        match token {
            Token::Word(word) => {
                if numbers.is_empty() && !NAME_STOPWORDS.contains(&word.to_lowercase().as_str()) {
                    name_words.push(word);
                }
            }
            Token::Number(value) => {
                if numbers.len() < 2 {
                    numbers.push(value);
                } else if range.is_none() {
                    range = Some((0.0, value));
                }
            }
            Token::Range(min, max) => {
                if numbers.len() >= 2 && range.is_none() {
                    range = Some((min, max));
                }
            }
            Token::Unit(u) => {
                if unit.is_none() {
                    unit = Some(u);
                }
            }
            Token::Dash => {}
        }
    }

    let (lat, lon) = match numbers.as_slice() {
        [lat, lon, ..] => (*lat, *lon),
        _ => return None,
    };
    let name = if name_words.is_empty() {
        format!("POI {index}")
    } else {
        name_words.join(" ")
    };

    Some(validate(name, lat, lon, range, unit))
}

/// Applies the constraint checks and derives the POI status.
fn validate(
    name: String,
    lat: f64,
    lon: f64,
    range: Option<(f64, f64)>,
    unit: Option<DistanceUnit>,
) -> Poi {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !(-90.0..=90.0).contains(&lat) {
        errors.push(format!("{name}: latitude must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&lon) {
        errors.push(format!("{name}: longitude must be between -180 and 180"));
    }

    let (min_range, max_range) = match range {
        Some((min, max)) => {
            if min < 0.0 {
                errors.push(format!("{name}: min range cannot be negative"));
            }
            if max <= 0.0 {
                errors.push(format!("{name}: max range must be > 0"));
            }
            if min > 0.0 && max <= min {
                errors.push(format!("{name}: max range must exceed min range"));
            }
            if max > MAX_PLAUSIBLE_RANGE {
                warnings.push(format!(
                    "{name}: max range {max} is very large; ensure this is intentional"
                ));
            }
            if unit.is_none() {
                errors.push(format!("{name}: unit must be km or mi"));
            }
            (min, max)
        }
        None => {
            errors.push(format!("{name}: range required"));
            (0.0, 0.0)
        }
    };

    let status = if !errors.is_empty() {
        PoiStatus::Error
    } else if warnings.is_empty() {
        PoiStatus::Exact
    } else {
        PoiStatus::Fuzzy
    };

    let mut messages = errors;
    messages.append(&mut warnings);
    Poi {
        name,
        lat,
        lon,
        min_range,
        max_range,
        unit: unit.unwrap_or(DistanceUnit::Kilometers),
        status,
        messages,
    }
}

fn tokenize(group: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for word in group.split_whitespace() {
        let word = word.trim_matches([',', ':']);
        if !word.is_empty() {
            classify(word, &mut tokens);
        }
    }
    fold_spaced_ranges(tokens)
}

fn classify(word: &str, tokens: &mut Vec<Token>) {
    if word == "-" {
        tokens.push(Token::Dash);
        return;
    }
    if let Some(unit) = poi_unit(word) {
        tokens.push(Token::Unit(unit));
        return;
    }
    if let Ok(value) = word.parse::<f64>() {
        tokens.push(Token::Number(value));
        return;
    }
    // "300-1200": a dash past the first character splits a min-max pair;
    // a leading dash is a negative coordinate.
    if let Some((at, _)) = word.char_indices().skip(1).find(|&(_, c)| c == '-') {
        let (min, max) = (&word[..at], &word[at + 1..]);
        if let (Ok(min), Ok(max)) = (min.parse::<f64>(), max.parse::<f64>()) {
            tokens.push(Token::Range(min, max));
            return;
        }
    }
    // "1200km" with no space before the unit.
    let lowered = word.to_lowercase();
    for suffix in ["km", "mi"] {
        if let Some(stem) = lowered.strip_suffix(suffix) {
            if let Ok(value) = stem.parse::<f64>() {
                tokens.push(Token::Number(value));
                if let Some(unit) = poi_unit(suffix) {
                    tokens.push(Token::Unit(unit));
                }
                return;
            }
        }
    }
    tokens.push(Token::Word(word.to_owned()));
}

/// Rewrites `number - number` runs, typed with spaces around the dash,
/// into a single range token. Stray dashes are dropped.
fn fold_spaced_ranges(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if let (Some(Token::Number(min)), Some(Token::Dash), Some(Token::Number(max))) =
            (tokens.get(i), tokens.get(i + 1), tokens.get(i + 2))
        {
            out.push(Token::Range(*min, *max));
            i += 3;
            continue;
        }
        if tokens[i] != Token::Dash {
            out.push(tokens[i].clone());
        }
        i += 1;
    }
    out
}

fn poi_unit(word: &str) -> Option<DistanceUnit> {
    match word.to_lowercase().as_str() {
        "km" => Some(DistanceUnit::Kilometers),
        "mi" => Some(DistanceUnit::Miles),
        _ => None,
    }
}
