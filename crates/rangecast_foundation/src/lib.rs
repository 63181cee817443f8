//! Core types for the Rangecast command engine.
//!
//! This crate provides:
//! - [`Slot`] and [`MatchStatus`] - tri-state field resolution results
//! - [`GrammarFamily`] - the six recognized command shapes
//! - [`UiStatus`] - the aggregate feedback states shown to the analyst
//! - [`AggregateFlags`] - per-family validity summaries
//! - [`Poi`] - a user-supplied point of interest with a range band
//! - [`Error`] - construction-boundary error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod family;
pub mod flags;
pub mod poi;
pub mod slot;
pub mod unit;

pub use error::{Error, ErrorKind, Result};
pub use family::{GrammarFamily, UiStatus};
pub use flags::AggregateFlags;
pub use poi::{Poi, PoiStatus};
pub use slot::{MatchStatus, Slot};
pub use unit::DistanceUnit;
