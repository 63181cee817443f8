//! Natural language command parsing for range-ring tasking.
//!
//! This crate transforms analyst input like "generate a reverse range ring
//! from Iran against Tel Aviv" into structured, validated parse results that
//! a host UI can paint live feedback from.
//!
//! # Architecture
//!
//! ```text
//! "generate a reverse range ring from Iran against Tel Aviv"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZE       │  → "generate a reverse range ring from iran against tel aviv"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TYPE DETECTOR   │  → { reverse: true, single: suppressed, verb: true, ... }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR PARSERS │  → country="iran", city="tel aviv", target_prep="against"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ENTITY RESOLVER │  → iran: Exact, tel aviv: Exact (gazetteer crate)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STATUS          │  → all_exact=true → UiStatus::Valid
//! │ AGGREGATOR      │
//! └─────────────────┘
//! ```
//!
//! Every parse is a pure function of `(text, gazetteer)`: no cross-call
//! state, no caching, cheap enough for per-keystroke invocation.
//!
//! # Modules
//!
//! - [`normalize`] - whitespace/case normalization
//! - [`scan`] - anchored phrase and priority-ordered word scanning
//! - [`detect`] - command type detection from keyword presence
//! - [`grammar`] - the six family parsers
//! - [`poi`] - POI group extraction and constraint validation
//! - [`status`] - aggregate flags and the overall status arbiter
//! - [`messages`] - the fixed status/hint message catalog
//! - [`engine`] - the per-keystroke pipeline orchestrator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod detect;
pub mod engine;
pub mod grammar;
pub mod messages;
pub mod normalize;
pub mod poi;
pub mod scan;
pub mod status;

pub use detect::TypeFlags;
pub use engine::{CommandEngine, EngineReport, Parses};
