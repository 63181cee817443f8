//! Rangecast - Natural-language command parsing for range-ring tasking
//!
//! This crate re-exports all layers of the Rangecast system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: rangecast_runtime      Console, dataset loading, CLI
//! Layer 2: rangecast_parser       Detection, grammars, status aggregation
//! Layer 1: rangecast_gazetteer    Name sets, entity resolution, suggestions
//! Layer 0: rangecast_foundation   Core types (Slot, Poi, Error)
//! ```

pub use rangecast_foundation as foundation;
pub use rangecast_gazetteer as gazetteer;
pub use rangecast_parser as parser;
pub use rangecast_runtime as runtime;
