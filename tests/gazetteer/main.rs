//! Integration tests for the rangecast_gazetteer crate.
//!
//! - Name set construction and canonicalization
//! - Resolver cascade ordering
//! - Suggestion ranking

mod ranker_tests;
