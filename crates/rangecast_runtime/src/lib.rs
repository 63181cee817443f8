//! Host integration, dataset loading, and the interactive console.
//!
//! The parsing engine is a pure transform; this crate supplies everything
//! around it: the [`StatusSink`] boundary a host UI implements, JSON
//! gazetteer datasets, and the `rangecast` command-line console.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod dataset;
pub mod editor;
pub mod host;

pub use console::Console;
pub use dataset::{DatasetFile, demo_gazetteer, load_dataset};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use host::{LatestStatus, StatusSink, Workbench};
