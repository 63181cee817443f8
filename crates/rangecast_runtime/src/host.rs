//! The boundary between the engine and a host UI.

use rangecast_parser::{CommandEngine, EngineReport};

/// Consumes fresh engine reports as the text changes.
///
/// The host pushes the full current text on every change event; the engine
/// re-parses from scratch, so the latest report always reflects the latest
/// text with no debouncing or ordering concerns.
pub trait StatusSink {
    /// Called with the report for the current text.
    fn status_changed(&mut self, report: &EngineReport);
}

/// Wires an engine to a sink, one parse per text change.
#[derive(Debug)]
pub struct Workbench<S> {
    engine: CommandEngine,
    sink: S,
}

impl<S: StatusSink> Workbench<S> {
    /// Creates a workbench over the engine and sink.
    pub const fn new(engine: CommandEngine, sink: S) -> Self {
        Self { engine, sink }
    }

    /// Re-parses the full text and forwards the report to the sink.
    pub fn text_changed(&mut self, text: &str) -> EngineReport {
        let report = self.engine.parse(text);
        self.sink.status_changed(&report);
        report
    }

    /// The engine behind this workbench.
    #[must_use]
    pub const fn engine(&self) -> &CommandEngine {
        &self.engine
    }

    /// The sink behind this workbench.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

/// Sink that keeps only the most recent report.
#[derive(Debug, Default)]
pub struct LatestStatus {
    /// The last report received, if any.
    pub last: Option<EngineReport>,
}

impl StatusSink for LatestStatus {
    fn status_changed(&mut self, report: &EngineReport) {
        self.last = Some(report.clone());
    }
}
