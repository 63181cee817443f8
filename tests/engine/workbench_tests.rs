//! Host wiring tests: workbench, sinks, and dataset-backed engines.

use rangecast_foundation::{GrammarFamily, UiStatus};
use rangecast_parser::{CommandEngine, EngineReport};
use rangecast_runtime::{DatasetFile, LatestStatus, StatusSink, Workbench, demo_gazetteer};

fn workbench() -> Workbench<LatestStatus> {
    Workbench::new(
        CommandEngine::new(demo_gazetteer()),
        LatestStatus::default(),
    )
}

/// Sink that records every status it sees, in order.
#[derive(Default)]
struct StatusTrace {
    statuses: Vec<UiStatus>,
}

impl StatusSink for StatusTrace {
    fn status_changed(&mut self, report: &EngineReport) {
        self.statuses.push(report.status);
    }
}

#[test]
fn sink_sees_only_the_latest_text() {
    let mut bench = workbench();
    bench.text_changed("generate a range ring from iran");
    bench.text_changed("generate a range ring from atlantis");
    let last = bench.sink().last.as_ref().unwrap();
    assert_eq!(last.status, UiStatus::Attention);
}

#[test]
fn status_follows_every_keystroke_boundary() {
    let mut bench = Workbench::new(CommandEngine::new(demo_gazetteer()), StatusTrace::default());
    for text in [
        "",
        "generate",
        "generate a reverse range ring",
        "generate a reverse range ring from iran against tel aviv",
    ] {
        bench.text_changed(text);
    }
    assert_eq!(
        bench.sink().statuses,
        vec![
            UiStatus::Empty,
            UiStatus::Unrecognized,
            UiStatus::Typing,
            UiStatus::Valid,
        ]
    );
}

#[test]
fn returned_report_matches_what_the_sink_received() {
    let mut bench = workbench();
    let report = bench.text_changed("show launch trajectory from pyongyang to tokyo");
    assert_eq!(report.family, Some(GrammarFamily::Trajectory));
    let held = bench.sink().last.as_ref().unwrap();
    assert_eq!(held.family, report.family);
    assert_eq!(held.status, report.status);
}

#[test]
fn dataset_file_feeds_the_engine_end_to_end() {
    let json = r#"{ "countries": ["Iran", "Japan"], "cities": ["Tehran", "Tokyo"] }"#;
    let file: DatasetFile = serde_json::from_str(json).unwrap();
    let engine = CommandEngine::new(file.into_gazetteer().unwrap());
    let report = engine.parse("generate a range ring from japan");
    assert_eq!(report.status, UiStatus::Valid);

    // Names absent from the dataset resolve nowhere.
    let missing = engine.parse("generate a range ring from france");
    assert_eq!(missing.status, UiStatus::Attention);
}

#[test]
fn demo_dataset_supports_every_command_family() {
    let engine = CommandEngine::new(demo_gazetteer());
    let commands = [
        ("generate a range ring from iran", GrammarFamily::Single),
        (
            "generate a reverse range ring from iran against tel aviv",
            GrammarFamily::Reverse,
        ),
        (
            "calculate minimum distance between france and japan",
            GrammarFamily::Minimum,
        ),
        (
            "generate multiple range rings from iran at 300, 600 km",
            GrammarFamily::Multiple,
        ),
        (
            "custom poi: site a 35.7 51.4 800 km",
            GrammarFamily::CustomPoi,
        ),
        (
            "show launch trajectory from pyongyang to tokyo",
            GrammarFamily::Trajectory,
        ),
    ];
    for (text, family) in commands {
        let report = engine.parse(text);
        assert_eq!(report.family, Some(family), "{text}");
        assert_eq!(report.status, UiStatus::Valid, "{text}");
    }
}
