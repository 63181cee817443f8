//! The interactive console: one parse and status report per line.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use rangecast_foundation::{GrammarFamily, Result, Slot, UiStatus};
use rangecast_gazetteer::{DEFAULT_SUGGESTION_LIMIT, Suggestion, rank};
use rangecast_parser::{CommandEngine, EngineReport};

/// The interactive console.
pub struct Console<E: LineEditor = RustylineEditor> {
    editor: E,
    engine: CommandEngine,
    show_banner: bool,
    prompt: String,
    suggestion_limit: usize,
}

impl Console<RustylineEditor> {
    /// Creates a console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(engine: CommandEngine) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(engine, editor))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(engine: CommandEngine, mut editor: E) -> Self {
        let mut names: Vec<String> = Vec::new();
        for set in [engine.gazetteer().countries(), engine.gazetteer().cities()] {
            names.extend(set.entries().iter().map(|entry| entry.display.clone()));
        }
        editor.set_names(names);

        Self {
            editor,
            engine,
            show_banner: true,
            prompt: "rangecast> ".to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the number of suggestions shown by `:countries` and `:cities`.
    #[must_use]
    pub const fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Runs the console loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            if let Some(command) = trimmed.strip_prefix(':') {
                if !self.console_command(command) {
                    break;
                }
                continue;
            }

            let report = self.engine.parse(&line);
            print_report(&report);
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles a `:`-prefixed console command. Returns false to exit.
    fn console_command(&self, command: &str) -> bool {
        let (name, rest) = match command.split_once(' ') {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        match name {
            "q" | "quit" | "exit" => return false,
            "help" => print_help(),
            "countries" => print_suggestions(&rank(
                rest,
                self.engine.gazetteer().countries(),
                self.suggestion_limit,
            )),
            "cities" => print_suggestions(&rank(
                rest,
                self.engine.gazetteer().cities(),
                self.suggestion_limit,
            )),
            other => println!("Unknown console command :{other}. Try :help."),
        }
        true
    }
}

fn print_banner() {
    println!("\x1b[1;36mRangecast\x1b[0m {}", env!("CARGO_PKG_VERSION"));
    println!("Type a command to see live validation, :help for help, Ctrl+D to exit.");
    println!();
}

fn print_help() {
    println!(
        "\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :help              Show this help
    :countries TERM    Ranked country suggestions for a partial term
    :cities TERM       Ranked city suggestions for a partial term
    :quit              Exit (also Ctrl+D)

\x1b[1mCOMMAND FORMATS:\x1b[0m
    Generate a single range ring from Iran
    Generate a reverse range ring from Iran against Tel Aviv
    Calculate minimum distance between Korea, North and Japan
    Generate multiple range rings from Iran at 300, 600 and 900 km.
      The respective missile names are Fateh, Zolfaghar and Khorramshahr.
    Custom POIs: [Tehran 35.6762 51.4241 300-1200 km]
    Show launch trajectory from Pyongyang to Tokyo"
    );
}

fn print_report(report: &EngineReport) {
    println!("{} {}", status_icon(report.status), report.message);
    if let Some(family) = report.family {
        println!("  tool: {}", family.tool_name());
        print_details(family, report);
    }
    if let Some(hint) = report.hint {
        println!("  \x1b[2m{hint}\x1b[0m");
    }
    println!();
}

fn print_details(family: GrammarFamily, report: &EngineReport) {
    let parses = &report.parses;
    match family {
        GrammarFamily::Single => print_slot("country", &parses.single.country),
        GrammarFamily::Reverse => {
            print_slot("country", &parses.reverse.country);
            print_slot("city", &parses.reverse.city);
        }
        GrammarFamily::Minimum => {
            print_slot("location a", &parses.minimum.location_a);
            print_slot("location b", &parses.minimum.location_b);
            if parses.minimum.same_location {
                println!("  \x1b[31mboth locations are the same place\x1b[0m");
            }
        }
        GrammarFamily::Multiple => {
            print_slot("country", &parses.multiple.country);
            if !parses.multiple.distances.is_empty() {
                let unit = parses
                    .multiple
                    .unit
                    .map_or("(no unit)", |unit| unit.as_str());
                println!("  distances: {:?} {unit}", parses.multiple.distances);
            }
            if !parses.multiple.missile_names.is_empty() {
                println!(
                    "  missiles: {} ({:?})",
                    parses.multiple.missile_names.join(", "),
                    parses.multiple.missile_status
                );
            }
        }
        GrammarFamily::CustomPoi => {
            for poi in &parses.custom_poi.pois {
                println!(
                    "  {} {:.4} {:.4} {}-{} {} ({:?})",
                    poi.name, poi.lat, poi.lon, poi.min_range, poi.max_range, poi.unit, poi.status
                );
                for message in &poi.messages {
                    println!("    \x1b[31m{message}\x1b[0m");
                }
            }
        }
        GrammarFamily::Trajectory => {
            print_slot("origin", &parses.trajectory.origin);
            print_slot("destination", &parses.trajectory.destination);
        }
    }
}

fn print_slot(label: &str, slot: &Slot) {
    match (&slot.matched, &slot.raw) {
        (Some(canonical), _) => {
            println!("  {label}: {canonical} ({:?})", slot.status);
        }
        (None, Some(raw)) => println!("  {label}: \x1b[31m{raw} (no match)\x1b[0m"),
        (None, None) => println!("  {label}: \x1b[2m(missing)\x1b[0m"),
    }
}

fn print_suggestions(suggestions: &[Suggestion<'_>]) {
    if suggestions.is_empty() {
        println!("No matches.");
        return;
    }
    for suggestion in suggestions {
        println!("  {:>3}  {}", suggestion.score, suggestion.display);
    }
}

const fn status_icon(status: UiStatus) -> &'static str {
    match status {
        UiStatus::Empty => " ",
        UiStatus::Typing => "…",
        UiStatus::Valid => "\x1b[32m✔\x1b[0m",
        UiStatus::Attention => "\x1b[31m✗\x1b[0m",
        UiStatus::Fuzzy => "\x1b[33m⚠\x1b[0m",
        UiStatus::Unrecognized => "?",
        UiStatus::Query => "»",
    }
}
