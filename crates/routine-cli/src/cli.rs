//! CLI argument definitions for the routine finder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use routine_model::{Field, FilterState};

#[derive(Parser)]
#[command(
    name = "routine",
    version,
    about = "Look up classes in a published class routine",
    long_about = "Look up classes in a published class routine.\n\n\
                  Filter by day, time slot, course, teacher, section or room,\n\
                  or search all fields at once. Results are ordered by weekday,\n\
                  slot number and course code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Source URL (overrides the settings file).
    #[arg(long = "url", value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Cache file (overrides the settings file).
    #[arg(long = "cache", value_name = "PATH", global = true)]
    pub cache: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find classes matching a search and filters.
    Search(SearchArgs),

    /// List the filter options for one field or all fields.
    Options(OptionsArgs),

    /// Download the routine and update the local cache.
    Refresh,

    /// Show the settings file location and effective settings.
    Config(ConfigArgs),
}

/// Where rows come from for a lookup.
#[derive(Args)]
pub struct SourceArgs {
    /// Read rows from a local CSV or JSON export instead of the configured source.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Use the cached routine without contacting the source.
    #[arg(long = "offline")]
    pub offline: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive text matched against all fields.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Exact day (e.g. Sunday).
    #[arg(long = "day", value_name = "DAY")]
    pub day: Option<String>,

    /// Exact time slot (e.g. "Slot 1").
    #[arg(long = "slot", value_name = "SLOT")]
    pub slot: Option<String>,

    /// Exact course code.
    #[arg(long = "course", value_name = "CODE")]
    pub course: Option<String>,

    /// Exact teacher.
    #[arg(long = "teacher", value_name = "TEACHER")]
    pub teacher: Option<String>,

    /// Exact semester and section.
    #[arg(long = "section", value_name = "SECTION")]
    pub section: Option<String>,

    /// Exact room.
    #[arg(long = "room", value_name = "ROOM")]
    pub room: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for matched rows.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl SearchArgs {
    /// Lookup predicates given on the command line.
    pub fn filter_state(&self) -> FilterState {
        let mut state = FilterState::new();
        if let Some(text) = &self.text {
            state.set_text(text.clone());
        }
        let selectors = [
            (Field::Day, &self.day),
            (Field::TimeSlot, &self.slot),
            (Field::CourseCode, &self.course),
            (Field::Teacher, &self.teacher),
            (Field::SemesterSection, &self.section),
            (Field::Room, &self.room),
        ];
        for (field, value) in selectors {
            state.set_opt(field, value.clone());
        }
        state
    }
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Field to list (day, slot, course, teacher, section, room). All when omitted.
    #[arg(long = "field", value_name = "FIELD")]
    pub field: Option<Field>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write default settings when no settings file exists.
    #[arg(long = "init")]
    pub init: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_args(argv: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Search(args) => args,
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn search_flags_map_to_their_fields() {
        let args = search_args(&[
            "routine", "search", "cse", "--slot", "Slot 1", "--section", "3A",
        ]);
        let state = args.filter_state();

        assert_eq!(state.text(), Some("cse"));
        assert_eq!(state.selector(Field::TimeSlot), Some("Slot 1"));
        assert_eq!(state.selector(Field::SemesterSection), Some("3A"));
        assert_eq!(state.selector(Field::Day), None);
        assert_eq!(state.selector(Field::Room), None);
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn every_selector_flag_is_distinct() {
        let args = search_args(&[
            "routine", "search", "--day", "Sunday", "--slot", "Slot 2", "--course", "CSE101",
            "--teacher", "AB", "--section", "1A", "--room", "305",
        ]);
        let state = args.filter_state();
        let selectors: Vec<(Field, &str)> = state.selectors().collect();

        assert_eq!(
            selectors,
            vec![
                (Field::Day, "Sunday"),
                (Field::TimeSlot, "Slot 2"),
                (Field::CourseCode, "CSE101"),
                (Field::Teacher, "AB"),
                (Field::SemesterSection, "1A"),
                (Field::Room, "305"),
            ]
        );
        assert_eq!(state.text(), None);
    }

    #[test]
    fn empty_room_leaves_state_inactive() {
        let args = search_args(&["routine", "search", "--room", ""]);
        assert!(!args.filter_state().is_active());
    }

    #[test]
    fn options_field_accepts_key_or_label() {
        let cli = Cli::try_parse_from(["routine", "options", "--field", "Time Slot"]).unwrap();
        match cli.command {
            Command::Options(args) => assert_eq!(args.field, Some(Field::TimeSlot)),
            _ => panic!("expected options command"),
        }
        assert!(Cli::try_parse_from(["routine", "options", "--field", "weekday"]).is_err());
    }
}
