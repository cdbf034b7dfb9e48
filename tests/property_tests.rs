//! Property-based tests for session_logger using proptest

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use session_logger::core::file_line::{parse_date_stamp, parse_time_stamp, FileLine};
use session_logger::core::routing::Route;
use session_logger::core::template::{render, ADDITIONAL_TEMPLATE, FILE_TEMPLATE};
use session_logger::prelude::*;

fn log_type() -> impl Strategy<Value = LogType> {
    prop_oneof![
        Just(LogType::Info),
        Just(LogType::Success),
        Just(LogType::Error),
        Just(LogType::Warning),
        Just(LogType::Debug),
    ]
}

fn verbosity() -> impl Strategy<Value = VerbosityMode> {
    prop_oneof![
        Just(VerbosityMode::ConsoleOnly),
        Just(VerbosityMode::FileOnly),
        Just(VerbosityMode::FileAndConsole),
    ]
}

fn options() -> impl Strategy<Value = CallOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(console_only, file_only)| {
        let mut options = CallOptions::NONE;
        if console_only {
            options.insert(CallOption::ConsoleOnly);
        }
        if file_only {
            options.insert(CallOption::FileOnly);
        }
        options
    })
}

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (
        1970i32..2200,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1_000_000_000,
    )
        .prop_map(|(y, mo, d, h, mi, s, n)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_nano_opt(h, mi, s, n))
                .expect("valid generated datetime")
        })
}

fn record() -> impl Strategy<Value = LogRecord> {
    (
        log_type(),
        "[a-z_:0-9]{1,24}",
        "[a-zA-Z0-9 .,:!?]{0,64}",
        any::<u64>(),
        timestamp(),
    )
        .prop_map(|(log_type, trace, message, sequence, ts)| {
            LogRecord::new(log_type, trace, &message)
                .with_sequence(sequence)
                .with_timestamp(ts)
        })
}

// ============================================================================
// Template Rendering
// ============================================================================

proptest! {
    /// Rendering the same record twice gives the same text
    #[test]
    fn test_render_is_deterministic(record in record(), template in "[ -~]{0,40}") {
        prop_assert_eq!(render(&template, &record), render(&template, &record));
    }

    /// Templates without `%` are copied verbatim
    #[test]
    fn test_literal_templates_are_copied(record in record(), template in "[^%]{0,40}") {
        prop_assert_eq!(render(&template, &record), template);
    }

    /// File lines parse back to the record's sequence, type and time of day
    #[test]
    fn test_file_line_roundtrip(record in record()) {
        let line = render(FILE_TEMPLATE, &record);
        let parsed = FileLine::parse(&line).expect("rendered line parses");

        prop_assert_eq!(parsed.sequence, record.sequence);
        prop_assert_eq!(parsed.log_type, record.log_type);
        prop_assert_eq!(parsed.time, record.timestamp.time());
        prop_assert_eq!(parsed.trace, record.trace.clone());
        prop_assert_eq!(parsed.message, record.message.clone());
    }

    /// `%d` parses back to the timestamp truncated to seconds
    #[test]
    fn test_date_stamp_roundtrip(ts in timestamp()) {
        let record = LogRecord::new(LogType::Info, "t", "m").with_timestamp(ts);
        let parsed = parse_date_stamp(&render("%d", &record)).expect("stamp parses");
        prop_assert_eq!(parsed, ts.with_nanosecond(0).expect("valid"));
    }

    /// `%h` parses back to the exact time of day
    #[test]
    fn test_time_stamp_roundtrip(ts in timestamp()) {
        let record = LogRecord::new(LogType::Info, "t", "m").with_timestamp(ts);
        prop_assert_eq!(parse_time_stamp(&render("%h", &record)), Some(ts.time()));
    }

    /// Additional-stream lines carry sequence and type
    #[test]
    fn test_additional_template_header(record in record()) {
        let line = render(ADDITIONAL_TEMPLATE, &record);
        let expected = format!("[{}-{}]\t", record.sequence, record.log_type);
        prop_assert!(line.starts_with(&expected));
    }

    /// Unknown directives disappear without touching the rest
    #[test]
    fn test_unknown_directives_render_empty(
        record in record(),
        directive in "[abcefgijklopqrsuvwxzABEFGIJKLOPQRUVWXZ0-9]",
        prefix in "[a-z]{0,8}",
        suffix in "[a-z]{0,8}",
    ) {
        let template = format!("{}%{}{}", prefix, directive, suffix);
        prop_assert_eq!(render(&template, &record), format!("{}{}", prefix, suffix));
    }
}

// ============================================================================
// Message Content
// ============================================================================

proptest! {
    /// `%C` is the message exactly as given
    #[test]
    fn test_message_renders_verbatim(message in ".*") {
        let record = LogRecord::new(LogType::Info, "t", &message);
        prop_assert_eq!(render("%C", &record), message);
    }

    /// Tabs in the message do not stop a file line from parsing back
    #[test]
    fn test_file_line_roundtrip_with_tabs(
        record in record(),
        fields in prop::collection::vec("[a-z0-9 ]{0,8}", 1..5),
    ) {
        let message = fields.join("\t");
        let record = LogRecord::new(record.log_type, record.trace, &message)
            .with_sequence(record.sequence)
            .with_timestamp(record.timestamp);
        let parsed = FileLine::parse(&render(FILE_TEMPLATE, &record)).expect("rendered line parses");

        prop_assert_eq!(parsed.sequence, record.sequence);
        prop_assert_eq!(parsed.log_type, record.log_type);
        prop_assert_eq!(parsed.time, record.timestamp.time());
        prop_assert_eq!(parsed.message, message);
    }
}

// ============================================================================
// Routing
// ============================================================================

proptest! {
    /// FILE_ONLY never reaches the console
    #[test]
    fn test_file_only_never_on_console(v in verbosity(), t in log_type(), mut o in options()) {
        o.insert(CallOption::FileOnly);
        let route = Route::evaluate(v, o, t, &TypeSet::all());
        prop_assert!(!route.to_console);
    }

    /// CONSOLE_ONLY never reaches the file or streams
    #[test]
    fn test_console_only_never_on_file(v in verbosity(), t in log_type(), mut o in options()) {
        o.insert(CallOption::ConsoleOnly);
        let route = Route::evaluate(v, o, t, &TypeSet::all());
        prop_assert!(!route.to_file);
        prop_assert!(!route.to_additional);
    }

    /// The enabled type set only changes the console decision
    #[test]
    fn test_type_filter_only_affects_console(v in verbosity(), t in log_type(), o in options()) {
        let shown = Route::evaluate(v, o, t, &TypeSet::all());
        let hidden = Route::evaluate(v, o, t, &TypeSet::empty());

        prop_assert!(!hidden.to_console);
        prop_assert_eq!(shown.to_file, hidden.to_file);
        prop_assert_eq!(shown.to_additional, hidden.to_additional);
    }
}

// ============================================================================
// Log Types and Arguments
// ============================================================================

proptest! {
    /// Display names parse back to the same type
    #[test]
    fn test_log_type_str_roundtrip(t in log_type()) {
        prop_assert_eq!(t.to_str().parse::<LogType>(), Ok(t));
        prop_assert_eq!(t.to_string(), t.to_str());
    }

    /// Fragments are joined with single spaces, options never leak into text
    #[test]
    fn test_partition_args(fragments in prop::collection::vec("[a-z]{1,6}", 0..6), console_only in any::<bool>()) {
        let mut args: Vec<LogArg> = fragments.iter().map(|f| f.as_str().into_log_arg()).collect();
        if console_only {
            args.insert(args.len() / 2, CallOption::ConsoleOnly.into_log_arg());
        }

        let (message, options) = session_logger::core::partition_args(args);
        prop_assert_eq!(message, fragments.join(" "));
        prop_assert_eq!(options.contains(CallOption::ConsoleOnly), console_only);
    }
}
