//! Tests for logger instances built with the builder.

use regex::Regex;
use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use termlog::fmt::ColorMode;
use termlog::{Arg, Level, Logger, SharedBuffer, ToArg, WriterOutput};

fn capture(level: Level) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .level(level)
        .output(WriterOutput::new(buffer.clone()))
        .exit_hook(|_| {})
        .build();
    (logger, buffer)
}

fn line_pattern(label: &str, message: &str) -> Regex {
    Regex::new(&format!(
        r"^\d{{4}}/\d{{2}}/\d{{2}} \d{{2}}:\d{{2}}:\d{{2}} logger\.rs:\d+: \[{}\] {}\n$",
        regex::escape(label),
        regex::escape(message)
    ))
    .unwrap()
}

fn call(logger: &Logger, level: Level, args: &[Arg<'_>]) {
    match level {
        Level::Debug => logger.debug(args),
        Level::Info => logger.info(args),
        Level::Warning => logger.warning(args),
        Level::Error => logger.error(args),
    }
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.level(), Level::Debug);
}

#[test]
fn builder_with_level() {
    let logger = Logger::builder().level(Level::Warning).build();
    assert_eq!(logger.level(), Level::Warning);
}

#[test]
fn set_level_changes_threshold() {
    let (logger, _) = capture(Level::Debug);
    logger.set_level(Level::Info);
    assert_eq!(logger.level(), Level::Info);
    logger.set_level(Level::Debug);
    assert_eq!(logger.level(), Level::Debug);
}

#[test]
fn set_level_from_name_mapping() {
    let (logger, _) = capture(Level::Debug);
    let cases = [
        ("info", Level::Info),
        ("i", Level::Info),
        ("warning", Level::Warning),
        ("warn", Level::Warning),
        ("w", Level::Warning),
        ("debug", Level::Debug),
        ("d", Level::Debug),
        ("error", Level::Error),
        ("", Level::Error),
        ("xyz", Level::Error),
    ];
    for (name, expected) in cases {
        logger.set_level_from_name(name);
        assert_eq!(logger.level(), expected, "name {name:?}");
    }
}

#[test]
fn below_threshold_writes_nothing() {
    for threshold in Level::all() {
        for level in Level::all().into_iter().filter(|l| *l < threshold) {
            let (logger, buffer) = capture(threshold);
            call(&logger, level, &[Arg::Str("dropped")]);
            assert!(buffer.is_empty(), "{level} at threshold {threshold}");
        }
    }
}

#[test]
fn at_or_above_threshold_writes_one_line() {
    for threshold in Level::all() {
        for level in Level::all().into_iter().filter(|l| *l >= threshold) {
            let (logger, buffer) = capture(threshold);
            call(&logger, level, &[Arg::Str("kept")]);
            let output = buffer.contents();
            assert!(
                line_pattern(level.label(), "kept").is_match(&output),
                "{level} at threshold {threshold}: {output:?}"
            );
        }
    }
}

/// Counts how often it is rendered.
struct Probe(AtomicUsize);

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fetch_add(1, Ordering::SeqCst);
        f.write_str("probe")
    }
}

#[test]
fn filtered_call_does_not_format_arguments() {
    let (logger, buffer) = capture(Level::Error);
    let probe = Probe(AtomicUsize::new(0));

    logger.info(&[Arg::Str("value %v"), Arg::display(&probe)]);
    assert_eq!(probe.0.load(Ordering::SeqCst), 0);
    assert!(buffer.is_empty());

    logger.error(&[Arg::Str("value %v"), Arg::display(&probe)]);
    assert_eq!(probe.0.load(Ordering::SeqCst), 1);
    assert!(buffer.contents().contains("[ERROR] value probe"));
}

#[test]
fn error_argument_renders_description() {
    let (logger, buffer) = capture(Level::Debug);
    let err = std::io::Error::other("debug error");
    logger.error(&[err.to_arg()]);
    assert!(line_pattern("ERROR", "debug error").is_match(&buffer.contents()));
}

#[test]
fn template_arguments() {
    let (logger, buffer) = capture(Level::Debug);
    logger.debug(&[Arg::Str("Debugging %s at %d%%"), Arg::Str("progress"), Arg::Int(50)]);
    assert!(line_pattern("DEBUG", "Debugging progress at 50%").is_match(&buffer.contents()));
}

#[test]
fn empty_call_writes_empty_message() {
    let (logger, buffer) = capture(Level::Debug);
    logger.warning(&[]);
    assert!(line_pattern("WARNING", "").is_match(&buffer.contents()));
}

#[test]
fn location_is_the_call_site() {
    let (logger, buffer) = capture(Level::Debug);
    logger.info(&[Arg::Str("here")]);
    let expected = line!() - 1;
    assert!(
        buffer.contents().contains(&format!(" logger.rs:{expected}: [INFO] here")),
        "{}",
        buffer.contents()
    );
}

#[test]
fn colors_wrap_label_and_message() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .output(WriterOutput::new(buffer.clone()).colors(ColorMode::Always))
        .build();

    logger.info(&[Arg::Str("hi")]);
    logger.error(&[Arg::Str("bad")]);

    let output = buffer.contents();
    assert!(output.contains(": \x1b[32m[INFO] hi\x1b[0m\n"), "{output:?}");
    assert!(output.contains(": \x1b[31m[ERROR] bad\x1b[0m\n"), "{output:?}");
}

#[test]
fn auto_colors_stay_off_for_writers() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .output(WriterOutput::new(buffer.clone()).colors(ColorMode::Auto))
        .build();
    logger.info(&[Arg::Str("plain")]);
    assert!(!buffer.contents().contains('\x1b'));
}

#[test]
fn error_f_logs_then_calls_exit_hook() {
    let buffer = SharedBuffer::new();
    let status = Arc::new(AtomicI32::new(0));
    let seen = Arc::clone(&status);
    let logger = Logger::builder()
        .output(WriterOutput::new(buffer.clone()))
        .exit_hook(move |code| seen.store(code, Ordering::SeqCst))
        .build();

    logger.error_f(&[Arg::Str("fatal: %s"), Arg::Str("disk full")]);

    assert_eq!(status.load(Ordering::SeqCst), termlog::FATAL_EXIT_CODE);
    assert_ne!(termlog::FATAL_EXIT_CODE, 0);
    let output = buffer.contents();
    assert_eq!(output.lines().count(), 1);
    assert!(line_pattern("ERROR", "fatal: disk full").is_match(&output));
}

#[test]
fn error_f_logs_at_highest_threshold() {
    let (logger, buffer) = capture(Level::Error);
    logger.error_f(&[Arg::Str("still shown")]);
    assert!(line_pattern("ERROR", "still shown").is_match(&buffer.contents()));
}

#[test]
fn set_exit_hook_replaces_hook() {
    let (logger, _) = capture(Level::Debug);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    logger.set_exit_hook(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    logger.error_f(&[]);
    logger.error_f(&[]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn set_output_redirects_following_lines() {
    let (logger, first) = capture(Level::Debug);
    logger.info(&[Arg::Str("one")]);

    let second = SharedBuffer::new();
    logger.set_output(WriterOutput::new(second.clone()));
    logger.info(&[Arg::Str("two")]);

    assert!(first.contents().contains("one"));
    assert!(!first.contents().contains("two"));
    assert!(second.contents().contains("two"));
}

#[test]
fn concurrent_writes_do_not_interleave() {
    let (logger, buffer) = capture(Level::Debug);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    logger.info(&[Arg::Str("worker %d line %d"), Arg::Int(worker), Arg::Int(i)]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let shape = Regex::new(
        r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} logger\.rs:\d+: \[INFO\] worker \d line \d+$",
    )
    .unwrap();
    let output = buffer.contents();
    assert_eq!(output.lines().count(), 800);
    for line in output.lines() {
        assert!(shape.is_match(line), "{line:?}");
    }
}

#[test]
fn level_change_is_seen_by_other_threads() {
    let (logger, buffer) = capture(Level::Debug);
    let logger = Arc::new(logger);
    logger.set_level(Level::Warning);

    let remote = Arc::clone(&logger);
    thread::spawn(move || {
        remote.info(&[Arg::Str("hidden")]);
        remote.warning(&[Arg::Str("visible")]);
    })
    .join()
    .unwrap();

    let output = buffer.contents();
    assert!(!output.contains("hidden"));
    assert!(output.contains("[WARNING] visible"));
}
